use serde::Serialize;
use serde_json::Value;

/// Payload forwarded to the inference endpoint. Serializes to `{}` when the
/// incoming body carried no `inputs` field.
#[derive(Debug, Serialize)]
pub struct InvocationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_payload_with_inputs() {
        let payload = InvocationPayload {
            inputs: Some(json!("Hello")),
        };

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"inputs":"Hello"}"#
        );
    }

    #[test]
    fn test_payload_without_inputs_is_empty_object() {
        let payload = InvocationPayload { inputs: None };

        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }
}
