//! Native rendition of the browser question form: the same two pieces of
//! local state (question text, last received response) with a submit that
//! returns a typed result instead of swallowing failures into a log.

use crate::{Error, Result};
use serde_json::{Value, json};
use tracing::warn;

pub struct QuestionForm {
    gateway_url: String,
    client: reqwest::Client,
    question: String,
    response: Option<Value>,
}

impl QuestionForm {
    /// `gateway_url` is the base URL of the gateway server, without the API
    /// path.
    pub fn new(gateway_url: impl Into<String>) -> Self {
        let gateway_url = gateway_url.into().trim_end_matches('/').to_string();
        Self {
            gateway_url,
            client: reqwest::Client::new(),
            question: String::new(),
            response: None,
        }
    }

    /// Replaces the stored question text. No validation, no length limit.
    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// The most recently completed response, if any.
    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    /// Submits the current question (which may be empty) to the gateway. On
    /// success the stored response is replaced with the parsed body; on
    /// network failure, non-2xx status or malformed JSON the previous
    /// response is left untouched and the error is returned. The question
    /// text is kept either way.
    pub async fn submit(&mut self) -> Result<&Value> {
        match self.post_question().await {
            Ok(value) => Ok(self.response.insert(value)),
            Err(e) => {
                warn!("API call failed: {}", e);
                Err(e)
            }
        }
    }

    async fn post_question(&self) -> Result<Value> {
        let url = format!("{}/api/invokeSageMaker", self.gateway_url);
        let res = self
            .client
            .post(&url)
            .json(&json!({ "question": self.question }))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(Error::inference(format!(
                "gateway returned {}",
                res.status()
            )));
        }

        Ok(res.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_form_is_empty() {
        let form = QuestionForm::new("http://localhost:3000");

        assert_eq!(form.question(), "");
        assert_eq!(form.response(), None);
    }

    #[test]
    fn test_set_question_replaces_text() {
        let mut form = QuestionForm::new("http://localhost:3000/");

        form.set_question("first");
        form.set_question("second");

        assert_eq!(form.question(), "second");
    }
}
