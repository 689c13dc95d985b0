use super::types::{ErrorResponse, InvocationPayload};
use crate::sagemaker::InferenceClient;
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// The only failure detail the caller ever sees; everything else stays in the
/// server log.
pub const INVOKE_FAILED: &str = "Failed to invoke SageMaker endpoint.";

#[derive(Clone)]
pub struct AppState {
    pub sagemaker: Arc<dyn InferenceClient>,
}

pub async fn invoke_sagemaker(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    info!("Relaying inference request");

    let payload = InvocationPayload {
        inputs: body.get("inputs").cloned(),
    };

    match relay(state.sagemaker.as_ref(), &payload).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Failed to invoke SageMaker endpoint: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: INVOKE_FAILED.to_string(),
                }),
            ))
        }
    }
}

async fn relay(client: &dyn InferenceClient, payload: &InvocationPayload) -> crate::Result<Value> {
    let body = serde_json::to_string(payload)?;
    let raw = client.invoke(body).await?;
    let text = String::from_utf8(raw)?;
    Ok(serde_json::from_str(&text)?)
}
