use super::sign::{SigningParams, sign_request};
use crate::{Error, Result, config::SageMakerConfig};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::debug;

const SERVICE: &str = "sagemaker";
const CONTENT_TYPE_JSON: &str = "application/json";

/// Seam between the gateway and the managed inference endpoint. Implementors
/// take the serialized payload and return the endpoint's raw response bytes.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn invoke(&self, body: String) -> Result<Vec<u8>>;
}

/// Calls a SageMaker runtime endpoint over its InvokeEndpoint HTTP surface.
pub struct SageMakerRuntimeClient {
    client: reqwest::Client,
    config: SageMakerConfig,
    base_url: String,
}

impl SageMakerRuntimeClient {
    pub fn new(config: SageMakerConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| format!("https://runtime.sagemaker.{}.amazonaws.com", config.region))
            .trim_end_matches('/')
            .to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    fn invocations_url(&self) -> String {
        format!(
            "{}/endpoints/{}/invocations",
            self.base_url, self.config.endpoint_name
        )
    }
}

#[async_trait]
impl InferenceClient for SageMakerRuntimeClient {
    async fn invoke(&self, body: String) -> Result<Vec<u8>> {
        let url = self.invocations_url();
        let parsed = reqwest::Url::parse(&url)
            .map_err(|e| Error::inference(format!("invalid endpoint URL {url}: {e}")))?;
        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => return Err(Error::inference(format!("endpoint URL {url} has no host"))),
        };

        let signed = sign_request(
            &SigningParams {
                access_key_id: &self.config.access_key_id,
                secret_access_key: &self.config.secret_access_key,
                region: &self.config.region,
                service: SERVICE,
            },
            "POST",
            &host,
            parsed.path(),
            CONTENT_TYPE_JSON,
            body.as_bytes(),
            Utc::now(),
        );

        debug!("Invoking endpoint {}", self.config.endpoint_name);

        let res = self
            .client
            .post(url)
            .header("content-type", CONTENT_TYPE_JSON)
            .header("x-amz-date", &signed.amz_date)
            .header("authorization", &signed.authorization)
            .body(body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(Error::inference(format!(
                "endpoint returned {status}: {body}"
            )));
        }

        Ok(res.bytes().await?.to_vec())
    }
}
