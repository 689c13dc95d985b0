use async_trait::async_trait;
use sagemaker_qa::{Error, Result, sagemaker::InferenceClient};
use std::sync::{Arc, Mutex};

/// Mock inference client for testing
pub struct MockInferenceClient {
    pub responses: Arc<Mutex<Vec<Vec<u8>>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<Vec<u8>>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn invoke(&self, body: String) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(body);

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::inference("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}
