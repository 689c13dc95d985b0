mod client;
mod sign;

pub use client::{InferenceClient, SageMakerRuntimeClient};
