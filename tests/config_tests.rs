use pretty_assertions::assert_eq;
use sagemaker_qa::config;
use tempfile::TempDir;

const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: 127.0.0.1
  port: 8080
  logs:
    level: debug

sagemaker:
  region: us-east-1
  access_key_id: AKIATEST
  secret_access_key: test-secret
  endpoint_name: your-huggingface-llama2-endpoint
"#;

// Both cases live in one test because they share the CONFIG_PATH variable
// and tests in a binary run concurrently.
#[tokio::test]
async fn test_load_reads_the_file_named_by_config_path() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("nope.yaml");
    // SAFETY: no other test in this binary touches the environment.
    unsafe { std::env::set_var("CONFIG_PATH", &missing) };
    assert!(config::load().await.is_err());

    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, SAMPLE_CONFIG_YAML).await.unwrap();
    unsafe { std::env::set_var("CONFIG_PATH", &path) };

    let config = config::load().await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(
        config.sagemaker.endpoint_name,
        "your-huggingface-llama2-endpoint"
    );
}
