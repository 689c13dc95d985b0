pub mod handlers;
pub mod types;

pub use handlers::AppState;

use crate::{Result, config::Config, sagemaker::SageMakerRuntimeClient};
use axum::{
    Router,
    response::Html,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

static INDEX_HTML: &str = include_str!("index.html");

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/invokeSageMaker", post(handlers::invoke_sagemaker))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn run(config: Config) -> Result<()> {
    let sagemaker = SageMakerRuntimeClient::new(config.sagemaker.clone())?;
    let state = AppState {
        sagemaker: Arc::new(sagemaker),
    };
    let app = router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
