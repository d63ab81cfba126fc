pub mod cors;
pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::ScienceRequest;

use crate::{Result, config::Config, exam::Examiner, llm::OpenAiClient};
use axum::{Router, middleware, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const ROUTE: &str = "/api/science-eq";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            ROUTE,
            post(handlers::science_eq).options(handlers::preflight),
        )
        .layer(middleware::from_fn(cors::allow_origin_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let examiner = match config.llm.resolve_api_key() {
        Some(api_key) => {
            let client = OpenAiClient::new(&config.llm, api_key);
            Some(Examiner::new(Arc::new(client)))
        }
        None => {
            warn!(
                "{} is not set; every POST will fail until it is configured",
                config.llm.api_key_env
            );
            None
        }
    };

    let app = router(AppState::new(examiner, config.llm.api_key_env.clone()));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}{}", addr, ROUTE);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
