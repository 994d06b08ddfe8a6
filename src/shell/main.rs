use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use voter_api::modules::voters::adapters::outbound::voter_store_in_memory::InMemoryVoterStore;
use voter_api::shell::config::Config;
use voter_api::shell::http::router;
use voter_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // In-memory store for the lifetime of the process
    let voters = Arc::new(InMemoryVoterStore::new());
    let app = router(AppState::new(voters));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Voter API: http://{}/voters", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
