mod config;
mod routes;

use thiserror::Error;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Router(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Optional .env for local runs.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cfg = config::ServerConfig::from_env()?;
    let app = routes::app().map_err(StartupError::Router)?;
    let listener = tokio::net::TcpListener::bind(cfg.addr).await?;

    tracing::info!(addr = %cfg.addr, "lang-portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}
