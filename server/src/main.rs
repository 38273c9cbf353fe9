#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is fine; variables may come from the real environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    tracing::info!(
        register_latency = ?config.register_latency,
        sign_in_latency = ?config.sign_in_latency,
        "mock latencies configured"
    );

    let port = config.port;
    let app = routes::app(state::AppState::new(config)).map_err(ServerError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "pulsespend listening");
    axum::serve(listener, app).await?;
    Ok(())
}
