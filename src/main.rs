mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ConsoleConfig::from_env().expect("invalid console configuration");
    match config.backend_url.as_deref() {
        Some(url) => tracing::info!(backend = url, "api pass-through enabled"),
        None => tracing::warn!("CONSOLE_BACKEND_URL not set; /api pass-through disabled"),
    }

    let state = state::AppState::new(&config).expect("http client init failed");
    let app = routes::app(state).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "sms-console listening");
    axum::serve(listener, app).await.expect("server failed");
}
