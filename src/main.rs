use anyhow::Context;
use profile_photo_enhancer::{server, Config, Enhancer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(true))
        .init();

    let config = Config::from_env()?;
    let enhancer = Enhancer::new(config.gemini_client());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(model = %config.model, "🚀 Server running on http://{}", config.bind_addr);
    tracing::info!("📸 Open in your browser to start enhancing!");

    server::serve(listener, enhancer)
        .await
        .context("server error")
}
