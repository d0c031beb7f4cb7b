use std::sync::Arc;

use mailpilot::config::AppConfig;
use mailpilot::llm::create_provider;
use mailpilot::server::{self, AppState};
use mailpilot::store::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("📬 MailPilot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: http://0.0.0.0:{}/api", config.port);
    eprintln!("   Database: {}", config.db_path);

    let store = Store::new_local(std::path::Path::new(&config.db_path))
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Failed to open database at {}: {}", config.db_path, e);
            std::process::exit(1);
        });
    store.seed_if_empty().await?;

    let llm = create_provider(&config.llm);
    eprintln!("   LLM: {}\n", llm.name());

    let state = AppState::new(Arc::new(store), llm);
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Server started");
    axum::serve(listener, app).await?;

    Ok(())
}
