use alvoid_survey::config::ServerConfig;
use alvoid_survey::http::assets::StaticAssets;
use alvoid_survey::http::router::{ShutdownSignal, build_router};
use alvoid_survey::survey::store::SurveyStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let program = std::env::args().next().unwrap_or_else(|| "alvoid-survey".to_string());
            eprintln!("{}", e);
            eprintln!("{}", ServerConfig::usage(&program));
            std::process::exit(1);
        }
    };

    // 1. Survey store (loads or creates the backup):
    let store = SurveyStore::open(&config.backup_path).await?;
    tracing::info!("Using survey backup {}", store.backup_path().display());

    // 2. HTTP router:
    let assets = StaticAssets::new(&config.static_dir);
    tracing::info!("Serving static files from {}", assets.root().display());
    let shutdown = ShutdownSignal::new();
    let app = build_router(store, assets, shutdown.clone());

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Survey server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    let stop = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = stop.wait() => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received Ctrl+C, shutting down");
                }
            }
        })
        .await?;

    if shutdown.is_triggered() {
        anyhow::bail!("survey backup could not be written; stopped to avoid losing responses");
    }

    Ok(())
}
