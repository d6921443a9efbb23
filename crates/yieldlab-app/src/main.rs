use yieldlab_infrastructure::config::ServerConfig;
use yieldlab_lib::presentation::{bootstrap::build_app_state, http};

fn init_logging(config: &ServerConfig) {
    match yieldlab_infrastructure::logging::init_logger(config.log_dir.clone()) {
        Ok(_) => {
            tracing::info!("🚀 YieldLab starting...");
            tracing::info!(
                "📝 File logging initialized at: {}",
                config.log_dir.display()
            );
        }
        Err(e) => {
            eprintln!("⚠️  Failed to initialize file logging: {}", e);
            eprintln!("⚠️  Falling back to console-only logging");

            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .with_target(true)
                .with_thread_ids(true)
                .try_init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    init_logging(&config);

    let state = build_app_state(&config).await?;
    http::serve(state).await?;

    Ok(())
}
