//! PersonStore Engine - Main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use personstore_engine::{
    cli::{self, Command},
    infrastructure::settings::EngineConfig,
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "personstore_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = Command::parse(std::env::args().skip(1))?;

    let config = EngineConfig::from_env();
    tracing::debug!(
        database_url = %config.database_url,
        max_connections = config.max_connections,
        timeout_ms = u64::try_from(config.operation_timeout.as_millis()).unwrap_or(u64::MAX),
        "Loaded configuration"
    );

    let app = App::from_config(&config);
    let output = cli::run(&app, command).await?;
    println!("{output}");

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
