use employee_api::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!("Starting employee-api (env: {})", config.environment);

    let state = ServerState::initialize(&config).await?;
    Server::with_state(config, state).run().await?;

    Ok(())
}
