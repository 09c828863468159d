//! Calculator microservice binary.

use clap::Parser;

use calculator_server::logging::init_tracing;
use calculator_server::{run_server, AppState, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (config, source) = args.load_config()?;

    let _log_guards = init_tracing(&config, args.verbose)?;

    tracing::info!("Calculator server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("{}", source);
    if config.file_logging {
        tracing::info!("Writing logs to {}", config.log_dir.display());
    }

    let state = AppState::from_config(&config);
    run_server(&config, state).await
}
