//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, ConfigSource, ServerConfig};

/// Calculator microservice: arithmetic over HTTP query parameters
#[derive(Parser, Debug, Clone)]
#[command(name = "calculator-server")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML configuration file (ignored if it does not exist)
    #[arg(short, long, default_value = "config/calculator.toml")]
    pub config: PathBuf,

    /// Host address to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log to stdout only
    #[arg(long)]
    pub no_file_logs: bool,
}

impl Args {
    /// Merge defaults, the config file, `PORT` and flags, in that order.
    pub fn load_config(&self) -> Result<(ServerConfig, ConfigSource), ConfigError> {
        let (config, source) = ServerConfig::load_or_default(&self.config)?;
        let mut config = config.with_overrides(self.host.clone(), self.port);
        if self.no_file_logs {
            config.file_logging = false;
        }
        Ok((config, source))
    }
}
