//! Calculator microservice.
//!
//! This crate provides the HTTP boundary for [`calculator_core`].
//!
//! ## Features
//!
//! - `GET /add`, `/subtract`, `/multiply`, `/divide`, `/power`, `/modulo`
//!   taking `num1` and `num2` query parameters
//! - `GET /sqrt` taking `num1`
//! - `GET /health`
//! - Request logging (method, URI, client IP, headers, body)
//! - JSON log files (`combined.log`, `error.log`)
//! - Configuration via TOML file, `PORT` and command-line flags
//!
//! ## Usage
//!
//! ```bash
//! # Start on the default port (3000)
//! calculator-server
//!
//! # Custom host and port, stdout logging only
//! calculator-server --host 127.0.0.1 --port 8080 --no-file-logs
//!
//! curl 'http://localhost:3000/power?num1=2&num2=10'
//! # {"result":1024}
//! ```

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod dto;
pub mod error;
pub mod journal;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use cli::Args;
pub use config::{ConfigSource, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use journal::{CalculationJournal, MemoryJournal, TracingJournal};
pub use server::{create_router, run_server, with_middleware};
pub use state::AppState;
