// Catalog admin client
//
// Client for the security-equipment catalog backend:
// - Authenticated REST access with session purge on 401
// - Product and enquiry filtering for list pages
// - CSV export of enquiries
// - Local SQLite store for the credential between runs

use clap::Parser;
use std::sync::Arc;

// Performance logging macros - exported for use by other modules
#[macro_use]
pub mod macros;

pub mod globals;

pub mod api;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod database;
pub mod export;
pub mod models;
pub mod state;

use cli::Cli;
use config::AppConfig;
use state::AppState;

/// Entry point of the `catalog` binary. Returns the process exit code.
pub fn run() -> i32 {
    // Initialize env_logger to output to stderr (reads RUST_LOG env var)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().with_overrides(cli.api_url, cli.db_path);

    let state = match AppState::init(&config, Arc::new(globals::request_redirect)) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to initialize: {:#}", e);
            return 1;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start async runtime: {}", e);
            return 1;
        }
    };

    let sign_in = cli::is_sign_in(&cli.command);
    let result = runtime.block_on(cli::dispatch(&state, cli.command));

    let expired_route = if globals::is_session_expired() {
        Some(globals::take_redirect().unwrap_or_else(|| api::SIGN_IN_ROUTE.to_string()))
    } else {
        None
    };

    let (code, message) = cli::outcome(result, sign_in, expired_route);
    if let Some(message) = message {
        eprintln!("{}", message);
    }
    code
}
