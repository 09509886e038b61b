//! Structured logging setup
//!
//! Diagnostics go to stderr through the `tracing` ecosystem so that stdout
//! stays reserved for the run summary. Initialization happens once per
//! process; the level comes from the CLI flags, falling back to the
//! `SVCTAB_LOG_LEVEL` environment variable, with `RUST_LOG` taking
//! precedence over both when set.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

pub fn init_from_args(log_level: Option<&str>, verbose: bool, quiet: bool) {
    INIT.call_once(|| {
        let level = if let Some(level_str) = log_level {
            parse_level(level_str)
        } else if verbose {
            Level::DEBUG
        } else if quiet {
            Level::ERROR
        } else {
            let level_str = env::var("SVCTAB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
            parse_level(&level_str)
        };

        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            filter = filter.add_directive(format!("svctab={}", level).parse().unwrap());
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}
