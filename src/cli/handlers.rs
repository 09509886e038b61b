//! Command handlers
//!
//! Each handler runs one command to completion and returns the process
//! exit code. Recoverable conditions are logged inside the pipeline; only
//! an output write failure (or drift in check mode) is surfaced as a
//! nonzero exit.

use crate::catalog::generator::Generator;
use crate::cli::commands::GenerateArgs;
use crate::cli::output::format_summary;
use crate::config::CatalogConfig;
use crate::fs::RealFileSystem;
use std::path::PathBuf;
use tracing::error;

pub fn handle_generate(args: &GenerateArgs, quiet: bool) -> i32 {
    let base = args
        .base_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = CatalogConfig::default();
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }

    let generator = Generator::with_config(RealFileSystem::new(), config);
    let result = if args.check {
        generator.check(&base)
    } else {
        generator.generate(&base)
    };

    let summary = match result {
        Ok(summary) => summary,
        Err(err) => {
            error!(error = %err, "generation failed");
            return 1;
        }
    };

    if !quiet {
        match format_summary(&summary, args.format.into()) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                error!(error = %err, "failed to format run summary");
                return 1;
            }
        }
    }

    if args.check && summary.drift {
        1
    } else {
        0
    }
}
