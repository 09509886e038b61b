//! Pipeline orchestration
//!
//! A single linear pass: discovery, extraction, deprecated filtering,
//! rendering, write. Per-file problems are contained during extraction;
//! the only fatal error is a failure to write the output file.

use crate::catalog::record::ServiceRecord;
use crate::catalog::{discovery, extract, filter};
use crate::config::CatalogConfig;
use crate::fs::FileSystem;
use crate::output::{table, writer};
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to write output file {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// Outcome of one pipeline run, for diagnostics and summary output
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub base_path: PathBuf,
    /// Declaration files discovered in the catalog
    pub discovered: usize,
    /// Services excluded for being deprecated
    pub deprecated_excluded: usize,
    /// Rows that went into the rendered table
    pub rows: usize,
    /// Output file written, if any
    pub output: Option<PathBuf>,
    /// Check mode only: the committed file is missing or stale
    pub drift: bool,
}

impl RunSummary {
    fn new(base: &Path, discovered: usize) -> Self {
        Self {
            base_path: base.to_path_buf(),
            discovered,
            deprecated_excluded: 0,
            rows: 0,
            output: None,
            drift: false,
        }
    }
}

/// Runs the catalog pipeline against a file system
pub struct Generator<F: FileSystem> {
    fs: F,
    config: CatalogConfig,
}

impl<F: FileSystem> Generator<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            config: CatalogConfig::default(),
        }
    }

    pub fn with_config(fs: F, config: CatalogConfig) -> Self {
        Self { fs, config }
    }

    /// Generates the table and writes it to the configured output path.
    ///
    /// Zero discovered services short-circuits without writing anything;
    /// that is a logged condition, not an error.
    pub fn generate(&self, base: &Path) -> Result<RunSummary, GenerateError> {
        let (mut summary, rendered) = match self.scan_and_render(base) {
            Some(result) => result,
            None => return Ok(RunSummary::new(base, 0)),
        };

        let output_path = base.join(&self.config.output_path);
        writer::write_rendered(&self.fs, &output_path, &rendered).map_err(|source| {
            GenerateError::Write {
                path: output_path.clone(),
                source,
            }
        })?;

        info!(path = %output_path.display(), "wrote services table");
        summary.output = Some(output_path);
        Ok(summary)
    }

    /// Renders in memory and compares against the committed output file,
    /// ignoring the timestamp line. Writes nothing; `drift` is set when
    /// the file is missing or differs.
    pub fn check(&self, base: &Path) -> Result<RunSummary, GenerateError> {
        let (mut summary, rendered) = match self.scan_and_render(base) {
            Some(result) => result,
            None => return Ok(RunSummary::new(base, 0)),
        };

        let output_path = base.join(&self.config.output_path);
        summary.drift = match self.fs.read_to_string(&output_path) {
            Ok(existing) => !table::matches_ignoring_timestamp(&existing, &rendered),
            Err(_) => true,
        };

        if summary.drift {
            info!(path = %output_path.display(), "services table is out of date");
        }
        Ok(summary)
    }

    /// Shared front half of both modes. Returns `None` when discovery
    /// finds no services.
    fn scan_and_render(&self, base: &Path) -> Option<(RunSummary, String)> {
        info!(base = %base.display(), "scanning service catalog");

        let files = discovery::find_declaration_files(&self.fs, base, &self.config);
        info!(count = files.len(), "discovered service declaration files");

        if files.is_empty() {
            info!("no service declaration files found");
            return None;
        }

        let records: Vec<ServiceRecord> = files
            .iter()
            .map(|file| extract::extract_service(&self.fs, file))
            .collect();

        let (kept, excluded) = filter::partition_active(records);
        info!(excluded, "excluded deprecated services");

        let mut summary = RunSummary::new(base, files.len());
        summary.deprecated_excluded = excluded;
        summary.rows = kept.len();

        let rendered = table::render_table(&kept, Local::now());
        Some((summary, rendered))
    }
}
