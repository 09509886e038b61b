//! Attribute extraction from service declaration files
//!
//! Declaration files are never parsed as a grammar. Each attribute is pulled
//! out with its own regex search over the raw text, so unrelated or
//! partially malformed surrounding content does not affect the other
//! attributes. A field whose pattern never matches keeps its default.

use crate::catalog::record::ServiceRecord;
use crate::fs::FileSystem;
use regex::Regex;
use std::path::Path;
use tracing::warn;

const STREAM_TYPE_PATTERN: &str = r#"_stream_type\s*=\s*["'](\w+)["']"#;
const DRM_PATTERN: &str = r"_drm\s*=\s*(True|False)";
const DEPRECATE_PATTERN: &str = r"_deprecate\s*=\s*(True|False)";
const MAX_RESOLUTION_PATTERN: &str = r#"_maxResolution\s*=\s*["']([\w\s]+)["']"#;
const REGION_PATTERN: &str = r#"_region\s*=\s*["']([\w\s]+)["']"#;

/// Extracts one [`ServiceRecord`] from a declaration file.
///
/// The service name is the declaration file's parent directory name. A
/// read failure is logged and produces an all-default record; it never
/// aborts the run.
pub fn extract_service<F: FileSystem>(fs: &F, declaration: &Path) -> ServiceRecord {
    let name = declaration
        .parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("")
        .to_string();

    let mut record = ServiceRecord::with_defaults(name);

    let content = match fs.read_to_string(declaration) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %declaration.display(), error = %err, "failed to read declaration file");
            return record;
        }
    };

    record.stream_type = capture_first(&content, STREAM_TYPE_PATTERN);
    record.max_resolution = capture_first(&content, MAX_RESOLUTION_PATTERN);
    record.region = capture_first(&content, REGION_PATTERN);

    if let Some(token) = capture_first(&content, DRM_PATTERN) {
        record.supports_drm = token == "True";
    }
    if let Some(token) = capture_first(&content, DEPRECATE_PATTERN) {
        record.deprecated = token == "True";
    }

    record
}

/// First capture group of the first match, if any
fn capture_first(content: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).expect("valid regex");
    re.captures(content).map(|cap| cap[1].to_string())
}
