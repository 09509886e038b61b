//! Catalog layout configuration
//!
//! The catalog lives at a fixed relative layout inside the project tree:
//! one subdirectory per service, each holding a single declaration file.
//! `CatalogConfig` carries those layout constants so the pipeline can be
//! pointed at synthetic trees in tests.

use std::path::PathBuf;

/// Relative path from the project base to the service catalog directory
pub const SERVICES_DIR: &str = "StreamingCommunity/Api/Service";

/// Declaration file expected inside each service directory
pub const DECLARATION_FILE: &str = "__init__.py";

/// Service directories starting with this prefix are not catalog entries
pub const RESERVED_PREFIX: &str = "__";

/// Relative path from the project base to the generated table
pub const OUTPUT_PATH: &str = ".github/doc/site.md";

/// Layout of the service catalog relative to a project base path
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Directory containing one subdirectory per service
    pub services_dir: PathBuf,

    /// File name of the per-service declaration file
    pub declaration_file: String,

    /// Directory name prefix marking non-service entries
    pub reserved_prefix: String,

    /// Where the rendered table is written
    pub output_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            services_dir: PathBuf::from(SERVICES_DIR),
            declaration_file: DECLARATION_FILE.to_string(),
            reserved_prefix: RESERVED_PREFIX.to_string(),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.services_dir,
            PathBuf::from("StreamingCommunity/Api/Service")
        );
        assert_eq!(config.declaration_file, "__init__.py");
        assert_eq!(config.reserved_prefix, "__");
        assert_eq!(config.output_path, PathBuf::from(".github/doc/site.md"));
    }
}
