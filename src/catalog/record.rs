//! Extracted per-service attributes

/// Placeholder shown for string attributes a service never declared
pub const PLACEHOLDER: &str = "N/A";

/// Attributes extracted from one service declaration file
///
/// Every discovered service directory yields exactly one record, even when
/// the declaration file is unreadable or declares nothing. String fields
/// are `None` when the attribute was absent and render as [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    /// Directory name of the service
    pub name: String,
    pub stream_type: Option<String>,
    pub supports_drm: bool,
    /// Filter criterion only, never rendered
    pub deprecated: bool,
    pub max_resolution: Option<String>,
    pub region: Option<String>,
}

impl ServiceRecord {
    /// Record with all attributes at their defaults
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stream_type: None,
            supports_drm: false,
            deprecated: false,
            max_resolution: None,
            region: None,
        }
    }

    pub fn stream_type_display(&self) -> &str {
        self.stream_type.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn max_resolution_display(&self) -> &str {
        self.max_resolution.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn region_display(&self) -> &str {
        self.region.as_deref().unwrap_or(PLACEHOLDER)
    }
}
