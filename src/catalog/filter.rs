//! Deprecated-service filtering

use crate::catalog::record::ServiceRecord;

/// Splits extracted records into the kept set and a count of deprecated
/// ones. Deprecated services never reach the renderer; the count is kept
/// for diagnostics only.
pub fn partition_active(records: Vec<ServiceRecord>) -> (Vec<ServiceRecord>, usize) {
    let total = records.len();
    let kept: Vec<ServiceRecord> = records.into_iter().filter(|r| !r.deprecated).collect();
    let excluded = total - kept.len();
    (kept, excluded)
}
