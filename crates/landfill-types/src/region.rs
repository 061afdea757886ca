//! Region code handling
//!
//! Codes are compared after trimming and ASCII-uppercasing, so `us-ca`,
//! ` US-CA ` and `US-CA` name the same region. Policy and schedule tables fall
//! back to [`DEFAULT_REGION`]; the facility catalog falls back to
//! [`FALLBACK_FACILITY_REGION`] because it has no generic entry.

/// Key of the generic policy and schedule records
pub const DEFAULT_REGION: &str = "default";

/// Region whose facilities are listed when the requested one is unknown
pub const FALLBACK_FACILITY_REGION: &str = "US-CA";

/// Normalize a region code. Returns `None` for absent or blank input.
pub fn normalize_region(region: Option<&str>) -> Option<String> {
    let trimmed = region?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_ascii_uppercase())
    }
}
