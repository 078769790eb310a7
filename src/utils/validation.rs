// Common validation utilities for trurl CLI commands

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::name::NameKind;
use crate::utils::error::{Result, TrurlError};

/// Allow-list for project and notebook names: ASCII letters, digits, '_' and '-'
static SCAFFOLD_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("scaffold name pattern is a valid regex")
});

/// Validate a project or notebook name before it is used as a path segment.
///
/// The empty string never matches, so it is rejected along with whitespace,
/// path separators and any other punctuation.
pub fn validate_scaffold_name(name: &str, kind: NameKind) -> Result<()> {
    if SCAFFOLD_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(TrurlError::InvalidName(kind))
    }
}
