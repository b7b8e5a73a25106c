//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Limits are
//! reasonable UX bounds; the store itself does not enforce text lengths.

use crate::projects::ProjectError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: project titles, employee names
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, notes
pub const MAX_NOTE_LEN: usize = 2000;

/// Short identifiers: user ids, project codes, tags
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &str,
    max_len: usize,
) -> Result<(), ProjectError> {
    if value.trim().is_empty() {
        return Err(ProjectError::Validation(format!(
            "{field} must not be empty"
        )));
    }
    if value.len() > max_len {
        return Err(ProjectError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), ProjectError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(ProjectError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}
