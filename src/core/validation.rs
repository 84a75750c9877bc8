//! Input validation for signpost operations.
//!
//! Validates parameter names, profile names, and required field names.

use crate::error::{Result, SignpostError};

/// Validate a store entry name.
///
/// Store names are the lowercase counterparts of profile field names
/// ("owner", "hosted_zone_id", "oauth-token"):
/// - Only a-z, 0-9, underscore, and hyphen
/// - Cannot be empty
///
/// Names become file names inside the store root, so anything that could
/// escape the store directory is rejected here.
///
/// # Errors
///
/// Returns `InvalidName` if the name is invalid.
pub fn validate_store_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SignpostError::InvalidName {
            name: name.to_string(),
            reason: "cannot be empty".to_string(),
        });
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_lowercase() && !ch.is_ascii_digit() && ch != '_' && ch != '-' {
            return Err(SignpostError::InvalidName {
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only a-z, 0-9, underscore, and hyphen are allowed",
                    ch,
                    i + 1
                ),
            });
        }
    }

    Ok(())
}

/// Validate a required profile field name.
///
/// Field names must be valid environment variable names:
/// - Only A-Z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns `InvalidName` if the field name is invalid.
pub fn validate_field_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SignpostError::InvalidName {
            name: name.to_string(),
            reason: "cannot be empty".to_string(),
        });
    }

    if let Some(first_char) = name.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(SignpostError::InvalidName {
                name: name.to_string(),
                reason: "cannot start with a digit".to_string(),
            });
        }
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_uppercase() && !ch.is_ascii_digit() && ch != '_' {
            return Err(SignpostError::InvalidName {
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            });
        }
    }

    Ok(())
}
