//! Bridges `validator` derive output into [`ValidationError`].
//!
//! Draft records mark required fields with
//! `#[validate(length(min = 1, code = "required"))]`; anything else the
//! derive reports becomes an [`ValidationError::InvalidField`].

use std::borrow::Cow;

use validator::Validate;

use crate::error::ValidationError;

/// Error code used on every required-field rule.
pub const REQUIRED: &str = "required";

/// Error code for free-text fields that must hold JSON.
pub const INVALID_JSON: &str = "invalid_json";

/// Error code for link fields that must be absolute http(s) URLs.
pub const INVALID_URL: &str = "invalid_url";

/// Run the derived rules of `draft` and fold the result into a single
/// [`ValidationError`].
///
/// Missing required fields take precedence over malformed ones so the
/// operator sees the "fill in all required fields" message first.
pub fn check<T: Validate>(draft: &T) -> Result<(), ValidationError> {
    match draft.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(fold_errors(&errors)),
    }
}

fn fold_errors(errors: &validator::ValidationErrors) -> ValidationError {
    let mut required = Vec::new();
    let mut invalid = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            if error.code == REQUIRED {
                required.push(field.to_string());
            } else {
                let reason = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                invalid.push((field.to_string(), reason));
            }
        }
    }

    if !required.is_empty() {
        required.sort();
        required.dedup();
        return ValidationError::RequiredFields { fields: required };
    }

    invalid.sort();
    match invalid.into_iter().next() {
        Some((field, reason)) => ValidationError::InvalidField { field, reason },
        None => ValidationError::InvalidField {
            field: "record".to_string(),
            reason: "validation failed".to_string(),
        },
    }
}

/// Accepts empty text or text that parses as JSON.
pub fn validate_json_text(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    serde_json::from_str::<serde_json::Value>(value)
        .map(|_| ())
        .map_err(|e| {
            let mut err = validator::ValidationError::new(INVALID_JSON);
            err.message = Some(Cow::from(format!("not valid JSON: {e}")));
            err
        })
}

/// Accepts empty text or an absolute `http://` / `https://` URL without spaces.
pub fn validate_optional_url(value: &str) -> Result<(), validator::ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let has_scheme = value.starts_with("http://") || value.starts_with("https://");
    if has_scheme && !value.contains(char::is_whitespace) {
        return Ok(());
    }
    let mut err = validator::ValidationError::new(INVALID_URL);
    err.message = Some(Cow::from("must be an http(s) URL"));
    Err(err)
}
