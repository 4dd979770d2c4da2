//! Validation rules for contact-form fields

use std::borrow::Cow;
use validator::{ValidateEmail, ValidationError};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const ORGANIZATION_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;
pub const EMAIL_MAX_CHARS: usize = 254;

pub fn field_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Trims surrounding whitespace and maps an empty result to `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn validate_required_text(
    label: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value.ok_or_else(|| field_error("required", format!("{} is required", label)))?;
    let trimmed = value.trim();
    validate_text_length(label, trimmed, min, max)?;
    Ok(trimmed.to_string())
}

pub fn validate_text_length(label: &str, text: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = text.chars().count();

    if len < min {
        return Err(field_error(
            "length",
            format!("{} must be at least {} characters long", label, min),
        ));
    }

    if len > max {
        return Err(field_error(
            "length",
            format!("{} must be at most {} characters long", label, max),
        ));
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(field_error("required", "Email is required"));
    }

    // HTML5 address syntax, and the domain must carry a dot (local@domain.tld)
    let has_dotted_domain = email
        .rsplit_once('@')
        .map_or(false, |(_, domain)| domain.contains('.'));

    if email.chars().count() > EMAIL_MAX_CHARS || !email.validate_email() || !has_dotted_domain {
        return Err(field_error("email", "Email must be a valid email address"));
    }

    Ok(())
}

pub fn validate_in_list(label: &str, value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if !allowed.contains(&value) {
        return Err(field_error(
            "one_of",
            format!("{} must be one of: {}", label, allowed.join(", ")),
        ));
    }
    Ok(())
}
