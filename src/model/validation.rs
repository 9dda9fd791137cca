//! Field-level schema rules shared by the user and employee documents.
//!
//! Records derive [`validator::Validate`]; the custom checks below attach
//! human-readable messages and a code, and [`SchemaError`] folds the
//! resulting `ValidationErrors` into typed violations.

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

pub const REQUIRED: &str = "required";
pub const INVALID_FORMAT: &str = "invalid_format";
pub const TOO_SHORT: &str = "too_short";
pub const TOO_LONG: &str = "too_long";

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 32;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$").expect("email pattern compiles")
});

fn violation(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

/// Exactly ten ASCII digits. Empty values are left to the required rule.
pub fn validate_mobile_number(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || (value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())) {
        return Ok(());
    }
    Err(violation(INVALID_FORMAT, format!("{} is not a valid mobile number", value)))
}

pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || EMAIL_PATTERN.is_match(value) {
        return Ok(());
    }
    Err(violation(INVALID_FORMAT, format!("{} is not a valid email address", value)))
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if value.is_empty() {
        Ok(())
    } else if len < PASSWORD_MIN_LEN {
        Err(violation(
            TOO_SHORT,
            format!("Password must be at least {} characters long", PASSWORD_MIN_LEN),
        ))
    } else if len > PASSWORD_MAX_LEN {
        Err(violation(
            TOO_LONG,
            format!("Password must be at most {} characters long", PASSWORD_MAX_LEN),
        ))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    MissingField(String),
    InvalidFormat(String),
    TooShort(String),
    TooLong(String),
}

impl SchemaViolation {
    pub fn message(&self) -> &str {
        match self {
            SchemaViolation::MissingField(msg)
            | SchemaViolation::InvalidFormat(msg)
            | SchemaViolation::TooShort(msg)
            | SchemaViolation::TooLong(msg) => msg,
        }
    }

    fn from_error(field: &str, err: &ValidationError) -> Self {
        let message = err.message.as_ref().map(|m| m.to_string());
        match err.code.as_ref() {
            REQUIRED => SchemaViolation::MissingField(message.unwrap_or_else(|| format!("{} is required", field))),
            TOO_SHORT => SchemaViolation::TooShort(message.unwrap_or_else(|| format!("{} is too short", field))),
            TOO_LONG => SchemaViolation::TooLong(message.unwrap_or_else(|| format!("{} is too long", field))),
            _ => SchemaViolation::InvalidFormat(message.unwrap_or_else(|| format!("{} is invalid", field))),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub violation: SchemaViolation,
}

/// Every failing field of one record, ordered by field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub model: &'static str,
    pub violations: Vec<FieldViolation>,
}

impl SchemaError {
    pub fn from_validation(model: &'static str, errors: &ValidationErrors) -> Self {
        let mut fields: Vec<(String, Vec<ValidationError>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs.clone()))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let violations = fields
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldViolation {
                    field: field.clone(),
                    violation: SchemaViolation::from_error(field, err),
                })
            })
            .collect();
        SchemaError { model, violations }
    }

    pub fn has_missing_field(&self) -> bool {
        self.violations
            .iter()
            .any(|v| matches!(v.violation, SchemaViolation::MissingField(_)))
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: ", self.model)?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", v.field, v.violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// A persisted document type whose rules run before it is stored.
pub trait Schema: Validate {
    const MODEL: &'static str;

    fn check_schema(&self) -> Result<(), SchemaError> {
        self.validate()
            .map_err(|errors| SchemaError::from_validation(Self::MODEL, &errors))
    }
}
