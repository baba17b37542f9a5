// src/shared/validation.rs
//
// Field validation for the management surface. Every form validates into a
// typed fields struct before anything touches the repository; a non-empty
// error map rejects the whole submission.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

/// Field name -> human-readable messages, serialized as the `errors` object
/// of a failed management submission.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Accept `value` only when no field failed; the submission is atomic.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Required non-empty text; returns the trimmed value.
pub fn require(errors: &mut FieldErrors, field: &str, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, "This field is required.");
    }
    trimmed.to_string()
}

/// Optional text; empty input becomes `None`.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// URL fields must be well-formed absolute URLs or empty.
pub fn optional_url(errors: &mut FieldErrors, field: &str, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Url::parse(trimmed) {
        Ok(_) => Some(trimmed.to_string()),
        Err(_) => {
            errors.add(field, "Enter a valid URL.");
            None
        }
    }
}

/// Calendar date in `YYYY-MM-DD` form.
pub fn required_date(errors: &mut FieldErrors, field: &str, value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, "This field is required.");
        return None;
    }
    parse_date(errors, field, trimmed)
}

pub fn optional_date(errors: &mut FieldErrors, field: &str, value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_date(errors, field, trimmed)
}

fn parse_date(errors: &mut FieldErrors, field: &str, value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, "Enter a valid date.");
            None
        }
    }
}

/// Month-picker inputs arrive as `YYYY-MM`; normalize to the first of the
/// month before date parsing. Anything else passes through untouched.
pub fn normalize_month(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.len() == 7 && NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d").is_ok()
    {
        format!("{trimmed}-01")
    } else {
        trimmed.to_string()
    }
}

/// Integer constrained to `[min, max]`; out-of-range input is a field error.
pub fn bounded_i32(
    errors: &mut FieldErrors,
    field: &str,
    value: i32,
    min: i32,
    max: i32,
) -> Option<i32> {
    if value < min || value > max {
        errors.add(
            field,
            &format!("Ensure this value is between {min} and {max}."),
        );
        None
    } else {
        Some(value)
    }
}
