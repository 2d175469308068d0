//! Accumulating form validation.
//!
//! A [`Form`] wraps submitted field values together with a [`FieldErrors`] map. Each check
//! appends a message to the offending field's list, so several failed rules on the same field
//! are all reported. The form is valid once every declared check has run and no messages were
//! recorded.
//!
//! Only `required` looks at blankness. The length, pattern and permitted value checks skip
//! fields whose value is empty so an absent optional field is not reported twice.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

/// Loose email shape check applied to the signup form.
pub static EMAIL_RX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Key used for errors which do not belong to a single field.
pub const GENERIC_ERROR_KEY: &str = "generic";

/// Validation messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(HashMap<String, Vec<String>>);

impl FieldErrors {
    /// Append `message` to the list of errors for `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// First error recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// All errors recorded for `field`.
    pub fn all(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// True when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

/// Submitted form data plus the errors found while validating it.
#[derive(Clone, Debug, Default)]
pub struct Form {
    values: HashMap<String, Vec<String>>,
    /// Messages recorded by the checks, keyed by field name
    pub errors: FieldErrors,
}

impl Form {
    /// Creates a form from decoded `application/x-www-form-urlencoded` pairs.
    ///
    /// Repeated keys keep every value in submission order; [`Form::get`] returns the first.
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            values.entry(key.into()).or_default().push(value.into());
        }

        Self {
            values,
            errors: FieldErrors::default(),
        }
    }

    /// An empty form with no values and no errors, used for freshly displayed pages.
    pub fn empty() -> Self {
        Self::default()
    }

    /// First submitted value of `field`, or an empty string when absent.
    pub fn get(&self, field: &str) -> &str {
        self.values
            .get(field)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Flags each field which is absent or whitespace only.
    pub fn required(&mut self, fields: &[&str]) -> &mut Self {
        for field in fields {
            if self.get(field).trim().is_empty() {
                self.errors.add(field, "This field cannot be blank");
            }
        }
        self
    }

    /// Flags `field` when it holds more than `max` characters.
    pub fn max_length(&mut self, field: &str, max: usize) -> &mut Self {
        let value = self.get(field);
        if !value.is_empty() && value.chars().count() > max {
            self.errors.add(
                field,
                format!("This field is too long (maximum is {max} characters)"),
            );
        }
        self
    }

    /// Flags `field` when it holds fewer than `min` characters.
    pub fn min_length(&mut self, field: &str, min: usize) -> &mut Self {
        let value = self.get(field);
        if !value.is_empty() && value.chars().count() < min {
            self.errors.add(
                field,
                format!("This field is too short (minimum is {min} characters)"),
            );
        }
        self
    }

    /// Flags `field` unless its value is exactly one of `permitted`.
    pub fn permitted_values(&mut self, field: &str, permitted: &[&str]) -> &mut Self {
        let value = self.get(field);
        if !value.is_empty() && !permitted.contains(&value) {
            self.errors.add(field, "This field is invalid");
        }
        self
    }

    /// Flags `field` when its value does not match `pattern`.
    pub fn matches_pattern(&mut self, field: &str, pattern: &Regex) -> &mut Self {
        let value = self.get(field);
        if !value.is_empty() && !pattern.is_match(value) {
            self.errors.add(field, "This field is invalid");
        }
        self
    }

    /// True when every check run so far has passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
