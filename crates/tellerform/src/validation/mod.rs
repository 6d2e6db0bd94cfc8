// File: src/validation/mod.rs
// Purpose: Field-attached validation errors and the outcome of validating a form

use serde::Serialize;
use std::collections::HashMap;
use tellerform_validation::REQUIRED_MESSAGE;

/// Field name to error messages, in the order the rules reported them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(HashMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a garde report, keyed by top-level field.
    ///
    /// A field whose required rule failed keeps only that message, so a
    /// blank email reports "required" and not also "invalid email".
    pub fn from_report(report: &garde::Report) -> Self {
        let mut errors = Self::new();
        for (path, error) in report.iter() {
            let path = path.to_string();
            let field = path
                .split(['.', '['])
                .next()
                .filter(|field| !field.is_empty())
                .unwrap_or("_form");
            errors.add(field, error.message());
        }

        for messages in errors.0.values_mut() {
            if messages.iter().any(|m| m == REQUIRED_MESSAGE) {
                messages.retain(|m| m == REQUIRED_MESSAGE);
                messages.dedup();
            }
        }

        errors
    }

    /// Append a message to a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Replace every message on a field with one message
    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), vec![message.into()]);
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// First error for a field
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)?.first().map(String::as_str)
    }

    /// Names of failing fields, sorted for stable logs
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_map(&self) -> &HashMap<String, Vec<String>> {
        &self.0
    }

    pub fn into_map(self) -> HashMap<String, Vec<String>> {
        self.0
    }
}

/// Outcome of validating one submitted form
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<T> {
    /// Every rule passed; carries the cleaned output
    Valid(T),
    /// At least one rule failed
    Invalid(FieldErrors),
}

impl<T> Validation<T> {
    /// Valid when `errors` is empty, building the output lazily
    pub fn conclude(errors: FieldErrors, output: impl FnOnce() -> T) -> Self {
        if errors.is_empty() {
            Validation::Valid(output())
        } else {
            Validation::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Validation::Valid(output) => Some(output),
            Validation::Invalid(_) => None,
        }
    }

    pub fn err(self) -> Option<FieldErrors> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(errors) => Some(errors),
        }
    }
}
