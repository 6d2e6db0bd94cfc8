// File: src/form_context.rs
// Purpose: Errors plus submitted values, for re-rendering a rejected form

use crate::validation::FieldErrors;
use serde::Serialize;
use std::collections::HashMap;

/// Context for a rejected form: what failed and what the user typed
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormContext {
    pub errors: FieldErrors,
    /// Submitted values, with password fields removed
    pub values: HashMap<String, String>,
}

impl FormContext {
    pub fn new(errors: FieldErrors, values: HashMap<String, String>) -> Self {
        Self { errors, values }
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.has_field(field)
    }

    /// First error message for a field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.first(field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn get_value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}
