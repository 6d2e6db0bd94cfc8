//! String validation functions

/// True when the value is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Length in characters, matching what a user counts in a text box.
pub fn char_length(s: &str) -> usize {
    s.chars().count()
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if char_length(s) <= max {
        Ok(())
    } else {
        Err(format!("Field cannot be longer than {} characters.", max))
    }
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}
