//! Email validation functions

/// Message attached to a malformed email address.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address.";

/// Validates basic email format
///
/// Checks for:
/// - Exactly one '@' symbol with content on both sides
/// - A dotted domain that neither starts nor ends with '.' or '-'
/// - A top-level domain of at least two characters
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if domain.is_empty() || domain.len() > 255 || !domain.contains('.') {
        return false;
    }

    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
        || domain.contains("..")
    {
        return false;
    }

    let valid_local_chars =
        |c: char| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+' | '%');
    if !local.chars().all(valid_local_chars) {
        return false;
    }

    let valid_domain_chars = |c: char| c.is_alphanumeric() || c == '.' || c == '-';
    if !domain.chars().all(valid_domain_chars) {
        return false;
    }

    domain
        .rsplit('.')
        .next()
        .is_some_and(|tld| tld.chars().count() >= 2)
}

/// Extract domain from email address
///
/// Returns an empty string when the address has no '@'.
pub fn email_domain(email: &str) -> &str {
    email.split_once('@').map(|(_, domain)| domain).unwrap_or("")
}
