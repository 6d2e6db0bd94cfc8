//! Password validation functions

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

const TOO_SHORT: &str = "password must be at least 8 characters long";
const NO_UPPERCASE: &str = "password must contain at least one uppercase letter";
const NO_LOWERCASE: &str = "password must contain at least one lowercase letter";
const NO_DIGIT: &str = "password must contain at least one number";
const NO_SPECIAL: &str = "password must contain at least one special character";

/// Lists every strength rule the password breaks, in a fixed order:
/// length, uppercase, lowercase, digit, special character.
pub fn password_violations(password: &str) -> Vec<&'static str> {
    let mut violations = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        violations.push(TOO_SHORT);
    }
    if !password.chars().any(char::is_uppercase) {
        violations.push(NO_UPPERCASE);
    }
    if !password.chars().any(char::is_lowercase) {
        violations.push(NO_LOWERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(NO_DIGIT);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        violations.push(NO_SPECIAL);
    }

    violations
}

/// Validates a password against every strength rule at once.
///
/// All broken rules are reported together in one message so the user can
/// fix the password in a single round trip.
///
/// # Examples
/// ```
/// use tellerform_validation::password::validate_strong_password;
/// assert!(validate_strong_password("Secure#Pass1").is_ok());
/// assert!(validate_strong_password("short").is_err());
/// ```
pub fn validate_strong_password(password: &str) -> Result<(), String> {
    let violations = password_violations(password);
    if violations.is_empty() {
        return Ok(());
    }

    Err(format!(
        "Password requirements not met: • {}",
        violations.join(" • ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_strong_password_passes() {
        assert!(validate_strong_password("Password123!").is_ok());
        assert!(validate_strong_password("Secure@Pass1").is_ok());
        assert!(validate_strong_password("a{B}c9xyz").is_ok());
    }

    #[rstest]
    #[case("NoSpecial123", NO_SPECIAL)]
    #[case("nouppercase!1", NO_UPPERCASE)]
    #[case("NOLOWERCASE!1", NO_LOWERCASE)]
    #[case("NoDigits!Aa", NO_DIGIT)]
    #[case("Sh0rt!a", TOO_SHORT)]
    fn test_single_violation(#[case] password: &str, #[case] expected: &str) {
        assert_eq!(password_violations(password), vec![expected]);
    }

    #[test]
    fn test_all_violations_are_combined() {
        let err = validate_strong_password("").unwrap_err();
        assert_eq!(
            err,
            "Password requirements not met: \
             • password must be at least 8 characters long \
             • password must contain at least one uppercase letter \
             • password must contain at least one lowercase letter \
             • password must contain at least one number \
             • password must contain at least one special character"
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // seven characters, more than eight bytes
        assert_eq!(password_violations("Äb1!éàü"), vec![TOO_SHORT]);
    }

    #[test]
    fn test_only_ascii_digits_count() {
        assert_eq!(password_violations("Abcdefg!½"), vec![NO_DIGIT]);
        assert_eq!(password_violations("Abcdefg!Ⅻ"), vec![NO_DIGIT]);
        assert!(password_violations("Abcdefg!7").is_empty());
    }

    #[test]
    fn test_special_set_is_fixed() {
        // '-' and '_' are not in the accepted set
        assert_eq!(password_violations("Abcdef1-_"), vec![NO_SPECIAL]);
        assert!(password_violations("Abcdef1\"").is_empty());
    }
}
