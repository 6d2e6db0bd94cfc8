//! Amount parsing and range checks

/// Smallest amount a deposit or transfer may carry.
pub const MIN_AMOUNT: f64 = 0.01;

pub const NOT_A_NUMBER_MESSAGE: &str = "Not a valid float value.";
pub const BELOW_MINIMUM_MESSAGE: &str = "Amount must be greater than 0";

/// Why a submitted amount was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountRejection {
    /// Blank, unparsable, or exactly zero
    Missing,
    /// Parses, but to infinity or NaN
    NotANumber,
    /// Below [`MIN_AMOUNT`]
    BelowMinimum,
}

impl AmountRejection {
    pub fn message(self) -> &'static str {
        match self {
            AmountRejection::Missing => crate::REQUIRED_MESSAGE,
            AmountRejection::NotANumber => NOT_A_NUMBER_MESSAGE,
            AmountRejection::BelowMinimum => BELOW_MINIMUM_MESSAGE,
        }
    }
}

/// Parse a submitted amount.
///
/// Text that is not a number, and a zero amount, both count as not
/// provided: `"abc"`, `"0"` and `"0.00"` report [`AmountRejection::Missing`]
/// and the required message replaces any parse error.
pub fn parse_amount(raw: &str) -> Result<f64, AmountRejection> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AmountRejection::Missing);
    }

    let value: f64 = raw.parse().map_err(|_| AmountRejection::Missing)?;
    if !value.is_finite() {
        return Err(AmountRejection::NotANumber);
    }
    if value == 0.0 {
        return Err(AmountRejection::Missing);
    }
    if value < MIN_AMOUNT {
        return Err(AmountRejection::BelowMinimum);
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("100", 100.0)]
    #[case(" 0.01 ", 0.01)]
    #[case("2500.75", 2500.75)]
    fn test_parse_amount_accepts(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_amount(raw), Ok(expected));
    }

    #[rstest]
    #[case("", AmountRejection::Missing)]
    #[case("0", AmountRejection::Missing)]
    #[case("0.00", AmountRejection::Missing)]
    #[case("abc", AmountRejection::Missing)]
    #[case("12,50", AmountRejection::Missing)]
    #[case("inf", AmountRejection::NotANumber)]
    #[case("NaN", AmountRejection::NotANumber)]
    #[case("0.001", AmountRejection::BelowMinimum)]
    #[case("-5", AmountRejection::BelowMinimum)]
    fn test_parse_amount_rejects(#[case] raw: &str, #[case] expected: AmountRejection) {
        assert_eq!(parse_amount(raw), Err(expected));
    }

    #[test]
    fn test_messages() {
        assert_eq!(AmountRejection::Missing.message(), "This field is required.");
        assert_eq!(AmountRejection::NotANumber.message(), "Not a valid float value.");
        assert_eq!(AmountRejection::BelowMinimum.message(), "Amount must be greater than 0");
    }
}
