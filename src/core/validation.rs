use crate::{domain::is_valid_pin, errors::ValidationError};

/// Parses a whole-unit amount typed by the user.
///
/// Surrounding whitespace is ignored. Anything other than plain ASCII digits
/// (signs, decimals, separators) is rejected, and so is zero.
pub fn parse_amount(text: &str) -> Result<u64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAmount);
    }
    let amount: u64 = trimmed
        .parse()
        .map_err(|_| ValidationError::AmountTooLarge)?;
    if amount == 0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(amount)
}

/// Checks a replacement PIN against its confirmation, then its format.
pub fn validate_new_pin(new_pin: &str, confirm_pin: &str) -> Result<(), ValidationError> {
    if new_pin != confirm_pin {
        return Err(ValidationError::PinMismatch);
    }
    if !is_valid_pin(new_pin) {
        return Err(ValidationError::PinFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_digits_with_padding() {
        assert_eq!(parse_amount("200"), Ok(200));
        assert_eq!(parse_amount("  42 "), Ok(42));
        assert_eq!(parse_amount("007"), Ok(7));
    }

    #[test]
    fn rejects_zero_as_non_positive() {
        assert_eq!(parse_amount("0"), Err(ValidationError::NonPositiveAmount));
        assert_eq!(parse_amount("000"), Err(ValidationError::NonPositiveAmount));
    }

    #[test]
    fn rejects_signed_and_textual_amounts() {
        for input in ["-5", "+5", "abc", "12.5", "1,000", "", "   "] {
            assert_eq!(
                parse_amount(input),
                Err(ValidationError::InvalidAmount),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn rejects_amounts_beyond_u64() {
        assert_eq!(
            parse_amount("99999999999999999999999"),
            Err(ValidationError::AmountTooLarge)
        );
    }

    #[test]
    fn mismatch_is_reported_before_format() {
        assert_eq!(
            validate_new_pin("12", "34"),
            Err(ValidationError::PinMismatch)
        );
        assert_eq!(
            validate_new_pin("12", "12"),
            Err(ValidationError::PinFormat)
        );
        assert_eq!(validate_new_pin("4321", "4321"), Ok(()));
    }
}
