use log::{debug, warn};

use crate::enumerate::errors::InputError;

/// # Errors
///
/// Returns an error if the string contains any non-ASCII-digit character.
/// The empty string is valid: it yields the single empty partition and
/// therefore no solutions.
pub fn validate_digit_string(digit_string: &str) -> Result<(), InputError> {
    debug!("Validating digit string: '{}'", digit_string);

    if !digit_string.chars().all(|c| c.is_ascii_digit()) {
        warn!(
            "Digit string contains non-digit characters: '{}'",
            digit_string
        );
        return Err(InputError::InvalidDigitString(digit_string.to_string()));
    }

    Ok(())
}
