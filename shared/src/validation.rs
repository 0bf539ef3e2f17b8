//! Field rules shared by the request DTOs
//!
//! Length limits plus the `custom` functions referenced from
//! `#[validate(...)]` attributes. Messages are written without the field
//! name; the server prefixes it when flattening errors.
//!
//! Format rules accept blank input: blank optional text means "absent",
//! and clearing a set field is checked against the stored record.

use std::borrow::Cow;
use validator::{ValidateEmail, ValidationError};

// ── Text length limits ──────────────────────────────────────────────

/// First / last names
pub const MAX_NAME_LEN: u64 = 100;

/// City, state and similar short text
pub const MAX_SHORT_TEXT_LEN: u64 = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: u64 = 254;

/// Address lines
pub const MAX_ADDRESS_LEN: u64 = 500;

/// Minimum number of digits in a phone number
const MIN_PHONE_DIGITS: usize = 7;

/// Maximum length of a phone number including separators
const MAX_PHONE_LEN: usize = 20;

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Required text must contain something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(violation("blank", "must not be empty"));
    }
    Ok(())
}

/// US ZIP: `NNNNN` or `NNNNN-NNNN`.
pub fn validate_zip_code(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Ok(());
    }
    let bytes = value.as_bytes();
    let valid = match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[5] == b'-'
                && bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    };
    if !valid {
        return Err(violation(
            "zip_code",
            "must be a 5-digit ZIP code or ZIP+4 (NNNNN-NNNN)",
        ));
    }
    Ok(())
}

/// Social security number: `NNN-NN-NNNN`.
pub fn validate_ssn(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Ok(());
    }
    let groups: Vec<&str> = value.split('-').collect();
    let valid = groups.len() == 3
        && groups
            .iter()
            .zip([3usize, 2, 4])
            .all(|(g, len)| g.len() == len && g.bytes().all(|b| b.is_ascii_digit()));
    if !valid {
        return Err(violation("ssn", "must be formatted as NNN-NN-NNNN"));
    }
    Ok(())
}

/// Digits plus common separators, at least seven digits.
pub fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Ok(());
    }
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !allowed || digits < MIN_PHONE_DIGITS || value.len() > MAX_PHONE_LEN {
        return Err(violation(
            "phone_number",
            "must be a phone number of 7 to 20 characters",
        ));
    }
    Ok(())
}

/// Email address per `validator`'s HTML5 rules.
pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) || value.validate_email() {
        return Ok(());
    }
    Err(violation("email", "is not a valid email address"))
}
