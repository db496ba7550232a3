//! Customer field validation and path-id parsing.
//!
//! The HTTP layer calls these before touching the store, so every failure
//! here is a client error (400) and implies no database round-trip.

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::DbId;

/// Entity label used in not-found errors and log fields.
pub const ENTITY: &str = "Customer";

/// Maximum length of a customer name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum length of a postal address, in characters.
pub const MAX_ADDRESS_LEN: usize = 1024;

/// Parse a `customerId` path segment into a positive [`DbId`].
pub fn parse_customer_id(raw: &str) -> Result<DbId, CoreError> {
    let id: DbId = raw.trim().parse().map_err(|_| {
        CoreError::Validation(format!("Invalid customer id '{raw}': expected a positive integer"))
    })?;
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "Invalid customer id '{raw}': expected a positive integer"
        )));
    }
    Ok(id)
}

/// Unwrap a required string field, rejecting both absence and blank values.
pub fn require_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("Field '{field}' is required"))),
    }
}

/// Validate a customer name.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must not exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an email address for both presence and shape.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.trim().is_empty() {
        return Err(CoreError::Validation("Email must not be empty".to_string()));
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(CoreError::Validation(format!(
            "Email must not exceed {MAX_EMAIL_LEN} bytes"
        )));
    }
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate an optional address. Empty strings are allowed.
pub fn validate_address(address: &str) -> Result<(), CoreError> {
    if address.chars().count() > MAX_ADDRESS_LEN {
        return Err(CoreError::Validation(format!(
            "Address must not exceed {MAX_ADDRESS_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- parse_customer_id --

    #[test]
    fn positive_ids_parse() {
        assert_eq!(parse_customer_id("1").unwrap(), 1);
        assert_eq!(parse_customer_id("42").unwrap(), 42);
        assert_eq!(parse_customer_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn non_numeric_id_rejected() {
        assert_matches!(parse_customer_id("invalid"), Err(CoreError::Validation(_)));
        assert_matches!(parse_customer_id("1.5"), Err(CoreError::Validation(_)));
        assert_matches!(parse_customer_id(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn zero_and_negative_ids_rejected() {
        assert_matches!(parse_customer_id("0"), Err(CoreError::Validation(_)));
        assert_matches!(parse_customer_id("-3"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn overflowing_id_rejected() {
        assert!(parse_customer_id("99999999999999999999999").is_err());
    }

    // -- require_field --

    #[test]
    fn present_field_returned() {
        assert_eq!(require_field(Some("John"), "name").unwrap(), "John");
    }

    #[test]
    fn missing_or_blank_field_rejected() {
        let err = require_field(None, "email").unwrap_err();
        assert!(err.to_string().contains("'email' is required"));
        assert!(require_field(Some("   "), "email").is_err());
    }

    // -- validate_name --

    #[test]
    fn valid_name_accepted() {
        assert!(validate_name("John Doe").is_ok());
    }

    #[test]
    fn blank_name_rejected() {
        assert!(validate_name("").is_err());
        assert!(validate_name("  ").is_err());
    }

    #[test]
    fn overlong_name_rejected() {
        let name = "a".repeat(MAX_NAME_LEN + 1);
        assert!(validate_name(&name).is_err());
        assert!(validate_name(&"a".repeat(MAX_NAME_LEN)).is_ok());
    }

    // -- validate_email --

    #[test]
    fn valid_email_accepted() {
        assert!(validate_email("john.doe@example.com").is_ok());
    }

    #[test]
    fn malformed_email_rejected() {
        let msg = validate_email("not-an-email").unwrap_err().to_string();
        assert!(msg.contains("not a valid email address"));
        assert!(validate_email("").is_err());
    }

    #[test]
    fn padded_email_rejected() {
        assert!(validate_email(" john.doe@example.com").is_err());
        assert!(validate_email("john.doe@example.com ").is_err());
    }

    // -- validate_address --

    #[test]
    fn address_length_bounded() {
        assert!(validate_address("").is_ok());
        assert!(validate_address("123 Main St").is_ok());
        assert!(validate_address(&"x".repeat(MAX_ADDRESS_LEN + 1)).is_err());
    }
}
