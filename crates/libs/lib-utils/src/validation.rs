//! # Validation Utilities
//!
//! Input shape checks for request fields. Each error message names the field.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("Field {} is required", field_name))
    } else {
        Ok(())
    }
}

/// Validate that a value was supplied at all. Whitespace counts as a value,
/// which is what secrets such as passwords need.
pub fn validate_present(value: &str, field_name: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(format!("Field {} is required", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check: one `@`, non-empty local part, dotted domain).
pub fn validate_email(email: &str, field_name: &str) -> Result<(), String> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(format!("Field {} must be a valid email", field_name))
    }
}

/// Validate that a string is a number (ASCII digits only).
pub fn validate_digits(value: &str, field_name: &str) -> Result<(), String> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("Field {} must be a valid number", field_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Ada", "first_name").is_ok());
        assert_eq!(
            validate_not_empty("   ", "first_name"),
            Err("Field first_name is required".to_string())
        );
    }

    #[test]
    fn test_validate_present_keeps_whitespace() {
        assert!(validate_present("   ", "password").is_ok());
        assert_eq!(
            validate_present("", "password"),
            Err("Field password is required".to_string())
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com", "email").is_ok());
        assert!(validate_email("ada@example", "email").is_err());
        assert!(validate_email("@example.com", "email").is_err());
        assert!(validate_email("ada@@example.com", "email").is_err());
        assert!(validate_email("ada lovelace@example.com", "email").is_err());
    }

    #[test]
    fn test_validate_digits() {
        assert!(validate_digits("0812345678", "phone_number").is_ok());
        assert!(validate_digits("+62812", "phone_number").is_err());
        assert!(validate_digits("", "phone_number").is_err());
    }
}
