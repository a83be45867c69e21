//! Short code generation and validation utilities.
//!
//! Generation makes no uniqueness promise; the registry enforces uniqueness
//! with a membership check under its write lock.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Length of generated short codes.
const CODE_LENGTH: usize = 6;

/// Alphabet for generated codes: lowercase base-36.
///
/// 36^6 possible codes keep the collision probability low enough that the
/// registry's bounded retry loop effectively never exhausts.
const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Maximum accepted length for custom codes.
const MAX_CUSTOM_CODE_LENGTH: usize = 32;

/// Reserved codes that cannot be used as short links.
///
/// These would shadow service endpoints on the redirect route.
const RESERVED_CODES: &[&str] = &["shorturls", "health"];

/// Generates a random 6-character short code from the lowercase base-36
/// alphabet.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Non-empty, at most 32 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
/// - Cannot be a reserved service endpoint name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Shortcode must be 1-32 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Shortcode can only contain letters, digits, hyphens, and underscores",
            json!({ "shortcode": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This shortcode is reserved",
            json!({ "shortcode": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphabet() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "unexpected character in generated code '{}'",
                code
            );
        }
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 1000 draws from a 36^6 space should essentially never collide.
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_validate_simple_code() {
        assert!(validate_custom_code("abc123").is_ok());
    }

    #[test]
    fn test_validate_with_hyphens_and_underscores() {
        assert!(validate_custom_code("my-link_2026").is_ok());
    }

    #[test]
    fn test_validate_single_character() {
        assert!(validate_custom_code("a").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        let code = "a".repeat(32);
        assert!(validate_custom_code(&code).is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        let result = validate_custom_code("");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("1-32 characters"));
    }

    #[test]
    fn test_validate_too_long() {
        let code = "a".repeat(33);
        assert!(validate_custom_code(&code).is_err());
    }

    #[test]
    fn test_validate_special_characters() {
        let result = validate_custom_code("my code!");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("letters, digits"));
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_code(reserved).is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
    }
}
