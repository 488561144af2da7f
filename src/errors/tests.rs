//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            character: "@".to_string(),
            column: 2,
        },
        3,
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_line(), 3);
    assert!(error.is_fatal());
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
            expected: TokenKind::Semicolon,
        },
        2,
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "unexpected token \"}\", expected Semicolon, at line 2"
    );
    assert!(!error.is_fatal());
}

#[test]
fn test_unexpected_character_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            character: "#".to_string(),
            column: 0,
        },
        7,
    );

    assert_eq!(error.to_string(), "unexpected character \"#\", at line 7");
}

#[test]
fn test_unexpected_literal_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedLiteral {
            token: ";".to_string(),
            kind: TokenKind::Semicolon,
        },
        1,
    );

    assert_eq!(error.get_error_name(), "UnexpectedLiteral");
    assert_eq!(
        error.to_string(),
        "unexpected literal \";\" (Semicolon), at line 1"
    );
}

#[test]
fn test_number_parse_error_message() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
            target: "integer",
        },
        4,
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer, at line 4"
    );
}

#[test]
fn test_number_parse_error_tip_follows_target() {
    let integer = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
            target: "integer",
        },
        1,
    );
    assert_eq!(integer.get_tip().to_string(), "is it above the integer limit?");

    let float = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
            target: "float",
        },
        1,
    );
    assert_eq!(float.get_tip().to_string(), "is it a valid float literal?");
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 128 }, 3);

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "nesting deeper than 128 levels, at line 3");
    assert!(!error.is_fatal());
    assert_eq!(error.get_tip().to_string(), "split it into smaller statements");
}

#[test]
fn test_error_tip_semicolon_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "6".to_string(),
            expected: TokenKind::Semicolon,
        },
        1,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "did you miss a semicolon?"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_expected_kind() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "".to_string(),
            expected: TokenKind::CloseCurly,
        },
        1,
    );

    assert_eq!(error.get_tip().to_string(), "expected CloseCurly here");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedLiteral {
            token: ")".to_string(),
            kind: TokenKind::CloseParen,
        },
        1,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
