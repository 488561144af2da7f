//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates an anchored lexical rule
//!
//! These macros reduce boilerplate in the rule table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$line` - The line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
}

/// Creates a lexical rule from a pattern literal and the kind it produces.
///
/// The pattern is anchored at the start of the remaining input, so a rule can
/// only ever match a prefix.
///
/// # Example
///
/// ```ignore
/// MK_RULE!(r"\+", TokenKind::Plus)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:literal, $kind:expr) => {
        LexRule::new(
            Regex::new(concat!("^(?:", $pattern, ")")).expect("lexical rule pattern must compile"),
            $kind,
        )
    };
}
