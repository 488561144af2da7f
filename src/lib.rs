#![allow(clippy::module_inception)]

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

extern crate regex;

/// Returns the text of the 1-based `line` of `source`, if it exists.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    source.lines().nth(line.checked_sub(1)?)
}

/// Renders the tree as pretty-printed JSON.
pub fn dump_program(program: &Program) -> serde_json::Result<String> {
    serde_json::to_string_pretty(program)
}

pub fn display_error(out: &mut impl Write, error: &Error, file: &str, source: &str) -> io::Result<()> {
    /*
        Error: UnexpectedCharacter (`#` is not part of the language)
        -> main.gero
          |
        2 | 2 # 3;
          | --^
    */

    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };
    writeln!(out, "{}", header.red().bold())?;
    writeln!(out, "-> {}", file)?;
    writeln!(out, "{:>padding$}", "|")?;

    let Some(line_text) = get_line(source, error.get_line()) else {
        return Ok(());
    };

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    if let ErrorImpl::UnexpectedCharacter { column, .. } = error.get_internal() {
        let arrows = column.saturating_sub(removed_whitespace) + 1;
        writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")?;
    }

    Ok(())
}

/// Prints every parser diagnostic under a single header, one per line.
pub fn display_parser_errors(out: &mut impl Write, errors: &[Error]) -> io::Result<()> {
    writeln!(out, "{}", "parser errors:".red().bold())?;

    for error in errors {
        writeln!(out, "{}", format!("\t{}", error).red())?;
    }

    Ok(())
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use crate::{errors::errors::{Error, ErrorImpl}, parser::parser::parse};

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";

        assert_eq!(super::get_line(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line(source, 3), Some(""));
        assert_eq!(super::get_line(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line(source, 5), None);
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_display_error_points_at_character() {
        let source = "1;\n  2 # 3;";
        let error = parse(source).unwrap_err();

        let mut out = Vec::new();
        super::display_error(&mut out, &error, "main.gero", source).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("UnexpectedCharacter"));
        assert!(text.contains("`#` is not part of the language"));
        assert!(text.contains("-> main.gero"));
        assert!(text.contains("2 | 2 # 3;"));
        assert!(text.contains("--^"));
    }

    #[test]
    fn test_display_error_caret_skips_earlier_copies() {
        let source = "\"#\"; #";
        let error = parse(source).unwrap_err();

        let mut out = Vec::new();
        super::display_error(&mut out, &error, "main.gero", source).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1 | \"#\"; #\n"));
        assert!(text.contains("  | -----^\n"));
    }

    #[test]
    fn test_display_error_caret_counts_characters() {
        let source = "'é' @";
        let error = parse(source).unwrap_err();

        let mut out = Vec::new();
        super::display_error(&mut out, &error, "main.gero", source).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  | ----^\n"));
        assert!(!text.contains("-----^"));
    }

    #[test]
    fn test_display_error_without_source_line() {
        let error = Error::new(
            ErrorImpl::UnexpectedCharacter {
                character: "@".to_string(),
                column: 0,
            },
            9,
        );

        let mut out = Vec::new();
        super::display_error(&mut out, &error, "shell", "@").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("-> shell"));
        assert!(!text.contains("9 |"));
    }

    #[test]
    fn test_display_parser_errors() {
        let (_, errors) = parse("1 2;\n}").unwrap();

        let mut out = Vec::new();
        super::display_parser_errors(&mut out, &errors).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("parser errors:"));
        assert!(text.contains("\tunexpected token \"2\", expected Semicolon, at line 1"));
        assert!(text.contains("\tunexpected literal \"}\" (CloseCurly), at line 2"));
    }

    #[test]
    fn test_dump_program() {
        let (program, _) = parse("'hi';").unwrap();
        let json = super::dump_program(&program).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let literal = &value["statements"][0]["Expression"]["expression"]["String"];
        assert_eq!(literal["value"], "hi");
        assert_eq!(literal["token"]["value"], "'hi'");
        assert_eq!(literal["token"]["kind"], "String");
        assert_eq!(literal["token"]["line"], 1);
    }
}
