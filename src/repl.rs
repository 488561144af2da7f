//! Interactive shell.
//!
//! Reads one line at a time, parses it on its own, and prints any parser
//! errors followed by the tree as JSON.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::{display_error, display_parser_errors, dump_program, parser::parser::parse};

pub const PROMPT: &str = "> ";

/// Runs the shell until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(input: R, out: &mut W, user: &str) -> io::Result<()> {
    let banner = format!(
        "Gero REPL {} - Welcome {}",
        env!("CARGO_PKG_VERSION"),
        user
    );
    writeln!(out, "{}", banner.blue().bold())?;

    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT.bold())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };

        eval_line(out, &line?)?;
    }
}

/// Parses a single line and prints the outcome. A lexical failure is shown
/// and the shell carries on.
pub fn eval_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    match parse(line) {
        Ok((program, errors)) => {
            if !errors.is_empty() {
                display_parser_errors(out, &errors)?;
            }

            writeln!(out, "{}", dump_program(&program)?)
        }
        Err(error) => display_error(out, &error, "shell", line),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{eval_line, start};

    #[test]
    fn test_start_greets_and_parses_each_line() {
        let input = Cursor::new("5;\n\"x\";\n");
        let mut out = Vec::new();

        start(input, &mut out, "tester").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Gero REPL"));
        assert!(text.contains("Welcome tester"));
        assert!(text.contains("\"value\": 5"));
        assert!(text.contains("\"value\": \"x\""));
        assert!(!text.contains("parser errors:"));
    }

    #[test]
    fn test_start_continues_after_lexical_failure() {
        let input = Cursor::new("1 @ 2;\n7;\n");
        let mut out = Vec::new();

        start(input, &mut out, "tester").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("UnexpectedCharacter"));
        assert!(text.contains("-> shell"));
        assert!(text.contains("\"value\": 7"));
    }

    #[test]
    fn test_eval_line_reports_parser_errors() {
        let mut out = Vec::new();

        eval_line(&mut out, "1 +;").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("parser errors:"));
        assert!(text.contains("unexpected literal \";\" (Semicolon), at line 1"));
        assert!(text.contains("\"statements\": []"));
    }
}
