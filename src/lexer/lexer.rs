use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_RULE, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// A single lexical rule: an anchored pattern and the kind of token it
/// produces.
#[derive(Clone, Debug)]
pub struct LexRule {
    regex: Regex,
    kind: TokenKind,
}

impl LexRule {
    pub fn new(regex: Regex, kind: TokenKind) -> Self {
        LexRule { regex, kind }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the non-empty prefix of `input` this rule matches, if any.
    fn match_prefix<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.regex
            .find(input)
            .filter(|found| found.start() == 0 && !found.is_empty())
            .map(|found| found.as_str())
    }
}

/// The rule table in the order rules are tried. The first match wins.
///
/// Skip rules come first so comments are never read as slashes, and floats
/// come before integers since a float is digits followed by more.
pub fn default_rules() -> Vec<LexRule> {
    vec![
        // Skipped
        MK_RULE!(r"[ \r\f\v]+", TokenKind::Whitespace),
        MK_RULE!(r"\t+", TokenKind::Whitespace),
        MK_RULE!(r"\n", TokenKind::Newline),
        MK_RULE!(r"/\*[\s\S]*?\*/", TokenKind::BlockComment),
        MK_RULE!(r"//.*", TokenKind::LineComment),
        // Symbols, delimiters
        MK_RULE!(r";", TokenKind::Semicolon),
        MK_RULE!(r"\{", TokenKind::OpenCurly),
        MK_RULE!(r"\}", TokenKind::CloseCurly),
        MK_RULE!(r"\(", TokenKind::OpenParen),
        MK_RULE!(r"\)", TokenKind::CloseParen),
        MK_RULE!(r"\+", TokenKind::Plus),
        MK_RULE!(r"-", TokenKind::Dash),
        MK_RULE!(r"\*", TokenKind::Star),
        MK_RULE!(r"/", TokenKind::Slash),
        MK_RULE!(r"%", TokenKind::Percent),
        // Numbers
        MK_RULE!(r"[0-9]*\.[0-9]+", TokenKind::Float),
        MK_RULE!(r"[0-9]+", TokenKind::Integer),
        // Strings
        MK_RULE!(r#""[^"]*""#, TokenKind::String),
        MK_RULE!(r"'[^']*'", TokenKind::String),
    ]
}

/// Lazily pulls tokens from a source string.
#[derive(Clone, Debug)]
pub struct Lexer {
    rules: Vec<LexRule>,
    source: String,
    pos: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer::with_rules(source, default_rules())
    }

    pub fn with_rules(source: impl Into<String>, rules: Vec<LexRule>) -> Lexer {
        Lexer {
            rules,
            source: source.into(),
            pos: 0,
            line: 1,
        }
    }

    /// Produces the next significant token.
    ///
    /// Whitespace, newlines and comments are consumed here and never
    /// returned. Once the input is exhausted every call yields `EOF`. When no
    /// rule matches, the cursor stays put and the same error is returned on
    /// every further call.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.at_eof() {
                return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), self.line));
            }

            let token = match self.match_rule() {
                Some((kind, value)) => MK_TOKEN!(kind, value, self.line),
                None => return Err(self.unexpected_character()),
            };

            self.advance_n(token.value.len());
            // Multi-line block comments and strings move the line counter too
            self.line += token.value.matches('\n').count();

            if !token.kind.is_skipped() {
                return Ok(token);
            }
        }
    }

    fn match_rule(&self) -> Option<(TokenKind, String)> {
        let remaining = self.remainder();

        self.rules.iter().find_map(|rule| {
            rule.match_prefix(remaining)
                .map(|matched| (rule.kind, matched.to_string()))
        })
    }

    fn unexpected_character(&self) -> Error {
        let illegal = MK_TOKEN!(
            TokenKind::Illegal,
            self.at().map(String::from).unwrap_or_default(),
            self.line
        );

        Error::new(
            ErrorImpl::UnexpectedCharacter {
                character: illegal.value,
                column: self.column(),
            },
            illegal.line,
        )
    }

    /// Characters between the start of the current line and the cursor.
    pub fn column(&self) -> usize {
        let consumed = self.source.get(..self.pos).unwrap_or_default();
        let line_start = consumed.rfind('\n').map_or(0, |index| index + 1);

        consumed[line_start..].chars().count()
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        self.source.get(self.pos..).unwrap_or_default()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

/// Drains a fresh lexer over `source`, returning every token up to and
/// including `EOF`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
