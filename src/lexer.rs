use std::fmt;

use crate::token::{Span, Token, TokenKind};

/// The condition that stopped a scan early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    UnknownToken,
    InvalidNumber,
    InvalidString,
    /// A two-character operator needed a lookahead byte past the end.
    PeekEof,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownToken => write!(f, "unknown token"),
            Self::InvalidNumber => write!(f, "invalid number"),
            Self::InvalidString => write!(f, "invalid string"),
            Self::PeekEof => write!(f, "peek past end of input"),
        }
    }
}

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnknownToken(char),
    /// Second `.` inside one numeric literal.
    MultipleDecimalPoints,
    /// Numeric literal ends right after its `.`.
    MissingDigitAfterPoint,
    /// One of `\`, `%`, CR, LF or TAB inside a string literal.
    DisallowedStringChar(char),
    /// String literal still open at end of input.
    UnterminatedString,
    /// Operator at the very end of input, no byte to look ahead at.
    PeekEof(char),
}

impl LexErrorKind {
    /// Stop condition this error belongs to.
    #[must_use]
    pub const fn reason(&self) -> StopReason {
        match self {
            Self::UnknownToken(_) => StopReason::UnknownToken,
            Self::MultipleDecimalPoints | Self::MissingDigitAfterPoint => {
                StopReason::InvalidNumber
            }
            Self::DisallowedStringChar(_) | Self::UnterminatedString => StopReason::InvalidString,
            Self::PeekEof(_) => StopReason::PeekEof,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.reason())?;
        match self {
            Self::UnknownToken(ch) => write!(f, "unexpected character {ch:?}"),
            Self::MultipleDecimalPoints => write!(f, "multiple decimal points"),
            Self::MissingDigitAfterPoint => {
                write!(f, "a digit must follow a decimal point")
            }
            Self::DisallowedStringChar(ch) => {
                write!(f, "character {ch:?} is not allowed in a string")
            }
            Self::UnterminatedString => write!(f, "unterminated string"),
            Self::PeekEof(ch) => {
                write!(f, "input ends right after '{ch}'")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Scan a source string into a sequence of tokens ending in `Eof`.
///
/// # Errors
///
/// Returns `LexError` on the first unknown character, malformed
/// number, bad string literal, or operator cut off by end of input.
pub fn scan(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).scan()
}

struct Lexer<'a> {
    src: &'a str,
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        let start = if src.starts_with('\u{FEFF}') { 3 } else { 0 };
        Self {
            src,
            input: src.as_bytes(),
            pos: start,
            line: 1,
            col: 1,
        }
    }

    fn scan(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            match ch {
                b'\n' => {
                    tokens.push(self.make_token(TokenKind::Newline, "\n".to_string()));
                    self.advance();
                }
                b'#' => self.skip_comment(),
                b'"' => tokens.push(self.read_string()?),
                b'=' => tokens.push(self.read_operator(TokenKind::Assign, TokenKind::Equal, b'=')?),
                b'>' => tokens.push(self.read_operator(
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    b'=',
                )?),
                b'<' => tokens.push(self.read_less()?),
                b'!' => {
                    tokens.push(self.read_operator(TokenKind::Unknown, TokenKind::NotEqual, b'=')?);
                }
                c if c.is_ascii_whitespace() || c == b'\x0b' => self.advance(),
                c if c.is_ascii_alphabetic() => tokens.push(self.read_word()),
                c if c.is_ascii_digit() => tokens.push(self.read_number()?),
                c => match single_char_kind(c) {
                    TokenKind::Unknown => {
                        return Err(self.error(LexErrorKind::UnknownToken(self.current_char())));
                    }
                    kind => {
                        tokens.push(self.make_token(kind, char::from(c).to_string()));
                        self.advance();
                    }
                },
            }
        }

        tokens.push(self.make_token(TokenKind::Eof, String::new()));
        Ok(tokens)
    }

    const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }

    const fn make_token(&self, kind: TokenKind, text: String) -> Token {
        Token {
            kind,
            text,
            span: self.span(),
        }
    }

    const fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            span: self.span(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_next(&self) -> Result<u8, LexError> {
        self.input
            .get(self.pos + 1)
            .copied()
            .ok_or_else(|| self.error(LexErrorKind::PeekEof(self.current_char())))
    }

    fn current_char(&self) -> char {
        self.src[self.pos..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn slice(&self, start: usize) -> String {
        self.src[start..self.pos].to_string()
    }

    /// Step one byte. Columns count characters, so UTF-8
    /// continuation bytes do not advance the column.
    fn advance(&mut self) {
        if self.pos < self.input.len() {
            let byte = self.input[self.pos];
            if byte == b'\n' {
                self.line += 1;
                self.col = 1;
            } else if byte & 0xC0 != 0x80 {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn skip_comment(&mut self) {
        while self.peek().is_some_and(|c| c != b'\n') {
            self.advance();
        }
    }

    /// Read `single` or, when the next byte is `follow`, `double`.
    fn read_operator(
        &mut self,
        single: TokenKind,
        double: TokenKind,
        follow: u8,
    ) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;

        let kind = if self.peek_next()? == follow {
            self.advance();
            double
        } else {
            single
        };

        if kind == TokenKind::Unknown {
            return Err(self.error(LexErrorKind::UnknownToken(self.current_char())));
        }

        self.advance();
        Ok(Token {
            kind,
            text: self.slice(start),
            span,
        })
    }

    /// `<` is the only operator with two possible followers (`<=`, `<>`).
    fn read_less(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;

        let kind = match self.peek_next()? {
            b'=' => TokenKind::LessEqual,
            b'>' => TokenKind::NotEqual,
            _ => TokenKind::Less,
        };
        if kind != TokenKind::Less {
            self.advance();
        }

        self.advance();
        Ok(Token {
            kind,
            text: self.slice(start),
            span,
        })
    }

    fn read_word(&mut self) -> Token {
        let span = self.span();
        let start = self.pos;

        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.advance();
        }

        let text = self.slice(start);
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier);
        Token { kind, text, span }
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;
        let mut have_point = false;
        let mut digit_after_point = false;

        loop {
            self.advance();
            match self.peek() {
                Some(c) if c.is_ascii_digit() => {
                    if have_point {
                        digit_after_point = true;
                    }
                }
                Some(b'.') => {
                    if have_point {
                        return Err(self.error(LexErrorKind::MultipleDecimalPoints));
                    }
                    have_point = true;
                }
                _ if have_point && !digit_after_point => {
                    return Err(self.error(LexErrorKind::MissingDigitAfterPoint));
                }
                _ => break,
            }
        }

        Ok(Token {
            kind: TokenKind::Number,
            text: self.slice(start),
            span,
        })
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        self.advance(); // skip opening quote
        let start = self.pos;

        loop {
            match self.peek() {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        span,
                    });
                }
                Some(b'"') => break,
                Some(c @ (b'\\' | b'%' | b'\r' | b'\n' | b'\t')) => {
                    return Err(self.error(LexErrorKind::DisallowedStringChar(char::from(c))));
                }
                Some(_) => self.advance(),
            }
        }

        let text = self.slice(start);
        self.advance(); // skip closing quote

        Ok(Token {
            kind: TokenKind::String,
            text,
            span,
        })
    }
}

const fn single_char_kind(c: u8) -> TokenKind {
    match c {
        b'+' => TokenKind::Add,
        b'-' => TokenKind::Subtract,
        b'*' => TokenKind::Multiply,
        b'/' => TokenKind::Divide,
        _ => TokenKind::Unknown,
    }
}
