//! Scanner and single-pass translator for a tiny BASIC dialect.
//!
//! Source text is scanned into a flat token stream, then a
//! recursive-descent translator walks the stream once and writes an
//! equivalent C program as it recognizes each statement.
//!
//! # Quick start
//!
//! ## Translate a program
//!
//! ```
//! use basic2c::{scan, translate};
//!
//! let source = "LET X = 3 + 4\nPRINT X\n";
//! let tokens = scan(source).unwrap();
//! let program = translate(&tokens).unwrap();
//! assert!(program.contains("float X = 3 + 4;"));
//! ```
//!
//! ## Handle both error stages at once
//!
//! ```
//! use basic2c::{Category, translate_str};
//!
//! let err = translate_str("IF X > 1 THEN\nPRINT X\n").unwrap_err();
//! assert_eq!(err.category(), Category::Syntactic);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod emitter;
pub mod lexer;
pub mod listing;
pub mod token;
pub mod translator;

pub use emitter::Emitter;
pub use lexer::{LexError, LexErrorKind, StopReason, scan};
pub use listing::enumerate;
pub use token::{Span, Token, TokenKind};
pub use translator::{Block, MAX_NESTING, ParseError, ParseErrorKind, translate};

/// Which stage an [`Error`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lexical,
    Syntactic,
}

/// Unified error type covering both scanning and translation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A translator error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl Error {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Lex(_) => Category::Lexical,
            Self::Parse(_) => Category::Syntactic,
        }
    }

    /// Source location of the failure.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(e) => e.span,
            Self::Parse(e) => e.span,
        }
    }
}

/// Scan and translate a source string in one step.
pub fn translate_str(input: &str) -> Result<String, Error> {
    let tokens = scan(input)?;
    Ok(translate(&tokens)?)
}
