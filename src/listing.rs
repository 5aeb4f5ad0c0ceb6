//! Debug listing of a token stream.
//!
//! Renders one JSON-like object per token with its display name,
//! numeric kind id and text. `EOF` and `NEWLINE` tokens are shown as
//! `<eof>` and `<newline>`.

use std::fmt::Write as _;

use crate::token::{Token, TokenKind};

/// Render a token stream as a listing.
#[must_use]
pub fn enumerate(tokens: &[Token]) -> String {
    let mut out = String::from("[\n");

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        let text = match token.kind {
            TokenKind::Eof => "<eof>",
            TokenKind::Newline => "<newline>",
            _ => token.text.as_str(),
        };
        let _ = write!(
            out,
            "\t{{\n\t\t\"type\": \"{}\",\n\t\t\"id\": {},\n\t\t\"text\": \"{text}\"\n\t}}",
            token.kind.describe(),
            token.kind.id(),
        );
    }

    out.push_str("\n]\n");
    out
}
