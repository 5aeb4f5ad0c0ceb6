//! Lexer edge cases and error tests.

use basic2c::{LexErrorKind, Span, StopReason, TokenKind, scan};

mod common;
use common::kinds;

// -----------------------------------------------------------
// Basic lexer behaviour.
// -----------------------------------------------------------

#[test]
fn lex_only_whitespace() {
    assert_eq!(kinds("  \t \r  "), vec![TokenKind::Eof]);
}

#[test]
fn lex_blank_lines_are_newline_tokens() {
    assert_eq!(
        kinds("\n\n"),
        vec![TokenKind::Newline, TokenKind::Newline, TokenKind::Eof]
    );
}

#[test]
fn lex_exactly_one_eof() {
    let tokens = scan("PRINT \"A\"\n").expect("scan");
    let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
    assert_eq!(eofs, 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn lex_all_keywords() {
    assert_eq!(
        kinds("LET PRINT INPUT IF THEN ENDIF WHILE REPEAT ENDWHILE"),
        vec![
            TokenKind::Let,
            TokenKind::Print,
            TokenKind::Input,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::EndIf,
            TokenKind::While,
            TokenKind::Repeat,
            TokenKind::EndWhile,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_full_statement() {
    let tokens = scan("WHILE N >= 1.5 REPEAT\n").expect("scan");
    let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        pairs,
        vec![
            (TokenKind::While, "WHILE"),
            (TokenKind::Identifier, "N"),
            (TokenKind::GreaterEqual, ">="),
            (TokenKind::Number, "1.5"),
            (TokenKind::Repeat, "REPEAT"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn lex_signs_are_separate_tokens() {
    assert_eq!(
        kinds("-5"),
        vec![TokenKind::Subtract, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn lex_adjacent_operators_without_spaces() {
    assert_eq!(
        kinds("A<=B<>C"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEqual,
            TokenKind::Identifier,
            TokenKind::NotEqual,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_empty_string() {
    let tokens = scan("\"\"").expect("scan");
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "");
}

#[test]
fn lex_string_keeps_keywords_and_symbols() {
    let tokens = scan("\"PRINT #1 <> 2!\"").expect("scan");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "PRINT #1 <> 2!");
}

#[test]
fn lex_comment_between_statements() {
    assert_eq!(
        kinds("LET A = 1 # set A\nPRINT A\n"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::Newline,
            TokenKind::Print,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_eof_span_after_last_byte() {
    let tokens = scan("AB\nC").expect("scan");
    let eof = tokens.last().expect("eof");
    assert_eq!(eof.span, Span { line: 2, column: 2 });
}

// -----------------------------------------------------------
// Lexer errors.
// -----------------------------------------------------------

#[test]
fn lex_error_backslash_in_string() {
    let err = scan("\"a\\b\"").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::DisallowedStringChar('\\'));
}

#[test]
fn lex_error_tab_in_string() {
    let err = scan("\"a\tb\"").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::DisallowedStringChar('\t'));
}

#[test]
fn lex_error_newline_in_string() {
    let err = scan("\"a\nb\"").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::DisallowedStringChar('\n'));
    assert_eq!(err.span, Span { line: 1, column: 3 });
}

#[test]
fn lex_error_carriage_return_in_string() {
    let err = scan("\"a\rb\"").unwrap_err();
    assert_eq!(err.kind.reason(), StopReason::InvalidString);
}

#[test]
fn lex_error_point_then_letter() {
    let err = scan("LET X = 1.A\n").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::MissingDigitAfterPoint);
    assert_eq!(err.span, Span { line: 1, column: 11 });
}

#[test]
fn lex_error_three_part_number() {
    let err = scan("1.2.3").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::MultipleDecimalPoints);
}

#[test]
fn lex_error_leading_point_is_unknown() {
    let err = scan(".5").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnknownToken('.'));
}

#[test]
fn lex_error_non_ascii_identifier() {
    let err = scan("LET é = 1\n").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnknownToken('é'));
}

#[test]
fn lex_error_peek_eof_on_each_operator() {
    for (input, op) in [("A <", '<'), ("A >", '>'), ("A =", '='), ("A !", '!')] {
        let err = scan(input).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::PeekEof(op), "input {input:?}");
    }
}

#[test]
fn lex_error_stops_at_first_failure() {
    // The unknown character comes first; the bad number is never reached.
    let err = scan("@ 1..2").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnknownToken('@'));
}
