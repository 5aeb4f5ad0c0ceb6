//! Single-pass translator from a token stream to a C program.
//!
//! Each grammar production is a method that checks the current token,
//! writes its C counterpart to the [`Emitter`] and advances. There is
//! no syntax tree and no backtracking:
//!
//! ```text
//! program    := { statement } EOF
//! statement  := PRINT (string | expression) nl
//!             | INPUT IDENTIFIER nl
//!             | LET IDENTIFIER "=" expression nl
//!             | IF comparison THEN nl { statement } ENDIF
//!             | WHILE comparison REPEAT nl { statement } ENDWHILE
//!             | NEWLINE
//! comparison := expression comp_op expression { comp_op expression }
//! expression := term { ("+" | "-") term }
//! term       := unary { ("*" | "/") unary }
//! unary      := [ "+" | "-" ] primary
//! primary    := NUMBER | IDENTIFIER
//! nl         := NEWLINE { NEWLINE }
//! ```

use std::collections::HashSet;
use std::fmt;

use crate::emitter::Emitter;
use crate::token::{Span, Token, TokenKind};

/// Deepest `IF`/`WHILE` nesting accepted. Block bodies are translated
/// recursively, so this bounds stack use.
pub const MAX_NESTING: usize = 256;

/// The two statement forms that open a nested block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    If,
    While,
}

impl Block {
    const fn header(self) -> &'static str {
        match self {
            Self::If => "if (",
            Self::While => "while (",
        }
    }

    /// Keyword between the condition and the body.
    const fn separator(self) -> TokenKind {
        match self {
            Self::If => TokenKind::Then,
            Self::While => TokenKind::Repeat,
        }
    }

    const fn missing_separator(self) -> ParseErrorKind {
        match self {
            Self::If => ParseErrorKind::ExpectedThen,
            Self::While => ParseErrorKind::ExpectedRepeat,
        }
    }

    /// Keyword that closes the body.
    #[must_use]
    pub const fn terminator(self) -> TokenKind {
        match self {
            Self::If => TokenKind::EndIf,
            Self::While => TokenKind::EndWhile,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::If => write!(f, "IF"),
            Self::While => write!(f, "WHILE"),
        }
    }
}

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Token cannot start a statement.
    ExpectedStatement,
    ExpectedNewline,
    /// `INPUT` or `LET` not followed by a variable name.
    ExpectedIdentifier,
    ExpectedAssign,
    ExpectedThen,
    ExpectedRepeat,
    ExpectedComparisonOperator,
    /// Expected a number or a variable name.
    ExpectedPrimary,
    /// End of input reached inside an `IF` or `WHILE` body.
    UnterminatedBlock(Block),
    /// More than [`MAX_NESTING`] blocks open at once.
    NestingTooDeep,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedStatement => write!(f, "expected a statement"),
            Self::ExpectedNewline => write!(f, "expected newline"),
            Self::ExpectedIdentifier => write!(f, "expected identifier"),
            Self::ExpectedAssign => write!(f, "expected '='"),
            Self::ExpectedThen => write!(f, "expected 'THEN'"),
            Self::ExpectedRepeat => write!(f, "expected 'REPEAT'"),
            Self::ExpectedComparisonOperator => {
                write!(f, "expected comparison operator")
            }
            Self::ExpectedPrimary => {
                write!(f, "expected number or identifier")
            }
            Self::UnterminatedBlock(block) => {
                write!(
                    f,
                    "{block} block has no '{}' before end of input",
                    block.terminator()
                )
            }
            Self::NestingTooDeep => {
                write!(f, "blocks nested more than {MAX_NESTING} deep")
            }
        }
    }
}

/// Error produced during translation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{kind}, found {found} at token {position} (line {}, column {})",
    span.line,
    span.column
)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Kind of the offending token.
    pub found: TokenKind,
    /// Index of the offending token in the stream.
    pub position: usize,
    pub span: Span,
}

/// Translate a token stream into a complete C program.
///
/// A stream that runs out without an `Eof` token is treated as if it
/// ended with one.
///
/// # Errors
///
/// Returns `ParseError` at the first token that does not fit the
/// grammar, including an `IF`/`WHILE` body that reaches end of input.
pub fn translate(tokens: &[Token]) -> Result<String, ParseError> {
    Translator::new(tokens).translate()
}

struct Translator<'a> {
    tokens: &'a [Token],
    pos: usize,
    declared: HashSet<String>,
    out: Emitter,
}

impl<'a> Translator<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            declared: HashSet::new(),
            out: Emitter::new(),
        }
    }

    fn translate(mut self) -> Result<String, ParseError> {
        while self.kind() != TokenKind::Eof {
            self.statement()?;
        }
        Ok(self.out.finish())
    }

    fn statement(&mut self) -> Result<(), ParseError> {
        match self.kind() {
            TokenKind::Print => self.print(),
            TokenKind::Input => self.input(),
            TokenKind::Let => self.assignment(),
            TokenKind::If => self.block(Block::If),
            TokenKind::While => self.block(Block::While),
            TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error(ParseErrorKind::ExpectedStatement)),
        }
    }

    fn print(&mut self) -> Result<(), ParseError> {
        self.advance(); // PRINT
        self.out.push("printf(");

        if self.kind() == TokenKind::String {
            let text = self.text();
            self.out.push_string_literal(text);
            self.advance();
        } else {
            self.out.push("\"%f\\n\", (float)(");
            self.expression()?;
            self.out.push(")");
        }

        self.out.push(");");
        self.out.end_line();
        self.newline()
    }

    fn input(&mut self) -> Result<(), ParseError> {
        self.advance(); // INPUT
        let name = self.identifier()?;

        if self.declared.insert(name.to_string()) {
            self.out.line(&format!("float {name};"));
        }
        self.out.line(&format!("scanf(\"%f\", &{name});"));
        self.newline()
    }

    fn assignment(&mut self) -> Result<(), ParseError> {
        self.advance(); // LET
        let name = self.identifier()?;

        if self.declared.insert(name.to_string()) {
            self.out.push("float ");
        }
        self.out.push(name);

        self.expect(TokenKind::Assign, ParseErrorKind::ExpectedAssign)?;
        self.out.push(" = ");
        self.expression()?;
        self.out.push(";");
        self.out.end_line();
        self.newline()
    }

    fn block(&mut self, block: Block) -> Result<(), ParseError> {
        // depth 1 is the body of main
        if self.out.depth() > MAX_NESTING {
            return Err(self.error(ParseErrorKind::NestingTooDeep));
        }
        self.advance(); // IF / WHILE
        self.out.push(block.header());
        self.comparison()?;
        self.out.push(")");
        self.out.end_line();

        self.expect(block.separator(), block.missing_separator())?;
        self.newline()?;

        self.out.open_block();
        while self.kind() != block.terminator() {
            if self.kind() == TokenKind::Eof {
                return Err(self.error(ParseErrorKind::UnterminatedBlock(block)));
            }
            self.statement()?;
        }
        self.advance(); // ENDIF / ENDWHILE
        self.out.close_block();
        Ok(())
    }

    fn comparison(&mut self) -> Result<(), ParseError> {
        self.expression()?;
        self.comparison_operator()?;
        self.expression()?;

        while self.kind().is_comparison_operator() {
            self.comparison_operator()?;
            self.expression()?;
        }
        Ok(())
    }

    fn comparison_operator(&mut self) -> Result<(), ParseError> {
        let kind = self.kind();
        if !kind.is_comparison_operator() {
            return Err(self.error(ParseErrorKind::ExpectedComparisonOperator));
        }
        self.binary_operator(kind);
        Ok(())
    }

    fn expression(&mut self) -> Result<(), ParseError> {
        self.term()?;
        while let kind @ (TokenKind::Add | TokenKind::Subtract) = self.kind() {
            self.binary_operator(kind);
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), ParseError> {
        self.unary()?;
        while let kind @ (TokenKind::Multiply | TokenKind::Divide) = self.kind() {
            self.binary_operator(kind);
            self.unary()?;
        }
        Ok(())
    }

    fn unary(&mut self) -> Result<(), ParseError> {
        if let kind @ (TokenKind::Add | TokenKind::Subtract) = self.kind() {
            self.out.push(c_operator(kind));
            self.advance();
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<(), ParseError> {
        match self.kind() {
            TokenKind::Number | TokenKind::Identifier => {
                let text = self.text();
                self.out.push(text);
                self.advance();
                Ok(())
            }
            _ => Err(self.error(ParseErrorKind::ExpectedPrimary)),
        }
    }

    fn binary_operator(&mut self, kind: TokenKind) {
        self.out.push(" ");
        self.out.push(c_operator(kind));
        self.out.push(" ");
        self.advance();
    }

    /// Consume an identifier and return its name.
    fn identifier(&mut self) -> Result<&'a str, ParseError> {
        if self.kind() != TokenKind::Identifier {
            return Err(self.error(ParseErrorKind::ExpectedIdentifier));
        }
        let name = self.text();
        self.advance();
        Ok(name)
    }

    fn newline(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Newline, ParseErrorKind::ExpectedNewline)?;
        while self.kind() == TokenKind::Newline {
            self.advance();
        }
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind, err: ParseErrorKind) -> Result<(), ParseError> {
        if self.kind() != kind {
            return Err(self.error(err));
        }
        self.advance();
        Ok(())
    }

    fn kind(&self) -> TokenKind {
        self.tokens.get(self.pos).map_or(TokenKind::Eof, |t| t.kind)
    }

    fn text(&self) -> &'a str {
        self.tokens.get(self.pos).map_or("", |t| t.text.as_str())
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        let span = self
            .tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(Span { line: 1, column: 1 }, |t| t.span);
        ParseError {
            kind,
            found: self.kind(),
            position: self.pos,
            span,
        }
    }
}

/// C spelling of an operator token.
const fn c_operator(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Add => "+",
        TokenKind::Subtract => "-",
        TokenKind::Multiply => "*",
        TokenKind::Divide => "/",
        TokenKind::Equal => "==",
        TokenKind::NotEqual => "!=",
        TokenKind::Less => "<",
        TokenKind::LessEqual => "<=",
        TokenKind::Greater => ">",
        TokenKind::GreaterEqual => ">=",
        _ => "",
    }
}
