use std::fmt;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
///
/// Discriminants are stable and show up as the `id` field of a
/// token listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// End of input, always the last token of a stream.
    Eof = 0,
    /// Line break, terminates statements.
    Newline = 1,
    /// Numeric literal (`12`, `3.25`).
    Number = 2,
    /// Variable name.
    Identifier = 3,
    /// Double-quoted string, quotes stripped.
    String = 4,

    Let = 101,
    Print = 102,
    Input = 103,
    If = 104,
    Then = 105,
    EndIf = 106,
    While = 107,
    Repeat = 108,
    EndWhile = 109,

    /// `=`
    Assign = 201,
    /// `+`
    Add = 202,
    /// `-`
    Subtract = 203,
    /// `*`
    Multiply = 204,
    /// `/`
    Divide = 205,
    /// `==`
    Equal = 206,
    /// `<>` or `!=`
    NotEqual = 207,
    /// `<`
    Less = 208,
    /// `<=`
    LessEqual = 209,
    /// `>`
    Greater = 210,
    /// `>=`
    GreaterEqual = 211,

    /// Character that cannot start any token.
    Unknown = 255,
}

const KEYWORDS: [(&str, TokenKind); 9] = [
    ("LET", TokenKind::Let),
    ("PRINT", TokenKind::Print),
    ("INPUT", TokenKind::Input),
    ("IF", TokenKind::If),
    ("THEN", TokenKind::Then),
    ("ENDIF", TokenKind::EndIf),
    ("WHILE", TokenKind::While),
    ("REPEAT", TokenKind::Repeat),
    ("ENDWHILE", TokenKind::EndWhile),
];

impl TokenKind {
    /// Look up a keyword by exact, case-sensitive match.
    #[must_use]
    pub fn keyword(text: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(word, _)| *word == text)
            .map(|&(_, kind)| kind)
    }

    /// Stable numeric id of this kind.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_comparison_operator(self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::Less
                | Self::LessEqual
                | Self::Greater
                | Self::GreaterEqual
        )
    }

    /// Human-readable name used by the token listing.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Newline => "Newline",
            Self::Number => "Number",
            Self::Identifier => "Identifier",
            Self::String => "String",
            Self::Let
            | Self::Print
            | Self::Input
            | Self::If
            | Self::Then
            | Self::EndIf
            | Self::While
            | Self::Repeat
            | Self::EndWhile => "Keyword",
            Self::Assign => "Assign",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Equal => "Equal",
            Self::NotEqual => "Not equal",
            Self::Less => "Less than",
            Self::LessEqual => "Less than or equal to",
            Self::Greater => "Greater than",
            Self::GreaterEqual => "Greater than or equal to",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "EOF",
            Self::Newline => "NEWLINE",
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Let => "LET",
            Self::Print => "PRINT",
            Self::Input => "INPUT",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::EndIf => "ENDIF",
            Self::While => "WHILE",
            Self::Repeat => "REPEAT",
            Self::EndWhile => "ENDWHILE",
            Self::Assign => "ASSIGN",
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// A single token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
