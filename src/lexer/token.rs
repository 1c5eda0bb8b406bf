//! Lexeme and token-kind definitions

use std::fmt;

/// Classification of a lexeme.
///
/// Besides the real tokens of the language this also carries the three
/// pseudo-kinds the lexer uses to report the end of input or a lexical
/// fault, so that the parser sees every outcome through the same lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    EndOfFile,
    InvalidToken,
    UnexpectedEof,

    // Punctuation
    Semicolon, // ;
    Comma,     // ,
    OpenPar,   // (
    ClosePar,  // )

    // Operators
    Assign,       // :=
    Not,          // !
    Add,          // +
    Sub,          // -
    Mul,          // *
    Div,          // /
    Equal,        // =
    GreaterThan,  // >
    GreaterEqual, // >=
    LowerThan,    // <
    LowerEqual,   // <=
    NotEqual,     // !=
    Or,           // ||
    And,          // &&

    // Keywords
    App,
    Var,
    Init,
    Return,
    Integer,
    Real,
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Read,
    Write,

    // Classes
    Identifier,
    IntegerConst,
    RealConst,
    Text,
}

impl TokenKind {
    /// Kinds after which the lexer has nothing more to offer
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TokenKind::EndOfFile
                | TokenKind::InvalidToken
                | TokenKind::UnexpectedEof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::EndOfFile => "END_OF_FILE",
            TokenKind::InvalidToken => "INVALID_TOKEN",
            TokenKind::UnexpectedEof => "UNEXPECTED_EOF",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::OpenPar => "OPEN_PAR",
            TokenKind::ClosePar => "CLOSE_PAR",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Not => "NOT",
            TokenKind::Add => "ADD",
            TokenKind::Sub => "SUB",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::Equal => "EQUAL",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::LowerThan => "LOWER_THAN",
            TokenKind::LowerEqual => "LOWER_EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::App => "APP",
            TokenKind::Var => "VAR",
            TokenKind::Init => "INIT",
            TokenKind::Return => "RETURN",
            TokenKind::Integer => "INTEGER",
            TokenKind::Real => "REAL",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Until => "UNTIL",
            TokenKind::Read => "READ",
            TokenKind::Write => "WRITE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerConst => "INTEGER_CONST",
            TokenKind::RealConst => "REAL_CONST",
            TokenKind::Text => "TEXT",
        };
        f.write_str(name)
    }
}

/// One classified unit of source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub text: String,
    pub kind: TokenKind,
}

impl Lexeme {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\"{}\", {})", self.text, self.kind)
    }
}
