//! Reserved-word and operator table
//!
//! Maps the exact text of every punctuation mark, operator and keyword to
//! its [`TokenKind`]. The lexer uses it to classify a maximal-munch lexeme;
//! the semantic analyzer uses it to refuse keyword text as a variable name.

use super::token::TokenKind;
use rustc_hash::FxHashMap;

const ENTRIES: &[(&str, TokenKind)] = &[
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    ("(", TokenKind::OpenPar),
    (")", TokenKind::ClosePar),
    (":=", TokenKind::Assign),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("<", TokenKind::LowerThan),
    (">", TokenKind::GreaterThan),
    ("<=", TokenKind::LowerEqual),
    (">=", TokenKind::GreaterEqual),
    ("=", TokenKind::Equal),
    ("!=", TokenKind::NotEqual),
    ("+", TokenKind::Add),
    ("-", TokenKind::Sub),
    ("*", TokenKind::Mul),
    ("/", TokenKind::Div),
    ("!", TokenKind::Not),
    ("app", TokenKind::App),
    ("var", TokenKind::Var),
    ("init", TokenKind::Init),
    ("return", TokenKind::Return),
    ("integer", TokenKind::Integer),
    ("real", TokenKind::Real),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("end", TokenKind::End),
    ("repeat", TokenKind::Repeat),
    ("until", TokenKind::Until),
    ("read", TokenKind::Read),
    ("write", TokenKind::Write),
];

/// Immutable lookup from reserved text to token kind
#[derive(Debug, Clone)]
pub struct ReservedWords {
    table: FxHashMap<&'static str, TokenKind>,
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservedWords {
    pub fn new() -> Self {
        Self {
            table: ENTRIES.iter().copied().collect(),
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.table.contains_key(text)
    }

    /// Classify `text`, falling back to [`TokenKind::Identifier`]
    pub fn find(&self, text: &str) -> TokenKind {
        self.table
            .get(text)
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    /// Every reserved text with its kind, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.table.iter().map(|(text, kind)| (*text, *kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_and_operators_are_found() {
        let reserved = ReservedWords::new();
        assert_eq!(reserved.find("repeat"), TokenKind::Repeat);
        assert_eq!(reserved.find(":="), TokenKind::Assign);
        assert_eq!(reserved.find("!="), TokenKind::NotEqual);
        assert!(reserved.contains("write"));
    }

    #[test]
    fn test_unknown_text_is_an_identifier() {
        let reserved = ReservedWords::new();
        assert_eq!(reserved.find("total"), TokenKind::Identifier);
        assert_eq!(reserved.find("App"), TokenKind::Identifier);
        assert!(!reserved.contains("integer1"));
    }

    #[test]
    fn test_table_has_no_duplicate_text() {
        let reserved = ReservedWords::new();
        assert_eq!(reserved.iter().count(), ENTRIES.len());
    }
}
