//! Lexical analysis
//!
//! - [`token`]: [`Lexeme`] and [`TokenKind`] definitions
//! - [`reserved`]: the reserved-word/operator table
//! - [`lexer`]: the byte-driven state machine
//!
//! The lexer is pull based: the parser asks for one lexeme at a time and
//! never holds more than one lookahead.

pub mod lexer;
pub mod reserved;
pub mod token;

pub use lexer::Lexer;
pub use reserved::ReservedWords;
pub use token::{Lexeme, TokenKind};
