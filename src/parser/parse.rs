//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its lookahead helpers and the
//! [`Parser::parse_program`] entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a single-lookahead recursive descent recognizer that pulls
//! lexemes from the [`Lexer`] on demand and calls the [`SemanticAnalyzer`]
//! as each production is recognized:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: program header, `var` section, declarations
//! - `statements`: statement list and the five statement forms
//! - `expressions`: conditions and expressions, synthesizing a [`Type`]
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::errors::{AnalysisError, Diagnostic, Fault};
use crate::lexer::{Lexeme, Lexer, ReservedWords, TokenKind};
use crate::semantic::{SemanticAnalyzer, SemanticError, Type, Variable};
use crate::source::ByteSource;

/// Deepest allowed nesting of parentheses and compound statements
pub const MAX_NESTING: usize = 100;

/// Summary of an accepted program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub name: String,
    /// Declared variables in declaration order, without the program name
    pub variables: Vec<Variable>,
}

/// Recursive descent parser for the `app` language
pub struct Parser<'r, S> {
    pub(crate) lexer: Lexer<'r, S>,
    pub(crate) current: Lexeme,
    pub(crate) semantic: SemanticAnalyzer<'r>,
    depth: usize,
}

impl<'r, S: ByteSource> Parser<'r, S> {
    /// Create a parser and read the first lookahead lexeme
    pub fn new(source: S, reserved: &'r ReservedWords) -> Result<Self, AnalysisError> {
        let mut lexer = Lexer::new(source, reserved);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            semantic: SemanticAnalyzer::new(reserved),
            depth: 0,
        })
    }

    /// Recognize and check a whole program
    ///
    /// The program ends at `return`; nothing after it is read.
    pub fn parse_program(mut self) -> Result<Program, AnalysisError> {
        let name = self.parse_header()?;
        self.parse_body()?;

        tracing::debug!(
            program = %name,
            lines = self.lexer.line(),
            "program accepted"
        );

        let variables = self
            .semantic
            .into_variables()
            .into_iter()
            .filter(|v| v.ty != Type::Program)
            .collect();
        Ok(Program { name, variables })
    }

    // ===== Helper methods =====

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Move to the next lexeme, returning the one just passed
    pub(crate) fn advance(&mut self) -> Result<Lexeme, AnalysisError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Lexeme, AnalysisError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    /// Text of the lookahead identifier, without consuming it
    pub(crate) fn peek_identifier(&self) -> Result<&str, AnalysisError> {
        if self.check(TokenKind::Identifier) {
            Ok(&self.current.text)
        } else {
            Err(self.unexpected())
        }
    }

    /// Fault for the current lookahead not fitting the grammar
    pub(crate) fn unexpected(&self) -> AnalysisError {
        let fault = match self.current.kind {
            TokenKind::InvalidToken => Fault::InvalidToken(self.current.text.clone()),
            TokenKind::UnexpectedEof | TokenKind::EndOfFile => Fault::UnexpectedEof,
            _ => Fault::UnexpectedToken(self.current.text.clone()),
        };
        Diagnostic::new(self.lexer.line(), fault).into()
    }

    /// Attach the current line to a semantic error
    pub(crate) fn semantic_fault(&self, error: SemanticError) -> AnalysisError {
        Diagnostic::new(self.lexer.line(), error).into()
    }

    /// Attach a line recorded earlier, where the checked construct began
    pub(crate) fn semantic_fault_at(&self, line: usize, error: SemanticError) -> AnalysisError {
        Diagnostic::new(line, error).into()
    }

    /// Run `parse` one nesting level deeper, failing past [`MAX_NESTING`]
    pub(crate) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, AnalysisError>,
    ) -> Result<T, AnalysisError> {
        if self.depth >= MAX_NESTING {
            return Err(Diagnostic::new(self.lexer.line(), Fault::NestingTooDeep).into());
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}
