//! Declaration parsing implementation
//!
//! This module handles the program header and the optional `var` section:
//!
//! - Program header: `app Name`
//! - Body: `[var decl_list] init stmt_list return`
//! - Declarations: `integer a, b; real c`
//!
//! # Grammar
//!
//! ```text
//! program    ::= "app" IDENT body
//! body       ::= ["var" decl_list] "init" stmt_list "return"
//! decl_list  ::= decl {";" decl}
//! decl       ::= type ident_list
//! ident_list ::= IDENT {"," IDENT}
//! type       ::= "integer" | "real"
//! ```
//!
//! The program name and every declared identifier are registered with the
//! semantic analyzer while the identifier is still the lookahead, so a
//! redeclaration is reported on the line where it appears.

use crate::errors::AnalysisError;
use crate::lexer::TokenKind;
use crate::parser::parse::Parser;
use crate::semantic::Type;
use crate::source::ByteSource;

impl<'r, S: ByteSource> Parser<'r, S> {
    /// Parse `app IDENT`, returning the program name
    pub(crate) fn parse_header(&mut self) -> Result<String, AnalysisError> {
        self.expect(TokenKind::App)?;

        let name = self.peek_identifier()?.to_string();
        self.semantic
            .declare(&name, Type::Program)
            .map_err(|e| self.semantic_fault(e))?;
        self.advance()?;

        Ok(name)
    }

    pub(crate) fn parse_body(&mut self) -> Result<(), AnalysisError> {
        if self.check(TokenKind::Var) {
            self.advance()?;
            self.parse_decl_list()?;
        }

        self.expect(TokenKind::Init)?;
        self.parse_stmt_list()?;

        // `return` closes the program; the lexeme after it is never read
        if self.check(TokenKind::Return) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn parse_decl_list(&mut self) -> Result<(), AnalysisError> {
        self.parse_decl()?;
        while self.check(TokenKind::Semicolon) {
            self.advance()?;
            self.parse_decl()?;
        }
        Ok(())
    }

    fn parse_decl(&mut self) -> Result<(), AnalysisError> {
        let ty = self.parse_type()?;
        self.parse_ident_list(ty)
    }

    fn parse_type(&mut self) -> Result<Type, AnalysisError> {
        let ty = match self.current.kind {
            TokenKind::Integer => Type::Integer,
            TokenKind::Real => Type::Real,
            _ => return Err(self.unexpected()),
        };
        self.advance()?;
        Ok(ty)
    }

    fn parse_ident_list(&mut self, ty: Type) -> Result<(), AnalysisError> {
        loop {
            let name = self.peek_identifier()?.to_string();
            self.semantic
                .declare(&name, ty)
                .map_err(|e| self.semantic_fault(e))?;
            self.advance()?;

            if !self.check(TokenKind::Comma) {
                return Ok(());
            }
            self.advance()?;
        }
    }
}
