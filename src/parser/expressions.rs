//! Expression parsing implementation
//!
//! This module handles conditions and expressions. Every level synthesizes
//! the [`Type`] of what it recognized and hands it to its caller, checking
//! each operator against its operand types as soon as the right operand has
//! been parsed.
//!
//! # Precedence
//!
//! From loosest to tightest, all binary levels left-associative:
//!
//! ```text
//! expression  ::= simple_expr {("=" | ">" | ">=" | "<" | "<=" | "!=") simple_expr}
//! simple_expr ::= term {("+" | "-" | "||") term}
//! term        ::= factor_a {("*" | "/" | "&&") factor_a}
//! factor_a    ::= ["-" | "!"] factor
//! factor      ::= IDENT | INT_CONST | REAL_CONST | "(" expression ")"
//! ```

use crate::errors::AnalysisError;
use crate::lexer::TokenKind;
use crate::parser::parse::Parser;
use crate::semantic::Type;
use crate::source::ByteSource;

impl<'r, S: ByteSource> Parser<'r, S> {
    /// Parse a condition, which must be boolean
    pub(crate) fn parse_condition(&mut self) -> Result<(), AnalysisError> {
        let line = self.lexer.line();
        let ty = self.parse_expression()?;
        self.semantic
            .check_condition(ty)
            .map_err(|e| self.semantic_fault_at(line, e))
    }

    /// Parse comparisons (= != > >= < <=)
    pub(crate) fn parse_expression(&mut self) -> Result<Type, AnalysisError> {
        let mut left = self.parse_simple_expr()?;

        loop {
            let op = self.current.kind;
            let equality = match op {
                TokenKind::Equal | TokenKind::NotEqual => true,
                TokenKind::GreaterThan
                | TokenKind::GreaterEqual
                | TokenKind::LowerThan
                | TokenKind::LowerEqual => false,
                _ => return Ok(left),
            };
            let line = self.lexer.line();
            self.advance()?;

            let right = self.parse_simple_expr()?;
            let checked = if equality {
                self.semantic.equality(left, right)
            } else {
                self.semantic.relational(left, right)
            };
            left = checked.map_err(|e| self.semantic_fault_at(line, e))?;
        }
    }

    /// Parse additive operators (+ - ||)
    pub(crate) fn parse_simple_expr(&mut self) -> Result<Type, AnalysisError> {
        let mut left = self.parse_term()?;

        loop {
            let op = self.current.kind;
            if !matches!(op, TokenKind::Add | TokenKind::Sub | TokenKind::Or) {
                return Ok(left);
            }
            let line = self.lexer.line();
            self.advance()?;

            let right = self.parse_term()?;
            let checked = match op {
                TokenKind::Or => self.semantic.logical(left, right),
                _ => self.semantic.arithmetic(left, right),
            };
            left = checked.map_err(|e| self.semantic_fault_at(line, e))?;
        }
    }

    /// Parse multiplicative operators (* / &&)
    fn parse_term(&mut self) -> Result<Type, AnalysisError> {
        let mut left = self.parse_factor_a()?;

        loop {
            let op = self.current.kind;
            if !matches!(op, TokenKind::Mul | TokenKind::Div | TokenKind::And) {
                return Ok(left);
            }
            let line = self.lexer.line();
            self.advance()?;

            let right = self.parse_factor_a()?;
            let checked = match op {
                TokenKind::And => self.semantic.logical(left, right),
                _ => self.semantic.arithmetic(left, right),
            };
            left = checked.map_err(|e| self.semantic_fault_at(line, e))?;
        }
    }

    /// Parse an optionally negated factor
    fn parse_factor_a(&mut self) -> Result<Type, AnalysisError> {
        match self.current.kind {
            TokenKind::Sub => {
                let line = self.lexer.line();
                self.advance()?;
                let operand = self.parse_factor()?;
                self.semantic
                    .unary_minus(operand)
                    .map_err(|e| self.semantic_fault_at(line, e))
            }
            TokenKind::Not => {
                let line = self.lexer.line();
                self.advance()?;
                let operand = self.parse_factor()?;
                self.semantic
                    .unary_not(operand)
                    .map_err(|e| self.semantic_fault_at(line, e))
            }
            _ => self.parse_factor(),
        }
    }

    fn parse_factor(&mut self) -> Result<Type, AnalysisError> {
        let ty = match self.current.kind {
            TokenKind::Identifier => self
                .semantic
                .operand(&self.current.text)
                .map_err(|e| self.semantic_fault(e))?,
            TokenKind::IntegerConst => Type::Integer,
            TokenKind::RealConst => Type::Real,
            TokenKind::OpenPar => {
                return self.nested(|parser| {
                    parser.advance()?;
                    let inner = parser.parse_expression()?;
                    parser.expect(TokenKind::ClosePar)?;
                    Ok(inner)
                });
            }
            _ => return Err(self.unexpected()),
        };
        self.advance()?;
        Ok(ty)
    }
}
