//! Statement parsing implementation
//!
//! This module handles parsing of all statement types:
//!
//! - Assignment: `x := expr`
//! - Control flow: `if ... then ... [else ...] end`, `repeat ... until ...`
//! - I/O: `read(x)`, `write(expr)`, `write({text})`
//!
//! # Grammar
//!
//! ```text
//! stmt_list   ::= stmt {";" stmt}
//! stmt        ::= assign_stmt | if_stmt | repeat_stmt | read_stmt | write_stmt
//! assign_stmt ::= IDENT ":=" simple_expr
//! if_stmt     ::= "if" condition "then" stmt_list ["else" stmt_list] "end"
//! repeat_stmt ::= "repeat" stmt_list "until" condition
//! read_stmt   ::= "read" "(" IDENT ")"
//! write_stmt  ::= "write" "(" writable ")"
//! writable    ::= simple_expr | TEXT
//! ```

use crate::errors::AnalysisError;
use crate::lexer::TokenKind;
use crate::parser::parse::Parser;
use crate::source::ByteSource;

impl<'r, S: ByteSource> Parser<'r, S> {
    pub(crate) fn parse_stmt_list(&mut self) -> Result<(), AnalysisError> {
        self.parse_statement()?;
        while self.check(TokenKind::Semicolon) {
            self.advance()?;
            self.parse_statement()?;
        }
        Ok(())
    }

    fn parse_statement(&mut self) -> Result<(), AnalysisError> {
        match self.current.kind {
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::If => self.nested(Self::parse_if_statement),
            TokenKind::Repeat => self.nested(Self::parse_repeat_statement),
            TokenKind::Read => self.parse_read_statement(),
            TokenKind::Write => self.parse_write_statement(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_assignment(&mut self) -> Result<(), AnalysisError> {
        let line = self.lexer.line();
        let name = self.peek_identifier()?;
        let target = self
            .semantic
            .lookup(name)
            .map_err(|e| self.semantic_fault(e))?
            .clone();
        self.advance()?;

        self.expect(TokenKind::Assign)?;
        let found = self.parse_simple_expr()?;
        self.semantic
            .check_assignment(&target, found)
            .map_err(|e| self.semantic_fault_at(line, e))?;

        tracing::debug!(
            line,
            target = %target.name,
            %found,
            "assignment"
        );
        Ok(())
    }

    fn parse_if_statement(&mut self) -> Result<(), AnalysisError> {
        self.expect(TokenKind::If)?;
        self.parse_condition()?;
        self.expect(TokenKind::Then)?;
        self.parse_stmt_list()?;

        if self.check(TokenKind::Else) {
            self.advance()?;
            self.parse_stmt_list()?;
        }

        self.expect(TokenKind::End)?;
        Ok(())
    }

    fn parse_repeat_statement(&mut self) -> Result<(), AnalysisError> {
        self.expect(TokenKind::Repeat)?;
        self.parse_stmt_list()?;
        self.expect(TokenKind::Until)?;
        self.parse_condition()
    }

    fn parse_read_statement(&mut self) -> Result<(), AnalysisError> {
        self.expect(TokenKind::Read)?;
        self.expect(TokenKind::OpenPar)?;

        let name = self.peek_identifier()?;
        self.semantic
            .read_target(name)
            .map_err(|e| self.semantic_fault(e))?;
        self.advance()?;

        self.expect(TokenKind::ClosePar)?;
        Ok(())
    }

    fn parse_write_statement(&mut self) -> Result<(), AnalysisError> {
        self.expect(TokenKind::Write)?;
        self.expect(TokenKind::OpenPar)?;
        self.parse_writable()?;
        self.expect(TokenKind::ClosePar)?;
        Ok(())
    }

    fn parse_writable(&mut self) -> Result<(), AnalysisError> {
        match self.current.kind {
            TokenKind::Text => {
                self.advance()?;
                Ok(())
            }
            TokenKind::Identifier
            | TokenKind::IntegerConst
            | TokenKind::RealConst
            | TokenKind::OpenPar
            | TokenKind::Sub
            | TokenKind::Not => {
                self.parse_simple_expr()?;
                Ok(())
            }
            _ => Err(self.unexpected()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{AnalysisError, Diagnostic, Fault};
    use crate::lexer::ReservedWords;
    use crate::parser::parse::Parser;
    use crate::semantic::{SemanticError, Type};
    use crate::source::PushbackReader;

    fn check(source: &str) -> Result<(), Diagnostic> {
        let reserved = ReservedWords::new();
        let result = Parser::new(PushbackReader::new(source.as_bytes()), &reserved)
            .and_then(|parser| parser.parse_program());
        match result {
            Ok(_) => Ok(()),
            Err(AnalysisError::Diagnostic(diagnostic)) => Err(diagnostic),
            Err(e) => panic!("Unexpected I/O error: {e}"),
        }
    }

    #[test]
    fn test_all_statement_forms() {
        let source = r#"
            app Loop
            var integer i, n; real avg
            init
                read(n);
                i := 0;
                avg := 0;
                repeat
                    i := i + 1;
                    if i > 10 then write({big}) else write(i) end
                until i >= n;
                write(avg / n)
            return
        "#;
        assert_eq!(check(source), Ok(()));
    }

    #[test]
    fn test_if_without_else() {
        let source = "app P var integer x init if x = 1 then x := 2 end return";
        assert_eq!(check(source), Ok(()));
    }

    #[test]
    fn test_undeclared_assignment_target() {
        let fault = check("app P init\n\ny := 1 return").unwrap_err();
        assert_eq!(fault.line, 3);
        assert_eq!(
            fault.fault,
            Fault::Semantic(SemanticError::Undeclared("y".into()))
        );
    }

    #[test]
    fn test_type_fault_points_at_statement() {
        let fault = check("app P var integer x init\nx := 1.5\n\n\nreturn").unwrap_err();
        assert_eq!(fault.line, 2);
        assert!(matches!(
            fault.fault,
            Fault::Semantic(SemanticError::IncompatibleAssignment { .. })
        ));

        let fault = check("app P var integer x init\nif x\n\nthen x := 1 end return").unwrap_err();
        assert_eq!(fault.line, 2);
    }

    #[test]
    fn test_nested_statements_are_limited() {
        use crate::parser::parse::MAX_NESTING;

        let deep = format!(
            "app P var integer x init {} x := 1 {} return",
            "repeat ".repeat(MAX_NESTING + 1),
            "until x = 1 ".repeat(MAX_NESTING + 1)
        );
        assert_eq!(check(&deep).unwrap_err().fault, Fault::NestingTooDeep);
    }

    #[test]
    fn test_assigning_to_program_name() {
        let fault = check("app P init P := 1 return").unwrap_err();
        assert_eq!(
            fault.fault,
            Fault::Semantic(SemanticError::AssignToProgramName("P".into()))
        );
    }

    #[test]
    fn test_narrowing_assignment() {
        let fault = check("app P var integer x init x := 1.5 return").unwrap_err();
        assert_eq!(
            fault.fault,
            Fault::Semantic(SemanticError::IncompatibleAssignment {
                name: "x".into(),
                target: Type::Integer,
                found: Type::Real,
            })
        );
    }

    #[test]
    fn test_non_boolean_condition() {
        let fault =
            check("app P var integer x init if x then x := 1 end return").unwrap_err();
        assert_eq!(
            fault.fault,
            Fault::Semantic(SemanticError::NonBooleanCondition(Type::Integer))
        );

        let fault =
            check("app P var real x init repeat x := 1 until x + 1 return").unwrap_err();
        assert_eq!(
            fault.fault,
            Fault::Semantic(SemanticError::NonBooleanCondition(Type::Real))
        );
    }

    #[test]
    fn test_read_requires_declared_variable() {
        let fault = check("app P init read(z) return").unwrap_err();
        assert_eq!(
            fault.fault,
            Fault::Semantic(SemanticError::Undeclared("z".into()))
        );

        let fault = check("app P init read(P) return").unwrap_err();
        assert_eq!(
            fault.fault,
            Fault::Semantic(SemanticError::ReadIntoProgramName("P".into()))
        );
    }

    #[test]
    fn test_write_rejects_non_writable() {
        let fault = check("app P init write(if) return").unwrap_err();
        assert_eq!(fault.fault, Fault::UnexpectedToken("if".into()));
    }

    #[test]
    fn test_empty_statement_list_is_rejected() {
        let fault = check("app P init return").unwrap_err();
        assert_eq!(fault.fault, Fault::UnexpectedToken("return".into()));
    }

    #[test]
    fn test_trailing_semicolon_before_return() {
        let fault = check("app P var integer x init x := 1; return").unwrap_err();
        assert_eq!(fault.fault, Fault::UnexpectedToken("return".into()));
    }

    #[test]
    fn test_unterminated_if() {
        let fault =
            check("app P var integer x init if x = 1 then x := 2 return").unwrap_err();
        assert_eq!(fault.fault, Fault::UnexpectedToken("return".into()));
    }
}
