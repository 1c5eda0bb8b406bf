//! Semantic error types
//!
//! [`SemanticError`] covers scope faults (reserved names, redeclaration,
//! undeclared use) and type faults (incompatible assignment, illegal operand
//! categories, non-boolean conditions). It carries no line number; the
//! parser attaches one when it turns the error into a
//! [`Diagnostic`](crate::errors::Diagnostic).

use super::types::Type;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    /// Declaring a variable whose name is keyword or operator text
    #[error("Reserved word cannot name a variable [{0}]")]
    ReservedName(String),

    /// Declaring a name already present in scope
    #[error("Variable already declared [{0}]")]
    Redeclared(String),

    /// Using a name that was never declared
    #[error("Undeclared identifier [{0}]")]
    Undeclared(String),

    /// The program name appearing as an operand
    #[error("Program name cannot be used in an expression [{0}]")]
    ProgramNameInExpression(String),

    /// The program name as an assignment target
    #[error("Cannot assign to the program name [{0}]")]
    AssignToProgramName(String),

    /// The program name as a `read` target
    #[error("Cannot read into the program name [{0}]")]
    ReadIntoProgramName(String),

    #[error("Cannot assign {found} to {target} variable [{name}]")]
    IncompatibleAssignment {
        name: String,
        target: Type,
        found: Type,
    },

    #[error("Arithmetic operands must be numeric, found {left} and {right}")]
    ArithmeticOperands { left: Type, right: Type },

    #[error("Logical operands must be boolean, found {left} and {right}")]
    LogicalOperands { left: Type, right: Type },

    #[error("Equality operands must have the same type, found {left} and {right}")]
    EqualityOperands { left: Type, right: Type },

    #[error("Relational operands must be numeric, found {left} and {right}")]
    RelationalOperands { left: Type, right: Type },

    #[error("Unary '-' requires a numeric operand, found {0}")]
    UnaryMinusOperand(Type),

    #[error("Unary '!' requires a boolean operand, found {0}")]
    UnaryNotOperand(Type),

    #[error("Condition must be boolean, found {0}")]
    NonBooleanCondition(Type),
}
