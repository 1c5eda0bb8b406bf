//! Flat symbol table and type-compatibility rules
//!
//! The analyzer is driven entirely by the parser: declarations grow the
//! scope, identifier uses query it, and each operator the parser recognizes
//! is checked here against the types synthesized for its operands.
//!
//! # Rules
//!
//! | Check             | Accepts                              | Result              |
//! |-------------------|--------------------------------------|---------------------|
//! | assignment        | equal types, or integer into real    | -                   |
//! | `+ - * /`         | numeric operands                     | real if either real |
//! | `&& \|\|`         | boolean operands                     | boolean             |
//! | `= !=`            | identical types                      | boolean             |
//! | `> >= < <=`       | numeric operands                     | boolean             |
//! | unary `-`         | numeric                              | operand type        |
//! | unary `!`         | boolean                              | boolean             |
//! | condition         | boolean                              | -                   |

use super::errors::SemanticError;
use super::types::{Type, Variable};
use crate::lexer::ReservedWords;
use rustc_hash::FxHashMap;

pub struct SemanticAnalyzer<'r> {
    reserved: &'r ReservedWords,
    /// Declaration order
    variables: Vec<Variable>,
    /// Name -> position in `variables`
    scope: FxHashMap<String, usize>,
}

impl<'r> SemanticAnalyzer<'r> {
    pub fn new(reserved: &'r ReservedWords) -> Self {
        Self {
            reserved,
            variables: Vec::new(),
            scope: FxHashMap::default(),
        }
    }

    /// Register `name` with type `ty`. Never overwrites an existing entry.
    pub fn declare(&mut self, name: &str, ty: Type) -> Result<(), SemanticError> {
        if self.reserved.contains(name) {
            return Err(SemanticError::ReservedName(name.to_string()));
        }
        if self.scope.contains_key(name) {
            return Err(SemanticError::Redeclared(name.to_string()));
        }

        tracing::debug!(name, %ty, "declared");
        self.scope.insert(name.to_string(), self.variables.len());
        self.variables.push(Variable::new(name, ty));
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&Variable, SemanticError> {
        self.scope
            .get(name)
            .map(|&index| &self.variables[index])
            .ok_or_else(|| SemanticError::Undeclared(name.to_string()))
    }

    /// Type of an identifier used as an expression operand
    pub fn operand(&self, name: &str) -> Result<Type, SemanticError> {
        match self.lookup(name)?.ty {
            Type::Program => {
                Err(SemanticError::ProgramNameInExpression(name.to_string()))
            }
            ty => Ok(ty),
        }
    }

    /// Variable named as the target of a `read`
    pub fn read_target(&self, name: &str) -> Result<&Variable, SemanticError> {
        let variable = self.lookup(name)?;
        if variable.ty == Type::Program {
            return Err(SemanticError::ReadIntoProgramName(name.to_string()));
        }
        Ok(variable)
    }

    pub fn check_assignment(
        &self,
        target: &Variable,
        found: Type,
    ) -> Result<(), SemanticError> {
        match (target.ty, found) {
            (Type::Program, _) => {
                Err(SemanticError::AssignToProgramName(target.name.clone()))
            }
            (Type::Real, Type::Integer) => Ok(()),
            (target_ty, found) if target_ty == found => Ok(()),
            (target_ty, found) => Err(SemanticError::IncompatibleAssignment {
                name: target.name.clone(),
                target: target_ty,
                found,
            }),
        }
    }

    /// `+ - * /`
    pub fn arithmetic(&self, left: Type, right: Type) -> Result<Type, SemanticError> {
        if !left.is_numeric() || !right.is_numeric() {
            return Err(SemanticError::ArithmeticOperands { left, right });
        }
        if left == Type::Real || right == Type::Real {
            Ok(Type::Real)
        } else {
            Ok(Type::Integer)
        }
    }

    /// `&& ||`
    pub fn logical(&self, left: Type, right: Type) -> Result<Type, SemanticError> {
        if left == Type::Boolean && right == Type::Boolean {
            Ok(Type::Boolean)
        } else {
            Err(SemanticError::LogicalOperands { left, right })
        }
    }

    /// `= !=`
    pub fn equality(&self, left: Type, right: Type) -> Result<Type, SemanticError> {
        if left == right {
            Ok(Type::Boolean)
        } else {
            Err(SemanticError::EqualityOperands { left, right })
        }
    }

    /// `> >= < <=`
    pub fn relational(&self, left: Type, right: Type) -> Result<Type, SemanticError> {
        if left.is_numeric() && right.is_numeric() {
            Ok(Type::Boolean)
        } else {
            Err(SemanticError::RelationalOperands { left, right })
        }
    }

    pub fn unary_minus(&self, operand: Type) -> Result<Type, SemanticError> {
        if operand.is_numeric() {
            Ok(operand)
        } else {
            Err(SemanticError::UnaryMinusOperand(operand))
        }
    }

    pub fn unary_not(&self, operand: Type) -> Result<Type, SemanticError> {
        if operand == Type::Boolean {
            Ok(Type::Boolean)
        } else {
            Err(SemanticError::UnaryNotOperand(operand))
        }
    }

    pub fn check_condition(&self, condition: Type) -> Result<(), SemanticError> {
        if condition == Type::Boolean {
            Ok(())
        } else {
            Err(SemanticError::NonBooleanCondition(condition))
        }
    }

    /// Number of names in scope, including the program name
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.variables.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Everything in scope, in declaration order
    #[cfg(test)]
    pub(crate) fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn into_variables(self) -> Vec<Variable> {
        self.variables
    }
}
