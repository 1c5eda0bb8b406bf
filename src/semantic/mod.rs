//! Scope and type checking
//!
//! - [`types`]: [`Type`] and [`Variable`]
//! - [`analyzer`]: the [`SemanticAnalyzer`] owning the flat program scope
//! - [`errors`]: [`SemanticError`]
//!
//! There is no tree to walk. The parser calls into the analyzer at the point
//! each production is recognized and threads the synthesized [`Type`] back
//! up through its own return values.

pub mod analyzer;
pub mod errors;
pub mod types;

pub use analyzer::SemanticAnalyzer;
pub use errors::SemanticError;
pub use types::{Type, Variable};
