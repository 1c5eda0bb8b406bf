//! `app` language parser
//!
//! This module recognizes a whole program and type-checks it in the same
//! pass; no syntax tree is ever built:
//! - [`parse`]: Parser struct, lookahead helpers, entry point
//! - [`declarations`]: program header and `var` section
//! - [`statements`]: statement forms
//! - [`expressions`]: conditions and expressions
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with one lexeme of lookahead and no
//! backtracking. Each expression level returns the [`Type`](crate::semantic::Type)
//! it synthesized, so semantic checks fire at the point of recognition.
//! The first fault of any kind ends the run.

pub mod declarations;
pub mod expressions;
pub mod parse;
pub mod statements;

pub use parse::{Parser, Program};
