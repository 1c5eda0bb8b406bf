//! Fault channels shared by every stage of the pipeline
//!
//! There are exactly two ways an analysis run can end early:
//!
//! - [`SourceError`]: the byte stream could not be opened or read. These are
//!   always fatal and carry no line number.
//! - [`Diagnostic`]: a lexical, syntactic or semantic fault, tagged with the
//!   lexer's line counter at the moment it was detected.
//!
//! Both are folded into [`AnalysisError`], which is what every recognizer
//! returns. The first fault unwinds the whole call chain through `?`.

use crate::semantic::errors::SemanticError;
use std::io;
use std::path::PathBuf;

/// Failure of the underlying byte stream
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Unable to open file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to read file")]
    Read(#[source] io::Error),
}

/// What went wrong, independent of where
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Fault {
    #[error("Invalid lexeme [{0}]")]
    InvalidToken(String),

    #[error("Unexpected end of file")]
    UnexpectedEof,

    #[error("Unexpected lexeme [{0}]")]
    UnexpectedToken(String),

    /// Parentheses or compound statements nested past the parser's limit
    #[error("Nesting too deep")]
    NestingTooDeep,

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

/// A single line-numbered analysis fault.
///
/// Renders as a two-digit zero-padded line number followed by the fault
/// message, e.g. `03: Unexpected lexeme [then]`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{line:02}: {fault}")]
pub struct Diagnostic {
    pub line: usize,
    pub fault: Fault,
}

impl Diagnostic {
    pub fn new(line: usize, fault: impl Into<Fault>) -> Self {
        Self {
            line,
            fault: fault.into(),
        }
    }
}

/// Anything that aborts an analysis run
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Diagnostic(#[from] Diagnostic),
}

impl AnalysisError {
    /// The diagnostic, if this is an analysis fault rather than an I/O one
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            AnalysisError::Diagnostic(diagnostic) => Some(diagnostic),
            AnalysisError::Source(_) => None,
        }
    }
}
