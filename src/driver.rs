//! Entry points tying the byte source, lexer and parser together

use crate::errors::{AnalysisError, SourceError};
use crate::lexer::{Lexeme, Lexer, ReservedWords};
use crate::parser::{Parser, Program};
use crate::source::{ByteSource, PushbackReader};
use std::path::Path;

/// Analyze a program read from `source`
pub fn check<S: ByteSource>(source: S) -> Result<Program, AnalysisError> {
    let reserved = ReservedWords::new();
    Parser::new(source, &reserved)?.parse_program()
}

/// Analyze a program held in memory
pub fn check_source(source: &str) -> Result<Program, AnalysisError> {
    check(PushbackReader::new(source.as_bytes()))
}

/// Analyze the program in the file at `path`
pub fn check_file(path: impl AsRef<Path>) -> Result<Program, AnalysisError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "analyzing");

    let result = check(PushbackReader::open(path)?);
    match &result {
        Ok(program) => tracing::info!(
            program = %program.name,
            variables = program.variables.len(),
            "accepted"
        ),
        Err(e) => tracing::info!(error = %e, "rejected"),
    }
    result
}

/// Run the lexer alone, collecting each lexeme with the line counter as it
/// stood right after that lexeme was read.
///
/// Stops after the first end-of-file, invalid-token or unexpected-eof lexeme,
/// which is included in the result.
pub fn dump_tokens<S: ByteSource>(source: S) -> Result<Vec<(usize, Lexeme)>, SourceError> {
    let reserved = ReservedWords::new();
    let mut lexer = Lexer::new(source, &reserved);
    let mut lexemes = Vec::new();

    loop {
        let lexeme = lexer.next_token()?;
        let done = lexeme.kind.is_terminal();
        lexemes.push((lexer.line(), lexeme));
        if done {
            return Ok(lexemes);
        }
    }
}

/// [`dump_tokens`] over the file at `path`
pub fn dump_tokens_file(path: impl AsRef<Path>) -> Result<Vec<(usize, Lexeme)>, SourceError> {
    dump_tokens(PushbackReader::open(path)?)
}
