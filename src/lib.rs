//! # Introduction
//!
//! appcheck is the front end of the tiny imperative `app` language. It reads
//! source text, tokenizes it, checks that it follows the grammar and performs
//! scope and type checking, all in a single pass. It generates no code: a
//! program is either accepted or rejected with exactly one diagnostic.
//!
//! ## Pipeline
//!
//! ```text
//! Bytes → Lexer → (one lexeme of lookahead) → Parser ⇄ Semantic analyzer
//! ```
//!
//! 1. [`source`]: byte stream with one byte of pushback.
//! 2. [`lexer`]: state-machine tokenizer and the reserved-word table.
//! 3. [`parser`]: recursive descent recognizer that pulls lexemes on demand
//!    and calls the analyzer as each production is recognized.
//! 4. [`semantic`]: the flat program scope and the type rules.
//! 5. [`errors`]: the I/O and analysis fault channels.
//!
//! ## Language
//!
//! ```text
//! app Average
//! var integer n, i; real sum
//! init
//!     read(n);
//!     i := 0;
//!     sum := 0;
//!     repeat
//!         i := i + 1;
//!         sum := sum + i
//!     until i >= n;
//!     write({average:});
//!     write(sum / n)
//! return
//! ```
//!
//! Types: `integer`, `real`, and the boolean type of comparisons.
//! Comments run from `%` to the end of the line.

pub mod driver;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod semantic;
pub mod source;

pub use driver::{check, check_file, check_source, dump_tokens, dump_tokens_file};
pub use errors::{AnalysisError, Diagnostic, Fault, SourceError};
pub use parser::Program;
