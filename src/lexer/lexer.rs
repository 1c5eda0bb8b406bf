//! Lexer (tokenizer) for `app` source code
//!
//! Pulls bytes from a [`ByteSource`] and returns one classified [`Lexeme`]
//! per call to [`Lexer::next_token`]. The recognizer is a deterministic
//! finite-state machine: [`Lexer::transition`] maps the current [`State`]
//! and input byte to a [`Step`], and [`Lexer::next_token`] just runs that
//! function until a lexeme is complete.
//!
//! Lexical faults are not errors at this level. They come back as lexemes of
//! kind [`TokenKind::InvalidToken`] or [`TokenKind::UnexpectedEof`] and the
//! parser decides what to report. Only a failing byte stream is an `Err`.

use super::reserved::ReservedWords;
use super::token::{Lexeme, TokenKind};
use crate::errors::SourceError;
use crate::source::ByteSource;

/// DFA states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    LineComment,
    /// After `<`, `>` or `!`: an optional trailing `=`
    OptionalEquals,
    SecondAmpersand,
    SecondPipe,
    AssignEquals,
    Identifier,
    Integer,
    /// Just read the `.` of a number; a digit must follow
    FractionStart,
    Fraction,
    Text,
}

/// Outcome of one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next(State),
    /// Lexeme complete, classify its text with the reserved table
    Accept,
    /// Lexeme complete with a fixed kind
    Finish(TokenKind),
}

pub struct Lexer<'r, S> {
    source: S,
    reserved: &'r ReservedWords,
    line: usize,
}

impl<'r, S: ByteSource> Lexer<'r, S> {
    pub fn new(source: S, reserved: &'r ReservedWords) -> Self {
        Self {
            source,
            reserved,
            line: 1,
        }
    }

    /// Current line number, 1-based
    pub fn line(&self) -> usize {
        self.line
    }

    /// Recognize the next lexeme
    pub fn next_token(&mut self) -> Result<Lexeme, SourceError> {
        let mut text = Vec::new();
        let mut state = State::Start;

        let kind = loop {
            let byte = self.source.read_byte()?;
            match self.transition(state, byte, &mut text) {
                Step::Next(next) => state = next,
                Step::Accept => {
                    break self.reserved.find(&String::from_utf8_lossy(&text));
                }
                Step::Finish(kind) => break kind,
            }
        };

        let lexeme = Lexeme::new(String::from_utf8_lossy(&text), kind);
        tracing::trace!(line = self.line, %lexeme, "lexeme");
        Ok(lexeme)
    }

    fn transition(
        &mut self,
        state: State,
        byte: Option<u8>,
        text: &mut Vec<u8>,
    ) -> Step {
        match (state, byte) {
            (State::Start, Some(b' ' | b'\t' | b'\r')) => Step::Next(State::Start),
            (State::Start, Some(b'\n')) => {
                self.line += 1;
                Step::Next(State::Start)
            }
            (State::Start, Some(b'%')) => Step::Next(State::LineComment),
            (State::Start, Some(c @ (b'<' | b'>' | b'!'))) => {
                text.push(c);
                Step::Next(State::OptionalEquals)
            }
            (State::Start, Some(b'&')) => {
                text.push(b'&');
                Step::Next(State::SecondAmpersand)
            }
            (State::Start, Some(b'|')) => {
                text.push(b'|');
                Step::Next(State::SecondPipe)
            }
            (State::Start, Some(b':')) => {
                text.push(b':');
                Step::Next(State::AssignEquals)
            }
            (
                State::Start,
                Some(
                    c @ (b'=' | b';' | b',' | b'+' | b'-' | b'*' | b'(' | b')'
                    | b'/'),
                ),
            ) => {
                text.push(c);
                Step::Accept
            }
            (State::Start, Some(c)) if c == b'_' || c.is_ascii_alphabetic() => {
                text.push(c);
                Step::Next(State::Identifier)
            }
            (State::Start, Some(c)) if c.is_ascii_digit() => {
                text.push(c);
                Step::Next(State::Integer)
            }
            (State::Start, Some(b'{')) => {
                text.push(b'{');
                Step::Next(State::Text)
            }
            (State::Start, Some(c)) => {
                text.push(c);
                Step::Finish(TokenKind::InvalidToken)
            }
            (State::Start, None) => Step::Finish(TokenKind::EndOfFile),

            (State::LineComment, Some(b'\n')) => {
                self.line += 1;
                Step::Next(State::Start)
            }
            (State::LineComment, Some(_)) => Step::Next(State::LineComment),
            (State::LineComment, None) => Step::Finish(TokenKind::UnexpectedEof),

            (State::OptionalEquals, Some(b'=')) => {
                text.push(b'=');
                Step::Accept
            }
            (State::OptionalEquals, other) => {
                self.push_back(other);
                Step::Accept
            }

            (State::SecondAmpersand, Some(b'&')) => {
                text.push(b'&');
                Step::Accept
            }
            (State::SecondPipe, Some(b'|')) => {
                text.push(b'|');
                Step::Accept
            }
            (State::AssignEquals, Some(b'=')) => {
                text.push(b'=');
                Step::Accept
            }
            (
                State::SecondAmpersand | State::SecondPipe | State::AssignEquals,
                _,
            ) => Step::Finish(TokenKind::InvalidToken),

            (State::Identifier, Some(c)) if c == b'_' || c.is_ascii_alphanumeric() => {
                text.push(c);
                Step::Next(State::Identifier)
            }
            (State::Identifier, other) => {
                self.push_back(other);
                Step::Accept
            }

            (State::Integer, Some(c)) if c.is_ascii_digit() => {
                text.push(c);
                Step::Next(State::Integer)
            }
            (State::Integer, Some(b'.')) => {
                text.push(b'.');
                Step::Next(State::FractionStart)
            }
            (State::Integer, other) => {
                self.push_back(other);
                Step::Finish(TokenKind::IntegerConst)
            }

            (State::FractionStart, Some(c)) if c.is_ascii_digit() => {
                text.push(c);
                Step::Next(State::Fraction)
            }
            (State::FractionStart, other) => {
                self.push_back(other);
                Step::Finish(TokenKind::InvalidToken)
            }

            (State::Fraction, Some(c)) if c.is_ascii_digit() => {
                text.push(c);
                Step::Next(State::Fraction)
            }
            (State::Fraction, other) => {
                self.push_back(other);
                Step::Finish(TokenKind::RealConst)
            }

            (State::Text, Some(b'}')) => {
                text.push(b'}');
                Step::Finish(TokenKind::Text)
            }
            // Raw newline before the closing brace
            (State::Text, Some(b'\n')) => Step::Finish(TokenKind::InvalidToken),
            (State::Text, Some(c)) => {
                text.push(c);
                Step::Next(State::Text)
            }
            (State::Text, None) => Step::Finish(TokenKind::UnexpectedEof),
        }
    }

    /// End of stream is never pushed back
    fn push_back(&mut self, byte: Option<u8>) {
        if let Some(byte) = byte {
            self.source.unread(byte);
        }
    }
}
