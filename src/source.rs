//! Byte-stream source consumed by the lexer
//!
//! The lexer only ever needs two things from its input: the next byte (or
//! the end of the stream) and the ability to push back the byte it just
//! read. [`ByteSource`] captures that contract; [`PushbackReader`] provides it
//! over any [`Read`] implementation, including files and in-memory slices.

use crate::errors::SourceError;
use std::fs::File;
use std::io::{self, BufReader, Bytes, Read};
use std::path::Path;

/// One byte of lookahead over an input stream
pub trait ByteSource {
    /// Read the next byte, or `None` at the end of the stream
    fn read_byte(&mut self) -> Result<Option<u8>, SourceError>;

    /// Restore the byte most recently returned by [`ByteSource::read_byte`]
    fn unread(&mut self, byte: u8);
}

/// Buffered reader with a single-byte pushback slot
pub struct PushbackReader<R: Read> {
    bytes: Bytes<BufReader<R>>,
    pending: Option<u8>,
}

impl<R: Read> PushbackReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            bytes: BufReader::new(inner).bytes(),
            pending: None,
        }
    }
}

impl PushbackReader<File> {
    /// Open a source file for lexing
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl<R: Read> ByteSource for PushbackReader<R> {
    fn read_byte(&mut self) -> Result<Option<u8>, SourceError> {
        if let Some(byte) = self.pending.take() {
            return Ok(Some(byte));
        }

        loop {
            match self.bytes.next() {
                None => return Ok(None),
                Some(Ok(byte)) => return Ok(Some(byte)),
                Some(Err(e)) if e.kind() == io::ErrorKind::Interrupted => {
                    continue;
                }
                Some(Err(e)) => return Err(SourceError::Read(e)),
            }
        }
    }

    fn unread(&mut self, byte: u8) {
        debug_assert!(
            self.pending.is_none(),
            "only one byte of pushback is supported"
        );
        self.pending = Some(byte);
    }
}
