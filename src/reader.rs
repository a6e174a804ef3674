use std::io::{ErrorKind, Read};

use bytes::{BufMut, BytesMut};

use crate::error::ShellError;

/// Initial line-buffer capacity; doubled whenever the next byte would
/// not fit, so there is no maximum line length.
const INITIAL_CAPACITY: usize = 128;

/// Reads one line at a time from an input stream.
pub struct LineReader<R> {
    input: R,
}

impl<R: Read> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Reads the next line, with its terminator stripped.
    ///
    /// Returns `Ok(None)` on clean end-of-stream with nothing read, which
    /// the caller treats as a request to terminate successfully. A stream
    /// that ends mid-line yields the partial content as a final line.
    pub fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut buf = BytesMut::with_capacity(INITIAL_CAPACITY);
        let mut byte = [0u8; 1];

        loop {
            match self.input.read(&mut byte) {
                Ok(0) => {
                    if buf.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    if buf.len() == buf.capacity() {
                        buf.reserve(buf.capacity());
                    }
                    buf.put_u8(byte[0]);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ShellError::ReadLine(e)),
            }
        }

        if buf.last() == Some(&b'\r') {
            buf.truncate(buf.len() - 1);
        }

        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
