use std::io::{ErrorKind, Write};

/// An in-progress response write. Tracks how much of the serialized response has made it to
/// the stream so writing can resume after a WouldBlock.
pub struct ResponseWriter {
    bytes: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    /// Creates a writer for the given serialized response.
    pub fn new(bytes: Vec<u8>) -> ResponseWriter {
        ResponseWriter { bytes, written: 0 }
    }

    /// Writes as much of the remaining response as the writer will take. Returns true once
    /// the whole response has been written and flushed, or false if the writer blocked.
    pub fn write_remaining(&mut self, writer: &mut impl Write) -> std::io::Result<bool> {
        while self.written < self.bytes.len() {
            match writer.write(&self.bytes[self.written..]) {
                Ok(0) => return Err(ErrorKind::WriteZero.into()),
                Ok(amt) => self.written += amt,
                Err(err) if err.kind() == ErrorKind::WouldBlock => return Ok(false),
                Err(err) => return Err(err)
            }
        }

        match writer.flush() {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::WouldBlock => Ok(false),
            Err(err) => Err(err)
        }
    }
}
