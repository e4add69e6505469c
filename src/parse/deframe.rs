use std::io::{BufRead, Error, ErrorKind};

/// Result of a deframer.
pub type DeframerResult<T, R> = Result<T, (R, Error)>;

/// Trait for stateful IO reading. This trait is intended to wrap the std::io::Read and std::io::BufRead methods.
pub trait Deframe<T>: Sized {
    /// Reads data from the reader until a value can be constructed.
    /// If an IO error is encountered while reading, then the state of the deframer as well as the error are returned.
    /// Otherwise the deframer is consumed and the deframed value is returned.
    fn read(self, reader: &mut impl BufRead) -> DeframerResult<T, Self>;

    /// Returns how many bytes have been read so far by this deframer.
    fn read_so_far(&self) -> usize;
}

/// A deframer for a '\n' terminated line.
/// If EOF is reached before '\n' then an UnexpectedEof error is returned.
pub struct LineDeframer {
    line: String
}

impl LineDeframer {
    pub fn new() -> LineDeframer {
        LineDeframer { line: String::new() }
    }
}

impl Deframe<String> for LineDeframer {
    fn read(mut self, reader: &mut impl BufRead) -> DeframerResult<String, Self> {
        match reader.read_line(&mut self.line) {
            Ok(_) =>
                if let Some('\n') = self.line.pop() {
                    Ok(self.line)
                } else {
                    Err((self, Error::from(ErrorKind::UnexpectedEof)))
                },
            Err(err) => Err((self, err))
        }
    }

    fn read_so_far(&self) -> usize {
        self.line.len()
    }
}

/// Deframer for a specified number of bytes.
pub struct BytesDeframer {
    data: Vec<u8>,
    pos: usize,
}

impl BytesDeframer {
    /// Creates a new deframer for deframing the specified number of bytes.
    pub fn new(size: usize) -> BytesDeframer {
        BytesDeframer { data: vec![0; size], pos: 0 }
    }
}

impl Deframe<Vec<u8>> for BytesDeframer {
    fn read(mut self, reader: &mut impl BufRead) -> DeframerResult<Vec<u8>, Self> {
        while self.pos < self.data.len() {
            let buf = &mut self.data[self.pos..];

            match reader.read(buf) {
                Ok(0) if !buf.is_empty() => return Err((self, Error::from(ErrorKind::UnexpectedEof))),
                Ok(amt) => {
                    self.pos += amt;
                }
                Err(err) => return Err((self, err))
            }
        }

        Ok(self.data)
    }

    fn read_so_far(&self) -> usize {
        self.pos
    }
}
