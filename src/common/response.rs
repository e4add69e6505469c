use std::io;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::common::header::{CONTENT_ENCODING, CONTENT_LENGTH, Header, HeaderMap};
use crate::common::status;
use crate::common::status::Status;
use crate::common::version::HTTP_VERSION_1_1;

/// An HTTP response.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Response {
    /// The status.
    pub status: Status,
    /// The headers.
    pub headers: HeaderMap,
    /// The body.
    pub body: Vec<u8>,
}

impl From<Status> for Response {
    /// Creates an empty response with the given status. No headers are set, so the
    /// serialized form is just the status line followed by a blank line.
    fn from(status: Status) -> Self {
        Response {
            status,
            headers: HeaderMap::new(),
            body: vec![],
        }
    }
}

impl From<String> for Response {
    /// Creates a 200 response with the given string as its body.
    fn from(body: String) -> Self {
        body.into_bytes().into()
    }
}

impl From<&str> for Response {
    /// Creates a 200 response with the given string as its body.
    fn from(body: &str) -> Self {
        body.to_string().into()
    }
}

impl From<Vec<u8>> for Response {
    /// Creates a 200 response with the given bytes as its body.
    fn from(body: Vec<u8>) -> Self {
        Response {
            status: status::OK,
            headers: HeaderMap::new(),
            body,
        }
    }
}

impl Response {
    /// Sets the given header and returns the response.
    pub fn with_header(mut self, header: Header, value: impl Into<String>) -> Response {
        self.headers.set(header, value);
        self
    }

    /// Replaces the body of the response.
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }

    /// Compresses the body with gzip if the given accept-encoding header value names gzip
    /// as an accepted encoding. On compression the content-encoding header is set and the
    /// content-length header is replaced with the compressed length. Responses with empty
    /// bodies are left untouched, as are responses when compression fails.
    pub fn maybe_compress(&mut self, accept_encoding: Option<&str>) {
        if self.body.is_empty() || !accepts_gzip(accept_encoding) {
            return;
        }

        if let Ok(compressed) = gzip(&self.body) {
            self.body = compressed;
            self.headers.set(CONTENT_ENCODING, "gzip");
            self.headers.set(CONTENT_LENGTH, self.body.len().to_string());
        }
    }

    /// Serializes the response. Headers are written in insertion order. A content-length
    /// header is appended last if the body is nonempty and none was set.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = format!("{} {} {}\r\n", HTTP_VERSION_1_1, self.status.code, self.status.reason).into_bytes();

        for (header, value) in self.headers.iter() {
            bytes.extend_from_slice(format!("{}: {}\r\n", header, value).as_bytes());
        }

        if !self.body.is_empty() && !self.headers.contains(&CONTENT_LENGTH) {
            bytes.extend_from_slice(format!("{}: {}\r\n", CONTENT_LENGTH, self.body.len()).as_bytes());
        }

        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(&self.body);
        bytes
    }

    /// Writes the serialized response to the given writer.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }
}

/// Checks if gzip appears in the given accept-encoding header value. The value is split on
/// commas and each token is trimmed and compared ignoring case.
fn accepts_gzip(accept_encoding: Option<&str>) -> bool {
    match accept_encoding {
        Some(value) => value.split(',').any(|token| token.trim().eq_ignore_ascii_case("gzip")),
        None => false
    }
}

fn gzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
