use crate::common::header::HeaderMap;
use crate::common::method::Method;
use crate::parse::error::ParsingError;

/// The first line of an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The request method.
    pub method: Method,
    /// The request target.
    pub path: String,
    /// The HTTP version, as it appeared on the wire.
    pub version: String,
}

/// An HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request line.
    pub line: RequestLine,
    /// The headers of the request.
    pub headers: HeaderMap,
    /// The body of the request.
    pub body: Vec<u8>,
}

impl Request {
    /// The request method.
    pub fn method(&self) -> Method {
        self.line.method
    }

    /// The request target.
    pub fn path(&self) -> &str {
        &self.line.path
    }

    /// Parses a full request out of the given bytes. The bytes must contain the complete
    /// request, including the body when a content-length header is present.
    pub fn from_bytes(raw: &[u8]) -> Result<Request, ParsingError> {
        crate::parse::request::parse_request_bytes(raw)
    }
}
