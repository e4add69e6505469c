/// Error for when an HTTP request can't be parsed.
#[derive(Debug)]
pub enum ParsingError {
    /// Request line does not have exactly a method, a target, and a version.
    MalformedRequestLine,
    /// Header line has no colon separating the name from the value.
    MalformedHeaderLine,
    /// The connection closed before a full request was read.
    IncompleteRequest,
    /// Request has a malformed HTTP version.
    InvalidHttpVersion,
    /// Header has invalid value.
    InvalidHeaderValue,
    /// Content length exceeds maximum size.
    ContentLengthTooLarge,
    /// Method is unrecognized.
    UnrecognizedMethod,
    /// Data is not valid UTF8.
    InvalidUtf8,
    /// A line ended with a bare LF instead of CRLF.
    BadLineEnding,
}
