use std::io::{BufRead, BufReader};

use crate::common::header::HeaderMap;
use crate::common::method::Method;
use crate::common::request::{Request, RequestLine};
use crate::common::version;
use crate::parse::body::BodyParser;
use crate::parse::crlf_line::CrlfLineParser;
use crate::parse::error::ParsingError;
use crate::parse::headers::HeadersParser;
use crate::parse::parse::{Parse, ParseResult};
use crate::parse::parse::ParseStatus::{Done, IoErr};

/// Parser for requests. Parses the request line, then the headers, then the body.
pub struct RequestParser {
    state: State,
}

/// The parsing stage the parser is in, along with the parts parsed so far.
enum State {
    RequestLine(CrlfLineParser),
    Headers(RequestLine, HeadersParser),
    Body(RequestLine, HeaderMap, BodyParser),
}

impl RequestParser {
    /// Creates a new request parser.
    pub fn new() -> RequestParser {
        RequestParser { state: State::RequestLine(CrlfLineParser::new()) }
    }

    /// Returns true if this parser has read any data so far.
    pub fn has_data(&self) -> bool {
        match &self.state {
            State::RequestLine(parser) => parser.read_so_far() > 0,
            _ => true
        }
    }
}

impl Parse<Request> for RequestParser {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<Request, Self> {
        let mut state = self.state;

        loop {
            state = match state {
                State::RequestLine(parser) => match parser.parse(reader)? {
                    Done(raw) => State::Headers(parse_request_line(raw)?, HeadersParser::new()),
                    IoErr(parser, err) => return Ok(IoErr(Self { state: State::RequestLine(parser) }, err))
                },
                State::Headers(line, parser) => match parser.parse(reader)? {
                    Done(headers) => {
                        let body_parser = BodyParser::new(&headers)?;
                        State::Body(line, headers, body_parser)
                    }
                    IoErr(parser, err) => return Ok(IoErr(Self { state: State::Headers(line, parser) }, err))
                },
                State::Body(line, headers, parser) => match parser.parse(reader)? {
                    Done(body) => return Ok(Done(Request { line, headers, body })),
                    IoErr(parser, err) => return Ok(IoErr(Self { state: State::Body(line, headers, parser) }, err))
                },
            }
        }
    }
}

/// Parses the given string as a request line. The line must be exactly a method, a target,
/// and an HTTP version separated by single spaces.
fn parse_request_line(raw: String) -> Result<RequestLine, ParsingError> {
    let mut split = raw.split(' ');

    match (split.next(), split.next(), split.next(), split.next()) {
        (Some(method), Some(path), Some(http_version), None) => {
            let method = Method::try_from_str(method).ok_or(ParsingError::UnrecognizedMethod)?;

            if !version::is_wellformed(http_version) {
                return Err(ParsingError::InvalidHttpVersion);
            }

            Ok(RequestLine {
                method,
                path: path.to_string(),
                version: http_version.to_string(),
            })
        }
        _ => Err(ParsingError::MalformedRequestLine)
    }
}

/// Parses a full request out of the given bytes. The reader never blocks, so any IO error
/// means the bytes ended before the request did.
pub fn parse_request_bytes(raw: &[u8]) -> Result<Request, ParsingError> {
    let mut reader = BufReader::new(raw);
    match RequestParser::new().parse(&mut reader)? {
        Done(request) => Ok(request),
        IoErr(..) => Err(ParsingError::IncompleteRequest)
    }
}
