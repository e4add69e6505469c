use std::io::BufRead;

use crate::common::header::{Header, HeaderMap};
use crate::header_map;
use crate::parse::crlf_line::CrlfLineParser;
use crate::parse::error::ParsingError;
use crate::parse::error_take::ReadExt;
use crate::parse::parse::{Parse, ParseResult};
use crate::parse::parse::ParseStatus::{Done, IoErr};

/// Max size in bytes for headers.
const MAX_HEADERS_SIZE: usize = 4096;

/// Parser for headers.
pub struct HeadersParser {
    inner: CrlfLineParser,
    headers: HeaderMap,
    read: usize,
}

impl HeadersParser {
    /// Creates a new headers parser.
    pub fn new() -> HeadersParser {
        HeadersParser { inner: CrlfLineParser::new(), headers: header_map![], read: 0 }
    }
}

impl Parse<HeaderMap> for HeadersParser {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<HeaderMap, Self> {
        let Self { mut headers, mut inner, mut read } = self;

        let mut reader = reader.error_take((MAX_HEADERS_SIZE - read) as u64);

        loop {
            match inner.parse(&mut reader)? {
                Done(line) if line.is_empty() => return Ok(Done(headers)),
                Done(line) => {
                    read += line.len();
                    let (header, value) = parse_header(line)?;
                    headers.set(header, value);
                    inner = CrlfLineParser::new()
                }
                IoErr(inner, err) => return Ok(IoErr(HeadersParser { headers, inner, read }, err))
            }
        }
    }
}

/// Parses the given line as a header. The line is split at the first colon, and the name and
/// value are trimmed of surrounding whitespace.
fn parse_header(raw: String) -> Result<(Header, String), ParsingError> {
    let (name, value) = raw.split_once(':').ok_or(ParsingError::MalformedHeaderLine)?;
    Ok((Header::from(name.trim()), value.trim().to_string()))
}
