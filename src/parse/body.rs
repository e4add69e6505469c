use std::io::BufRead;

use crate::common::header;
use crate::common::header::HeaderMap;
use crate::parse::body::BodyParser::{Empty, WithSize};
use crate::parse::deframe::{BytesDeframer, Deframe};
use crate::parse::error::ParsingError;
use crate::parse::error_take::ReadExt;
use crate::parse::parse::{Parse, ParseResult};
use crate::parse::parse::ParseStatus::Done;

/// The maximum size of a body.
const MAX_BODY_SIZE: usize = 3 * 1024 * 1024; // 3 megabytes

/// Parser for a request body. The body length comes from the content-length header;
/// without one the body is taken to be empty.
pub enum BodyParser {
    WithSize(BytesDeframer),
    Empty,
}

impl BodyParser {
    /// Creates a body parser for the given headers.
    pub fn new(headers: &HeaderMap) -> Result<BodyParser, ParsingError> {
        match get_content_length(headers) {
            Some(size) => {
                let size = size?;
                if size > MAX_BODY_SIZE {
                    return Err(ParsingError::ContentLengthTooLarge);
                }
                Ok(WithSize(BytesDeframer::new(size)))
            }
            None => Ok(Empty)
        }
    }

    /// Gets the size of the body read so far.
    fn read_so_far(&self) -> usize {
        match self {
            WithSize(parser) => parser.read_so_far(),
            Empty => 0
        }
    }
}

/// Gets the value of a content-length header from the given header map. May return None if there's
/// no content-length header, or an error if the content-length value can not be parsed.
fn get_content_length(headers: &HeaderMap) -> Option<Result<usize, ParsingError>> {
    headers.get(&header::CONTENT_LENGTH)
        .map(|value| value.parse().map_err(|_| ParsingError::InvalidHeaderValue))
}

impl Parse<Vec<u8>> for BodyParser {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<Vec<u8>, Self> {
        let mut reader = reader.error_take((MAX_BODY_SIZE - self.read_so_far()) as u64);

        Ok(match self {
            WithSize(parser) => parser.parse(&mut reader)?.map_blocked(WithSize),
            Empty => Done(vec![])
        })
    }
}
