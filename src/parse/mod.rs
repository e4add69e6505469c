/// Parsing errors.
pub mod error;
/// Parse trait and other basic parsing types.
pub mod parse;
/// Request parsing components.
pub mod request;

/// Parser for CRLF lines.
mod crlf_line;
/// Parser for headers.
mod headers;
/// Parser for message bodies.
mod body;
/// Deframing components (or, in other words, stateful IO reading).
mod deframe;
/// error_take method utility.
mod error_take;

/// Utility for testing parsers.
#[cfg(test)]
mod test_util;
