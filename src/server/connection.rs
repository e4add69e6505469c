use std::io::{BufReader, ErrorKind, Read, Write};
use std::net::SocketAddr;

use crate::common::request::Request;
use crate::parse::error::ParsingError;
use crate::parse::parse::{Parse, ParseStatus};
use crate::parse::request::RequestParser;
use crate::server::connection::ReadRequestError::{IoErr, ParseErr};
use crate::server::connection::ReadRequestResult::{Closed, Error, Incomplete, NotReady, Ready};
use crate::server::response_writer::ResponseWriter;

/// Size of connection read buffers.
const READ_BUF_SIZE: usize = 4096;

/// The result of attempting to read a request.
pub enum ReadRequestResult {
    /// There is not enough data yet for a request to be fully parsed.
    NotReady,
    /// A new request has been parsed.
    Ready(Request),
    /// The connection closed partway through a request.
    Incomplete,
    /// The connection closed without sending any data.
    Closed,
    /// An error occurred while trying to read a request.
    Error(ReadRequestError),
}

/// An error that may result from trying to read a request.
#[derive(Debug)]
pub enum ReadRequestError {
    /// An error in parsing the request.
    ParseErr(ParsingError),
    /// An unhandled IO error.
    IoErr(std::io::Error),
}

/// A connection to a client. The main purpose of this is to store the state of asynchronous IO,
/// both the partially parsed request and the partially written response.
pub struct Connection<S: Read + Write> {
    /// The address of the client.
    pub addr: SocketAddr,
    stream: BufReader<S>,
    parser: Option<RequestParser>,
    response: Option<ResponseWriter>,
}

impl<S: Read + Write> Connection<S> {
    /// Creates a new connection out of the given address and stream.
    pub fn new(addr: SocketAddr, stream: S) -> Connection<S> {
        Connection {
            addr,
            stream: BufReader::with_capacity(READ_BUF_SIZE, stream),
            parser: Some(RequestParser::new()),
            response: None,
        }
    }

    /// Attempts to read a request and parse it from the underlying stream.
    pub fn read_request(&mut self) -> ReadRequestResult {
        let parser = self.parser.take().unwrap_or_else(RequestParser::new);

        match parser.parse(&mut self.stream) {
            Ok(ParseStatus::Done(request)) => Ready(request),
            Ok(ParseStatus::IoErr(parser, err)) if err.kind() == ErrorKind::WouldBlock => {
                self.parser = Some(parser);
                NotReady
            }
            Ok(ParseStatus::IoErr(parser, err)) if is_disconnect(&err) => {
                if parser.has_data() { Incomplete } else { Closed }
            }
            Ok(ParseStatus::IoErr(_, err)) => Error(IoErr(err)),
            Err(err) => Error(ParseErr(err))
        }
    }

    /// Starts sending the given serialized response. Returns true if the whole response was
    /// written, or false if the stream blocked and finish_sending should be called once the
    /// stream is writable again.
    pub fn send_response(&mut self, bytes: Vec<u8>) -> std::io::Result<bool> {
        self.response = Some(ResponseWriter::new(bytes));
        self.finish_sending()
    }

    /// Continues writing the in-progress response, if any.
    pub fn finish_sending(&mut self) -> std::io::Result<bool> {
        match &mut self.response {
            Some(writer) => {
                let done = writer.write_remaining(self.stream.get_mut())?;
                if done {
                    self.response = None;
                }
                Ok(done)
            }
            None => Ok(true)
        }
    }

    /// Returns true if a response write is in progress.
    pub fn is_sending(&self) -> bool {
        self.response.is_some()
    }
}

/// Checks if the given IO error indicates the client has disconnected.
fn is_disconnect(error: &std::io::Error) -> bool {
    matches!(error.kind(), ErrorKind::UnexpectedEof | ErrorKind::ConnectionAborted | ErrorKind::ConnectionReset)
}
