use std::io::{Error, ErrorKind, Read, Write};
use std::sync::{Arc, Mutex};

use log::{debug, error, info};

use crate::common::header::ACCEPT_ENCODING;
use crate::server::config::Config;
use crate::server::connection::Connection;
use crate::server::connection::ReadRequestResult::{Closed, Error as ReadError, Incomplete, NotReady, Ready};
use crate::server::poll::listen;
use crate::server::router::Router;
use crate::util::thread_pool::ThreadPool;

/// Raw bytes for a request parsing error response.
const BAD_REQUEST_RESPONSE: &[u8; 28] = b"HTTP/1.1 400 Bad Request\r\n\r\n";

/// Starts an HTTP server with the given config. This function blocks.
pub fn listen_http(config: Config) -> std::io::Result<()> {
    let addr = config.addr.parse()
        .map_err(|err| Error::new(ErrorKind::InvalidInput, format!("invalid address {}: {}", config.addr, err)))?;
    let thread_pool = ThreadPool::new(config.connection_handler_threads);

    let config = Arc::new(config);

    listen(addr,
           |stream, addr| Arc::new(Mutex::new(Some(Connection::new(addr, stream)))),
           |connection| {
               let connection = connection.clone();
               let config = config.clone();
               thread_pool.execute(move || handle_io_ready_connection(config, connection));
           },
           |connection| connection.lock().unwrap().is_none())
}

/// Serves the given IO-ready connection. Drops the connection once a response has been sent
/// or the connection goes bad.
fn handle_io_ready_connection<S: Read + Write>(config: Arc<Config>, connection: Arc<Mutex<Option<Connection<S>>>>) {
    let mut lock = connection.lock().unwrap();

    if let Some(mut connection) = lock.take() {
        let should_close = serve_connection(&mut connection, &config.router);

        // keep the connection only if it is still waiting on IO
        if !should_close {
            lock.replace(connection);
        }
    }
}

/// Reads one request from the connection and responds to it. Each connection gets exactly one
/// response and is then closed. Returns true if the connection should be dropped.
fn serve_connection<S: Read + Write>(connection: &mut Connection<S>, router: &Router) -> bool {
    if connection.is_sending() {
        return match connection.finish_sending() {
            Ok(done) => done,
            Err(err) => {
                error!("{} error writing response: {:?}", connection.addr, err);
                true
            }
        };
    }

    let send_result = match connection.read_request() {
        NotReady => return false,
        Closed => {
            debug!("{} disconnected", connection.addr);
            return true;
        }
        Incomplete => {
            debug!("{} disconnected mid request", connection.addr);
            return true;
        }
        Ready(request) => {
            let mut response = router.dispatch(&request);
            response.maybe_compress(request.headers.get(&ACCEPT_ENCODING));
            info!("{} {} {} -> {}", connection.addr, request.method(), request.path(), response.status.code);
            connection.send_response(response.to_bytes())
        }
        ReadError(err) => {
            error!("{} bad request: {:?}", connection.addr, err);
            connection.send_response(BAD_REQUEST_RESPONSE.to_vec())
        }
    };

    match send_result {
        Ok(done) => done,
        Err(err) => {
            error!("{} error writing response: {:?}", connection.addr, err);
            true
        }
    }
}
