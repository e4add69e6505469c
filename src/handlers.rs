use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::common::header::{CONTENT_TYPE, USER_AGENT};
use crate::common::method::Method;
use crate::common::request::Request;
use crate::common::response::Response;
use crate::common::status;
use crate::server::Router;

/// Builds the router with the built-in endpoints. The /files endpoints serve the given
/// directory, and respond with 404 when no directory was configured.
pub fn router(directory: Option<PathBuf>) -> Router {
    let mut router = Router::new();

    router.on(Method::GET, "/", |_, _| Response::from(status::OK));

    router.on_prefix(Method::GET, "/echo/", |text, _| echo_response(text));

    router.on(Method::GET, "/user-agent", |_, request| user_agent_response(request));

    let read_directory = directory.clone();
    router.on_prefix(Method::GET, "/files/", move |name, _| {
        read_file(read_directory.as_deref(), name)
    });

    router.on_prefix(Method::POST, "/files/", move |name, request| {
        save_file(directory.as_deref(), name, &request.body)
    });

    router
}

/// Responds with the given text as a plain text body.
fn echo_response(text: &str) -> Response {
    Response::from(text).with_header(CONTENT_TYPE, "text/plain")
}

/// Responds with the value of the request's user-agent header, or 400 if there is none.
fn user_agent_response(request: &Request) -> Response {
    match request.headers.get(&USER_AGENT) {
        Some(value) => Response::from(value).with_header(CONTENT_TYPE, "text/plain"),
        None => Response::from(status::BAD_REQUEST)
    }
}

/// Serves the named file out of the given directory.
fn read_file(directory: Option<&Path>, name: &str) -> Response {
    let directory = match directory {
        Some(directory) if is_safe_name(name) => directory,
        _ => return Response::from(status::NOT_FOUND)
    };

    match fs::read(directory.join(name)) {
        Ok(contents) => Response::from(contents).with_header(CONTENT_TYPE, "application/octet-stream"),
        Err(err) if err.kind() == ErrorKind::NotFound => Response::from(status::NOT_FOUND),
        Err(_) => Response::from(status::INTERNAL_SERVER_ERROR)
    }
}

/// Writes the given body to the named file in the given directory, creating or replacing it.
fn save_file(directory: Option<&Path>, name: &str, body: &[u8]) -> Response {
    let directory = match directory {
        Some(directory) if is_safe_name(name) => directory,
        _ => return Response::from(status::NOT_FOUND)
    };

    match fs::write(directory.join(name), body) {
        Ok(()) => Response::from(status::CREATED),
        Err(_) => Response::from(status::INTERNAL_SERVER_ERROR)
    }
}

/// Checks that the given file name does not escape the storage directory.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && !name.contains('/')
}
