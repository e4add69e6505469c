use crate::common::method::Method;
use crate::common::request::Request;
use crate::common::response::Response;
use crate::common::status;

/// A handler for a request. The first argument is the part of the path left over after the
/// matched route pattern.
type Handler = Box<dyn Fn(&str, &Request) -> Response + 'static + Send + Sync>;

/// How a route pattern matches request paths.
enum Pattern {
    /// Matches only paths equal to the given string.
    Exact(String),
    /// Matches any path starting with the given string.
    Prefix(String),
}

impl Pattern {
    /// Matches the given path against this pattern. Returns the remainder of the path after
    /// the pattern, or None if the pattern does not match.
    fn matches<'a>(&self, path: &'a str) -> Option<&'a str> {
        match self {
            Pattern::Exact(pattern) if pattern == path => Some(""),
            Pattern::Exact(_) => None,
            Pattern::Prefix(pattern) => path.strip_prefix(pattern.as_str())
        }
    }

    /// Ranks this pattern for when multiple routes match a path. Exact patterns beat prefix
    /// patterns, and longer prefixes beat shorter ones.
    fn specificity(&self) -> (bool, usize) {
        match self {
            Pattern::Exact(pattern) => (true, pattern.len()),
            Pattern::Prefix(pattern) => (false, pattern.len())
        }
    }
}

/// A route in a router.
struct Route {
    method: Method,
    pattern: Pattern,
    handler: Handler,
}

/// A router that dispatches requests to handlers by method and path.
/// ```
/// use httpbox::common::method::Method;
/// use httpbox::common::response::Response;
/// use httpbox::server::Router;
///
/// let mut router = Router::new();
/// router.on(Method::GET, "/hello", |_, _| Response::from("hi"));
/// router.on_prefix(Method::GET, "/echo/", |rest, _| Response::from(rest));
/// ```
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Creates a new empty router.
    pub fn new() -> Router {
        Router { routes: Vec::new() }
    }

    /// Registers a handler for requests whose path equals the given path exactly.
    pub fn on(&mut self, method: Method, path: &str, handler: impl Fn(&str, &Request) -> Response + 'static + Send + Sync) {
        self.routes.push(Route {
            method,
            pattern: Pattern::Exact(path.to_string()),
            handler: Box::new(handler),
        })
    }

    /// Registers a handler for requests whose path starts with the given prefix. The handler
    /// receives the part of the path after the prefix.
    pub fn on_prefix(&mut self, method: Method, prefix: &str, handler: impl Fn(&str, &Request) -> Response + 'static + Send + Sync) {
        self.routes.push(Route {
            method,
            pattern: Pattern::Prefix(prefix.to_string()),
            handler: Box::new(handler),
        })
    }

    /// Dispatches the given request to the most specific matching route. An exact match wins
    /// over any prefix match, and among prefix matches the longest prefix wins. Requests that
    /// match no route get a 404 response.
    pub fn dispatch(&self, request: &Request) -> Response {
        self.routes.iter()
            .filter(|route| route.method == request.method())
            .filter_map(|route| route.pattern.matches(request.path()).map(|rest| (route, rest)))
            .max_by_key(|(route, _)| route.pattern.specificity())
            .map(|(route, rest)| (route.handler)(rest, request))
            .unwrap_or_else(|| Response::from(status::NOT_FOUND))
    }
}
