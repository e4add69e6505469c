use std::fmt::{Display, Formatter};

use crate::common::header::Header::{Custom, Standard};

/// A header name. Is either a "Standard" header with a static string, or a "Custom" header with a uniquely allocated String.
/// The "Standard" variant is to reuse memory for frequently seen headers.
/// Names are normalized to lowercase, so two headers that differ only in case compare equal.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub enum Header {
    Standard(&'static str),
    Custom(String),
}

impl Header {
    pub fn as_str(&self) -> &str {
        match self {
            Header::Standard(str) => str,
            Header::Custom(str) => str.as_str()
        }
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Standard(s) => f.write_str(s),
            Custom(s) => f.write_str(s)
        }
    }
}

macro_rules! standard_headers {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $value:expr);
        )+
    ) => {
        $(
            $(#[$docs])*
            pub const $name: Header = Header::Standard($value);
        )+


        impl From<String> for Header {
            /// Gets a header from the given string representing the header name.
            fn from(mut value: String) -> Header {
                value.make_ascii_lowercase();
                match value.as_str() {
                    $(
                    $value => $name,
                    )+
                    _ => Header::Custom(value)
                }
            }
        }
    }
}

impl From<&str> for Header {
    /// Gets a header from the given string representing the header name.
    fn from(value: &str) -> Header {
        Header::from(value.to_string())
    }
}


standard_headers! {
    (ACCEPT, "accept");
    (ACCEPT_ENCODING, "accept-encoding");
    (CONNECTION, "connection");
    (CONTENT_ENCODING, "content-encoding");
    (CONTENT_LENGTH, "content-length");
    (CONTENT_TYPE, "content-type");
    (HOST, "host");
    (USER_AGENT, "user-agent");
}

/// Creates a map of headers.
/// ```
/// use httpbox::common::header::{CONTENT_TYPE, CONTENT_LENGTH, Header};
/// use httpbox::header_map;
///
/// let headers = header_map![
///    (CONTENT_LENGTH, "5"),
///    ("custom-header", "hello"),
///    ("coNtEnt-TyPE", "text/plain"),
///    (CONTENT_LENGTH, "7"),
/// ];
///
/// assert_eq!(headers.get(&CONTENT_LENGTH), Some("7"));
/// assert_eq!(headers.get(&CONTENT_TYPE), Some("text/plain"));
/// assert_eq!(headers.get(&Header::Custom("custom-header".into())), Some("hello"));
/// ```
#[macro_export]
macro_rules! header_map {
    () => { $crate::common::header::HeaderMap::new() };
    ($(($header:expr, $value:expr)),+ $(,)?) => {
        $crate::common::header::HeaderMap::from_pairs(vec![
            $(($header.into(), $value.into()),)+
        ])
    }
}

/// A map of headers to values. Keeps insertion order so serialization is deterministic.
/// Setting a header that is already present replaces its value in place (the last value wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(Header, String)>,
}

impl HeaderMap {
    /// Creates an empty header map.
    pub fn new() -> HeaderMap {
        HeaderMap { entries: Vec::new() }
    }

    /// Builds a header map from the given header and value pairs. Later values for the same header win.
    pub fn from_pairs(pairs: Vec<(Header, String)>) -> HeaderMap {
        pairs.into_iter().fold(HeaderMap::new(), |mut map, (header, value)| {
            map.set(header, value);
            map
        })
    }

    /// Sets the value for the given header, replacing any existing value.
    pub fn set(&mut self, header: Header, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == header) {
            Some((_, existing_value)) => *existing_value = value,
            None => self.entries.push((header, value))
        }
    }

    /// Gets the value for the given header.
    pub fn get(&self, header: &Header) -> Option<&str> {
        self.entries.iter()
            .find(|(existing, _)| existing == header)
            .map(|(_, value)| value.as_str())
    }

    /// Checks if the map contains the given header.
    pub fn contains(&self, header: &Header) -> bool {
        self.get(header).is_some()
    }

    /// Iterates over headers and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item=(&Header, &str)> {
        self.entries.iter().map(|(header, value)| (header, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
