/// HTTP version "HTTP/1.1"
pub const HTTP_VERSION_1_1: &str = "HTTP/1.1";

/// Checks if the given raw version string has the form HTTP/<digit>.<digit>.
/// The version is only checked for shape, not gated on a particular value.
pub fn is_wellformed(raw: &str) -> bool {
    match raw.strip_prefix("HTTP/") {
        Some(rest) => {
            let rest = rest.as_bytes();
            rest.len() == 3
                && rest[0].is_ascii_digit()
                && rest[1] == b'.'
                && rest[2].is_ascii_digit()
        }
        None => false
    }
}

#[cfg(test)]
mod tests {
    use crate::common::version::is_wellformed;

    #[test]
    fn supported_versions() {
        assert!(is_wellformed("HTTP/1.1"));
        assert!(is_wellformed("HTTP/1.0"));
        assert!(is_wellformed("HTTP/1.2"));
    }

    #[test]
    fn malformed_versions() {
        assert!(!is_wellformed("HTTP/11.1"));
        assert!(!is_wellformed("HTTP/1."));
        assert!(!is_wellformed("HTTP/"));
        assert!(!is_wellformed("http/1.1"));
        assert!(!is_wellformed("HTTP 1.1"));
        assert!(!is_wellformed(""));
    }
}
