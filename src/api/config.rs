//! Backend URL Resolution
//!
//! The backend location is supplied at build time through three environment
//! values; each API call composes its own absolute URL from them.

/// Default protocol when `LARDER_API_PROTOCOL` is unset at build time
pub const DEFAULT_PROTOCOL: &str = "http";
/// Default domain when `LARDER_API_DOMAIN` is unset at build time
pub const DEFAULT_DOMAIN: &str = "127.0.0.1";
/// Default port when `LARDER_API_PORT` is unset at build time
pub const DEFAULT_PORT: &str = "8000";

/// Resolve the absolute URL for one backend operation.
///
/// Called per request; nothing is cached. The inputs are not validated, so
/// a misconfigured value produces a malformed URL whose request then fails
/// as an ordinary network error.
pub fn api_url(path: &str) -> String {
    let protocol = option_env!("LARDER_API_PROTOCOL").unwrap_or(DEFAULT_PROTOCOL);
    let domain = option_env!("LARDER_API_DOMAIN").unwrap_or(DEFAULT_DOMAIN);
    let port = option_env!("LARDER_API_PORT").unwrap_or(DEFAULT_PORT);
    compose_url(protocol, domain, port, path)
}

/// Compose `{protocol}://{domain}:{port}{path}`.
pub fn compose_url(protocol: &str, domain: &str, port: &str, path: &str) -> String {
    format!("{}://{}:{}{}", protocol, domain, port, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_all_four_parts() {
        assert_eq!(
            compose_url("https", "example.com", "8443", "/api/login"),
            "https://example.com:8443/api/login"
        );
    }

    #[test]
    fn empty_values_pass_through_unvalidated() {
        // A missing value yields a malformed URL; the request layer reports
        // the failure, not the resolver.
        assert_eq!(compose_url("", "", "", "/api/list"), "://:/api/list");
    }

    #[test]
    fn api_url_uses_build_defaults() {
        assert_eq!(api_url("/api/list"), "http://127.0.0.1:8000/api/list");
    }
}
