//! Client IP extraction for rate limiting.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Fallback key when no forwarding header is present.
const UNKNOWN_CLIENT: &str = "unknown";

/// The client's IP as reported by the reverse proxy.
///
/// Takes the first `x-forwarded-for` entry, then `x-real-ip`, then
/// `"unknown"`. The service always runs behind a proxy that sets these;
/// the fallback only groups direct hits into one bucket.
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ClientIp(client_ip_from_parts(parts)))
    }
}

fn client_ip_from_parts(parts: &Parts) -> String {
    if let Some(forwarded) = header_str(parts, "x-forwarded-for") {
        if let Some(first) = forwarded.split(',').next().map(str::trim).filter(|s| !s.is_empty()) {
            return first.to_string();
        }
    }
    if let Some(real_ip) = header_str(parts, "x-real-ip") {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }
    UNKNOWN_CLIENT.to_string()
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn first_forwarded_entry_wins() {
        let parts = parts_with(&[("x-forwarded-for", "203.0.113.7, 10.0.0.1")]);
        assert_eq!(client_ip_from_parts(&parts), "203.0.113.7");
    }

    #[test]
    fn real_ip_is_the_fallback_header() {
        let parts = parts_with(&[("x-real-ip", "198.51.100.4")]);
        assert_eq!(client_ip_from_parts(&parts), "198.51.100.4");
    }

    #[test]
    fn unknown_without_any_header() {
        let parts = parts_with(&[]);
        assert_eq!(client_ip_from_parts(&parts), "unknown");
    }

    #[test]
    fn empty_forwarded_header_falls_through() {
        let parts = parts_with(&[("x-forwarded-for", "  "), ("x-real-ip", "198.51.100.4")]);
        assert_eq!(client_ip_from_parts(&parts), "198.51.100.4");
    }
}
