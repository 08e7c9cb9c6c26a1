//! Classify URL problems and curl errors into fetch error kinds.

use url::Url;

use super::error::{FetchError, FetchErrorKind};

/// Reject anything that is not an absolute http(s) URL before touching the network.
pub(crate) fn validate_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchError::bad_url(raw, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::bad_url(
            raw,
            format!("unsupported scheme {:?}", other),
        )),
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> FetchErrorKind {
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return FetchErrorKind::BadUrl;
    }
    if e.is_aborted_by_callback() {
        return FetchErrorKind::Interrupted;
    }
    if e.is_operation_timedout()
        || e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_send_error()
        || e.is_recv_error()
        || e.is_got_nothing()
        || e.is_too_many_redirects()
    {
        return FetchErrorKind::Network;
    }
    FetchErrorKind::Io
}

/// Turn a curl error for `url` into a [`FetchError`].
pub(crate) fn from_curl(url: &str, e: &curl::Error) -> FetchError {
    match classify_curl_error(e) {
        FetchErrorKind::BadUrl => FetchError::bad_url(url, e),
        FetchErrorKind::Network => FetchError::Network(e.to_string()),
        FetchErrorKind::Interrupted => FetchError::Interrupted,
        FetchErrorKind::Io => FetchError::Io(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Codes are inferred as `CURLcode`, whose width differs per platform.
    macro_rules! kind {
        ($code:expr) => {
            classify_curl_error(&curl::Error::new($code))
        };
    }

    #[test]
    fn malformed_and_unsupported_are_bad_url() {
        assert_eq!(kind!(1), FetchErrorKind::BadUrl);
        assert_eq!(kind!(3), FetchErrorKind::BadUrl);
    }

    #[test]
    fn connectivity_is_network() {
        // resolve host, connect, timeout, TLS connect, empty reply, recv
        for code in [6, 7, 28, 35, 52, 56] {
            assert_eq!(kind!(code), FetchErrorKind::Network, "code {}", code);
        }
    }

    #[test]
    fn callback_abort_is_interrupted() {
        assert_eq!(kind!(42), FetchErrorKind::Interrupted);
    }

    #[test]
    fn local_read_write_is_io() {
        assert_eq!(kind!(23), FetchErrorKind::Io);
        assert_eq!(kind!(26), FetchErrorKind::Io);
    }

    #[test]
    fn validate_url_accepts_http_and_https() {
        assert!(validate_url("https://api.github.com/search/users?q=location:lagos").is_ok());
        assert!(validate_url("http://127.0.0.1:8080/").is_ok());
    }

    #[test]
    fn validate_url_rejects_garbage_and_other_schemes() {
        for raw in ["", "not a url", "/relative/path", "ftp://example.com/list"] {
            let err = validate_url(raw).unwrap_err();
            assert_eq!(err.kind(), FetchErrorKind::BadUrl, "{:?}", raw);
        }
    }
}
