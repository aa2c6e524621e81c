//! HTTP status code used to classify an inference response.

/// The only status code that counts as a working endpoint.
pub const HTTP_OK: u16 = 200;

/// HTTP status code as received from the server.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// Exactly 200. Other 2xx codes are not treated as success.
    pub fn is_ok(&self) -> bool {
        self.0 == HTTP_OK
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// 401 or 403: the credential was rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.0, 401 | 403)
    }

    /// 503 from the inference API usually means the model is still loading.
    pub fn is_unavailable(&self) -> bool {
        self.0 == 503
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
