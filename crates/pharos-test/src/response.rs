//! Test response wrapper with assertion helpers.

use http::header::HeaderName;
use http::StatusCode;

use pharos_core::Response;

/// A dispatched response with assertion helpers for tests.
///
/// Assertion methods panic with a descriptive message on mismatch, which is
/// the behavior tests want.
#[derive(Debug, Clone)]
#[must_use]
pub struct TestResponse {
    inner: Response,
}

impl TestResponse {
    /// Wraps a dispatched response.
    pub fn new(inner: Response) -> Self {
        Self { inner }
    }

    /// Returns the status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Returns the body decoded as UTF-8.
    #[must_use]
    pub fn body_text(&self) -> String {
        self.inner.body_text()
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &HeaderName) -> Option<&str> {
        self.inner.headers().get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the underlying response.
    #[must_use]
    pub fn into_inner(self) -> Response {
        self.inner
    }

    /// Asserts the status code.
    ///
    /// # Panics
    ///
    /// Panics if the status does not match.
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status(),
            expected,
            "expected status {expected}, got {} (body: {:?})",
            self.status(),
            self.body_text()
        );
        self
    }

    /// Asserts a `200 OK` status.
    ///
    /// # Panics
    ///
    /// Panics if the status is not `200`.
    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    /// Asserts a `404 Not Found` status.
    ///
    /// # Panics
    ///
    /// Panics if the status is not `404`.
    pub fn assert_not_found(self) -> Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    /// Asserts the exact body text.
    ///
    /// # Panics
    ///
    /// Panics if the body differs.
    pub fn assert_body(self, expected: &str) -> Self {
        assert_eq!(self.body_text(), expected, "body mismatch");
        self
    }

    /// Asserts the body contains a fragment.
    ///
    /// # Panics
    ///
    /// Panics if the fragment is missing.
    pub fn assert_body_contains(self, fragment: &str) -> Self {
        assert!(
            self.body_text().contains(fragment),
            "body {:?} does not contain {fragment:?}",
            self.body_text()
        );
        self
    }
}

impl From<Response> for TestResponse {
    fn from(inner: Response) -> Self {
        Self::new(inner)
    }
}
