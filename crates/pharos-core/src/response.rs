//! Per-request mutable response object.
//!
//! The dispatcher seeds a default `200 OK` [`Response`] before invoking a
//! handler and passes it by mutable reference, so handlers can override the
//! status or set headers in place. The handler's return value is appended to
//! the body afterwards. The response is request-scoped and never shared
//! across dispatch calls.

use bytes::BytesMut;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::StatusCode;

use crate::PharosError;

/// A mutable HTTP response under construction.
///
/// # Example
///
/// ```
/// use http::StatusCode;
/// use pharos_core::Response;
///
/// let mut response = Response::ok();
/// response.set_status(StatusCode::CREATED);
/// response.append_body("created");
///
/// assert_eq!(response.status(), StatusCode::CREATED);
/// assert_eq!(response.body_text(), "created");
/// ```
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: BytesMut,
}

impl Default for Response {
    fn default() -> Self {
        Self::ok()
    }
}

impl Response {
    /// Creates a response with the given status and an empty body.
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: BytesMut::new(),
        }
    }

    /// Creates a `200 OK` response with an empty body.
    #[must_use]
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    /// Creates the fixed `404 Not Found` response for unmatched requests.
    #[must_use]
    pub fn not_found() -> Self {
        let mut response = Self::new(StatusCode::NOT_FOUND);
        response.append_body("404 Not Found");
        response
    }

    /// Renders a non-fatal dispatch error as a structured response.
    ///
    /// [`PharosError::ControllerNotRegistered`] is a fatal registry failure
    /// and is not rendered here; the dispatcher propagates it instead.
    #[must_use]
    pub fn from_error(error: &PharosError) -> Self {
        if matches!(error, PharosError::NoRouteMatch { .. }) {
            return Self::not_found();
        }
        let mut response = Self::new(error.status_code());
        response.append_body(error.to_string());
        response
    }

    /// Returns the current status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Overrides the status code.
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Returns the response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a mutable reference to the response headers.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Inserts a header, replacing any previous value for the name.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Appends bytes to the response body.
    pub fn append_body(&mut self, chunk: impl AsRef<[u8]>) {
        self.body.extend_from_slice(chunk.as_ref());
    }

    /// Returns the body as raw bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_200_with_empty_body() {
        let response = Response::default();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().is_empty());
        assert!(response.headers().is_empty());
    }

    #[test]
    fn test_append_body_accumulates() {
        let mut response = Response::ok();
        response.append_body("hello");
        response.append_body(", world");
        assert_eq!(response.body_text(), "hello, world");
    }

    #[test]
    fn test_not_found_body() {
        let response = Response::not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body_text(), "404 Not Found");
    }

    #[test]
    fn test_from_error_no_route_match() {
        let err = PharosError::no_route_match("GET", "/missing");
        let response = Response::from_error(&err);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body_text(), "404 Not Found");
    }

    #[test]
    fn test_from_error_invalid_parameter_names_offender() {
        let err = PharosError::invalid_parameter("id", "int", "12a");
        let response = Response::from_error(&err);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.body_text().contains("'id'"));
        assert!(response.body_text().contains("int"));
    }

    #[test]
    fn test_from_error_unsupported_type_names_type() {
        let err = PharosError::unsupported_parameter_type("when", "DateTime");
        let response = Response::from_error(&err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.body_text().contains("DateTime"));
    }

    #[test]
    fn test_headers_mutation() {
        let mut response = Response::ok();
        response.insert_header(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain"),
        );
        assert_eq!(
            response.headers().get(http::header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/plain"))
        );
    }
}
