//! In-memory test client over a built dispatcher.

use http::Method;

use pharos_core::PharosResult;
use pharos_dispatch::Dispatcher;

use crate::response::TestResponse;

/// Dispatches requests against a [`Dispatcher`] without a network listener.
///
/// Fatal registry failures panic, so tests fail loudly instead of asserting
/// against a masked error response.
///
/// # Example
///
/// ```
/// use pharos_core::fixtures;
/// use pharos_dispatch::Dispatcher;
/// use pharos_test::TestClient;
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register_controller(fixtures::tools_controller()).unwrap();
///
/// let client = TestClient::new(dispatcher);
/// client.get("/tools").assert_ok().assert_body("tools index");
/// client.get("/nowhere").assert_not_found();
/// ```
#[derive(Debug)]
#[must_use]
pub struct TestClient {
    dispatcher: Dispatcher,
}

impl TestClient {
    /// Wraps a fully registered dispatcher.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Dispatches a request with an arbitrary method.
    ///
    /// # Panics
    ///
    /// Panics if dispatch returns a fatal registry error.
    pub fn request(&self, method: Method, path: &str) -> TestResponse {
        match self.try_request(&method, path) {
            Ok(response) => response,
            Err(err) => panic!("dispatch of {method} {path} failed: {err}"),
        }
    }

    /// Dispatches a request, surfacing fatal errors to the caller.
    ///
    /// # Errors
    ///
    /// Returns the dispatcher's fatal error untouched.
    pub fn try_request(&self, method: &Method, path: &str) -> PharosResult<TestResponse> {
        self.dispatcher
            .dispatch(method, path)
            .map(TestResponse::new)
    }

    /// Dispatches a `GET` request.
    pub fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path)
    }

    /// Dispatches a `HEAD` request.
    pub fn head(&self, path: &str) -> TestResponse {
        self.request(Method::HEAD, path)
    }

    /// Dispatches a `POST` request.
    pub fn post(&self, path: &str) -> TestResponse {
        self.request(Method::POST, path)
    }

    /// Dispatches a `PUT` request.
    pub fn put(&self, path: &str) -> TestResponse {
        self.request(Method::PUT, path)
    }

    /// Dispatches a `DELETE` request.
    pub fn delete(&self, path: &str) -> TestResponse {
        self.request(Method::DELETE, path)
    }

    /// Returns the wrapped dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharos_core::fixtures;

    fn client() -> TestClient {
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .register_controller(fixtures::tools_controller())
            .unwrap();
        dispatcher
            .register_controller(fixtures::user_controller())
            .unwrap();
        TestClient::new(dispatcher)
    }

    #[test]
    fn test_get_and_post() {
        let client = client();
        client.get("/tools/profile").assert_ok().assert_body("tools profile");
        client.post("/tools/submit").assert_ok().assert_body("submitted");
    }

    #[test]
    fn test_head_follows_get_rule() {
        let client = client();
        client.head("/tools").assert_ok();
        client.head("/tools/submit").assert_not_found();
    }

    #[test]
    fn test_typed_parameter() {
        let client = client();
        client.get("/user/42").assert_ok().assert_body("user 42");
        client.get("/user/4x2").assert_not_found();
    }
}
