//! Response assertion helpers.

use http::StatusCode;
use iris_core::Response;

/// Assertion methods for [`Response`], for use in tests.
///
/// Each method panics with a descriptive message on mismatch and returns
/// `&Self` so assertions chain.
pub trait ResponseExt {
    /// Asserts that the status code equals the expected value.
    fn assert_status(&self, expected: StatusCode) -> &Self;

    /// Asserts that the status code equals the expected u16 value.
    fn assert_status_code(&self, expected: u16) -> &Self;

    /// Asserts that a header exists with the expected value.
    fn assert_header(&self, name: &str, expected: &str) -> &Self;

    /// Asserts that the Content-Type header starts with the expected value.
    fn assert_content_type(&self, expected: &str) -> &Self;

    /// Asserts that the body equals the expected string.
    fn assert_body_eq(&self, expected: &str) -> &Self;

    /// Asserts that the JSON body matches the expected value.
    fn assert_json_eq(&self, expected: &serde_json::Value) -> &Self;
}

impl ResponseExt for Response {
    fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status(),
            expected,
            "expected status {}, got {}",
            expected,
            self.status()
        );
        self
    }

    fn assert_status_code(&self, expected: u16) -> &Self {
        assert_eq!(
            self.status_code(),
            expected,
            "expected status {}, got {}",
            expected,
            self.status_code()
        );
        self
    }

    fn assert_header(&self, name: &str, expected: &str) -> &Self {
        let actual = self
            .header_str(name)
            .unwrap_or_else(|| panic!("header '{name}' not found"));
        assert_eq!(
            actual, expected,
            "header '{name}': expected '{expected}', got '{actual}'"
        );
        self
    }

    fn assert_content_type(&self, expected: &str) -> &Self {
        let actual = self.content_type().expect("Content-Type header not found");
        assert!(
            actual.starts_with(expected),
            "Content-Type: expected '{expected}', got '{actual}'"
        );
        self
    }

    fn assert_body_eq(&self, expected: &str) -> &Self {
        let body = self.text().expect("body should be valid UTF-8");
        assert_eq!(body, expected, "body mismatch");
        self
    }

    fn assert_json_eq(&self, expected: &serde_json::Value) -> &Self {
        let actual: serde_json::Value = self.json().expect("body should be valid JSON");
        assert_eq!(&actual, expected, "JSON body mismatch");
        self
    }
}
