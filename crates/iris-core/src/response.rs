//! Response wrapper.

use crate::error::ClientError;
use bytes::Bytes;
use http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An HTTP response returned by a [`Transport`](crate::Transport).
#[derive(Clone, PartialEq)]
pub struct Response {
    /// HTTP status code
    status: StatusCode,
    /// Response headers
    headers: HeaderMap,
    /// Response body bytes
    body: Bytes,
}

impl Response {
    /// Creates a response from raw parts.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Returns the status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the status code as a u16.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns true if the status is successful (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns true if the status is a redirection (3xx).
    #[must_use]
    pub fn is_redirection(&self) -> bool {
        self.status.is_redirection()
    }

    /// Returns true if the status is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    /// Returns true if the status is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// Returns a reference to the headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Gets a header value by name.
    #[must_use]
    pub fn header(&self, name: impl AsRef<str>) -> Option<&HeaderValue> {
        self.headers.get(name.as_ref())
    }

    /// Gets a header value as a string.
    #[must_use]
    pub fn header_str(&self, name: impl AsRef<str>) -> Option<&str> {
        self.header(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the Content-Type header value.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header_str(header::CONTENT_TYPE.as_str())
    }

    /// Returns the Content-Length header value.
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        self.header_str(header::CONTENT_LENGTH.as_str())
            .and_then(|v| v.parse().ok())
    }

    /// Returns the raw body bytes.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the body as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid UTF-8.
    pub fn text(&self) -> Result<String, ClientError> {
        String::from_utf8(self.body.to_vec())
            .map_err(|e| ClientError::BodyDecode(format!("body is not valid UTF-8: {e}")))
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body).map_err(ClientError::Json)
    }

    /// Deserializes the body as a JSON value.
    pub fn json_value(&self) -> Result<serde_json::Value, ClientError> {
        self.json()
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

/// Serialized form of a response: status code, header pairs in insertion
/// order, raw body bytes. Header values are stored as text; values outside
/// UTF-8 are replaced lossily.
#[derive(Serialize, Deserialize)]
struct ResponseRecord {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        ResponseRecord {
            status: self.status.as_u16(),
            headers,
            body: self.body.to_vec(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Response {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = ResponseRecord::deserialize(deserializer)?;

        let status = StatusCode::from_u16(record.status).map_err(serde::de::Error::custom)?;

        let mut headers = HeaderMap::new();
        for (name, value) in record.headers {
            let name = HeaderName::try_from(name.as_str()).map_err(serde::de::Error::custom)?;
            let value = HeaderValue::try_from(value.as_str()).map_err(serde::de::Error::custom)?;
            headers.append(name, value);
        }

        Ok(Self {
            status,
            headers,
            body: Bytes::from(record.body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn create_response(status: u16, body: &str) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Response::new(
            StatusCode::from_u16(status).unwrap(),
            headers,
            body.to_string(),
        )
    }

    #[test]
    fn test_status() {
        let response = create_response(200, "{}");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.status_code(), 200);
        assert!(response.is_success());
    }

    #[test]
    fn test_redirection() {
        let response = create_response(303, "");
        assert!(response.is_redirection());
        assert!(!response.is_success());
    }

    #[test]
    fn test_client_error() {
        let response = create_response(404, "{}");
        assert!(response.is_client_error());
    }

    #[test]
    fn test_server_error() {
        let response = create_response(500, "{}");
        assert!(response.is_server_error());
    }

    #[test]
    fn test_header() {
        let response = create_response(200, "{}");
        assert_eq!(response.header_str("Content-Type"), Some("application/json"));
        assert_eq!(response.content_type(), Some("application/json"));
    }

    #[test]
    fn test_text() {
        let response = create_response(200, "{\"name\":\"Alice\"}");
        assert_eq!(response.text().unwrap(), "{\"name\":\"Alice\"}");
    }

    #[test]
    fn test_json() {
        let response = create_response(200, "{\"name\":\"Alice\",\"age\":30}");
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["age"], 30);
    }

    #[test]
    fn test_round_trip() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.append("x-tag", HeaderValue::from_static("a"));
        headers.append("x-tag", HeaderValue::from_static("b"));
        let original = Response::new(
            StatusCode::CREATED,
            headers,
            json!({"hello": "world"}).to_string(),
        );

        let encoded = serde_json::to_vec(&original).unwrap();
        let decoded: Response = serde_json::from_slice(&encoded).unwrap();

        assert_eq!(decoded.status(), original.status());
        assert_eq!(decoded.headers(), original.headers());
        assert_eq!(decoded.body(), original.body());
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_round_trip_rejects_invalid_status() {
        let encoded = serde_json::to_vec(&serde_json::json!({
            "status": 42,
            "headers": [],
            "body": [],
        }))
        .unwrap();
        let decoded: Result<Response, _> = serde_json::from_slice(&encoded);
        assert!(decoded.is_err());
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            status in 100u16..600,
            headers in proptest::collection::vec(
                ("[a-z][a-z0-9-]{0,12}", "[a-zA-Z0-9 ,;=./-]{0,24}"),
                0..8,
            ),
            body in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            let mut map = HeaderMap::new();
            for (name, value) in &headers {
                map.append(
                    HeaderName::try_from(name.as_str()).unwrap(),
                    HeaderValue::try_from(value.trim()).unwrap(),
                );
            }
            let original = Response::new(StatusCode::from_u16(status).unwrap(), map, body);

            let encoded = serde_json::to_vec(&original).unwrap();
            let decoded: Response = serde_json::from_slice(&encoded).unwrap();

            prop_assert_eq!(decoded, original);
        }
    }
}
