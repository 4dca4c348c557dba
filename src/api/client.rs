//! # Gateway Client
//!
//! One typed request function for the whole crate. Attaches the bearer
//! token, encodes the body (JSON, multipart, or URL-form), and classifies
//! the response: 200/201 parse into the caller's type, everything else
//! becomes an [`ApiError`] whose message is taken from the body's `detail`
//! or `message` field.
//!
//! The gateway does not retry, cache, or deduplicate. Ordering of
//! concurrent requests is the list controller's problem, not the
//! transport's.

use std::time::Duration;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::config;

/// HTTP methods the backend accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
            Method::Head => reqwest::Method::HEAD,
        }
    }
}

/// In-memory file payload attached to a multipart request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub mime: String,
    pub bytes: Bytes,
}

/// One field of a multipart body
///
/// Scalar fields travel as text (booleans stringified as `"true"`/`"false"`,
/// arrays as JSON-encoded text); files carry their name and mime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartField {
    Text(String, String),
    File(String, FilePart),
}

/// Request body variants the gateway knows how to encode
///
/// Multipart deliberately carries no explicit content-type header so the
/// transport can set its own boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Form(Vec<(String, String)>),
    Multipart(Vec<MultipartField>),
}

/// A fully described outbound request
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub token: Option<String>,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            token: None,
            body: None,
        }
    }

    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn json(mut self, value: Value) -> Self {
        self.body = Some(RequestBody::Json(value));
        self
    }

    pub fn multipart(mut self, fields: Vec<MultipartField>) -> Self {
        self.body = Some(RequestBody::Multipart(fields));
        self
    }
}

/// The gateway client wrapping a shared HTTP connection pool
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client with the default request timeout
    pub fn new() -> ApiResult<Self> {
        Self::with_timeout(config::FETCH_TIMEOUT)
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// Send a request and parse the response into the caller's type
    ///
    /// An empty response body parses as JSON `null`, so callers expecting
    /// nothing can decode into `Option<T>`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        tracing::debug!(method = ?request.method, url = %request.url, "dispatching request");

        let mut builder = self.http.request(request.method.as_reqwest(), &request.url);

        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token);
        }

        match request.body {
            Some(RequestBody::Json(value)) => builder = builder.json(&value),
            Some(RequestBody::Form(pairs)) => builder = builder.form(&pairs),
            Some(RequestBody::Multipart(fields)) => {
                builder = builder.multipart(build_form(fields)?)
            }
            None => {}
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        classify(status, &body)
    }
}

fn build_form(fields: Vec<MultipartField>) -> ApiResult<reqwest::multipart::Form> {
    let mut form = reqwest::multipart::Form::new();
    for field in fields {
        form = match field {
            MultipartField::Text(name, value) => form.text(name, value),
            MultipartField::File(name, file) => {
                let part = reqwest::multipart::Part::bytes(file.bytes.to_vec())
                    .file_name(file.file_name)
                    .mime_str(&file.mime)
                    .map_err(|e| ApiError::Network(format!("invalid mime type: {e}")))?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

/// Classify a completed HTTP exchange into the caller's result shape
fn classify<T: DeserializeOwned>(status: u16, body: &[u8]) -> ApiResult<T> {
    let value: Value = if body.is_empty() {
        Value::Null
    } else {
        match serde_json::from_slice(body) {
            Ok(v) => v,
            // A 2xx with an unreadable body is a real failure; a non-2xx
            // just falls through to the generic message below.
            Err(e) if status == 200 || status == 201 => {
                return Err(ApiError::Network(format!(
                    "failed to decode response body: {e}"
                )));
            }
            Err(_) => Value::Null,
        }
    };

    if status == 200 || status == 201 {
        serde_json::from_value(value)
            .map_err(|e| ApiError::Network(format!("failed to decode response body: {e}")))
    } else {
        let message = value
            .get("detail")
            .and_then(Value::as_str)
            .or_else(|| value.get("message").and_then(Value::as_str))
            .unwrap_or("An error occurred")
            .to_string();
        tracing::debug!(status, %message, "request rejected");
        Err(ApiError::from_status(status, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Greeting {
        message: String,
    }

    #[test]
    fn status_200_should_parse_into_expected_shape() {
        let body = br#"{"message": "Banner created successfully"}"#;
        let parsed: Greeting = classify(200, body).unwrap();
        assert_eq!(parsed.message, "Banner created successfully");
    }

    #[test]
    fn status_201_should_also_count_as_success() {
        let body = br#"{"message": "created"}"#;
        let parsed: Greeting = classify(201, body).unwrap();
        assert_eq!(parsed.message, "created");
    }

    #[test]
    fn empty_body_should_parse_as_null_not_a_parse_error() {
        let parsed: Option<Greeting> = classify(200, b"").unwrap();
        assert_eq!(parsed, None);
    }

    #[test]
    fn error_status_should_use_detail_field() {
        let body = br#"{"detail": "token expired"}"#;
        let err = classify::<Greeting>(401, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 401,
                message: "token expired".to_string()
            }
        );
    }

    #[test]
    fn error_status_should_fall_back_to_message_field() {
        let body = br#"{"message": "title already exists"}"#;
        let err = classify::<Greeting>(422, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 422,
                message: "title already exists".to_string()
            }
        );
    }

    #[test]
    fn error_status_without_known_fields_should_use_generic_message() {
        let err = classify::<Greeting>(500, b"boom").unwrap_err();
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 500,
                message: "An error occurred".to_string()
            }
        );
    }

    #[test]
    fn status_404_should_become_not_found() {
        let body = br#"{"detail": "Banner not found"}"#;
        let err = classify::<Greeting>(404, body).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn success_with_unreadable_body_should_be_a_decode_error() {
        let err = classify::<Greeting>(200, b"not json").unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn request_builder_should_attach_token_and_body() {
        let req = ApiRequest::new(Method::Post, "http://example.com/api/v1/util/faq")
            .bearer(Some("t0ken".to_string()))
            .json(serde_json::json!({"question": "q", "answer": "a"}));
        assert_eq!(req.token.as_deref(), Some("t0ken"));
        assert!(matches!(req.body, Some(RequestBody::Json(_))));
    }
}
