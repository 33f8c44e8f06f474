//! Request execution shared by both clients.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;
use crate::options::{ClientOptions, RequestOptions};

/// Build a `reqwest` client carrying `default_headers` on every request.
pub(crate) fn build_client(
    default_headers: HeaderMap,
    options: &ClientOptions,
) -> Result<Client, ClientError> {
    let mut builder = Client::builder().default_headers(default_headers);
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Insert a header, rejecting values that are not valid header text.
pub(crate) fn insert_header(
    headers: &mut HeaderMap,
    name: &'static str,
    value: &str,
) -> Result<(), ClientError> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| ClientError::Configuration(format!("invalid value for header {name}")))?;
    value.set_sensitive(true);
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}

/// Normalize a base URL so paths can be appended with `format!`.
pub(crate) fn normalize_base_url(base_url: impl Into<String>) -> Result<String, ClientError> {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    if base_url.is_empty() {
        return Err(ClientError::Configuration("base URL must not be empty".into()));
    }
    Ok(base_url)
}

/// Send a request and fail on transport errors or non-2xx statuses.
pub(crate) async fn send(
    client: &Client,
    method: Method,
    url: &str,
    options: RequestOptions,
) -> Result<Response, ClientError> {
    let mut request = client.request(method.clone(), url);

    for (name, value) in &options.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ClientError::InvalidInput(format!("invalid header name: {name}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| ClientError::InvalidInput(format!("invalid value for header {name}")))?;
        request = request.header(name, value);
    }
    if !options.query.is_empty() {
        request = request.query(&options.query);
    }
    if let Some(body) = &options.body {
        request = request.json(body);
    }

    tracing::debug!(method = %method, url = %url, "Sending remote API request");

    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.bytes().await {
        Ok(bytes) => raw_body(&bytes),
        Err(e) => {
            tracing::debug!(
                url = %url,
                status = %status.as_u16(),
                error = %e,
                "Failed to read error response body"
            );
            None
        }
    };

    tracing::debug!(
        method = %method,
        url = %url,
        status = %status.as_u16(),
        "Remote API returned an error status"
    );

    Err(ClientError::Remote {
        status: Some(status.as_u16()),
        message: format!("Request failed with status code {}", status.as_u16()),
        body,
    })
}

/// Decode a successful response body.
///
/// A body that does not match `T` is a [`ClientError::Decode`] carrying the
/// status and the raw body, never a remote failure.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::debug!(status = %status, error = %e, "Remote API response did not decode");
        ClientError::Decode {
            status,
            message: e.to_string(),
            body: raw_body(&bytes),
        }
    })
}

/// JSON if the bytes parse, text otherwise, `None` when empty.
fn raw_body(bytes: &[u8]) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }
    Some(
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned())),
    )
}
