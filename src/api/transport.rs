//
//  github2
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The dispatcher in [`client`](super::client) builds an [`ApiRequest`] and
//! hands it to a [`Transport`]. The transport owns connection handling, TLS
//! and timeouts; it reports what the server said as a [`RawResponse`] and
//! leaves status interpretation to the caller.
//!
//! [`HttpTransport`] is the production implementation on top of `reqwest`.
//! Tests use [`MockTransport`](super::testing::MockTransport).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use url::Url;

use super::common::Result;

/// A fully built request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL without query string
    pub url: Url,
    /// Query parameters (pagination, credentials)
    pub query: Vec<(String, String)>,
    /// Form-encoded body, if any
    pub form: Option<Vec<(String, String)>>,
}

impl ApiRequest {
    /// Creates a request with no query and no body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            query: Vec::new(),
            form: None,
        }
    }

    /// The URL path, without scheme, host or query.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Looks up a query parameter by name.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Looks up a form field by name.
    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .as_ref()?
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// What the server answered.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    /// Creates a response.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

/// Sends requests to the API.
///
/// Implementations must not retry and must not inspect the status code;
/// any response the server produced is returned as a [`RawResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the server's answer.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was obtained (connection
    /// failure, TLS error, timeout).
    async fn send(&self, request: ApiRequest) -> Result<RawResponse>;
}

/// `reqwest`-backed transport.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use github2::api::HttpTransport;
///
/// let transport = HttpTransport::new()?.with_timeout(Duration::from_secs(30))?;
/// # Ok::<(), github2::api::ApiError>(())
/// ```
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Creates a transport with the crate's User-Agent and no timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: Self::builder().build()?,
        })
    }

    /// Rebuilds the underlying client with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: Self::builder().timeout(timeout).build()?,
        })
    }

    fn builder() -> reqwest::ClientBuilder {
        Client::builder().user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        let mut builder = self.http.request(request.method, request.url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(form) = &request.form {
            builder = builder.form(form);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
