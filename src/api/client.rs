//
//  github2
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Dispatcher for the GitHub v2 API
//!
//! This module provides [`GithubClient`], the request context shared by all
//! command objects. It builds request URLs from a domain segment and path
//! segments, enforces each operation's [`AuthPolicy`], attaches credentials,
//! sends the request through a [`Transport`] and hands the parsed body to the
//! decoding layer.
//!
//! ## URL Layout
//!
//! ```text
//! <base_url>/<format>/<domain>/<segment>/<segment>/...
//! https://github.com/api/v2/json/repos/show/defunkt/dotjs
//! ```
//!
//! Empty segments are skipped. Segments are joined verbatim, so a project
//! identifier such as `defunkt/dotjs` spans two path components.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::common::{decode, ApiError, Filter, ResponseFormat, Result};
use super::transport::{ApiRequest, HttpTransport, RawResponse, Transport};
use super::v2::{Organizations, Repositories, Users};
use crate::auth::{AuthPolicy, Credentials};
use crate::config::Config;

/// Default API root for github.com.
pub const DEFAULT_BASE_URL: &str = "https://github.com/api/v2";

/// Extracts a readable message from a GitHub error body.
///
/// GitHub v2 returns errors as:
/// ```json
/// {"error": "Not Found"}
/// {"error": [{"error": "repository not found"}]}
/// ```
///
/// Later API versions use `{"message": "..."}`. If none of these match, the
/// raw body (or the status reason when the body is empty) is returned.
pub fn format_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(message) = json.get("error").and_then(|e| e.as_str()) {
            return message.to_string();
        }

        if let Some(message) = json
            .get("error")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("error"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        body.trim().to_string()
    }
}

/// Which user an operation targets.
///
/// Several operations can address either the authenticated account (through
/// the `user` domain) or a named account (through `users/<login>`). The
/// choice is made once per call and passed to the dispatcher explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// The authenticated account, `user/...`
    CurrentUser,
    /// A named account, `users/<login>/...`
    Named(&'a str),
}

impl<'a> Scope<'a> {
    /// Domain segment for this scope.
    pub fn domain(self) -> &'static str {
        match self {
            Self::CurrentUser => "user",
            Self::Named(_) => "users",
        }
    }

    /// Login segment for this scope, if any.
    pub fn login(self) -> Option<&'a str> {
        match self {
            Self::CurrentUser => None,
            Self::Named(login) => Some(login),
        }
    }
}

/// One API call, before credentials and the base URL are applied.
///
/// The method defaults to `GET`, or `POST` once a form body is attached,
/// unless set explicitly.
#[derive(Debug, Clone)]
pub struct Call {
    domain: String,
    segments: Vec<String>,
    method: Option<Method>,
    form: Option<Vec<(String, String)>>,
    page: Option<u32>,
}

impl Call {
    /// Starts a call under `domain`.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            segments: Vec::new(),
            method: None,
            form: None,
            page: None,
        }
    }

    /// Appends a path segment; empty segments are skipped.
    pub fn segment(mut self, segment: impl AsRef<str>) -> Self {
        let segment = segment.as_ref();
        if !segment.is_empty() {
            self.segments.push(segment.to_string());
        }
        self
    }

    /// Appends a path segment when present.
    pub fn maybe(self, segment: Option<&str>) -> Self {
        match segment {
            Some(segment) => self.segment(segment),
            None => self,
        }
    }

    /// Overrides the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Attaches a form body.
    pub fn form(mut self, form: Vec<(String, String)>) -> Self {
        self.form = Some(form);
        self
    }

    /// Requests a specific result page.
    pub fn page(mut self, page: Option<u32>) -> Self {
        self.page = page;
        self
    }

    /// The effective HTTP method.
    pub fn effective_method(&self) -> Method {
        match (&self.method, &self.form) {
            (Some(method), _) => method.clone(),
            (None, Some(_)) => Method::POST,
            (None, None) => Method::GET,
        }
    }

    /// `domain/segment/...`
    pub fn path(&self) -> String {
        std::iter::once(self.domain.as_str())
            .chain(self.segments.iter().map(String::as_str))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// The request context for the GitHub v2 API.
///
/// Holds the transport, base URL, response format and credentials, and hands
/// out the per-family command objects.
///
/// # Example
///
/// ```rust,no_run
/// use github2::api::GithubClient;
/// use github2::auth::Credentials;
///
/// # async fn example() -> Result<(), github2::api::ApiError> {
/// let client = GithubClient::new(Credentials::access_token("token"))?;
/// let me = client.users().show(None).await?;
/// println!("Logged in as {}", me);
/// # Ok(())
/// # }
/// ```
pub struct GithubClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    format: ResponseFormat,
    credentials: Credentials,
}

impl GithubClient {
    /// Creates a client over HTTP with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new()?), credentials))
    }

    /// Creates a client over an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn Transport>, credentials: Credentials) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
            format: ResponseFormat::default(),
            credentials,
        }
    }

    /// Creates a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut transport = HttpTransport::new()?;
        if let Some(secs) = config.api.timeout_secs {
            transport = transport.with_timeout(Duration::from_secs(secs))?;
        }

        Ok(Self::with_transport(Arc::new(transport), config.credentials())
            .with_base_url(&config.api.base_url)
            .with_format(config.api.format))
    }

    /// Sets the API root, e.g. `https://github.com/api/v2`.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the response format.
    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// The configured API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured response format.
    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    /// The configured credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns `true` when a token is configured.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    /// The configured login, if any.
    pub fn username(&self) -> Option<&str> {
        self.credentials.login()
    }

    /// User commands.
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Repository commands.
    pub fn repos(&self) -> Repositories<'_> {
        Repositories::new(self)
    }

    /// Organization commands.
    pub fn orgs(&self) -> Organizations<'_> {
        Organizations::new(self)
    }

    /// Chooses between the current-user and named-user endpoints.
    ///
    /// When authenticated and `user` is absent or equal to the configured
    /// login, the current-user endpoint is used. Otherwise `user` is used,
    /// falling back to the configured login.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingArgument`] when no user can be determined.
    pub fn scope<'a>(&'a self, user: Option<&'a str>) -> Result<Scope<'a>> {
        let user = user.filter(|u| !u.is_empty());

        if self.is_authenticated() && (user.is_none() || user == self.username()) {
            return Ok(Scope::CurrentUser);
        }

        user.or(self.username())
            .map(Scope::Named)
            .ok_or(ApiError::MissingArgument("user"))
    }

    /// Full URL for a call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the result is not a valid URL.
    pub fn url_for(&self, call: &Call) -> Result<Url> {
        let raw = format!("{}/{}/{}", self.base_url, self.format.as_str(), call.path());
        Ok(Url::parse(&raw)?)
    }

    /// Checks the policy, then sends the call and returns the raw response.
    async fn send(&self, policy: AuthPolicy, operation: &'static str, call: Call) -> Result<RawResponse> {
        policy.check(&self.credentials, operation)?;

        let mut request = ApiRequest::new(call.effective_method(), self.url_for(&call)?);
        if let Some(page) = call.page {
            request.query.push(("page".to_string(), page.to_string()));
        }
        request.query.extend(self.credentials.query_pairs());
        request.form = call.form;

        tracing::debug!(
            operation,
            method = %request.method,
            path = request.path(),
            authenticated = self.is_authenticated(),
            "dispatching request"
        );

        let response = self.transport.send(request).await?;
        tracing::debug!(operation, status = %response.status, "response received");
        Ok(response)
    }

    /// Sends a call and returns the parsed body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::AuthRequired`] when the policy is not met (nothing is sent)
    /// - [`ApiError::Status`] for non-2xx responses
    /// - transport and body-parsing errors
    pub async fn make_request(&self, policy: AuthPolicy, operation: &'static str, call: Call) -> Result<Value> {
        let response = self.send(policy, operation, call).await?;

        if !response.status.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: format_api_error(response.status, &response.body),
            });
        }

        self.format.parse(&response.body)
    }

    /// Sends a call and decodes the filtered body into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`make_request`](Self::make_request) returns, plus decoding
    /// errors.
    pub async fn get_value<T: DeserializeOwned>(
        &self,
        policy: AuthPolicy,
        operation: &'static str,
        call: Call,
        filter: Filter,
    ) -> Result<T> {
        let body = self.make_request(policy, operation, call).await?;
        decode(body, &filter)
    }

    /// Sends a call and decodes the filtered body into a list of `T`.
    ///
    /// # Errors
    ///
    /// See [`get_value`](Self::get_value).
    pub async fn get_values<T: DeserializeOwned>(
        &self,
        policy: AuthPolicy,
        operation: &'static str,
        call: Call,
        filter: Filter,
    ) -> Result<Vec<T>> {
        self.get_value(policy, operation, call, filter).await
    }

    /// Sends a call and reports whether the resource exists.
    ///
    /// # Returns
    ///
    /// `Ok(true)` for a 2xx answer, `Ok(false)` for 404.
    ///
    /// # Errors
    ///
    /// Any other status is returned as [`ApiError::Status`].
    pub async fn probe(&self, policy: AuthPolicy, operation: &'static str, call: Call) -> Result<bool> {
        let response = self.send(policy, operation, call).await?;

        match response.status {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(ApiError::Status {
                status,
                message: format_api_error(status, &response.body),
            }),
        }
    }
}
