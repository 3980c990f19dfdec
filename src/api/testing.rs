//
//  github2
//  api/testing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Testing utilities.
//!
//! [`MockTransport`] records every request it receives and replays canned
//! responses in order, so tests can assert both what was sent and that
//! nothing was sent at all.
//!
//! ```rust
//! use std::sync::Arc;
//! use github2::api::testing::MockTransport;
//! use github2::api::GithubClient;
//! use github2::auth::Credentials;
//!
//! let mock = Arc::new(MockTransport::new());
//! mock.push_json(r#"{"login": "defunkt"}"#);
//!
//! let client = GithubClient::with_transport(mock.clone(), Credentials::anonymous());
//! let user = tokio_test::block_on(client.users().show(Some("defunkt"))).unwrap();
//! assert_eq!(user.login.as_deref(), Some("defunkt"));
//! assert_eq!(mock.call_count(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::common::{ApiError, Result};
use super::transport::{ApiRequest, RawResponse, Transport};

enum Canned {
    Response(RawResponse),
    Failure(String),
}

/// A [`Transport`] that replays queued responses and records requests.
///
/// When the queue is empty the mock answers `404 Not Found`.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Canned>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response.
    pub fn push(&self, response: RawResponse) {
        self.lock_responses().push_back(Canned::Response(response));
    }

    /// Queues a `200 OK` response with `body`.
    pub fn push_json(&self, body: &str) {
        self.push(RawResponse::ok(body));
    }

    /// Queues a response with the given status and body.
    pub fn push_status(&self, status: StatusCode, body: &str) {
        self.push(RawResponse::new(status, body));
    }

    /// Queues a transport-level failure.
    pub fn push_failure(&self, message: &str) {
        self.lock_responses()
            .push_back(Canned::Failure(message.to_string()));
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock_requests().clone()
    }

    /// Number of requests sent so far.
    pub fn call_count(&self) -> usize {
        self.lock_requests().len()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.lock_requests().last().cloned()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Canned>> {
        self.responses.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_requests(&self) -> std::sync::MutexGuard<'_, Vec<ApiRequest>> {
        self.requests.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        self.lock_requests().push(request);

        match self.lock_responses().pop_front() {
            Some(Canned::Response(response)) => Ok(response),
            Some(Canned::Failure(message)) => Err(ApiError::Transport(message)),
            None => Ok(RawResponse::new(StatusCode::NOT_FOUND, r#"{"error": "Not Found"}"#)),
        }
    }
}
