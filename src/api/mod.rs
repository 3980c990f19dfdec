//
//  github2
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the client for GitHub's v2 REST API.
//!
//! ## Architecture
//!
//! - [`client`]: Request dispatcher with URL building, auth policy checks and decoding
//! - [`transport`]: The HTTP seam and its `reqwest` implementation
//! - [`v2`]: Resource types and the `users`, `repos` and `orgs` command families
//! - [`common`]: Shared types (errors, response filters, date formats)
//! - [`testing`]: A recording mock transport
//!
//! ## Usage
//!
//! ```rust,no_run
//! use github2::api::GithubClient;
//! use github2::auth::Credentials;
//!
//! # async fn example() -> Result<(), github2::api::ApiError> {
//! let client = GithubClient::new(Credentials::api_token("defunkt", "0123abcd"))?;
//!
//! for repo in client.repos().list(None, None).await? {
//!     println!("{}", repo);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]. Errors raised before a request is
//! sent (`AuthRequired`, `Deprecated`, `MissingArgument`) report
//! [`ApiError::is_local`]; everything else came back from the server or the
//! network. Nothing is retried.

/// Request dispatcher.
///
/// Provides the [`GithubClient`] struct which handles:
/// - URL composition from domain and path segments
/// - Auth policy checks and credential injection
/// - Status code handling and response decoding
pub mod client;

/// Types shared by every resource family.
///
/// Includes:
/// - [`ApiError`]: Error type for all operations
/// - [`Filter`](common::Filter): Response filter and decoding entry point
/// - [`ResponseFormat`]: JSON or YAML bodies
/// - [`DateFormat`](common::DateFormat): Per-field timestamp formats
pub mod common;

/// Mock transport for tests.
pub mod testing;

/// HTTP transport abstraction.
pub mod transport;

/// GitHub API v2 resources and commands.
pub mod v2;

pub use client::{Call, GithubClient, Scope, DEFAULT_BASE_URL};
pub use common::{ApiError, ResponseFormat};
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport};
