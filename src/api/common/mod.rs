//
//  github2
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the GitHub v2 bindings
//!
//! This module provides the types shared by every resource family: the
//! unified error type, the response filter used by the decoding layer, the
//! response body formats and the date handling for GitHub's timestamp quirks.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Filter`] - Names the resource being decoded and its wrapping key
//! - [`ResponseFormat`] - Body format requested from the API (JSON or YAML)
//! - [`DateFormat`] - Per-field timestamp formats (re-exported from `dates`)
//!
//! # Example
//!
//! ```rust
//! use github2::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::AuthRequired { operation }) => {
//!             println!("{} needs credentials", operation)
//!         }
//!         Err(ApiError::Deprecated { operation }) => println!("{} is gone", operation),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::exit_codes;

mod dates;
mod decoding;

pub use dates::*;
pub use decoding::*;

/// Result alias used throughout the API layer.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type for all GitHub API operations.
///
/// # Variants
///
/// | Variant | Raised | Network call made |
/// |---------|--------|-------------------|
/// | `AuthRequired` | Operation needs credentials, none configured | No |
/// | `Deprecated` | Endpoint removed upstream | No |
/// | `MissingArgument` | No user given and none configured | No |
/// | `MissingFilterKey` | Response lacks the wrapping key | Yes |
/// | `Decoding` | Response does not fit the resource schema | Yes |
/// | `Status` | Non-2xx HTTP status | Yes |
/// | `Network` | Connection, TLS or timeout failure | Yes |
/// | `Transport` | Failure reported by a non-reqwest transport | Yes |
/// | `InvalidUrl` | Base URL plus path did not form a URL | No |
///
/// # Notes
///
/// - Nothing is retried; transport failures surface to the caller as-is
/// - The `Network` variant converts from `reqwest::Error`
#[derive(Error, Debug)]
pub enum ApiError {
    /// Credentials are required but not configured.
    #[error("Authentication required for {operation}")]
    AuthRequired {
        /// The operation that was refused, e.g. `repos.fork`
        operation: &'static str,
    },

    /// The upstream API no longer provides this endpoint.
    #[error("{operation} is deprecated: GitHub no longer provides this endpoint")]
    Deprecated {
        /// The operation that was refused
        operation: &'static str,
    },

    /// A required argument was neither supplied nor derivable from the credentials.
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// The response has no top-level filter key wrapping the payload.
    #[error("Failed to decode {resource}: response has no `{key}` key")]
    MissingFilterKey {
        /// Resource being decoded
        resource: String,
        /// Expected wrapping key
        key: String,
    },

    /// The response payload could not be mapped onto the resource schema.
    #[error("Failed to decode {resource}: {message}")]
    Decoding {
        /// Resource being decoded
        resource: String,
        /// Details from the deserializer
        message: String,
    },

    /// The server answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status returned by GitHub
        status: StatusCode,
        /// Message extracted from the error body
        message: String,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A transport other than reqwest failed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Returns `true` when the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }

    /// Returns `true` when the server rejected the credentials (401/403).
    pub fn is_auth_rejected(&self) -> bool {
        matches!(
            self,
            Self::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }

    /// Process exit code for this error; see [`crate::exit_codes`].
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthRequired { .. } => exit_codes::AUTH_ERROR,
            Self::MissingArgument(_) => exit_codes::USAGE,
            Self::Deprecated { .. } => exit_codes::DEPRECATED,
            e if e.is_auth_rejected() => exit_codes::AUTH_ERROR,
            e if e.is_not_found() => exit_codes::NOT_FOUND,
            _ => exit_codes::ERROR,
        }
    }

    /// Returns `true` for errors raised before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::AuthRequired { .. }
                | Self::Deprecated { .. }
                | Self::MissingArgument(_)
                | Self::InvalidUrl(_)
        )
    }
}

/// Body format requested from the API.
///
/// The v2 API serves every endpoint as `json`, `yaml` or `xml`; the format is
/// the first path component after the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// `application/json` (default)
    #[default]
    Json,
    /// Legacy YAML responses
    Yaml,
}

impl ResponseFormat {
    /// Path component for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Parses a raw response body into a JSON value.
    ///
    /// An empty (or whitespace-only) body yields `Value::Null`.
    pub fn parse(&self, body: &str) -> Result<Value> {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        let parsed = match self {
            Self::Json => serde_json::from_str(body).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(body).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| ApiError::Decoding {
            resource: format!("{} response body", self.as_str()),
            message,
        })
    }
}

impl std::str::FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unsupported response format: {}", other)),
        }
    }
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
