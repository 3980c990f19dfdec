//
//  github2
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module holds the credentials used to talk to the GitHub v2 API and
//! the policy that decides, per operation, whether those credentials are
//! needed before a request may be sent.
//!
//! ## Supported Authentication Methods
//!
//! - **OAuth access token**: sent as the `access_token` query parameter.
//! - **API token**: the legacy per-account token, sent together with the
//!   account login as `login` and `token` query parameters.
//!
//! An access token wins when both are configured. A username on its own does
//! not authenticate anything; it only fills in implicit user parameters.
//!
//! ## Example
//!
//! ```rust
//! use github2::auth::{AuthPolicy, Credentials};
//!
//! let credentials = Credentials::api_token("defunkt", "0123456789abcdef");
//! assert!(credentials.is_authenticated());
//! assert!(AuthPolicy::RequiresAuth.check(&credentials, "repos.fork").is_ok());
//! ```

use std::fmt;

use crate::api::common::{ApiError, Result};

/// Credentials for the GitHub v2 API.
///
/// # Notes
///
/// - `Debug` output never contains token values.
/// - Empty strings are treated as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// The GitHub login of the account the tokens belong to.
    pub username: Option<String>,
    /// OAuth access token.
    pub access_token: Option<String>,
    /// Legacy API token, used together with `username`.
    pub api_token: Option<String>,
}

impl Credentials {
    /// No credentials at all.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Credentials carrying only a username, used to fill in implicit users.
    pub fn for_user(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    /// OAuth access token credentials.
    pub fn access_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Login plus legacy API token.
    pub fn api_token(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            api_token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Sets the username, keeping any tokens.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// The configured login, if any.
    pub fn login(&self) -> Option<&str> {
        non_empty(&self.username)
    }

    /// Returns `true` when an access token or an API token is configured.
    pub fn is_authenticated(&self) -> bool {
        non_empty(&self.access_token).is_some() || non_empty(&self.api_token).is_some()
    }

    /// Query parameters that authenticate a request.
    ///
    /// # Returns
    ///
    /// - `access_token=<t>` when an access token is configured
    /// - otherwise `login=<username>&token=<t>` when an API token is configured
    ///   (`login` is omitted if no username is known)
    /// - otherwise nothing
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        if let Some(token) = non_empty(&self.access_token) {
            return vec![("access_token".to_string(), token.to_string())];
        }

        let Some(token) = non_empty(&self.api_token) else {
            return Vec::new();
        };

        let mut pairs = Vec::with_capacity(2);
        if let Some(login) = self.login() {
            pairs.push(("login".to_string(), login.to_string()));
        }
        pairs.push(("token".to_string(), token.to_string()));
        pairs
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| non_empty(value).map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("access_token", &redact(&self.access_token))
            .field("api_token", &redact(&self.api_token))
            .finish()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// How an operation relates to authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Works the same with or without credentials.
    Public,
    /// Works without credentials; with them, implicit targets resolve to the
    /// authenticated user.
    EnhancedByAuth,
    /// Refused before dispatch when no credentials are configured.
    RequiresAuth,
}

impl AuthPolicy {
    /// Checks `credentials` against this policy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthRequired`] for [`AuthPolicy::RequiresAuth`]
    /// when `credentials` are not authenticated.
    pub fn check(&self, credentials: &Credentials, operation: &'static str) -> Result<()> {
        match self {
            Self::RequiresAuth if !credentials.is_authenticated() => {
                Err(ApiError::AuthRequired { operation })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_alone_is_not_authenticated() {
        assert!(!Credentials::for_user("defunkt").is_authenticated());
        assert!(!Credentials::anonymous().is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        assert!(!Credentials::access_token("").is_authenticated());
    }

    #[test]
    fn test_access_token_query() {
        let creds = Credentials::access_token("abc").with_username("defunkt");
        assert_eq!(
            creds.query_pairs(),
            vec![("access_token".to_string(), "abc".to_string())]
        );
    }

    #[test]
    fn test_api_token_query() {
        let creds = Credentials::api_token("defunkt", "xyz");
        assert_eq!(
            creds.query_pairs(),
            vec![
                ("login".to_string(), "defunkt".to_string()),
                ("token".to_string(), "xyz".to_string()),
            ]
        );
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let debug = format!("{:?}", Credentials::api_token("defunkt", "s3cr3t"));
        assert!(debug.contains("defunkt"));
        assert!(!debug.contains("s3cr3t"));
    }

    #[test]
    fn test_requires_auth_policy() {
        let err = AuthPolicy::RequiresAuth
            .check(&Credentials::anonymous(), "repos.create")
            .unwrap_err();
        assert!(matches!(err, ApiError::AuthRequired { operation: "repos.create" }));
        assert!(AuthPolicy::EnhancedByAuth.check(&Credentials::anonymous(), "users.show").is_ok());
        assert!(AuthPolicy::Public.check(&Credentials::anonymous(), "repos.show").is_ok());
    }
}
