//
//  github2
//  api/v2/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User profiles and the `users` command family.
//!
//! # Example
//!
//! ```rust,no_run
//! use github2::api::GithubClient;
//! use github2::auth::Credentials;
//!
//! # async fn example() -> Result<(), github2::api::ApiError> {
//! let client = GithubClient::new(Credentials::anonymous())?;
//! let user = client.users().show(Some("defunkt")).await?;
//! println!("{} works at {:?}", user, user.company);
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - User search was removed from the API; [`Users::search`] and
//!   [`Users::search_by_email`] always fail without sending anything.
//! - `show(None)` returns the authenticated user's own profile, which is the
//!   only profile that carries a `plan`.

use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::{Call, GithubClient};
use crate::api::common::{user_date, ApiError, Filter, Result};
use crate::auth::AuthPolicy;

/// A GitHub user profile.
///
/// Every field is optional: it is `None` whenever the server did not return
/// it. Private counters (`total_private_repo_count`, `disk_usage`, `plan`,
/// ...) are only returned for the authenticated user's own profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Numeric user id.
    pub id: Option<u64>,
    /// Login username.
    pub login: Option<String>,
    /// Full name.
    pub name: Option<String>,
    /// Company the user is associated with.
    pub company: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Public e-mail address.
    pub email: Option<String>,
    /// Blog URL.
    pub blog: Option<String>,
    /// Gravatar id.
    pub gravatar_id: Option<String>,
    /// Number of users this user follows.
    pub following_count: Option<u64>,
    /// Number of users following this user.
    pub followers_count: Option<u64>,
    /// Number of public gists.
    pub public_gist_count: Option<u64>,
    /// Number of public repositories.
    pub public_repo_count: Option<u64>,
    /// Number of private repositories.
    pub total_private_repo_count: Option<u64>,
    /// Number of collaborators.
    pub collaborators: Option<u64>,
    /// Disk space in use.
    pub disk_usage: Option<u64>,
    /// Number of privately owned repositories.
    pub owned_private_repo_count: Option<u64>,
    /// Number of private gists.
    pub private_gist_count: Option<u64>,
    /// Current plan; only present on your own profile.
    pub plan: Option<Value>,
    /// Registration date.
    #[serde(with = "user_date")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Returns `true` if this is the authenticated user's own profile.
    ///
    /// GitHub only includes `plan` when you view your own account.
    pub fn is_authenticated(&self) -> bool {
        self.plan.is_some()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.login.as_deref().unwrap_or("<unknown>"))
    }
}

const USER: Filter = Filter::root("user");
const LOGINS: Filter = Filter::optional_key("users", "users");

/// Commands for the `users` domain.
pub struct Users<'a> {
    client: &'a GithubClient,
}

impl<'a> Users<'a> {
    /// Domain segment for this command family.
    pub const DOMAIN: &'static str = "users";

    pub(crate) fn new(client: &'a GithubClient) -> Self {
        Self { client }
    }

    /// Domain segment used by default for this family.
    pub fn domain(&self) -> &'static str {
        Self::DOMAIN
    }

    /// Search for users. Always fails: GitHub removed this endpoint.
    ///
    /// # Errors
    ///
    /// Always [`ApiError::Deprecated`]; no request is sent.
    pub async fn search(&self, _query: &str) -> Result<Vec<User>> {
        tracing::warn!("users.search was removed from the GitHub API");
        Err(ApiError::Deprecated {
            operation: "users.search",
        })
    }

    /// Search for users by e-mail. Always fails: GitHub removed this endpoint.
    ///
    /// # Errors
    ///
    /// Always [`ApiError::Deprecated`]; no request is sent.
    pub async fn search_by_email(&self, _email: &str) -> Result<User> {
        tracing::warn!("users.search_by_email was removed from the GitHub API");
        Err(ApiError::Deprecated {
            operation: "users.search_by_email",
        })
    }

    /// Shows a user profile.
    ///
    /// With `None` (or an empty string, or your own login) and credentials
    /// configured, the authenticated user's own profile is returned.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingArgument`] if no user is given and none is configured.
    pub async fn show(&self, username: Option<&str>) -> Result<User> {
        let scope = self.client.scope(username)?;
        let call = Call::new(scope.domain()).maybe(scope.login());
        self.client
            .get_value(AuthPolicy::EnhancedByAuth, "users.show", call, USER)
            .await
    }

    /// Logins of a user's followers.
    ///
    /// Accepts both `{"users": [...]}` and a bare list of logins.
    pub async fn followers(&self, username: &str) -> Result<Vec<String>> {
        let call = Call::new(Self::DOMAIN).segment(username).segment("followers");
        self.client
            .get_values(AuthPolicy::Public, "users.followers", call, LOGINS)
            .await
    }

    /// Logins of the users a user follows.
    pub async fn following(&self, username: &str) -> Result<Vec<String>> {
        let call = Call::new(Self::DOMAIN).segment(username).segment("following");
        self.client
            .get_values(AuthPolicy::Public, "users.following", call, LOGINS)
            .await
    }

    /// Checks whether the authenticated user follows `other_user`.
    ///
    /// Uses the current-user domain: `user/following/<other_user>`.
    ///
    /// # Errors
    ///
    /// [`ApiError::AuthRequired`] without credentials; no request is sent.
    pub async fn is_following(&self, other_user: &str) -> Result<bool> {
        let call = Call::new("user").segment("following").segment(other_user);
        self.client
            .probe(AuthPolicy::RequiresAuth, "users.is_following", call)
            .await
    }

    /// Follows `other_user`.
    pub async fn follow(&self, other_user: &str) -> Result<()> {
        let call = Call::new(Self::DOMAIN)
            .segment("follow")
            .segment(other_user)
            .method(Method::POST);
        self.client
            .make_request(AuthPolicy::RequiresAuth, "users.follow", call)
            .await?;
        Ok(())
    }

    /// Stops following `other_user`.
    pub async fn unfollow(&self, other_user: &str) -> Result<()> {
        let call = Call::new(Self::DOMAIN)
            .segment("unfollow")
            .segment(other_user)
            .method(Method::POST);
        self.client
            .make_request(AuthPolicy::RequiresAuth, "users.unfollow", call)
            .await?;
        Ok(())
    }
}
