//
//  github2
//  api/v2/organizations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organizations and the `orgs` command family.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::repositories::Repository;
use super::teams::{Team, TeamPermission};
use super::users::User;
use crate::api::client::{Call, GithubClient};
use crate::api::common::{commit_date, Filter, Result};
use crate::auth::AuthPolicy;

/// A GitHub organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    /// Organization id.
    pub id: Option<u64>,
    /// Full name.
    pub name: Option<String>,
    /// Blog URL.
    pub blog: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Gravatar id.
    pub gravatar_id: Option<String>,
    /// Login name.
    pub login: Option<String>,
    /// Contact e-mail address.
    pub email: Option<String>,
    /// Company name.
    pub company: Option<String>,
    /// Creation time.
    #[serde(with = "commit_date")]
    pub created_at: Option<DateTime<Utc>>,
    /// Number of users the organization follows.
    pub following_count: Option<u64>,
    /// Number of followers.
    pub followers_count: Option<u64>,
    /// Number of public gists.
    pub public_gist_count: Option<u64>,
    /// Number of public repositories.
    pub public_repo_count: Option<u64>,
    /// Your permission level within the organization.
    pub permission: Option<String>,
    /// Billing plan; only visible to members.
    pub plan: Option<Value>,
}

impl Organization {
    /// Returns `true` if the response came from an authenticated member view.
    pub fn is_authenticated(&self) -> bool {
        self.plan.is_some()
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.login.as_deref().unwrap_or("<unknown>"))
    }
}

const ORGANIZATION: Filter = Filter::root("organization");
const ORGANIZATIONS: Filter = Filter::root("organizations");
const REPOSITORY_LIST: Filter = Filter::root("repositories");
const PUBLIC_REPOSITORIES: Filter = Filter::key("repositories", "repositories");
const MEMBERS: Filter = Filter::key("users", "users");
const TEAMS: Filter = Filter::key("teams", "teams");
const TEAM: Filter = Filter::key("team", "team");

/// Commands for the `orgs` domain.
pub struct Organizations<'a> {
    client: &'a GithubClient,
}

impl<'a> Organizations<'a> {
    /// Domain segment for this command family.
    pub const DOMAIN: &'static str = "orgs";

    pub(crate) fn new(client: &'a GithubClient) -> Self {
        Self { client }
    }

    /// Domain segment used by default for this family.
    pub fn domain(&self) -> &'static str {
        Self::DOMAIN
    }

    fn call(&self, organization: &str, section: &str) -> Call {
        Call::new(Self::DOMAIN).segment(organization).segment(section)
    }

    /// Shows an organization.
    pub async fn show(&self, organization: &str) -> Result<Organization> {
        let call = self.call(organization, "");
        self.client
            .get_value(AuthPolicy::Public, "orgs.show", call, ORGANIZATION)
            .await
    }

    /// Organizations a user belongs to.
    ///
    /// With `None` (or your own login) and credentials configured, your own
    /// memberships are listed.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingArgument`](crate::api::ApiError::MissingArgument)
    /// if no user is given and none is configured.
    pub async fn list(&self, user: Option<&str>) -> Result<Vec<Organization>> {
        let scope = self.client.scope(user)?;
        let call = Call::new(scope.domain()).maybe(scope.login()).segment("orgs");
        self.client
            .get_values(AuthPolicy::EnhancedByAuth, "orgs.list", call, ORGANIZATIONS)
            .await
    }

    /// Repositories of an organization.
    ///
    /// With `None` (or an empty name), repositories of every organization the
    /// authenticated user belongs to are listed.
    pub async fn repositories(&self, organization: Option<&str>) -> Result<Vec<Repository>> {
        let call = self.call(organization.unwrap_or_default(), "repos");
        self.client
            .get_values(AuthPolicy::Public, "orgs.repositories", call, REPOSITORY_LIST)
            .await
    }

    /// Public repositories of an organization.
    pub async fn public_repositories(&self, organization: &str) -> Result<Vec<Repository>> {
        let call = self.call(organization, "public_repositories");
        self.client
            .get_values(
                AuthPolicy::Public,
                "orgs.public_repositories",
                call,
                PUBLIC_REPOSITORIES,
            )
            .await
    }

    /// Public members of an organization.
    pub async fn public_members(&self, organization: &str) -> Result<Vec<User>> {
        let call = self.call(organization, "public_members");
        self.client
            .get_values(AuthPolicy::Public, "orgs.public_members", call, MEMBERS)
            .await
    }

    /// Teams of an organization.
    pub async fn teams(&self, organization: &str) -> Result<Vec<Team>> {
        let call = self.call(organization, "teams");
        self.client
            .get_values(AuthPolicy::Public, "orgs.teams", call, TEAMS)
            .await
    }

    /// Creates a team, optionally granting it access to `projects`.
    pub async fn add_team(
        &self,
        organization: &str,
        name: &str,
        permission: TeamPermission,
        projects: &[&str],
    ) -> Result<Team> {
        let mut form = vec![
            ("team[name]".to_string(), name.to_string()),
            ("team[permission]".to_string(), permission.as_str().to_string()),
        ];
        form.extend(
            projects
                .iter()
                .map(|project| ("team[repo_names][]".to_string(), project.to_string())),
        );

        let call = self.call(organization, "teams").form(form);
        self.client
            .get_value(AuthPolicy::RequiresAuth, "orgs.add_team", call, TEAM)
            .await
    }
}
