//
//  github2
//  api/v2/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repositories and the `repos` command family.
//!
//! Projects are addressed by their identifier, `owner/name`, which is joined
//! into the request path as-is and so spans two path segments:
//!
//! ```text
//! GET  repos/show/defunkt/dotjs
//! POST repos/collaborators/defunkt/dotjs/add/mojombo
//! ```
//!
//! Deploy key management lives in [`keys`](super::keys).

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::users::User;
use crate::api::client::{Call, GithubClient};
use crate::api::common::{echo_form, github_date, ApiError, Filter, Result};
use crate::auth::AuthPolicy;

/// A GitHub repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    /// Repository name, without the owner.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Number of forks.
    pub forks: Option<u64>,
    /// Number of watchers.
    pub watchers: Option<u64>,
    /// Whether the repository is private.
    pub private: Option<bool>,
    /// Canonical URL.
    pub url: Option<String>,
    /// Whether this is a fork of another repository.
    pub fork: Option<bool>,
    /// Owner, either a login string or an object with a `login` key.
    pub owner: Option<Value>,
    /// Project homepage.
    pub homepage: Option<String>,
    /// Default branch, if set.
    pub master_branch: Option<String>,
    /// Integration branch, if set.
    pub integration_branch: Option<String>,
    /// Number of open issues.
    pub open_issues: Option<u64>,
    /// Creation time.
    #[serde(with = "github_date")]
    pub created_at: Option<DateTime<Utc>>,
    /// Time of the last push.
    #[serde(with = "github_date")]
    pub pushed_at: Option<DateTime<Utc>>,
    /// Whether downloads are enabled.
    pub has_downloads: Option<bool>,
    /// Whether the wiki is enabled.
    pub has_wiki: Option<bool>,
    /// Whether the issue tracker is enabled.
    pub has_issues: Option<bool>,
    /// Primary language.
    pub language: Option<String>,
    /// Parent project of a fork.
    pub parent: Option<Value>,
}

impl Repository {
    /// Login of the owning account.
    pub fn owner_login(&self) -> Option<&str> {
        match self.owner.as_ref()? {
            Value::String(login) => Some(login.as_str()),
            owner => owner.get("login")?.as_str(),
        }
    }

    /// The project identifier, `<owner login>/<name>`.
    ///
    /// Neither part is escaped. Returns `None` when the owner or the name is
    /// missing.
    pub fn project(&self) -> Option<String> {
        let owner = self.owner_login()?;
        let name = self.name.as_deref()?;
        Some(format!("{}/{}", owner, name))
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.project() {
            Some(project) => f.write_str(&project),
            None => f.write_str(self.name.as_deref().unwrap_or("<unknown>")),
        }
    }
}

const REPOSITORY: Filter = Filter::key("repository", "repository");
const REPOSITORIES: Filter = Filter::key("repositories", "repositories");
const REPOSITORY_LIST: Filter = Filter::root("repositories");
const NETWORK: Filter = Filter::key("network", "network");
const COLLABORATORS: Filter = Filter::key("collaborators", "collaborators");
const CONTRIBUTORS: Filter = Filter::key("contributors", "contributors");
const LANGUAGES: Filter = Filter::key("languages", "languages");
const TAGS: Filter = Filter::key("tags", "tags");
const BRANCHES: Filter = Filter::key("branches", "branches");
const WATCHERS: Filter = Filter::key("watchers", "watchers");

/// Commands for the `repos` domain.
pub struct Repositories<'a> {
    pub(super) client: &'a GithubClient,
}

impl<'a> Repositories<'a> {
    /// Domain segment for this command family.
    pub const DOMAIN: &'static str = "repos";

    pub(crate) fn new(client: &'a GithubClient) -> Self {
        Self { client }
    }

    /// Domain segment used by default for this family.
    pub fn domain(&self) -> &'static str {
        Self::DOMAIN
    }

    fn call(&self, action: &str) -> Call {
        Call::new(Self::DOMAIN).segment(action)
    }

    fn show_call(&self, project: &str, section: &str) -> Call {
        self.call("show").segment(project).segment(section)
    }

    /// Searches repositories. The server returns at most 100 results.
    ///
    /// The query is form-encoded into a single path segment, so
    /// `"django tagging"` becomes `repos/search/django+tagging`.
    pub async fn search(&self, query: &str) -> Result<Vec<Repository>> {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        let call = self.call("search").segment(encoded);
        self.client
            .get_values(AuthPolicy::Public, "repos.search", call, REPOSITORIES)
            .await
    }

    /// Shows a repository.
    pub async fn show(&self, project: &str) -> Result<Repository> {
        let call = self.call("show").segment(project);
        self.client
            .get_value(AuthPolicy::Public, "repos.show", call, REPOSITORY)
            .await
    }

    /// Repositories you can push to that you do not own.
    pub async fn pushable(&self) -> Result<Vec<Repository>> {
        self.client
            .get_values(
                AuthPolicy::RequiresAuth,
                "repos.pushable",
                self.call("pushable"),
                REPOSITORIES,
            )
            .await
    }

    /// Lists a user's repositories.
    ///
    /// With `None` (or your own login) and credentials configured, your own
    /// repositories are listed, private ones included.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingArgument`] if no user is given and none is configured.
    pub async fn list(&self, user: Option<&str>, page: Option<u32>) -> Result<Vec<Repository>> {
        let scope = self.client.scope(user)?;
        let call = Call::new(scope.domain())
            .maybe(scope.login())
            .segment("repos")
            .page(page);
        self.client
            .get_values(AuthPolicy::EnhancedByAuth, "repos.list", call, REPOSITORY_LIST)
            .await
    }

    /// Watches a project.
    pub async fn watch(&self, project: &str) -> Result<Repository> {
        let call = self.call("watch").segment(project);
        self.client
            .get_value(AuthPolicy::RequiresAuth, "repos.watch", call, REPOSITORY)
            .await
    }

    /// Stops watching a project.
    pub async fn unwatch(&self, project: &str) -> Result<Repository> {
        let call = self.call("unwatch").segment(project);
        self.client
            .get_value(AuthPolicy::RequiresAuth, "repos.unwatch", call, REPOSITORY)
            .await
    }

    /// Forks a project into your account.
    pub async fn fork(&self, project: &str) -> Result<Repository> {
        let call = self.call("fork").segment(project);
        self.client
            .get_value(AuthPolicy::RequiresAuth, "repos.fork", call, REPOSITORY)
            .await
    }

    /// Creates a repository.
    ///
    /// `description` and `homepage` are left out of the form when `None`.
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        homepage: Option<&str>,
        public: bool,
    ) -> Result<Repository> {
        let mut form = vec![("name".to_string(), name.to_string())];
        if let Some(description) = description {
            form.push(("description".to_string(), description.to_string()));
        }
        if let Some(homepage) = homepage {
            form.push(("homepage".to_string(), homepage.to_string()));
        }
        form.push(("public".to_string(), if public { "1" } else { "0" }.to_string()));

        let call = self.call("create").form(form);
        self.client
            .get_value(AuthPolicy::RequiresAuth, "repos.create", call, REPOSITORY)
            .await
    }

    /// Deletes a repository.
    ///
    /// The first `POST` returns a confirmation object (a `delete_token`);
    /// its entries are sent back unchanged as the form of a second `POST`.
    pub async fn delete(&self, project: &str) -> Result<()> {
        let call = self.call("delete").segment(project).method(Method::POST);
        let confirmation = self
            .client
            .make_request(AuthPolicy::RequiresAuth, "repos.delete", call)
            .await?;

        tracing::debug!(project, "confirming repository deletion");
        let call = self.call("delete").segment(project).form(echo_form(&confirmation));
        self.client
            .make_request(AuthPolicy::RequiresAuth, "repos.delete", call)
            .await?;
        Ok(())
    }

    /// Makes a repository private.
    pub async fn set_private(&self, project: &str) -> Result<Value> {
        let call = self.call("set").segment("private").segment(project);
        self.client
            .make_request(AuthPolicy::RequiresAuth, "repos.set_private", call)
            .await
    }

    /// Makes a repository public.
    pub async fn set_public(&self, project: &str) -> Result<Value> {
        let call = self.call("set").segment("public").segment(project);
        self.client
            .make_request(AuthPolicy::RequiresAuth, "repos.set_public", call)
            .await
    }

    /// Logins of a project's collaborators.
    pub async fn list_collaborators(&self, project: &str) -> Result<Vec<String>> {
        let call = self.show_call(project, "collaborators");
        self.client
            .get_values(AuthPolicy::Public, "repos.list_collaborators", call, COLLABORATORS)
            .await
    }

    /// Adds a collaborator to a project.
    pub async fn add_collaborator(&self, project: &str, username: &str) -> Result<Value> {
        let call = self
            .call("collaborators")
            .segment(project)
            .segment("add")
            .segment(username)
            .method(Method::POST);
        self.client
            .make_request(AuthPolicy::RequiresAuth, "repos.add_collaborator", call)
            .await
    }

    /// Removes a collaborator from a project.
    pub async fn remove_collaborator(&self, project: &str, username: &str) -> Result<Value> {
        let call = self
            .call("collaborators")
            .segment(project)
            .segment("remove")
            .segment(username)
            .method(Method::POST);
        self.client
            .make_request(AuthPolicy::RequiresAuth, "repos.remove_collaborator", call)
            .await
    }

    /// The fork network of a project.
    pub async fn network(&self, project: &str) -> Result<Vec<Repository>> {
        let call = self.show_call(project, "network");
        self.client
            .get_values(AuthPolicy::Public, "repos.network", call, NETWORK)
            .await
    }

    /// Languages used in a project, with their size in bytes.
    pub async fn languages(&self, project: &str) -> Result<BTreeMap<String, u64>> {
        let call = self.show_call(project, "languages");
        self.client
            .get_value(AuthPolicy::Public, "repos.languages", call, LANGUAGES)
            .await
    }

    /// Tag names mapped to commit SHAs.
    pub async fn tags(&self, project: &str) -> Result<BTreeMap<String, String>> {
        let call = self.show_call(project, "tags");
        self.client
            .get_value(AuthPolicy::Public, "repos.tags", call, TAGS)
            .await
    }

    /// Branch names mapped to commit SHAs.
    pub async fn branches(&self, project: &str) -> Result<BTreeMap<String, String>> {
        let call = self.show_call(project, "branches");
        self.client
            .get_value(AuthPolicy::Public, "repos.branches", call, BRANCHES)
            .await
    }

    /// Logins of a project's watchers.
    pub async fn watchers(&self, project: &str) -> Result<Vec<String>> {
        let call = self.show_call(project, "watchers");
        self.client
            .get_values(AuthPolicy::Public, "repos.watchers", call, WATCHERS)
            .await
    }

    /// Repositories a user is watching, defaulting to the configured user.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingArgument`] if no user is given and none is configured.
    pub async fn watching(&self, user: Option<&str>, page: Option<u32>) -> Result<Vec<Repository>> {
        let user = user
            .filter(|u| !u.is_empty())
            .or(self.client.username())
            .ok_or(ApiError::MissingArgument("user"))?;
        let call = self.call("watched").segment(user).page(page);
        self.client
            .get_values(AuthPolicy::Public, "repos.watching", call, REPOSITORIES)
            .await
    }

    /// Contributors to a project.
    pub async fn list_contributors(&self, project: &str) -> Result<Vec<User>> {
        let call = self.show_call(project, "contributors");
        self.client
            .get_values(AuthPolicy::Public, "repos.list_contributors", call, CONTRIBUTORS)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::api::testing::MockTransport;
    use crate::auth::Credentials;

    fn setup(credentials: Credentials) -> (Arc<MockTransport>, GithubClient) {
        let mock = Arc::new(MockTransport::new());
        let client = GithubClient::with_transport(mock.clone(), credentials);
        (mock, client)
    }

    fn repository(owner: Value, name: &str) -> Repository {
        Repository {
            name: Some(name.to_string()),
            owner: Some(owner),
            ..Repository::default()
        }
    }

    #[test]
    fn test_project_identifier() {
        let repo = repository(json!({"login": "defunkt"}), "dotjs");
        assert_eq!(repo.project().as_deref(), Some("defunkt/dotjs"));
        assert_eq!(repo.to_string(), "defunkt/dotjs");
    }

    #[test]
    fn test_project_identifier_is_not_escaped() {
        for (owner, name) in [("a/b", "c"), ("x", "y/z"), ("", ""), ("with space", "ünï")] {
            let repo = repository(json!({"login": owner}), name);
            assert_eq!(repo.project().unwrap(), format!("{}/{}", owner, name));
        }
    }

    #[test]
    fn test_project_with_string_owner() {
        let repo = repository(json!("mojombo"), "grit");
        assert_eq!(repo.owner_login(), Some("mojombo"));
        assert_eq!(repo.project().as_deref(), Some("mojombo/grit"));
    }

    #[test]
    fn test_project_without_owner() {
        let repo = Repository {
            name: Some("grit".into()),
            ..Repository::default()
        };
        assert_eq!(repo.project(), None);
        assert_eq!(repo.to_string(), "grit");
    }

    fn grit_fork() -> Repository {
        serde_json::from_value(json!({
            "name": "grit",
            "description": "Grit is a Ruby library for extracting information from a git repository",
            "forks": 105,
            "watchers": 1012,
            "private": false,
            "url": "http://github.com/schacon/grit",
            "fork": true,
            "owner": "schacon",
            "homepage": "http://grit.rubyforge.org/",
            "master_branch": "master",
            "integration_branch": "integration",
            "open_issues": 4,
            "created_at": "2008/04/18 16:14:24 -0700",
            "pushed_at": "2011/03/01 09:00:00 +0000",
            "has_downloads": true,
            "has_wiki": false,
            "has_issues": true,
            "language": "Ruby",
            "parent": "mojombo/grit"
        }))
        .unwrap()
    }

    #[test]
    fn test_repository_decodes_every_field() {
        let repo = grit_fork();

        assert_eq!(repo.name.as_deref(), Some("grit"));
        assert_eq!(
            repo.description.as_deref(),
            Some("Grit is a Ruby library for extracting information from a git repository")
        );
        assert_eq!(repo.forks, Some(105));
        assert_eq!(repo.watchers, Some(1012));
        assert_eq!(repo.private, Some(false));
        assert_eq!(repo.url.as_deref(), Some("http://github.com/schacon/grit"));
        assert_eq!(repo.fork, Some(true));
        assert_eq!(repo.owner_login(), Some("schacon"));
        assert_eq!(repo.homepage.as_deref(), Some("http://grit.rubyforge.org/"));
        assert_eq!(repo.master_branch.as_deref(), Some("master"));
        assert_eq!(repo.integration_branch.as_deref(), Some("integration"));
        assert_eq!(repo.open_issues, Some(4));
        assert_eq!(repo.created_at.unwrap().to_rfc3339(), "2008-04-18T23:14:24+00:00");
        assert_eq!(repo.pushed_at.unwrap().to_rfc3339(), "2011-03-01T09:00:00+00:00");
        assert_eq!(repo.has_downloads, Some(true));
        assert_eq!(repo.has_wiki, Some(false));
        assert_eq!(repo.has_issues, Some(true));
        assert_eq!(repo.language.as_deref(), Some("Ruby"));
        assert_eq!(repo.parent, Some(json!("mojombo/grit")));
    }

    #[test]
    fn test_printed_repository_decodes_again() {
        let repo = grit_fork();
        let printed = serde_json::to_value(&repo).unwrap();

        assert_eq!(printed["created_at"], "2008/04/18 23:14:24 +0000");
        assert_eq!(serde_json::from_value::<Repository>(printed).unwrap(), repo);
    }

    #[tokio::test]
    async fn test_show_decodes_repository() {
        let (mock, client) = setup(Credentials::anonymous());
        mock.push_json(
            r#"{"repository": {
                "name": "dotjs",
                "owner": "defunkt",
                "watchers": 1412,
                "fork": false,
                "created_at": "2011/02/06 17:46:29 -0800",
                "pushed_at": "2011/03/01 09:00:00 +0000",
                "has_wiki": true
            }}"#,
        );

        let repo = client.repos().show("defunkt/dotjs").await.unwrap();

        assert_eq!(repo.project().as_deref(), Some("defunkt/dotjs"));
        assert_eq!(repo.watchers, Some(1412));
        assert_eq!(repo.fork, Some(false));
        assert_eq!(repo.has_wiki, Some(true));
        assert_eq!(repo.language, None);
        assert_eq!(repo.created_at.unwrap().to_rfc3339(), "2011-02-07T01:46:29+00:00");
        assert_eq!(mock.last_request().unwrap().path(), "/api/v2/json/repos/show/defunkt/dotjs");
    }

    #[tokio::test]
    async fn test_show_missing_filter_key() {
        let (mock, client) = setup(Credentials::anonymous());
        mock.push_json(r#"{"name": "dotjs"}"#);

        let err = client.repos().show("defunkt/dotjs").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::MissingFilterKey { ref resource, ref key }
                if resource == "repository" && key == "repository"
        ));
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let (mock, client) = setup(Credentials::anonymous());
        mock.push_json(r#"{"repositories": [{"name": "django-tagging"}]}"#);

        let repos = client.repos().search("django tagging").await.unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(mock.last_request().unwrap().path(), "/api/v2/json/repos/search/django+tagging");
    }

    #[tokio::test]
    async fn test_list_scope_paths() {
        let (mock, authed) = setup(Credentials::api_token("defunkt", "t"));
        mock.push_json("[]");
        mock.push_json("[]");
        authed.repos().list(None, Some(2)).await.unwrap();
        authed.repos().list(Some("mojombo"), None).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].path(), "/api/v2/json/user/repos");
        assert_eq!(requests[0].query_value("page"), Some("2"));
        assert_eq!(requests[1].path(), "/api/v2/json/users/mojombo/repos");
        assert_eq!(requests[1].query_value("page"), None);

        let (mock, named) = setup(Credentials::for_user("defunkt"));
        mock.push_json("[]");
        named.repos().list(None, None).await.unwrap();
        assert_eq!(mock.last_request().unwrap().path(), "/api/v2/json/users/defunkt/repos");
    }

    #[tokio::test]
    async fn test_list_leaves_domain_untouched_on_error() {
        let (mock, client) = setup(Credentials::access_token("abc"));
        mock.push_failure("timed out");

        let repos = client.repos();
        assert!(repos.list(None, None).await.is_err());
        assert_eq!(repos.domain(), "repos");

        mock.push_json(r#"{"repository": {"name": "dotjs", "owner": "defunkt"}}"#);
        repos.show("defunkt/dotjs").await.unwrap();
        assert_eq!(mock.last_request().unwrap().path(), "/api/v2/json/repos/show/defunkt/dotjs");
    }

    #[tokio::test]
    async fn test_requires_auth_operations_send_nothing() {
        let (mock, client) = setup(Credentials::anonymous());
        let repos = client.repos();

        assert!(matches!(repos.pushable().await, Err(ApiError::AuthRequired { .. })));
        assert!(matches!(repos.watch("a/b").await, Err(ApiError::AuthRequired { .. })));
        assert!(matches!(repos.unwatch("a/b").await, Err(ApiError::AuthRequired { .. })));
        assert!(matches!(repos.fork("a/b").await, Err(ApiError::AuthRequired { .. })));
        assert!(matches!(
            repos.create("b", None, None, true).await,
            Err(ApiError::AuthRequired { operation: "repos.create" })
        ));
        assert!(matches!(repos.delete("a/b").await, Err(ApiError::AuthRequired { .. })));
        assert!(matches!(repos.set_private("a/b").await, Err(ApiError::AuthRequired { .. })));
        assert!(matches!(repos.set_public("a/b").await, Err(ApiError::AuthRequired { .. })));
        assert!(matches!(
            repos.add_collaborator("a/b", "c").await,
            Err(ApiError::AuthRequired { .. })
        ));
        assert!(matches!(
            repos.remove_collaborator("a/b", "c").await,
            Err(ApiError::AuthRequired { .. })
        ));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_form() {
        let (mock, client) = setup(Credentials::access_token("abc"));
        mock.push_json(r#"{"repository": {"name": "dotfiles", "owner": "defunkt", "private": true}}"#);

        let repo = client
            .repos()
            .create("dotfiles", Some("my config"), None, false)
            .await
            .unwrap();

        assert_eq!(repo.private, Some(true));
        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path(), "/api/v2/json/repos/create");
        assert_eq!(request.form_value("name"), Some("dotfiles"));
        assert_eq!(request.form_value("description"), Some("my config"));
        assert_eq!(request.form_value("homepage"), None);
        assert_eq!(request.form_value("public"), Some("0"));
    }

    #[tokio::test]
    async fn test_delete_echoes_confirmation() {
        let (mock, client) = setup(Credentials::access_token("abc"));
        mock.push_json(r#"{"delete_token": "uatzvzx2k1"}"#);
        mock.push_json(r#"{"status": "deleted"}"#);

        client.repos().delete("defunkt/dotfiles").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        for request in &requests {
            assert_eq!(request.method, Method::POST);
            assert_eq!(request.path(), "/api/v2/json/repos/delete/defunkt/dotfiles");
        }
        assert_eq!(requests[0].form, None);
        assert_eq!(requests[1].form_value("delete_token"), Some("uatzvzx2k1"));
    }

    #[tokio::test]
    async fn test_delete_stops_after_failed_first_step() {
        let (mock, client) = setup(Credentials::access_token("abc"));
        mock.push_status(reqwest::StatusCode::FORBIDDEN, r#"{"error": "not yours"}"#);

        let err = client.repos().delete("mojombo/grit").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { ref message, .. } if message == "not yours"));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_collaborator_paths() {
        let (mock, client) = setup(Credentials::access_token("abc"));
        mock.push_json(r#"{"collaborators": ["defunkt", "mojombo"]}"#);
        mock.push_json(r#"{"collaborators": ["defunkt", "mojombo", "pjhyett"]}"#);

        let repos = client.repos();
        assert_eq!(repos.list_collaborators("defunkt/dotjs").await.unwrap(), vec!["defunkt", "mojombo"]);
        repos.add_collaborator("defunkt/dotjs", "pjhyett").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].path(), "/api/v2/json/repos/show/defunkt/dotjs/collaborators");
        assert_eq!(requests[1].path(), "/api/v2/json/repos/collaborators/defunkt/dotjs/add/pjhyett");
        assert_eq!(requests[1].method, Method::POST);
    }

    #[tokio::test]
    async fn test_project_sections() {
        let (mock, client) = setup(Credentials::anonymous());
        mock.push_json(r#"{"languages": {"Ruby": 75040, "JavaScript": 1200}}"#);
        mock.push_json(r#"{"tags": {"v1.0": "c5d6e7"}}"#);
        mock.push_json(r#"{"branches": {"master": "a1b2c3"}}"#);
        mock.push_json(r#"{"watchers": ["defunkt"]}"#);
        mock.push_json(r#"{"network": [{"name": "grit", "owner": "mojombo"}]}"#);
        mock.push_json(r#"{"contributors": [{"login": "mojombo", "contributions": 412}]}"#);

        let repos = client.repos();
        let languages = repos.languages("mojombo/grit").await.unwrap();
        assert_eq!(languages.get("Ruby"), Some(&75040));
        assert_eq!(repos.tags("mojombo/grit").await.unwrap()["v1.0"], "c5d6e7");
        assert_eq!(repos.branches("mojombo/grit").await.unwrap()["master"], "a1b2c3");
        assert_eq!(repos.watchers("mojombo/grit").await.unwrap(), vec!["defunkt"]);
        assert_eq!(repos.network("mojombo/grit").await.unwrap()[0].to_string(), "mojombo/grit");
        let contributors = repos.list_contributors("mojombo/grit").await.unwrap();
        assert_eq!(contributors[0].login.as_deref(), Some("mojombo"));

        let paths: Vec<String> = mock.requests().iter().map(|r| r.path().to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "/api/v2/json/repos/show/mojombo/grit/languages",
                "/api/v2/json/repos/show/mojombo/grit/tags",
                "/api/v2/json/repos/show/mojombo/grit/branches",
                "/api/v2/json/repos/show/mojombo/grit/watchers",
                "/api/v2/json/repos/show/mojombo/grit/network",
                "/api/v2/json/repos/show/mojombo/grit/contributors",
            ]
        );
    }

    #[tokio::test]
    async fn test_watching_defaults_to_configured_user() {
        let (mock, client) = setup(Credentials::for_user("defunkt"));
        mock.push_json(r#"{"repositories": []}"#);

        client.repos().watching(None, Some(3)).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.path(), "/api/v2/json/repos/watched/defunkt");
        assert_eq!(request.query_value("page"), Some("3"));
    }

    #[tokio::test]
    async fn test_watching_without_user() {
        let (mock, client) = setup(Credentials::anonymous());
        let err = client.repos().watching(None, None).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingArgument("user")));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_set_visibility_paths() {
        let (mock, client) = setup(Credentials::access_token("abc"));
        mock.push_json("{}");
        mock.push_json("{}");

        client.repos().set_private("defunkt/dotjs").await.unwrap();
        client.repos().set_public("defunkt/dotjs").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].path(), "/api/v2/json/repos/set/private/defunkt/dotjs");
        assert_eq!(requests[1].path(), "/api/v2/json/repos/set/public/defunkt/dotjs");
    }
}
