//
//  github2
//  api/v2/keys.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository deploy keys.
//!
//! Keys are addressed as `repos/<user>/<project>/keys[/<id>]`, where
//! `project` is the bare repository name. Every key operation requires
//! credentials.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::repositories::Repositories;
use crate::api::client::Call;
use crate::api::common::{Filter, Result};
use crate::auth::AuthPolicy;

/// A deploy key attached to a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Key {
    /// Key id.
    pub id: Option<u64>,
    /// Title shown in the repository settings.
    pub title: Option<String>,
    /// Public key material.
    pub key: Option<String>,
    /// API URL of the key.
    pub url: Option<String>,
}

const KEY: Filter = Filter::root("key");
const KEYS: Filter = Filter::root("keys");

impl Repositories<'_> {
    fn keys_call(&self, user: &str, project: &str) -> Call {
        Call::new(Self::DOMAIN)
            .segment(user)
            .segment(project)
            .segment("keys")
    }

    fn key_form(title: &str, key: &str) -> Vec<(String, String)> {
        vec![
            ("title".to_string(), title.to_string()),
            ("key".to_string(), key.to_string()),
        ]
    }

    /// Lists the deploy keys of `user/project`.
    pub async fn list_keys(&self, project: &str, user: &str) -> Result<Vec<Key>> {
        let call = self.keys_call(user, project);
        self.client
            .get_values(AuthPolicy::RequiresAuth, "repos.list_keys", call, KEYS)
            .await
    }

    /// Fetches one deploy key.
    pub async fn get_key(&self, project: &str, user: &str, id: u64) -> Result<Key> {
        let call = self.keys_call(user, project).segment(id.to_string());
        self.client
            .get_value(AuthPolicy::RequiresAuth, "repos.get_key", call, KEY)
            .await
    }

    /// Adds a deploy key.
    pub async fn create_key(&self, project: &str, user: &str, title: &str, key: &str) -> Result<Key> {
        let call = self
            .keys_call(user, project)
            .form(Self::key_form(title, key))
            .method(Method::POST);
        self.client
            .get_value(AuthPolicy::RequiresAuth, "repos.create_key", call, KEY)
            .await
    }

    /// Replaces the title and key material of a deploy key.
    pub async fn update_key(
        &self,
        project: &str,
        user: &str,
        id: u64,
        title: &str,
        key: &str,
    ) -> Result<Key> {
        let call = self
            .keys_call(user, project)
            .segment(id.to_string())
            .form(Self::key_form(title, key));
        self.client
            .get_value(AuthPolicy::RequiresAuth, "repos.update_key", call, KEY)
            .await
    }

    /// Removes a deploy key.
    pub async fn delete_key(&self, project: &str, user: &str, id: u64) -> Result<()> {
        let call = self
            .keys_call(user, project)
            .segment(id.to_string())
            .method(Method::DELETE);
        self.client
            .make_request(AuthPolicy::RequiresAuth, "repos.delete_key", call)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::api::client::GithubClient;
    use crate::api::common::ApiError;
    use crate::api::testing::MockTransport;
    use crate::auth::Credentials;

    fn setup(credentials: Credentials) -> (Arc<MockTransport>, GithubClient) {
        let mock = Arc::new(MockTransport::new());
        let client = GithubClient::with_transport(mock.clone(), credentials);
        (mock, client)
    }

    #[test]
    fn test_key_decodes_every_field() {
        let key: Key = serde_json::from_value(json!({
            "id": 1053,
            "title": "deploy@ci",
            "key": "ssh-rsa AAAAB3NzaC1yc2EAAAABIwAAAQEA",
            "url": "https://github.com/defunkt/dotjs/keys/1053"
        }))
        .unwrap();

        assert_eq!(key.id, Some(1053));
        assert_eq!(key.title.as_deref(), Some("deploy@ci"));
        assert_eq!(key.key.as_deref(), Some("ssh-rsa AAAAB3NzaC1yc2EAAAABIwAAAQEA"));
        assert_eq!(key.url.as_deref(), Some("https://github.com/defunkt/dotjs/keys/1053"));
    }

    #[tokio::test]
    async fn test_key_lifecycle() {
        let (mock, client) = setup(Credentials::access_token("abc"));
        mock.push_json(r#"[{"id": 7, "title": "deploy", "key": "ssh-rsa AAAA"}]"#);
        mock.push_json(r#"{"id": 7, "title": "deploy", "key": "ssh-rsa AAAA"}"#);
        mock.push_json(r#"{"id": 8, "title": "ci", "key": "ssh-ed25519 BBBB"}"#);
        mock.push_json(r#"{"id": 8, "title": "ci-2", "key": "ssh-ed25519 CCCC"}"#);
        mock.push_json("");

        let repos = client.repos();
        let keys = repos.list_keys("dotjs", "defunkt").await.unwrap();
        assert_eq!(keys[0].id, Some(7));
        assert_eq!(repos.get_key("dotjs", "defunkt", 7).await.unwrap().title.as_deref(), Some("deploy"));
        let created = repos
            .create_key("dotjs", "defunkt", "ci", "ssh-ed25519 BBBB")
            .await
            .unwrap();
        assert_eq!(created.id, Some(8));
        let updated = repos
            .update_key("dotjs", "defunkt", 8, "ci-2", "ssh-ed25519 CCCC")
            .await
            .unwrap();
        assert_eq!(updated.title.as_deref(), Some("ci-2"));
        repos.delete_key("dotjs", "defunkt", 8).await.unwrap();

        let requests = mock.requests();
        let summary: Vec<(Method, &str)> = requests.iter().map(|r| (r.method.clone(), r.path())).collect();
        assert_eq!(
            summary,
            vec![
                (Method::GET, "/api/v2/json/repos/defunkt/dotjs/keys"),
                (Method::GET, "/api/v2/json/repos/defunkt/dotjs/keys/7"),
                (Method::POST, "/api/v2/json/repos/defunkt/dotjs/keys"),
                (Method::POST, "/api/v2/json/repos/defunkt/dotjs/keys/8"),
                (Method::DELETE, "/api/v2/json/repos/defunkt/dotjs/keys/8"),
            ]
        );
        assert_eq!(requests[2].form_value("title"), Some("ci"));
        assert_eq!(requests[3].form_value("key"), Some("ssh-ed25519 CCCC"));
    }

    #[tokio::test]
    async fn test_keys_require_auth() {
        let (mock, client) = setup(Credentials::for_user("defunkt"));
        let repos = client.repos();

        assert!(matches!(repos.list_keys("dotjs", "defunkt").await, Err(ApiError::AuthRequired { .. })));
        assert!(matches!(repos.get_key("dotjs", "defunkt", 1).await, Err(ApiError::AuthRequired { .. })));
        assert!(matches!(
            repos.create_key("dotjs", "defunkt", "t", "k").await,
            Err(ApiError::AuthRequired { .. })
        ));
        assert!(matches!(
            repos.update_key("dotjs", "defunkt", 1, "t", "k").await,
            Err(ApiError::AuthRequired { .. })
        ));
        assert!(matches!(
            repos.delete_key("dotjs", "defunkt", 1).await,
            Err(ApiError::AuthRequired { operation: "repos.delete_key" })
        ));
        assert_eq!(mock.call_count(), 0);
    }
}
