//
//  github2
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Command-Line Interface
//!
//! Argument definitions for the `gh2` binary, built with clap's derive API.
//!
//! ## Command Structure
//!
//! ```text
//! gh2 <command> <subcommand> [options]
//!
//! gh2 user show defunkt
//! gh2 repo list --page 2
//! gh2 org teams github --json
//! ```
//!
//! ## Global Options
//!
//! | Option | Description |
//! |--------|-------------|
//! | `--json` | Print results as JSON |
//! | `--user` | GitHub login (overrides config and `GITHUB_USER`) |
//! | `--token` | Legacy API token |
//! | `--access-token` | OAuth access token |
//! | `--format` | Response format requested from the API (`json` or `yaml`) |
//! | `--base-url` | API root |
//!
//! Each command module exposes a `*Command` struct with an async `run`
//! method taking the [`GlobalOptions`].

mod config;
mod org;
mod repo;
mod user;

pub use config::ConfigCommand;
pub use org::OrgCommand;
pub use repo::RepoCommand;
pub use user::UserCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::{GithubClient, ResponseFormat};
use crate::config::Config;
use crate::output::OutputWriter;

/// Work with the GitHub v2 API from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "gh2",
    version,
    about = "Work with the GitHub v2 API from the command line",
    long_about = "gh2 is a client for GitHub's v2 REST API.\n\n\
                  It shows users, repositories and organizations, and manages\n\
                  follows, collaborators, deploy keys and teams.",
    propagate_version = true,
    after_help = "Use 'gh2 <command> --help' for more information about a command."
)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Options accepted by every command
    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// GitHub login
    #[arg(long, short = 'u', global = true)]
    pub user: Option<String>,

    /// Legacy API token, sent together with the login
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// OAuth access token
    #[arg(long, global = true)]
    pub access_token: Option<String>,

    /// Response format requested from the API
    #[arg(long, global = true, value_name = "json|yaml")]
    pub format: Option<ResponseFormat>,

    /// API root, e.g. https://github.com/api/v2
    #[arg(long, global = true, env = "GH2_BASE_URL")]
    pub base_url: Option<String>,
}

impl GlobalOptions {
    /// Loads the configuration and applies the command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(user) = &self.user {
            config.auth.username = Some(user.clone());
        }
        if let Some(token) = &self.token {
            config.auth.api_token = Some(token.clone());
        }
        if let Some(token) = &self.access_token {
            config.auth.access_token = Some(token.clone());
        }
        if let Some(format) = self.format {
            config.api.format = format;
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }
    }

    /// Builds an API client from configuration plus overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the HTTP
    /// client cannot be created.
    pub fn client(&self) -> Result<GithubClient> {
        let config = self.load_config()?;
        tracing::debug!(base_url = %config.api.base_url, format = %config.api.format, "building client");
        Ok(GithubClient::from_config(&config)?)
    }

    /// Output writer for the selected format.
    pub fn output(&self) -> OutputWriter {
        OutputWriter::from_json_flag(self.json)
    }
}

/// A destructive command was run without confirmation.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Cancelled(pub String);

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show users and manage follows
    #[command(visible_alias = "u")]
    User(UserCommand),

    /// Work with repositories
    #[command(visible_alias = "r")]
    Repo(RepoCommand),

    /// Work with organizations and teams
    Org(OrgCommand),

    /// Read and change configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gh2", "user", "show", "defunkt", "--json", "--access-token", "abc", "--format", "yaml",
        ])
        .unwrap();

        assert!(cli.global.json);
        assert_eq!(cli.global.access_token.as_deref(), Some("abc"));
        assert_eq!(cli.global.format, Some(ResponseFormat::Yaml));
    }

    #[test]
    fn test_overrides_win_over_config() {
        let global = GlobalOptions {
            user: Some("mojombo".into()),
            token: Some("t0ken".into()),
            base_url: Some("http://localhost:1234/api/v2/".into()),
            ..GlobalOptions::default()
        };
        let mut config = Config::default();
        config.auth.username = Some("defunkt".into());

        global.apply(&mut config);

        assert_eq!(config.auth.username.as_deref(), Some("mojombo"));
        assert!(config.credentials().is_authenticated());
        assert_eq!(config.api.base_url, "http://localhost:1234/api/v2");
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["gh2", "--format", "xml", "version"]).is_err());
    }
}
