//
//  github2
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # github2
//!
//! A client library and command-line tool for GitHub's v2 REST API.
//!
//! ## Overview
//!
//! Every request is built from a domain segment (`users`, `user`, `repos`,
//! `orgs`) and a list of path segments under `base_url/format/`. Responses
//! are JSON or YAML; the payload usually sits under a filter key such as
//! `user` or `repositories` and is decoded into typed resources.
//!
//! ## Module Structure
//!
//! - [`api`]: the client, its request dispatcher and the v2 endpoint families
//! - [`auth`]: credentials and how they are attached to requests
//! - [`config`]: configuration file and environment overrides
//! - [`output`]: table and JSON output for the `gh2` binary
//! - [`cli`]: command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use github2::api::GithubClient;
//! use github2::auth::Credentials;
//!
//! # async fn demo() -> Result<(), github2::api::ApiError> {
//! let client = GithubClient::new(Credentials::default())?;
//! let user = client.users().show(Some("defunkt")).await?;
//! println!("{} has {:?} followers", user, user.followers_count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! | Credentials | Sent as |
//! |-------------|---------|
//! | login + API token | `login` and `token` query parameters |
//! | OAuth access token | `access_token` query parameter |
//! | none | anonymous; operations that need auth fail before any request |

/// HTTP client and the v2 endpoint families.
///
/// The dispatcher builds URLs, attaches credentials, checks status codes
/// and decodes responses; the endpoint families (`users`, `repos`, `orgs`)
/// are thin, typed wrappers around it.
pub mod api;

/// Credentials and request authentication.
pub mod auth;

/// Command-line interface definitions.
pub mod cli;

/// Configuration file management.
///
/// Stored in platform-specific locations:
/// - Linux: `~/.config/gh2/config.toml`
/// - macOS: `~/Library/Application Support/gh2/config.toml`
/// - Windows: `%APPDATA%\gh2\config.toml`
pub mod config;

/// Table and JSON output.
pub mod output;

/// Re-export of the main CLI struct.
///
/// ```rust,no_run
/// use clap::Parser;
/// use github2::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Re-export of the API client.
pub use api::GithubClient;

/// Name of the binary, also used for the configuration directory.
pub const APP_NAME: &str = "gh2";

/// Crate version from Cargo.toml.
///
/// ```rust
/// use github2::VERSION;
///
/// println!("gh2 version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Operation-related issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments, including a required login that could
    /// not be resolved from the configuration.
    pub const USAGE: i32 = 2;

    /// Authentication required or rejected by GitHub (401/403).
    pub const AUTH_ERROR: i32 = 4;

    /// The requested user, repository or organization does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// A destructive operation was not confirmed.
    pub const CANCELLED: i32 = 16;

    /// The endpoint is no longer provided by GitHub.
    pub const DEPRECATED: i32 = 17;
}
