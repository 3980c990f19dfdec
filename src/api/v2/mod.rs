//
//  github2
//  api/v2/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # GitHub API v2 Resources
//!
//! Resource types and the command objects that fetch them. Command objects
//! borrow the [`GithubClient`](super::GithubClient) and carry a fixed domain
//! segment; calls that address the current user pass their domain to the
//! dispatcher explicitly, so a command object never changes after creation.
//!
//! | Family | Domain | Resources |
//! |--------|--------|-----------|
//! | [`Users`] | `users` | [`User`] |
//! | [`Repositories`] | `repos` | [`Repository`], [`Key`] |
//! | [`Organizations`] | `orgs` | [`Organization`], [`Team`] |

/// Repository deploy keys.
pub mod keys;

/// Organizations and the `orgs` commands.
pub mod organizations;

/// Repositories and the `repos` commands.
pub mod repositories;

/// Teams within organizations.
pub mod teams;

/// User profiles and the `users` commands.
pub mod users;

pub use keys::Key;
pub use organizations::{Organization, Organizations};
pub use repositories::{Repositories, Repository};
pub use teams::{Team, TeamPermission};
pub use users::{User, Users};
