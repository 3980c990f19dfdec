//
//  github2
//  cli/org.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Organization Commands
//!
//! ```bash
//! gh2 org show github
//! gh2 org list defunkt
//! gh2 org teams github
//! gh2 org add-team github docs --permission push --repo github/docs
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;
use crate::api::v2::TeamPermission;

/// Work with organizations and teams.
#[derive(Args, Debug)]
pub struct OrgCommand {
    /// The organization subcommand to run
    #[command(subcommand)]
    pub command: OrgSubcommand,
}

/// Organization subcommands.
#[derive(Subcommand, Debug)]
pub enum OrgSubcommand {
    /// Show an organization
    #[command(visible_alias = "view")]
    Show(OrgArgs),

    /// List organizations a user belongs to; defaults to your own
    #[command(visible_alias = "ls")]
    List(OptionalLogin),

    /// List repositories across your organizations, or one organization's
    Repos(OptionalOrg),

    /// List an organization's public repositories
    PublicRepos(OrgArgs),

    /// List an organization's public members
    Members(OrgArgs),

    /// List an organization's teams
    Teams(OrgArgs),

    /// Create a team
    AddTeam(AddTeamArgs),
}

/// A single organization.
#[derive(Args, Debug)]
pub struct OrgArgs {
    /// Organization login
    pub org: String,
}

/// An optional user login.
#[derive(Args, Debug)]
pub struct OptionalLogin {
    /// User login
    pub login: Option<String>,
}

/// An optional organization.
#[derive(Args, Debug)]
pub struct OptionalOrg {
    /// Organization login
    pub org: Option<String>,
}

/// Arguments for `org add-team`.
#[derive(Args, Debug)]
pub struct AddTeamArgs {
    /// Organization login
    pub org: String,

    /// Team name
    pub name: String,

    /// Team permission: pull, push or admin
    #[arg(long, short = 'p', default_value = "pull")]
    pub permission: TeamPermission,

    /// Repository to give the team access to (repeatable)
    #[arg(long = "repo", short = 'r')]
    pub repos: Vec<String>,
}

impl OrgCommand {
    /// Runs the organization command.
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let orgs = client.orgs();
        let output = global.output();

        match &self.command {
            OrgSubcommand::Show(args) => {
                let org = orgs.show(&args.org).await?;
                output.write(&org)
            }
            OrgSubcommand::List(args) => {
                let list = orgs.list(args.login.as_deref()).await?;
                output.write_list(&list, "No organizations.")
            }
            OrgSubcommand::Repos(args) => {
                let repos = orgs.repositories(args.org.as_deref()).await?;
                output.write_list(&repos, "No repositories found.")
            }
            OrgSubcommand::PublicRepos(args) => {
                let repos = orgs.public_repositories(&args.org).await?;
                output.write_list(&repos, "No public repositories.")
            }
            OrgSubcommand::Members(args) => {
                let members = orgs.public_members(&args.org).await?;
                output.write_list(&members, "No public members.")
            }
            OrgSubcommand::Teams(args) => {
                let teams = orgs.teams(&args.org).await?;
                output.write_list(&teams, "No teams.")
            }
            OrgSubcommand::AddTeam(args) => {
                let repos: Vec<&str> = args.repos.iter().map(String::as_str).collect();
                let team = orgs
                    .add_team(&args.org, &args.name, args.permission, &repos)
                    .await?;
                if global.json {
                    output.write(&team)
                } else {
                    output.write_success(&format!(
                        "Created team {} in {} with {} access",
                        team, args.org, args.permission
                    ));
                    Ok(())
                }
            }
        }
    }
}
