//
//  github2
//  cli/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Repository Commands
//!
//! Projects are given as `owner/name`.
//!
//! ```bash
//! gh2 repo show defunkt/dotjs
//! gh2 repo list mojombo --page 2
//! gh2 repo search "django tagging"
//! gh2 repo create dotfiles --description "my config" --private
//! gh2 repo delete defunkt/dotfiles --confirm
//! gh2 repo languages mojombo/grit
//! gh2 repo key list dotjs --owner defunkt
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use super::{Cancelled, GlobalOptions};

/// Work with repositories.
#[derive(Args, Debug)]
pub struct RepoCommand {
    /// The repository subcommand to run
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

/// Repository subcommands.
#[derive(Subcommand, Debug)]
pub enum RepoSubcommand {
    /// Search repositories (at most 100 results)
    Search(QueryArgs),

    /// Show a repository
    #[command(visible_alias = "view")]
    Show(ProjectArgs),

    /// List a user's repositories; defaults to your own
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// List repositories you can push to but do not own
    Pushable,

    /// Watch a repository
    Watch(ProjectArgs),

    /// Stop watching a repository
    Unwatch(ProjectArgs),

    /// Fork a repository into your account
    Fork(ProjectArgs),

    /// Create a repository
    Create(CreateArgs),

    /// Delete a repository
    Delete(DeleteArgs),

    /// Make a repository private
    SetPrivate(ProjectArgs),

    /// Make a repository public
    SetPublic(ProjectArgs),

    /// List collaborators
    Collaborators(ProjectArgs),

    /// Add a collaborator
    AddCollaborator(CollaboratorArgs),

    /// Remove a collaborator
    RemoveCollaborator(CollaboratorArgs),

    /// Show the fork network
    Network(ProjectArgs),

    /// Show languages and their size in bytes
    Languages(ProjectArgs),

    /// List tags
    Tags(ProjectArgs),

    /// List branches
    Branches(ProjectArgs),

    /// List watchers
    Watchers(ProjectArgs),

    /// List repositories a user is watching; defaults to the configured user
    Watching(WatchingArgs),

    /// List contributors
    Contributors(ProjectArgs),

    /// Manage deploy keys
    Key(KeyCommand),
}

/// A search query.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Search terms
    pub query: String,
}

/// A single project.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Project as owner/name
    pub project: String,
}

/// Arguments for `repo list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Login whose repositories to list
    pub login: Option<String>,

    /// Result page
    #[arg(long)]
    pub page: Option<u32>,
}

/// Arguments for `repo create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Repository name
    pub name: String,

    /// Description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Homepage URL
    #[arg(long)]
    pub homepage: Option<String>,

    /// Create a private repository
    #[arg(long)]
    pub private: bool,
}

/// Arguments for `repo delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Project as owner/name
    pub project: String,

    /// Confirm deletion
    #[arg(long)]
    pub confirm: bool,
}

/// Arguments for collaborator changes.
#[derive(Args, Debug)]
pub struct CollaboratorArgs {
    /// Project as owner/name
    pub project: String,

    /// Collaborator login
    pub login: String,
}

/// Arguments for `repo watching`.
#[derive(Args, Debug)]
pub struct WatchingArgs {
    /// Login whose watched repositories to list
    pub login: Option<String>,

    /// Result page
    #[arg(long)]
    pub page: Option<u32>,
}

/// Manage deploy keys.
#[derive(Args, Debug)]
pub struct KeyCommand {
    /// The key subcommand to run
    #[command(subcommand)]
    pub command: KeySubcommand,
}

/// Deploy key subcommands.
#[derive(Subcommand, Debug)]
pub enum KeySubcommand {
    /// List deploy keys
    #[command(visible_alias = "ls")]
    List(KeyTarget),

    /// Show a deploy key
    Get(KeyIdArgs),

    /// Add a deploy key
    Create(KeyDataArgs),

    /// Replace a deploy key
    Update(KeyUpdateArgs),

    /// Remove a deploy key
    Delete(KeyIdArgs),
}

/// The repository a key belongs to.
#[derive(Args, Debug)]
pub struct KeyTarget {
    /// Repository name, without the owner
    pub project: String,

    /// Repository owner; defaults to the configured user
    #[arg(long)]
    pub owner: Option<String>,
}

/// A key id within a repository.
#[derive(Args, Debug)]
pub struct KeyIdArgs {
    /// The repository
    #[command(flatten)]
    pub target: KeyTarget,

    /// Key id
    pub id: u64,
}

/// Title and key material for a new key.
#[derive(Args, Debug)]
pub struct KeyDataArgs {
    /// The repository
    #[command(flatten)]
    pub target: KeyTarget,

    /// Key title
    #[arg(long)]
    pub title: String,

    /// Public key material, e.g. "ssh-ed25519 AAAA..."
    #[arg(long)]
    pub key: String,
}

/// Arguments for `repo key update`.
#[derive(Args, Debug)]
pub struct KeyUpdateArgs {
    /// The new title and key
    #[command(flatten)]
    pub data: KeyDataArgs,

    /// Key id
    #[arg(long)]
    pub id: u64,
}

impl RepoCommand {
    /// Runs the repository command.
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RepoSubcommand::Search(args) => self.search(args, global).await,
            RepoSubcommand::Show(args) => self.show(args, global).await,
            RepoSubcommand::List(args) => self.list(args, global).await,
            RepoSubcommand::Pushable => self.pushable(global).await,
            RepoSubcommand::Watch(args) => self.watch(args, global, true).await,
            RepoSubcommand::Unwatch(args) => self.watch(args, global, false).await,
            RepoSubcommand::Fork(args) => self.fork(args, global).await,
            RepoSubcommand::Create(args) => self.create(args, global).await,
            RepoSubcommand::Delete(args) => self.delete(args, global).await,
            RepoSubcommand::SetPrivate(args) => self.set_visibility(args, global, true).await,
            RepoSubcommand::SetPublic(args) => self.set_visibility(args, global, false).await,
            RepoSubcommand::Collaborators(args) => self.collaborators(args, global).await,
            RepoSubcommand::AddCollaborator(args) => self.change_collaborator(args, global, true).await,
            RepoSubcommand::RemoveCollaborator(args) => {
                self.change_collaborator(args, global, false).await
            }
            RepoSubcommand::Network(args) => self.network(args, global).await,
            RepoSubcommand::Languages(args) => self.languages(args, global).await,
            RepoSubcommand::Tags(args) => self.refs(args, global, true).await,
            RepoSubcommand::Branches(args) => self.refs(args, global, false).await,
            RepoSubcommand::Watchers(args) => self.watchers(args, global).await,
            RepoSubcommand::Watching(args) => self.watching(args, global).await,
            RepoSubcommand::Contributors(args) => self.contributors(args, global).await,
            RepoSubcommand::Key(cmd) => cmd.run(global).await,
        }
    }

    async fn search(&self, args: &QueryArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repos = client.repos().search(&args.query).await?;
        global.output().write_list(&repos, "No repositories found.")
    }

    async fn show(&self, args: &ProjectArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repo = client.repos().show(&args.project).await?;
        global.output().write(&repo)
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repos = client.repos().list(args.login.as_deref(), args.page).await?;
        global.output().write_list(&repos, "No repositories found.")
    }

    async fn pushable(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repos = client.repos().pushable().await?;
        global.output().write_list(&repos, "No pushable repositories.")
    }

    async fn watch(&self, args: &ProjectArgs, global: &GlobalOptions, watch: bool) -> Result<()> {
        let client = global.client()?;
        let repos = client.repos();
        let repo = if watch {
            repos.watch(&args.project).await?
        } else {
            repos.unwatch(&args.project).await?
        };

        let output = global.output();
        if global.json {
            output.write(&repo)
        } else {
            let verb = if watch { "Watching" } else { "Stopped watching" };
            output.write_success(&format!("{} {}", verb, args.project));
            Ok(())
        }
    }

    async fn fork(&self, args: &ProjectArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repo = client.repos().fork(&args.project).await?;

        let output = global.output();
        if global.json {
            output.write(&repo)
        } else {
            output.write_success(&format!("Forked {} to {}", args.project, repo));
            Ok(())
        }
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repo = client
            .repos()
            .create(
                &args.name,
                args.description.as_deref(),
                args.homepage.as_deref(),
                !args.private,
            )
            .await?;

        let output = global.output();
        if global.json {
            output.write(&repo)
        } else {
            output.write_success(&format!("Created repository {}", repo));
            Ok(())
        }
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        if !args.confirm {
            return Err(Cancelled(format!(
                "Deleting {} cannot be undone. Re-run with --confirm to proceed.",
                args.project
            ))
            .into());
        }

        let client = global.client()?;
        client.repos().delete(&args.project).await?;
        global
            .output()
            .write_success(&format!("Deleted repository {}", args.project));
        Ok(())
    }

    async fn set_visibility(&self, args: &ProjectArgs, global: &GlobalOptions, private: bool) -> Result<()> {
        let client = global.client()?;
        let repos = client.repos();
        let result = if private {
            repos.set_private(&args.project).await?
        } else {
            repos.set_public(&args.project).await?
        };

        if global.json {
            global.output().write_value(&result)
        } else {
            let visibility = if private { "private" } else { "public" };
            global
                .output()
                .write_success(&format!("{} is now {}", args.project, visibility));
            Ok(())
        }
    }

    async fn collaborators(&self, args: &ProjectArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let logins = client.repos().list_collaborators(&args.project).await?;
        global.output().write_names(&logins, "No collaborators.")
    }

    async fn change_collaborator(&self, args: &CollaboratorArgs, global: &GlobalOptions, add: bool) -> Result<()> {
        let client = global.client()?;
        let repos = client.repos();
        let result = if add {
            repos.add_collaborator(&args.project, &args.login).await?
        } else {
            repos.remove_collaborator(&args.project, &args.login).await?
        };

        if global.json {
            global.output().write_value(&result)
        } else {
            let message = if add {
                format!("Added {} to {}", args.login, args.project)
            } else {
                format!("Removed {} from {}", args.login, args.project)
            };
            global.output().write_success(&message);
            Ok(())
        }
    }

    async fn network(&self, args: &ProjectArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repos = client.repos().network(&args.project).await?;
        global.output().write_list(&repos, "No forks.")
    }

    async fn languages(&self, args: &ProjectArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let languages = client.repos().languages(&args.project).await?;
        global
            .output()
            .write_map(&languages, ["Language", "Bytes"], "No languages detected.")
    }

    async fn refs(&self, args: &ProjectArgs, global: &GlobalOptions, tags: bool) -> Result<()> {
        let client = global.client()?;
        let repos = client.repos();
        let output = global.output();

        if tags {
            let refs = repos.tags(&args.project).await?;
            output.write_map(&refs, ["Tag", "Commit"], "No tags.")
        } else {
            let refs = repos.branches(&args.project).await?;
            output.write_map(&refs, ["Branch", "Commit"], "No branches.")
        }
    }

    async fn watchers(&self, args: &ProjectArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let logins = client.repos().watchers(&args.project).await?;
        global.output().write_names(&logins, "No watchers.")
    }

    async fn watching(&self, args: &WatchingArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repos = client
            .repos()
            .watching(args.login.as_deref(), args.page)
            .await?;
        global.output().write_list(&repos, "Not watching any repositories.")
    }

    async fn contributors(&self, args: &ProjectArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let users = client.repos().list_contributors(&args.project).await?;
        global.output().write_list(&users, "No contributors.")
    }
}

impl KeyCommand {
    /// Runs the deploy key command.
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repos = client.repos();
        let output = global.output();

        let owner = |target: &KeyTarget| -> Result<String> {
            target
                .owner
                .clone()
                .or_else(|| client.username().map(str::to_string))
                .ok_or_else(|| anyhow::anyhow!("No repository owner. Use --owner or configure auth.username."))
        };

        match &self.command {
            KeySubcommand::List(target) => {
                let keys = repos.list_keys(&target.project, &owner(target)?).await?;
                output.write_list(&keys, "No deploy keys.")
            }
            KeySubcommand::Get(args) => {
                let key = repos
                    .get_key(&args.target.project, &owner(&args.target)?, args.id)
                    .await?;
                output.write(&key)
            }
            KeySubcommand::Create(args) => {
                let key = repos
                    .create_key(&args.target.project, &owner(&args.target)?, &args.title, &args.key)
                    .await?;
                if global.json {
                    output.write(&key)
                } else {
                    output.write_success(&format!(
                        "Added deploy key {} to {}",
                        style(args.title.as_str()).cyan(),
                        args.target.project
                    ));
                    Ok(())
                }
            }
            KeySubcommand::Update(args) => {
                let data = &args.data;
                let key = repos
                    .update_key(
                        &data.target.project,
                        &owner(&data.target)?,
                        args.id,
                        &data.title,
                        &data.key,
                    )
                    .await?;
                if global.json {
                    output.write(&key)
                } else {
                    output.write_success(&format!("Updated deploy key {}", args.id));
                    Ok(())
                }
            }
            KeySubcommand::Delete(args) => {
                repos
                    .delete_key(&args.target.project, &owner(&args.target)?, args.id)
                    .await?;
                output.write_success(&format!("Removed deploy key {}", args.id));
                Ok(())
            }
        }
    }
}
