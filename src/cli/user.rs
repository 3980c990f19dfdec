//
//  github2
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # User Commands
//!
//! ```bash
//! gh2 user show defunkt
//! gh2 user show                 # your own profile (needs credentials)
//! gh2 user followers defunkt
//! gh2 user follow mojombo
//! gh2 user is-following mojombo
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;

/// Show users and manage follows.
#[derive(Args, Debug)]
pub struct UserCommand {
    /// The user subcommand to run
    #[command(subcommand)]
    pub command: UserSubcommand,
}

/// User subcommands.
#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// Show a user profile; defaults to the configured user
    #[command(visible_alias = "view")]
    Show(ShowArgs),

    /// Search for users (no longer supported by GitHub)
    Search(SearchArgs),

    /// List a user's followers
    Followers(LoginArgs),

    /// List the users a user follows
    Following(LoginArgs),

    /// Check whether you follow a user
    IsFollowing(LoginArgs),

    /// Follow a user
    Follow(LoginArgs),

    /// Stop following a user
    Unfollow(LoginArgs),
}

/// Arguments for `user show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Login to show
    pub login: Option<String>,
}

/// Arguments for `user search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Name or e-mail to search for
    pub query: String,

    /// Treat the query as an e-mail address
    #[arg(long)]
    pub email: bool,
}

/// A single login.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// GitHub login
    pub login: String,
}

impl UserCommand {
    /// Runs the user command.
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            UserSubcommand::Show(args) => self.show(args, global).await,
            UserSubcommand::Search(args) => self.search(args, global).await,
            UserSubcommand::Followers(args) => self.followers(args, global).await,
            UserSubcommand::Following(args) => self.following(args, global).await,
            UserSubcommand::IsFollowing(args) => self.is_following(args, global).await,
            UserSubcommand::Follow(args) => self.follow(args, global).await,
            UserSubcommand::Unfollow(args) => self.unfollow(args, global).await,
        }
    }

    async fn show(&self, args: &ShowArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let user = client.users().show(args.login.as_deref()).await?;
        global.output().write(&user)
    }

    async fn search(&self, args: &SearchArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let output = global.output();

        if args.email {
            let user = client.users().search_by_email(&args.query).await?;
            output.write(&user)
        } else {
            let users = client.users().search(&args.query).await?;
            output.write_list(&users, "No users found.")
        }
    }

    async fn followers(&self, args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let logins = client.users().followers(&args.login).await?;
        global
            .output()
            .write_names(&logins, &format!("{} has no followers.", args.login))
    }

    async fn following(&self, args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let logins = client.users().following(&args.login).await?;
        global
            .output()
            .write_names(&logins, &format!("{} is not following anyone.", args.login))
    }

    async fn is_following(&self, args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let following = client.users().is_following(&args.login).await?;

        if global.json {
            let result = serde_json::json!({
                "login": args.login,
                "following": following,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if following {
            println!("You are following {}", args.login);
        } else {
            println!("You are not following {}", args.login);
        }
        Ok(())
    }

    async fn follow(&self, args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        client.users().follow(&args.login).await?;
        global.output().write_success(&format!("Followed {}", args.login));
        Ok(())
    }

    async fn unfollow(&self, args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        client.users().unfollow(&args.login).await?;
        global.output().write_success(&format!("Unfollowed {}", args.login));
        Ok(())
    }
}
