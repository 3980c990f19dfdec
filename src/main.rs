//
//  github2
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use github2::api::ApiError;
use github2::cli::{Cancelled, Cli, Commands};
use github2::exit_codes;
use github2::output::OutputWriter;

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    let output = cli.global.output();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            report(&output, &e);
            std::process::exit(exit_code(&e));
        }
    }
}

/// Logs go to stderr so they never mix with `--json` output.
fn init_logging() {
    let filter = EnvFilter::try_from_env("GH2_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::User(cmd) => cmd.run(&cli.global).await,
        Commands::Repo(cmd) => cmd.run(&cli.global).await,
        Commands::Org(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("gh2 version {}", github2::VERSION);
            Ok(())
        }
    }
}

fn report(output: &OutputWriter, error: &anyhow::Error) {
    output.write_error(&format!("{error:#}"));

    let Some(api_error) = error.downcast_ref::<ApiError>() else {
        return;
    };
    if api_error.is_local() {
        tracing::debug!("failed before any request was sent");
    }
    if let ApiError::AuthRequired { .. } = api_error {
        eprintln!("Set GITHUB_USER and GITHUB_TOKEN, or run 'gh2 config set auth.access_token <token>'.");
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<Cancelled>().is_some() {
        return exit_codes::CANCELLED;
    }

    error
        .downcast_ref::<ApiError>()
        .map_or(exit_codes::ERROR, ApiError::exit_code)
}
