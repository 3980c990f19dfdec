//
//  github2
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Configuration commands
//!
//! Reads and writes the TOML configuration file. Keys are dotted paths
//! such as `api.format` or `auth.username`.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, KEYS};

use super::GlobalOptions;

/// Read and change configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(KeyArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset a configuration value
    Unset(KeyArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print tokens instead of masking them
    #[arg(long)]
    pub show_tokens: bool,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Unset(args) => self.unset(args, global),
            ConfigSubcommand::List(args) => self.list(args, global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    /// Only the file is edited; environment overrides must not be persisted.
    fn load_file() -> Result<Config> {
        Config::load_from(&Config::config_path()?)
    }

    fn check_key(key: &str) -> Result<()> {
        if !KEYS.contains(&key) {
            bail!("Unknown config key '{}'. Valid keys: {}", key, KEYS.join(", "));
        }
        Ok(())
    }

    fn get(&self, args: &KeyArgs, global: &GlobalOptions) -> Result<()> {
        Self::check_key(&args.key)?;
        let value = global.load_config()?.get(&args.key);

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Self::load_file()?;
        config.set(&args.key, args.value.clone())?;
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": args.value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                display_value(&args.key, &args.value, false)
            );
        }

        Ok(())
    }

    fn unset(&self, args: &KeyArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Self::load_file()?;
        match args.key.as_str() {
            "api.base_url" | "api.format" => {
                let defaults = Config::default();
                let value = defaults.get(&args.key).unwrap_or_default();
                config.set(&args.key, value)?;
            }
            key => config.set(key, String::new())?,
        }
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Unset {}", style("✓").green(), style(&args.key).cyan());
        }

        Ok(())
    }

    fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;

        if global.json {
            let values: serde_json::Map<String, serde_json::Value> = KEYS
                .iter()
                .map(|key| {
                    let value = config
                        .get(key)
                        .map(|v| display_value(key, &v, args.show_tokens).into());
                    (key.to_string(), value.unwrap_or(serde_json::Value::Null))
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&values)?);
            return Ok(());
        }

        println!();
        println!("{}", style("Configuration").bold());
        println!("{}", "-".repeat(50));
        for key in KEYS {
            match config.get(key) {
                Some(value) => println!(
                    "  {}: {}",
                    style(key).cyan(),
                    display_value(key, &value, args.show_tokens)
                ),
                None => println!("  {}: {}", style(key).cyan(), style("(not set)").dim()),
            }
        }
        println!();

        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.is_file(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }

        Ok(())
    }
}

/// Masks token values unless `reveal` is set.
fn display_value(key: &str, value: &str, reveal: bool) -> String {
    if reveal || !key.ends_with("_token") || value.is_empty() {
        value.to_string()
    } else {
        let shown: String = value.chars().take(4).collect();
        format!("{}****", shown)
    }
}
