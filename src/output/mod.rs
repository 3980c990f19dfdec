//
//  github2
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! The `gh2` binary prints results either as human-readable tables and
//! detail views or as pretty-printed JSON (`--json`).
//!
//! - [`OutputWriter`]: picks the format and prints values, lists and maps
//! - [`TableOutput`]: detail view of a single value
//! - [`TableRow`]: one row of a list table
//! - [`TableBuilder`]: `comfy-table` wrapper (see [`table`](self))

mod resources;
mod table;

pub use table::*;

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tables and detail views
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Writes command results in the selected format.
///
/// # Example
///
/// ```rust,no_run
/// use github2::output::{OutputFormat, OutputWriter};
///
/// let output = OutputWriter::new(OutputFormat::Table);
/// output.write_success("Followed mojombo");
/// ```
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer; color follows the terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// JSON when `json` is set, tables otherwise.
    pub fn from_json_flag(json: bool) -> Self {
        Self::new(if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        })
    }

    /// The selected format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Prints a single value.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Prints a list as a table, or `empty` when there is nothing to show.
    pub fn write_list<T: Serialize + TableRow>(&self, values: &[T], empty: &str) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(values)?),
            OutputFormat::Table if values.is_empty() => self.write_info(empty),
            OutputFormat::Table => TableBuilder::new()
                .color(self.color)
                .headers(T::headers())
                .rows(values.iter().map(|v| v.row(self.color)))
                .print(),
        }
        Ok(())
    }

    /// Prints plain names (logins, collaborators, watchers) one per line.
    pub fn write_names(&self, names: &[String], empty: &str) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(names)?),
            OutputFormat::Table if names.is_empty() => self.write_info(empty),
            OutputFormat::Table => names.iter().for_each(|name| println!("{}", name)),
        }
        Ok(())
    }

    /// Prints a name to value mapping as a two-column table.
    pub fn write_map<V: Serialize + Display>(
        &self,
        map: &BTreeMap<String, V>,
        headers: [&str; 2],
        empty: &str,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(map)?),
            OutputFormat::Table if map.is_empty() => self.write_info(empty),
            OutputFormat::Table => TableBuilder::new()
                .color(self.color)
                .headers(headers)
                .rows(map.iter().map(|(k, v)| [k.clone(), v.to_string()]))
                .print(),
        }
        Ok(())
    }

    /// Prints an arbitrary JSON value.
    pub fn write_value(&self, value: &serde_json::Value) -> anyhow::Result<()> {
        match (self.format, value) {
            (OutputFormat::Table, serde_json::Value::Null) => {}
            _ => println!("{}", serde_json::to_string_pretty(value)?),
        }
        Ok(())
    }

    /// Prints an error to stderr.
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Prints an informational line.
    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Prints a success line, or `{"success": true, "message": ...}` as JSON.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"success": true, "message": msg}));
            }
            OutputFormat::Table if self.color => println!("{} {}", style("✓").green().bold(), msg),
            OutputFormat::Table => println!("✓ {}", msg),
        }
    }
}

/// Detail view of a single value.
pub trait TableOutput {
    /// Prints the value as a header and labelled fields.
    fn print_table(&self, color: bool);
}

/// A value that renders as one row of a list table.
pub trait TableRow {
    /// Column headers.
    fn headers() -> Vec<&'static str>;

    /// Cells for this value, in header order.
    fn row(&self, color: bool) -> Vec<String>;
}

/// Prints a bold header line followed by a rule.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints `key: value`, with the key dimmed when colored.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

/// Prints `key: value` only when `value` is present and non-empty.
pub fn print_optional(key: &str, value: Option<&str>, color: bool) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        print_field(key, value, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_from_flag() {
        assert_eq!(OutputWriter::from_json_flag(true).format(), OutputFormat::Json);
        assert_eq!(OutputWriter::from_json_flag(false).format(), OutputFormat::Table);
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
