//
//  github2
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output
//!
//! Table rendering on top of `comfy-table`, plus the small cell formatters
//! used by the resource views.
//!
//! ```rust,no_run
//! use github2::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["Repository", "Language"])
//!     .row(["defunkt/dotjs", "Ruby"])
//!     .print();
//! ```

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates a table with the standard preset and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent builder for tables.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    /// Creates a builder; color follows the terminal.
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    /// Enables or disables colored headers.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            self.table
                .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
        } else {
            self.table.set_header(headers);
        }
        self
    }

    /// Appends one row.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    /// Appends several rows.
    pub fn rows<I, R, S>(self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        rows.into_iter().fold(self, |builder, row| builder.row(row))
    }

    /// Prints the table to stdout.
    pub fn print(self) {
        println!("{}", self.table);
    }

    /// Returns the underlying table.
    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `Yes`/`No`, green and dimmed when colored.
pub fn format_bool(value: bool, color: bool) -> String {
    use console::style;

    match (value, color) {
        (true, true) => style("Yes").green().to_string(),
        (false, true) => style("No").dim().to_string(),
        (true, false) => "Yes".to_string(),
        (false, false) => "No".to_string(),
    }
}

/// Formats an optional timestamp as `YYYY-MM-DD HH:MM UTC`, or `-`.
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Formats an optional count, or `-`.
pub fn format_count(count: Option<u64>) -> String {
    count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("dotjs", 10), "dotjs");
        assert_eq!(truncate("a very long description", 10), "a very ...");
        assert_eq!(truncate("ünïcödé text", 6), "ünï...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2007, 10, 19, 22, 24, 19).unwrap();
        assert_eq!(format_date(Some(&date)), "2007-10-19 22:24 UTC");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_plain_formatters() {
        assert_eq!(format_bool(true, false), "Yes");
        assert_eq!(format_bool(false, false), "No");
        assert_eq!(format_count(Some(2593)), "2593");
        assert_eq!(format_count(None), "-");
    }

    #[test]
    fn test_builder_renders_rows() {
        let table = TableBuilder::new()
            .color(false)
            .headers(["Login", "Company"])
            .rows([["defunkt", "GitHub"], ["mojombo", "GitHub"]])
            .build();

        let rendered = table.to_string();
        assert!(rendered.contains("Login"));
        assert!(rendered.contains("defunkt"));
        assert!(rendered.contains("mojombo"));
    }
}
