//
//  github2
//  api/common/dates.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Timestamp formats used by the GitHub v2 API.
//!
//! The v2 API is not consistent about dates: repository timestamps use a
//! slash-separated format with a numeric offset, commit-style endpoints use
//! ISO 8601 with a colon offset, and user profiles use ISO 8601 in UTC.
//! Each date field declares which of these it expects; a value that does not
//! match is a decoding error. Serialization writes the same format back, so
//! a resource printed as JSON decodes into an equal value.
//!
//! | Format | Example |
//! |--------|---------|
//! | [`DateFormat::Github`] | `2008/02/09 05:29:43 -0800` |
//! | [`DateFormat::Commit`] | `2009-03-31T09:54:51-07:00` |
//! | [`DateFormat::User`] | `2007-10-19T22:24:19Z` |

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::de::{self, Deserialize, Deserializer};
use serde::Serializer;

/// A timestamp format used by one family of endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `%Y/%m/%d %H:%M:%S %z`, the default for repository data
    Github,
    /// `%Y-%m-%dT%H:%M:%S%:z`, used by commit and organization data
    Commit,
    /// `%Y-%m-%dT%H:%M:%SZ`, used by user profiles
    User,
}

impl DateFormat {
    /// The chrono format string for this format.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Github => "%Y/%m/%d %H:%M:%S %z",
            Self::Commit => "%Y-%m-%dT%H:%M:%S%:z",
            Self::User => "%Y-%m-%dT%H:%M:%SZ",
        }
    }

    /// Renders `value` in this format, in UTC.
    pub fn format(&self, value: &DateTime<Utc>) -> String {
        value.format(self.pattern()).to_string()
    }

    /// Short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Commit => "commit",
            Self::User => "user",
        }
    }

    /// Parses `value` into a UTC timestamp.
    ///
    /// # Errors
    ///
    /// Returns the chrono parse error when `value` does not match the format.
    pub fn parse(&self, value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match self {
            Self::Github | Self::Commit => {
                DateTime::parse_from_str(value, self.pattern()).map(|dt| dt.with_timezone(&Utc))
            }
            Self::User => NaiveDateTime::parse_from_str(value, self.pattern())
                .map(|naive| Utc.from_utc_datetime(&naive)),
        }
    }
}

fn deserialize_date<'de, D>(deserializer: D, format: DateFormat) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| {
        format.parse(&value).map_err(|e| {
            de::Error::custom(format!("invalid {} date `{}`: {}", format.name(), value, e))
        })
    })
    .transpose()
}

fn serialize_date<S>(value: &Option<DateTime<Utc>>, serializer: S, format: DateFormat) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(dt) => serializer.serialize_some(&format.format(dt)),
        None => serializer.serialize_none(),
    }
}

macro_rules! date_field {
    ($(#[$doc:meta])* $name:ident, $format:expr) => {
        $(#[$doc])*
        pub mod $name {
            use chrono::{DateTime, Utc};
            use serde::{Deserializer, Serializer};

            /// Reads the field in this format.
            pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
            where
                D: Deserializer<'de>,
            {
                super::deserialize_date(deserializer, $format)
            }

            /// Writes the field back in the same format.
            pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                super::serialize_date(value, serializer, $format)
            }
        }
    };
}

date_field!(
    /// `#[serde(with = "github_date")]` for [`DateFormat::Github`] fields.
    github_date,
    super::DateFormat::Github
);

date_field!(
    /// `#[serde(with = "commit_date")]` for [`DateFormat::Commit`] fields.
    commit_date,
    super::DateFormat::Commit
);

date_field!(
    /// `#[serde(with = "user_date")]` for [`DateFormat::User`] fields.
    user_date,
    super::DateFormat::User
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_github_format_applies_offset() {
        let dt = DateFormat::Github.parse("2008/02/09 05:29:43 -0800").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2008, 2, 9));
        assert_eq!(dt.hour(), 13);
    }

    #[test]
    fn test_commit_format() {
        let dt = DateFormat::Commit.parse("2009-03-31T09:54:51-07:00").unwrap();
        assert_eq!(dt.hour(), 16);
        assert_eq!(dt.minute(), 54);
    }

    #[test]
    fn test_user_format_is_utc() {
        let dt = DateFormat::User.parse("2007-10-19T22:24:19Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2007, 10, 19, 22, 24, 19).unwrap());
    }

    #[test]
    fn test_format_writes_parseable_text() {
        let dt = DateFormat::Github.parse("2008/02/09 05:29:43 -0800").unwrap();
        assert_eq!(DateFormat::Github.format(&dt), "2008/02/09 13:29:43 +0000");
        assert_eq!(DateFormat::Commit.format(&dt), "2008-02-09T13:29:43+00:00");
        assert_eq!(DateFormat::User.format(&dt), "2008-02-09T13:29:43Z");

        for format in [DateFormat::Github, DateFormat::Commit, DateFormat::User] {
            assert_eq!(format.parse(&format.format(&dt)).unwrap(), dt);
        }
    }

    #[test]
    fn test_formats_do_not_cross_parse() {
        assert!(DateFormat::User.parse("2008/02/09 05:29:43 -0800").is_err());
        assert!(DateFormat::Github.parse("2007-10-19T22:24:19Z").is_err());
    }
}
