//
//  github2
//  api/v2/teams.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization teams.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A team within an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    /// Team id.
    pub id: Option<u64>,
    /// Team name.
    pub name: Option<String>,
    /// Access level granted to the team's repositories.
    pub permission: Option<String>,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or("<unknown>"))
    }
}

/// Access level for a new team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamPermission {
    /// Read-only access
    #[default]
    Pull,
    /// Read and write access
    Push,
    /// Full access, including member management
    Admin,
}

impl TeamPermission {
    /// Form value for this permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for TeamPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pull" => Ok(Self::Pull),
            "push" => Ok(Self::Push),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown team permission: {} (expected pull, push or admin)", other)),
        }
    }
}

impl fmt::Display for TeamPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_team_decodes_every_field() {
        let team: Team =
            serde_json::from_value(json!({"id": 3, "name": "Owners", "permission": "admin"})).unwrap();

        assert_eq!(team.id, Some(3));
        assert_eq!(team.name.as_deref(), Some("Owners"));
        assert_eq!(team.permission.as_deref(), Some("admin"));
    }

    #[test]
    fn test_permission_parsing() {
        assert_eq!("push".parse::<TeamPermission>().unwrap(), TeamPermission::Push);
        assert_eq!("ADMIN".parse::<TeamPermission>().unwrap(), TeamPermission::Admin);
        assert!("owner".parse::<TeamPermission>().is_err());
        assert_eq!(TeamPermission::default().to_string(), "pull");
    }

    #[test]
    fn test_team_display() {
        let team = Team {
            name: Some("Owners".into()),
            ..Team::default()
        };
        assert_eq!(team.to_string(), "Owners");
    }
}
