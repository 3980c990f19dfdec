//
//  github2
//  output/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table and detail views for the API resources.

use console::style;

use super::{format_bool, format_count, format_date, print_field, print_header, print_optional, truncate, TableOutput, TableRow};
use crate::api::v2::{Key, Organization, Repository, Team, User};

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

impl TableOutput for User {
    fn print_table(&self, color: bool) {
        match self.name.as_deref() {
            Some(name) => print_header(&format!("{} ({})", self, name)),
            None => print_header(&self.to_string()),
        }
        println!();

        print_optional("Company", self.company.as_deref(), color);
        print_optional("Location", self.location.as_deref(), color);
        print_optional("Email", self.email.as_deref(), color);
        print_optional("Blog", self.blog.as_deref(), color);

        println!();
        print_field("Followers", &format_count(self.followers_count), color);
        print_field("Following", &format_count(self.following_count), color);
        print_field("Public repos", &format_count(self.public_repo_count), color);
        print_field("Public gists", &format_count(self.public_gist_count), color);

        if self.is_authenticated() {
            print_field("Private repos", &format_count(self.total_private_repo_count), color);
            print_field("Private gists", &format_count(self.private_gist_count), color);
            print_field("Collaborators", &format_count(self.collaborators), color);
            print_field("Disk usage", &format_count(self.disk_usage), color);
        }

        if self.created_at.is_some() {
            println!();
            print_field("Joined", &format_date(self.created_at.as_ref()), color);
        }
    }
}

impl TableRow for User {
    fn headers() -> Vec<&'static str> {
        vec!["Login", "Name", "Company", "Location"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.to_string(),
            or_dash(self.name.as_deref()),
            or_dash(self.company.as_deref()),
            or_dash(self.location.as_deref()),
        ]
    }
}

impl TableOutput for Repository {
    fn print_table(&self, color: bool) {
        print_header(&self.to_string());
        println!();

        print_optional("Description", self.description.as_deref(), color);
        print_optional("Homepage", self.homepage.as_deref(), color);
        print_optional("Language", self.language.as_deref(), color);
        print_optional("URL", self.url.as_deref(), color);

        let visibility = match (self.private, color) {
            (Some(true), true) => style("private").yellow().to_string(),
            (Some(true), false) => "private".to_string(),
            (_, true) => style("public").green().to_string(),
            (_, false) => "public".to_string(),
        };
        print_field("Visibility", &visibility, color);

        if self.fork == Some(true) {
            let parent = self
                .parent
                .as_ref()
                .and_then(|p| p.as_str())
                .unwrap_or("unknown");
            print_field("Fork of", parent, color);
        }

        println!();
        print_field("Watchers", &format_count(self.watchers), color);
        print_field("Forks", &format_count(self.forks), color);
        print_field("Open issues", &format_count(self.open_issues), color);
        if let Some(has_issues) = self.has_issues {
            print_field("Issues", &format_bool(has_issues, color), color);
        }
        if let Some(has_wiki) = self.has_wiki {
            print_field("Wiki", &format_bool(has_wiki, color), color);
        }

        println!();
        print_field("Created", &format_date(self.created_at.as_ref()), color);
        print_field("Pushed", &format_date(self.pushed_at.as_ref()), color);
    }
}

impl TableRow for Repository {
    fn headers() -> Vec<&'static str> {
        vec!["Repository", "Visibility", "Language", "Watchers", "Description"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        let visibility = match (self.private == Some(true), color) {
            (true, true) => style("private").yellow().to_string(),
            (true, false) => "private".to_string(),
            (false, true) => style("public").green().to_string(),
            (false, false) => "public".to_string(),
        };

        vec![
            self.to_string(),
            visibility,
            or_dash(self.language.as_deref()),
            format_count(self.watchers),
            truncate(self.description.as_deref().unwrap_or(""), 50),
        ]
    }
}

impl TableOutput for Organization {
    fn print_table(&self, color: bool) {
        match self.name.as_deref() {
            Some(name) => print_header(&format!("{} ({})", self, name)),
            None => print_header(&self.to_string()),
        }
        println!();

        print_optional("Company", self.company.as_deref(), color);
        print_optional("Location", self.location.as_deref(), color);
        print_optional("Email", self.email.as_deref(), color);
        print_optional("Blog", self.blog.as_deref(), color);
        print_optional("Permission", self.permission.as_deref(), color);

        println!();
        print_field("Followers", &format_count(self.followers_count), color);
        print_field("Public repos", &format_count(self.public_repo_count), color);
        print_field("Public gists", &format_count(self.public_gist_count), color);

        if self.created_at.is_some() {
            println!();
            print_field("Created", &format_date(self.created_at.as_ref()), color);
        }
    }
}

impl TableRow for Organization {
    fn headers() -> Vec<&'static str> {
        vec!["Login", "Name", "Location"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.to_string(),
            or_dash(self.name.as_deref()),
            or_dash(self.location.as_deref()),
        ]
    }
}

impl TableOutput for Team {
    fn print_table(&self, color: bool) {
        print_header(&self.to_string());
        print_field("ID", &format_count(self.id), color);
        print_field("Permission", &or_dash(self.permission.as_deref()), color);
    }
}

impl TableRow for Team {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Permission"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            format_count(self.id),
            self.to_string(),
            or_dash(self.permission.as_deref()),
        ]
    }
}

impl TableOutput for Key {
    fn print_table(&self, color: bool) {
        print_header(self.title.as_deref().unwrap_or("<untitled>"));
        print_field("ID", &format_count(self.id), color);
        print_optional("URL", self.url.as_deref(), color);
        print_optional("Key", self.key.as_deref(), color);
    }
}

impl TableRow for Key {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Key"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            format_count(self.id),
            or_dash(self.title.as_deref()),
            truncate(self.key.as_deref().unwrap_or(""), 40),
        ]
    }
}
