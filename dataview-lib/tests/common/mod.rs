#![allow(dead_code)]

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use dataview_lib::ViewEngine;
use dataview_lib::config::ViewConfig;
use dataview_lib::model::Field;
use dataview_lib::model::Schema;
use dataview_lib::model::ViewRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub joined: DateTime<Utc>,
}

impl ViewRecord for User {
    fn id(&self) -> &str {
        &self.id
    }
}

fn user(id: &str, name: &str, role: &str, status: &str, (y, m, d): (i32, u32, u32)) -> User {
    let first = name.split(' ').next().unwrap_or(name).to_lowercase();
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", first),
        role: role.to_string(),
        status: status.to_string(),
        joined: Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap(),
    }
}

/// Eight users; u1, u3, u5 and u8 are active.
pub fn users() -> Vec<User> {
    vec![
        user("u1", "Ada Lovelace", "Admin", "active", (2023, 1, 10)),
        user("u2", "Brian Kernighan", "Editor", "inactive", (2022, 6, 1)),
        user("u3", "Grace Hopper", "Admin", "active", (2021, 3, 15)),
        user("u4", "Dennis Ritchie", "Viewer", "pending", (2023, 7, 20)),
        user("u5", "Barbara Liskov", "Editor", "active", (2020, 11, 2)),
        user("u6", "Ken Thompson", "Viewer", "inactive", (2024, 2, 14)),
        user("u7", "Margaret Hamilton", "Admin", "pending", (2022, 9, 9)),
        user("u8", "Alan Turing", "Editor", "active", (2021, 12, 25)),
    ]
}

pub fn schema() -> Schema<User> {
    Schema::new([
        Field::text("name", |u: &User| u.name.as_str()).searchable().sortable(),
        Field::text("email", |u: &User| u.email.as_str()).searchable(),
        Field::enumerated("role", |u: &User| u.role.as_str()).searchable().sortable(),
        Field::enumerated("status", |u: &User| u.status.as_str()).sortable(),
        Field::datetime("joined", |u: &User| u.joined).sortable(),
    ])
    .unwrap()
}

/// Page sizes 2, 5 and 10; starts at 5.
pub fn engine() -> ViewEngine<User> {
    let config = ViewConfig::new()
        .with_page_sizes([2, 5, 10])
        .with_default_page_size(5);
    ViewEngine::with_config(schema(), config).unwrap()
}

pub fn ids<'a>(records: &[&'a User]) -> Vec<&'a str> {
    records.iter().map(|u| u.id.as_str()).collect()
}
