//! Users Table Example
//!
//! Drives a view over a small user list the way a table UI would:
//! - records loaded from JSON as dynamic `Record`s
//! - search, a status filter, and column sorting
//! - paging and page-scoped "select all"
//! - the view state saved to and restored from a query string
//!
//! Transition logs go to `users_table.log`.

use std::fs::File;

use dataview_lib::config::ViewConfig;
use dataview_lib::error::Result;
use dataview_lib::model::{Field, FieldKind, Record, Schema, ViewRecord};
use dataview_lib::query::FieldFilter;
use dataview_lib::{ViewAction, ViewEngine, ViewResult};
use log::LevelFilter;
use serde_json::json;
use simplelog::{Config, WriteLogger};

fn users() -> serde_json::Value {
    json!([
        {"id": "u1", "name": "Ada Lovelace", "role": "Admin", "status": "active", "joined": "2023-01-10T09:00:00Z"},
        {"id": "u2", "name": "Brian Kernighan", "role": "Editor", "status": "inactive", "joined": "2022-06-01T09:00:00Z"},
        {"id": "u3", "name": "Grace Hopper", "role": "Admin", "status": "active", "joined": "2021-03-15T09:00:00Z"},
        {"id": "u4", "name": "Dennis Ritchie", "role": "Viewer", "status": "pending", "joined": "2023-07-20T09:00:00Z"},
        {"id": "u5", "name": "Barbara Liskov", "role": "Editor", "status": "active", "joined": "2020-11-02T09:00:00Z"},
        {"id": "u6", "name": "Ken Thompson", "role": "Viewer", "status": "inactive", "joined": "2024-02-14T09:00:00Z"},
        {"id": "u7", "name": "Margaret Hamilton", "role": "Admin", "status": "pending", "joined": "2022-09-09T09:00:00Z"},
        {"id": "u8", "name": "Alan Turing", "role": "Editor", "status": "active", "joined": "2021-12-25T09:00:00Z"}
    ])
}

// ============================================================================
// Rendering
// ============================================================================

fn cell(record: &Record, field: &str) -> String {
    record.get(field).map(|v| v.to_string()).unwrap_or_default()
}

fn render(title: &str, view: &ViewResult<'_, Record>, selected: impl Fn(&str) -> bool) {
    println!("== {} ==", title);
    for record in &view.page {
        let mark = if selected(record.id()) { "[x]" } else { "[ ]" };
        println!(
            "{} {:<4} {:<20} {:<8} {:<10} {}",
            mark,
            record.id(),
            cell(record, "name"),
            cell(record, "role"),
            cell(record, "status"),
            cell(record, "joined"),
        );
    }
    println!(
        "{}  (page {}/{}, {} selected)\n",
        view.summary(),
        view.page_index,
        view.total_pages,
        view.selected_count
    );
}

// ============================================================================
// Main
// ============================================================================

fn run() -> Result<()> {
    let rows = users();
    let records = rows
        .as_array()
        .into_iter()
        .flatten()
        .map(|row| Record::from_json("id", row))
        .collect::<Result<Vec<_>, _>>()?;

    let schema = Schema::new([
        Field::dynamic("name", FieldKind::Text).searchable().sortable(),
        Field::dynamic("role", FieldKind::Enum).searchable().sortable(),
        Field::dynamic("status", FieldKind::Enum).sortable(),
        Field::dynamic("joined", FieldKind::DateTime).sortable(),
    ])?;
    let config = ViewConfig::new()
        .with_page_sizes([3, 5, 10])
        .with_default_page_size(3);
    let engine = ViewEngine::with_config(schema, config)?;

    let mut state = engine.initial_state();
    render("All users", &engine.compute_view(&records, &state), |id| {
        state.selection.is_selected(id)
    });

    let steps = [
        ("Sorted by join date", vec![ViewAction::ToggleSort {
            field: "joined".into(),
        }]),
        ("Newest first, page 2", vec![
            ViewAction::ToggleSort {
                field: "joined".into(),
            },
            ViewAction::NextPage,
        ]),
        ("Select all on page 2", vec![ViewAction::ToggleAllOnPage {
            checked: true,
        }]),
        ("Active only", vec![ViewAction::SetFilter {
            field: "status".into(),
            filter: FieldFilter::equals("active"),
        }]),
        ("Search \"a\", five per page", vec![
            ViewAction::SetQuery { query: "a".into() },
            ViewAction::SetPageSize { size: 5 },
        ]),
    ];

    for (title, actions) in steps {
        for action in actions {
            state = engine.apply(&records, &state, action);
        }
        let view = engine.compute_view(&records, &state);
        render(title, &view, |id| state.selection.is_selected(id));
    }

    let query = engine.encode_state(&state);
    println!("Saved view: ?{}", query);

    let restored = engine.decode_state(&query)?;
    render("Restored from URL", &engine.compute_view(&records, &restored), |id| {
        restored.selection.is_selected(id)
    });

    let chosen: Vec<&str> = engine
        .selected_records(&records, &state)
        .iter()
        .map(|r| r.id())
        .collect();
    println!("Bulk action would apply to: {:?}", chosen);

    Ok(())
}

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("users_table.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}
