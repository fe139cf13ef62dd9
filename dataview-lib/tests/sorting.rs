mod common;

use common::{User, engine, ids, schema, users};
use dataview_lib::model::{Field, FieldKind, Schema, ViewRecord};
use dataview_lib::query::{Direction, FieldFilter, FilterState, SortState, apply_filters, apply_sort};

fn sorted<'a>(users: &'a [User], sort: &SortState) -> Vec<&'a User> {
    let all: Vec<&User> = users.iter().collect();
    apply_sort(&schema(), all, sort)
}

#[test]
fn test_no_sort_is_pass_through() {
    let users = users();
    let filters = FilterState::new().with_filter("role", FieldFilter::equals("Editor"));
    let filtered = apply_filters(&schema(), &users, &filters);
    let expected = ids(&filtered);
    let out = apply_sort(&schema(), filtered, &SortState::none());
    assert_eq!(ids(&out), expected);
}

#[test]
fn test_string_sort_is_ordinal() {
    let users = users();
    let out = sorted(&users, &SortState::by("name", Direction::Asc));
    assert_eq!(
        ids(&out),
        vec!["u1", "u8", "u5", "u2", "u4", "u3", "u6", "u7"]
    );
}

#[test]
fn test_date_sort_by_instant() {
    let users = users();
    let out = sorted(&users, &SortState::by("joined", Direction::Asc));
    assert_eq!(
        ids(&out),
        vec!["u5", "u3", "u8", "u2", "u7", "u1", "u4", "u6"]
    );

    let out = sorted(&users, &SortState::by("joined", Direction::Desc));
    assert_eq!(
        ids(&out),
        vec!["u6", "u4", "u1", "u7", "u2", "u8", "u3", "u5"]
    );
}

#[test]
fn test_ties_keep_pre_sort_order() {
    let users = users();

    let out = sorted(&users, &SortState::by("role", Direction::Asc));
    assert_eq!(
        ids(&out),
        vec!["u1", "u3", "u7", "u2", "u5", "u8", "u4", "u6"]
    );

    // Descending flips the groups, not the order inside a group.
    let out = sorted(&users, &SortState::by("role", Direction::Desc));
    assert_eq!(
        ids(&out),
        vec!["u4", "u6", "u2", "u5", "u8", "u1", "u3", "u7"]
    );
}

#[test]
fn test_unknown_sort_field_keeps_order() {
    let users = users();
    let out = sorted(&users, &SortState::by("department", Direction::Desc));
    assert_eq!(
        ids(&out),
        vec!["u1", "u2", "u3", "u4", "u5", "u6", "u7", "u8"]
    );
}

#[test]
fn test_toggle_state_machine() {
    let sort = SortState::none().toggled("name");
    assert_eq!(sort, SortState::by("name", Direction::Asc));

    let sort = sort.toggled("name");
    assert_eq!(sort, SortState::by("name", Direction::Desc));

    // A new field always starts ascending, whatever the old field's state was.
    let sort = sort.toggled("joined");
    assert_eq!(sort, SortState::by("joined", Direction::Asc));

    let sort = sort.toggled("joined").toggled("joined");
    assert_eq!(sort, SortState::by("joined", Direction::Asc));
}

#[test]
fn test_engine_toggle_sort_ignores_non_sortable() {
    let engine = engine();
    let state = engine.toggle_sort(&engine.initial_state(), "name");
    let state = engine.set_page(&users(), &state, 2);
    assert_eq!(state.pagination.page_index(), 2);

    // email is searchable but not sortable
    let after = engine.toggle_sort(&state, "email");
    assert_eq!(after, state);
}

#[test]
fn test_engine_toggle_sort_resets_page() {
    let engine = engine();
    let users = users();
    let state = engine.set_page(&users, &engine.initial_state(), 2);
    assert_eq!(state.pagination.page_index(), 2);

    let state = engine.toggle_sort(&state, "joined");
    assert_eq!(state.pagination.page_index(), 1);
    assert_eq!(state.sort.direction(), Some(Direction::Asc));

    let view = engine.compute_view(&users, &state);
    assert_eq!(ids(&view.page), vec!["u5", "u3", "u8", "u2", "u7"]);
}

#[test]
fn test_missing_values_sort_last_ascending() {
    struct Task {
        id: String,
        due: Option<i64>,
    }

    impl ViewRecord for Task {
        fn id(&self) -> &str {
            &self.id
        }
    }

    let schema = Schema::new([Field::new(
        "due",
        FieldKind::Int,
        |t: &Task| t.due.map(Into::into),
    )
    .sortable()])
    .unwrap();

    let tasks = vec![
        Task { id: "t1".into(), due: None },
        Task { id: "t2".into(), due: Some(3) },
        Task { id: "t3".into(), due: Some(1) },
    ];
    let all: Vec<&Task> = tasks.iter().collect();

    let asc = apply_sort(&schema, all.clone(), &SortState::by("due", Direction::Asc));
    let asc: Vec<&str> = asc.iter().map(|t| t.id()).collect();
    assert_eq!(asc, vec!["t3", "t2", "t1"]);

    let desc = apply_sort(&schema, all, &SortState::by("due", Direction::Desc));
    let desc: Vec<&str> = desc.iter().map(|t| t.id()).collect();
    assert_eq!(desc, vec!["t1", "t2", "t3"]);
}
