#![forbid(unsafe_code)]

use bx_schema::SchemaStore;
use bx_schema::support::row_count;
use rusqlite::params;

#[test]
fn demo_users_exist_until_the_trim() {
    let mut store = SchemaStore::open_in_memory().expect("open store");

    // baseline + seed_users
    store.apply_steps(2).expect("apply seeds");
    assert_eq!(row_count(store.connection(), "users").expect("count"), 8);
    assert_eq!(row_count(store.connection(), "user_roles").expect("count"), 8);

    // ... through trim_demo_seed
    store.apply_steps(12).expect("apply through the trim");
    let conn = store.connection();
    assert_eq!(row_count(conn, "users").expect("count"), 1);
    let survivor: String = conn
        .query_row("SELECT user_id FROM users", [], |row| row.get(0))
        .expect("surviving user");
    assert_eq!(survivor, "usr-admin");
}

#[test]
fn trim_revert_restores_the_demo_accounts() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_steps(14).expect("apply through the trim");
    assert_eq!(row_count(store.connection(), "users").expect("count"), 1);

    store.revert_last().expect("revert the trim");
    assert_eq!(row_count(store.connection(), "users").expect("count"), 8);
    assert_eq!(
        row_count(store.connection(), "user_groups").expect("count"),
        8
    );
}

#[test]
fn permission_backfill_does_not_duplicate_keys() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("apply all");
    let conn = store.connection();

    let distinct_keys: i64 = conn
        .query_row(
            "SELECT COUNT(DISTINCT permission_key) FROM permissions",
            [],
            |row| row.get(0),
        )
        .expect("distinct keys");
    assert_eq!(
        distinct_keys,
        row_count(conn, "permissions").expect("count"),
        "permission keys must stay unique"
    );

    let materials_view: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM permissions WHERE permission_key = 'materials.view'",
            [],
            |row| row.get(0),
        )
        .expect("materials.view rows");
    assert_eq!(materials_view, 1);

    let admin_grants: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM role_permissions WHERE role_id = 'role-system-admin'",
            [],
            |row| row.get(0),
        )
        .expect("admin grants");
    assert_eq!(admin_grants, 15);
}

#[test]
fn deleting_a_project_cascades_to_its_boxes() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("apply all");
    let conn = store.connection();

    conn.execute(
        "INSERT INTO projects (project_id, project_code, project_name, created_at_ms)
         VALUES ('prj-t1', 'T1', 'Test Tower', 1730419200000)",
        [],
    )
    .expect("insert project");
    conn.execute(
        "INSERT INTO boxes (box_id, project_id, box_tag, created_at_ms)
         VALUES ('box-t1', 'prj-t1', 'T1-001', 1730419200000)",
        [],
    )
    .expect("insert box");

    conn.execute("DELETE FROM projects WHERE project_id = 'prj-t1'", [])
        .expect("delete project");
    let remaining: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM boxes WHERE project_id = 'prj-t1'",
            [],
            |row| row.get(0),
        )
        .expect("count boxes");
    assert_eq!(remaining, 0, "boxes must cascade with their project");
}

#[test]
fn deleting_a_referenced_department_is_restricted() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("apply all");

    // usr-admin belongs to dep-it.
    let err = store
        .connection()
        .execute("DELETE FROM departments WHERE department_id = 'dep-it'", [])
        .expect_err("restrict policy must block the delete");
    assert!(err.to_string().contains("FOREIGN KEY constraint failed"));
}

#[test]
fn deleting_a_team_clears_member_links() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_all().expect("apply all");
    let conn = store.connection();

    conn.execute(
        "INSERT INTO teams (team_id, team_code, team_name, department_id, created_at_ms)
         VALUES ('team-t1', 'TT1', 'Test Crew', 'dep-const', 1730419200000)",
        [],
    )
    .expect("insert team");
    conn.execute(
        "INSERT INTO team_members
           (team_member_id, user_id, team_id, employee_code, employee_name)
         VALUES ('tm-t1', 'usr-admin', 'team-t1', 'E-001', 'Test Member')",
        [],
    )
    .expect("insert member");

    conn.execute("DELETE FROM teams WHERE team_id = ?1", params!["team-t1"])
        .expect("delete team");
    let team_id: Option<String> = conn
        .query_row(
            "SELECT team_id FROM team_members WHERE team_member_id = 'tm-t1'",
            [],
            |row| row.get(0),
        )
        .expect("member survives");
    assert_eq!(team_id, None, "member link must fall back to NULL");
}
