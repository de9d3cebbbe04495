use bookclub_core::db::migrations::{latest_version, REQUIRED_TABLES};
use bookclub_core::db::{open_db, open_db_at, open_db_in_memory, DbError, DbLocation};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in REQUIRED_TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn open_db_enables_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookclub.sqlite3");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    conn_first
        .execute(
            "INSERT INTO publishers (name, phone, email) VALUES ('Acme', '555-0100', 'a@acme.com');",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db_at(&DbLocation::File(path)).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM publishers;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reopening_applies_only_pending_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.sqlite3");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO publishers (name, phone, email) VALUES ('Acme', '555-0100', 'a@acme.com');",
        [],
    )
    .unwrap();
    conn.execute_batch("DROP TABLE ad_hoc_teams_member; PRAGMA user_version = 1;")
        .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "ad_hoc_teams_member");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM publishers;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn schema_rejects_values_wider_than_declared_columns() {
    let conn = open_db_in_memory().unwrap();
    let too_long = "x".repeat(18);

    conn.execute(
        "INSERT INTO publishers (name, phone, email) VALUES ('Acme', '555-0100', 'a@acme.com');",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO authoring_entities (email, authoring_entity_type, name)
         VALUES ('jane@x.com', 'individual_author', 'Jane');",
        [],
    )
    .unwrap();

    let result = conn.execute(
        "INSERT INTO books (isbn, title, year_published, publisher_name, authoring_entities_email)
         VALUES (?1, 'Foo', 2020, 'Acme', 'jane@x.com');",
        [too_long.as_str()],
    );
    assert!(result.is_err());
}

#[test]
fn schema_rejects_writing_group_without_profile() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO authoring_entities (email, authoring_entity_type, name)
         VALUES ('group@x.com', 'writing_group', 'Inklings');",
        [],
    );
    assert!(result.is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
