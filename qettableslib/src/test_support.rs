//! Fixture databases shaped like a QElectroTech project export.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::database::Database;

const SCHEMA: &str = r#"
CREATE TABLE "element_info" (
    "element_type" TEXT,
    "label" TEXT,
    "folio" TEXT,
    "position" TEXT
);
CREATE VIEW "element_nomenclature_view" AS
    SELECT "element_type", "label", "folio", "position" FROM "element_info";
"#;

/// `(element_type, label, folio, position)`
pub type Element<'a> = (&'a str, &'a str, &'a str, &'a str);

/// Elements of the shared sample project.
///
/// - block A: terminals 1 and 3, terminal 2 unused; `A:1` is also the label
///   of a non-terminal element
/// - block B: terminals 2 and 10 (numeric vs lexicographic order)
/// - block X: a single label with a non-numeric suffix
pub const SAMPLE: &[Element<'static>] = &[
    ("terminal", "A:1", "1", "A1"),
    ("terminal", "A:3", "2", "B3"),
    ("terminal", "A:3", "3", "C2"),
    ("simple", "A:1", "5", "D4"),
    ("terminal", "B:10", "1", "E1"),
    ("terminal", "B:2", "1", "E2"),
    ("terminal", "X:y", "4", "F1"),
    ("terminal", "NOCOLON", "4", "F2"),
    ("report", "C:1", "6", "A1"),
];

pub fn populate(conn: &Connection, elements: &[Element<'_>]) {
    conn.execute_batch(SCHEMA).unwrap();
    for (element_type, label, folio, position) in elements {
        conn.execute(
            r#"INSERT INTO "element_info" VALUES (?1, ?2, ?3, ?4)"#,
            params![element_type, label, folio, position],
        )
        .unwrap();
    }
}

pub fn memory_database(elements: &[Element<'_>]) -> Database {
    let conn = Connection::open_in_memory().unwrap();
    populate(&conn, elements);
    Database::from_connection(conn)
}

pub fn sample_database() -> Database {
    memory_database(SAMPLE)
}

/// Create a database file at `path` holding `elements`.
pub fn write_database(path: &Path, elements: &[Element<'_>]) {
    let conn = Connection::open(path).unwrap();
    populate(&conn, elements);
    conn.close().unwrap();
}
