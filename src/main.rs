//! Bookmark Tools demo binary.
//!
//! Builds a sample imported file in a temp directory and walks every layer:
//! validation, the read-only guard, and the full addressing protocol.

use bookmark_tools::app::App;
use bookmark_tools::database::{DatabaseValidator, ReadOnlyDatabase};
use bookmark_tools::imported::resource::ImportedResource;

use rusqlite::Connection;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("Bookmark Tools v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    let dir = std::env::temp_dir().join("bookmark_tools_demo");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir)?;

    let db_path = dir.join("bookmarks.sqlite");
    write_sample_export(&db_path)?;

    section("DatabaseValidator");
    DatabaseValidator::validate(&db_path)?;
    println!("  {} accepted", db_path.display());

    let bogus = dir.join("notes.sqlite");
    let conn = Connection::open(&bogus)?;
    conn.execute("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT)", [])?;
    drop(conn);
    match DatabaseValidator::validate(&bogus) {
        Err(err) => println!("  {} rejected: {}", bogus.display(), err),
        Ok(()) => println!("  unexpected: wrong schema accepted"),
    }
    std::fs::remove_file(&bogus)?;

    section("ReadOnlyDatabase");
    let db = ReadOnlyDatabase::open(&db_path)?;
    println!("  opened read-only: {}", db.is_readonly());
    match db.execute("DELETE FROM moz_bookmarks", []) {
        Err(err) => println!("  write trapped: {}", err),
        Ok(_) => println!("  unexpected: write went through"),
    }
    drop(db);

    section("Addressing protocol");
    let app = App::new(&dir);
    for address in [
        "/imported",
        "/imported/bookmarks.sqlite",
        "/imported/bookmarks.sqlite/1",
        "/imported/bookmarks.sqlite/1/children",
        "/imported/bookmarks.sqlite/99",
        "/imported/bookmarks.sqlite/1/tags",
    ] {
        match app.resource.get_path(address) {
            Ok(value) => println!("  {} -> {}", address, value),
            Err(err) => println!(
                "  {} -> error {}",
                address,
                ImportedResource::error_body(&err)
            ),
        }
    }

    println!();
    println!("Demo complete.");
    Ok(())
}

fn section(name: &str) {
    println!();
    println!("--- {} ---", name);
}

/// Writes a minimal Firefox-style export: a toolbar folder with two entries.
fn write_sample_export(path: &Path) -> Result<(), rusqlite::Error> {
    let conn = Connection::open(path)?;
    conn.execute(
        "CREATE TABLE moz_bookmarks (
            id INTEGER PRIMARY KEY,
            title TEXT,
            parent INTEGER REFERENCES moz_bookmarks(id)
        )",
        [],
    )?;
    conn.execute(
        "INSERT INTO moz_bookmarks (id, title, parent) VALUES
            (1, 'Toolbar', NULL),
            (2, 'Work', 1),
            (3, 'Reading List', 1)",
        [],
    )?;
    Ok(())
}
