// Database migrations for Notes-Local
// Creates and updates the database schema

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 2;

/// Run all necessary migrations to bring the database up to date
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;

    if current_version < 1 {
        migrate_v1(conn)?;
    }

    if current_version < 2 {
        migrate_v2(conn)?;
    }

    Ok(())
}

/// Get the current schema version from the database
fn get_schema_version(conn: &Connection) -> Result<i32> {
    // Check if schema_version table exists
    let table_exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='schema_version'",
        [],
        |row| row.get(0),
    ).unwrap_or(false);

    if !table_exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT MAX(version) FROM schema_version",
        [],
        |row| row.get(0),
    ).unwrap_or(0);

    Ok(version)
}

/// Initial schema creation (version 1)
fn migrate_v1(conn: &Connection) -> Result<()> {
    log::info!("Running database migration v1");

    conn.execute_batch(r#"
        -- Schema version tracking
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Notes table: one row per recorded voice note
        CREATE TABLE IF NOT EXISTS notes (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            duration_seconds REAL,
            audio_file_path TEXT,
            transcript TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_notes_created_at ON notes(created_at DESC);

        -- Tags assigned to a note, in rank order. The taxonomy itself is
        -- build-time constant data and is never persisted.
        CREATE TABLE IF NOT EXISTS note_tags (
            note_id TEXT NOT NULL,
            tag TEXT NOT NULL,
            position INTEGER NOT NULL,
            PRIMARY KEY (note_id, tag),
            FOREIGN KEY (note_id) REFERENCES notes(id) ON DELETE CASCADE
        );

        INSERT INTO schema_version (version) VALUES (1);
    "#).context("Failed to run migration v1")?;

    Ok(())
}

/// Version 2: tone column and tag lookup index
fn migrate_v2(conn: &Connection) -> Result<()> {
    log::info!("Running database migration v2");

    conn.execute_batch(r#"
        ALTER TABLE notes ADD COLUMN tone TEXT NOT NULL DEFAULT 'neutral';

        CREATE INDEX IF NOT EXISTS idx_note_tags_tag ON note_tags(tag);

        INSERT INTO schema_version (version) VALUES (2);
    "#).context("Failed to run migration v2")?;

    Ok(())
}
