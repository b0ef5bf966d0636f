// Database Manager for Notes-Local
// Handles the SQLite connection and provides access to repositories

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Mutex;

use super::migrations;

/// Database manager that owns the SQLite connection
pub struct DatabaseManager {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl DatabaseManager {
    /// Create a new DatabaseManager with the database at the specified path
    pub fn new(db_path: PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create database directory")?;
        }

        let conn = Connection::open(&db_path)
            .context("Failed to open database")?;

        // Enable foreign keys
        conn.execute("PRAGMA foreign_keys = ON", [])
            .context("Failed to enable foreign keys")?;

        // Run migrations
        migrations::run_migrations(&conn)
            .context("Failed to run database migrations")?;

        log::info!("Database initialized at: {:?}", db_path);

        Ok(Self {
            conn: Mutex::new(conn),
            db_path,
        })
    }

    /// Open the database at its default location in the platform data directory
    pub fn open_default() -> Result<Self> {
        Self::new(Self::default_path()?)
    }

    /// Default database path: `<data dir>/notes-local/notes.db`
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .context("Failed to resolve the platform data directory")?;
        Ok(data_dir.join("notes-local").join("notes.db"))
    }

    /// Execute a function with access to the database connection
    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock database connection: {}", e))?;
        f(&conn)
    }

    /// Get the database path
    pub fn db_path(&self) -> &PathBuf {
        &self.db_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_creation() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let manager = DatabaseManager::new(db_path.clone()).unwrap();
        assert!(db_path.exists());

        // Test that we can access the connection
        manager.with_connection(|conn| {
            let count: i32 = conn.query_row(
                "SELECT COUNT(*) FROM notes",
                [],
                |row| row.get(0),
            )?;
            assert_eq!(count, 0);
            Ok(())
        }).unwrap();
    }

    #[test]
    fn test_reopen_preserves_schema() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        drop(DatabaseManager::new(db_path.clone()).unwrap());

        // Second open re-runs migrations, which must be a no-op
        let manager = DatabaseManager::new(db_path).unwrap();
        manager.with_connection(|conn| {
            let version: i32 = conn.query_row(
                "SELECT MAX(version) FROM schema_version",
                [],
                |row| row.get(0),
            )?;
            assert_eq!(version, migrations::SCHEMA_VERSION);
            Ok(())
        }).unwrap();
    }
}
