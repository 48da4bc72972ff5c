//! SQLite-backed store for notes.
//!
//! Every operation opens its own connection and drops it before returning;
//! nothing is pooled or shared between requests.

use rusqlite::{Connection, Result as SqliteResult};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long a connection waits on another writer's lock before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const NOTES_SCHEMA: &str = "
    CREATE TABLE notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        english_note TEXT NOT NULL,
        translated_note TEXT NOT NULL,
        language TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

/// Result of [`Database::initialize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The store file was missing; it was created along with the schema
    Created,
    /// The store file already existed and was left untouched
    Existing,
}

/// Handle to the single-file notes store
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection to the store file
    pub(crate) fn connect(&self) -> SqliteResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Create the store file and the `notes` table if the file does not exist yet.
    ///
    /// An existing file is trusted as-is: its schema is not checked.
    pub fn initialize(&self) -> SqliteResult<InitOutcome> {
        self.initialize_with_schema(NOTES_SCHEMA)
    }

    fn initialize_with_schema(&self, schema: &str) -> SqliteResult<InitOutcome> {
        if self.path.exists() {
            log::debug!(
                "[DB] Store {} already exists, skipping schema creation",
                self.path.display()
            );
            return Ok(InitOutcome::Existing);
        }

        if let Err(e) = self.connect().and_then(|conn| conn.execute_batch(schema)) {
            // Opening created the file; a schemaless file would count as
            // existing on the next start.
            if self.path.exists() {
                if let Err(rm) = std::fs::remove_file(&self.path) {
                    log::warn!(
                        "[DB] Failed to remove partially created store {}: {}",
                        self.path.display(),
                        rm
                    );
                }
            }
            return Err(e);
        }

        log::info!("[DB] Database '{}' created successfully", self.path.display());
        Ok(InitOutcome::Created)
    }
}
