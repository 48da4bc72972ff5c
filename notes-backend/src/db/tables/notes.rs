//! Note database operations (insert and newest-first listing)

use rusqlite::{Result as SqliteResult, params};

use super::super::Database;
use crate::models::Note;

impl Database {
    /// Insert a note and return its id. `created_at` is filled in by SQLite.
    pub fn insert_note(
        &self,
        english_note: &str,
        translated_note: &str,
        language: &str,
    ) -> SqliteResult<i64> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT INTO notes (english_note, translated_note, language) VALUES (?1, ?2, ?3)",
            params![english_note, translated_note, language],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// All notes, newest first. Notes created within the same second are
    /// ordered by id, highest first.
    pub fn list_notes(&self) -> SqliteResult<Vec<Note>> {
        let conn = self.connect()?;

        let mut stmt = conn.prepare(
            "SELECT id, english_note, translated_note, language, created_at
             FROM notes
             ORDER BY created_at DESC, id DESC",
        )?;

        let notes = stmt
            .query_map([], |row| {
                Ok(Note {
                    id: row.get(0)?,
                    english_note: row.get(1)?,
                    translated_note: row.get(2)?,
                    language: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    fn fresh_db() -> (TempDir, Database) {
        let dir = tempdir().unwrap();
        let db = Database::new(dir.path().join("notes.db"));
        db.initialize().expect("Failed to initialize store");
        (dir, db)
    }

    fn set_created_at(db: &Database, id: i64, ts: &str) {
        let conn = db.connect().unwrap();
        conn.execute("UPDATE notes SET created_at = ?1 WHERE id = ?2", params![ts, id])
            .unwrap();
    }

    #[test]
    fn test_list_empty_store() {
        let (_dir, db) = fresh_db();
        assert!(db.list_notes().unwrap().is_empty());
    }

    #[test]
    fn test_insert_returns_increasing_ids() {
        let (_dir, db) = fresh_db();

        let first = db.insert_note("hello", "bonjour", "French").unwrap();
        let second = db.insert_note("thanks", "gracias", "Spanish").unwrap();
        let third = db.insert_note("bye", "tschüss", "German").unwrap();

        assert_eq!(first, 1);
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn test_inserted_fields_round_trip() {
        let (_dir, db) = fresh_db();

        let id = db.insert_note("hello", "bonjour", "French").unwrap();
        let notes = db.list_notes().unwrap();

        assert_eq!(notes.len(), 1);
        let note = &notes[0];
        assert_eq!(note.id, id);
        assert_eq!(note.english_note, "hello");
        assert_eq!(note.translated_note, "bonjour");
        assert_eq!(note.language, "French");
        // CURRENT_TIMESTAMP format
        assert_eq!(note.created_at.len(), "2024-01-01 00:00:00".len());
    }

    #[test]
    fn test_newest_first() {
        let (_dir, db) = fresh_db();

        let a = db.insert_note("one", "uno", "Spanish").unwrap();
        let b = db.insert_note("two", "dos", "Spanish").unwrap();
        let c = db.insert_note("three", "tres", "Spanish").unwrap();

        // Insert order and timestamp order deliberately disagree
        set_created_at(&db, a, "2024-01-01 10:00:02");
        set_created_at(&db, b, "2024-01-01 10:00:03");
        set_created_at(&db, c, "2024-01-01 10:00:01");

        let ids: Vec<i64> = db.list_notes().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![b, a, c]);
    }

    #[test]
    fn test_same_timestamp_breaks_ties_by_id() {
        let (_dir, db) = fresh_db();

        let ids: Vec<i64> = (0..3)
            .map(|i| db.insert_note(&format!("n{}", i), "t", "L").unwrap())
            .collect();
        for id in &ids {
            set_created_at(&db, *id, "2024-01-01 10:00:00");
        }

        let listed: Vec<i64> = db.list_notes().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(listed, vec![ids[2], ids[1], ids[0]]);
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let (_dir, db) = fresh_db();
        db.insert_note("a", "b", "c").unwrap();
        db.insert_note("d", "e", "f").unwrap();

        assert_eq!(db.list_notes().unwrap(), db.list_notes().unwrap());
    }

    #[test]
    fn test_insert_without_schema_fails() {
        let dir = tempdir().unwrap();
        let db = Database::new(dir.path().join("unprepared.db"));

        assert!(db.insert_note("a", "b", "c").is_err());
    }
}
