// Notes repository for Notes-Local
// Handles CRUD operations for voice notes and their tags

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::{Note, NoteUpdate, NoteWithTags};
use super::DatabaseManager;
use crate::tone::Tone;

impl DatabaseManager {
    /// Create a new note
    pub fn create_note(&self, note: &Note) -> Result<String> {
        self.with_connection(|conn| {
            create_note_impl(conn, note)
        })
    }

    /// Get a note by ID
    pub fn get_note(&self, id: &str) -> Result<Option<Note>> {
        self.with_connection(|conn| {
            get_note_impl(conn, id)
        })
    }

    /// Get a note with its tags in rank order
    pub fn get_note_with_tags(&self, id: &str) -> Result<Option<NoteWithTags>> {
        self.with_connection(|conn| {
            let note = match get_note_impl(conn, id)? {
                Some(note) => note,
                None => return Ok(None),
            };
            let tags = get_tags_impl(conn, id)?;
            Ok(Some(NoteWithTags { note, tags }))
        })
    }

    /// Get all notes with their tags (most recent first)
    pub fn get_all_notes(&self) -> Result<Vec<NoteWithTags>> {
        self.with_connection(|conn| {
            get_all_notes_impl(conn, None)
        })
    }

    /// Get recent notes with a limit
    pub fn get_recent_notes(&self, limit: i64) -> Result<Vec<NoteWithTags>> {
        self.with_connection(|conn| {
            get_all_notes_impl(conn, Some(limit))
        })
    }

    /// Update a note
    pub fn update_note(&self, id: &str, updates: &NoteUpdate) -> Result<()> {
        self.with_connection(|conn| {
            update_note_impl(conn, id, updates)
        })
    }

    /// Delete a note (tags go with it)
    pub fn delete_note(&self, id: &str) -> Result<()> {
        self.with_connection(|conn| {
            delete_note_impl(conn, id)
        })
    }

    /// Replace a note's tags with a new rank-ordered set
    pub fn replace_tags(&self, note_id: &str, tags: &[String]) -> Result<()> {
        self.with_connection(|conn| {
            replace_tags_impl(conn, note_id, tags)
        })
    }

    /// Get a note's tags in rank order
    pub fn get_tags(&self, note_id: &str) -> Result<Vec<String>> {
        self.with_connection(|conn| {
            get_tags_impl(conn, note_id)
        })
    }
}

fn create_note_impl(conn: &Connection, note: &Note) -> Result<String> {
    conn.execute(
        r#"
        INSERT INTO notes (
            id, title, created_at, updated_at, duration_seconds,
            audio_file_path, transcript, tone
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
        params![
            note.id,
            note.title,
            note.created_at,
            note.updated_at,
            note.duration_seconds,
            note.audio_file_path,
            note.transcript,
            note.tone.as_str(),
        ],
    ).context("Failed to create note")?;

    Ok(note.id.clone())
}

fn get_note_impl(conn: &Connection, id: &str) -> Result<Option<Note>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, title, created_at, updated_at, duration_seconds,
               audio_file_path, transcript, tone
        FROM notes WHERE id = ?
        "#
    ).context("Failed to prepare get_note query")?;

    let result = stmt.query_row(params![id], row_to_note);

    match result {
        Ok(note) => Ok(Some(note)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e).context("Failed to get note"),
    }
}

fn get_all_notes_impl(conn: &Connection, limit: Option<i64>) -> Result<Vec<NoteWithTags>> {
    let mut sql = String::from(
        r#"
        SELECT id, title, created_at, updated_at, duration_seconds,
               audio_file_path, transcript, tone
        FROM notes
        ORDER BY created_at DESC
        "#
    );
    if let Some(limit) = limit {
        sql.push_str(&format!(" LIMIT {}", limit));
    }

    let mut stmt = conn.prepare(&sql)
        .context("Failed to prepare get_all_notes query")?;

    let notes = stmt.query_map([], row_to_note)
        .context("Failed to query notes")?
        .collect::<std::result::Result<Vec<Note>, _>>()
        .context("Failed to read note rows")?;

    let mut results = Vec::with_capacity(notes.len());
    for note in notes {
        let tags = get_tags_impl(conn, &note.id)?;
        results.push(NoteWithTags { note, tags });
    }

    Ok(results)
}

fn update_note_impl(conn: &Connection, id: &str, updates: &NoteUpdate) -> Result<()> {
    let mut sets: Vec<String> = Vec::new();
    let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some(ref title) = updates.title {
        params_vec.push(Box::new(title.clone()));
        sets.push(format!("title = ?{}", params_vec.len()));
    }
    if let Some(ref transcript) = updates.transcript {
        params_vec.push(Box::new(transcript.clone()));
        sets.push(format!("transcript = ?{}", params_vec.len()));
    }
    if let Some(tone) = updates.tone {
        params_vec.push(Box::new(tone.as_str().to_string()));
        sets.push(format!("tone = ?{}", params_vec.len()));
    }
    if let Some(duration) = updates.duration_seconds {
        params_vec.push(Box::new(duration));
        sets.push(format!("duration_seconds = ?{}", params_vec.len()));
    }
    if let Some(ref path) = updates.audio_file_path {
        params_vec.push(Box::new(path.clone()));
        sets.push(format!("audio_file_path = ?{}", params_vec.len()));
    }

    if sets.is_empty() {
        return Ok(());
    }

    params_vec.push(Box::new(chrono::Utc::now().to_rfc3339()));
    sets.push(format!("updated_at = ?{}", params_vec.len()));

    params_vec.push(Box::new(id.to_string()));
    let sql = format!(
        "UPDATE notes SET {} WHERE id = ?{}",
        sets.join(", "),
        params_vec.len()
    );

    let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();
    conn.execute(&sql, params_refs.as_slice())
        .context("Failed to update note")?;

    Ok(())
}

fn delete_note_impl(conn: &Connection, id: &str) -> Result<()> {
    conn.execute("DELETE FROM notes WHERE id = ?", params![id])
        .context("Failed to delete note")?;
    Ok(())
}

fn replace_tags_impl(conn: &Connection, note_id: &str, tags: &[String]) -> Result<()> {
    conn.execute(
        "DELETE FROM note_tags WHERE note_id = ?",
        params![note_id],
    ).context("Failed to clear note tags")?;

    for (position, tag) in tags.iter().enumerate() {
        conn.execute(
            "INSERT INTO note_tags (note_id, tag, position) VALUES (?1, ?2, ?3)",
            params![note_id, tag, position as i64],
        ).context("Failed to insert note tag")?;
    }

    Ok(())
}

pub(super) fn get_tags_impl(conn: &Connection, note_id: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT tag FROM note_tags WHERE note_id = ? ORDER BY position ASC"
    ).context("Failed to prepare get_tags query")?;

    let tags = stmt.query_map(params![note_id], |row| row.get(0))
        .context("Failed to query note tags")?
        .collect::<std::result::Result<Vec<String>, _>>()
        .context("Failed to read tag rows")?;

    Ok(tags)
}

pub(super) fn row_to_note(row: &rusqlite::Row) -> rusqlite::Result<Note> {
    let tone: String = row.get(7)?;
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
        duration_seconds: row.get(4)?,
        audio_file_path: row.get(5)?,
        transcript: row.get(6)?,
        tone: Tone::from_str_or_neutral(&tone),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn create_test_db() -> (DatabaseManager, TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        (DatabaseManager::new(db_path).unwrap(), dir)
    }

    #[test]
    fn test_create_and_get_note() {
        let (db, _dir) = create_test_db();

        let mut note = Note::new("note_1".to_string(), "Standup".to_string());
        note.transcript = "don't forget the team meeting".to_string();
        note.tone = Tone::Neutral;
        db.create_note(&note).unwrap();

        let loaded = db.get_note("note_1").unwrap().unwrap();
        assert_eq!(loaded.title, "Standup");
        assert_eq!(loaded.transcript, "don't forget the team meeting");
        assert_eq!(loaded.tone, Tone::Neutral);
    }

    #[test]
    fn test_missing_note_is_none() {
        let (db, _dir) = create_test_db();
        assert!(db.get_note("nope").unwrap().is_none());
    }

    #[test]
    fn test_tags_round_trip_in_rank_order() {
        let (db, _dir) = create_test_db();

        let note = Note::new("note_tags".to_string(), "Tagged".to_string());
        db.create_note(&note).unwrap();

        let tags = vec!["work".to_string(), "todo".to_string(), "reminder".to_string()];
        db.replace_tags("note_tags", &tags).unwrap();
        assert_eq!(db.get_tags("note_tags").unwrap(), tags);

        // Replacing overwrites the previous set and its order
        let retagged = vec!["journal".to_string(), "personal".to_string()];
        db.replace_tags("note_tags", &retagged).unwrap();
        assert_eq!(db.get_tags("note_tags").unwrap(), retagged);
    }

    #[test]
    fn test_get_all_notes_most_recent_first() {
        let (db, _dir) = create_test_db();

        let mut older = Note::new("note_old".to_string(), "Older".to_string());
        older.created_at = "2026-01-01T00:00:00+00:00".to_string();
        let mut newer = Note::new("note_new".to_string(), "Newer".to_string());
        newer.created_at = "2026-02-01T00:00:00+00:00".to_string();

        db.create_note(&older).unwrap();
        db.create_note(&newer).unwrap();

        let all = db.get_all_notes().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].note.id, "note_new");
        assert_eq!(all[1].note.id, "note_old");

        let recent = db.get_recent_notes(1).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].note.id, "note_new");
    }

    #[test]
    fn test_update_note() {
        let (db, _dir) = create_test_db();

        let note = Note::new("note_up".to_string(), "Before".to_string());
        db.create_note(&note).unwrap();

        let updates = NoteUpdate {
            title: Some("After".to_string()),
            tone: Some(Tone::Positive),
            ..Default::default()
        };
        db.update_note("note_up", &updates).unwrap();

        let loaded = db.get_note("note_up").unwrap().unwrap();
        assert_eq!(loaded.title, "After");
        assert_eq!(loaded.tone, Tone::Positive);
        assert!(loaded.updated_at >= loaded.created_at);
    }

    #[test]
    fn test_delete_note_cascades_tags() {
        let (db, _dir) = create_test_db();

        let note = Note::new("note_del".to_string(), "Doomed".to_string());
        db.create_note(&note).unwrap();
        db.replace_tags("note_del", &["work".to_string()]).unwrap();

        db.delete_note("note_del").unwrap();
        assert!(db.get_note("note_del").unwrap().is_none());
        assert!(db.get_tags("note_del").unwrap().is_empty());
    }
}
