// Search functionality for Notes-Local
// Text search across note titles and transcripts, with tag and date filters

use anyhow::{Context, Result};
use rusqlite::Connection;

use super::models::{NoteFilters, NoteWithTags};
use super::notes_repo;
use super::DatabaseManager;

impl DatabaseManager {
    /// Search notes by query and filters (most recent first).
    ///
    /// An empty query matches everything, so filter-only searches work.
    pub fn search_notes(&self, query: &str, filters: &NoteFilters) -> Result<Vec<NoteWithTags>> {
        self.with_connection(|conn| {
            search_notes_impl(conn, query, filters)
        })
    }
}

fn search_notes_impl(
    conn: &Connection,
    query: &str,
    filters: &NoteFilters,
) -> Result<Vec<NoteWithTags>> {
    let mut sql = String::from(
        r#"
        SELECT n.id, n.title, n.created_at, n.updated_at, n.duration_seconds,
               n.audio_file_path, n.transcript, n.tone
        FROM notes n
        WHERE 1=1
        "#
    );

    let mut param_count = 0;
    let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if !query.is_empty() {
        let search_pattern = format!("%{}%", query);
        param_count += 1;
        sql.push_str(&format!(
            " AND (n.title LIKE ?{0} OR n.transcript LIKE ?{0})",
            param_count
        ));
        params_vec.push(Box::new(search_pattern));
    }

    if let Some(ref tag) = filters.tag {
        param_count += 1;
        sql.push_str(&format!(
            " AND n.id IN (SELECT note_id FROM note_tags WHERE tag = ?{})",
            param_count
        ));
        params_vec.push(Box::new(tag.clone()));
    }

    if let Some(ref date_from) = filters.date_from {
        param_count += 1;
        sql.push_str(&format!(" AND n.created_at >= ?{}", param_count));
        params_vec.push(Box::new(date_from.clone()));
    }
    if let Some(ref date_to) = filters.date_to {
        param_count += 1;
        sql.push_str(&format!(" AND n.created_at <= ?{}", param_count));
        params_vec.push(Box::new(date_to.clone()));
    }

    sql.push_str(" ORDER BY n.created_at DESC");

    let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();

    let mut stmt = conn.prepare(&sql).context("Failed to prepare search query")?;
    let notes = stmt.query_map(params_refs.as_slice(), notes_repo::row_to_note)
        .context("Failed to execute search query")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to read search rows")?;

    let mut results = Vec::with_capacity(notes.len());
    for note in notes {
        let tags = notes_repo::get_tags_impl(conn, &note.id)?;
        results.push(NoteWithTags { note, tags });
    }

    Ok(results)
}
