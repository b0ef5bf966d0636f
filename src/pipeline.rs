// Capture pipeline for Notes-Local
// Turns raw speech-to-text output into a stored, tagged note

use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::{NewNote, Note, NoteWithTags};
use crate::database::DatabaseManager;
use crate::tagging::Tagger;
use crate::tone::{classify_tone, Tone};
use crate::transcript::clean_transcript;

/// The derived fields for one transcript: cleaned text, ranked tags, tone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedTranscript {
    pub transcript: String,
    pub tags: Vec<String>,
    pub tone: Tone,
}

/// Clean, tag, and tone-classify a raw transcript.
pub fn process_transcript(raw: &str) -> ProcessedTranscript {
    let transcript = clean_transcript(raw);
    let tags = Tagger::builtin().tag(Some(&transcript));
    let tone = classify_tone(Some(&transcript));
    ProcessedTranscript {
        transcript,
        tags,
        tone,
    }
}

/// Process a raw transcript and store it as a new note.
///
/// A transcript that cleans down to nothing still stores the note: the
/// audio reference should not be lost just because transcription failed.
pub fn save_voice_note(
    db: &DatabaseManager,
    raw_transcript: &str,
    new_note: NewNote,
) -> Result<NoteWithTags> {
    let processed = process_transcript(raw_transcript);

    let id = Uuid::new_v4().to_string();
    let title = new_note
        .title
        .unwrap_or_else(|| default_title(&processed.transcript));

    let mut note = Note::new(id, title);
    note.duration_seconds = new_note.duration_seconds;
    note.audio_file_path = new_note.audio_file_path;
    note.transcript = processed.transcript;
    note.tone = processed.tone;

    db.create_note(&note)?;
    db.replace_tags(&note.id, &processed.tags)?;

    log::info!("Stored note {} with tags {:?}", note.id, processed.tags);

    Ok(NoteWithTags {
        note,
        tags: processed.tags,
    })
}

/// First few words of the transcript, or a placeholder when it is empty.
fn default_title(transcript: &str) -> String {
    if transcript.is_empty() {
        return "Voice note".to_string();
    }
    transcript
        .split_whitespace()
        .take(6)
        .collect::<Vec<&str>>()
        .join(" ")
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
    fn test_process_transcript_end_to_end() {
        let processed = process_transcript(
            "[music] Don't forget the the team meeting by tomorrow, I'm excited",
        );

        assert_eq!(
            processed.transcript,
            "Don't forget the team meeting by tomorrow, I'm excited"
        );
        // reminder and work tie at 2 hits; declaration order breaks the tie
        assert_eq!(processed.tags, vec!["reminder", "work", "todo"]);
        assert_eq!(processed.tone, Tone::Positive);
    }

    #[test]
    fn test_save_voice_note_persists_everything() {
        let (db, _dir) = create_test_db();

        let saved = save_voice_note(
            &db,
            "What if we brainstorm a concept for the new project? \
             I've been thinking about this idea all week.",
            NewNote {
                duration_seconds: Some(12.5),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(saved.tags, vec!["idea", "journal", "work"]);
        assert_eq!(saved.note.title, "What if we brainstorm a concept");

        let loaded = db.get_note_with_tags(&saved.note.id).unwrap().unwrap();
        assert_eq!(loaded.tags, saved.tags);
        assert_eq!(loaded.note.duration_seconds, Some(12.5));
        assert!(loaded.note.transcript.starts_with("What if we brainstorm"));
    }

    #[test]
    fn test_failed_transcription_still_stores_note() {
        let (db, _dir) = create_test_db();

        let saved = save_voice_note(
            &db,
            "[silence]",
            NewNote {
                audio_file_path: Some("/audio/clip.wav".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(saved.note.transcript, "");
        assert_eq!(saved.note.title, "Voice note");
        assert_eq!(saved.note.tone, Tone::Neutral);
        assert!(saved.tags.is_empty());

        let loaded = db.get_note_with_tags(&saved.note.id).unwrap().unwrap();
        assert_eq!(
            loaded.note.audio_file_path,
            Some("/audio/clip.wav".to_string())
        );
        assert!(loaded.tags.is_empty());
    }

    #[test]
    fn test_explicit_title_wins() {
        let (db, _dir) = create_test_db();

        let saved = save_voice_note(
            &db,
            "buy milk",
            NewNote {
                title: Some("Groceries".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(saved.note.title, "Groceries");
    }
}
