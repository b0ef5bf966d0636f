// Database models - Note
use serde::{Deserialize, Serialize};

use crate::tone::Tone;

/// A voice note: one recorded clip, its transcript, and derived metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    pub duration_seconds: Option<f64>,
    pub audio_file_path: Option<String>,
    pub transcript: String,
    pub tone: Tone,
}

impl Note {
    pub fn new(id: String, title: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id,
            title,
            created_at: now.clone(),
            updated_at: now,
            duration_seconds: None,
            audio_file_path: None,
            transcript: String::new(),
            tone: Tone::Neutral,
        }
    }
}

/// Caller-supplied fields for a new note; everything else is derived.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewNote {
    pub title: Option<String>,
    pub duration_seconds: Option<f64>,
    pub audio_file_path: Option<String>,
}

/// Updates that can be applied to a stored note.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub transcript: Option<String>,
    pub tone: Option<Tone>,
    pub duration_seconds: Option<f64>,
    pub audio_file_path: Option<String>,
}

/// A note together with its tags in rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteWithTags {
    pub note: Note,
    pub tags: Vec<String>,
}

/// Search filters for note queries.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NoteFilters {
    pub tag: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}
