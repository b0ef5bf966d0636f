// Notes-Local - Local voice note core
//
// The engine behind a local-first voice note-taking app:
// - Transcript cleanup for raw speech-to-text output
// - Keyword tagging against a fixed category taxonomy
// - Lexicon-based tone classification
// - SQLite persistence for notes and their tags
//
// Audio capture and transcription live upstream; this crate starts where
// the transcript string ends up.

pub mod database;
pub mod pipeline;
pub mod tagging;
pub mod tone;
pub mod transcript;

pub use database::DatabaseManager;
pub use pipeline::{process_transcript, save_voice_note, ProcessedTranscript};
pub use tagging::{Category, Tagger, Taxonomy, MAX_TAGS};
pub use tone::{classify_tone, Tone};
pub use transcript::clean_transcript;
