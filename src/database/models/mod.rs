// Database models - Re-exports all domain-specific models
//
// This module is split into focused files by domain:
// - note.rs: Voice notes, their tags, and query filters

mod note;

pub use note::{NewNote, Note, NoteFilters, NoteUpdate, NoteWithTags};
