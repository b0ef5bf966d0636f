// Tagging module for Notes-Local
// Scores transcripts against a fixed category taxonomy and returns ranked tags

pub mod tagger;
pub mod taxonomy;

pub use tagger::{Tagger, MAX_TAGS};
pub use taxonomy::{Category, Taxonomy};
