// Transcript hygiene for Notes-Local
// Cleans raw speech-to-text output before tagging and storage

use once_cell::sync::Lazy;
use regex::Regex;

/// Non-speech annotations some engines emit inline, e.g. "[music]" or
/// "(applause)".
static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]|\([^)]*\)").expect("annotation pattern is valid"));

/// Output an engine produces when it heard nothing useful. A transcript that
/// is exactly one of these carries no note content.
const FILLER_LINES: &[&str] = &[
    "thank you for watching",
    "thanks for watching",
    "like and subscribe",
    "see you in the next video",
];

/// Hesitation sounds; a transcript made only of these is discarded.
const FILLER_WORDS: &[&str] = &["um", "uh", "ah", "hmm", "mhm", "mm", "erm"];

/// Clean a raw transcript.
///
/// Strips inline engine annotations, collapses whitespace, collapses
/// immediate word-level stutter repeats ("the the the" -> "the"), and
/// returns the empty string for filler-only output so a failed transcription
/// stores nothing.
pub fn clean_transcript(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let stripped = ANNOTATION.replace_all(raw, " ");

    let words: Vec<&str> = stripped.split_whitespace().collect();
    let mut kept: Vec<&str> = Vec::with_capacity(words.len());
    for word in words {
        match kept.last() {
            Some(last) if last.eq_ignore_ascii_case(word) => {}
            _ => kept.push(word),
        }
    }

    let text = kept.join(" ");
    if is_filler_output(&text) {
        log::debug!("Discarding filler transcript: '{}'", text);
        return String::new();
    }

    text
}

/// True if the cleaned text carries no note content.
fn is_filler_output(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }

    let lowered = text.to_lowercase();
    let normalized: Vec<&str> = lowered
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    if normalized.is_empty() {
        return true;
    }

    if FILLER_LINES.contains(&normalized.join(" ").as_str()) {
        return true;
    }

    normalized.iter().all(|w| FILLER_WORDS.contains(w))
}
