// notelocal - CLI for the Notes-Local voice note core

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;

use notes_local::database::models::{NewNote, NoteFilters, NoteWithTags};
use notes_local::database::DatabaseManager;
use notes_local::pipeline::save_voice_note;
use notes_local::tagging::Tagger;
use notes_local::tone::classify_tone;

/// Local voice note tagging and storage.
#[derive(Parser)]
#[command(name = "notelocal")]
struct Cli {
    /// Path to the notes database (defaults to the platform data directory).
    #[arg(long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tag a transcript and print the ranked tags as JSON.
    Tag {
        /// Transcript text.
        text: String,
    },
    /// Classify the tone of a transcript.
    Tone {
        /// Transcript text.
        text: String,
    },
    /// Clean, tag, and store a transcript as a new note.
    Add {
        /// Raw transcript text.
        transcript: String,

        /// Note title (defaults to the first words of the transcript).
        #[arg(long)]
        title: Option<String>,

        /// Path to the recorded audio file.
        #[arg(long)]
        audio: Option<String>,

        /// Clip duration in seconds.
        #[arg(long)]
        duration: Option<f64>,
    },
    /// List stored notes, most recent first.
    List {
        /// Maximum number of notes to show.
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Search notes by text, tag, or date range.
    Search {
        /// Text to match in titles and transcripts.
        query: Option<String>,

        /// Only notes carrying this tag.
        #[arg(long)]
        tag: Option<String>,

        /// Only notes created at or after this RFC 3339 timestamp.
        #[arg(long)]
        from: Option<String>,

        /// Only notes created at or before this RFC 3339 timestamp.
        #[arg(long)]
        to: Option<String>,
    },
    /// Show a single note with its tags as JSON.
    Show {
        /// Note ID.
        id: String,
    },
    /// Delete a note.
    Rm {
        /// Note ID.
        id: String,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Tag { text } => {
            let tags = Tagger::builtin().tag(Some(&text));
            println!("{}", serde_json::to_string(&tags)?);
        }
        Command::Tone { text } => {
            println!("{}", classify_tone(Some(&text)).as_str());
        }
        Command::Add {
            transcript,
            title,
            audio,
            duration,
        } => {
            let db = open_db(cli.db)?;
            let saved = save_voice_note(
                &db,
                &transcript,
                NewNote {
                    title,
                    duration_seconds: duration,
                    audio_file_path: audio,
                },
            )?;
            println!("{}", serde_json::to_string_pretty(&saved)?);
        }
        Command::List { limit } => {
            let db = open_db(cli.db)?;
            let notes = match limit {
                Some(limit) => db.get_recent_notes(limit)?,
                None => db.get_all_notes()?,
            };
            print_note_lines(&notes);
        }
        Command::Search {
            query,
            tag,
            from,
            to,
        } => {
            let db = open_db(cli.db)?;
            let filters = NoteFilters {
                tag,
                date_from: from,
                date_to: to,
            };
            let notes = db.search_notes(query.as_deref().unwrap_or(""), &filters)?;
            print_note_lines(&notes);
        }
        Command::Show { id } => {
            let db = open_db(cli.db)?;
            match db.get_note_with_tags(&id)? {
                Some(note) => println!("{}", serde_json::to_string_pretty(&note)?),
                None => println!("{}", json!(null)),
            }
        }
        Command::Rm { id } => {
            let db = open_db(cli.db)?;
            db.delete_note(&id)?;
        }
    }

    Ok(())
}

fn open_db(path: Option<PathBuf>) -> Result<DatabaseManager> {
    match path {
        Some(path) => DatabaseManager::new(path),
        None => DatabaseManager::open_default(),
    }
}

fn print_note_lines(notes: &[NoteWithTags]) {
    for entry in notes {
        let tags = if entry.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", entry.tags.join(", "))
        };
        println!(
            "{}  {}  {}{}",
            entry.note.id,
            entry.note.created_at,
            entry.note.title,
            tags
        );
    }
}
