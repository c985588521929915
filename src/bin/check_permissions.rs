//! Diagnostic binary to check file permissions for the MCP server.
//!
//! Reports whether the notes file and its directory are accessible, then
//! attempts a real write through the note store. Exits 0 when the write
//! succeeds and 1 on a storage failure, so it can be used from scripts.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use weather_notes_server::core::Config;
use weather_notes_server::domains::notes::{NoteError, NoteStore};

fn main() -> ExitCode {
    let config = Config::default();
    let notes_file = &config.storage.notes_file;

    println!("{}", "=".repeat(60));
    println!("MCP Server Permission Diagnostic");
    println!("{}", "=".repeat(60));

    if let Some(dir) = notes_file.parent() {
        println!("\nDirectory: {}", dir.display());
        println!("   Exists: {}", dir.exists());
        print_mode(dir);
    }

    println!("\nNotes file: {}", notes_file.display());
    println!("   Exists: {}", notes_file.exists());
    if notes_file.exists() {
        print_mode(notes_file);
    }

    println!("\nWrite test:");
    let store = NoteStore::new(notes_file.clone());
    match store.save("Permission check test note") {
        Ok(note) => {
            println!("   ok: wrote test note (ID: {})", note.id);
            ExitCode::SUCCESS
        }
        Err(err @ NoteError::Read { .. }) | Err(err @ NoteError::Write { .. }) => {
            println!("   permission error: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            println!("   unexpected error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Print the unix permission bits for a path, when available.
fn print_mode(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = fs::metadata(path) {
            println!("   Permissions: {:o}", meta.permissions().mode() & 0o777);
            println!("   Read-only: {}", meta.permissions().readonly());
        }
    }
    #[cfg(not(unix))]
    {
        if let Ok(meta) = fs::metadata(path) {
            println!("   Read-only: {}", meta.permissions().readonly());
        }
    }
}
