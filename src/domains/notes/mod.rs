//! Notes domain module.
//!
//! A file-backed note store: a single JSON file holding an array of
//! `{id, text, ts}` records. The file is the sole persistence boundary;
//! every operation re-reads it from disk.

mod error;
mod store;

pub use error::NoteError;
pub use store::{Note, NoteStore};
