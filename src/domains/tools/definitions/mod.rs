//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

mod get_notes;
mod get_weather;
mod save_note;

pub use get_notes::GetNotesTool;
pub use get_weather::{GetWeatherParams, GetWeatherTool};
pub use save_note::{SaveNoteParams, SaveNoteTool};
