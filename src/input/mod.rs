//! Command input handling.
//!
//! This module turns lines of text into sketch operations: direct editing
//! commands go to the editing engine, key chords are resolved through the
//! keybinding map into controller actions or front-end toggles.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::{InputError, InputEvent};
pub use state::{InputState, SketchSurface};
