//! Sketch session controller and its state machine.
//!
//! The controller turns user actions (mode selection, undo/redo, commit,
//! clear, restart) into calls on a [`GeometryEditingEngine`] and moves
//! committed sketches onto a [`GraphicsPresentation`]. It keeps track of which
//! draw mode is active, so toolbar highlight state is derived rather than
//! stored as separate flags.
//!
//! [`GeometryEditingEngine`]: crate::engine::GeometryEditingEngine
//! [`GraphicsPresentation`]: crate::draw::GraphicsPresentation

mod actions;
mod core;
pub mod error;
pub mod mode;
pub mod tool;

pub use actions::UserAction;
pub use self::core::{SessionState, SketchController, SketchSession};
pub use error::SketchError;
pub use mode::DrawMode;
pub use tool::Tool;
