//! Library exports for the mapsketch sketch-session controller.
//!
//! The [`sketch`] module holds the controller state machine. It drives a
//! [`engine::GeometryEditingEngine`] and publishes committed graphics to a
//! [`draw::GraphicsPresentation`]. Configuration, the command input layer and
//! status text are exposed so the binary and external tools share them.

pub mod config;
pub mod draw;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod sketch;
pub mod ui;
pub mod util;

pub use config::Config;
pub use sketch::{DrawMode, SketchController, SketchError, UserAction};
