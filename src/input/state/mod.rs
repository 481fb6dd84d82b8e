mod actions;
mod core;

pub use self::core::{InputState, SketchSurface};
