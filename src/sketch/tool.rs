//! Interaction tool selection.

/// Interaction tool used by the editing engine.
///
/// The tool is never chosen directly: it is derived from the active
/// [`DrawMode`](super::DrawMode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Tap-to-place vertices (default)
    #[default]
    Vertex,
    /// Continuous trace turned into vertices
    Freehand,
}

impl Tool {
    /// Display name for the status line.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Vertex => "Vertex",
            Tool::Freehand => "Freehand",
        }
    }
}
