//! Geometry editing engine contract.
//!
//! The sketch controller never builds geometry itself. It drives an engine
//! through [`GeometryEditingEngine`] and reads back the live geometry, its
//! validity and the undo/redo availability. [`VertexEditor`] is the in-memory
//! engine used by the command front end and the tests.

pub mod editor;

pub use editor::VertexEditor;

use crate::geometry::{Geometry, GeometryType};
use crate::sketch::Tool;

/// Snapshot of the engine's undo/redo availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryState {
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Callback invoked whenever the [`HistoryState`] snapshot changes.
pub type HistoryListener = Box<dyn FnMut(HistoryState)>;

/// Operations the sketch controller needs from a geometry editing engine.
///
/// An engine owns the in-progress geometry; callers only ever borrow it.
pub trait GeometryEditingEngine {
    /// Sets the interaction tool used by the next and current session.
    fn set_tool(&mut self, tool: Tool);

    /// Returns the current interaction tool.
    fn tool(&self) -> Tool;

    /// Starts a new, empty session for the given geometry type, discarding
    /// any in-progress geometry.
    fn start(&mut self, geometry_type: GeometryType);

    /// Ends the session. The engine becomes idle with no geometry.
    fn stop(&mut self);

    /// Returns true while a session is active.
    fn is_started(&self) -> bool;

    /// Removes the in-progress geometry without ending the session.
    fn clear_geometry(&mut self);

    /// Deselects any selected vertex.
    fn clear_selection(&mut self);

    /// The in-progress geometry, if any.
    fn geometry(&self) -> Option<&Geometry>;

    fn can_undo(&self) -> bool;

    fn can_redo(&self) -> bool;

    /// Reverts the last edit. No-op when nothing can be undone.
    fn undo(&mut self);

    /// Re-applies the last reverted edit. No-op when nothing can be redone.
    fn redo(&mut self);

    /// Validity predicate for a geometry of its runtime type.
    fn is_valid(&self, geometry: &Geometry) -> bool;

    /// Registers a listener notified on every availability change.
    fn subscribe_history(&mut self, listener: HistoryListener);

    /// Polls the current availability snapshot.
    fn history(&self) -> HistoryState {
        HistoryState {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}
