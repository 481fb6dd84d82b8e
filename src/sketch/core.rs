//! Sketch session state and controller construction.

use super::mode::DrawMode;
use super::tool::Tool;
use crate::draw::{GraphicsPresentation, SymbolSet};
use crate::engine::{GeometryEditingEngine, HistoryListener, HistoryState};
use crate::geometry::Geometry;

/// Controller state machine.
///
/// Starts `Idle`; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No draw mode selected and no engine session running
    #[default]
    Idle,
    /// An engine session is building geometry for `mode`
    Editing {
        /// The single active draw mode
        mode: DrawMode,
    },
}

/// The active editing session as seen by the UI.
///
/// The geometry itself stays inside the engine; only the mode and the
/// mirrored undo/redo availability live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SketchSession {
    pub state: SessionState,
    pub history: HistoryState,
}

/// Mediates between user actions, the editing engine and the presentation.
pub struct SketchController<E, P> {
    /// Geometry editing engine (owns the in-progress geometry)
    pub(super) engine: E,
    /// Surface receiving committed graphics
    pub(super) presentation: P,
    /// Symbols assigned to committed graphics
    pub(super) symbols: SymbolSet,
    /// Current session state
    pub(super) session: SketchSession,
    /// Last user-facing status message
    pub(super) status: String,
}

impl<E, P> SketchController<E, P>
where
    E: GeometryEditingEngine,
    P: GraphicsPresentation,
{
    /// Creates an idle controller.
    pub fn new(engine: E, presentation: P, symbols: SymbolSet) -> Self {
        let mut controller = Self {
            engine,
            presentation,
            symbols,
            session: SketchSession::default(),
            status: String::new(),
        };
        controller.sync_history();
        controller
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn session(&self) -> &SketchSession {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state
    }

    /// Returns the selected draw mode, if any.
    pub fn active_mode(&self) -> Option<DrawMode> {
        match self.session.state {
            SessionState::Editing { mode } => Some(mode),
            SessionState::Idle => None,
        }
    }

    /// Returns the tool of the selected draw mode.
    pub fn active_tool(&self) -> Option<Tool> {
        self.active_mode().map(DrawMode::tool)
    }

    /// Whether the toolbar button for `mode` is highlighted.
    pub fn is_mode_selected(&self, mode: DrawMode) -> bool {
        self.active_mode() == Some(mode)
    }

    /// The in-progress geometry, borrowed from the engine.
    pub fn current_geometry(&self) -> Option<&Geometry> {
        self.engine.geometry()
    }

    pub fn can_undo(&self) -> bool {
        self.session.history.can_undo
    }

    pub fn can_redo(&self) -> bool {
        self.session.history.can_redo
    }

    /// Last user-facing status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Runs direct input against the engine (vertex taps, traces, selection).
    ///
    /// The session snapshot is refreshed afterwards.
    pub fn with_engine<R>(&mut self, edit: impl FnOnce(&mut E) -> R) -> R {
        let result = edit(&mut self.engine);
        self.sync_history();
        result
    }

    /// Forwards a history listener to the engine.
    pub fn watch_history(&mut self, listener: HistoryListener) {
        self.engine.subscribe_history(listener);
    }

    /// Re-reads undo/redo availability from the engine.
    ///
    /// Falls back to `Idle` if the engine session ended underneath us.
    pub fn sync_history(&mut self) {
        self.session.history = self.engine.history();
        if !self.engine.is_started() && self.session.state != SessionState::Idle {
            log::debug!("Engine session ended; returning to idle");
            self.session.state = SessionState::Idle;
        }
    }

    pub(super) fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// Clears the mode-selection indicators.
    pub(super) fn reset_selection(&mut self) {
        self.session.state = SessionState::Idle;
    }
}
