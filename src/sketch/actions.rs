use super::core::{SessionState, SketchController};
use super::error::SketchError;
use super::mode::DrawMode;
use crate::draw::{Graphic, GraphicsPresentation};
use crate::engine::GeometryEditingEngine;

/// Every user-triggered sketch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    SelectMode(DrawMode),
    Undo,
    Redo,
    Commit,
    Clear,
    Restart,
}

impl<E, P> SketchController<E, P>
where
    E: GeometryEditingEngine,
    P: GraphicsPresentation,
{
    /// Single entry point for UI triggers.
    ///
    /// Only `Commit` can fail; the error has already been reported through the
    /// status message when it is returned.
    pub fn perform(&mut self, action: UserAction) -> Result<(), SketchError> {
        match action {
            UserAction::SelectMode(mode) => self.select_mode(mode),
            UserAction::Undo => {
                self.undo();
            }
            UserAction::Redo => {
                self.redo();
            }
            UserAction::Commit => self.commit()?,
            UserAction::Clear => self.clear_current(),
            UserAction::Restart => self.restart(),
        }
        Ok(())
    }

    /// Starts a fresh session for `mode`, discarding any uncommitted geometry.
    pub fn select_mode(&mut self, mode: DrawMode) {
        self.reset_selection();
        self.engine.set_tool(mode.tool());
        self.engine.start(mode.geometry_type());
        self.session.state = SessionState::Editing { mode };
        self.sync_history();
        self.set_status(format!("Current selection: {}", mode.label()));
        log::info!(
            "Started {} sketch with {} tool",
            mode.label(),
            mode.tool().name()
        );
    }

    /// Reverts the last edit when the engine allows it.
    ///
    /// Returns whether anything was undone.
    pub fn undo(&mut self) -> bool {
        if !self.engine.can_undo() {
            log::debug!("Undo ignored: nothing to undo");
            return false;
        }
        self.engine.undo();
        self.sync_history();
        self.set_status("Current selection: Undo");
        true
    }

    /// Re-applies the last undone edit when the engine allows it.
    ///
    /// Returns whether anything was redone.
    pub fn redo(&mut self) -> bool {
        if !self.engine.can_redo() {
            log::debug!("Redo ignored: nothing to redo");
            return false;
        }
        self.engine.redo();
        self.sync_history();
        self.set_status("Current selection: Redo");
        true
    }

    /// Turns the in-progress geometry into a committed graphic.
    ///
    /// On failure the session is left exactly as it was.
    pub fn commit(&mut self) -> Result<(), SketchError> {
        let Some(geometry) = self.engine.geometry() else {
            return Err(self.report(SketchError::NoGeometry));
        };
        if !self.engine.is_valid(geometry) {
            let error = SketchError::InvalidGeometry(geometry.geometry_type());
            return Err(self.report(error));
        }

        let geometry = geometry.trimmed();
        let symbol = self.symbols.symbol_for(&geometry);

        self.engine.stop();
        self.reset_selection();
        self.sync_history();

        log::info!(
            "Committed {} with {} vertices",
            geometry.geometry_type(),
            geometry.vertex_count()
        );
        self.presentation.add(Graphic::new(geometry, symbol));
        self.set_status("Added graphic to map");
        Ok(())
    }

    /// Discards the in-progress sketch; committed graphics are kept.
    pub fn clear_current(&mut self) {
        self.discard_session();
        self.set_status("Sketch cleared");
    }

    /// Discards the in-progress sketch and removes every committed graphic.
    pub fn restart(&mut self) {
        self.discard_session();
        let removed = self.presentation.len();
        self.presentation.clear();
        log::info!("Restart removed {} graphics", removed);
        self.set_status("Restarted: all graphics removed");
    }

    fn discard_session(&mut self) {
        self.reset_selection();
        self.engine.clear_geometry();
        self.engine.clear_selection();
        self.engine.stop();
        self.sync_history();
    }

    fn report(&mut self, error: SketchError) -> SketchError {
        log::warn!("Commit refused: {}", error);
        self.set_status(error.to_string());
        error
    }
}
