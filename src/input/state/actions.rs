use crate::config::Action;
use crate::draw::GraphicsPresentation;
use crate::input::events::{InputError, InputEvent, is_blank_or_comment};
use crate::util;

use super::InputState;

impl InputState {
    /// Processes one line of input.
    ///
    /// Returns extra output lines (graphic listings, help). Errors leave the
    /// session usable.
    pub fn on_line(&mut self, line: &str) -> Result<Vec<String>, InputError> {
        if is_blank_or_comment(line) {
            return Ok(Vec::new());
        }
        let event = InputEvent::parse(line)?;
        self.on_event(event)
    }

    /// Applies a parsed input event.
    pub fn on_event(&mut self, event: InputEvent) -> Result<Vec<String>, InputError> {
        match event {
            InputEvent::Vertex(point) => self
                .controller
                .with_engine(|engine| engine.insert_vertex(point))?,
            InputEvent::Trace(samples) => self
                .controller
                .with_engine(|engine| engine.trace(&samples))?,
            InputEvent::BeginPart => self.controller.with_engine(|engine| engine.begin_part())?,
            InputEvent::SelectVertex(index) => self
                .controller
                .with_engine(|engine| engine.select_vertex(index))?,
            InputEvent::MoveSelected(point) => self
                .controller
                .with_engine(|engine| engine.move_selected(point))?,
            InputEvent::DeleteSelected => self
                .controller
                .with_engine(|engine| engine.delete_selected())?,
            InputEvent::ListGraphics => return Ok(self.graphics_listing()),
            InputEvent::Key(chord) => {
                let action = self
                    .find_action(&chord)
                    .ok_or_else(|| InputError::Unbound(chord.to_string()))?;
                return self.handle_action(action);
            }
        }
        Ok(Vec::new())
    }

    /// Runs a bound action.
    pub(super) fn handle_action(&mut self, action: Action) -> Result<Vec<String>, InputError> {
        log::debug!("Handling {:?}", action);
        match action {
            Action::Exit => {
                self.should_exit = true;
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                if self.show_help {
                    return Ok(self.help_lines().to_vec());
                }
            }
            Action::ToggleStatusBar => {
                self.show_status_bar = !self.show_status_bar;
            }
            _ => {
                if let Some(user_action) = action.to_user_action() {
                    self.controller.perform(user_action)?;
                }
            }
        }
        Ok(Vec::new())
    }

    /// One line per committed graphic, oldest first.
    fn graphics_listing(&self) -> Vec<String> {
        let graphics = self.controller.presentation().graphics();
        if graphics.is_empty() {
            return vec!["No graphics on the map".to_string()];
        }
        graphics
            .iter()
            .enumerate()
            .map(|(index, graphic)| {
                let color = graphic.symbol().color();
                format!(
                    "{}. {} ({} {})",
                    index + 1,
                    graphic.summary(),
                    util::color_to_name(&color),
                    color.to_hex()
                )
            })
            .collect()
    }
}
