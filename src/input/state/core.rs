//! Front-end input state wrapped around the sketch controller.

use crate::config::{Action, Config, KeyBinding, UiConfig};
use crate::draw::{GraphicsOverlay, SymbolSet};
use crate::engine::VertexEditor;
use crate::input::events::InputError;
use crate::sketch::SketchController;
use crate::ui;
use std::collections::HashMap;

/// Controller over the in-memory editor and overlay used by the front end.
pub type SketchSurface = SketchController<VertexEditor, GraphicsOverlay>;

/// Main input state for a command session.
///
/// Owns the sketch controller plus the keybinding map and the front-end
/// toggles. Each input line is turned into controller calls by `on_line`.
pub struct InputState {
    /// Sketch controller driven by the input
    pub controller: SketchSurface,
    /// Whether the key reference is currently shown (toggled with F1)
    pub show_help: bool,
    /// Whether the status line is printed after each command
    pub show_status_bar: bool,
    /// Whether the user asked to quit
    pub should_exit: bool,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
    /// Pre-rendered key reference
    help: Vec<String>,
}

impl InputState {
    /// Creates input state around an existing controller.
    pub fn new(
        controller: SketchSurface,
        action_map: HashMap<KeyBinding, Action>,
        help: Vec<String>,
        ui: &UiConfig,
    ) -> Self {
        Self {
            controller,
            show_help: ui.show_help_on_start,
            show_status_bar: ui.show_status_bar,
            should_exit: false,
            action_map,
            help,
        }
    }

    /// Builds the editor, overlay, symbols and keybindings from configuration.
    pub fn from_config(config: &Config) -> Result<Self, InputError> {
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(InputError::Keybindings)?;

        let editor = VertexEditor::with_limits(
            config.editor.history_limit,
            config.editor.freehand_min_spacing,
        );
        let controller = SketchController::new(
            editor,
            GraphicsOverlay::new(),
            SymbolSet::from_config(&config.symbols),
        );

        Ok(Self::new(
            controller,
            action_map,
            ui::help_lines(&config.keybindings),
            &config.ui,
        ))
    }

    /// Key reference lines.
    pub fn help_lines(&self) -> &[String] {
        &self.help
    }

    /// Looks up the action bound to a chord.
    pub(super) fn find_action(&self, chord: &KeyBinding) -> Option<Action> {
        self.action_map.get(chord).copied()
    }
}
