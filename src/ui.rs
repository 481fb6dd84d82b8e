/// UI text: status line and key reference
use crate::config::KeybindingsConfig;
use crate::draw::GraphicsPresentation;
use crate::engine::GeometryEditingEngine;
use crate::sketch::SketchController;

/// Width of the chord column in the key reference
const HELP_CHORD_WIDTH: usize = 24;

/// Status line showing the active mode, tool, history and graphic count
pub fn status_line<E, P>(controller: &SketchController<E, P>) -> String
where
    E: GeometryEditingEngine,
    P: GraphicsPresentation,
{
    let mode = match (controller.active_mode(), controller.active_tool()) {
        (Some(mode), Some(tool)) => format!("{} | {}", mode.label(), tool.name()),
        _ => "No mode".to_string(),
    };

    let flag = |on: bool| if on { "on" } else { "off" };
    let mut line = format!(
        "[{}] [Undo {}] [Redo {}] [Graphics {}]",
        mode,
        flag(controller.can_undo()),
        flag(controller.can_redo()),
        controller.presentation().len()
    );

    if !controller.status().is_empty() {
        line.push_str("  ");
        line.push_str(controller.status());
    }
    line
}

/// Key reference built from the configured bindings
pub fn help_lines(keybindings: &KeybindingsConfig) -> Vec<String> {
    let mut lines = vec![
        "mapsketch keys".to_string(),
        format!("    {:<width$}{}", "at X Y", "Place a vertex", width = HELP_CHORD_WIDTH),
        format!(
            "    {:<width$}{}",
            "trace X,Y X,Y ...", "Freehand stroke", width = HELP_CHORD_WIDTH
        ),
        format!(
            "    {:<width$}{}",
            "part", "Start a new path or ring", width = HELP_CHORD_WIDTH
        ),
        format!(
            "    {:<width$}{}",
            "select N / move X Y", "Select and move a vertex", width = HELP_CHORD_WIDTH
        ),
        format!(
            "    {:<width$}{}",
            "delete", "Delete the selected vertex", width = HELP_CHORD_WIDTH
        ),
        format!(
            "    {:<width$}{}",
            "list", "List graphics on the map", width = HELP_CHORD_WIDTH
        ),
    ];

    for (action, chords) in keybindings.entries() {
        if chords.is_empty() {
            continue;
        }
        lines.push(format!(
            "    {:<width$}{}",
            chords.join(", "),
            action.describe(),
            width = HELP_CHORD_WIDTH
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{GraphicsOverlay, SymbolSet};
    use crate::engine::VertexEditor;
    use crate::geometry::Point;
    use crate::sketch::DrawMode;

    #[test]
    fn idle_status_line() {
        let controller =
            SketchController::new(VertexEditor::new(), GraphicsOverlay::new(), SymbolSet::default());
        assert_eq!(
            status_line(&controller),
            "[No mode] [Undo off] [Redo off] [Graphics 0]"
        );
    }

    #[test]
    fn editing_status_line() {
        let mut controller =
            SketchController::new(VertexEditor::new(), GraphicsOverlay::new(), SymbolSet::default());
        controller.select_mode(DrawMode::FreehandPolyline);
        controller
            .with_engine(|engine| engine.trace(&[Point::new(0.0, 0.0), Point::new(5.0, 5.0)]))
            .unwrap();

        assert_eq!(
            status_line(&controller),
            "[FreehandPolyline | Freehand] [Undo on] [Redo off] [Graphics 0]  Current selection: FreehandPolyline"
        );
    }

    #[test]
    fn help_lists_configured_chords() {
        let mut keybindings = KeybindingsConfig::default();
        keybindings.toggle_status_bar.clear();
        let lines = help_lines(&keybindings);

        assert!(lines.iter().any(|l| l.contains("Ctrl+Y, Ctrl+Shift+Z")));
        assert!(lines.iter().any(|l| l.contains("Add sketch to map")));
        assert!(!lines.iter().any(|l| l.contains("Toggle status line")));
    }
}
