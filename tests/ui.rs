use mapsketch::config::{Config, KeybindingsConfig};
use mapsketch::input::InputState;
use mapsketch::ui;

fn make_input_state() -> InputState {
    InputState::from_config(&Config::default()).unwrap()
}

#[test]
fn status_line_tracks_session_through_commit() {
    let mut input = make_input_state();
    assert_eq!(
        ui::status_line(&input.controller),
        "[No mode] [Undo off] [Redo off] [Graphics 0]"
    );

    for line in ["3", "at 0 0", "at 4 4"] {
        input.on_line(line).unwrap();
    }
    assert_eq!(
        ui::status_line(&input.controller),
        "[Polyline | Vertex] [Undo on] [Redo off] [Graphics 0]  Current selection: Polyline"
    );

    input.on_line("Ctrl+Z").unwrap();
    input.on_line("Ctrl+Z").unwrap();
    assert_eq!(
        ui::status_line(&input.controller),
        "[Polyline | Vertex] [Undo off] [Redo on] [Graphics 0]  Current selection: Undo"
    );

    input.on_line("Ctrl+Y").unwrap();
    input.on_line("Ctrl+Y").unwrap();
    input.on_line("Return").unwrap();
    assert_eq!(
        ui::status_line(&input.controller),
        "[No mode] [Undo off] [Redo off] [Graphics 1]  Added graphic to map"
    );
}

#[test]
fn help_reference_covers_every_action() {
    let lines = ui::help_lines(&KeybindingsConfig::default());
    for needle in [
        "Draw point",
        "Draw freehand polygon",
        "Undo last edit",
        "Discard sketch and all graphics",
        "Ctrl+Q",
        "trace X,Y X,Y ...",
    ] {
        assert!(
            lines.iter().any(|line| line.contains(needle)),
            "help should mention {needle}"
        );
    }
}

#[test]
fn help_shown_on_start_when_configured() {
    let mut config = Config::default();
    config.ui.show_help_on_start = true;
    let input = InputState::from_config(&config).unwrap();

    assert!(input.show_help);
    assert_eq!(input.help_lines()[0], "mapsketch keys");
}
