//! Command-line input events.
//!
//! Each line of input is either a direct editing command (`at`, `trace`,
//! `part`, `select`, `move`, `delete`, `list`) or a key chord that is looked up
//! in the keybinding map.

use crate::config::KeyBinding;
use crate::engine::editor::EditError;
use crate::geometry::Point;
use crate::sketch::SketchError;
use crate::util;
use thiserror::Error;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// `at X Y`: place a vertex
    Vertex(Point),
    /// `trace X,Y X,Y ...`: one freehand stroke
    Trace(Vec<Point>),
    /// `part`: start a new path or ring
    BeginPart,
    /// `select N`: select a vertex by flat index
    SelectVertex(usize),
    /// `move X Y`: move the selected vertex
    MoveSelected(Point),
    /// `delete`: remove the selected vertex
    DeleteSelected,
    /// `list`: print committed graphics
    ListGraphics,
    /// Anything else: a key chord
    Key(KeyBinding),
}

/// Errors surfaced to the user for a single input line.
///
/// None of these end the session.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected}")]
    BadArguments {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Key '{0}' is not bound to any action")]
    Unbound(String),

    #[error("Invalid keybindings: {0}")]
    Keybindings(String),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Sketch(#[from] SketchError),
}

impl InputEvent {
    /// Parses a non-empty, non-comment line.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        match command.to_lowercase().as_str() {
            "at" => parse_xy(&args)
                .map(InputEvent::Vertex)
                .ok_or(InputError::BadArguments {
                    command: "at",
                    expected: "two finite coordinates: at X Y",
                }),
            "move" => parse_xy(&args)
                .map(InputEvent::MoveSelected)
                .ok_or(InputError::BadArguments {
                    command: "move",
                    expected: "two finite coordinates: move X Y",
                }),
            "trace" => {
                let points: Option<Vec<Point>> =
                    args.iter().map(|arg| util::parse_point_pair(arg)).collect();
                match points {
                    Some(points) if !points.is_empty() => Ok(InputEvent::Trace(points)),
                    _ => Err(InputError::BadArguments {
                        command: "trace",
                        expected: "one or more X,Y pairs: trace 0,0 1,1",
                    }),
                }
            }
            "select" => match args.as_slice() {
                [index] => index
                    .parse::<usize>()
                    .map(InputEvent::SelectVertex)
                    .map_err(|_| InputError::BadArguments {
                        command: "select",
                        expected: "a vertex index: select N",
                    }),
                _ => Err(InputError::BadArguments {
                    command: "select",
                    expected: "a vertex index: select N",
                }),
            },
            "part" if args.is_empty() => Ok(InputEvent::BeginPart),
            "delete" if args.is_empty() => Ok(InputEvent::DeleteSelected),
            "list" if args.is_empty() => Ok(InputEvent::ListGraphics),
            _ => KeyBinding::parse(line)
                .map(InputEvent::Key)
                .map_err(|_| InputError::UnknownCommand(line.to_string())),
        }
    }
}

/// Returns true for lines that carry no command.
pub fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

fn parse_xy(args: &[&str]) -> Option<Point> {
    match args {
        [x, y] => Some(Point::new(
            util::parse_coordinate(x)?,
            util::parse_coordinate(y)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vertex_and_move() {
        assert_eq!(
            InputEvent::parse("at 1.5 -2").unwrap(),
            InputEvent::Vertex(Point::new(1.5, -2.0))
        );
        assert_eq!(
            InputEvent::parse("MOVE 3 4").unwrap(),
            InputEvent::MoveSelected(Point::new(3.0, 4.0))
        );
    }

    #[test]
    fn rejects_bad_vertex_arguments() {
        assert!(matches!(
            InputEvent::parse("at 1"),
            Err(InputError::BadArguments { command: "at", .. })
        ));
        assert!(matches!(
            InputEvent::parse("at 1 NaN"),
            Err(InputError::BadArguments { .. })
        ));
    }

    #[test]
    fn parses_trace_pairs() {
        assert_eq!(
            InputEvent::parse("trace 0,0 1,1 2,0").unwrap(),
            InputEvent::Trace(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 0.0),
            ])
        );
        assert!(InputEvent::parse("trace").is_err());
        assert!(InputEvent::parse("trace 0,0 oops").is_err());
    }

    #[test]
    fn parses_vertex_editing_commands() {
        assert_eq!(
            InputEvent::parse("select 2").unwrap(),
            InputEvent::SelectVertex(2)
        );
        assert!(InputEvent::parse("select -1").is_err());
        assert_eq!(InputEvent::parse("part").unwrap(), InputEvent::BeginPart);
        assert_eq!(
            InputEvent::parse(" delete ").unwrap(),
            InputEvent::DeleteSelected
        );
        assert_eq!(InputEvent::parse("list").unwrap(), InputEvent::ListGraphics);
    }

    #[test]
    fn falls_back_to_key_chords() {
        assert_eq!(
            InputEvent::parse("Ctrl+Z").unwrap(),
            InputEvent::Key(KeyBinding::parse("Ctrl+Z").unwrap())
        );
        assert_eq!(
            InputEvent::parse("4").unwrap(),
            InputEvent::Key(KeyBinding::parse("4").unwrap())
        );
    }

    #[test]
    fn command_words_never_parse_as_chords() {
        for word in crate::config::keybindings::COMMAND_WORDS {
            assert!(
                !matches!(InputEvent::parse(word), Ok(InputEvent::Key(_))),
                "{word} should be read as a command"
            );
        }
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert!(is_blank_or_comment("   "));
        assert!(is_blank_or_comment("# draw a square"));
        assert!(!is_blank_or_comment("at 0 0"));
    }
}
