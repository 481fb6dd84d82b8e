//! Utility functions for color names and coordinate parsing.
//!
//! This module provides:
//! - Name-to-color mapping used by the config file
//! - Color-to-name mapping used by the graphics listing
//! - Coordinate parsing for the command front end

use crate::draw::{Color, color::*};
use crate::geometry::Point;

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "purple", "cyan", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "purple" => Some(PURPLE),
        "cyan" => Some(CYAN),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Alpha is ignored. Colors outside the named palette (within a 0.1
/// tolerance per channel) are reported as "Custom".
pub fn color_to_name(color: &Color) -> &'static str {
    const PALETTE: [(&str, Color); 9] = [
        ("Red", RED),
        ("Green", GREEN),
        ("Blue", BLUE),
        ("Yellow", YELLOW),
        ("Orange", ORANGE),
        ("Purple", PURPLE),
        ("Cyan", CYAN),
        ("White", WHITE),
        ("Black", BLACK),
    ];

    let close = |a: f64, b: f64| (a - b).abs() < 0.1;
    PALETTE
        .iter()
        .find(|(_, named)| {
            close(color.r, named.r) && close(color.g, named.g) && close(color.b, named.b)
        })
        .map_or("Custom", |(name, _)| name)
}

// ============================================================================
// Coordinate Parsing
// ============================================================================

/// Parses a single finite coordinate value.
pub fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses an `X,Y` pair such as `"-117.2,34.05"`.
pub fn parse_point_pair(text: &str) -> Option<Point> {
    let (x, y) = text.split_once(',')?;
    Some(Point::new(parse_coordinate(x)?, parse_coordinate(y)?))
}
