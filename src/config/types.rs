//! Configuration type definitions.

use super::enums::{ColorSpec, FillStyle, LineStyle, MarkerStyle};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Symbols applied to committed graphics, one per geometry family.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SymbolsConfig {
    /// Marker for points and multipoints
    #[serde(default)]
    pub marker: MarkerSymbolConfig,

    /// Stroke for polylines (also used as the polygon outline)
    #[serde(default)]
    pub line: LineSymbolConfig,

    /// Fill for polygons
    #[serde(default)]
    pub fill: FillSymbolConfig,
}

/// Point marker settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MarkerSymbolConfig {
    /// Marker shape (circle, cross, diamond, square, triangle, x)
    #[serde(default = "default_marker_style")]
    pub style: MarkerStyle,

    /// Marker color - a named color or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_marker_color")]
    pub color: ColorSpec,

    /// Marker size in pixels (valid range: 1.0 - 64.0)
    #[serde(default = "default_marker_size")]
    pub size: f64,
}

impl Default for MarkerSymbolConfig {
    fn default() -> Self {
        Self {
            style: default_marker_style(),
            color: default_marker_color(),
            size: default_marker_size(),
        }
    }
}

/// Line stroke settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LineSymbolConfig {
    /// Stroke pattern (solid, dash, dot, dash-dot)
    #[serde(default = "default_line_style")]
    pub style: LineStyle,

    /// Stroke color
    #[serde(default = "default_line_color")]
    pub color: ColorSpec,

    /// Stroke width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_line_width")]
    pub width: f64,
}

impl Default for LineSymbolConfig {
    fn default() -> Self {
        Self {
            style: default_line_style(),
            color: default_line_color(),
            width: default_line_width(),
        }
    }
}

/// Polygon fill settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FillSymbolConfig {
    /// Interior pattern (solid, cross, diagonal-cross, horizontal, vertical, null)
    #[serde(default = "default_fill_style")]
    pub style: FillStyle,

    /// Fill color
    #[serde(default = "default_fill_color")]
    pub color: ColorSpec,

    /// Fill opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_fill_opacity")]
    pub opacity: f64,
}

impl Default for FillSymbolConfig {
    fn default() -> Self {
        Self {
            style: default_fill_style(),
            color: default_fill_color(),
            opacity: default_fill_opacity(),
        }
    }
}

/// Geometry editor tuning.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EditorConfig {
    /// Maximum number of undoable edits per sketch (valid range: 0 - 1000, 0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Freehand samples closer than this to the previous sample are dropped
    /// (map units, valid range: 0.0 - 100.0)
    #[serde(default = "default_freehand_min_spacing")]
    pub freehand_min_spacing: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            freehand_min_spacing: default_freehand_min_spacing(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Print the status line (mode, tool, undo/redo, graphic count) after each command
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Print the key reference when the session starts
    #[serde(default)]
    pub show_help_on_start: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            show_help_on_start: false,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_marker_style() -> MarkerStyle {
    MarkerStyle::Square
}

fn default_marker_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_marker_size() -> f64 {
    20.0
}

fn default_line_style() -> LineStyle {
    LineStyle::Solid
}

fn default_line_color() -> ColorSpec {
    ColorSpec::Name("blue".to_string())
}

fn default_line_width() -> f64 {
    4.0
}

fn default_fill_style() -> FillStyle {
    FillStyle::Cross
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::Name("yellow".to_string())
}

fn default_fill_opacity() -> f64 {
    1.0
}

fn default_history_limit() -> usize {
    100
}

fn default_freehand_min_spacing() -> f64 {
    1.0
}

fn default_show_status() -> bool {
    true
}
