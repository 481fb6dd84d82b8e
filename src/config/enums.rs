//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Marker shape for point and multipoint graphics.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerStyle {
    Circle,
    Cross,
    Diamond,
    Square,
    Triangle,
    X,
}

/// Stroke pattern for polylines and polygon outlines.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    Solid,
    Dash,
    Dot,
    DashDot,
}

/// Interior pattern for polygon graphics.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FillStyle {
    Solid,
    Cross,
    DiagonalCross,
    Horizontal,
    Vertical,
    /// Outline only
    Null,
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "red"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, purple, cyan, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names fall back to red with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using red", name);
                RED
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_spec_from_toml_forms() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: ColorSpec,
        }

        let named: Wrapper = toml::from_str(r#"color = "Cyan""#).unwrap();
        assert_eq!(named.color.to_color(), CYAN);

        let rgb: Wrapper = toml::from_str("color = [0, 0, 255]").unwrap();
        assert_eq!(rgb.color.to_color(), BLUE);

        let unknown: Wrapper = toml::from_str(r#"color = "chartreuse""#).unwrap();
        assert_eq!(unknown.color.to_color(), RED);
    }

    #[test]
    fn styles_use_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            fill: FillStyle,
            line: LineStyle,
        }

        let styles: Wrapper = toml::from_str("fill = \"diagonal-cross\"\nline = \"dash-dot\"").unwrap();
        assert_eq!(styles.fill, FillStyle::DiagonalCross);
        assert_eq!(styles.line, LineStyle::DashDot);
    }
}
