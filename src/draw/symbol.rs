//! Symbols assigned to committed graphics.

use super::color::Color;
use crate::config::{FillStyle, LineStyle, MarkerStyle, SymbolsConfig};
use crate::geometry::{Geometry, GeometryType};

/// Marker drawn at each point of a point or multipoint graphic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSymbol {
    pub style: MarkerStyle,
    pub color: Color,
    /// Marker size in device-independent pixels
    pub size: f64,
}

/// Stroke used for polylines and polygon outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSymbol {
    pub style: LineStyle,
    pub color: Color,
    /// Stroke width in device-independent pixels
    pub width: f64,
}

/// Polygon interior fill with its outline stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillSymbol {
    pub style: FillStyle,
    pub color: Color,
    pub outline: LineSymbol,
}

/// Symbol attached to a committed graphic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol {
    Marker(MarkerSymbol),
    Line(LineSymbol),
    Fill(FillSymbol),
}

impl Symbol {
    /// Short kind name ("marker", "line", "fill").
    pub fn kind(&self) -> &'static str {
        match self {
            Symbol::Marker(_) => "marker",
            Symbol::Line(_) => "line",
            Symbol::Fill(_) => "fill",
        }
    }

    /// Primary color (the fill color for polygons).
    pub fn color(&self) -> Color {
        match self {
            Symbol::Marker(marker) => marker.color,
            Symbol::Line(line) => line.color,
            Symbol::Fill(fill) => fill.color,
        }
    }
}

/// The three symbols used to present committed sketches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolSet {
    pub marker: MarkerSymbol,
    pub line: LineSymbol,
    pub fill: FillSymbol,
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::from_config(&SymbolsConfig::default())
    }
}

impl SymbolSet {
    /// Builds the symbol set from configuration.
    ///
    /// The fill outline reuses the line symbol.
    pub fn from_config(config: &SymbolsConfig) -> Self {
        let line = LineSymbol {
            style: config.line.style,
            color: config.line.color.to_color(),
            width: config.line.width,
        };
        Self {
            marker: MarkerSymbol {
                style: config.marker.style,
                color: config.marker.color.to_color(),
                size: config.marker.size,
            },
            line,
            fill: FillSymbol {
                style: config.fill.style,
                color: config.fill.color.to_color().with_alpha(config.fill.opacity),
                outline: line,
            },
        }
    }

    /// Chooses the symbol for a geometry by its runtime type.
    pub fn symbol_for(&self, geometry: &Geometry) -> Symbol {
        match geometry.geometry_type() {
            GeometryType::Polygon => Symbol::Fill(self.fill),
            GeometryType::Polyline => Symbol::Line(self.line),
            GeometryType::Point | GeometryType::Multipoint => Symbol::Marker(self.marker),
        }
    }
}
