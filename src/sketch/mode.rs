//! Draw mode selection.

use super::tool::Tool;
use crate::geometry::GeometryType;
use std::fmt;
use std::str::FromStr;

/// User-selected category of geometry being sketched.
///
/// The mode decides both the geometry type the engine builds and the tool it
/// uses to build it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    Point,
    Multipoint,
    Polyline,
    Polygon,
    FreehandPolyline,
    FreehandPolygon,
}

impl DrawMode {
    /// Every mode, in toolbar order.
    pub const ALL: [DrawMode; 6] = [
        DrawMode::Point,
        DrawMode::Multipoint,
        DrawMode::Polyline,
        DrawMode::Polygon,
        DrawMode::FreehandPolyline,
        DrawMode::FreehandPolygon,
    ];

    /// Geometry type produced in this mode.
    pub fn geometry_type(self) -> GeometryType {
        match self {
            DrawMode::Point => GeometryType::Point,
            DrawMode::Multipoint => GeometryType::Multipoint,
            DrawMode::Polyline | DrawMode::FreehandPolyline => GeometryType::Polyline,
            DrawMode::Polygon | DrawMode::FreehandPolygon => GeometryType::Polygon,
        }
    }

    /// Interaction tool for this mode.
    pub fn tool(self) -> Tool {
        match self {
            DrawMode::FreehandPolyline | DrawMode::FreehandPolygon => Tool::Freehand,
            _ => Tool::Vertex,
        }
    }

    /// Name shown in the status message ("Current selection: ...").
    pub fn label(self) -> &'static str {
        match self {
            DrawMode::Point => "Point",
            DrawMode::Multipoint => "Multipoint",
            DrawMode::Polyline => "Polyline",
            DrawMode::Polygon => "Polygon",
            DrawMode::FreehandPolyline => "FreehandPolyline",
            DrawMode::FreehandPolygon => "FreehandPolygon",
        }
    }

    /// Kebab-case identifier accepted on the command line.
    pub fn id(self) -> &'static str {
        match self {
            DrawMode::Point => "point",
            DrawMode::Multipoint => "multipoint",
            DrawMode::Polyline => "polyline",
            DrawMode::Polygon => "polygon",
            DrawMode::FreehandPolyline => "freehand-polyline",
            DrawMode::FreehandPolygon => "freehand-polygon",
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DrawMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        DrawMode::ALL
            .into_iter()
            .find(|mode| mode.id() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown draw mode '{}' (expected one of: {})",
                    s,
                    DrawMode::ALL.map(DrawMode::id).join(", ")
                )
            })
    }
}
