//! Committed graphics.

use super::symbol::Symbol;
use crate::geometry::Geometry;

/// A committed sketch: an immutable geometry plus the symbol it is drawn with.
///
/// Fields are private so a graphic cannot change once it has been handed to a
/// presentation surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    geometry: Geometry,
    symbol: Symbol,
}

impl Graphic {
    pub fn new(geometry: Geometry, symbol: Symbol) -> Self {
        Self { geometry, symbol }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// One-line description used by the `list` command.
    pub fn summary(&self) -> String {
        let geometry = &self.geometry;
        format!(
            "{} ({} vertices, {} part{}) drawn with {} symbol",
            geometry.geometry_type(),
            geometry.vertex_count(),
            geometry.part_count(),
            if geometry.part_count() == 1 { "" } else { "s" },
            self.symbol.kind()
        )
    }
}
