//! Geometry values produced by the sketch editor.
//!
//! These are plain data: construction and editing happen inside the editing
//! engine, and committed geometries are never mutated afterwards.

use std::fmt;

/// A single coordinate pair in map units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Geometry category an editing session produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    Multipoint,
    Polyline,
    Polygon,
}

impl GeometryType {
    /// Human-readable name used in status messages.
    pub fn name(self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::Multipoint => "Multipoint",
            GeometryType::Polyline => "Polyline",
            GeometryType::Polygon => "Polygon",
        }
    }

    /// Minimum number of vertices every part needs to be committable.
    pub fn min_part_len(self) -> usize {
        match self {
            GeometryType::Point | GeometryType::Multipoint => 1,
            GeometryType::Polyline => 2,
            GeometryType::Polygon => 3,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered run of vertices: a polyline path or a polygon ring.
pub type Part = Vec<Point>;

/// A sketched geometry.
///
/// Polylines and polygons are multipart: each part is a path (polyline) or a
/// ring (polygon, where rings after the first describe holes or islands).
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    Multipoint(Vec<Point>),
    Polyline(Vec<Part>),
    Polygon(Vec<Part>),
}

impl Geometry {
    /// Creates an empty geometry of the given type.
    ///
    /// Points have no empty form, so `GeometryType::Point` yields `None`.
    pub fn empty(geometry_type: GeometryType) -> Option<Self> {
        match geometry_type {
            GeometryType::Point => None,
            GeometryType::Multipoint => Some(Geometry::Multipoint(Vec::new())),
            GeometryType::Polyline => Some(Geometry::Polyline(vec![Vec::new()])),
            GeometryType::Polygon => Some(Geometry::Polygon(vec![Vec::new()])),
        }
    }

    /// Runtime type of this geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::Multipoint(_) => GeometryType::Multipoint,
            Geometry::Polyline(_) => GeometryType::Polyline,
            Geometry::Polygon(_) => GeometryType::Polygon,
        }
    }

    /// Total number of vertices across all parts.
    pub fn vertex_count(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::Multipoint(points) => points.len(),
            Geometry::Polyline(parts) | Geometry::Polygon(parts) => {
                parts.iter().map(Vec::len).sum()
            }
        }
    }

    /// Number of parts (1 for point and multipoint geometries).
    pub fn part_count(&self) -> usize {
        match self {
            Geometry::Point(_) | Geometry::Multipoint(_) => 1,
            Geometry::Polyline(parts) | Geometry::Polygon(parts) => parts.len(),
        }
    }

    /// Iterates over every vertex in part order.
    pub fn vertices(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        match self {
            Geometry::Point(point) => Box::new(std::iter::once(point)),
            Geometry::Multipoint(points) => Box::new(points.iter()),
            Geometry::Polyline(parts) | Geometry::Polygon(parts) => {
                Box::new(parts.iter().flatten())
            }
        }
    }

    /// Returns true if the geometry is well-formed enough to commit.
    ///
    /// Rules mirror a sketch-validity check: every coordinate is finite, a
    /// multipoint has at least one point, every polyline path has at least two
    /// vertices and every polygon ring has at least three. A trailing empty
    /// part (one just started and not yet drawn) is ignored.
    pub fn is_sketch_valid(&self) -> bool {
        if !self.vertices().all(Point::is_finite) {
            return false;
        }

        let min = self.geometry_type().min_part_len();
        match self {
            Geometry::Point(_) => true,
            Geometry::Multipoint(points) => points.len() >= min,
            Geometry::Polyline(parts) | Geometry::Polygon(parts) => {
                let parts = finished_parts(parts);
                !parts.is_empty() && parts.iter().all(|part| part.len() >= min)
            }
        }
    }

    /// Copy of the geometry without a trailing empty part.
    pub fn trimmed(&self) -> Geometry {
        match self {
            Geometry::Polyline(parts) => Geometry::Polyline(finished_parts(parts).to_vec()),
            Geometry::Polygon(parts) => Geometry::Polygon(finished_parts(parts).to_vec()),
            other => other.clone(),
        }
    }
}

fn finished_parts(parts: &[Vec<Point>]) -> &[Vec<Point>] {
    match parts.split_last() {
        Some((last, rest)) if last.is_empty() => rest,
        _ => parts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn empty_point_has_no_geometry() {
        assert!(Geometry::empty(GeometryType::Point).is_none());
        assert_eq!(
            Geometry::empty(GeometryType::Polygon),
            Some(Geometry::Polygon(vec![Vec::new()]))
        );
    }

    #[test]
    fn polygon_needs_three_vertices_per_ring() {
        let triangle = Geometry::Polygon(vec![pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])]);
        assert!(triangle.is_sketch_valid());

        let with_bad_hole = Geometry::Polygon(vec![
            pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]),
            pts(&[(1.0, 1.0), (2.0, 1.0)]),
        ]);
        assert!(!with_bad_hole.is_sketch_valid());
    }

    #[test]
    fn trailing_empty_ring_is_ignored() {
        let started = Geometry::Polygon(vec![
            pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]),
            Vec::new(),
        ]);
        assert!(started.is_sketch_valid());
        assert_eq!(started.trimmed().part_count(), 1);

        let only_empty = Geometry::Polyline(vec![Vec::new()]);
        assert!(!only_empty.is_sketch_valid());

        let empty_in_middle = Geometry::Polyline(vec![
            pts(&[(0.0, 0.0), (1.0, 1.0)]),
            Vec::new(),
            pts(&[(2.0, 2.0), (3.0, 3.0)]),
        ]);
        assert!(!empty_in_middle.is_sketch_valid());
        assert_eq!(empty_in_middle.trimmed(), empty_in_middle);
    }

    #[test]
    fn polyline_needs_two_vertices() {
        assert!(!Geometry::Polyline(vec![pts(&[(0.0, 0.0)])]).is_sketch_valid());
        assert!(Geometry::Polyline(vec![pts(&[(0.0, 0.0), (3.0, 4.0)])]).is_sketch_valid());
        assert!(!Geometry::Polyline(Vec::new()).is_sketch_valid());
    }

    #[test]
    fn multipoint_needs_a_point() {
        assert!(!Geometry::Multipoint(Vec::new()).is_sketch_valid());
        assert!(Geometry::Multipoint(pts(&[(5.0, 5.0)])).is_sketch_valid());
    }

    #[test]
    fn non_finite_point_is_invalid() {
        assert!(!Geometry::Point(Point::new(f64::NAN, 0.0)).is_sketch_valid());
        assert!(Geometry::Point(Point::new(-117.19, 34.05)).is_sketch_valid());
    }

    #[test]
    fn vertex_count_spans_parts() {
        let line = Geometry::Polyline(vec![
            pts(&[(0.0, 0.0), (1.0, 1.0)]),
            pts(&[(2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]),
        ]);
        assert_eq!(line.vertex_count(), 5);
        assert_eq!(line.part_count(), 2);
        assert_eq!(Point::new(0.0, 0.0).distance_to(&Point::new(3.0, 4.0)), 5.0);
    }
}
