//! Sketch commit errors.

use crate::geometry::GeometryType;
use thiserror::Error;

/// Recoverable failures reported to the user when a commit is refused.
///
/// Neither variant ends the session: the user fixes the sketch (or selects a
/// draw mode) and commits again.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SketchError {
    /// Commit attempted with no in-progress geometry.
    #[error("No geometry to add: select a draw mode and sketch first")]
    NoGeometry,

    /// Commit attempted on a geometry that fails its type's validity check.
    #[error("{}", invalid_message(.0))]
    InvalidGeometry(GeometryType),
}

fn invalid_message(geometry_type: &GeometryType) -> &'static str {
    match geometry_type {
        GeometryType::Point => "Point is invalid: place the point at a valid location",
        GeometryType::Multipoint => "Multipoint is invalid: add at least one point",
        GeometryType::Polyline => "Polyline is invalid: each line needs at least two vertices",
        GeometryType::Polygon => "Polygon is invalid: each ring needs at least three vertices",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_messages_are_type_specific() {
        let messages: Vec<String> = [
            GeometryType::Point,
            GeometryType::Multipoint,
            GeometryType::Polyline,
            GeometryType::Polygon,
        ]
        .into_iter()
        .map(|t| SketchError::InvalidGeometry(t).to_string())
        .collect();

        for (i, message) in messages.iter().enumerate() {
            for other in &messages[i + 1..] {
                assert_ne!(message, other);
            }
        }
        assert!(messages[3].starts_with("Polygon"));
    }
}
