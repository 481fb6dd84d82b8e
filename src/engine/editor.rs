//! In-memory geometry editor with per-edit undo/redo history.

use super::{GeometryEditingEngine, HistoryListener, HistoryState};
use crate::geometry::{Geometry, GeometryType, Point};
use crate::sketch::Tool;
use thiserror::Error;

/// Default spacing below which consecutive freehand samples are dropped.
pub const DEFAULT_FREEHAND_MIN_SPACING: f64 = 0.0;

/// Errors returned by direct editing calls on [`VertexEditor`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    #[error("No sketch in progress: select a draw mode first")]
    NotStarted,

    #[error("The {0} tool cannot perform this edit")]
    WrongTool(&'static str),

    #[error("Coordinates must be finite numbers")]
    NonFinite,

    #[error("Trace contains no points")]
    EmptyTrace,

    #[error("{0} geometries have a single part")]
    SinglePart(GeometryType),

    #[error("Vertex {index} does not exist (sketch has {count} vertices)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("No vertex selected")]
    NoSelection,
}

/// Headless implementation of [`GeometryEditingEngine`].
///
/// Every edit snapshots the previous geometry onto the undo stack, so undo and
/// redo restore whole geometries rather than replaying individual operations.
pub struct VertexEditor {
    tool: Tool,
    /// Geometry type of the active session (`None` while idle)
    session: Option<GeometryType>,
    geometry: Option<Geometry>,
    /// Flat vertex index across all parts
    selected: Option<usize>,
    undo_stack: Vec<Option<Geometry>>,
    redo_stack: Vec<Option<Geometry>>,
    /// Maximum undo depth (0 = unlimited)
    history_limit: usize,
    freehand_min_spacing: f64,
    listeners: Vec<HistoryListener>,
    last_history: HistoryState,
}

impl Default for VertexEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexEditor {
    /// Creates an idle editor with unlimited history.
    pub fn new() -> Self {
        Self::with_limits(0, DEFAULT_FREEHAND_MIN_SPACING)
    }

    /// Creates an idle editor with the given history depth and freehand spacing.
    pub fn with_limits(history_limit: usize, freehand_min_spacing: f64) -> Self {
        Self {
            tool: Tool::default(),
            session: None,
            geometry: None,
            selected: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            history_limit,
            freehand_min_spacing: freehand_min_spacing.max(0.0),
            listeners: Vec::new(),
            last_history: HistoryState::default(),
        }
    }

    /// Places a vertex with the vertex tool.
    ///
    /// In a point session the new vertex replaces the point; otherwise it is
    /// appended to the last part. The new vertex becomes the selection.
    pub fn insert_vertex(&mut self, point: Point) -> Result<(), EditError> {
        let geometry_type = self.require_session()?;
        if self.tool != Tool::Vertex {
            return Err(EditError::WrongTool(self.tool.name()));
        }
        if !point.is_finite() {
            return Err(EditError::NonFinite);
        }

        let previous = self.geometry.clone();
        append_points(&mut self.geometry, geometry_type, &[point]);
        self.selected = self
            .geometry
            .as_ref()
            .map(|geometry| geometry.vertex_count() - 1);
        self.record_edit(previous);
        Ok(())
    }

    /// Adds a freehand trace as a single edit.
    ///
    /// Samples closer than the configured spacing to the previously kept
    /// sample are dropped; the first sample is always kept.
    pub fn trace(&mut self, samples: &[Point]) -> Result<(), EditError> {
        let geometry_type = self.require_session()?;
        if self.tool != Tool::Freehand {
            return Err(EditError::WrongTool(self.tool.name()));
        }
        if samples.is_empty() {
            return Err(EditError::EmptyTrace);
        }
        if !samples.iter().all(Point::is_finite) {
            return Err(EditError::NonFinite);
        }

        let mut kept: Vec<Point> = Vec::with_capacity(samples.len());
        for sample in samples {
            match kept.last() {
                Some(last) if last.distance_to(sample) < self.freehand_min_spacing => {}
                _ => kept.push(*sample),
            }
        }

        let previous = self.geometry.clone();
        append_points(&mut self.geometry, geometry_type, &kept);
        self.selected = None;
        self.record_edit(previous);
        log::debug!("Trace added {} of {} samples", kept.len(), samples.len());
        Ok(())
    }

    /// Starts a new part for polyline and polygon sessions.
    ///
    /// Does nothing when the last part is still empty.
    pub fn begin_part(&mut self) -> Result<(), EditError> {
        let geometry_type = self.require_session()?;
        if !matches!(geometry_type, GeometryType::Polyline | GeometryType::Polygon) {
            return Err(EditError::SinglePart(geometry_type));
        }

        let last_part_empty = match &self.geometry {
            Some(Geometry::Polyline(parts)) | Some(Geometry::Polygon(parts)) => {
                parts.last().is_none_or(Vec::is_empty)
            }
            _ => true,
        };
        if last_part_empty {
            return Ok(());
        }

        let previous = self.geometry.clone();
        if let Some(Geometry::Polyline(parts)) | Some(Geometry::Polygon(parts)) =
            &mut self.geometry
        {
            parts.push(Vec::new());
        }
        self.selected = None;
        self.record_edit(previous);
        Ok(())
    }

    /// Selects a vertex by its flat index across all parts.
    pub fn select_vertex(&mut self, index: usize) -> Result<(), EditError> {
        self.require_session()?;
        let count = self.geometry.as_ref().map_or(0, Geometry::vertex_count);
        if index >= count {
            return Err(EditError::IndexOutOfRange { index, count });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Moves the selected vertex.
    pub fn move_selected(&mut self, target: Point) -> Result<(), EditError> {
        self.require_session()?;
        if !target.is_finite() {
            return Err(EditError::NonFinite);
        }
        let index = self.selected.ok_or(EditError::NoSelection)?;

        let previous = self.geometry.clone();
        let Some(geometry) = self.geometry.as_mut() else {
            return Err(EditError::NoSelection);
        };
        let Some((part, offset)) = locate(geometry, index) else {
            return Err(EditError::NoSelection);
        };
        match geometry {
            Geometry::Point(point) => *point = target,
            Geometry::Multipoint(points) => points[offset] = target,
            Geometry::Polyline(parts) | Geometry::Polygon(parts) => parts[part][offset] = target,
        }
        self.record_edit(previous);
        Ok(())
    }

    /// Deletes the selected vertex, dropping its part if it becomes empty.
    pub fn delete_selected(&mut self) -> Result<(), EditError> {
        self.require_session()?;
        let index = self.selected.ok_or(EditError::NoSelection)?;
        let Some((part, offset)) = self.geometry.as_ref().and_then(|g| locate(g, index)) else {
            return Err(EditError::NoSelection);
        };

        let previous = self.geometry.clone();
        if matches!(self.geometry, Some(Geometry::Point(_))) {
            self.geometry = None;
        }
        match &mut self.geometry {
            Some(Geometry::Point(_)) | None => {}
            Some(Geometry::Multipoint(points)) => {
                points.remove(offset);
            }
            Some(Geometry::Polyline(parts)) | Some(Geometry::Polygon(parts)) => {
                parts[part].remove(offset);
                if parts[part].is_empty() && parts.len() > 1 {
                    parts.remove(part);
                }
            }
        }
        self.selected = None;
        self.record_edit(previous);
        Ok(())
    }

    fn require_session(&self) -> Result<GeometryType, EditError> {
        self.session.ok_or(EditError::NotStarted)
    }

    /// Pushes the pre-edit snapshot and invalidates the redo stack.
    fn record_edit(&mut self, previous: Option<Geometry>) {
        self.undo_stack.push(previous);
        if self.history_limit > 0 && self.undo_stack.len() > self.history_limit {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        self.notify_history();
    }

    fn reset_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.notify_history();
    }

    fn notify_history(&mut self) {
        let current = self.history();
        if current == self.last_history {
            return;
        }
        self.last_history = current;
        log::debug!(
            "History changed: can_undo={} can_redo={}",
            current.can_undo,
            current.can_redo
        );
        for listener in &mut self.listeners {
            listener(current);
        }
    }
}

impl GeometryEditingEngine for VertexEditor {
    fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    fn tool(&self) -> Tool {
        self.tool
    }

    fn start(&mut self, geometry_type: GeometryType) {
        self.session = Some(geometry_type);
        self.geometry = None;
        self.selected = None;
        self.reset_history();
    }

    fn stop(&mut self) {
        self.session = None;
        self.geometry = None;
        self.selected = None;
        self.reset_history();
    }

    fn is_started(&self) -> bool {
        self.session.is_some()
    }

    fn clear_geometry(&mut self) {
        if self.session.is_none() || self.geometry.is_none() {
            return;
        }
        let previous = self.geometry.take();
        self.selected = None;
        self.record_edit(previous);
    }

    fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn undo(&mut self) {
        let Some(previous) = self.undo_stack.pop() else {
            return;
        };
        let current = std::mem::replace(&mut self.geometry, previous);
        self.redo_stack.push(current);
        self.selected = None;
        self.notify_history();
    }

    fn redo(&mut self) {
        let Some(next) = self.redo_stack.pop() else {
            return;
        };
        let current = std::mem::replace(&mut self.geometry, next);
        self.undo_stack.push(current);
        self.selected = None;
        self.notify_history();
    }

    fn is_valid(&self, geometry: &Geometry) -> bool {
        geometry.is_sketch_valid()
    }

    fn subscribe_history(&mut self, listener: HistoryListener) {
        self.listeners.push(listener);
    }
}

/// Appends points to a geometry of the session type, creating it if needed.
fn append_points(geometry: &mut Option<Geometry>, geometry_type: GeometryType, points: &[Point]) {
    let Some(last) = points.last() else {
        return;
    };
    if geometry_type == GeometryType::Point {
        *geometry = Some(Geometry::Point(*last));
        return;
    }

    let target = geometry.get_or_insert_with(|| {
        Geometry::empty(geometry_type).unwrap_or(Geometry::Multipoint(Vec::new()))
    });
    match target {
        Geometry::Point(point) => *point = *last,
        Geometry::Multipoint(existing) => existing.extend_from_slice(points),
        Geometry::Polyline(parts) | Geometry::Polygon(parts) => {
            if parts.is_empty() {
                parts.push(Vec::new());
            }
            if let Some(part) = parts.last_mut() {
                part.extend_from_slice(points);
            }
        }
    }
}

/// Maps a flat vertex index to `(part, offset)`.
fn locate(geometry: &Geometry, index: usize) -> Option<(usize, usize)> {
    match geometry {
        Geometry::Point(_) => (index == 0).then_some((0, 0)),
        Geometry::Multipoint(points) => (index < points.len()).then_some((0, index)),
        Geometry::Polyline(parts) | Geometry::Polygon(parts) => {
            let mut remaining = index;
            for (part_index, part) in parts.iter().enumerate() {
                if remaining < part.len() {
                    return Some((part_index, remaining));
                }
                remaining -= part.len();
            }
            None
        }
    }
}
