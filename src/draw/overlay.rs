//! Presentation surface for committed graphics.

use super::graphic::Graphic;

/// Ordered collection that displays committed graphics.
///
/// Graphics are drawn in insertion order (first = bottom, last = top).
pub trait GraphicsPresentation {
    /// Appends a graphic on top of the existing ones.
    fn add(&mut self, graphic: Graphic);

    /// Removes every graphic.
    fn clear(&mut self);

    /// All graphics in draw order.
    fn graphics(&self) -> &[Graphic];

    fn len(&self) -> usize {
        self.graphics().len()
    }

    fn is_empty(&self) -> bool {
        self.graphics().is_empty()
    }
}

/// In-memory graphics overlay.
#[derive(Debug, Clone, Default)]
pub struct GraphicsOverlay {
    /// Graphics in draw order
    graphics: Vec<Graphic>,
}

impl GraphicsOverlay {
    /// Creates an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphicsPresentation for GraphicsOverlay {
    fn add(&mut self, graphic: Graphic) {
        self.graphics.push(graphic);
    }

    fn clear(&mut self) {
        self.graphics.clear();
    }

    fn graphics(&self) -> &[Graphic] {
        &self.graphics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::SymbolSet;
    use crate::geometry::{Geometry, Point};

    #[test]
    fn add_keeps_draw_order() {
        let symbols = SymbolSet::default();
        let mut overlay = GraphicsOverlay::new();
        let first = Geometry::Point(Point::new(1.0, 1.0));
        let second = Geometry::Multipoint(vec![Point::new(2.0, 2.0)]);

        overlay.add(Graphic::new(first.clone(), symbols.symbol_for(&first)));
        overlay.add(Graphic::new(second.clone(), symbols.symbol_for(&second)));

        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay.graphics()[0].geometry(), &first);
        assert_eq!(overlay.graphics()[1].geometry(), &second);

        overlay.clear();
        assert!(overlay.is_empty());
    }
}
