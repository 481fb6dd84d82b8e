//! Committed-graphic presentation types.
//!
//! This module defines what a finished sketch turns into:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Symbol`]: marker, line and fill symbols chosen by geometry type
//! - [`Graphic`]: an immutable geometry paired with its symbol
//! - [`GraphicsPresentation`]: the surface committed graphics are added to

pub mod color;
pub mod graphic;
pub mod overlay;
pub mod symbol;

// Re-export commonly used types at module level
pub use color::Color;
pub use graphic::Graphic;
pub use overlay::{GraphicsOverlay, GraphicsPresentation};
pub use symbol::{FillSymbol, LineSymbol, MarkerSymbol, Symbol, SymbolSet};
