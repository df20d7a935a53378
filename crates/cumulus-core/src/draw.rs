//! Drawable primitives for Cumulus diagrams.
//!
//! Everything that ends up in the output image goes through this module:
//! node glyphs, cluster containers, edge connectors, and text labels. Each
//! drawable renders itself into a [`LayeredOutput`] so z-ordering stays
//! consistent regardless of the order elements are emitted in.

mod connector;
mod connector_with_label;
pub mod glyph;
mod glyph_with_label;
mod layer;
mod positioned;
mod stroke;
mod text;
mod text_positioning;

pub use connector::{Connector, ConnectorDefinition, ConnectorDrawer};
pub use connector_with_label::ConnectorWithLabel;
pub use glyph::{Category, Glyph, GlyphDefinition};
pub use glyph_with_label::GlyphWithLabel;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use positioned::PositionedDrawable;
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextDefinition};
pub use text_positioning::LabelPlacement;

use crate::geometry::{Point, Size};

/// A visual element that can render itself into layered SVG output.
pub trait Drawable {
    /// Renders this drawable centered at `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// The total size this drawable occupies.
    fn size(&self) -> Size;
}
