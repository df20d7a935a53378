//! Node glyph definitions and the category registry.
//!
//! Every node in a diagram is drawn as a category glyph (a vector icon) with
//! its label beneath; every cluster is drawn as a labeled container box.
//! [`GlyphDefinition`] is the stateless drawing contract, [`Glyph`] the sized
//! instance used during layout, and [`Category`] the registry mapping a
//! category name to its glyph.

use std::{fmt, rc::Rc, str::FromStr};

use crate::{
    color::Color,
    draw::{
        Drawable, LayeredOutput, RenderLayer, StrokeDefinition, TextDefinition,
        text_positioning::LabelPlacement,
    },
    geometry::{Insets, Point, Size},
};

mod client;
mod container;
mod database;
mod function;
mod gateway;
mod queue;
mod service;

pub use client::ClientDefinition;
pub use container::ContainerDefinition;
pub use database::DatabaseDefinition;
pub use function::FunctionDefinition;
pub use gateway::GatewayDefinition;
pub use queue::QueueDefinition;
pub use service::ServiceDefinition;

/// Stateless drawing contract for a glyph shape.
pub trait GlyphDefinition: std::fmt::Debug {
    /// Whether this glyph can contain nested content (cluster containers do,
    /// node glyphs do not).
    fn supports_content(&self) -> bool {
        false
    }

    /// Intersection of the segment `a -> b` with this glyph's boundary, for a
    /// glyph of size `a_size` centered at `a`. Used to trim connectors.
    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        find_rectangle_intersection(a, b, a_size)
    }

    /// Size of the glyph boundary (excluding stroke) needed to contain
    /// `content_size` with `padding`. Content-free glyphs ignore both.
    fn calculate_inner_size(&self, content_size: Size, padding: Insets) -> Size;

    /// Full rendered size including the stroke.
    fn calculate_outer_size(&self, content_size: Size, padding: Insets) -> Size {
        let inner_size = self.calculate_inner_size(content_size, padding);
        let stroke_width = self.stroke().width();
        Size::new(
            inner_size.width() + stroke_width,
            inner_size.height() + stroke_width,
        )
    }

    /// Renders the glyph centered at `position` with the given inner size.
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node>;

    /// Boxed clone, so `Rc<Box<dyn GlyphDefinition>>` stays cloneable.
    fn clone_box(&self) -> Box<dyn GlyphDefinition>;

    /// Overrides the fill color, where the glyph supports one.
    fn set_fill_color(&mut self, _color: Option<Color>) -> Result<(), &'static str> {
        Err("fill color is not supported for this glyph")
    }

    /// Stroke used for the glyph outline.
    fn stroke(&self) -> &Rc<StrokeDefinition>;

    /// Text style used for this glyph's label.
    fn text(&self) -> &Rc<TextDefinition>;

    /// Minimum content size for content-supporting glyphs.
    fn min_content_size(&self) -> Size {
        if self.supports_content() {
            Size::new(10.0, 10.0)
        } else {
            Size::default()
        }
    }

    /// Where this glyph's label is placed.
    fn label_placement(&self) -> LabelPlacement {
        LabelPlacement::BelowGlyph
    }
}

impl Clone for Box<dyn GlyphDefinition> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// The visual category of a node — which glyph it is drawn with.
///
/// Acts as the icon registry: a category name resolves to a drawable glyph
/// definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// An end user or external client (person glyph).
    Client,
    /// A long-running application service (rounded box).
    Service,
    /// A request router or API gateway (diamond).
    Gateway,
    /// An event-triggered function (hexagon).
    Function,
    /// A database (cylinder).
    Database,
    /// A message queue (slatted box).
    Queue,
}

impl Category {
    /// Resolves this category to its glyph definition.
    pub fn definition(&self) -> Rc<Box<dyn GlyphDefinition>> {
        let definition: Box<dyn GlyphDefinition> = match self {
            Self::Client => Box::new(ClientDefinition::new()),
            Self::Service => Box::new(ServiceDefinition::new()),
            Self::Gateway => Box::new(GatewayDefinition::new()),
            Self::Function => Box::new(FunctionDefinition::new()),
            Self::Database => Box::new(DatabaseDefinition::new()),
            Self::Queue => Box::new(QueueDefinition::new()),
        };
        Rc::new(definition)
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Service => "service",
            Self::Gateway => "gateway",
            Self::Function => "function",
            Self::Database => "database",
            Self::Queue => "queue",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "service" => Ok(Self::Service),
            "gateway" => Ok(Self::Gateway),
            "function" => Ok(Self::Function),
            "database" => Ok(Self::Database),
            "queue" => Ok(Self::Queue),
            _ => Err(format!("unknown node category `{s}`")),
        }
    }
}

/// A glyph instance: a definition plus content size and padding.
#[derive(Debug, Clone)]
pub struct Glyph {
    definition: Rc<Box<dyn GlyphDefinition>>,
    content_size: Size,
    padding: Insets,
}

impl Glyph {
    pub fn new(definition: Rc<Box<dyn GlyphDefinition>>) -> Self {
        let content_size = definition.min_content_size();
        Self {
            definition,
            content_size,
            padding: Insets::default(),
        }
    }

    pub(super) fn supports_content(&self) -> bool {
        self.definition.supports_content()
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn label_placement(&self) -> LabelPlacement {
        self.definition.label_placement()
    }

    /// Glyph boundary size excluding stroke.
    pub fn inner_size(&self) -> Size {
        self.definition
            .calculate_inner_size(self.content_size, self.padding)
    }

    /// Full glyph size including stroke.
    pub fn outer_size(&self) -> Size {
        self.definition
            .calculate_outer_size(self.content_size, self.padding)
    }

    /// Grows the content area to at least `content_size`.
    /// Only valid for content-supporting glyphs.
    pub fn expand_content_size_to(&mut self, content_size: Size) -> Result<(), &'static str> {
        if self.supports_content() {
            self.content_size = self.content_size.max(content_size);
            Ok(())
        } else {
            Err("cannot expand content size on content-free glyphs")
        }
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Intersection of the segment `a -> b` with this glyph's boundary.
    pub fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        self.definition.find_intersection(a, b, a_size)
    }

    /// Extra space the glyph shape needs beyond content + padding.
    pub(super) fn calculate_additional_space(&self) -> Size {
        let glyph_size = self.inner_size();
        let content_size = self.content_size();
        let total_padding_size = content_size.add_padding(self.padding);

        Size::new(
            glyph_size.width() - total_padding_size.width(),
            glyph_size.height() - total_padding_size.height(),
        )
        .max(Size::default())
    }

    /// Offset from the glyph's top-left corner to where its content area
    /// begins.
    pub fn content_area_min_point(&self) -> Point {
        let additional_space = self.calculate_additional_space();

        Point::new(
            self.padding.left() + additional_space.width() / 2.0,
            self.padding.top() + additional_space.height() / 2.0,
        )
    }
}

impl Drawable for Glyph {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let size = self.inner_size();
        let node = self.definition.render_to_svg(size, position);
        let layer = if self.supports_content() {
            RenderLayer::Container
        } else {
            RenderLayer::Content
        };
        output.add_to_layer(layer, node);
        output
    }

    fn size(&self) -> Size {
        self.outer_size()
    }
}

/// Intersection of a ray from rectangle center `a` toward `b` with the
/// boundary of the `a_size` rectangle centered at `a`.
fn find_rectangle_intersection(a: Point, b: Point, a_size: Size) -> Point {
    let half_width = a_size.width() / 2.0;
    let half_height = a_size.height() / 2.0;

    let dist = b.sub_point(a);

    let length = dist.hypot();
    if length < 0.001 {
        // Degenerate segment.
        return b;
    }

    let dx_norm = dist.x() / length;
    let dy_norm = dist.y() / length;

    // Parametric distance along the ray to each edge; keep the closest hit
    // that actually lands on the edge segment.
    let t_top = -half_height / dy_norm;
    let t_bottom = half_height / dy_norm;
    let t_left = -half_width / dx_norm;
    let t_right = half_width / dx_norm;

    let mut t = f32::MAX;

    if t_top.is_finite() && t_top > 0.0 {
        let x = dx_norm.mul_add(t_top, a.x());
        if x >= a.x() - half_width && x <= a.x() + half_width {
            t = t_top;
        }
    }

    if t_bottom.is_finite() && t_bottom > 0.0 && t_bottom < t {
        let x = dx_norm.mul_add(t_bottom, a.x());
        if x >= a.x() - half_width && x <= a.x() + half_width {
            t = t_bottom;
        }
    }

    if t_left.is_finite() && t_left > 0.0 && t_left < t {
        let y = dy_norm.mul_add(t_left, a.y());
        if y >= a.y() - half_height && y <= a.y() + half_height {
            t = t_left;
        }
    }

    if t_right.is_finite() && t_right > 0.0 && t_right < t {
        let y = dy_norm.mul_add(t_right, a.y());
        if y >= a.y() - half_height && y <= a.y() + half_height {
            t = t_right;
        }
    }

    if t == f32::MAX || !t.is_finite() {
        return b;
    }

    Point::new(dx_norm.mul_add(t, a.x()), dy_norm.mul_add(t, a.y()))
}
