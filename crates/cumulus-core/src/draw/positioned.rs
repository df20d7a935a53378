//! `PositionedDrawable`: a drawable pinned to an absolute position.

use crate::{
    draw::{Drawable, GlyphWithLabel, LayeredOutput},
    geometry::{Bounds, Point, Size},
};

/// A drawable together with its absolute center position.
#[derive(Debug, Clone)]
pub struct PositionedDrawable<D: Drawable> {
    drawable: D,
    position: Point,
}

impl<D: Drawable> PositionedDrawable<D> {
    /// Wraps a drawable at position zero.
    pub fn new(drawable: D) -> Self {
        Self {
            drawable,
            position: Point::default(),
        }
    }

    /// Sets the position (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Renders at the stored position.
    pub fn render_to_layers(&self) -> LayeredOutput {
        self.drawable.render_to_layers(self.position)
    }

    /// Bounds of this drawable around its position.
    pub fn bounds(&self) -> Bounds {
        self.position.to_bounds(self.drawable.size())
    }

    pub fn inner(&self) -> &D {
        &self.drawable
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl<'a> PositionedDrawable<GlyphWithLabel<'a>> {
    /// Absolute bounds of the embedded content area, if an inner content
    /// size was set on the composite.
    pub fn content_bounds(&self) -> Option<Bounds> {
        let content_size = self.drawable.content_size()?;
        let outer_bounds = self.bounds();
        let content_min_point = outer_bounds
            .min_point()
            .add_point(self.drawable.content_min_point());
        Some(Bounds::new_from_top_left(content_min_point, content_size))
    }
}

impl<D: Drawable> Drawable for PositionedDrawable<D> {
    fn render_to_layers(&self, _position: Point) -> LayeredOutput {
        // The stored position wins over the passed one.
        self.render_to_layers()
    }

    fn size(&self) -> Size {
        self.drawable.size()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::{Glyph, Text, TextDefinition, glyph::Category};
    use crate::geometry::Size;

    #[test]
    fn test_default_position_is_zero() {
        let text_def = TextDefinition::default();
        let positioned = PositionedDrawable::new(Text::new(&text_def, "Poller"));

        assert!(positioned.position().is_zero());
    }

    #[test]
    fn test_with_position() {
        let text_def = TextDefinition::default();
        let positioned = PositionedDrawable::new(Text::new(&text_def, "Poller"))
            .with_position(Point::new(120.0, 60.0));

        assert_approx_eq!(f32, positioned.position().x(), 120.0);
        assert_approx_eq!(f32, positioned.position().y(), 60.0);
    }

    #[test]
    fn test_bounds_centered_on_position() {
        let text_def = TextDefinition::default();
        let text = Text::new(&text_def, "Notifier");
        let size = text.size();

        let position = Point::new(100.0, 50.0);
        let positioned = PositionedDrawable::new(text).with_position(position);

        let bounds = positioned.bounds();
        assert_approx_eq!(f32, bounds.min_x(), position.x() - size.width() / 2.0);
        assert_approx_eq!(f32, bounds.max_y(), position.y() + size.height() / 2.0);
    }

    #[test]
    fn test_trait_render_ignores_passed_position() {
        let text_def = TextDefinition::default();
        let a = PositionedDrawable::new(Text::new(&text_def, "same"))
            .with_position(Point::new(10.0, 10.0));
        let b = PositionedDrawable::new(Text::new(&text_def, "same"))
            .with_position(Point::new(10.0, 10.0));

        let via_trait: String = Drawable::render_to_layers(&a, Point::new(999.0, 999.0))
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();
        let direct: String = b
            .render_to_layers()
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert_eq!(via_trait, direct);
    }

    #[test]
    fn test_content_bounds_requires_inner_content() {
        let glyph = Glyph::new(Category::Service.definition());
        let composite = GlyphWithLabel::new(glyph, None);
        let positioned = PositionedDrawable::new(composite).with_position(Point::new(50.0, 50.0));

        assert!(positioned.content_bounds().is_none());
    }

    #[test]
    fn test_content_bounds_inside_outer_bounds() {
        use std::rc::Rc;

        use crate::draw::glyph::{ContainerDefinition, GlyphDefinition};

        let definition: Box<dyn GlyphDefinition> = Box::new(ContainerDefinition::new());
        let glyph = Glyph::new(Rc::new(definition));
        let text_def = TextDefinition::default();
        let mut composite = GlyphWithLabel::new(glyph, Some(Text::new(&text_def, "Data")));
        composite
            .set_inner_content_size(Size::new(200.0, 100.0))
            .unwrap();

        let positioned = PositionedDrawable::new(composite).with_position(Point::new(150.0, 90.0));

        let outer = positioned.bounds();
        let content = positioned.content_bounds().expect("content size was set");

        assert_approx_eq!(f32, content.width(), 200.0);
        assert_approx_eq!(f32, content.height(), 100.0);
        assert!(content.min_y() > outer.min_y());
        assert!(content.max_x() <= outer.max_x());
        assert!(content.max_y() <= outer.max_y());
    }
}
