//! Glyph-with-label composite drawable.
//!
//! Pairs a [`Glyph`] with its label [`Text`]: node glyphs carry the label
//! beneath them, cluster containers carry it inside at the top. Size
//! calculations account for the label either way.

use crate::{
    draw::{Drawable, Glyph, LayeredOutput, Text, text_positioning::LabelPlacement},
    geometry::{Point, Size},
};

/// A glyph plus an optional label.
#[derive(Debug, Clone)]
pub struct GlyphWithLabel<'a> {
    glyph: Glyph,
    label: Option<Text<'a>>,
    placement: LabelPlacement,
    // Pure embedded content size (without the label), when set.
    inner_content_size: Option<Size>,
}

impl<'a> GlyphWithLabel<'a> {
    /// Creates the composite. For container glyphs the content area expands
    /// to fit the label.
    pub fn new(glyph: Glyph, label: Option<Text<'a>>) -> Self {
        let placement = glyph.label_placement();
        let mut instance = Self {
            glyph,
            label,
            placement,
            inner_content_size: None,
        };
        if instance.label.is_some() && instance.placement.label_affects_content() {
            let label_size = instance.label_size();
            instance
                .glyph
                .expand_content_size_to(label_size)
                .expect("container glyphs support content");
        }
        instance
    }

    /// Sets the embedded content size (member layout of a container),
    /// accounting for the label header.
    pub fn set_inner_content_size(&mut self, size: Size) -> Result<(), &'static str> {
        if !self.glyph.supports_content() {
            return Err("cannot set inner content size on content-free glyphs");
        }

        self.inner_content_size = Some(size);

        let label_size = self.label_size();
        let total = Size::new(
            size.width().max(label_size.width()),
            label_size.height() + size.height(),
        );
        self.glyph
            .expand_content_size_to(total)
            .expect("glyph supports content at this point");

        if !size.is_zero() {
            // The label header eats into the top padding.
            let current_padding = self.glyph.padding();
            let adjusted_top = (current_padding.top() - label_size.height()).max(0.0);
            self.glyph.set_padding(current_padding.with_top(adjusted_top));
        }

        Ok(())
    }

    /// Size of the label, or zero without one.
    pub fn label_size(&self) -> Size {
        self.label.as_ref().map(|t| t.size()).unwrap_or_default()
    }

    /// Minimum point where embedded content (excluding the label) starts,
    /// relative to the top-left corner.
    pub fn content_min_point(&self) -> Point {
        let base = self.glyph.content_area_min_point();
        let label_size = self.label_size();
        self.placement.content_min_point(base, label_size)
    }

    /// The embedded content size, if one was set.
    pub fn content_size(&self) -> Option<Size> {
        self.inner_content_size
    }

    /// Intersection of the segment `a -> b` with the glyph boundary, sized
    /// to this composite's total size.
    pub fn find_intersection(&self, a: Point, b: Point) -> Point {
        self.glyph.find_intersection(a, b, self.size())
    }

    fn label_position(&self, total_position: Point) -> Point {
        if self.label.is_none() {
            return Point::default();
        }

        let glyph_size = self.glyph.inner_size();
        let label_size = self.label_size();

        self.placement.label_position(
            total_position,
            glyph_size,
            label_size,
            self.glyph.content_area_min_point(),
        )
    }
}

impl<'a> Drawable for GlyphWithLabel<'a> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let glyph_size = self.glyph.inner_size();
        let label_size = self.label_size();
        let glyph_position = self
            .placement
            .glyph_position(position, glyph_size, label_size);

        output.merge(self.glyph.render_to_layers(glyph_position));

        if let Some(label) = &self.label {
            let label_position = self.label_position(position);
            output.merge(label.render_to_layers(label_position));
        }

        output
    }

    fn size(&self) -> Size {
        let glyph_size = self.glyph.outer_size();
        let label_size = self.label_size();
        self.placement.total_size(glyph_size, label_size)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::draw::{
        TextDefinition,
        glyph::{Category, ContainerDefinition, GlyphDefinition},
    };

    fn container_glyph() -> Glyph {
        let definition: Box<dyn GlyphDefinition> = Box::new(ContainerDefinition::new());
        Glyph::new(Rc::new(definition))
    }

    fn node_glyph() -> Glyph {
        Glyph::new(Category::Service.definition())
    }

    #[test]
    fn test_node_label_renders_below() {
        let glyph = node_glyph();
        let glyph_only_size = glyph.outer_size();

        let text_def = TextDefinition::default();
        let label = Text::new(&text_def, "Subscriptions");

        let composite = GlyphWithLabel::new(glyph, Some(label));
        let total = composite.size();

        assert!(total.height() > glyph_only_size.height());
    }

    #[test]
    fn test_container_label_expands_content() {
        let glyph = container_glyph();
        let bare_size = GlyphWithLabel::new(container_glyph(), None).size();

        let text_def = TextDefinition::default();
        let label = Text::new(&text_def, "A fairly long cluster label");

        let composite = GlyphWithLabel::new(glyph, Some(label));
        assert!(composite.size().width() >= bare_size.width());
    }

    #[test]
    fn test_no_label_size_matches_glyph() {
        let glyph = node_glyph();
        let outer = glyph.outer_size();
        let composite = GlyphWithLabel::new(glyph, None);

        assert_eq!(composite.label_size(), Size::default());
        assert_eq!(composite.size(), outer);
        assert!(composite.content_size().is_none());
    }

    #[test]
    fn test_set_inner_content_size_on_container() {
        let text_def = TextDefinition::default();
        let label = Text::new(&text_def, "Workers");
        let mut composite = GlyphWithLabel::new(container_glyph(), Some(label));

        let before = composite.size();
        let inner = Size::new(300.0, 140.0);
        composite
            .set_inner_content_size(inner)
            .expect("containers accept content");

        assert_eq!(composite.content_size(), Some(inner));
        let after = composite.size();
        assert!(after.width() > before.width());
        assert!(after.height() > before.height());
    }

    #[test]
    fn test_set_inner_content_size_rejected_for_node_glyphs() {
        let text_def = TextDefinition::default();
        let label = Text::new(&text_def, "DB");
        let mut composite = GlyphWithLabel::new(node_glyph(), Some(label));

        assert!(composite.set_inner_content_size(Size::new(50.0, 50.0)).is_err());
        assert!(composite.content_size().is_none());
    }

    #[test]
    fn test_content_min_point_clears_container_label() {
        let text_def = TextDefinition::default();
        let label_height = Text::new(&text_def, "Data Layer").size().height();
        let label = Text::new(&text_def, "Data Layer");

        let with_label = GlyphWithLabel::new(container_glyph(), Some(label));

        // Embedded content must start below the label header.
        assert!(with_label.content_min_point().y() >= label_height);
    }

    #[test]
    fn test_render_to_layers_nonempty() {
        let text_def = TextDefinition::default();

        let node = GlyphWithLabel::new(node_glyph(), Some(Text::new(&text_def, "API")));
        assert!(!node.render_to_layers(Point::new(50.0, 50.0)).is_empty());

        let container = GlyphWithLabel::new(container_glyph(), Some(Text::new(&text_def, "Api")));
        assert!(!container.render_to_layers(Point::new(50.0, 50.0)).is_empty());

        let unlabeled = GlyphWithLabel::new(node_glyph(), None);
        assert!(!unlabeled.render_to_layers(Point::new(50.0, 50.0)).is_empty());
    }

    #[test]
    fn test_find_intersection_delegates_to_glyph() {
        let text_def = TextDefinition::default();
        let composite = GlyphWithLabel::new(node_glyph(), Some(Text::new(&text_def, "Edge")));
        let total = composite.size();

        let center = Point::new(100.0, 100.0);
        let target = Point::new(300.0, 100.0);

        let trimmed = composite.find_intersection(center, target);
        // Right edge of the total bounding box.
        assert!((trimmed.x() - (center.x() + total.width() / 2.0)).abs() < 0.01);
    }
}
