//! Label placement relative to glyphs and containers.

use crate::geometry::{Insets, Point, Size};

const BELOW_GLYPH_LABEL_GAP: f32 = 6.0;

/// Where a label sits relative to its drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Label rendered inside the drawable, at the top of its content area.
    /// Used by cluster containers.
    InContainer,
    /// Label rendered beneath the drawable with a gap.
    /// Used by node glyphs.
    BelowGlyph,
}

impl LabelPlacement {
    /// Position of the label relative to the drawable's total position.
    pub fn label_position(
        &self,
        total_position: Point,
        glyph_size: Size,
        label_size: Size,
        content_min_offset: Point,
    ) -> Point {
        let total_size = self.total_size(glyph_size, label_size);

        match self {
            Self::InContainer => {
                let bounds = total_position.to_bounds(total_size);
                total_position
                    .with_y(bounds.min_y() + content_min_offset.y() + label_size.height() / 2.0)
            }
            Self::BelowGlyph => {
                let label_y = total_position.y() + (total_size.height() - label_size.height()) / 2.0;
                total_position.with_y(label_y)
            }
        }
    }

    /// Total size needed to contain the drawable and its label.
    pub fn total_size(&self, glyph_size: Size, label_size: Size) -> Size {
        match self {
            // Container labels live inside the container.
            Self::InContainer => glyph_size,
            Self::BelowGlyph => {
                if label_size.is_zero() {
                    return glyph_size;
                }

                let label_with_gap =
                    label_size.add_padding(Insets::new(BELOW_GLYPH_LABEL_GAP, 0.0, 0.0, 0.0));
                glyph_size.merge_vertical(label_with_gap)
            }
        }
    }

    /// Whether the label is counted into the drawable's content size.
    pub fn label_affects_content(&self) -> bool {
        match self {
            Self::InContainer => true,
            Self::BelowGlyph => false,
        }
    }

    /// Minimum point where embedded content (excluding the label) starts.
    pub fn content_min_point(&self, base_point: Point, label_size: Size) -> Point {
        match self {
            Self::InContainer => base_point.with_y(base_point.y() + label_size.height()),
            Self::BelowGlyph => base_point,
        }
    }

    /// Position of the glyph itself within the total (glyph + label) area.
    pub fn glyph_position(
        &self,
        total_position: Point,
        glyph_size: Size,
        label_size: Size,
    ) -> Point {
        match self {
            Self::InContainer => total_position,
            Self::BelowGlyph => {
                let total_size = self.total_size(glyph_size, label_size);
                let glyph_y = total_position.y() - (total_size.height() - glyph_size.height()) / 2.0;
                total_position.with_y(glyph_y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_container_total_size_is_glyph_size() {
        let placement = LabelPlacement::InContainer;
        let glyph = Size::new(200.0, 120.0);
        let label = Size::new(50.0, 14.0);

        assert_eq!(placement.total_size(glyph, label), glyph);
    }

    #[test]
    fn test_below_glyph_total_size_stacks_label() {
        let placement = LabelPlacement::BelowGlyph;
        let glyph = Size::new(56.0, 56.0);
        let label = Size::new(40.0, 14.0);

        let total = placement.total_size(glyph, label);
        assert_eq!(total.width(), 56.0);
        // glyph (56) + gap (6) + label (14)
        assert_eq!(total.height(), 76.0);
    }

    #[test]
    fn test_below_glyph_wide_label_widens_total() {
        let placement = LabelPlacement::BelowGlyph;
        let glyph = Size::new(56.0, 56.0);
        let label = Size::new(90.0, 14.0);

        assert_eq!(placement.total_size(glyph, label).width(), 90.0);
    }

    #[test]
    fn test_below_glyph_zero_label() {
        let placement = LabelPlacement::BelowGlyph;
        let glyph = Size::new(56.0, 56.0);

        assert_eq!(placement.total_size(glyph, Size::default()), glyph);
    }

    #[test]
    fn test_label_affects_content() {
        assert!(LabelPlacement::InContainer.label_affects_content());
        assert!(!LabelPlacement::BelowGlyph.label_affects_content());
    }

    #[test]
    fn test_content_min_point_offsets_for_container_label() {
        let base = Point::new(12.0, 20.0);
        let label = Size::new(60.0, 16.0);

        let in_container = LabelPlacement::InContainer.content_min_point(base, label);
        assert_eq!(in_container, Point::new(12.0, 36.0));

        let below = LabelPlacement::BelowGlyph.content_min_point(base, label);
        assert_eq!(below, base);
    }

    #[test]
    fn test_glyph_position_below_glyph_shifts_up() {
        let placement = LabelPlacement::BelowGlyph;
        let total_position = Point::new(100.0, 100.0);
        let glyph = Size::new(50.0, 40.0);
        let label = Size::new(30.0, 10.0);

        // total height = 40 + 6 + 10 = 56; shift = (56 - 40) / 2 = 8
        let position = placement.glyph_position(total_position, glyph, label);
        assert_eq!(position, Point::new(100.0, 92.0));
    }

    #[test]
    fn test_glyph_position_in_container_unchanged() {
        let placement = LabelPlacement::InContainer;
        let total_position = Point::new(100.0, 100.0);
        assert_eq!(
            placement.glyph_position(total_position, Size::new(10.0, 10.0), Size::new(5.0, 5.0)),
            total_position
        );
    }
}
