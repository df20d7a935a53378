//! Stroke definitions for connector and glyph outlines.
//!
//! Edges in a Cumulus graph carry three line styles (solid, dashed, dotted)
//! plus a bold flag; the bold flag maps to stroke width rather than a
//! separate style. The [`apply_stroke!`](crate::apply_stroke!) macro applies
//! a complete [`StrokeDefinition`] to any SVG element.

use std::str::FromStr;

use crate::color::Color;

/// Line pattern of a stroke.
///
/// Maps onto the SVG `stroke-dasharray` attribute: `Solid` emits no
/// dasharray, `Dashed` emits `"6,4"`, `Dotted` emits `"2,3"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeStyle {
    /// Continuous line (default).
    #[default]
    Solid,
    /// Dashed line, 6px dash / 4px gap.
    Dashed,
    /// Dotted line, 2px dot / 3px gap.
    Dotted,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value, or `None` for solid lines.
    pub fn to_svg_value(&self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("6,4"),
            Self::Dotted => Some("2,3"),
        }
    }
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ => Err(format!(
                "invalid line style `{s}`, valid values: solid, dashed, dotted"
            )),
        }
    }
}

/// A complete stroke definition: color, width, and line pattern.
///
/// # Examples
///
/// ```
/// use cumulus_core::draw::{StrokeDefinition, StrokeStyle};
/// use cumulus_core::color::Color;
///
/// let stroke = StrokeDefinition::dashed(Color::new("red").unwrap(), 1.5);
/// assert_eq!(*stroke.style(), StrokeStyle::Dashed);
/// ```
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Convenience constructor for a solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Convenience constructor for a dashed stroke.
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Convenience constructor for a dotted stroke.
    pub fn dotted(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dotted);
        stroke
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.5,
            style: StrokeStyle::default(),
        }
    }
}

/// Applies all stroke attributes of a [`StrokeDefinition`] to an SVG element.
///
/// # Examples
///
/// ```
/// use cumulus_core::draw::StrokeDefinition;
/// use cumulus_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new().set("x1", 0).set("y1", 0);
/// let line = cumulus_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.5);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.5);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed);

        let dotted = StrokeDefinition::dotted(color, 1.0);
        assert_eq!(*dotted.style(), StrokeStyle::Dotted);
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::default();
        stroke.set_color(Color::new("green").unwrap());
        stroke.set_width(3.0);
        stroke.set_style(StrokeStyle::Dotted);

        assert_eq!(stroke.color().to_string(), "green");
        assert_eq!(stroke.width(), 3.0);
        assert_eq!(*stroke.style(), StrokeStyle::Dotted);
    }

    #[test]
    fn test_style_dasharray_values() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("6,4"));
        assert_eq!(StrokeStyle::Dotted.to_svg_value(), Some("2,3"));
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("solid".parse::<StrokeStyle>().unwrap(), StrokeStyle::Solid);
        assert_eq!(
            "dashed".parse::<StrokeStyle>().unwrap(),
            StrokeStyle::Dashed
        );
        assert_eq!(
            "dotted".parse::<StrokeStyle>().unwrap(),
            StrokeStyle::Dotted
        );

        let err = "wavy".parse::<StrokeStyle>().unwrap_err();
        assert!(err.contains("invalid line style"));
    }
}
