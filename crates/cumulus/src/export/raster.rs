//! PNG rasterization of the rendered SVG document.

use log::debug;

use crate::export::Error;

/// Rasterizes an SVG string to PNG bytes at the given scale factor.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the SVG cannot be parsed, the pixmap cannot
/// be allocated, or PNG encoding fails.
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, Error> {
    let mut options = usvg::Options::default();
    // Text rendering uses whatever fonts the host has; label measurement
    // already went through the same font system.
    options.fontdb_mut().load_system_fonts();
    options.font_family = "sans-serif".to_string();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| Error::Encode(format!("failed to parse rendered SVG: {err}")))?;

    let size = tree.size();
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;

    debug!(width_px, height_px, scale; "Rasterizing SVG");

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px)
        .ok_or_else(|| Error::Encode("failed to allocate pixmap for rasterization".to_string()))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|err| Error::Encode(format!("failed to encode PNG: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_svg_to_png_produces_png_signature() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10" width="10" height="10"><rect width="10" height="10" fill="black"/></svg>"#;
        let bytes = svg_to_png(svg, 1.0).unwrap();
        assert!(bytes.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn test_scale_grows_the_image() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10" width="10" height="10"><rect width="10" height="10" fill="black"/></svg>"#;
        let small = svg_to_png(svg, 1.0).unwrap();
        let large = svg_to_png(svg, 4.0).unwrap();
        assert!(large.len() >= small.len());
    }

    #[test]
    fn test_invalid_svg_is_an_encode_error() {
        let result = svg_to_png("this is not svg", 1.0);
        assert!(matches!(result, Err(Error::Encode(_))));
    }
}
