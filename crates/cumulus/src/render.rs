//! The render stage: layout, export, and the single output file write.

use std::{
    fmt::{self, Display},
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::{debug, info};

use crate::{
    config::AppConfig,
    error::CumulusError,
    export::{raster, svg::SvgRenderer},
    graph::Graph,
    layout::Engine,
};

/// Output image container format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Raster PNG (default).
    #[default]
    Png,
    /// Vector SVG.
    Svg,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            _ => Err(format!(
                "unsupported output format `{s}`, valid values: png, svg"
            )),
        }
    }
}

impl From<OutputFormat> for &'static str {
    fn from(val: OutputFormat) -> Self {
        match val {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// The rendered output file: where it was written and in which format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    path: PathBuf,
    format: OutputFormat,
}

impl RenderedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Renders frozen graphs to image files.
///
/// # Examples
///
/// ```no_run
/// use cumulus::{GraphBuilder, Renderer};
/// use cumulus_core::draw::Category;
///
/// let mut builder = GraphBuilder::new("Example")
///     .with_output_path("example.png");
/// builder.node("solo", Category::Service)?;
/// let graph = builder.finish()?;
///
/// let rendered = Renderer::default().render(&graph)?;
/// println!("wrote {}", rendered.path().display());
/// # Ok::<(), cumulus::CumulusError>(())
/// ```
#[derive(Default)]
pub struct Renderer {
    config: AppConfig,
}

impl Renderer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Runs layout and export, overwriting the graph's output path.
    ///
    /// The graph is only borrowed: rendering never mutates the declaration.
    ///
    /// # Errors
    ///
    /// Returns [`CumulusError::Render`] if layout fails, encoding fails, or
    /// the output path is not writable. No file is written on failure.
    pub fn render(&self, graph: &Graph) -> Result<RenderedFile, CumulusError> {
        info!(
            title = graph.title(),
            direction = graph.direction().to_string(),
            format = graph.format().to_string();
            "Rendering diagram"
        );

        let engine = Engine::new(&self.config.layout);
        let scene = engine.calculate(graph)?;
        debug!(nodes = scene.nodes_count(); "Layout complete");

        let background = self
            .config
            .style
            .background_color()
            .map_err(CumulusError::Render)?;
        let document = SvgRenderer::new(background).render_document(graph, &scene)?;
        let svg_string = document.to_string();

        let bytes = match graph.format() {
            OutputFormat::Svg => svg_string.into_bytes(),
            OutputFormat::Png => raster::svg_to_png(&svg_string, self.config.style.scale())?,
        };

        let path = graph.output_path();
        fs::write(path, bytes).map_err(|err| {
            CumulusError::Render(format!(
                "cannot write output file `{}`: {err}",
                path.display()
            ))
        })?;

        info!(path = path.display().to_string(); "Diagram written");
        Ok(RenderedFile {
            path: path.to_path_buf(),
            format: graph.format(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);

        let err = "gif".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("unsupported output format"));
        assert!(err.contains("gif"));
    }

    #[test]
    fn test_format_display_roundtrip() {
        for format in [OutputFormat::Png, OutputFormat::Svg] {
            let parsed: OutputFormat = format.to_string().parse().unwrap();
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_default_format_is_png() {
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
    }
}
