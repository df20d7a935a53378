//! Application configuration for layout and style knobs.
//!
//! Loaded from a TOML file by the CLI, or constructed with `Default` when
//! used programmatically. Graph-level settings (title, direction, output
//! path and format) live on the graph itself; this config covers ambient
//! styling only.

use serde::Deserialize;

use cumulus_core::color::Color;

/// Application configuration, usually deserialized from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    pub style: StyleConfig,
}

/// Layout spacing knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Spacing between sibling elements along the cross axis.
    #[serde(default = "default_horizontal_spacing")]
    pub horizontal_spacing: f32,

    /// Spacing between layout layers along the flow axis.
    #[serde(default = "default_vertical_spacing")]
    pub vertical_spacing: f32,

    /// Padding inside cluster containers.
    #[serde(default = "default_container_padding")]
    pub container_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: default_horizontal_spacing(),
            vertical_spacing: default_vertical_spacing(),
            container_padding: default_container_padding(),
        }
    }
}

fn default_horizontal_spacing() -> f32 {
    56.0
}

fn default_vertical_spacing() -> f32 {
    72.0
}

fn default_container_padding() -> f32 {
    24.0
}

/// Style configuration section.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color of the whole diagram; white when unset.
    #[serde(default)]
    background_color: Option<String>,

    /// Raster scale factor for PNG output; 1.0 when unset.
    #[serde(default)]
    scale: Option<f32>,
}

impl StyleConfig {
    /// Parses the configured background color, if any.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("invalid background color in config: {err}"))
    }

    /// Raster scale factor for PNG output.
    pub fn scale(&self) -> f32 {
        self.scale.unwrap_or(1.0)
    }
}
