//! CLI logic for the Cumulus diagram compiler.
//!
//! The binary compiles the bundled declaration ([`showcase`]) into an image
//! file. The library surface exists so the end-to-end tests can drive the
//! same code path as `main`.

pub mod error_adapter;

mod args;
mod config;
mod showcase;

pub use args::Args;

use std::str::FromStr;

use log::info;

use cumulus::{CumulusError, OutputFormat, RenderedFile, Renderer};

/// Runs the full declare-and-render pipeline.
///
/// # Errors
///
/// Returns `CumulusError` for configuration loading errors, declaration
/// errors (`DuplicateIdentity`, `ScopeMismatch`, `UnknownNode`), and render
/// failures (layout, encoding, unsupported format, unwritable path).
pub fn run(args: &Args) -> Result<RenderedFile, CumulusError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let format = args
        .format
        .as_deref()
        .map(OutputFormat::from_str)
        .transpose()
        .map_err(CumulusError::Render)?;

    info!(
        output:? = args.output,
        format:? = args.format;
        "Compiling bundled declaration"
    );

    let graph = showcase::declare(args.output.as_deref(), format)?;

    let renderer = Renderer::new(app_config);
    renderer.render(&graph)
}
