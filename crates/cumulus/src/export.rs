//! Export: encoding a laid-out scene into image bytes.
//!
//! # Pipeline Position
//!
//! ```text
//! Declaration (builder)
//!     ↓ finish
//! Graph
//!     ↓ structure + layout
//! Scene (absolute positions)
//!     ↓ export (this module)
//! SVG document → optional PNG rasterization → output file
//! ```
//!
//! The [`svg`] module assembles the SVG document in memory; the [`raster`]
//! module encodes it to PNG. Failures surface as [`Error`], which converts
//! into [`CumulusError::Render`] at the crate boundary.
//!
//! [`CumulusError::Render`]: crate::CumulusError::Render

pub mod raster;
pub mod svg;

/// Errors that can occur while encoding a scene.
///
/// Encoding is fully in-memory; writing the output file happens in the
/// render stage, so there is no I/O here.
#[derive(Debug)]
pub enum Error {
    /// A rendering or encoding failure described by `message`.
    Encode(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
