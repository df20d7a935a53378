//! Cumulus — a declarative cloud-architecture diagram compiler.
//!
//! A diagram is declared as a graph of categorized nodes, nested clusters,
//! and styled directed edges, then compiled in one shot into a static image:
//! layout via a layered graph-drawing algorithm, drawing as SVG, optional
//! rasterization to PNG.
//!
//! # Examples
//!
//! ```no_run
//! use cumulus::{Direction, EdgeStyle, GraphBuilder, Renderer};
//! use cumulus_core::{color::Color, draw::Category};
//!
//! let mut builder = GraphBuilder::new("Order Service")
//!     .with_direction(Direction::LeftRight)
//!     .with_output_path("order_service.png");
//!
//! let users = builder.node("Users", Category::Client)?;
//!
//! let mut api = None;
//! let mut db = None;
//! builder.cluster("Backend", |b| {
//!     api = Some(b.node("API", Category::Service)?);
//!     db = Some(b.node("Orders DB", Category::Database)?);
//!     Ok(())
//! })?;
//!
//! builder.edge(users, api.unwrap(), EdgeStyle::new())?;
//! builder.edge(
//!     api.unwrap(),
//!     db.unwrap(),
//!     EdgeStyle::new().with_color(Color::new("purple").unwrap()),
//! )?;
//!
//! let graph = builder.finish()?;
//! let rendered = Renderer::default().render(&graph)?;
//! println!("diagram written to {}", rendered.path().display());
//! # Ok::<(), cumulus::CumulusError>(())
//! ```
//!
//! The builder runs to completion before rendering begins; the graph handed
//! to [`Renderer::render`] is frozen. Every failure aborts the run with an
//! error naming the offending node, cluster, or edge.

pub mod config;

mod builder;
mod error;
mod export;
mod graph;
mod layout;
mod render;
mod structure;

pub use cumulus_core::{color, draw, geometry, identifier};

pub use builder::{Endpoint, GraphBuilder};
pub use error::CumulusError;
pub use graph::{Cluster, ClusterId, ClusterRef, Edge, EdgeStyle, Graph, Node, NodeRef};
pub use layout::Direction;
pub use render::{OutputFormat, RenderedFile, Renderer};
