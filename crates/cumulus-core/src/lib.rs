//! Cumulus Core Types and Definitions
//!
//! This crate provides the foundational types for the Cumulus diagram
//! compiler. It includes:
//!
//! - **Identifiers**: string-interned node/cluster identities ([`identifier::Id`])
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Geometry**: basic geometric types ([`geometry`] module)
//! - **Draw**: drawable glyphs, connectors, and labels ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
