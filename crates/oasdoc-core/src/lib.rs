//! Core pipeline for turning an OpenAPI 3.x document into a
//! document-oriented intermediate representation.
//!
//! The flow is: parse the raw document ([`parse`]), normalize its schemas
//! into cycle-safe trees and bucket its operations by tag ([`transform`]),
//! then lay the normalized trees out as nested or flat render structures
//! ([`render`]). Free-text descriptions go through the restricted
//! [`markdown`] parser instead. Everything past parsing is pure and
//! synchronous; the layout engine that consumes the output lives outside
//! this crate.

pub mod config;
pub mod error;
pub mod ir;
pub mod markdown;
pub mod parse;
pub mod render;
pub mod transform;

pub use config::{DocConfig, LabelTable, SchemaStyle};
pub use error::ParseError;
pub use ir::{ApiCatalog, MarkdownBlock, NormalizedNode, TagBucket, TypeDescriptor};
pub use render::{RenderNode, SchemaRender, render_schema};
pub use transform::{build_catalog, describe, normalize};
