//! # shape-variants
//!
//! Builds a 2D polygon, derives transformed variants of it, and computes the
//! extent needed to frame them all together.
//!
//! - Shape builders for squares, triangles, sampled circles and free vertex
//!   lists
//! - Rotation, scaling, translation and reflection as row-vector affine maps
//! - A registry keyed by variant kind, each derived variant computed from the
//!   original points
//! - Extent calculation (symmetric, per-axis, max-abs)
//! - A declarative JSON pipeline loader
//!
//! ## Architecture
//!
//! Data flows through four stages:
//!
//! 1. **Shape** — a builder produces the original [`vertex_set::VertexSet`]
//! 2. **Transform** — each [`transform::TransformSpec`] maps the original
//!    through a [`trans_affine::TransAffine`]
//! 3. **Registry** — results are stored per [`variant::VariantKind`]
//! 4. **Frame** — the registry plus its [`extent::Extent`] is handed to a
//!    renderer as a [`frame::RenderFrame`]
//!
//! Interactive callers go through [`session::Session`] with raw text fields;
//! batch callers go through [`pipeline::load_file`].

// Foundation types
pub mod basics;
pub mod color;
pub mod error;
pub mod trans_affine;

// Geometry
pub mod bounding_rect;
pub mod ellipse;
pub mod shapes;
pub mod vertex_set;

// Transforms and variants
pub mod transform;
pub mod variant;

// Extents and output
pub mod extent;
pub mod frame;

// Input surfaces
pub mod params;
pub mod pipeline;
pub mod session;

pub use error::{Result, VariantError};
