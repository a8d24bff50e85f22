//! # Tiled-cube geometry
//!
//! Pure functions over a regular N-dimensional grid of seismic samples that
//! has been tiled into equally-shaped fragments. This crate knows nothing
//! about storage, transport, or query functions; it only answers questions
//! of the form "which fragment owns this sample" and "which fragments does
//! this plane pass through".
//!
//! The central type is [`Gvt`], an immutable view bundling the cube extents
//! and the fragment shape. All lookups go through it.

mod error;
mod gvt;
mod point;

pub use crate::error::*;
pub use crate::gvt::*;
pub use crate::point::*;
