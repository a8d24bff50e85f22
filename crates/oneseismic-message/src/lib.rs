//! # Wire model for the oneseismic query planner
//!
//! This crate defines the serializable shapes the planner consumes and
//! produces, and the pack/unpack contract they share with the transport:
//!
//! - [`Manifest`] — the cube descriptor stored next to the fragments.
//! - [`SliceTask`] / [`CurtainTask`] — parsed user requests, one per query
//!   function, sharing the [`CommonTask`] envelope.
//! - [`SliceFetch`] / [`CurtainFetch`] — per-worker instructions naming the
//!   fragments to read and the samples to extract from each.
//! - [`ProcessHeader`] — the trailing result descriptor a streaming client
//!   uses to preallocate and place out-of-order chunks.
//!
//! The wire format is self-describing JSON; every type implements
//! [`Message`] for the byte-level contract. Decoding failures surface as
//! [`Error`].

mod error;
mod fetch;
mod header;
mod manifest;
mod task;
mod wire;

pub use crate::error::*;
pub use crate::fetch::*;
pub use crate::header::*;
pub use crate::manifest::*;
pub use crate::task::*;
pub use crate::wire::*;
