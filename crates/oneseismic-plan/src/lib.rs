//! # Query planner for tiled seismic cubes
//!
//! Translates a parsed user request — "slice 42 along dimension 1 of cube
//! G", "a vertical curtain at these (x, y) pairs" — into the minimal set of
//! fragment fetches, partitioned into fixed-size worker tasks, plus a
//! process header that lets a streaming client preallocate the result and
//! place out-of-order chunks.
//!
//! The single entry point is [`mkschedule`]: request bytes in, an ordered
//! list of packed messages out, header last. The planner performs no I/O,
//! sends nothing, and holds no state between calls; concurrent invocations
//! with disjoint inputs are safe.
//!
//! ## Pipeline
//!
//! - **build** — a [`FunctionPlan`] combines the request, the cube manifest,
//!   and the grid geometry into one fetch descriptor covering every
//!   fragment the query touches.
//! - **partition** — the descriptor's fragment-id list is split into
//!   equal-sized windows, one packed task message per window.
//! - **header** — the result descriptor is derived and packed as the final
//!   element.
//!
//! Enable the `tracing` cargo feature for per-request diagnostics.

mod curtain;
mod error;
mod partition;
mod resolve;
mod schedule;
mod slice;

pub use crate::curtain::*;
pub use crate::error::*;
pub use crate::partition::*;
pub use crate::resolve::*;
pub use crate::schedule::*;
pub use crate::slice::*;
