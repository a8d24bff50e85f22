//! The scheduling pipeline and its dispatcher.
//!
//! Scheduling here means: parse an incoming request, build the full set of
//! fragment ids plus what to extract from each fragment, and split that set
//! into units of work. Sending the messages anywhere is somebody else's
//! job.
//!
//! The high-level algorithm is the same for every query function; only how
//! the fetch descriptor is built and how the result header is derived
//! differ. [`FunctionPlan`] captures those two customization points, and
//! the generic driver supplies unpacking, partitioning, and ordering, so a
//! new query function implements two methods and inherits the rest.

use oneseismic_message::{Envelope, Manifest, Message, ProcessHeader, function};
use serde::Deserialize;

use crate::curtain::CurtainPlan;
use crate::error::{Error, Result};
use crate::partition::{FetchDescriptor, partition};
use crate::slice::SlicePlan;

/// Per-function customization of the build → partition → header pipeline.
pub trait FunctionPlan {
    type Task: Message + Envelope;
    type Fetch: FetchDescriptor;

    /// Build the fetch descriptor: every fragment id the query touches, in
    /// the order the client will reassemble them, plus the per-fragment
    /// extraction parameters.
    fn build(task: &Self::Task, manifest: &Manifest) -> Result<Self::Fetch>;

    /// Derive the process header.
    ///
    /// Chunks can arrive at the client in arbitrary order, so the header
    /// must carry enough for it to preallocate the result and place data as
    /// it streams in, rather than buffer everything and make sense of it
    /// after the fact.
    fn header(task: &Self::Task, manifest: &Manifest, ntasks: usize) -> Result<ProcessHeader>;
}

/// The leading fields of a request envelope, read before the full typed
/// unpack to select a plan.
#[derive(Deserialize)]
struct FunctionProbe {
    function: String,
}

fn schedule<P: FunctionPlan>(doc: &[u8], task_size: usize) -> Result<Vec<Vec<u8>>> {
    let task = P::Task::unpack(doc)?;
    let manifest = Manifest::unpack(task.common().manifest.as_bytes())?;

    let mut fetch = P::build(&task, &manifest)?;
    let mut scheduled = partition(&mut fetch, task_size)?;

    let ntasks = scheduled.len();
    let head = P::header(&task, &manifest, ntasks)?;
    scheduled.push(head.pack()?);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        pid = %task.common().pid,
        guid = %task.common().guid,
        ntasks,
        "schedule built"
    );

    Ok(scheduled)
}

/// Translate a packed request into an ordered list of packed worker task
/// messages, with the packed [`ProcessHeader`] as the final element.
///
/// Consumers route all-but-last to workers and the header to the result
/// aggregator. Output is deterministic: byte-identical inputs produce
/// byte-identical lists.
///
/// # Errors
///
/// - [`Error::Malformed`] — the request or its embedded manifest does not
///   decode, or the fragment shape cannot tile the cube.
/// - [`Error::NotFound`] — the dimension, lineno, or a curtain label has no
///   match in the cube.
/// - [`Error::Logic`] — `task_size < 1` or an unknown `function` tag.
///
/// A failed schedule produces no messages at all, not even a header.
pub fn mkschedule(doc: &[u8], task_size: usize) -> Result<Vec<Vec<u8>>> {
    let probe: FunctionProbe =
        serde_json::from_slice(doc).map_err(oneseismic_message::Error::from)?;

    match probe.function.as_str() {
        function::SLICE => schedule::<SlicePlan>(doc, task_size),
        function::CURTAIN => schedule::<CurtainPlan>(doc, task_size),
        other => Err(Error::Logic(format!("no handler for function {other}"))),
    }
}
