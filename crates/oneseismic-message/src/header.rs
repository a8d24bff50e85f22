use serde::{Deserialize, Serialize};

use crate::wire::Message;

/// The trailing result descriptor, emitted after all task messages.
///
/// Data chunks arrive at the client in arbitrary order; the header carries
/// enough to preallocate the result (`shape`) and to label every axis
/// (`index`) without buffering the full response first. `ntasks` tells the
/// aggregator how many task results to wait for.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProcessHeader {
    pub pid: String,
    pub ntasks: usize,
    pub shape: Vec<usize>,
    pub index: Vec<Vec<i32>>,
}

impl Message for ProcessHeader {}
