use serde::{Deserialize, Serialize};

use crate::wire::{Envelope, Message};

/// Wire tags for the supported query functions.
pub mod function {
    pub const SLICE: &str = "slice";
    pub const CURTAIN: &str = "curtain";
}

/// The envelope shared by every request task and fetch descriptor.
///
/// `manifest` is the cube's manifest document embedded verbatim as a string;
/// the planner parses it, workers do not. `shape` is the fragment shape the
/// cube was tiled with, not the cube extent; `shape_cube` is filled in by
/// the planner from the manifest.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CommonTask {
    pub pid: String,
    pub token: String,
    pub guid: String,
    pub storage_endpoint: String,
    pub manifest: String,
    pub function: String,
    pub shape: Vec<usize>,
    #[serde(default)]
    pub shape_cube: Vec<usize>,
}

/// Request for a 2-D plane through the cube, perpendicular to `dim` at grid
/// label `lineno`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SliceTask {
    #[serde(flatten)]
    pub common: CommonTask,
    pub dim: usize,
    pub lineno: i32,
}

/// Request for a vertical curtain spanning the full depth axis, traced by
/// the `(dim0s[i], dim1s[i])` grid-label pairs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CurtainTask {
    #[serde(flatten)]
    pub common: CommonTask,
    pub dim0s: Vec<i32>,
    pub dim1s: Vec<i32>,
}

impl Message for SliceTask {
    const FUNCTION: Option<&'static str> = Some(function::SLICE);

    fn function(&self) -> Option<&str> {
        Some(&self.common.function)
    }
}

impl Message for CurtainTask {
    const FUNCTION: Option<&'static str> = Some(function::CURTAIN);

    fn function(&self) -> Option<&str> {
        Some(&self.common.function)
    }
}

impl Envelope for SliceTask {
    fn common(&self) -> &CommonTask {
        &self.common
    }
}

impl Envelope for CurtainTask {
    fn common(&self) -> &CommonTask {
        &self.common
    }
}
