use oneseismic_geometry::FragmentId;
use serde::{Deserialize, Serialize};

use crate::task::{CommonTask, CurtainTask, SliceTask, function};
use crate::wire::{Envelope, Message};

/// Worker instructions for a slice query: read every fragment in `ids` and
/// extract the plane `axis dim == lineno`, where `lineno` has been rewritten
/// to the *local* coordinate within a fragment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SliceFetch {
    #[serde(flatten)]
    pub common: CommonTask,
    pub dim: usize,
    pub lineno: usize,
    pub ids: Vec<FragmentId>,
}

impl SliceFetch {
    /// Seed a fetch from its originating request. The planner fills in the
    /// local `lineno` and the fragment ids.
    pub fn from_task(task: &SliceTask) -> Self {
        Self {
            common: task.common.clone(),
            dim: task.dim,
            lineno: 0,
            ids: Vec::new(),
        }
    }
}

/// One curtain bucket: a fragment plus the local `(lx, ly)` column positions
/// to extract from it. Workers read whole columns, so the bucket never needs
/// a depth coordinate.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Single {
    pub id: FragmentId,
    pub coordinates: Vec<[usize; 2]>,
}

/// Worker instructions for a curtain query.
///
/// `ids` is strictly lexicographically sorted and unique; every `(fx, fy)`
/// column present appears once per fragment along the depth axis. `dim0s`
/// and `dim1s` hold the trace coordinates in cartesian form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CurtainFetch {
    #[serde(flatten)]
    pub common: CommonTask,
    pub dim0s: Vec<i32>,
    pub dim1s: Vec<i32>,
    pub ids: Vec<Single>,
}

impl CurtainFetch {
    /// Seed a fetch from its originating request. `dim0s`/`dim1s` start out
    /// as grid labels; the planner rewrites them to cartesian coordinates
    /// and builds the bucket list.
    pub fn from_task(task: &CurtainTask) -> Self {
        Self {
            common: task.common.clone(),
            dim0s: task.dim0s.clone(),
            dim1s: task.dim1s.clone(),
            ids: Vec::new(),
        }
    }
}

impl Message for SliceFetch {
    const FUNCTION: Option<&'static str> = Some(function::SLICE);

    fn function(&self) -> Option<&str> {
        Some(&self.common.function)
    }
}

impl Message for CurtainFetch {
    const FUNCTION: Option<&'static str> = Some(function::CURTAIN);

    fn function(&self) -> Option<&str> {
        Some(&self.common.function)
    }
}

impl Envelope for SliceFetch {
    fn common(&self) -> &CommonTask {
        &self.common
    }
}

impl Envelope for CurtainFetch {
    fn common(&self) -> &CommonTask {
        &self.common
    }
}
