use serde::{Deserialize, Serialize};

use crate::wire::Message;

/// The cube descriptor stored in the blob store next to the fragments.
///
/// `dimensions` holds one strictly ascending label array per axis (inline,
/// crossline, depth/time); the length of each array is the cube extent along
/// that axis in samples.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    pub dimensions: Vec<Vec<i32>>,
}

impl Message for Manifest {}

impl Manifest {
    /// The cube extent, in samples, along every axis in order.
    pub fn cube_shape(&self) -> Vec<usize> {
        self.dimensions.iter().map(Vec::len).collect()
    }

    /// Per-dimension summaries for clients browsing a cube, in axis order.
    pub fn describe(&self) -> Vec<DimensionDescription> {
        self.dimensions
            .iter()
            .enumerate()
            .map(|(dimension, keys)| DimensionDescription {
                dimension,
                size: keys.len(),
                keys: keys.clone(),
            })
            .collect()
    }
}

/// What a client needs to know to query one dimension: its ordinal, its
/// extent, and the grid labels that address it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DimensionDescription {
    pub dimension: usize,
    pub size: usize,
    pub keys: Vec<i32>,
}
