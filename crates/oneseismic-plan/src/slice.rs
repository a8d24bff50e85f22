use oneseismic_message::{Manifest, ProcessHeader, SliceFetch, SliceTask};

use crate::error::{Error, Result};
use crate::resolve::geometry;
use crate::schedule::FunctionPlan;

/// Plans a 2-D plane through the cube, perpendicular to axis `dim` at grid
/// label `lineno`.
pub struct SlicePlan;

impl FunctionPlan for SlicePlan {
    type Task = SliceTask;
    type Fetch = SliceFetch;

    fn build(task: &SliceTask, manifest: &Manifest) -> Result<SliceFetch> {
        let ndims = manifest.dimensions.len();
        if task.dim >= ndims {
            return Err(Error::NotFound(format!(
                "param.dimension (= {}) not in [0, {ndims})",
                task.dim
            )));
        }

        let index = &manifest.dimensions[task.dim];
        let pin = index
            .iter()
            .position(|&label| label == task.lineno)
            .ok_or_else(|| {
                Error::NotFound(format!("line (= {}) not found in index", task.lineno))
            })?;

        let gvt = geometry(manifest, &task.common.shape)?;

        let mut out = SliceFetch::from_task(task);
        out.common.shape_cube = manifest.cube_shape();
        // Workers address the plane inside each fragment, so the pin is
        // rewritten to its local form.
        out.lineno = pin % gvt.fragment_shape()[task.dim];
        out.ids = gvt.slice(gvt.mkdim(task.dim), pin)?;
        Ok(out)
    }

    fn header(task: &SliceTask, manifest: &Manifest, ntasks: usize) -> Result<ProcessHeader> {
        let gvt = geometry(manifest, &task.common.shape)?;
        let squeezed = gvt.squeeze(gvt.mkdim(task.dim));

        // The shape of a slice is the survey squeezed in the pinned
        // dimension, reported unpadded.
        let shape = (0..2)
            .map(|axis| squeezed.nsamples(squeezed.mkdim(axis)))
            .collect();

        // The index is the line numbers of the directions != task.dim, in
        // original axis order.
        let index = manifest
            .dimensions
            .iter()
            .enumerate()
            .filter(|&(axis, _)| axis != task.dim)
            .map(|(_, labels)| labels.clone())
            .collect();

        Ok(ProcessHeader {
            pid: task.common.pid.clone(),
            ntasks,
            shape,
            index,
        })
    }
}
