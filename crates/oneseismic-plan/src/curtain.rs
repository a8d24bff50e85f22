use oneseismic_geometry::{CubePoint, FragmentId};
use oneseismic_message::{self as message, CurtainFetch, CurtainTask, Manifest, ProcessHeader, Single};

use crate::error::{Error, Result};
use crate::resolve::{geometry, to_cartesian};
use crate::schedule::FunctionPlan;

/// Plans a vertical curtain: the full-depth columns under a sequence of
/// `(x, y)` grid-label pairs.
pub struct CurtainPlan;

impl FunctionPlan for CurtainPlan {
    type Task = CurtainTask;
    type Fetch = CurtainFetch;

    fn build(task: &CurtainTask, manifest: &Manifest) -> Result<CurtainFetch> {
        if task.dim0s.len() != task.dim1s.len() {
            return Err(message::Error::TraceMismatch {
                dim0s: task.dim0s.len(),
                dim1s: task.dim1s.len(),
            }
            .into());
        }

        let gvt = geometry(manifest, &task.common.shape)?;

        let mut out = CurtainFetch::from_task(task);
        out.common.shape_cube = manifest.cube_shape();
        to_cartesian(&manifest.dimensions[0], &mut out.dim0s)?;
        to_cartesian(&manifest.dimensions[1], &mut out.dim1s)?;

        let zfrags = gvt.fragment_count(gvt.mkdim(2));
        let [s0, s1, _] = gvt.fragment_shape();

        // Guess the number of coordinates per fragment: a plane going
        // through it, with a little margin. The buffers are short-lived, so
        // overestimating slightly costs nothing.
        let approx_coordinates_per_fragment = (s0.max(s1) as f64 * 1.2) as usize;

        // Pre-allocate the buckets by scanning the input. Every (x, y)
        // column pulls in all fragments along the depth axis, so a column
        // seen for the first time inserts its zfrags buckets in one splice
        // and the list stays lexicographically sorted throughout; no second
        // sort pass is needed.
        for (&x, &y) in out.dim0s.iter().zip(&out.dim1s) {
            let top = CubePoint([x as usize, y as usize, 0]);
            let fid = gvt.frag_id(top)?;
            if let Err(position) = out.ids.binary_search_by(|bucket| bucket.id.cmp(&fid)) {
                let column = (0..zfrags).map(|z| Single {
                    id: FragmentId([fid.0[0], fid.0[1], z]),
                    coordinates: Vec::with_capacity(approx_coordinates_per_fragment),
                });
                out.ids.splice(position..position, column);
            }
        }

        // Traverse the (x, y) pairs again and drop each local coordinate
        // into every bucket of its owning column. Duplicate input pairs
        // append duplicate coordinates.
        for (&x, &y) in out.dim0s.iter().zip(&out.dim1s) {
            let point = CubePoint([x as usize, y as usize, 0]);
            let fid = gvt.frag_id(point)?;
            let local = gvt.to_local(point)?;
            let position = out
                .ids
                .binary_search_by(|bucket| bucket.id.cmp(&fid))
                .map_err(|_| {
                    Error::Logic("curtain bucket missing after pre-allocation".to_string())
                })?;
            for bucket in &mut out.ids[position..position + zfrags] {
                bucket.coordinates.push([local.0[0], local.0[1]]);
            }
        }

        Ok(out)
    }

    fn header(task: &CurtainTask, manifest: &Manifest, ntasks: usize) -> Result<ProcessHeader> {
        let gvt = geometry(manifest, &task.common.shape)?;
        let zpad = gvt.nsamples_padded(gvt.mkdim(2));

        let mut index0 = task.dim0s.clone();
        let mut index1 = task.dim1s.clone();
        to_cartesian(&manifest.dimensions[0], &mut index0)?;
        to_cartesian(&manifest.dimensions[1], &mut index1)?;
        let index2 = manifest.dimensions[2].clone();

        Ok(ProcessHeader {
            pid: task.common.pid.clone(),
            ntasks,
            // One row per trace, padded to whole fragments in depth; data
            // arrives in fragment-height strips.
            shape: vec![task.dim0s.len(), zpad],
            index: vec![index0, index1, index2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oneseismic_message::{CommonTask, Message, function};

    fn manifest() -> Manifest {
        Manifest {
            dimensions: vec![
                vec![0, 1, 2, 3],
                vec![0, 1, 2, 3],
                vec![0, 1, 2, 3],
            ],
        }
    }

    fn task(dim0s: Vec<i32>, dim1s: Vec<i32>) -> CurtainTask {
        CurtainTask {
            common: CommonTask {
                pid: "pid".to_string(),
                token: "token".to_string(),
                guid: "guid".to_string(),
                storage_endpoint: "https://storage.example.com".to_string(),
                manifest: String::from_utf8(manifest().pack().expect("pack")).expect("utf8"),
                function: function::CURTAIN.to_string(),
                shape: vec![2, 2, 2],
                shape_cube: Vec::new(),
            },
            dim0s,
            dim1s,
        }
    }

    fn ids_of(fetch: &CurtainFetch) -> Vec<FragmentId> {
        fetch.ids.iter().map(|bucket| bucket.id).collect()
    }

    #[test]
    fn a_column_expands_to_every_depth_fragment() {
        let fetch = CurtainPlan::build(&task(vec![1], vec![3]), &manifest()).expect("build");
        assert_eq!(
            ids_of(&fetch),
            vec![FragmentId([0, 1, 0]), FragmentId([0, 1, 1])]
        );
        for bucket in &fetch.ids {
            assert_eq!(bucket.coordinates, vec![[1, 1]]);
        }
    }

    #[test]
    fn buckets_come_out_sorted_regardless_of_input_order() {
        let fetch =
            CurtainPlan::build(&task(vec![3, 1, 3], vec![0, 2, 0]), &manifest()).expect("build");
        let ids = ids_of(&fetch);
        assert_eq!(
            ids,
            vec![
                FragmentId([0, 1, 0]),
                FragmentId([0, 1, 1]),
                FragmentId([1, 0, 0]),
                FragmentId([1, 0, 1]),
            ]
        );
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn duplicate_traces_accumulate_duplicate_coordinates() {
        let fetch =
            CurtainPlan::build(&task(vec![3, 1, 3], vec![0, 2, 0]), &manifest()).expect("build");
        assert_eq!(fetch.ids[0].coordinates, vec![[1, 0]]);
        assert_eq!(fetch.ids[2].coordinates, vec![[1, 0], [1, 0]]);
        assert_eq!(fetch.ids[2].coordinates, fetch.ids[3].coordinates);
    }

    #[test]
    fn unknown_trace_label_is_not_found() {
        let err = CurtainPlan::build(&task(vec![7], vec![0]), &manifest()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn mismatched_trace_arrays_are_malformed() {
        let err = CurtainPlan::build(&task(vec![1, 2], vec![0]), &manifest()).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn header_shape_is_traces_by_padded_depth() {
        let head =
            CurtainPlan::header(&task(vec![3, 1, 3], vec![0, 2, 0]), &manifest(), 2).expect("header");
        assert_eq!(head.shape, vec![3, 4]);
        assert_eq!(head.index[0], vec![3, 1, 3]);
        assert_eq!(head.index[1], vec![0, 2, 0]);
        assert_eq!(head.index[2], vec![0, 1, 2, 3]);
    }
}
