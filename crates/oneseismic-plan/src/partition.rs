use oneseismic_geometry::FragmentId;
use oneseismic_message::{CurtainFetch, Message, Single, SliceFetch};

use crate::error::{Error, Result};

/// The capability the partitioner needs from a fetch descriptor: windowed
/// access to its fragment-id list, with everything else packed along
/// unchanged. Partitioning is oblivious to the query function as long as
/// this holds.
pub trait FetchDescriptor: Message {
    type Id: Clone;

    fn ids(&self) -> &[Self::Id];
    fn ids_mut(&mut self) -> &mut Vec<Self::Id>;
}

impl FetchDescriptor for SliceFetch {
    type Id = FragmentId;

    fn ids(&self) -> &[FragmentId] {
        &self.ids
    }

    fn ids_mut(&mut self) -> &mut Vec<FragmentId> {
        &mut self.ids
    }
}

impl FetchDescriptor for CurtainFetch {
    type Id = Single;

    fn ids(&self) -> &[Single] {
        &self.ids
    }

    fn ids_mut(&mut self) -> &mut Vec<Single> {
        &mut self.ids
    }
}

/// The number of task-size'd tasks needed to process `jobs` jobs.
fn task_count(jobs: usize, task_size: usize) -> Result<usize> {
    let count = jobs
        .checked_add(task_size - 1)
        .map(|padded| padded / task_size)
        .ok_or_else(|| {
            Error::Logic(format!(
                "task-count for {jobs} jobs overflowed; probably a bogus task_size (= {task_size})"
            ))
        })?;

    if count == 0 {
        return Err(Error::Logic(
            "task-count == 0; a schedule must produce work".to_string(),
        ));
    }
    Ok(count)
}

/// Split `fetch` into packed task messages of at most `task_size` fragment
/// ids each.
///
/// The descriptor is reused as a scratch buffer: every half-open window of
/// the original id list is written into it and packed, all other fields
/// untouched, so each message is a clone of the descriptor with a narrowed
/// `ids`. Window order and the order within each window both preserve the
/// input ordering.
///
/// # Errors
///
/// [`Error::Logic`] if `task_size < 1` or if the descriptor holds no ids.
pub fn partition<F: FetchDescriptor>(fetch: &mut F, task_size: usize) -> Result<Vec<Vec<u8>>> {
    if task_size < 1 {
        return Err(Error::Logic(format!("task_size (= {task_size}) < 1")));
    }

    let ids = core::mem::take(fetch.ids_mut());
    let ntasks = task_count(ids.len(), task_size)?;

    let mut xs = Vec::with_capacity(ntasks);
    for window in ids.chunks(task_size) {
        let scratch = fetch.ids_mut();
        scratch.clear();
        scratch.extend_from_slice(window);
        xs.push(fetch.pack()?);
    }

    debug_assert_eq!(xs.len(), ntasks);
    Ok(xs)
}
