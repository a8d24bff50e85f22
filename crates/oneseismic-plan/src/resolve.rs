use oneseismic_geometry::Gvt;
use oneseismic_message::{self as message, Manifest};

use crate::error::{Error, Result};

/// Replace each grid label in `xs` with its cartesian position in `labels`.
///
/// This is a glorified indexof(): it maps the user-oriented grid onto its
/// internal representation. Labels must match exactly, the planner never
/// interpolates, and once this has run the labels are forgotten; the rest
/// of the system works in cartesian coordinates only.
///
/// # Errors
///
/// [`Error::NotFound`] if any label in `xs` is absent from `labels`.
pub fn to_cartesian(labels: &[i32], xs: &mut [i32]) -> Result<()> {
    debug_assert!(labels.windows(2).all(|w| w[0] < w[1]));

    for x in xs.iter_mut() {
        match labels.binary_search(x) {
            Ok(position) => *x = position as i32,
            Err(_) => return Err(Error::NotFound(format!("lineno {x} not in index"))),
        }
    }
    Ok(())
}

/// Build the geometry view for a request against its manifest.
///
/// Rejects a fragment shape that cannot tile the manifest's cube — wrong
/// rank or a zero entry — before any fragment arithmetic runs.
pub(crate) fn geometry(manifest: &Manifest, shape: &[usize]) -> Result<Gvt<3>> {
    if manifest.dimensions.len() != 3 || shape.len() != 3 || shape.contains(&0) {
        return Err(message::Error::ShapeMismatch {
            shape: shape.to_vec(),
            ndims: manifest.dimensions.len(),
        }
        .into());
    }

    Ok(Gvt::new(
        [
            manifest.dimensions[0].len(),
            manifest.dimensions[1].len(),
            manifest.dimensions[2].len(),
        ],
        [shape[0], shape[1], shape[2]],
    ))
}
