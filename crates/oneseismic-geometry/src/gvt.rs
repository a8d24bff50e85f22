use crate::error::{Error, Result};
use crate::point::{CubePoint, FragmentId, LocalPoint};

/// An axis handle bound to an `N`-dimensional geometry.
///
/// Handles are created through [`Gvt::mkdim`], which checks the axis index
/// once so later lookups can index arrays directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dim<const N: usize = 3>(usize);

impl<const N: usize> Dim<N> {
    /// The 0-based axis index this handle names.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Geometric volume translation: an immutable view of a cube's extents and
/// its fragment tiling.
///
/// Cube sample `(i, j, k)` belongs to fragment `(i/sx, j/sy, k/sz)` at local
/// coordinate `(i%sx, j%sy, k%sz)` where `(sx, sy, sz)` is the fragment
/// shape. A cube whose extent does not divide evenly by the fragment shape
/// is padded: the trailing fragments along an axis are only partially
/// populated, and [`Gvt::nsamples_padded`] reports the padded sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gvt<const N: usize = 3> {
    cube: [usize; N],
    frag: [usize; N],
}

impl<const N: usize> Gvt<N> {
    /// Build a view from cube extents and the fragment shape.
    ///
    /// Every fragment-shape entry must be positive; a fragment with a
    /// zero-length axis tiles nothing.
    pub fn new(cube: [usize; N], frag: [usize; N]) -> Self {
        assert!(frag.iter().all(|&s| s > 0), "fragment shape must be positive");
        Self { cube, frag }
    }

    /// Obtain a handle for axis `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`. Callers validate user-supplied axis numbers
    /// before they reach geometry.
    pub fn mkdim(&self, axis: usize) -> Dim<N> {
        assert!(axis < N, "axis (= {}) not in [0, {})", axis, N);
        Dim(axis)
    }

    /// The per-axis sample counts of a fragment.
    pub fn fragment_shape(&self) -> [usize; N] {
        self.frag
    }

    /// The unpadded cube extent along `d`, in samples.
    pub fn nsamples(&self, d: Dim<N>) -> usize {
        self.cube[d.0]
    }

    /// The cube extent along `d` rounded up to a whole number of fragments.
    pub fn nsamples_padded(&self, d: Dim<N>) -> usize {
        self.fragment_count(d) * self.frag[d.0]
    }

    /// Number of fragments along `d`, i.e. `ceil(extent / shape)`.
    pub fn fragment_count(&self, d: Dim<N>) -> usize {
        self.cube[d.0].div_ceil(self.frag[d.0])
    }
}

impl Gvt<3> {
    /// The fragment that owns the sample at `p`.
    pub fn frag_id(&self, p: CubePoint) -> Result<FragmentId> {
        self.check(p)?;
        let [x, y, z] = p.0;
        Ok(FragmentId([
            x / self.frag[0],
            y / self.frag[1],
            z / self.frag[2],
        ]))
    }

    /// The position of the sample at `p` relative to its owning fragment.
    pub fn to_local(&self, p: CubePoint) -> Result<LocalPoint> {
        self.check(p)?;
        let [x, y, z] = p.0;
        Ok(LocalPoint([
            x % self.frag[0],
            y % self.frag[1],
            z % self.frag[2],
        ]))
    }

    /// Enumerate every fragment intersecting the hyperplane `axis d == pin`.
    ///
    /// `pin` is a global cartesian coordinate along `d`. The ids come out in
    /// lexicographic ascending order of the two remaining axes; consumers
    /// map fragments back to output rows and columns from that order alone.
    pub fn slice(&self, d: Dim<3>, pin: usize) -> Result<Vec<FragmentId>> {
        if pin >= self.cube[d.0] {
            return Err(Error::OutOfRange {
                axis: d.0,
                coordinate: pin,
                extent: self.cube[d.0],
            });
        }

        let [a, b] = squeezed_axes(d);
        let na = self.cube[a].div_ceil(self.frag[a]);
        let nb = self.cube[b].div_ceil(self.frag[b]);

        let mut ids = Vec::with_capacity(na * nb);
        for i in 0..na {
            for j in 0..nb {
                let mut id = [0; 3];
                id[d.0] = pin / self.frag[d.0];
                id[a] = i;
                id[b] = j;
                ids.push(FragmentId(id));
            }
        }
        Ok(ids)
    }

    /// A two-axis view with axis `d` removed, preserving the extents and
    /// fragment sizes of the remaining axes in their original order.
    pub fn squeeze(&self, d: Dim<3>) -> Gvt<2> {
        let [a, b] = squeezed_axes(d);
        Gvt {
            cube: [self.cube[a], self.cube[b]],
            frag: [self.frag[a], self.frag[b]],
        }
    }

    fn check(&self, p: CubePoint) -> Result<()> {
        for (axis, (&x, &extent)) in p.0.iter().zip(&self.cube).enumerate() {
            if x >= extent {
                return Err(Error::OutOfRange {
                    axis,
                    coordinate: x,
                    extent,
                });
            }
        }
        Ok(())
    }
}

/// The two axes that remain when `d` is pinned, in original axis order.
fn squeezed_axes(d: Dim<3>) -> [usize; 2] {
    match d.0 {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gvt333() -> Gvt<3> {
        Gvt::new([3, 3, 3], [2, 2, 2])
    }

    #[test]
    fn samples_map_to_owning_fragment_and_local_position() {
        let g = Gvt::new([9, 6, 10], [3, 3, 5]);
        let p = CubePoint([7, 4, 9]);
        assert_eq!(g.frag_id(p), Ok(FragmentId([2, 1, 1])));
        assert_eq!(g.to_local(p), Ok(LocalPoint([1, 1, 4])));
    }

    #[test]
    fn coordinates_at_extent_are_out_of_range() {
        let g = gvt333();
        let err = g.frag_id(CubePoint([0, 3, 0])).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                axis: 1,
                coordinate: 3,
                extent: 3,
            }
        );
        assert!(g.to_local(CubePoint([0, 0, 4])).is_err());
    }

    #[test]
    fn padded_cube_rounds_fragment_counts_up() {
        let g = gvt333();
        for axis in 0..3 {
            let d = g.mkdim(axis);
            assert_eq!(g.fragment_count(d), 2);
            assert_eq!(g.nsamples(d), 3);
            assert_eq!(g.nsamples_padded(d), 4);
        }

        let exact = Gvt::new([4, 4, 4], [2, 2, 2]);
        let d = exact.mkdim(0);
        assert_eq!(exact.fragment_count(d), 2);
        assert_eq!(exact.nsamples_padded(d), 4);
    }

    #[test]
    fn slice_enumerates_remaining_axes_lexicographically() {
        let g = gvt333();
        let ids = g.slice(g.mkdim(0), 2).unwrap();
        assert_eq!(
            ids,
            vec![
                FragmentId([1, 0, 0]),
                FragmentId([1, 0, 1]),
                FragmentId([1, 1, 0]),
                FragmentId([1, 1, 1]),
            ]
        );

        let ids = g.slice(g.mkdim(1), 0).unwrap();
        assert_eq!(
            ids,
            vec![
                FragmentId([0, 0, 0]),
                FragmentId([0, 0, 1]),
                FragmentId([1, 0, 0]),
                FragmentId([1, 0, 1]),
            ]
        );

        let ids = g.slice(g.mkdim(2), 3).unwrap();
        assert_eq!(
            ids,
            vec![
                FragmentId([0, 0, 1]),
                FragmentId([0, 1, 1]),
                FragmentId([1, 0, 1]),
                FragmentId([1, 1, 1]),
            ]
        );
    }

    #[test]
    fn slice_count_is_product_of_remaining_fragment_counts() {
        let g = Gvt::new([10, 7, 30], [4, 3, 8]);
        let ids = g.slice(g.mkdim(1), 5).unwrap();
        let expected = g.fragment_count(g.mkdim(0)) * g.fragment_count(g.mkdim(2));
        assert_eq!(ids.len(), expected);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert!(ids.iter().all(|id| id.0[1] == 5 / 3));
    }

    #[test]
    fn slice_rejects_pin_outside_extent() {
        let g = gvt333();
        assert!(g.slice(g.mkdim(2), 3).is_err());
    }

    #[test]
    fn squeeze_drops_the_pinned_axis_in_order() {
        let g = Gvt::new([9, 6, 10], [3, 3, 5]);

        let g2 = g.squeeze(g.mkdim(1));
        assert_eq!(g2.fragment_shape(), [3, 5]);
        assert_eq!(g2.nsamples(g2.mkdim(0)), 9);
        assert_eq!(g2.nsamples(g2.mkdim(1)), 10);

        let g2 = g.squeeze(g.mkdim(2));
        assert_eq!(g2.fragment_shape(), [3, 3]);
        assert_eq!(g2.nsamples_padded(g2.mkdim(0)), 9);
        assert_eq!(g2.nsamples_padded(g2.mkdim(1)), 6);
    }
}
