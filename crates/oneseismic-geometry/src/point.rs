use core::fmt;

/// A global cartesian sample position inside the cube.
///
/// Coordinates are 0-based indices into each axis, not user-facing grid
/// labels; label resolution happens before geometry is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubePoint(pub [usize; 3]);

/// A sample position relative to the origin of the fragment that owns it.
///
/// Every coordinate is strictly less than the fragment shape along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalPoint(pub [usize; 3]);

/// Names one fragment in the cube's tiling.
///
/// The derived `Ord` is lexicographic over the axes in order, which is the
/// ordering the rest of the system relies on when enumerating, merging, and
/// binary-searching fragment ids. `Display` writes the dashed form used for
/// fragment blob names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FragmentId(pub [usize; 3]);

impl fmt::Display for FragmentId {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(fmt, "{x}-{y}-{z}")
    }
}
