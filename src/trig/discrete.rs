//! Size corrections for polygons and polyhedra that approximate a unit circle or sphere.
//!
//! "Point" is a vertex on the circle; "edge" and "face" are the midpoints of
//! the flat pieces between vertices, which sit closer to the centre.

use super::basic::sec;
use crate::core::scalar::Real;

/// Distance from the centre to an edge midpoint of a regular `edges`-gon with unit circumradius
#[inline]
pub fn point_to_edge_ratio<T: Real>(edges: usize) -> T {
    (T::PI() / T::lit(edges as f64)).cos()
}

/// Circumradius needed for the edge midpoints of an `edges`-gon to touch the unit circle
#[inline]
pub fn edge_to_point_ratio<T: Real>(edges: usize) -> T {
    sec(T::PI() / T::lit(edges as f64))
}

/// Distance from the centre to a face centre of a `slices` x `stacks` sphere mesh with unit vertex radius
#[inline]
pub fn point_to_face_ratio<T: Real>(slices: usize, stacks: usize) -> T {
    let around = T::PI() / T::lit(slices as f64);
    let along = T::PI() / T::lit((2 * stacks) as f64);
    around.cos() * along.cos()
}

/// Reciprocal of [`point_to_face_ratio`]
#[inline]
pub fn face_to_point_ratio<T: Real>(slices: usize, stacks: usize) -> T {
    point_to_face_ratio::<T>(slices, stacks).recip()
}
