/// Position - a point in N-dimensional space

use crate::geometry::Scalar;

/// Point with `N` components
///
/// Equality and ordering are lexicographic over the components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position<T, const N: usize> {
    pub coords: [T; N],
}

impl<T, const N: usize> Position<T, N> {
    pub const fn new(coords: [T; N]) -> Self {
        Self { coords }
    }
}

impl_component_access!(Position, coords);

impl<T: Scalar, const N: usize> Position<T, N> {
    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Self) -> T {
        let mut total = T::ZERO;
        for (a, b) in self.coords.iter().zip(other.coords.iter()) {
            let d = *a - *b;
            total += d * d;
        }
        total.sqrt()
    }

    /// Euclidean distance to the default (all-zero) position
    pub fn distance_from_origin(&self) -> T {
        self.distance(&Self::default())
    }
}

impl From<Position<f32, 2>> for glam::Vec2 {
    fn from(p: Position<f32, 2>) -> Self {
        glam::Vec2::from_array(p.coords)
    }
}

impl From<glam::Vec2> for Position<f32, 2> {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.to_array())
    }
}

impl From<Position<f32, 3>> for glam::Vec3 {
    fn from(p: Position<f32, 3>) -> Self {
        glam::Vec3::from_array(p.coords)
    }
}

impl From<glam::Vec3> for Position<f32, 3> {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.to_array())
    }
}
