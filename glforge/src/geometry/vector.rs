/// Vector - a displacement in N-dimensional space

use std::ops::Sub;

use crate::geometry::{Position, Scalar};

/// Displacement with `N` components
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<T, const N: usize> {
    pub components: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }
}

impl_component_access!(Vector, components);

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Euclidean length
    pub fn magnitude(&self) -> T {
        let mut sum = T::ZERO;
        for c in &self.components {
            sum += *c * *c;
        }
        sum.sqrt()
    }
}

fn component_difference<T: Scalar, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> Vector<T, N> {
    let mut out = [T::ZERO; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = lhs[i] - rhs[i];
    }
    Vector::new(out)
}

// Any combination of Position / Vector operands yields the element-wise
// left-minus-right Vector.
macro_rules! impl_vector_sub {
    ($lhs:ident . $lf:ident, $rhs:ident . $rf:ident) => {
        impl<T: Scalar, const N: usize> Sub<$rhs<T, N>> for $lhs<T, N> {
            type Output = Vector<T, N>;

            fn sub(self, rhs: $rhs<T, N>) -> Vector<T, N> {
                component_difference(&self.$lf, &rhs.$rf)
            }
        }
    };
}

impl_vector_sub!(Position.coords, Position.coords);
impl_vector_sub!(Position.coords, Vector.components);
impl_vector_sub!(Vector.components, Position.coords);
impl_vector_sub!(Vector.components, Vector.components);

impl From<Vector<f32, 2>> for glam::Vec2 {
    fn from(v: Vector<f32, 2>) -> Self {
        glam::Vec2::from_array(v.components)
    }
}

impl From<glam::Vec2> for Vector<f32, 2> {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.to_array())
    }
}

impl From<Vector<f32, 3>> for glam::Vec3 {
    fn from(v: Vector<f32, 3>) -> Self {
        glam::Vec3::from_array(v.components)
    }
}

impl From<glam::Vec3> for Vector<f32, 3> {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.to_array())
    }
}
