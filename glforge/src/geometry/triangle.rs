/// Triangle - three positions

use crate::geometry::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T, const N: usize> {
    points: [Position<T, N>; 3],
}

impl<T, const N: usize> Triangle<T, N> {
    pub fn new(a: Position<T, N>, b: Position<T, N>, c: Position<T, N>) -> Self {
        Self { points: [a, b, c] }
    }

    pub fn points(&self) -> &[Position<T, N>; 3] {
        &self.points
    }
}
