/// Circle - radius around a 3-D position

use crate::geometry::{Position, Scalar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<T> {
    pub radius: T,
    pub position: Position<T, 3>,
}

impl<T: Scalar> Circle<T> {
    pub fn new(radius: T, position: Position<T, 3>) -> Self {
        Self { radius, position }
    }

    /// π·r²
    pub fn area(&self) -> T {
        T::PI * self.radius * self.radius
    }
}
