//! Geometry module - small fixed-dimension value types

/// Element access shared by `Position` and `Vector`
///
/// Defined ahead of the `mod` declarations so the submodules see it.
macro_rules! impl_component_access {
    ($ty:ident, $field:ident) => {
        impl<T, const N: usize> $ty<T, N> {
            /// Bounds-checked access
            pub fn get(&self, index: usize) -> Option<&T> {
                self.$field.get(index)
            }

            /// Bounds-checked mutable access
            pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
                self.$field.get_mut(index)
            }

            /// Unchecked access
            ///
            /// # Safety
            ///
            /// `index` must be less than `N`.
            pub unsafe fn get_unchecked(&self, index: usize) -> &T {
                self.$field.get_unchecked(index)
            }

            pub fn first(&self) -> Option<&T> {
                self.$field.first()
            }

            pub fn last(&self) -> Option<&T> {
                self.$field.last()
            }

            pub fn iter(&self) -> std::slice::Iter<'_, T> {
                self.$field.iter()
            }

            pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
                self.$field.iter_mut()
            }

            pub fn as_slice(&self) -> &[T] {
                &self.$field
            }

            pub fn into_array(self) -> [T; N] {
                self.$field
            }

            pub const fn len(&self) -> usize {
                N
            }

            pub const fn is_empty(&self) -> bool {
                N == 0
            }
        }

        impl<T: Clone, const N: usize> $ty<T, N> {
            /// Set every component to `value`
            pub fn fill(&mut self, value: T) {
                self.$field.fill(value);
            }
        }

        impl<T: Copy + Default, const N: usize> Default for $ty<T, N> {
            fn default() -> Self {
                Self { $field: [T::default(); N] }
            }
        }

        impl<T, const N: usize> From<[T; N]> for $ty<T, N> {
            fn from($field: [T; N]) -> Self {
                Self { $field }
            }
        }

        impl<T, const N: usize> std::ops::Index<usize> for $ty<T, N> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                &self.$field[index]
            }
        }

        impl<T, const N: usize> std::ops::IndexMut<usize> for $ty<T, N> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.$field[index]
            }
        }

        impl<'a, T, const N: usize> IntoIterator for &'a $ty<T, N> {
            type Item = &'a T;
            type IntoIter = std::slice::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.$field.iter()
            }
        }
    };
}

pub mod scalar;
pub mod position;
pub mod vector;
pub mod triangle;
pub mod circle;

pub use scalar::*;
pub use position::*;
pub use vector::*;
pub use triangle::*;
pub use circle::*;

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
