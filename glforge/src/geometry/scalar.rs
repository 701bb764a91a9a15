/// Scalar - numeric component type for geometry values

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Floating-point component type
pub trait Scalar:
    Copy + Default + Debug + PartialOrd
    + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + AddAssign
{
    const ZERO: Self;
    const PI: Self;

    fn sqrt(self) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ident),*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const PI: Self = std::$t::consts::PI;

                fn sqrt(self) -> Self {
                    $t::sqrt(self)
                }
            }
        )*
    };
}

impl_scalar!(f32, f64);
