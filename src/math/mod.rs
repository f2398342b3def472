//! Dynamic containers and the arithmetic defined over them.
//!
//! Provides `DynamicVector` (a fixed-length heap buffer) and `DynamicMatrix`
//! (a square matrix stored as a vector of row vectors). Both are plain value
//! types: cloning deep-copies, moving transfers the buffer, and every
//! arithmetic operation allocates a fresh result.
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

pub mod matrix;
pub mod vector;

pub use matrix::DynamicMatrix;
pub use vector::DynamicVector;

/// Values that can be stored in and computed over by the containers.
///
/// `Zero` seeds dot-product and matrix-product accumulators.
pub trait Element:
    Clone + Default + PartialEq + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Element for T where
    T: Clone
        + Default
        + PartialEq
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
{
}

/// Implements `container <op> scalar` for primitive numeric element types.
///
/// A blanket `impl<T> Add<T>` would overlap with the container-container
/// impls, so the scalar forms are spelled out per type.
macro_rules! impl_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl Add<$t> for &DynamicVector<$t> {
                type Output = DynamicVector<$t>;

                fn add(self, rhs: $t) -> Self::Output {
                    self.add_scalar(rhs)
                }
            }

            impl Sub<$t> for &DynamicVector<$t> {
                type Output = DynamicVector<$t>;

                fn sub(self, rhs: $t) -> Self::Output {
                    self.sub_scalar(rhs)
                }
            }

            impl Mul<$t> for &DynamicVector<$t> {
                type Output = DynamicVector<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.mul_scalar(rhs)
                }
            }

            impl Mul<$t> for &DynamicMatrix<$t> {
                type Output = DynamicMatrix<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.mul_scalar(rhs)
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
