//! Size limits shared by the containers.

/// Largest length accepted by [`DynamicVector::new`](crate::DynamicVector::new).
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest dimension accepted by [`DynamicMatrix::new`](crate::DynamicMatrix::new).
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Which container a size check is performed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Vector,
    Matrix,
}

impl Limit {
    pub fn max(self) -> usize {
        match self {
            Limit::Vector => MAX_VECTOR_SIZE,
            Limit::Matrix => MAX_MATRIX_SIZE,
        }
    }

    /// Accepts `size` when it lies in `1..=max`.
    pub fn check(self, size: usize) -> Result<usize, crate::ContainerError> {
        let max = self.max();
        if size == 0 || size > max {
            log::debug!("rejecting {:?} size {} (max {})", self, size, max);
            return Err(crate::ContainerError::SizeOutOfRange {
                requested: size,
                max,
            });
        }
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_limit_is_below_vector_limit() {
        assert!(Limit::Matrix.max() < Limit::Vector.max());
    }

    #[test]
    fn check_bounds_are_inclusive() {
        assert!(Limit::Matrix.check(0).is_err());
        assert_eq!(Limit::Matrix.check(1).unwrap(), 1);
        assert_eq!(Limit::Matrix.check(MAX_MATRIX_SIZE).unwrap(), MAX_MATRIX_SIZE);
        assert!(Limit::Matrix.check(MAX_MATRIX_SIZE + 1).is_err());

        assert!(Limit::Vector.check(0).is_err());
        assert_eq!(Limit::Vector.check(MAX_VECTOR_SIZE).unwrap(), MAX_VECTOR_SIZE);
        assert!(Limit::Vector.check(MAX_VECTOR_SIZE + 1).is_err());
    }
}
