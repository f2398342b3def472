use std::error::Error;
use std::fmt;

/// Failures reported by container construction, indexing and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Requested length or dimension is zero or above the container maximum.
    SizeOutOfRange { requested: usize, max: usize },
    /// Operands of a binary operation disagree in size.
    SizeMismatch { left: usize, right: usize },
    /// Index is at or past the current size.
    IndexOutOfRange { index: usize, size: usize },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContainerError::SizeOutOfRange { requested, max } => write!(
                f,
                "size {} is out of range, expected a value in 1..={}",
                requested, max
            ),
            ContainerError::SizeMismatch { left, right } => {
                write!(f, "size mismatch: {} vs {}", left, right)
            }
            ContainerError::IndexOutOfRange { index, size } => {
                write!(f, "index {} out of range for size {}", index, size)
            }
        }
    }
}

impl Error for ContainerError {}

/// Shorthand used by fallible binary operations.
pub(crate) fn ensure_same_size(left: usize, right: usize) -> Result<(), ContainerError> {
    if left != right {
        log::debug!("operand sizes differ: {} vs {}", left, right);
        return Err(ContainerError::SizeMismatch { left, right });
    }
    Ok(())
}
