//! Error types for nanoTorch

use thiserror::Error;

/// Result type alias for nanoTorch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for nanoTorch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A shape dimension was zero
    #[error("shape dimensions must be > 0 (axis {axis} is zero)")]
    ZeroDim {
        /// Axis carrying the offending dimension
        axis: usize,
    },

    /// Data length disagrees with the shape's element count
    #[error("data size mismatch: shape {shape:?} holds {expected} elements, got {actual}")]
    DataSizeMismatch {
        /// Dimensions the data was checked against
        shape: Vec<usize>,
        /// Element count the shape implies
        expected: usize,
        /// Element count actually supplied
        actual: usize,
    },

    /// Shape mismatch
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Dimensions the operation required
        expected: Vec<usize>,
        /// Dimensions it was given
        actual: Vec<usize>,
    },

    /// Tensor rank below what the operation requires
    #[error("rank mismatch: expected at least {expected_min} dimension(s), got {actual}")]
    RankMismatch {
        /// Minimum rank the operation accepts
        expected_min: usize,
        /// Rank it was given
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::DataSizeMismatch {
            shape: vec![2, 3],
            expected: 6,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "data size mismatch: shape [2, 3] holds 6 elements, got 4"
        );

        let err = Error::ZeroDim { axis: 1 };
        assert_eq!(err.to_string(), "shape dimensions must be > 0 (axis 1 is zero)");
    }
}
