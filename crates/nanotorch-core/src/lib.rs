//! nanoTorch Core - minimal PyTorch-style tensor library
//!
//! This crate provides the pieces the `nanotorch` Python extension module is
//! built from:
//! - A validated, storage-sharing float32 [`Tensor`]
//! - The module-level smoke helpers ([`hello`], [`add_ints`], [`version`])
//!
//! Nothing in here depends on Python; the binding crate wraps these types.

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod tensor;

pub use error::{Error, Result};
pub use tensor::{DType, Shape, Tensor};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::tensor::{DType, Shape, Tensor};
}

/// The library version, surfaced to Python as `__version__`
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Import sanity greeting
pub fn hello() -> &'static str {
    "nanoTorch: import OK"
}

/// Add two integers
pub fn add_ints(a: i64, b: i64) -> i64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_nonempty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_hello() {
        assert_eq!(hello(), "nanoTorch: import OK");
    }

    #[test]
    fn test_add_ints() {
        assert_eq!(add_ints(2, 3), 5);
        assert_eq!(add_ints(-2, 3), 1);
        assert_eq!(add_ints(0, 0), 0);
    }
}
