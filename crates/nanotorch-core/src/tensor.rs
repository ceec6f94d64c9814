//! Tensor types for nanoTorch
//!
//! The data model is deliberately small: a validated [`Shape`], a dtype tag,
//! and a reference-counted float32 buffer. Reshapes share storage instead of
//! copying.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Tensor shape
///
/// Every dimension of a constructed shape is non-zero. The empty shape is a
/// scalar and counts one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Create a new shape, rejecting zero-sized dimensions
    pub fn new(dims: Vec<usize>) -> Result<Self> {
        for (axis, &dim) in dims.iter().enumerate() {
            if dim == 0 {
                return Err(Error::ZeroDim { axis });
            }
        }
        Ok(Self(dims))
    }

    /// The 0-dimensional shape
    pub fn scalar() -> Self {
        Self(Vec::new())
    }

    /// Get the number of dimensions
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Get the dimensions
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Get a specific dimension
    pub fn dim(&self, index: usize) -> usize {
        self.0[index]
    }

    /// Get the total number of elements
    pub fn numel(&self) -> usize {
        self.0.iter().product()
    }

    /// Check if the shape is scalar
    pub fn is_scalar(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<usize>> for Shape {
    type Error = Error;

    fn try_from(dims: Vec<usize>) -> Result<Self> {
        Self::new(dims)
    }
}

impl TryFrom<&[usize]> for Shape {
    type Error = Error;

    fn try_from(dims: &[usize]) -> Result<Self> {
        Self::new(dims.to_vec())
    }
}

impl From<Shape> for Vec<usize> {
    fn from(shape: Shape) -> Self {
        shape.0
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, dim) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", dim)?;
        }
        write!(f, "]")
    }
}

/// Data types for tensor storage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    /// 32-bit floating point
    #[default]
    Float32,
}

impl DType {
    /// Get the size in bytes for this data type
    pub fn size_bytes(&self) -> usize {
        match self {
            DType::Float32 => 4,
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DType::Float32 => write!(f, "float32"),
        }
    }
}

/// A multi-dimensional float32 tensor
///
/// Storage is reference counted, so cloning a tensor or reshaping it never
/// copies the underlying buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTensor", into = "RawTensor")]
pub struct Tensor {
    /// Shape of the tensor
    shape: Shape,

    /// Data type tag
    dtype: DType,

    /// Shared element buffer, always `shape.numel()` long
    data: Arc<Vec<f32>>,
}

impl Tensor {
    /// Create a new tensor filled with zeros
    pub fn zeros(shape: Shape) -> Self {
        let data = vec![0.0; shape.numel()];
        Self {
            shape,
            dtype: DType::Float32,
            data: Arc::new(data),
        }
    }

    /// Create a 0-dimensional tensor holding a single value
    pub fn scalar(value: f32) -> Self {
        Self {
            shape: Shape::scalar(),
            dtype: DType::Float32,
            data: Arc::new(vec![value]),
        }
    }

    /// Create a tensor from owned data, validating the element count
    pub fn from_vec(data: Vec<f32>, shape: Shape) -> Result<Self> {
        let expected = shape.numel();
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                shape: shape.dims().to_vec(),
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            shape,
            dtype: DType::Float32,
            data: Arc::new(data),
        })
    }

    /// Get the shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the dimensions
    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    /// Get the number of dimensions
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Get the total number of elements
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Get the data type
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.numel() * self.dtype.size_bytes()
    }

    /// Get the elements in row-major order
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Reshape the tensor, sharing storage with the source
    pub fn reshape(&self, new_shape: Shape) -> Result<Self> {
        if new_shape.numel() != self.shape.numel() {
            return Err(Error::ShapeMismatch {
                expected: new_shape.dims().to_vec(),
                actual: self.shape.dims().to_vec(),
            });
        }

        Ok(Self {
            shape: new_shape,
            dtype: self.dtype,
            data: Arc::clone(&self.data),
        })
    }

    /// Check whether two tensors observe the same storage
    pub fn shares_storage(&self, other: &Tensor) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Default for Tensor {
    fn default() -> Self {
        Self::scalar(0.0)
    }
}

impl std::fmt::Display for Tensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tensor(shape={}, dtype={})", self.shape, self.dtype)
    }
}

/// Serde surface of a tensor: plain shape and data
#[derive(Serialize, Deserialize)]
struct RawTensor {
    shape: Vec<usize>,
    data: Vec<f32>,
}

impl TryFrom<RawTensor> for Tensor {
    type Error = Error;

    fn try_from(raw: RawTensor) -> Result<Self> {
        let shape = Shape::new(raw.shape)?;
        Tensor::from_vec(raw.data, shape)
    }
}

impl From<Tensor> for RawTensor {
    fn from(tensor: Tensor) -> Self {
        Self {
            shape: tensor.shape.dims().to_vec(),
            data: tensor.data.as_ref().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let shape = Shape::new(vec![2, 3, 4]).unwrap();
        assert_eq!(shape.ndim(), 3);
        assert_eq!(shape.numel(), 24);
        assert_eq!(shape.dim(0), 2);
        assert_eq!(shape.dim(1), 3);
        assert_eq!(shape.dim(2), 4);
    }

    #[test]
    fn test_shape_rejects_zero_dim() {
        let err = Shape::new(vec![2, 0, 4]).unwrap_err();
        assert_eq!(err, Error::ZeroDim { axis: 1 });

        let err = Shape::try_from(&[0usize][..]).unwrap_err();
        assert_eq!(err, Error::ZeroDim { axis: 0 });
    }

    #[test]
    fn test_scalar_shape_counts_one_element() {
        let shape = Shape::scalar();
        assert!(shape.is_scalar());
        assert_eq!(shape.ndim(), 0);
        assert_eq!(shape.numel(), 1);
    }

    #[test]
    fn test_shape_display() {
        let shape = Shape::new(vec![2, 3]).unwrap();
        assert_eq!(shape.to_string(), "[2, 3]");
        assert_eq!(Shape::scalar().to_string(), "[]");
    }

    #[test]
    fn test_tensor_zeros() {
        let tensor = Tensor::zeros(Shape::new(vec![2, 3]).unwrap());
        assert_eq!(tensor.numel(), 6);
        assert_eq!(tensor.dtype(), DType::Float32);
        assert!(tensor.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_tensor_from_vec() {
        let data = vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let tensor = Tensor::from_vec(data.clone(), Shape::new(vec![2, 3]).unwrap()).unwrap();

        assert_eq!(tensor.dims(), &[2, 3]);
        assert_eq!(tensor.as_slice(), &data[..]);
        assert_eq!(tensor.size_bytes(), 24);
    }

    #[test]
    fn test_tensor_from_vec_size_mismatch() {
        let err = Tensor::from_vec(vec![1.0, 2.0], Shape::new(vec![2, 3]).unwrap()).unwrap_err();
        assert_eq!(
            err,
            Error::DataSizeMismatch {
                shape: vec![2, 3],
                expected: 6,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_tensor_reshape_shares_storage() {
        let data = vec![1.0f32; 24];
        let tensor = Tensor::from_vec(data, Shape::new(vec![2, 3, 4]).unwrap()).unwrap();
        let reshaped = tensor.reshape(Shape::new(vec![4, 6]).unwrap()).unwrap();

        assert_eq!(reshaped.dims(), &[4, 6]);
        assert_eq!(reshaped.numel(), 24);
        assert!(tensor.shares_storage(&reshaped));
    }

    #[test]
    fn test_tensor_reshape_numel_mismatch() {
        let tensor = Tensor::zeros(Shape::new(vec![2, 3]).unwrap());
        let err = tensor.reshape(Shape::new(vec![4, 2]).unwrap()).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_tensor_repr() {
        let tensor = Tensor::zeros(Shape::new(vec![2, 3]).unwrap());
        assert_eq!(tensor.to_string(), "Tensor(shape=[2, 3], dtype=float32)");
    }

    #[test]
    fn test_default_tensor_is_zero_scalar() {
        let tensor = Tensor::default();
        assert!(tensor.shape().is_scalar());
        assert_eq!(tensor.numel(), 1);
        assert_eq!(tensor.as_slice(), &[0.0]);
    }

    #[test]
    fn test_tensor_serde() {
        let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0], Shape::new(vec![3]).unwrap()).unwrap();
        let json = serde_json::to_string(&tensor).unwrap();
        let back: Tensor = serde_json::from_str(&json).unwrap();

        assert_eq!(back.dims(), tensor.dims());
        assert_eq!(back.as_slice(), tensor.as_slice());
    }

    #[test]
    fn test_tensor_deserialize_rejects_bad_data() {
        let json = r#"{"shape":[2,3],"data":[1.0,2.0]}"#;
        assert!(serde_json::from_str::<Tensor>(json).is_err());
    }
}
