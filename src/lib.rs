//! Python bindings for nanoTorch
//!
//! This module provides Python bindings via PyO3 for the nanoTorch tensor
//! library. The extension module is named `nanotorch` and exposes the version
//! attribute, the smoke helpers, and the `Tensor` class with NumPy interop.

use ndarray::ArrayD;
use numpy::{IntoPyArray, PyArrayDyn, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use nanotorch_core::{Error, Shape};

pyo3::create_exception!(nanotorch, NanotorchError, pyo3::exceptions::PyException);
pyo3::create_exception!(nanotorch, ShapeError, NanotorchError);

// Every core error today is shape-related; the base class exists so callers
// can catch the whole family.
fn map_core_err(err: Error) -> PyErr {
    ShapeError::new_err(err.to_string())
}

/// Python-visible tensor wrapping the core type
#[pyclass(name = "Tensor", module = "nanotorch")]
#[derive(Clone)]
pub struct PyTensor {
    inner: nanotorch_core::Tensor,
}

#[pymethods]
impl PyTensor {
    /// `Tensor()` is a zero scalar; `Tensor(array)` copies a float32 NumPy array.
    #[new]
    #[pyo3(signature = (array=None))]
    fn new(array: Option<PyReadonlyArrayDyn<'_, f32>>) -> PyResult<Self> {
        match array {
            Some(array) => Self::from_numpy(array),
            None => Ok(Self {
                inner: nanotorch_core::Tensor::default(),
            }),
        }
    }

    /// Build a tensor from a float32 NumPy array of rank >= 1
    #[staticmethod]
    fn from_numpy(array: PyReadonlyArrayDyn<'_, f32>) -> PyResult<Self> {
        let view = array.as_array();
        if view.ndim() < 1 {
            return Err(map_core_err(Error::RankMismatch {
                expected_min: 1,
                actual: 0,
            }));
        }

        let shape = Shape::new(view.shape().to_vec()).map_err(map_core_err)?;
        let data: Vec<f32> = view.iter().copied().collect();

        nanotorch_core::Tensor::from_vec(data, shape)
            .map(|inner| Self { inner })
            .map_err(map_core_err)
    }

    /// Build a zero-filled tensor of the given shape
    #[staticmethod]
    fn zeros(shape: Vec<usize>) -> PyResult<Self> {
        Shape::new(shape)
            .map(|shape| Self {
                inner: nanotorch_core::Tensor::zeros(shape),
            })
            .map_err(map_core_err)
    }

    /// Dimensions of the tensor
    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.inner.dims().to_vec()
    }

    /// Total number of elements
    fn numel(&self) -> usize {
        self.inner.numel()
    }

    /// Convert to a float32 NumPy array of the same shape
    fn numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<f32>>> {
        let array = ArrayD::from_shape_vec(self.inner.dims().to_vec(), self.inner.as_slice().to_vec())
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(array.into_pyarray_bound(py))
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

/// Import sanity check
#[pyfunction]
fn hello() -> &'static str {
    nanotorch_core::hello()
}

/// Add two integers
#[pyfunction]
fn add_ints(a: i64, b: i64) -> i64 {
    nanotorch_core::add_ints(a, b)
}

/// nanoTorch Python module
#[pymodule]
pub fn nanotorch(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", nanotorch_core::version())?;
    m.add_function(wrap_pyfunction!(hello, m)?)?;
    m.add_function(wrap_pyfunction!(add_ints, m)?)?;
    m.add_class::<PyTensor>()?;
    m.add("NanotorchError", m.py().get_type_bound::<NanotorchError>())?;
    m.add("ShapeError", m.py().get_type_bound::<ShapeError>())?;
    Ok(())
}
