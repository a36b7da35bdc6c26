use nalgebra::{DMatrix, DVector};

/// Numeric data held by the result containers
///
/// Serpent quantities are either 1-D vectors (group-wise values, time series)
/// or 2-D matrices (group-to-group scattering, isotope × time densities).
///
/// Matrices are built from row-major data as that is how the values appear in
/// the output files, even though [nalgebra] stores them column-major.
///
/// ```rust
/// # use stools_utils::Array;
/// let flat = Array::from(vec![1.0, 2.0, 3.0, 4.0]);
/// assert!(flat.is_vector());
///
/// let square = Array::square_from_row_slice(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
/// assert_eq!(square.shape(), (2, 2));
/// assert_eq!(square.to_row_major(), vec![1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
    /// One dimensional data
    Vector(DVector<f64>),
    /// Two dimensional data
    Matrix(DMatrix<f64>),
}

impl Array {
    /// Build a `n`×`n` matrix from row-major values
    ///
    /// Returns `None` unless there are exactly `n*n` values.
    pub fn square_from_row_slice(values: &[f64], n: usize) -> Option<Self> {
        if n.checked_mul(n)? != values.len() {
            return None;
        }
        Some(Self::Matrix(DMatrix::from_row_slice(n, n, values)))
    }

    /// Build a matrix from row-major values
    ///
    /// Returns `None` unless there are exactly `nrows*ncols` values.
    pub fn from_row_slice(nrows: usize, ncols: usize, values: &[f64]) -> Option<Self> {
        if nrows.checked_mul(ncols)? != values.len() {
            return None;
        }
        Some(Self::Matrix(DMatrix::from_row_slice(nrows, ncols, values)))
    }

    /// Total number of values
    pub fn len(&self) -> usize {
        match self {
            Self::Vector(v) => v.len(),
            Self::Matrix(m) => m.len(),
        }
    }

    /// True if there are no values at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of dimensions, 1 or 2
    pub fn ndim(&self) -> usize {
        match self {
            Self::Vector(_) => 1,
            Self::Matrix(_) => 2,
        }
    }

    /// Shape as (rows, columns), with vectors reported as a single row
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Vector(v) => (1, v.len()),
            Self::Matrix(m) => m.shape(),
        }
    }

    /// Length of the last axis, i.e. the time axis of a depletion quantity
    pub fn ncols(&self) -> usize {
        self.shape().1
    }

    /// Check for the [Array::Vector] variant
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    /// Check for the [Array::Matrix] variant
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(_))
    }

    /// Reference to the vector data, if one dimensional
    pub fn as_vector(&self) -> Option<&DVector<f64>> {
        match self {
            Self::Vector(v) => Some(v),
            Self::Matrix(_) => None,
        }
    }

    /// Reference to the matrix data, if two dimensional
    pub fn as_matrix(&self) -> Option<&DMatrix<f64>> {
        match self {
            Self::Vector(_) => None,
            Self::Matrix(m) => Some(m),
        }
    }

    /// Flatten to a list of values in row-major order
    pub fn to_row_major(&self) -> Vec<f64> {
        match self {
            Self::Vector(v) => v.iter().copied().collect(),
            Self::Matrix(m) => m.transpose().iter().copied().collect(),
        }
    }
}

impl From<Vec<f64>> for Array {
    fn from(values: Vec<f64>) -> Self {
        Self::Vector(DVector::from_vec(values))
    }
}

impl From<&[f64]> for Array {
    fn from(values: &[f64]) -> Self {
        Self::Vector(DVector::from_column_slice(values))
    }
}

impl From<DVector<f64>> for Array {
    fn from(values: DVector<f64>) -> Self {
        Self::Vector(values)
    }
}

impl From<DMatrix<f64>> for Array {
    fn from(values: DMatrix<f64>) -> Self {
        Self::Matrix(values)
    }
}
