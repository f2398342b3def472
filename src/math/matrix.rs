use std::fmt;
use std::io::BufRead;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::Iter;
use std::str::FromStr;

use num_traits::One;

use crate::config::Limit;
use crate::error::{ensure_same_size, ContainerError};
use crate::io::{TextIoError, TokenReader};
use crate::math::vector::DynamicVector;
use crate::math::Element;

/// Square matrix stored as `n` row vectors of length `n`.
///
/// Rows are only reachable as slices or through [`set_row`](Self::set_row),
/// so no row can change length after construction.
#[derive(Debug, PartialEq, Eq)]
pub struct DynamicMatrix<T> {
    rows: DynamicVector<DynamicVector<T>>,
}

impl<T> DynamicMatrix<T> {
    /// Builds an `n`×`n` matrix of default values.
    pub fn new(n: usize) -> Result<Self, ContainerError>
    where
        T: Default,
    {
        let n = Limit::Matrix.check(n)?;
        log::trace!("allocating {0}x{0} matrix", n);
        let rows = (0..n)
            .map(|_| DynamicVector::new(n))
            .collect::<Result<Box<[_]>, _>>()?;
        Ok(Self::from_parts(rows))
    }

    /// Builds a matrix from row-major nested vectors; every row must have
    /// as many elements as there are rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ContainerError> {
        let n = Limit::Matrix.check(rows.len())?;
        let rows = rows
            .into_iter()
            .map(|row| {
                ensure_same_size(n, row.len())?;
                DynamicVector::try_from(row)
            })
            .collect::<Result<Box<[_]>, _>>()?;
        Ok(Self::from_parts(rows))
    }

    pub fn identity(n: usize) -> Result<Self, ContainerError>
    where
        T: Default + One,
    {
        let mut matrix = Self::new(n)?;
        for (i, row) in matrix.rows.iter_mut().enumerate() {
            row[i] = T::one();
        }
        Ok(matrix)
    }

    fn from_parts(rows: Box<[DynamicVector<T>]>) -> Self {
        Self {
            rows: DynamicVector::from_parts(rows),
        }
    }

    /// Dimension `n`; the matrix has `n` rows and `n` columns.
    pub fn size(&self) -> usize {
        self.rows.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Result<&DynamicVector<T>, ContainerError> {
        self.rows.at(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Result<&mut [T], ContainerError> {
        Ok(self.rows.at_mut(index)?.as_mut_slice())
    }

    /// Replaces row `index`; fails when `row` is not `size()` long.
    pub fn set_row(&mut self, index: usize, row: DynamicVector<T>) -> Result<(), ContainerError> {
        ensure_same_size(self.size(), row.size())?;
        *self.rows.at_mut(index)? = row;
        Ok(())
    }

    pub fn at(&self, row: usize, col: usize) -> Result<&T, ContainerError> {
        self.rows.at(row)?.at(col)
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, ContainerError> {
        self.rows.at_mut(row)?.at_mut(col)
    }

    pub fn rows(&self) -> Iter<'_, DynamicVector<T>> {
        self.rows.iter()
    }

    /// Moves all rows out, leaving `self` with dimension 0.
    pub fn take(&mut self) -> Self {
        Self {
            rows: self.rows.take(),
        }
    }

    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.rows.swap(&mut other.rows);
    }
}

impl<T: Element> DynamicMatrix<T> {
    /// Scales every row by `value`.
    pub fn mul_scalar(&self, value: T) -> Self {
        Self::from_parts(
            self.rows
                .iter()
                .map(|row| row.mul_scalar(value.clone()))
                .collect(),
        )
    }

    /// Entry `i` of the result is the dot product of row `i` with `vector`.
    pub fn mul_vector(&self, vector: &DynamicVector<T>) -> Result<DynamicVector<T>, ContainerError> {
        ensure_same_size(self.size(), vector.size())?;
        let values = self
            .rows
            .iter()
            .map(|row| row.dot(vector))
            .collect::<Result<Box<[T]>, _>>()?;
        Ok(DynamicVector::from_parts(values))
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, ContainerError> {
        ensure_same_size(self.size(), other.size())?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.try_add(b))
            .collect::<Result<Box<[_]>, _>>()?;
        Ok(Self::from_parts(rows))
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, ContainerError> {
        ensure_same_size(self.size(), other.size())?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.try_sub(b))
            .collect::<Result<Box<[_]>, _>>()?;
        Ok(Self::from_parts(rows))
    }

    /// Classic triple loop: `result[i][j] = sum_k self[i][k] * other[k][j]`.
    pub fn mul_matrix(&self, other: &Self) -> Result<Self, ContainerError> {
        ensure_same_size(self.size(), other.size())?;
        let n = self.size();
        log::debug!("multiplying {0}x{0} matrices", n);

        let rows = self
            .rows
            .iter()
            .map(|lhs| {
                let values = (0..n)
                    .map(|j| {
                        lhs.iter()
                            .zip(other.rows.iter())
                            .fold(T::zero(), |acc, (left, rhs)| acc + left.clone() * rhs[j].clone())
                    })
                    .collect();
                DynamicVector::from_parts(values)
            })
            .collect();
        Ok(Self::from_parts(rows))
    }
}

impl<T: FromStr> DynamicMatrix<T> {
    /// Overwrites the matrix row by row from `tokens`. On error the matrix
    /// is left unchanged.
    pub fn read_from<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<(), TextIoError> {
        let n = self.size();
        let total = n * n;
        let parsed = (0..n)
            .map(|i| DynamicVector::<T>::parse_values(tokens, n, i * n, total))
            .collect::<Result<Vec<_>, _>>()?;
        for (row, values) in self.rows.iter_mut().zip(parsed) {
            *row = DynamicVector::from_parts(values);
        }
        Ok(())
    }

    pub fn read_sized<R: BufRead>(n: usize, tokens: &mut TokenReader<R>) -> Result<Self, TextIoError>
    where
        T: Default,
    {
        let mut matrix = Self::new(n)?;
        matrix.read_from(tokens)?;
        Ok(matrix)
    }
}

impl<T: Clone> Clone for DynamicMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

/// `m[i]` is row `i` as a slice, so `m[i][j]` addresses a single element.
impl<T> Index<usize> for DynamicMatrix<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        self.rows[index].as_slice()
    }
}

impl<T> IndexMut<usize> for DynamicMatrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.rows[index].as_mut_slice()
    }
}

impl<T> Index<(usize, usize)> for DynamicMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl<T> IndexMut<(usize, usize)> for DynamicMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.rows[index.0][index.1]
    }
}

impl<'a, 'b, T: Element> Add<&'b DynamicMatrix<T>> for &'a DynamicMatrix<T> {
    type Output = Result<DynamicMatrix<T>, ContainerError>;

    fn add(self, rhs: &'b DynamicMatrix<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<'a, 'b, T: Element> Sub<&'b DynamicMatrix<T>> for &'a DynamicMatrix<T> {
    type Output = Result<DynamicMatrix<T>, ContainerError>;

    fn sub(self, rhs: &'b DynamicMatrix<T>) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<'a, 'b, T: Element> Mul<&'b DynamicMatrix<T>> for &'a DynamicMatrix<T> {
    type Output = Result<DynamicMatrix<T>, ContainerError>;

    fn mul(self, rhs: &'b DynamicMatrix<T>) -> Self::Output {
        self.mul_matrix(rhs)
    }
}

impl<'a, 'b, T: Element> Mul<&'b DynamicVector<T>> for &'a DynamicMatrix<T> {
    type Output = Result<DynamicVector<T>, ContainerError>;

    fn mul(self, rhs: &'b DynamicVector<T>) -> Self::Output {
        self.mul_vector(rhs)
    }
}

impl<T: fmt::Display> fmt::Display for DynamicMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
