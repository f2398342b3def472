use std::fmt;
use std::io::BufRead;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};
use std::str::FromStr;

use crate::config::Limit;
use crate::error::{ensure_same_size, ContainerError};
use crate::io::{TextIoError, TokenReader};
use crate::math::Element;

/// Heap-allocated buffer whose length is fixed when it is created.
///
/// A vector is only ever empty after its contents were moved out with
/// [`take`](Self::take) or [`move_from`](Self::move_from).
#[derive(Debug, PartialEq, Eq)]
pub struct DynamicVector<T> {
    data: Box<[T]>,
}

impl<T> DynamicVector<T> {
    /// Builds a vector of `size` default values.
    pub fn new(size: usize) -> Result<Self, ContainerError>
    where
        T: Default,
    {
        let size = Limit::Vector.check(size)?;
        log::trace!("allocating vector of {} elements", size);
        Ok(Self::from_parts((0..size).map(|_| T::default()).collect()))
    }

    pub fn from_elem(size: usize, value: T) -> Result<Self, ContainerError>
    where
        T: Clone,
    {
        let size = Limit::Vector.check(size)?;
        Ok(Self::from_parts(vec![value; size].into_boxed_slice()))
    }

    /// Copies `values` into a newly allocated vector.
    pub fn from_slice(values: &[T]) -> Result<Self, ContainerError>
    where
        T: Clone,
    {
        Limit::Vector.check(values.len())?;
        Ok(Self::from_parts(Box::from(values)))
    }

    pub(crate) fn from_parts(data: Box<[T]>) -> Self {
        Self { data }
    }

    pub(crate) fn empty() -> Self {
        Self::from_parts(Box::default())
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked shared access.
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        let size = self.size();
        self.data
            .get(index)
            .ok_or(ContainerError::IndexOutOfRange { index, size })
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let size = self.size();
        self.data
            .get_mut(index)
            .ok_or(ContainerError::IndexOutOfRange { index, size })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Moves the buffer out, leaving `self` empty with size 0.
    pub fn take(&mut self) -> Self {
        log::trace!("moving out vector of {} elements", self.size());
        std::mem::replace(self, Self::empty())
    }

    /// Move-assignment: drops the current buffer and takes `source`'s,
    /// leaving `source` empty.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// Exchanges buffers without touching any element.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }
}

impl<T: Element> DynamicVector<T> {
    fn map_with<F>(&self, f: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        Self::from_parts(self.data.iter().map(f).collect())
    }

    fn zip_with<F>(&self, other: &Self, mut f: F) -> Result<Self, ContainerError>
    where
        F: FnMut(&T, &T) -> T,
    {
        ensure_same_size(self.size(), other.size())?;
        Ok(Self::from_parts(
            self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect(),
        ))
    }

    pub fn add_scalar(&self, value: T) -> Self {
        self.map_with(|x| x.clone() + value.clone())
    }

    pub fn sub_scalar(&self, value: T) -> Self {
        self.map_with(|x| x.clone() - value.clone())
    }

    pub fn mul_scalar(&self, value: T) -> Self {
        self.map_with(|x| x.clone() * value.clone())
    }

    /// Element-wise sum; fails when the lengths differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, ContainerError> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    /// Element-wise difference; fails when the lengths differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, ContainerError> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }

    /// Sum of pairwise products, starting from `T::zero()`.
    pub fn dot(&self, other: &Self) -> Result<T, ContainerError> {
        ensure_same_size(self.size(), other.size())?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }
}

impl<T: FromStr> DynamicVector<T> {
    /// Overwrites every element with the next `size()` tokens of `tokens`.
    /// On error the vector is left unchanged.
    pub fn read_from<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<(), TextIoError> {
        let size = self.size();
        self.data = Self::parse_values(tokens, size, 0, size)?;
        Ok(())
    }

    /// Parses `count` tokens, reporting positions relative to a larger
    /// block of `total` tokens that starts `offset` tokens earlier.
    pub(crate) fn parse_values<R: BufRead>(
        tokens: &mut TokenReader<R>,
        count: usize,
        offset: usize,
        total: usize,
    ) -> Result<Box<[T]>, TextIoError> {
        (0..count)
            .map(|idx| tokens.parse_next(offset + idx, total))
            .collect()
    }

    /// Allocates a vector of `size` elements and fills it from `tokens`.
    pub fn read_sized<R: BufRead>(size: usize, tokens: &mut TokenReader<R>) -> Result<Self, TextIoError>
    where
        T: Default,
    {
        let mut vector = Self::new(size)?;
        vector.read_from(tokens)?;
        Ok(vector)
    }
}

impl<T: Clone> Clone for DynamicVector<T> {
    fn clone(&self) -> Self {
        Self::from_parts(self.data.clone())
    }

    /// Reuses the existing buffer when the sizes agree.
    fn clone_from(&mut self, source: &Self) {
        if self.size() == source.size() {
            self.data.clone_from_slice(&source.data);
        } else {
            log::trace!(
                "reallocating vector from {} to {} elements",
                self.size(),
                source.size()
            );
            self.data = source.data.clone();
        }
    }
}

impl<T> TryFrom<Vec<T>> for DynamicVector<T> {
    type Error = ContainerError;

    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        Limit::Vector.check(value.len())?;
        Ok(Self::from_parts(value.into_boxed_slice()))
    }
}

impl<T> From<DynamicVector<T>> for Vec<T> {
    fn from(value: DynamicVector<T>) -> Self {
        value.into_vec()
    }
}

impl<'a, T> IntoIterator for &'a DynamicVector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;

    /// Panics with an out-of-range message when `index >= size()`.
    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a, 'b, T: Element> Add<&'b DynamicVector<T>> for &'a DynamicVector<T> {
    type Output = Result<DynamicVector<T>, ContainerError>;

    fn add(self, rhs: &'b DynamicVector<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<'a, 'b, T: Element> Sub<&'b DynamicVector<T>> for &'a DynamicVector<T> {
    type Output = Result<DynamicVector<T>, ContainerError>;

    fn sub(self, rhs: &'b DynamicVector<T>) -> Self::Output {
        self.try_sub(rhs)
    }
}

/// `&a * &b` is the dot product.
impl<'a, 'b, T: Element> Mul<&'b DynamicVector<T>> for &'a DynamicVector<T> {
    type Output = Result<T, ContainerError>;

    fn mul(self, rhs: &'b DynamicVector<T>) -> Self::Output {
        self.dot(rhs)
    }
}

/// Writes each element followed by a single space.
impl<T: fmt::Display> fmt::Display for DynamicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.data.iter() {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}
