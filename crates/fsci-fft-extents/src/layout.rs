//! View metadata consumed by the extent resolver.
//!
//! The resolver never touches element data. It only needs the rank, the
//! per-axis extents, the storage order and whether the element type is real
//! or complex, which is what [`ArrayView`] exposes.

use std::marker::PhantomData;

use num_complex::Complex;
use serde::{Deserialize, Serialize};

/// Memory ordering of an array's elements.
///
/// - [`RowMajor`](StorageOrder::RowMajor): last axis is contiguous (C order)
/// - [`ColumnMajor`](StorageOrder::ColumnMajor): first axis is contiguous (Fortran order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageOrder {
    #[default]
    RowMajor,
    ColumnMajor,
}

impl StorageOrder {
    /// Position of the contiguous axis in a length-`rank` extent sequence
    /// laid out in this order.
    #[must_use]
    pub const fn innermost_position(self, rank: usize) -> usize {
        match self {
            Self::RowMajor => rank.saturating_sub(1),
            Self::ColumnMajor => 0,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RowMajor => "row_major",
            Self::ColumnMajor => "column_major",
        }
    }
}

/// Real versus complex classification of an element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    Real,
    Complex,
}

impl ScalarKind {
    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real)
    }

    #[must_use]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex)
    }
}

/// Element types a transform can read or write.
pub trait FftScalar: Copy + Send + Sync + 'static {
    const KIND: ScalarKind;
}

impl FftScalar for f32 {
    const KIND: ScalarKind = ScalarKind::Real;
}

impl FftScalar for f64 {
    const KIND: ScalarKind = ScalarKind::Real;
}

impl FftScalar for Complex<f32> {
    const KIND: ScalarKind = ScalarKind::Complex;
}

impl FftScalar for Complex<f64> {
    const KIND: ScalarKind = ScalarKind::Complex;
}

#[must_use]
pub const fn classify_scalar<T: FftScalar>() -> ScalarKind {
    T::KIND
}

/// Read-only shape information of a caller-owned array.
pub trait ArrayView {
    type Elem: FftScalar;

    fn rank(&self) -> usize;

    /// Extent of `axis`. Callers only pass `axis < self.rank()`.
    fn extent(&self, axis: usize) -> usize;

    fn storage_order(&self) -> StorageOrder;

    fn extents(&self) -> Vec<usize> {
        (0..self.rank()).map(|axis| self.extent(axis)).collect()
    }

    fn scalar_kind(&self) -> ScalarKind {
        <Self::Elem as FftScalar>::KIND
    }
}

impl<V: ArrayView + ?Sized> ArrayView for &V {
    type Elem = V::Elem;

    fn rank(&self) -> usize {
        (**self).rank()
    }

    fn extent(&self, axis: usize) -> usize {
        (**self).extent(axis)
    }

    fn storage_order(&self) -> StorageOrder {
        (**self).storage_order()
    }
}

/// Metadata-only view: extents and storage order for element type `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewShape<T: FftScalar> {
    extents: Vec<usize>,
    order: StorageOrder,
    _elem: PhantomData<T>,
}

impl<T: FftScalar> ViewShape<T> {
    #[must_use]
    pub fn new(extents: impl Into<Vec<usize>>, order: StorageOrder) -> Self {
        Self {
            extents: extents.into(),
            order,
            _elem: PhantomData,
        }
    }

    #[must_use]
    pub fn row_major(extents: impl Into<Vec<usize>>) -> Self {
        Self::new(extents, StorageOrder::RowMajor)
    }

    #[must_use]
    pub fn column_major(extents: impl Into<Vec<usize>>) -> Self {
        Self::new(extents, StorageOrder::ColumnMajor)
    }

    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.extents
    }
}

impl<T: FftScalar> ArrayView for ViewShape<T> {
    type Elem = T;

    fn rank(&self) -> usize {
        self.extents.len()
    }

    fn extent(&self, axis: usize) -> usize {
        self.extents[axis]
    }

    fn storage_order(&self) -> StorageOrder {
        self.order
    }

    fn extents(&self) -> Vec<usize> {
        self.extents.clone()
    }
}
