//! Extent resolution for array-to-array transforms.
//!
//! Given an input view, an output view and the axes to transform, compute
//! what an FFT backend needs to plan the call: the input and output extents
//! of the transform axes, the canonical extent of each transform axis (the
//! larger of the two, i.e. the real-side length for R2C/C2R), and the number
//! of independent transforms batched over the remaining axes.
//!
//! All returned sequences follow the backend convention: row-major, with
//! the transform axes trailing, regardless of the views' storage order.

use std::time::Instant;

use fsci_runtime::RuntimeMode;
use serde::{Deserialize, Serialize};

use crate::axes::{AxisMap, compute_axis_map, normalize_axes};
use crate::error::{FftLayoutError, FftLayoutResult, Side};
use crate::layout::{ArrayView, ScalarKind, StorageOrder};
use crate::trace::{ExtentTrace, record_trace};

/// Element-type pairing of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformDirection {
    RealToComplex,
    ComplexToReal,
    ComplexToComplex,
}

impl TransformDirection {
    /// Classify an input/output pairing, rejecting real on both sides.
    pub fn from_kinds(input: ScalarKind, output: ScalarKind) -> FftLayoutResult<Self> {
        match (input, output) {
            (ScalarKind::Real, ScalarKind::Complex) => Ok(Self::RealToComplex),
            (ScalarKind::Complex, ScalarKind::Real) => Ok(Self::ComplexToReal),
            (ScalarKind::Complex, ScalarKind::Complex) => Ok(Self::ComplexToComplex),
            (ScalarKind::Real, ScalarKind::Real) => Err(FftLayoutError::TypeMismatch {
                real: Side::Input,
                expected_complex: Side::Output,
            }),
        }
    }

    /// The side holding the halved `n/2 + 1` spectrum, if any.
    #[must_use]
    pub const fn halved_side(self) -> Option<Side> {
        match self {
            Self::RealToComplex => Some(Side::Output),
            Self::ComplexToReal => Some(Side::Input),
            Self::ComplexToComplex => None,
        }
    }
}

/// Per-call options for [`resolve_extents_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveOptions {
    pub mode: RuntimeMode,
    pub trace: bool,
}

impl ResolveOptions {
    #[must_use]
    pub fn with_mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

/// Extents of the transform axes plus the batch count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FftExtents {
    pub in_extents: Vec<usize>,
    pub out_extents: Vec<usize>,
    /// `max(in, out)` per transform axis.
    pub fft_extents: Vec<usize>,
    /// Number of independent transforms ("howmany").
    pub batch_count: usize,
    pub direction: TransformDirection,
}

impl FftExtents {
    /// Number of transform axes.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.fft_extents.len()
    }

    /// Element count of one transform.
    #[must_use]
    pub fn fft_size(&self) -> usize {
        self.fft_extents.iter().product()
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, Vec<usize>, usize) {
        (
            self.in_extents,
            self.out_extents,
            self.fft_extents,
            self.batch_count,
        )
    }
}

/// Resolve transform extents with default options (Strict, untraced).
pub fn resolve_extents<I, O>(input: &I, output: &O, axes: &[isize]) -> FftLayoutResult<FftExtents>
where
    I: ArrayView + ?Sized,
    O: ArrayView + ?Sized,
{
    resolve_extents_with(input, output, axes, &ResolveOptions::default())
}

/// Resolve transform extents.
///
/// `axes` may contain negative indices, counted from the last axis. The
/// returned sequences list the transform axes in the order they were given.
///
/// # Errors
///
/// - [`FftLayoutError::TypeMismatch`] when a real side is not paired with a
///   complex side.
/// - [`FftLayoutError::HalvedExtentMismatch`] when the complex side of an
///   R2C/C2R pair does not hold `n/2 + 1` elements along the last transform
///   axis.
/// - [`FftLayoutError::RankMismatch`], [`FftLayoutError::StorageOrderMismatch`]
///   and [`FftLayoutError::InvalidAxes`] for views or axes that cannot
///   describe a transform.
/// - [`FftLayoutError::InvalidShape`] and
///   [`FftLayoutError::NonTransformExtentMismatch`] for the additional
///   checks of [`RuntimeMode::Hardened`].
pub fn resolve_extents_with<I, O>(
    input: &I,
    output: &O,
    axes: &[isize],
    options: &ResolveOptions,
) -> FftLayoutResult<FftExtents>
where
    I: ArrayView + ?Sized,
    O: ArrayView + ?Sized,
{
    let started = Instant::now();
    let outcome = resolve(input, output, axes, options.mode);
    if options.trace {
        record_trace(ExtentTrace::from_outcome(
            input.rank(),
            axes,
            input.storage_order(),
            options.mode,
            &outcome,
            started.elapsed().as_nanos(),
        ));
    }
    outcome
}

fn resolve<I, O>(
    input: &I,
    output: &O,
    axes: &[isize],
    mode: RuntimeMode,
) -> FftLayoutResult<FftExtents>
where
    I: ArrayView + ?Sized,
    O: ArrayView + ?Sized,
{
    let rank = input.rank();
    if output.rank() != rank {
        return Err(FftLayoutError::RankMismatch {
            input: rank,
            output: output.rank(),
        });
    }
    let order = input.storage_order();
    if output.storage_order() != order {
        return Err(FftLayoutError::StorageOrderMismatch);
    }

    let axes = normalize_axes(axes, rank)?;
    let map = compute_axis_map(rank, &axes, order)?;
    let inner = order.innermost_position(rank);

    let mut in_full = Vec::with_capacity(rank);
    let mut out_full = Vec::with_capacity(rank);
    let mut fft_full = Vec::with_capacity(rank);
    for &idx in map.forward() {
        let n_in = input.extent(idx);
        let n_out = output.extent(idx);
        in_full.push(n_in);
        out_full.push(n_out);
        fft_full.push(n_in.max(n_out));
    }

    let direction = TransformDirection::from_kinds(input.scalar_kind(), output.scalar_kind())?;
    check_halved_extent(
        direction,
        map.forward()[inner],
        in_full[inner],
        out_full[inner],
    )?;

    if order == StorageOrder::ColumnMajor {
        in_full.reverse();
        out_full.reverse();
        fft_full.reverse();
    }

    let start = rank - axes.len();
    if mode.is_hardened() {
        check_hardened(&map, &in_full, &out_full, start)?;
    }

    let in_extents = in_full[start..].to_vec();
    let out_extents = out_full[start..].to_vec();
    let fft_extents = fft_full[start..].to_vec();

    let total_size = checked_product(&fft_full)?;
    let fft_size = checked_product(&fft_extents)?;
    let batch_count = if fft_size == 0 {
        0
    } else {
        total_size / fft_size
    };

    Ok(FftExtents {
        in_extents,
        out_extents,
        fft_extents,
        batch_count,
        direction,
    })
}

fn check_halved_extent(
    direction: TransformDirection,
    axis: usize,
    n_in: usize,
    n_out: usize,
) -> FftLayoutResult<()> {
    let (side, real, actual) = match direction.halved_side() {
        Some(Side::Output) => (Side::Output, n_in, n_out),
        Some(Side::Input) => (Side::Input, n_out, n_in),
        None => return Ok(()),
    };
    let expected = real / 2 + 1;
    if actual != expected {
        return Err(FftLayoutError::HalvedExtentMismatch {
            side,
            axis,
            expected,
            actual,
        });
    }
    Ok(())
}

// `in_full`/`out_full` are already in canonical order; positions below
// `start` are the batch axes.
fn check_hardened(
    map: &AxisMap,
    in_full: &[usize],
    out_full: &[usize],
    start: usize,
) -> FftLayoutResult<()> {
    if in_full.contains(&0) || out_full.contains(&0) {
        return Err(FftLayoutError::InvalidShape {
            detail: "zero-sized axes are rejected in hardened mode",
        });
    }
    let canonical = map.canonical_axes();
    for pos in 0..start {
        if in_full[pos] != out_full[pos] {
            return Err(FftLayoutError::NonTransformExtentMismatch {
                axis: canonical[pos],
                input: in_full[pos],
                output: out_full[pos],
            });
        }
    }
    Ok(())
}

fn checked_product(extents: &[usize]) -> FftLayoutResult<usize> {
    extents
        .iter()
        .try_fold(1usize, |acc, &next| acc.checked_mul(next))
        .ok_or(FftLayoutError::InvalidShape {
            detail: "extent product overflow",
        })
}
