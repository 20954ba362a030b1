#![forbid(unsafe_code)]

//! Extent resolution for multi-dimensional FFT dispatch.
//!
//! FFT backends plan transforms over the trailing axes of a row-major array.
//! Callers hand us arrays in either storage order and ask for arbitrary
//! axes, so before a plan can be built we reconcile the two:
//!
//! - `layout`: what the resolver reads from a view ([`ArrayView`],
//!   [`StorageOrder`], [`ScalarKind`])
//! - `axes`: the [`AxisMap`] permutation that moves the requested axes into
//!   trailing position
//! - `extents`: [`resolve_extents`], producing the input, output and
//!   canonical extents of the transform axes plus the batch count
//! - `trace`: opt-in JSON-line records of resolver calls
//!
//! No data is read, copied or transposed here.

pub mod axes;
pub mod error;
pub mod extents;
pub mod layout;
pub mod trace;

pub use axes::{AxisMap, compute_axis_map, normalize_axes, normalize_axis};
pub use error::{FftLayoutError, FftLayoutResult, Side};
pub use extents::{
    FftExtents, ResolveOptions, TransformDirection, resolve_extents, resolve_extents_with,
};
pub use layout::{ArrayView, FftScalar, ScalarKind, StorageOrder, ViewShape, classify_scalar};
pub use trace::{ExtentTrace, take_extent_traces};
