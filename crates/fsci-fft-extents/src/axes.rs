//! Canonicalization of transform axes.
//!
//! FFT backends transform the trailing axes of a row-major array. An
//! [`AxisMap`] records the permutation that moves the requested axes of a
//! view into that position, for either storage order:
//!
//! ```text
//! row-major:    forward = [other axes ascending] ++ [axes as given]
//! column-major: forward = [axes reversed]        ++ [other axes ascending]
//! ```
//!
//! Reversing a column-major sequence turns it into the row-major sense, so
//! in both cases the last `D` canonical positions hold the requested axes in
//! the caller's order.

use crate::error::{FftLayoutError, FftLayoutResult};
use crate::layout::StorageOrder;

/// Forward and inverse permutations over `[0, rank)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AxisMap {
    forward: Vec<usize>,
    inverse: Vec<usize>,
    order: StorageOrder,
}

impl AxisMap {
    /// `forward[i]` is the view axis that occupies position `i`.
    #[must_use]
    pub fn forward(&self) -> &[usize] {
        &self.forward
    }

    /// `inverse[axis]` is the position view axis `axis` moves to.
    #[must_use]
    pub fn inverse(&self) -> &[usize] {
        &self.inverse
    }

    #[must_use]
    pub fn rank(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub const fn storage_order(&self) -> StorageOrder {
        self.order
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.forward.iter().enumerate().all(|(pos, &axis)| pos == axis)
    }

    /// Whether data must be physically transposed before a backend call.
    #[must_use]
    pub fn needs_transpose(&self) -> bool {
        !self.is_identity()
    }

    /// View axes in row-major canonical order.
    #[must_use]
    pub fn canonical_axes(&self) -> Vec<usize> {
        match self.order {
            StorageOrder::RowMajor => self.forward.clone(),
            StorageOrder::ColumnMajor => self.forward.iter().rev().copied().collect(),
        }
    }

    /// The view axes occupying the last `count` canonical positions.
    #[must_use]
    pub fn trailing_axes(&self, count: usize) -> Vec<usize> {
        let canonical = self.canonical_axes();
        let start = canonical.len().saturating_sub(count);
        canonical[start..].to_vec()
    }
}

/// Resolve a possibly negative axis index against `rank`.
pub fn normalize_axis(axis: isize, rank: usize) -> FftLayoutResult<usize> {
    let signed_rank = isize::try_from(rank)
        .map_err(|_| FftLayoutError::invalid_axes(format!("rank {rank} is too large")))?;
    let resolved = if axis < 0 { axis + signed_rank } else { axis };
    if !(0..signed_rank).contains(&resolved) {
        return Err(FftLayoutError::invalid_axes(format!(
            "axis {axis} is out of range for rank {rank}"
        )));
    }
    Ok(resolved as usize)
}

/// Normalize every axis and check the list is usable as transform axes.
pub fn normalize_axes(axes: &[isize], rank: usize) -> FftLayoutResult<Vec<usize>> {
    let normalized = axes
        .iter()
        .map(|&axis| normalize_axis(axis, rank))
        .collect::<FftLayoutResult<Vec<_>>>()?;
    validate_axes(&normalized, rank)?;
    Ok(normalized)
}

/// Build the axis map that moves `axes` to the trailing canonical positions.
pub fn compute_axis_map(
    rank: usize,
    axes: &[usize],
    order: StorageOrder,
) -> FftLayoutResult<AxisMap> {
    validate_axes(axes, rank)?;

    let others = (0..rank).filter(|axis| !axes.contains(axis));
    let forward: Vec<usize> = match order {
        StorageOrder::RowMajor => others.chain(axes.iter().copied()).collect(),
        StorageOrder::ColumnMajor => axes.iter().rev().copied().chain(others).collect(),
    };

    let mut inverse = vec![0; rank];
    for (pos, &axis) in forward.iter().enumerate() {
        inverse[axis] = pos;
    }

    Ok(AxisMap {
        forward,
        inverse,
        order,
    })
}

fn validate_axes(axes: &[usize], rank: usize) -> FftLayoutResult<()> {
    if axes.is_empty() {
        return Err(FftLayoutError::invalid_axes("at least one axis is required"));
    }
    if axes.len() > rank {
        return Err(FftLayoutError::invalid_axes(format!(
            "{} axes requested for a rank-{rank} view",
            axes.len()
        )));
    }
    let mut seen = vec![false; rank];
    for &axis in axes {
        if axis >= rank {
            return Err(FftLayoutError::invalid_axes(format!(
                "axis {axis} is out of range for rank {rank}"
            )));
        }
        if std::mem::replace(&mut seen[axis], true) {
            return Err(FftLayoutError::invalid_axes(format!(
                "axis {axis} is repeated"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{AxisMap, compute_axis_map, normalize_axes, normalize_axis};
    use crate::error::FftLayoutError;
    use crate::layout::StorageOrder;

    fn map(rank: usize, axes: &[isize], order: StorageOrder) -> AxisMap {
        let axes = normalize_axes(axes, rank).expect("axes should normalize");
        compute_axis_map(rank, &axes, order).expect("axis map should build")
    }

    fn assert_map(rank: usize, axes: &[isize], order: StorageOrder, fwd: &[usize], inv: &[usize]) {
        let m = map(rank, axes, order);
        assert_eq!(m.forward(), fwd, "forward for axes {axes:?} ({order:?})");
        assert_eq!(m.inverse(), inv, "inverse for axes {axes:?} ({order:?})");
    }

    #[test]
    fn rank1_maps_are_identity() {
        for order in [StorageOrder::RowMajor, StorageOrder::ColumnMajor] {
            assert_map(1, &[0], order, &[0], &[0]);
            assert!(!map(1, &[0], order).needs_transpose());
        }
    }

    #[test]
    fn rank2_row_major_table() {
        let order = StorageOrder::RowMajor;
        assert_map(2, &[0], order, &[1, 0], &[1, 0]);
        assert_map(2, &[1], order, &[0, 1], &[0, 1]);
        assert_map(2, &[-1], order, &[0, 1], &[0, 1]);
        assert_map(2, &[0, -1], order, &[0, 1], &[0, 1]);
        assert_map(2, &[-1, 0], order, &[1, 0], &[1, 0]);
        assert_map(2, &[0, 1], order, &[0, 1], &[0, 1]);
        assert_map(2, &[1, 0], order, &[1, 0], &[1, 0]);
    }

    #[test]
    fn rank2_column_major_table() {
        let order = StorageOrder::ColumnMajor;
        assert_map(2, &[0], order, &[0, 1], &[0, 1]);
        assert_map(2, &[1], order, &[1, 0], &[1, 0]);
        assert_map(2, &[-1], order, &[1, 0], &[1, 0]);
        assert_map(2, &[0, -1], order, &[1, 0], &[1, 0]);
        assert_map(2, &[-1, 0], order, &[0, 1], &[0, 1]);
        assert_map(2, &[0, 1], order, &[1, 0], &[1, 0]);
        assert_map(2, &[1, 0], order, &[0, 1], &[0, 1]);
    }

    #[test]
    fn rank3_row_major_table() {
        let order = StorageOrder::RowMajor;
        assert_map(3, &[0], order, &[1, 2, 0], &[2, 0, 1]);
        assert_map(3, &[1], order, &[0, 2, 1], &[0, 2, 1]);
        assert_map(3, &[2], order, &[0, 1, 2], &[0, 1, 2]);

        assert_map(3, &[0, 1], order, &[2, 0, 1], &[1, 2, 0]);
        assert_map(3, &[0, 2], order, &[1, 0, 2], &[1, 0, 2]);
        assert_map(3, &[1, 0], order, &[2, 1, 0], &[2, 1, 0]);
        assert_map(3, &[1, 2], order, &[0, 1, 2], &[0, 1, 2]);
        assert_map(3, &[2, 0], order, &[1, 2, 0], &[2, 0, 1]);
        assert_map(3, &[2, 1], order, &[0, 2, 1], &[0, 2, 1]);

        assert_map(3, &[0, 1, 2], order, &[0, 1, 2], &[0, 1, 2]);
        assert_map(3, &[0, 2, 1], order, &[0, 2, 1], &[0, 2, 1]);
        assert_map(3, &[1, 0, 2], order, &[1, 0, 2], &[1, 0, 2]);
        assert_map(3, &[1, 2, 0], order, &[1, 2, 0], &[2, 0, 1]);
        assert_map(3, &[2, 0, 1], order, &[2, 0, 1], &[1, 2, 0]);
        assert_map(3, &[2, 1, 0], order, &[2, 1, 0], &[2, 1, 0]);
    }

    #[test]
    fn rank3_column_major_table() {
        let order = StorageOrder::ColumnMajor;
        assert_map(3, &[0], order, &[0, 1, 2], &[0, 1, 2]);
        assert_map(3, &[1], order, &[1, 0, 2], &[1, 0, 2]);
        assert_map(3, &[2], order, &[2, 0, 1], &[1, 2, 0]);

        assert_map(3, &[0, 1], order, &[1, 0, 2], &[1, 0, 2]);
        assert_map(3, &[0, 2], order, &[2, 0, 1], &[1, 2, 0]);
        assert_map(3, &[1, 0], order, &[0, 1, 2], &[0, 1, 2]);
        assert_map(3, &[1, 2], order, &[2, 1, 0], &[2, 1, 0]);
        assert_map(3, &[2, 0], order, &[0, 2, 1], &[0, 2, 1]);
        assert_map(3, &[2, 1], order, &[1, 2, 0], &[2, 0, 1]);

        assert_map(3, &[0, 1, 2], order, &[2, 1, 0], &[2, 1, 0]);
        assert_map(3, &[0, 2, 1], order, &[1, 2, 0], &[2, 0, 1]);
        assert_map(3, &[1, 0, 2], order, &[2, 0, 1], &[1, 2, 0]);
        assert_map(3, &[1, 2, 0], order, &[0, 2, 1], &[0, 2, 1]);
        assert_map(3, &[2, 0, 1], order, &[1, 0, 2], &[1, 0, 2]);
        assert_map(3, &[2, 1, 0], order, &[0, 1, 2], &[0, 1, 2]);
    }

    #[test]
    fn trailing_axes_preserve_caller_order_in_both_orders() {
        for order in [StorageOrder::RowMajor, StorageOrder::ColumnMajor] {
            assert_eq!(map(4, &[2, 0], order).trailing_axes(2), vec![2, 0]);
            assert_eq!(map(4, &[3, 1, 2], order).trailing_axes(3), vec![3, 1, 2]);
            assert_eq!(map(3, &[-1], order).trailing_axes(1), vec![2]);
        }
    }

    #[test]
    fn forward_and_inverse_are_mutual_inverses() {
        let m = map(5, &[3, 0, 4], StorageOrder::ColumnMajor);
        for pos in 0..m.rank() {
            assert_eq!(m.inverse()[m.forward()[pos]], pos);
        }
        assert_eq!(m.storage_order(), StorageOrder::ColumnMajor);
        assert!(m.needs_transpose());
    }

    #[test]
    fn normalize_axis_counts_negative_from_end() {
        assert_eq!(normalize_axis(-1, 3), Ok(2));
        assert_eq!(normalize_axis(-3, 3), Ok(0));
        assert_eq!(normalize_axis(2, 3), Ok(2));
        assert!(matches!(
            normalize_axis(3, 3),
            Err(FftLayoutError::InvalidAxes { .. })
        ));
        assert!(matches!(
            normalize_axis(-4, 3),
            Err(FftLayoutError::InvalidAxes { .. })
        ));
    }

    #[test]
    fn invalid_axis_lists_are_rejected() {
        for axes in [&[][..], &[0, 0][..], &[1, -1][..], &[0, 1, 2][..]] {
            let err = normalize_axes(axes, 2).expect_err("axis list should be rejected");
            assert!(matches!(err, FftLayoutError::InvalidAxes { .. }), "{axes:?}");
        }
        let err = compute_axis_map(2, &[5], StorageOrder::RowMajor)
            .expect_err("out-of-range axis should be rejected");
        assert!(err.to_string().contains("out of range"));
    }
}
