#![no_main]

use arbitrary::Arbitrary;
use fsci_fft_extents::{StorageOrder, compute_axis_map, normalize_axes};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct AxisMapInput {
    rank: u8,
    axes: Vec<i8>,
    column_major: bool,
}

fuzz_target!(|input: AxisMapInput| {
    let rank = usize::from(input.rank % 9);
    let order = if input.column_major {
        StorageOrder::ColumnMajor
    } else {
        StorageOrder::RowMajor
    };
    let axes = input
        .axes
        .iter()
        .take(9)
        .map(|&axis| isize::from(axis))
        .collect::<Vec<_>>();
    let Ok(axes) = normalize_axes(&axes, rank) else {
        return;
    };
    let map = compute_axis_map(rank, &axes, order).expect("normalized axes always map");
    assert_eq!(map.trailing_axes(axes.len()), axes);
    for pos in 0..rank {
        assert_eq!(map.inverse()[map.forward()[pos]], pos);
    }
});
