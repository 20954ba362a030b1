#![no_main]

use arbitrary::Arbitrary;
use fsci_fft_extents::{
    ResolveOptions, StorageOrder, TransformDirection, ViewShape, resolve_extents_with,
};
use fsci_runtime::RuntimeMode;
use libfuzzer_sys::fuzz_target;
use num_complex::Complex64;

#[derive(Debug, Arbitrary)]
struct ResolveInput {
    in_extents: Vec<u16>,
    out_extents: Vec<u16>,
    axes: Vec<i8>,
    direction: u8,
    column_major: bool,
    hardened: bool,
}

fn clip(extents: &[u16]) -> Vec<usize> {
    extents.iter().take(6).map(|&n| usize::from(n)).collect()
}

fuzz_target!(|input: ResolveInput| {
    let order = if input.column_major {
        StorageOrder::ColumnMajor
    } else {
        StorageOrder::RowMajor
    };
    let mode = if input.hardened {
        RuntimeMode::Hardened
    } else {
        RuntimeMode::Strict
    };
    let options = ResolveOptions::default().with_mode(mode);
    let axes = input
        .axes
        .iter()
        .take(6)
        .map(|&axis| isize::from(axis))
        .collect::<Vec<_>>();
    let in_extents = clip(&input.in_extents);
    let out_extents = clip(&input.out_extents);
    let canonical_total = in_extents
        .iter()
        .zip(&out_extents)
        .try_fold(1usize, |acc, (&a, &b)| acc.checked_mul(a.max(b)));

    let result = match input.direction % 3 {
        0 => resolve_extents_with(
            &ViewShape::<f64>::new(in_extents, order),
            &ViewShape::<Complex64>::new(out_extents, order),
            &axes,
            &options,
        ),
        1 => resolve_extents_with(
            &ViewShape::<Complex64>::new(in_extents, order),
            &ViewShape::<f64>::new(out_extents, order),
            &axes,
            &options,
        ),
        _ => resolve_extents_with(
            &ViewShape::<Complex64>::new(in_extents, order),
            &ViewShape::<Complex64>::new(out_extents, order),
            &axes,
            &options,
        ),
    };

    if let Ok(extents) = result {
        assert_eq!(extents.dim(), extents.in_extents.len());
        for k in 0..extents.dim() {
            assert_eq!(
                extents.fft_extents[k],
                extents.in_extents[k].max(extents.out_extents[k])
            );
        }
        if extents.fft_size() == 0 {
            assert_eq!(extents.batch_count, 0);
        } else {
            assert_eq!(Some(extents.batch_count * extents.fft_size()), canonical_total);
        }
        if extents.direction == TransformDirection::ComplexToComplex {
            assert!(extents.direction.halved_side().is_none());
        }
    }
});
