//! Opt-in structured trace of extent resolutions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

use fsci_runtime::RuntimeMode;
use serde::Serialize;

use crate::axes::normalize_axis;
use crate::error::FftLayoutResult;
use crate::extents::{FftExtents, TransformDirection};
use crate::layout::StorageOrder;

/// One resolver call, successful or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtentTrace {
    pub operation_id: String,
    pub direction: Option<TransformDirection>,
    pub rank: usize,
    /// Axes counted from zero; entries that fail to normalize are kept as given.
    pub axes: Vec<isize>,
    pub storage_order: StorageOrder,
    pub fft_extents: Vec<usize>,
    pub batch_count: Option<usize>,
    pub mode: RuntimeMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timing_ns: u128,
}

impl ExtentTrace {
    pub(crate) fn from_outcome(
        rank: usize,
        axes: &[isize],
        storage_order: StorageOrder,
        mode: RuntimeMode,
        outcome: &FftLayoutResult<FftExtents>,
        timing_ns: u128,
    ) -> Self {
        let (direction, fft_extents, batch_count, error) = match outcome {
            Ok(extents) => (
                Some(extents.direction),
                extents.fft_extents.clone(),
                Some(extents.batch_count),
                None,
            ),
            Err(err) => (None, Vec::new(), None, Some(err.to_string())),
        };
        Self {
            operation_id: next_operation_id(),
            direction,
            rank,
            axes: axes
                .iter()
                .map(|&axis| {
                    normalize_axis(axis, rank)
                        .ok()
                        .and_then(|resolved| isize::try_from(resolved).ok())
                        .unwrap_or(axis)
                })
                .collect(),
            storage_order,
            fft_extents,
            batch_count,
            mode,
            error,
            timing_ns,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    #[must_use]
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

static TRACE_LOG: OnceLock<Mutex<Vec<ExtentTrace>>> = OnceLock::new();
static OPERATION_COUNTER: AtomicU64 = AtomicU64::new(1);

fn trace_log() -> &'static Mutex<Vec<ExtentTrace>> {
    TRACE_LOG.get_or_init(|| Mutex::new(Vec::new()))
}

fn next_operation_id() -> String {
    let next = OPERATION_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("fft-extents-{next:016x}")
}

pub(crate) fn record_trace(trace: ExtentTrace) {
    if let Ok(mut log) = trace_log().lock() {
        log.push(trace);
    }
}

/// Drain every trace recorded so far.
#[must_use]
pub fn take_extent_traces() -> Vec<ExtentTrace> {
    if let Ok(mut log) = trace_log().lock() {
        return std::mem::take(&mut *log);
    }
    Vec::new()
}
