use std::fmt::{Display, Formatter};

use thiserror::Error;

pub type FftLayoutResult<T> = Result<T, FftLayoutError>;

/// Which side of an array-to-array transform a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Input,
    Output,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Input => Self::Output,
            Self::Output => Self::Input,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FftLayoutError {
    #[error("type mismatch: real {real} requires complex {expected_complex}")]
    TypeMismatch { real: Side, expected_complex: Side },
    #[error(
        "halved extent mismatch on axis {axis}: complex {side} extent is {actual}, expected {expected}"
    )]
    HalvedExtentMismatch {
        side: Side,
        axis: usize,
        expected: usize,
        actual: usize,
    },
    #[error("rank mismatch: input has rank {input}, output has rank {output}")]
    RankMismatch { input: usize, output: usize },
    #[error("input and output views must share the same storage order")]
    StorageOrderMismatch,
    #[error("invalid axes: {detail}")]
    InvalidAxes { detail: String },
    #[error("invalid shape: {detail}")]
    InvalidShape { detail: &'static str },
    #[error(
        "extent mismatch on non-transform axis {axis}: input has {input}, output has {output}"
    )]
    NonTransformExtentMismatch {
        axis: usize,
        input: usize,
        output: usize,
    },
}

impl FftLayoutError {
    pub(crate) fn invalid_axes(detail: impl Into<String>) -> Self {
        Self::InvalidAxes {
            detail: detail.into(),
        }
    }
}
