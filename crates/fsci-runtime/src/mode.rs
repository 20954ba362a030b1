#![forbid(unsafe_code)]

//! Runtime mode shared by every FrankenSciPy entrypoint.

use serde::{Deserialize, Serialize};

/// Operational mode governing how much validation an entrypoint performs.
///
/// - **Strict**: follow the reference semantics exactly; only contract
///   violations that would corrupt results are rejected.
/// - **Hardened**: additionally reject inputs the reference tolerates but
///   which make derived quantities ill-defined (zero-sized axes, extents
///   that disagree outside the transformed axes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuntimeMode {
    #[default]
    Strict,
    Hardened,
}

impl RuntimeMode {
    #[must_use]
    pub const fn is_hardened(self) -> bool {
        matches!(self, Self::Hardened)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Hardened => "Hardened",
        }
    }
}
