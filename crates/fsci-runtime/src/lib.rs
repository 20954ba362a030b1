#![forbid(unsafe_code)]

//! FrankenSciPy runtime: execution modes and structured test logging.
//!
//! ## Module layout
//!
//! | Module | Contents                                                 |
//! |--------|----------------------------------------------------------|
//! | `mode` | [`RuntimeMode`] enum (Strict / Hardened)                 |
//! | `log`  | [`TestLogEntry`] JSON-line records for test evidence     |

pub mod log;
pub mod mode;

pub use log::{TestLogEntry, TestLogLevel, TestResult, now_unix_ms};
pub use mode::RuntimeMode;
