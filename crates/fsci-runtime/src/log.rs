#![forbid(unsafe_code)]

//! Structured JSON-line log records used by property and integration tests.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::mode::RuntimeMode;

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
#[must_use]
pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

/// Structured test log entry for comparing runs across machines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestLogEntry {
    pub test_id: String,
    pub timestamp_ms: u64,
    pub level: TestLogLevel,
    pub module: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cases: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<RuntimeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TestResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestLogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestResult {
    Pass,
    Fail,
    Skip,
}

impl TestLogEntry {
    #[must_use]
    pub fn new(
        test_id: impl Into<String>,
        module: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            test_id: test_id.into(),
            timestamp_ms: now_unix_ms(),
            level: TestLogLevel::Info,
            module: module.into(),
            message: message.into(),
            cases: None,
            mode: None,
            result: None,
        }
    }

    #[must_use]
    pub fn with_result(mut self, result: TestResult) -> Self {
        self.result = Some(result);
        self
    }

    #[must_use]
    pub fn with_cases(mut self, cases: u32) -> Self {
        self.cases = Some(cases);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Serialize to a single JSON line.
    #[must_use]
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

#[cfg(test)]
mod tests {
    use super::{TestLogEntry, TestResult};
    use crate::RuntimeMode;

    #[test]
    fn log_entry_serializes_optional_fields() {
        let entry = TestLogEntry::new("axis_map_tables", "fsci_fft_extents", "tables matched")
            .with_result(TestResult::Pass)
            .with_cases(256)
            .with_mode(RuntimeMode::Hardened);
        let parsed: serde_json::Value =
            serde_json::from_str(&entry.to_json_line()).expect("valid JSON");
        assert_eq!(parsed["test_id"], "axis_map_tables");
        assert_eq!(parsed["result"], "pass");
        assert_eq!(parsed["cases"], 256);
        assert_eq!(parsed["mode"], "Hardened");
        assert_eq!(parsed["level"], "info");
    }

    #[test]
    fn log_entry_omits_none_fields() {
        let entry = TestLogEntry::new("batch_count", "fsci_fft_extents", "skipped");
        let parsed: serde_json::Value =
            serde_json::from_str(&entry.to_json_line()).expect("valid JSON");
        assert_eq!(parsed["level"], "info");
        assert!(parsed.get("cases").is_none());
        assert!(parsed.get("mode").is_none());
        assert!(parsed.get("result").is_none());
    }
}
