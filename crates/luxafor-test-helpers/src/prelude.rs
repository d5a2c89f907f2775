//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use luxafor_test_helpers::prelude::*;
//! ```

pub use crate::assert_report;
pub use crate::must::{must, must_async, must_some, must_with};
pub use crate::report::{hex_report, hex_reports};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
