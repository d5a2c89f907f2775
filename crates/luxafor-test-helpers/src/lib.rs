//! Shared test utilities for the Luxafor crates.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`report`] - Hex report parsing and the [`assert_report!`] macro
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! luxafor-test-helpers = { path = "crates/luxafor-test-helpers" }
//! ```
//!
//! ```rust,ignore
//! use luxafor_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod must;
pub mod prelude;
pub mod report;

pub use must::*;
pub use report::{hex_report, hex_reports};
