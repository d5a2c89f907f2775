//! Error types shared by the Luxafor crates.
//!
//! The error system is organized into three modules:
//!
//! - [`common`]: severity and category classification
//! - [`device`]: device lifecycle and dispatch errors
//! - [`validation`]: construction-time range and format errors
//!
//! Validation happens once, at the boundary where a value is built. Nothing
//! in this crate performs I/O.
//!
//! # Example
//!
//! ```
//! use luxafor_errors::{DeviceError, ErrorSeverity};
//!
//! let err = DeviceError::disposed("/dev/hidraw0");
//! assert_eq!(err.severity(), ErrorSeverity::Critical);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod device;
pub mod prelude;
pub mod validation;

pub use common::{ErrorCategory, ErrorSeverity};
pub use device::DeviceError;
pub use validation::ValidationError;
