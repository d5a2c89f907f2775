//! Prelude module for convenient error handling imports.
//!
//! ```
//! use luxafor_errors::prelude::*;
//!
//! fn check_index(index: u8) -> Result<u8, ValidationError> {
//!     if index > 8 {
//!         return Err(ValidationError::out_of_range("led index", index, 0, 8));
//!     }
//!     Ok(index)
//! }
//!
//! assert!(check_index(9).is_err());
//! ```

pub use crate::{
    common::{ErrorCategory, ErrorSeverity},
    device::DeviceError,
    validation::ValidationError,
};
