//! HID transport abstractions for Luxafor devices.
//!
//! The dispatch layer only needs a handle that can write one output report
//! and be closed once. This crate defines that seam ([`HidTransport`]), the
//! device-opening collaborator ([`HidPort`]), an in-memory [`mock`]
//! implementation of both, and, behind the `hidapi` feature, a backend over
//! the system HID library.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod device_info;
pub mod hid_traits;
#[cfg(feature = "hidapi")]
pub mod hidapi_backend;

pub use device_info::*;
pub use hid_traits::*;
#[cfg(feature = "hidapi")]
pub use hidapi_backend::{HidApiPort, HidApiTransport};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HidCommonError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Failed to open device: {0}")]
    OpenError(String),

    #[error("Failed to write to device: {0}")]
    WriteError(String),

    #[error("Device disconnected")]
    Disconnected,
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = HidCommonError::DeviceNotFound("test".to_string());
        assert_eq!(format!("{err}"), "Device not found: test");

        let err = HidCommonError::Disconnected;
        assert_eq!(format!("{err}"), "Device disconnected");
    }
}
