//! Device lifecycle and dispatch errors.

use crate::common::{ErrorCategory, ErrorSeverity};

/// Device errors raised by the dispatch layer itself.
///
/// Transport failures are not translated into this type; they propagate
/// as the transport's own error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// A command was sent after the device released its transport.
    #[error("Device {0} has been disposed")]
    UseAfterDispose(String),

    /// No device matched the requested path or identifiers.
    #[error("Device not found: {0}")]
    NotFound(String),

    /// The device was found but could not be opened.
    #[error("Failed to connect to device: {0}")]
    ConnectionFailed(String),

    /// A device with unexpected USB identifiers was offered.
    #[error("Unsupported device: vendor={vendor_id:#06x}, product={product_id:#06x}")]
    UnsupportedDevice {
        /// USB vendor ID
        vendor_id: u16,
        /// USB product ID
        product_id: u16,
    },
}

impl DeviceError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DeviceError::UseAfterDispose(_) => ErrorSeverity::Critical,
            DeviceError::NotFound(_) => ErrorSeverity::Error,
            DeviceError::ConnectionFailed(_) => ErrorSeverity::Error,
            DeviceError::UnsupportedDevice { .. } => ErrorSeverity::Error,
        }
    }

    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Device
    }

    /// Create a use-after-dispose error for the device at `path`.
    pub fn disposed(path: impl Into<String>) -> Self {
        DeviceError::UseAfterDispose(path.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposed_message_names_device() {
        let err = DeviceError::disposed("/dev/hidraw3");
        assert_eq!(err.to_string(), "Device /dev/hidraw3 has been disposed");
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_unsupported_device_formats_ids_as_hex() {
        let err = DeviceError::UnsupportedDevice {
            vendor_id: 0x04D8,
            product_id: 0x0001,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported device: vendor=0x04d8, product=0x0001"
        );
    }

    #[test]
    fn test_device_errors_share_category() {
        assert_eq!(
            DeviceError::NotFound("x".into()).category(),
            ErrorCategory::Device
        );
        assert_eq!(
            DeviceError::ConnectionFailed("x".into()).category(),
            ErrorCategory::Device
        );
    }
}
