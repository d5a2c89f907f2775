//! Top-level error type for the dispatch layer.

use luxafor_errors::{DeviceError, ErrorCategory, ErrorSeverity, ValidationError};
use luxafor_hid_common::HidCommonError;
use thiserror::Error;

/// Every failure a [`crate::Device`] or [`crate::DeviceConfig`] can surface.
#[derive(Error, Debug)]
pub enum LuxaforError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    /// Raised by the transport and passed through unchanged.
    #[error("Transport error: {0}")]
    Transport(#[from] HidCommonError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LuxaforError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation(e) => e.severity(),
            Self::Device(e) => e.severity(),
            Self::Transport(HidCommonError::Disconnected) => ErrorSeverity::Critical,
            Self::Transport(_) => ErrorSeverity::Error,
            Self::Config(_) => ErrorSeverity::Error,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(e) => e.category(),
            Self::Device(e) => e.category(),
            Self::Transport(_) => ErrorCategory::Transport,
            Self::Config(_) => ErrorCategory::Config,
        }
    }

    /// True when the device handle is gone and further sends cannot succeed.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Device(DeviceError::UseAfterDispose(_))
                | Self::Transport(HidCommonError::Disconnected)
        )
    }
}

pub type LuxaforResult<T> = Result<T, LuxaforError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: LuxaforError = ValidationError::out_of_range("led index", 9u8, 0u8, 8u8).into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("led index value 9"));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_use_after_dispose_is_fatal() {
        let err: LuxaforError = DeviceError::disposed("/dev/hidraw0").into();
        assert!(err.is_fatal());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Device);
    }

    #[test]
    fn test_transport_error_passes_through() {
        let err: LuxaforError = HidCommonError::WriteError("stall".to_string()).into();
        assert_eq!(err.category(), ErrorCategory::Transport);
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(
            err.to_string(),
            "Transport error: Failed to write to device: stall"
        );
    }

    #[test]
    fn test_config_error_category() {
        let err = LuxaforError::Config("bad json".to_string());
        assert_eq!(err.category(), ErrorCategory::Config);
    }
}
