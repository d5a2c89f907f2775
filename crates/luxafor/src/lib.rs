//! Async driver for the Luxafor Flag USB notification light.
//!
//! A [`Device`] owns one open HID transport and turns high-level requests
//! (set a color, blink, run a wave or a built-in pattern) into 9-byte output
//! reports. A [`Port`] binds a device to one LED target.
//!
//! ```rust
//! use luxafor::{Color, Device, DeviceConfig, LedTarget};
//! use luxafor_hid_common::mock::MockHidTransport;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), luxafor::LuxaforError> {
//! let transport = MockHidTransport::new(0x04D8, 0xF372, "/dev/hidraw0");
//! let mut device = Device::new(Box::new(transport.clone()), DeviceConfig::default());
//!
//! assert!(device.set_color(LedTarget::AllLeds, Color::new(0xC8, 0x14, 0x2A), 0).await?);
//! assert_eq!(
//!     transport.get_write_history(),
//!     vec![vec![0x00, 0x01, 0xFF, 0xC8, 0x14, 0x2A, 0x00, 0x00, 0x00]]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Enable the `hidapi` feature for the system HID backend
//! (`luxafor_hid_common::HidApiPort`).

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod device;
pub mod error;
pub mod port;

pub use config::DeviceConfig;
pub use device::{Device, DeviceState};
pub use error::{LuxaforError, LuxaforResult};
pub use port::Port;

pub use luxafor_errors::{DeviceError, ValidationError};
pub use luxafor_hid_common::{HidCommonError, HidDeviceInfo, HidPort, HidTransport};
pub use luxafor_hid_protocol::{
    Color, Command, LedIndex, LedTarget, OutputReport, PatternType, RawReport, WaveType,
};
