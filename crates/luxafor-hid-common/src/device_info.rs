//! Identity of an enumerated HID device.
//!
//! A device is opened by its OS path. The USB IDs decide whether the driver
//! accepts it; the string descriptors are only used in logs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a [`crate::HidPort`] reports about one device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HidDeviceInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    /// OS path passed back to [`crate::HidPort::open_device`].
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl HidDeviceInfo {
    pub fn new(vendor_id: u16, product_id: u16, path: impl Into<String>) -> Self {
        Self {
            vendor_id,
            product_id,
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// True when the device carries exactly these USB IDs.
    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }

    /// USB IDs in `lsusb` form, e.g. `04d8:f372`.
    pub fn usb_id(&self) -> String {
        format!("{:04x}:{:04x}", self.vendor_id, self.product_id)
    }
}

/// `LUXAFOR FLAG [04d8:f372] at /dev/hidraw0`, falling back to the
/// manufacturer string and then to `HID device`.
impl fmt::Display for HidDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self
            .product_name
            .as_deref()
            .or(self.manufacturer.as_deref())
            .unwrap_or("HID device");
        write!(f, "{label} [{}] at {}", self.usb_id(), self.path)
    }
}
