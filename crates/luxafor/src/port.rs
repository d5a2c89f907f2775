//! A device bound to one fixed LED target.

use luxafor_hid_protocol::{Color, LedTarget};

use crate::device::Device;
use crate::error::LuxaforResult;

/// A [`Device`] with its target already chosen.
///
/// Writes exactly what the matching `Device` call with the same target
/// would write. Holds the device mutably for its lifetime.
#[derive(Debug)]
pub struct Port<'a> {
    device: &'a mut Device,
    target: LedTarget,
}

impl<'a> Port<'a> {
    pub fn new(device: &'a mut Device, target: LedTarget) -> Self {
        Self { device, target }
    }

    pub fn target(&self) -> LedTarget {
        self.target
    }

    /// # Errors
    ///
    /// See [`Device::set_color`].
    pub async fn set_color(&mut self, color: Color, fade_speed: u8) -> LuxaforResult<bool> {
        self.device.set_color(self.target, color, fade_speed).await
    }

    /// # Errors
    ///
    /// See [`Device::blink`].
    pub async fn blink(&mut self, color: Color, speed: u8, repeat: u8) -> LuxaforResult<bool> {
        self.device.blink(self.target, color, speed, repeat).await
    }
}
