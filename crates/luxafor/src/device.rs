//! The dispatch layer: one open Luxafor device and the commands it accepts.

use std::fmt;
use std::time::Duration;

use luxafor_errors::DeviceError;
use luxafor_hid_common::{HidCommonError, HidDeviceInfo, HidPort, HidTransport};
use luxafor_hid_protocol::{
    Color, Command, LedTarget, OutputReport, PatternType, REPORT_LEN, WaveType, format_report,
};
use tracing::{debug, info, warn};

use crate::config::DeviceConfig;
use crate::error::{LuxaforError, LuxaforResult};
use crate::port::Port;

/// Lifecycle of a [`Device`]. `Disposed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceState {
    Open,
    Disposed,
}

/// An open Luxafor device.
///
/// Owns its transport exclusively. Every operation takes `&mut self`, so at
/// most one report is in flight per device; share a device between tasks
/// with `tokio::sync::Mutex`.
///
/// The transport is closed exactly once, by [`Device::dispose`] or on drop.
pub struct Device {
    transport: Option<Box<dyn HidTransport>>,
    info: HidDeviceInfo,
    config: DeviceConfig,
}

impl Device {
    /// Wrap an already-open transport.
    pub fn new(transport: Box<dyn HidTransport>, config: DeviceConfig) -> Self {
        let info = transport.device_info().clone();
        info!("Opened Luxafor device {}", info);
        Self {
            transport: Some(transport),
            info,
            config,
        }
    }

    /// Open the device at `path` through `port`.
    ///
    /// # Errors
    ///
    /// Fails when the config is invalid. A missing `path` is
    /// [`DeviceError::NotFound`] and a device the OS refuses to open is
    /// [`DeviceError::ConnectionFailed`]. Returns
    /// [`DeviceError::UnsupportedDevice`] when the opened device's USB IDs
    /// differ from the configured ones; that transport is closed before
    /// returning.
    pub async fn connect(
        port: &dyn HidPort,
        path: &str,
        config: DeviceConfig,
    ) -> LuxaforResult<Self> {
        config.validate()?;
        let mut transport = port.open_device(path).await.map_err(|e| match e {
            HidCommonError::DeviceNotFound(missing) => {
                LuxaforError::Device(DeviceError::NotFound(missing))
            }
            HidCommonError::OpenError(reason) => {
                LuxaforError::Device(DeviceError::ConnectionFailed(reason))
            }
            other => LuxaforError::Transport(other),
        })?;
        let info = transport.device_info();
        if !info.matches(config.vendor_id, config.product_id) {
            let err = DeviceError::UnsupportedDevice {
                vendor_id: info.vendor_id,
                product_id: info.product_id,
            };
            warn!("Rejecting {} at {}", info.usb_id(), path);
            if let Err(e) = transport.close() {
                warn!("Failed to close rejected device at {}: {}", path, e);
            }
            return Err(err.into());
        }
        Ok(Self::new(transport, config))
    }

    /// Open the first device the port lists with the configured USB IDs.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] when no listed device matches.
    pub async fn open_first(port: &dyn HidPort, config: DeviceConfig) -> LuxaforResult<Self> {
        config.validate()?;
        let devices = port.list_devices().await?;
        debug!("Port listed {} candidate devices", devices.len());
        let Some(found) = devices
            .into_iter()
            .find(|d| d.matches(config.vendor_id, config.product_id))
        else {
            return Err(DeviceError::NotFound(format!(
                "{:04x}:{:04x}",
                config.vendor_id, config.product_id
            ))
            .into());
        };
        Self::connect(port, &found.path, config).await
    }

    pub fn device_info(&self) -> &HidDeviceInfo {
        &self.info
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn state(&self) -> DeviceState {
        if self.transport.is_some() {
            DeviceState::Open
        } else {
            DeviceState::Disposed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == DeviceState::Open
    }

    /// Set `target` to `color`. A `fade_speed` of 0 switches immediately;
    /// anything else fades.
    ///
    /// # Errors
    ///
    /// See [`Device::send_command`].
    pub async fn set_color(
        &mut self,
        target: LedTarget,
        color: Color,
        fade_speed: u8,
    ) -> LuxaforResult<bool> {
        self.dispatch(Command::set_color(target, color, fade_speed))
            .await
    }

    /// Blink `target`. A `repeat` of 0 leaves the repeat count to the device.
    ///
    /// # Errors
    ///
    /// See [`Device::send_command`].
    pub async fn blink(
        &mut self,
        target: LedTarget,
        color: Color,
        speed: u8,
        repeat: u8,
    ) -> LuxaforResult<bool> {
        self.dispatch(Command::blink(target, color, speed, repeat))
            .await
    }

    /// Run a wave across the whole device.
    ///
    /// # Errors
    ///
    /// See [`Device::send_command`].
    pub async fn wave(
        &mut self,
        wave: WaveType,
        color: Color,
        speed: u8,
        repeat: u8,
    ) -> LuxaforResult<bool> {
        self.dispatch(Command::wave(wave, color, speed, repeat)).await
    }

    /// Run one of the firmware's built-in patterns.
    ///
    /// # Errors
    ///
    /// See [`Device::send_command`].
    pub async fn carry_out_pattern(
        &mut self,
        pattern: PatternType,
        repeat: u8,
    ) -> LuxaforResult<bool> {
        self.dispatch(Command::pattern(pattern, repeat)).await
    }

    async fn dispatch(&mut self, command: Command) -> LuxaforResult<bool> {
        let timeout_ms = self.config.default_timeout_ms;
        self.send_command(&command, timeout_ms).await
    }

    /// Write one report to the device.
    ///
    /// The write is attempted once and bounded by `timeout_ms` (0 waits
    /// indefinitely). Resolves to `Ok(true)` when all bytes were accepted and
    /// `Ok(false)` when the timeout expired or the transport accepted fewer
    /// bytes than the report holds.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UseAfterDispose`] without touching the transport
    /// once the device is disposed, and [`LuxaforError::Transport`] when the
    /// write itself fails.
    pub async fn send_command<C>(&mut self, command: &C, timeout_ms: u64) -> LuxaforResult<bool>
    where
        C: OutputReport + Sync + ?Sized,
    {
        let Some(transport) = self.transport.as_mut() else {
            return Err(DeviceError::disposed(self.info.path.as_str()).into());
        };
        let report = command.to_report();
        debug!("Writing report {} to {}", format_report(&report), self.info.path);

        let write = transport.write_report(&report);
        let result = if timeout_ms == 0 {
            write.await
        } else {
            match tokio::time::timeout(Duration::from_millis(timeout_ms), write).await {
                Ok(result) => result,
                Err(elapsed) => {
                    warn!(
                        "Write to {} timed out after {}ms ({})",
                        self.info.path, timeout_ms, elapsed
                    );
                    return Ok(false);
                }
            }
        };

        let written = result.map_err(|e| {
            warn!("Write to {} failed: {}", self.info.path, e);
            LuxaforError::Transport(e)
        })?;
        if written < REPORT_LEN {
            warn!(
                "Short write to {}: {} of {} bytes",
                self.info.path, written, REPORT_LEN
            );
            return Ok(false);
        }
        Ok(true)
    }

    /// Close the transport. Later calls do nothing.
    ///
    /// The device counts as disposed even when closing fails.
    ///
    /// # Errors
    ///
    /// Returns the transport's close error, once.
    pub fn dispose(&mut self) -> LuxaforResult<()> {
        let Some(mut transport) = self.transport.take() else {
            return Ok(());
        };
        transport.close()?;
        info!("Disposed Luxafor device at {}", self.info.path);
        Ok(())
    }

    /// Every LED on the device.
    pub fn all_leds(&mut self) -> Port<'_> {
        self.port(LedTarget::AllLeds)
    }

    /// The front panel.
    pub fn front_side(&mut self) -> Port<'_> {
        self.port(LedTarget::AllFrontSide)
    }

    /// The back panel.
    pub fn back_side(&mut self) -> Port<'_> {
        self.port(LedTarget::AllBackSide)
    }

    /// A single LED.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `index` is greater than 8.
    pub fn led(&mut self, index: u8) -> LuxaforResult<Port<'_>> {
        let target = LedTarget::of_index(index)?;
        Ok(self.port(target))
    }

    pub fn port(&mut self, target: LedTarget) -> Port<'_> {
        Port::new(self, target)
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        if let Err(e) = self.dispose() {
            warn!("Failed to close device at {} on drop: {}", self.info.path, e);
        }
    }
}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("info", &self.info)
            .field("config", &self.config)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxafor_hid_common::mock::MockHidTransport;

    fn mock() -> MockHidTransport {
        MockHidTransport::new(0x04D8, 0xF372, "/dev/hidraw0")
    }

    #[test]
    fn test_new_device_is_open() {
        let device = Device::new(Box::new(mock()), DeviceConfig::default());
        assert_eq!(device.state(), DeviceState::Open);
        assert_eq!(device.device_info().path, "/dev/hidraw0");
    }

    #[test]
    fn test_dispose_is_idempotent() -> LuxaforResult<()> {
        let probe = mock();
        let mut device = Device::new(Box::new(probe.clone()), DeviceConfig::default());

        device.dispose()?;
        device.dispose()?;
        drop(device);

        assert_eq!(probe.close_count(), 1);
        Ok(())
    }

    #[test]
    fn test_debug_reports_state() {
        let mut device = Device::new(Box::new(mock()), DeviceConfig::default());
        assert!(format!("{device:?}").contains("Open"));
        assert!(device.dispose().is_ok());
        assert!(format!("{device:?}").contains("Disposed"));
    }

    #[tokio::test]
    async fn test_send_after_dispose_does_no_io() -> LuxaforResult<()> {
        let probe = mock();
        let mut device = Device::new(Box::new(probe.clone()), DeviceConfig::default());
        device.dispose()?;

        let result = device
            .set_color(LedTarget::AllLeds, Color::RED, 0)
            .await;
        assert!(matches!(
            result,
            Err(LuxaforError::Device(DeviceError::UseAfterDispose(_)))
        ));
        assert!(probe.get_write_history().is_empty());
        Ok(())
    }
}
