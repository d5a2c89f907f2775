//! `hidapi`-backed port and transport.
//!
//! hidapi writes are blocking, so each report is written on tokio's blocking
//! pool. A write abandoned by a caller-side timeout still runs to completion
//! on that pool; the next write waits for the device lock.

use std::ffi::CString;
use std::sync::Arc;

use async_trait::async_trait;
use hidapi::{DeviceInfo, HidApi, HidDevice};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::{HidCommonError, HidCommonResult, HidDeviceInfo, HidPort, HidTransport};

fn to_device_info(device: &DeviceInfo) -> HidDeviceInfo {
    let mut info = HidDeviceInfo::new(
        device.vendor_id(),
        device.product_id(),
        device.path().to_string_lossy(),
    );
    if let Some(serial) = device.serial_number() {
        info = info.with_serial(serial);
    }
    if let Some(manufacturer) = device.manufacturer_string() {
        info = info.with_manufacturer(manufacturer);
    }
    if let Some(product) = device.product_string() {
        info = info.with_product_name(product);
    }
    info
}

/// Enumerates HID devices matching one vendor/product ID pair.
pub struct HidApiPort {
    api: Mutex<HidApi>,
    vendor_id: u16,
    product_id: u16,
}

impl HidApiPort {
    pub fn new(vendor_id: u16, product_id: u16) -> HidCommonResult<Self> {
        let api = HidApi::new().map_err(|e| HidCommonError::OpenError(e.to_string()))?;
        Ok(Self {
            api: Mutex::new(api),
            vendor_id,
            product_id,
        })
    }

    fn matching_devices(&self) -> HidCommonResult<Vec<HidDeviceInfo>> {
        let mut api = self.api.lock();
        api.refresh_devices()
            .map_err(|e| HidCommonError::OpenError(e.to_string()))?;
        Ok(api
            .device_list()
            .filter(|d| d.vendor_id() == self.vendor_id && d.product_id() == self.product_id)
            .map(to_device_info)
            .collect())
    }
}

#[async_trait]
impl HidPort for HidApiPort {
    async fn list_devices(&self) -> HidCommonResult<Vec<HidDeviceInfo>> {
        let devices = self.matching_devices()?;
        debug!(
            "Enumerated {} devices matching {:04x}:{:04x}",
            devices.len(),
            self.vendor_id,
            self.product_id
        );
        Ok(devices)
    }

    async fn open_device(&self, path: &str) -> HidCommonResult<Box<dyn HidTransport>> {
        let info = self
            .matching_devices()?
            .into_iter()
            .find(|d| d.path == path)
            .ok_or_else(|| HidCommonError::DeviceNotFound(path.to_string()))?;
        let c_path =
            CString::new(path).map_err(|e| HidCommonError::OpenError(e.to_string()))?;
        let device = self
            .api
            .lock()
            .open_path(&c_path)
            .map_err(|e| HidCommonError::OpenError(format!("{path}: {e}")))?;
        info!("Opened HID device {}", info);
        Ok(Box::new(HidApiTransport {
            device: Some(Arc::new(Mutex::new(device))),
            info,
        }))
    }
}

/// An open hidapi device handle.
pub struct HidApiTransport {
    device: Option<Arc<Mutex<HidDevice>>>,
    info: HidDeviceInfo,
}

#[async_trait]
impl HidTransport for HidApiTransport {
    async fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        let device = self
            .device
            .as_ref()
            .map(Arc::clone)
            .ok_or(HidCommonError::Disconnected)?;
        let report = data.to_vec();
        tokio::task::spawn_blocking(move || device.lock().write(&report))
            .await
            .map_err(|e| HidCommonError::WriteError(e.to_string()))?
            .map_err(|e| {
                warn!("HID write failed: {}", e);
                HidCommonError::WriteError(e.to_string())
            })
    }

    fn device_info(&self) -> &HidDeviceInfo {
        &self.info
    }

    fn is_connected(&self) -> bool {
        self.device.is_some()
    }

    fn close(&mut self) -> HidCommonResult<()> {
        if self.device.take().is_some() {
            info!("Closed HID device at {}", self.info.path);
        }
        Ok(())
    }
}
