//! HID transport traits

use crate::{HidCommonResult, HidDeviceInfo};
use async_trait::async_trait;

/// An open, exclusively owned handle to one HID device.
///
/// `write_report` is the only suspension point. Implementations perform a
/// single write attempt per call and never retry; timeouts are applied by the
/// caller around the returned future.
#[async_trait]
pub trait HidTransport: Send {
    /// Write one output report, returning the number of bytes accepted.
    async fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize>;

    fn device_info(&self) -> &HidDeviceInfo;

    fn is_connected(&self) -> bool;

    /// Release the underlying handle. Later writes fail with
    /// [`crate::HidCommonError::Disconnected`].
    fn close(&mut self) -> HidCommonResult<()>;
}

/// Enumerates and opens devices. Injected into the dispatch layer so the
/// opening step can be replaced in tests.
#[async_trait]
pub trait HidPort: Send + Sync {
    async fn list_devices(&self) -> HidCommonResult<Vec<HidDeviceInfo>>;

    async fn open_device(&self, path: &str) -> HidCommonResult<Box<dyn HidTransport>>;
}

pub mod mock {
    use super::*;
    use crate::HidCommonError;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// One observable interaction with a mock transport.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum TransportEvent {
        Write(Vec<u8>),
        Close,
    }

    #[derive(Debug)]
    struct MockState {
        journal: Vec<TransportEvent>,
        connected: bool,
        fail_writes: bool,
        fail_close: bool,
        write_delay: Option<Duration>,
        short_write: Option<usize>,
    }

    /// In-memory transport recording every write and close.
    ///
    /// Clones share state, so a test can keep one clone while the device
    /// under test owns another.
    #[derive(Debug, Clone)]
    pub struct MockHidTransport {
        info: HidDeviceInfo,
        state: Arc<Mutex<MockState>>,
    }

    impl MockHidTransport {
        pub fn new(vendor_id: u16, product_id: u16, path: impl Into<String>) -> Self {
            Self::from_info(HidDeviceInfo::new(vendor_id, product_id, path.into()))
        }

        pub fn from_info(info: HidDeviceInfo) -> Self {
            Self {
                info,
                state: Arc::new(Mutex::new(MockState {
                    journal: Vec::new(),
                    connected: true,
                    fail_writes: false,
                    fail_close: false,
                    write_delay: None,
                    short_write: None,
                })),
            }
        }

        fn with_state<T>(&self, f: impl FnOnce(&mut MockState) -> T) -> T {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            f(&mut state)
        }

        /// Make every subsequent write fail with a write error.
        pub fn fail_writes(&self, fail: bool) {
            self.with_state(|s| s.fail_writes = fail);
        }

        /// Make `close` fail with [`HidCommonError::Disconnected`], as when the
        /// device is unplugged mid-close. The close is still recorded.
        pub fn fail_close(&self, fail: bool) {
            self.with_state(|s| s.fail_close = fail);
        }

        /// Delay every subsequent write by `delay` before it completes.
        pub fn set_write_delay(&self, delay: Option<Duration>) {
            self.with_state(|s| s.write_delay = delay);
        }

        /// Accept at most `len` bytes per subsequent write.
        pub fn set_short_write(&self, len: Option<usize>) {
            self.with_state(|s| s.short_write = len);
        }

        pub fn disconnect(&self) {
            self.with_state(|s| s.connected = false);
        }

        pub fn reconnect(&self) {
            self.with_state(|s| s.connected = true);
        }

        /// Every write and close, in order.
        pub fn journal(&self) -> Vec<TransportEvent> {
            self.with_state(|s| s.journal.clone())
        }

        /// Bytes of every completed write, in order.
        pub fn get_write_history(&self) -> Vec<Vec<u8>> {
            self.with_state(|s| {
                s.journal
                    .iter()
                    .filter_map(|event| match event {
                        TransportEvent::Write(data) => Some(data.clone()),
                        TransportEvent::Close => None,
                    })
                    .collect()
            })
        }

        pub fn close_count(&self) -> usize {
            self.with_state(|s| {
                s.journal
                    .iter()
                    .filter(|event| matches!(event, TransportEvent::Close))
                    .count()
            })
        }
    }

    #[async_trait]
    impl HidTransport for MockHidTransport {
        async fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
            let (connected, fail, delay) =
                self.with_state(|s| (s.connected, s.fail_writes, s.write_delay));
            if !connected {
                return Err(HidCommonError::Disconnected);
            }
            if fail {
                return Err(HidCommonError::WriteError("Mock write failure".to_string()));
            }
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            self.with_state(|s| {
                let accepted = s.short_write.map_or(data.len(), |max| max.min(data.len()));
                let written = data.get(..accepted).unwrap_or(data).to_vec();
                s.journal.push(TransportEvent::Write(written));
                Ok(accepted)
            })
        }

        fn device_info(&self) -> &HidDeviceInfo {
            &self.info
        }

        fn is_connected(&self) -> bool {
            self.with_state(|s| s.connected)
        }

        fn close(&mut self) -> HidCommonResult<()> {
            self.with_state(|s| {
                s.connected = false;
                s.journal.push(TransportEvent::Close);
                if s.fail_close {
                    return Err(HidCommonError::Disconnected);
                }
                Ok(())
            })
        }
    }

    /// Port serving a fixed set of mock transports.
    pub struct MockHidPort {
        devices: Vec<MockHidTransport>,
        refused: Vec<String>,
    }

    impl MockHidPort {
        pub fn new() -> Self {
            Self {
                devices: Vec::new(),
                refused: Vec::new(),
            }
        }

        pub fn add_device(&mut self, device: MockHidTransport) {
            self.devices.push(device);
        }

        /// List the device at `path` but fail to open it, as the OS does
        /// when the caller lacks permission on the device node.
        pub fn refuse_open(&mut self, path: impl Into<String>) {
            self.refused.push(path.into());
        }

        pub fn device_count(&self) -> usize {
            self.devices.len()
        }
    }

    #[async_trait]
    impl HidPort for MockHidPort {
        async fn list_devices(&self) -> HidCommonResult<Vec<HidDeviceInfo>> {
            Ok(self
                .devices
                .iter()
                .map(|d| d.device_info().clone())
                .collect())
        }

        async fn open_device(&self, path: &str) -> HidCommonResult<Box<dyn HidTransport>> {
            if self.refused.iter().any(|refused| refused == path) {
                return Err(HidCommonError::OpenError(format!("{path}: permission denied")));
            }
            self.devices
                .iter()
                .find(|device| device.info.path == path)
                .map(|device| Box::new(device.clone()) as Box<dyn HidTransport>)
                .ok_or_else(|| HidCommonError::DeviceNotFound(path.to_string()))
        }
    }

    impl Default for MockHidPort {
        fn default() -> Self {
            Self::new()
        }
    }
}
