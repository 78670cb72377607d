use std::sync::{Arc, Mutex};

/// First GPU failure reported through wgpu's error and device-lost callbacks.
///
/// Callbacks must not panic (that aborts on wasm32); they record here and the
/// next `present` returns the record as an error.
#[derive(Clone, Debug, Default)]
pub struct DeviceFault {
    reason: Arc<Mutex<Option<String>>>,
}

impl DeviceFault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. Only the first one is kept.
    pub fn raise(&self, reason: impl Into<String>) {
        if let Ok(mut slot) = self.reason.lock() {
            if slot.is_none() {
                let reason = reason.into();
                log::error!("[render] gpu fault: {}", reason);
                *slot = Some(reason);
            }
        }
    }

    pub fn is_raised(&self) -> bool {
        self.reason.lock().map(|s| s.is_some()).unwrap_or(true)
    }

    /// `Err` once a fault has been raised; stays raised afterwards.
    pub fn check(&self) -> anyhow::Result<()> {
        match self.reason.lock() {
            Ok(slot) => match slot.as_deref() {
                Some(reason) => Err(anyhow::anyhow!("gpu fault: {}", reason)),
                None => Ok(()),
            },
            Err(_) => Err(anyhow::anyhow!("gpu fault state poisoned")),
        }
    }

    /// Route the device's uncaptured errors and loss notification here.
    pub fn attach(&self, device: &wgpu::Device) {
        let on_error = self.clone();
        device.on_uncaptured_error(Box::new(move |err: wgpu::Error| {
            on_error.raise(err.to_string());
        }));
        let on_lost = self.clone();
        device.set_device_lost_callback(move |reason: wgpu::DeviceLostReason, message: String| {
            // Dropping the device on unmount reports `Destroyed`
            if matches!(reason, wgpu::DeviceLostReason::Destroyed) {
                log::debug!("[render] device destroyed");
                return;
            }
            on_lost.raise(format!("device lost ({:?}): {}", reason, message));
        });
    }
}
