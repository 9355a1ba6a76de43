//! Single-slot download gate
//!
//! At most one download runs at a time, whichever entry point started it.
//! A [`DownloadPermit`] proves ownership of the slot; the slot frees when the
//! permit is released or dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct DownloadGate {
    busy: Arc<AtomicBool>,
}

impl DownloadGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the slot, or `None` while another download holds it.
    pub fn try_acquire(&self) -> Option<DownloadPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| DownloadPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Ownership of the download slot.
#[derive(Debug)]
pub struct DownloadPermit {
    busy: Arc<AtomicBool>,
}

impl DownloadPermit {
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for DownloadPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
