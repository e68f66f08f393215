//! # Recording Notifier
//!
//! Keeps notices in memory so callers can inspect them. Terminal output lives
//! with the CLI's `ConsoleNotifier`.

use std::sync::Mutex;

use rocket_core::{Notice, Notifier};

/// Notifier that records every notice it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        RecordingNotifier::default()
    }

    /// Returns a copy of the recorded notices, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.lock().clone()
    }

    /// Removes and returns the recorded notices.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while pushing cannot leave the Vec half-written
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        self.notices.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, notice: &Notice) {
        self.lock().push(notice.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket_core::ErrorCode;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.warn(&Notice::new(ErrorCode::OutOfStock, "first"));
        notifier.warn(&Notice::new(ErrorCode::ItemNotFound, "second"));

        let codes: Vec<_> = notifier.notices().iter().map(|n| n.code).collect();
        assert_eq!(codes, vec![ErrorCode::OutOfStock, ErrorCode::ItemNotFound]);
    }

    #[test]
    fn test_take_drains() {
        let notifier = RecordingNotifier::new();
        notifier.warn(&Notice::new(ErrorCode::InvalidAmount, "zero"));

        assert_eq!(notifier.take().len(), 1);
        assert!(notifier.is_empty());
    }
}
