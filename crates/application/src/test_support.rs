//! Shared fakes for this crate's tests.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::ports::{Clock, UiElement, UiSurface};

/// Recording UI fake: stores element state and counts only the
/// writes that changed a stored value, so idempotence is observable.
#[derive(Default)]
pub struct RecordingUi {
    inner: Mutex<RecordingState>,
}

#[derive(Default)]
struct RecordingState {
    text: HashMap<UiElement, String>,
    value: HashMap<UiElement, String>,
    visible: HashMap<UiElement, bool>,
    enabled: HashMap<UiElement, bool>,
    effective_mutations: usize,
}

impl RecordingUi {
    /// Number of writes that changed a stored value.
    pub fn effective_mutations(&self) -> usize {
        self.inner.lock().map(|s| s.effective_mutations).unwrap_or(0)
    }

    /// Last text written to an element.
    pub fn text(&self, element: UiElement) -> Option<String> {
        self.inner.lock().ok().and_then(|s| s.text.get(&element).cloned())
    }

    /// Last value written to an element.
    pub fn value(&self, element: UiElement) -> Option<String> {
        self.inner.lock().ok().and_then(|s| s.value.get(&element).cloned())
    }

    /// Last visibility written to an element.
    pub fn visible(&self, element: UiElement) -> Option<bool> {
        self.inner.lock().ok().and_then(|s| s.visible.get(&element).copied())
    }

    /// Last enabled flag written to an element.
    pub fn enabled(&self, element: UiElement) -> Option<bool> {
        self.inner.lock().ok().and_then(|s| s.enabled.get(&element).copied())
    }
}

impl UiSurface for RecordingUi {
    fn set_text(&self, element: UiElement, text: &str) {
        if let Ok(mut s) = self.inner.lock() {
            if s.text.insert(element, text.to_string()).as_deref() != Some(text) {
                s.effective_mutations += 1;
            }
        }
    }

    fn set_value(&self, element: UiElement, value: &str) {
        if let Ok(mut s) = self.inner.lock() {
            if s.value.insert(element, value.to_string()).as_deref() != Some(value) {
                s.effective_mutations += 1;
            }
        }
    }

    fn set_visible(&self, element: UiElement, visible: bool) {
        if let Ok(mut s) = self.inner.lock() {
            if s.visible.insert(element, visible) != Some(visible) {
                s.effective_mutations += 1;
            }
        }
    }

    fn set_enabled(&self, element: UiElement, enabled: bool) {
        if let Ok(mut s) = self.inner.lock() {
            if s.enabled.insert(element, enabled) != Some(enabled) {
                s.effective_mutations += 1;
            }
        }
    }
}

/// Wall clock; tests that care about elapsed time use tokio's paused
/// clock instead of this stamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestClock;

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Lets spawned tasks run on the current-thread test runtime.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
