//! In-memory UI surface.
//!
//! Stands in for the page's element store: a map from logical element
//! id to text/value/visibility/enabled state. Writes to elements the
//! map has never seen simply create them, mirroring how a missing DOM
//! node is a silent no-op for the real surface.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use portico_application::ports::{UiElement, UiSurface};
use serde::Serialize;

/// Observable state of one UI element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementState {
    /// Visible text (button labels, greeting, banner message).
    pub text: String,
    /// Form value (identity and token inputs).
    pub value: String,
    /// Whether the element is shown.
    pub visible: bool,
    /// Whether the element accepts interaction.
    pub enabled: bool,
}

#[derive(Debug, Default)]
struct MemoryState {
    elements: HashMap<UiElement, ElementState>,
    effective_mutations: usize,
}

/// `UiSurface` adapter over a mutex-guarded element map.
#[derive(Debug, Default)]
pub struct MemoryUi {
    inner: Mutex<MemoryState>,
}

impl MemoryUi {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state of an element (default state if untouched).
    #[must_use]
    pub fn element(&self, element: UiElement) -> ElementState {
        self.lock().elements.get(&element).cloned().unwrap_or_default()
    }

    /// Number of writes that changed a stored value. Two renders of
    /// the same state leave this counter untouched the second time.
    #[must_use]
    pub fn effective_mutations(&self) -> usize {
        self.lock().effective_mutations
    }

    /// JSON dump of every element the controller has touched, for
    /// diagnostic logging.
    #[must_use]
    pub fn snapshot_json(&self) -> serde_json::Value {
        let state = self.lock();
        let mut entries: Vec<(String, &ElementState)> = state
            .elements
            .iter()
            .map(|(element, element_state)| (format!("{element:?}"), element_state))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        serde_json::Value::Object(
            entries
                .into_iter()
                .map(|(key, element_state)| {
                    (
                        key,
                        serde_json::to_value(element_state).unwrap_or(serde_json::Value::Null),
                    )
                })
                .collect(),
        )
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, element: UiElement, apply: impl FnOnce(&mut ElementState) -> bool) {
        let mut state = self.lock();
        let entry = state.elements.entry(element).or_default();
        if apply(entry) {
            state.effective_mutations += 1;
        }
    }
}

impl UiSurface for MemoryUi {
    fn set_text(&self, element: UiElement, text: &str) {
        self.update(element, |e| {
            let changed = e.text != text;
            e.text = text.to_string();
            changed
        });
    }

    fn set_value(&self, element: UiElement, value: &str) {
        self.update(element, |e| {
            let changed = e.value != value;
            e.value = value.to_string();
            changed
        });
    }

    fn set_visible(&self, element: UiElement, visible: bool) {
        self.update(element, |e| {
            let changed = e.visible != visible;
            e.visible = visible;
            changed
        });
    }

    fn set_enabled(&self, element: UiElement, enabled: bool) {
        self.update(element, |e| {
            let changed = e.enabled != enabled;
            e.enabled = enabled;
            changed
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_untouched_element_has_default_state() {
        let ui = MemoryUi::new();
        assert_eq!(ui.element(UiElement::Banner), ElementState::default());
        assert_eq!(ui.effective_mutations(), 0);
    }

    #[test]
    fn test_repeated_identical_writes_count_once() {
        let ui = MemoryUi::new();
        ui.set_text(UiElement::Greeting, "Ana");
        ui.set_text(UiElement::Greeting, "Ana");
        ui.set_visible(UiElement::Greeting, true);
        ui.set_visible(UiElement::Greeting, true);

        assert_eq!(ui.effective_mutations(), 2);
        let state = ui.element(UiElement::Greeting);
        assert_eq!(state.text, "Ana");
        assert!(state.visible);
    }

    #[test]
    fn test_snapshot_lists_touched_elements() {
        let ui = MemoryUi::new();
        ui.set_value(UiElement::TokenInput, "abc123");

        let snapshot = ui.snapshot_json();
        let entry = snapshot.get("TokenInput").cloned().unwrap_or_default();
        assert_eq!(entry.get("value").and_then(serde_json::Value::as_str), Some("abc123"));
    }
}
