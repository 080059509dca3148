//! Session listeners.
//!
//! A rendering layer registers listeners to learn when the user asks to
//! finish or cancel. Listeners only receive requests; how the session is
//! dismissed (modal, push, inline) is entirely up to them.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use choiceforge::event::{SessionEventSupport, SessionListener};
//!
//! #[derive(Debug)]
//! struct Presenter;
//! impl SessionListener<&'static str> for Presenter {
//!     fn on_dismissal_requested(&self, selected: &[&'static str]) {
//!         println!("picked {:?}", selected);
//!     }
//!
//!     fn on_cancel_requested(&self) {
//!         println!("cancelled");
//!     }
//! }
//!
//! let mut support = SessionEventSupport::<&'static str>::new();
//! support.add_listener(Arc::new(Presenter));
//! assert_eq!(support.listener_count(), 1);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use choiceforge_core::{ToggleOutcome, ValidationError};
use tracing::{debug, info};

/// Listener for selection session events.
///
/// `on_dismissal_requested` and `on_cancel_requested` are the two terminal
/// requests. The selection passed on dismissal is the one the presenter should
/// read back; on cancel the presenter keeps whatever it had before.
pub trait SessionListener<K>: Send + Sync + Debug {
    /// Called when a finish request was approved.
    fn on_dismissal_requested(&self, selected: &[K]);

    /// Called when the user cancelled.
    fn on_cancel_requested(&self);

    /// Called after every tap on a known key.
    fn on_toggled(&self, _key: &K, _outcome: &ToggleOutcome<K>) {}

    /// Called when a finish request failed validation.
    fn on_validation_failed(&self, _error: &ValidationError) {}
}

/// Broadcasts session events to registered listeners.
///
/// All listener methods are called synchronously in registration order.
pub struct SessionEventSupport<K> {
    listeners: Vec<Arc<dyn SessionListener<K>>>,
}

impl<K> SessionEventSupport<K> {
    /// Creates a new event support instance.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Adds a listener.
    pub fn add_listener(&mut self, listener: Arc<dyn SessionListener<K>>) {
        self.listeners.push(listener);
    }

    /// Removes all listeners.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Returns the number of listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if there are any listeners registered.
    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Fires the toggled event.
    pub fn fire_toggled(&self, key: &K, outcome: &ToggleOutcome<K>) {
        for listener in &self.listeners {
            listener.on_toggled(key, outcome);
        }
    }

    /// Fires the dismissal requested event.
    pub fn fire_dismissal_requested(&self, selected: &[K]) {
        for listener in &self.listeners {
            listener.on_dismissal_requested(selected);
        }
    }

    /// Fires the cancel requested event.
    pub fn fire_cancel_requested(&self) {
        for listener in &self.listeners {
            listener.on_cancel_requested();
        }
    }

    /// Fires the validation failed event.
    pub fn fire_validation_failed(&self, error: &ValidationError) {
        for listener in &self.listeners {
            listener.on_validation_failed(error);
        }
    }
}

impl<K> Default for SessionEventSupport<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Debug for SessionEventSupport<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEventSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A listener that records events through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct TracingSessionListener {
    /// Label attached to every event.
    label: String,
}

impl TracingSessionListener {
    /// Creates a new tracing listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracing listener with a custom label.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl<K: Debug> SessionListener<K> for TracingSessionListener {
    fn on_dismissal_requested(&self, selected: &[K]) {
        info!(event = "dismissal_requested", label = %self.label, selected = ?selected);
    }

    fn on_cancel_requested(&self) {
        info!(event = "cancel_requested", label = %self.label);
    }

    fn on_toggled(&self, key: &K, outcome: &ToggleOutcome<K>) {
        debug!(event = "toggled", label = %self.label, key = ?key, outcome = ?outcome);
    }

    fn on_validation_failed(&self, error: &ValidationError) {
        info!(event = "validation_failed", label = %self.label, message = %error.message);
    }
}

/// A counting listener that tracks event occurrences.
///
/// Useful for testing.
#[derive(Debug, Default)]
pub struct CountingSessionListener {
    toggled_count: AtomicUsize,
    dismissal_count: AtomicUsize,
    cancel_count: AtomicUsize,
    validation_failed_count: AtomicUsize,
}

impl CountingSessionListener {
    /// Creates a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of toggled events.
    pub fn toggled_count(&self) -> usize {
        self.toggled_count.load(Ordering::SeqCst)
    }

    /// Returns the number of dismissal requested events.
    pub fn dismissal_count(&self) -> usize {
        self.dismissal_count.load(Ordering::SeqCst)
    }

    /// Returns the number of cancel requested events.
    pub fn cancel_count(&self) -> usize {
        self.cancel_count.load(Ordering::SeqCst)
    }

    /// Returns the number of validation failed events.
    pub fn validation_failed_count(&self) -> usize {
        self.validation_failed_count.load(Ordering::SeqCst)
    }
}

impl<K> SessionListener<K> for CountingSessionListener {
    fn on_dismissal_requested(&self, _selected: &[K]) {
        self.dismissal_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_cancel_requested(&self) {
        self.cancel_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_toggled(&self, _key: &K, _outcome: &ToggleOutcome<K>) {
        self.toggled_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_validation_failed(&self, _error: &ValidationError) {
        self.validation_failed_count.fetch_add(1, Ordering::SeqCst);
    }
}
