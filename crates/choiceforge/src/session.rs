//! Selection sessions.
//!
//! A [`SelectionSession`] is what a rendering layer talks to: it reports taps
//! with [`toggle`](SelectionSession::toggle), reads back
//! [`selected`](SelectionSession::selected) to highlight rows, and ends the
//! session with [`request_finish`](SelectionSession::request_finish) or
//! [`request_cancel`](SelectionSession::request_cancel).
//!
//! ```text
//! Idle --toggle--> Idle
//! Idle --finish--> Approved            (selection valid)
//! Idle --finish--> Idle + alert        (selection invalid)
//! Idle --cancel--> CancelApproved      (always)
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use choiceforge_config::SessionConfig;
use choiceforge_core::{
    CellIdentifier, ChoiceForgeError, MessageFormatter, OptionLayout, Result, RuleSpec,
    SelectionState, ToggleOutcome, ValidationError, Validator,
};
use tracing::{debug, info, warn};

use crate::event::{SessionEventSupport, SessionListener};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// Accepting taps.
    #[default]
    Idle,
    /// A finish request passed; the presenter should read back the selection.
    Approved,
    /// The user cancelled; the presenter keeps its previous selection.
    CancelApproved,
}

impl SessionState {
    /// Returns true for `Approved` and `CancelApproved`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Idle)
    }
}

/// Result of a finish request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishOutcome {
    /// The selection is accepted and the session has ended.
    Approved,
    /// The selection is invalid; show the alert and keep the session open.
    Rejected(ValidationError),
}

impl FinishOutcome {
    /// Returns true if the finish request was approved.
    pub fn is_approved(&self) -> bool {
        matches!(self, FinishOutcome::Approved)
    }

    /// Returns the alert of a rejected request.
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            FinishOutcome::Approved => None,
            FinishOutcome::Rejected(error) => Some(error),
        }
    }
}

/// Result of a cancel request. Cancelling is never refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The session has ended without a selection being read back.
    Approved,
}

/// One user's pass over a choice list.
///
/// Toggles are committed as they happen. Cancelling does not undo them; it
/// only tells the presenter not to read the selection back.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use choiceforge::{FinishOutcome, RuleSpec, SelectionSession};
///
/// let mut session = SelectionSession::new(RuleSpec::single_sectioned()).with_title("choose an option");
/// session.configure(
///     HashMap::from([("k1", "One".to_string()), ("k2", "Two".to_string()), ("k3", "Three".to_string())]),
///     HashMap::new(),
///     vec!["A".to_string(), "B".to_string()],
///     vec![vec!["k1", "k2"], vec!["k3"]],
/// );
///
/// session.toggle(&"k1").unwrap();
/// session.toggle(&"k2").unwrap();
/// assert_eq!(session.selected(), &["k2"]);
///
/// let outcome = session.request_finish().unwrap();
/// let error = outcome.error().unwrap();
/// assert_eq!(error.title.as_deref(), Some("Choose An Option"));
///
/// session.toggle(&"k3").unwrap();
/// assert_eq!(session.request_finish().unwrap(), FinishOutcome::Approved);
/// ```
#[derive(Debug)]
pub struct SelectionSession<K> {
    key: Option<String>,
    title: Option<String>,
    rule: RuleSpec,
    requires_selection: bool,
    layout: OptionLayout<K>,
    state: SelectionState<K>,
    status: SessionState,
    events: SessionEventSupport<K>,
}

impl<K: Clone + Eq + Hash + Debug> SelectionSession<K> {
    /// Creates an empty session under `rule`.
    ///
    /// Finishing is validated by default; see
    /// [`with_requires_selection`](Self::with_requires_selection).
    pub fn new(rule: RuleSpec) -> Self {
        Self {
            key: None,
            title: None,
            rule,
            requires_selection: true,
            layout: OptionLayout::default(),
            state: SelectionState::default(),
            status: SessionState::Idle,
            events: SessionEventSupport::new(),
        }
    }

    /// Sets the title shown on validation alerts.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets an identifier the presenter can use to tell sessions apart.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets whether finishing checks the rule. When `false` every finish
    /// request is approved.
    pub fn with_requires_selection(mut self, requires_selection: bool) -> Self {
        self.requires_selection = requires_selection;
        self
    }

    /// Registers a listener.
    pub fn with_listener(mut self, listener: Arc<dyn SessionListener<K>>) -> Self {
        self.events.add_listener(listener);
        self
    }

    /// Registers a listener.
    pub fn add_listener(&mut self, listener: Arc<dyn SessionListener<K>>) {
        self.events.add_listener(listener);
    }

    /// Establishes the options, their details, the section titles and the
    /// ordered keys of every section. Clears the selection.
    pub fn configure(
        &mut self,
        options: HashMap<K, String>,
        details: HashMap<K, String>,
        section_titles: Vec<String>,
        layout: Vec<Vec<K>>,
    ) {
        self.configure_layout(self.rule, OptionLayout::new(options, details, section_titles, layout));
    }

    /// Replaces both the rule and the layout. Clears the selection.
    pub fn configure_layout(&mut self, rule: RuleSpec, layout: OptionLayout<K>) {
        let unsatisfiable = Validator::new(rule).unsatisfiable_sections(&layout);
        if !unsatisfiable.is_empty() {
            warn!(
                event = "unsatisfiable_sections",
                session = ?self.key,
                rule = %rule,
                sections = ?unsatisfiable,
                "Sections hold fewer options than section_min; finishing can never succeed"
            );
        }

        self.rule = rule;
        self.state = SelectionState::new(&layout);
        self.layout = layout;

        debug!(
            event = "configured",
            session = ?self.key,
            rule = %self.rule,
            sections = self.layout.section_count(),
        );
    }

    /// Replaces the selection with prior keys, oldest first.
    ///
    /// Unknown and repeated keys are skipped and no eviction runs.
    pub fn seed_selection(&mut self, keys: impl IntoIterator<Item = K>) {
        self.state.seed(keys);
        debug!(event = "seeded", session = ?self.key, selected = ?self.state.selected());
    }

    /// Applies one tap.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceForgeError::SessionEnded`] once the session was
    /// approved or cancelled.
    pub fn toggle(&mut self, key: &K) -> Result<ToggleOutcome<K>> {
        self.ensure_idle()?;

        let outcome = self.state.toggle(key, &self.rule);
        if outcome != ToggleOutcome::Ignored {
            self.events.fire_toggled(key, &outcome);
        }
        Ok(outcome)
    }

    /// Removes a key from the selection without touching anything else.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceForgeError::SessionEnded`] once the session has ended.
    pub fn deselect(&mut self, key: &K) -> Result<bool> {
        self.ensure_idle()?;
        Ok(self.state.remove(key))
    }

    /// Empties the selection.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceForgeError::SessionEnded`] once the session has ended.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.state.clear();
        Ok(())
    }

    /// Asks to finish with the current selection.
    ///
    /// Without `requires_selection` the request is always approved. Otherwise
    /// the selection is validated and, if it fails, an alert is returned and
    /// the session stays open.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceForgeError::SessionEnded`] once the session has ended.
    pub fn request_finish(&mut self) -> Result<FinishOutcome> {
        self.ensure_idle()?;

        if self.requires_selection && !self.is_valid() {
            let error = MessageFormatter::new(self.rule).format(&self.state, self.title.as_deref());
            info!(
                event = "finish_rejected",
                session = ?self.key,
                count = self.state.count(),
                message = %error.message,
            );
            self.events.fire_validation_failed(&error);
            return Ok(FinishOutcome::Rejected(error));
        }

        self.status = SessionState::Approved;
        info!(
            event = "finish_approved",
            session = ?self.key,
            selected = ?self.state.selected(),
        );
        self.events.fire_dismissal_requested(self.state.selected());
        Ok(FinishOutcome::Approved)
    }

    /// Asks to cancel. Always approved, without validation.
    ///
    /// Cancelling an ended session is a no-op that still reports approval.
    pub fn request_cancel(&mut self) -> CancelOutcome {
        if self.status.is_terminal() {
            debug!(event = "cancel_after_end", session = ?self.key, status = ?self.status);
            return CancelOutcome::Approved;
        }

        self.status = SessionState::CancelApproved;
        info!(event = "cancel_approved", session = ?self.key);
        self.events.fire_cancel_requested();
        CancelOutcome::Approved
    }

    /// Returns true if the current selection would pass a finish request.
    pub fn is_valid(&self) -> bool {
        Validator::new(self.rule).validate(&self.state)
    }

    /// Returns the selected keys, oldest first.
    pub fn selected(&self) -> &[K] {
        self.state.selected()
    }

    /// Returns the selected keys of one section, oldest first.
    pub fn selected_in(&self, section: usize) -> Vec<&K> {
        self.state.selected_in(section).collect()
    }

    /// Returns true if the key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.state.contains(key)
    }

    /// Returns which row template to use for the key.
    pub fn identifier_for(&self, key: &K) -> CellIdentifier {
        self.layout.identifier_for(key)
    }

    /// Returns the option layout.
    pub fn layout(&self) -> &OptionLayout<K> {
        &self.layout
    }

    /// Returns the live selection.
    pub fn state(&self) -> &SelectionState<K> {
        &self.state
    }

    /// Returns the rule.
    pub fn rule(&self) -> &RuleSpec {
        &self.rule
    }

    /// Returns the lifecycle state.
    pub fn status(&self) -> SessionState {
        self.status
    }

    /// Returns the session title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the presenter's identifier for this session.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns whether finishing checks the rule.
    pub fn requires_selection(&self) -> bool {
        self.requires_selection
    }

    /// Consumes the session, returning the selection oldest first.
    pub fn into_selection(self) -> Vec<K> {
        self.state.selected().to_vec()
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(ChoiceForgeError::SessionEnded);
        }
        Ok(())
    }
}

impl SelectionSession<String> {
    /// Builds a session from a configuration, including any prior selection.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceForgeError::Config`] if the configuration fails
    /// [`SessionConfig::validate`].
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        config.validate()?;

        let mut session = SelectionSession::new(config.rule.to_rule())
            .with_requires_selection(config.requires_selection);
        session.title = config.title.clone();
        session.configure_layout(config.rule.to_rule(), config.to_layout());
        session.seed_selection(config.selected.iter().cloned());
        Ok(session)
    }
}

#[cfg(test)]
mod tests;
