//! Live selection state.
//!
//! [`SelectionState`] keeps the selected keys in the order they were picked,
//! oldest first. That order drives eviction, so it is preserved exactly:
//! a key that is removed and picked again moves to the end.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::enforcer::ConstraintEnforcer;
use crate::layout::OptionLayout;
use crate::rule::RuleSpec;

/// What a [`SelectionState::toggle`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome<K> {
    /// The key was selected and is now removed.
    Deselected,
    /// The key is now selected, after evicting the listed keys (oldest first).
    Selected {
        /// Keys removed to make room, in eviction order.
        evicted: Vec<K>,
    },
    /// The key is not part of the layout; nothing changed.
    Ignored,
}

impl<K> ToggleOutcome<K> {
    /// Returns true if the key ended up selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, ToggleOutcome::Selected { .. })
    }

    /// Returns the evicted keys, empty unless the key was selected.
    pub fn evicted(&self) -> &[K] {
        match self {
            ToggleOutcome::Selected { evicted } => evicted.as_slice(),
            _ => &[],
        }
    }
}

/// Ordered record of selected keys plus a key to section lookup.
///
/// # Examples
///
/// ```
/// use choiceforge_core::{OptionLayout, RuleSpec, SelectionState};
/// use std::collections::HashMap;
///
/// let layout = OptionLayout::new(HashMap::new(), HashMap::new(), Vec::new(), vec![vec!["OA", "OB", "OC"]]);
/// let mut state = SelectionState::new(&layout);
/// let rule = RuleSpec::single();
///
/// state.toggle(&"OA", &rule);
/// state.toggle(&"OB", &rule);
/// assert_eq!(state.selected(), &["OB"]);
///
/// state.toggle(&"OB", &rule);
/// assert!(state.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SelectionState<K> {
    selected: Vec<K>,
    sections: HashMap<K, usize>,
    section_count: usize,
}

impl<K> Default for SelectionState<K> {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
            sections: HashMap::new(),
            section_count: 0,
        }
    }
}

impl<K: Clone + Eq + Hash + Debug> SelectionState<K> {
    /// Creates an empty selection over the given layout.
    pub fn new(layout: &OptionLayout<K>) -> Self {
        let sections = layout
            .sections()
            .iter()
            .enumerate()
            .flat_map(|(section, keys)| keys.iter().map(move |key| (key.clone(), section)))
            .fold(HashMap::new(), |mut map, (key, section)| {
                map.entry(key).or_insert(section);
                map
            });

        Self {
            selected: Vec::new(),
            sections,
            section_count: layout.section_count(),
        }
    }

    /// Creates a selection seeded with prior keys, in the given order.
    ///
    /// See [`seed`](Self::seed).
    pub fn with_selection(layout: &OptionLayout<K>, keys: impl IntoIterator<Item = K>) -> Self {
        let mut state = Self::new(layout);
        state.seed(keys);
        state
    }

    /// Replaces the selection with prior keys, in the given order.
    ///
    /// Unknown and repeated keys are skipped. No eviction runs: a presenter
    /// may restore a selection made under a looser rule, and the next toggle
    /// only evicts as far as the rule requires for that toggle.
    pub fn seed(&mut self, keys: impl IntoIterator<Item = K>) {
        self.selected.clear();
        for key in keys {
            if !self.sections.contains_key(&key) {
                warn!(event = "seed_unknown_key", key = ?key, "Ignoring unknown seeded key");
                continue;
            }
            if !self.selected.contains(&key) {
                self.selected.push(key);
            }
        }
    }

    /// Applies one tap on `key` under `rule`.
    ///
    /// A selected key is deselected. Otherwise the
    /// [`ConstraintEnforcer`] decides which keys to evict first, then the key
    /// is appended as the newest selection. Keys outside the layout are
    /// ignored.
    pub fn toggle(&mut self, key: &K, rule: &RuleSpec) -> ToggleOutcome<K> {
        if !self.sections.contains_key(key) {
            warn!(event = "toggle_unknown_key", key = ?key, "Ignoring unknown key");
            return ToggleOutcome::Ignored;
        }

        if self.remove(key) {
            debug!(event = "deselect", key = ?key, count = self.selected.len());
            return ToggleOutcome::Deselected;
        }

        let evicted = ConstraintEnforcer::new(*rule).evictions_before_adding(self, key);
        for old in &evicted {
            self.remove(old);
        }
        self.selected.push(key.clone());

        debug!(
            event = "select",
            key = ?key,
            evicted = ?evicted,
            count = self.selected.len(),
        );

        ToggleOutcome::Selected { evicted }
    }

    /// Removes the key if selected. Returns whether it was.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.selected.iter().position(|k| k == key) {
            Some(idx) => {
                self.selected.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes every selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Returns the selected keys, oldest first.
    pub fn selected(&self) -> &[K] {
        &self.selected
    }

    /// Returns the selected keys of one section, oldest first.
    pub fn selected_in(&self, section: usize) -> impl Iterator<Item = &K> + '_ {
        self.selected
            .iter()
            .filter(move |key| self.sections.get(*key) == Some(&section))
    }

    /// Returns true if the key is selected.
    pub fn contains(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Returns the number of selected keys.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Returns the number of selected keys in one section.
    pub fn count_in(&self, section: usize) -> usize {
        self.selected_in(section).count()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns the section of a key in the layout this state was built from.
    pub fn section_of(&self, key: &K) -> Option<usize> {
        self.sections.get(key).copied()
    }

    /// Returns the number of sections in the layout.
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Returns the per-section counts, one entry for every section.
    pub fn section_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.section_count];
        for key in &self.selected {
            if let Some(&section) = self.sections.get(key) {
                counts[section] += 1;
            }
        }
        counts
    }
}
