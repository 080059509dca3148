//! Eager eviction of selections that would break a maximum.
//!
//! Only maxima are enforced here. Minima, `total_max` and the non-preset
//! `section_min` are left to the [`Validator`](crate::validator::Validator) at
//! finish time, so a user can always start from an empty selection.

use std::fmt::Debug;
use std::hash::Hash;

use crate::rule::RuleSpec;
use crate::selection::SelectionState;

/// Decides which selections to drop before a new key is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintEnforcer {
    rule: RuleSpec,
}

impl ConstraintEnforcer {
    /// Creates an enforcer for the given rule.
    pub fn new(rule: RuleSpec) -> Self {
        Self { rule }
    }

    /// Returns the rule being enforced.
    pub fn rule(&self) -> &RuleSpec {
        &self.rule
    }

    /// Returns the keys to evict, oldest first, before `incoming` is appended
    /// to `state`.
    ///
    /// `state` is the selection before the addition and must not already
    /// contain `incoming`.
    ///
    /// - `All`: once the live count equals `max`, the single oldest key goes.
    ///   Callers only ever add one key at a time, so the count can never sit
    ///   above `max` and equality is the only trigger.
    /// - `Sectioned` equal to the single-per-section preset: every selection
    ///   in the incoming key's section goes.
    /// - Other `Sectioned` rules: when counting the incoming key would take its
    ///   section over `section_max`, the oldest key in that section goes.
    pub fn evictions_before_adding<K>(&self, state: &SelectionState<K>, incoming: &K) -> Vec<K>
    where
        K: Clone + Eq + Hash + Debug,
    {
        match self.rule {
            RuleSpec::All { max, .. } => match (max, state.selected().first()) {
                (Some(max), Some(oldest)) if state.count() == max => vec![oldest.clone()],
                _ => Vec::new(),
            },

            RuleSpec::Sectioned { section_max, .. } => {
                let Some(section) = state.section_of(incoming) else {
                    return Vec::new();
                };

                if self.rule == RuleSpec::SINGLE_SECTIONED {
                    return state.selected_in(section).cloned().collect();
                }

                match section_max {
                    Some(max) if state.count_in(section) + 1 > max => {
                        state.selected_in(section).take(1).cloned().collect()
                    }
                    _ => Vec::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{demo_layout, two_section_layout, uneven_layout};

    #[test]
    fn test_all_below_max_evicts_nothing() {
        let layout = demo_layout();
        let state = SelectionState::with_selection(&layout, ["OA", "OB"]);
        let enforcer = ConstraintEnforcer::new(RuleSpec::all(1, Some(3)));

        assert!(enforcer.evictions_before_adding(&state, &"OC").is_empty());
    }

    #[test]
    fn test_all_at_max_evicts_oldest() {
        let layout = demo_layout();
        let state = SelectionState::with_selection(&layout, ["OB", "CA", "OA"]);
        let enforcer = ConstraintEnforcer::new(RuleSpec::all(1, Some(3)));

        assert_eq!(enforcer.evictions_before_adding(&state, &"CC"), vec!["OB"]);
    }

    #[test]
    fn test_all_over_max_is_not_trimmed() {
        // Eviction fires on equality only; a seeded over-limit state stays as is.
        let layout = demo_layout();
        let state = SelectionState::with_selection(&layout, ["OA", "OB", "OC"]);
        let enforcer = ConstraintEnforcer::new(RuleSpec::all(0, Some(2)));

        assert!(enforcer.evictions_before_adding(&state, &"CA").is_empty());
    }

    #[test]
    fn test_all_without_max() {
        let layout = demo_layout();
        let state = SelectionState::with_selection(&layout, ["OA", "OB", "OC", "CA", "CB"]);
        let enforcer = ConstraintEnforcer::new(RuleSpec::multiple());

        assert!(enforcer.evictions_before_adding(&state, &"CC").is_empty());
    }

    #[test]
    fn test_single_sectioned_clears_section() {
        let layout = uneven_layout();
        // Looser seed than the rule allows; the preset clears the whole section.
        let state = SelectionState::with_selection(&layout, ["k1", "k3", "k2"]);
        let enforcer = ConstraintEnforcer::new(RuleSpec::single_sectioned());

        assert_eq!(enforcer.evictions_before_adding(&state, &"k4"), vec!["k3"]);
        assert_eq!(
            enforcer.evictions_before_adding(&state, &"k5"),
            vec!["k1", "k2"]
        );
    }

    #[test]
    fn test_section_max_evicts_oldest_in_section() {
        let layout = uneven_layout();
        let state = SelectionState::with_selection(&layout, ["k1", "k3", "k2"]);
        let enforcer = ConstraintEnforcer::new(RuleSpec::sectioned(1, Some(2), 0, None));

        assert_eq!(enforcer.evictions_before_adding(&state, &"k5"), vec!["k1"]);
        assert!(enforcer.evictions_before_adding(&state, &"k4").is_empty());
    }

    #[test]
    fn test_total_max_is_not_enforced_eagerly() {
        let layout = two_section_layout();
        let state = SelectionState::with_selection(&layout, ["k1", "k3"]);
        let enforcer = ConstraintEnforcer::new(RuleSpec::sectioned(0, None, 0, Some(2)));

        assert!(enforcer.evictions_before_adding(&state, &"k2").is_empty());
    }

    #[test]
    fn test_sectioned_single_per_section_without_preset() {
        // Same per-section bound as the preset but a different total_min:
        // only the oldest in the section goes.
        let layout = uneven_layout();
        let state = SelectionState::with_selection(&layout, ["k1", "k2"]);
        let enforcer = ConstraintEnforcer::new(RuleSpec::sectioned(1, Some(1), 0, None));

        assert_eq!(enforcer.evictions_before_adding(&state, &"k5"), vec!["k1"]);
    }
}
