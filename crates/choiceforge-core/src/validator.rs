//! Finish-time validation of a selection.

use std::fmt::Debug;
use std::hash::Hash;

use crate::layout::OptionLayout;
use crate::rule::RuleSpec;
use crate::selection::SelectionState;

/// Checks a selection against its rule when the user asks to finish.
///
/// For `All` rules only the minimum is checked. The maximum is kept by the
/// [`ConstraintEnforcer`](crate::enforcer::ConstraintEnforcer) on every
/// toggle, so a state that bypassed the enforcer (e.g. an over-limit seed)
/// is not caught here.
///
/// # Examples
///
/// ```
/// use choiceforge_core::{OptionLayout, RuleSpec, SelectionState, Validator};
/// use std::collections::HashMap;
///
/// let layout = OptionLayout::new(HashMap::new(), HashMap::new(), Vec::new(), vec![vec![1, 2, 3]]);
/// let mut state = SelectionState::new(&layout);
/// let validator = Validator::new(RuleSpec::multiple());
///
/// assert!(!validator.validate(&state));
/// state.toggle(&2, &RuleSpec::multiple());
/// assert!(validator.validate(&state));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    rule: RuleSpec,
}

impl Validator {
    /// Creates a validator for the given rule.
    pub fn new(rule: RuleSpec) -> Self {
        Self { rule }
    }

    /// Returns the rule being validated against.
    pub fn rule(&self) -> &RuleSpec {
        &self.rule
    }

    /// Returns true if the selection may be finished.
    pub fn validate<K>(&self, state: &SelectionState<K>) -> bool
    where
        K: Clone + Eq + Hash + Debug,
    {
        match self.rule {
            RuleSpec::All { min, .. } => state.count() >= min,

            RuleSpec::Sectioned {
                section_min,
                section_max,
                total_min,
                total_max,
            } => {
                let counts = state.section_counts();
                let total = state.count();

                let section_min_met = counts.iter().all(|&c| c >= section_min);
                let total_min_met = total >= total_min;
                let section_max_met = section_max.map_or(true, |max| counts.iter().all(|&c| c <= max));
                let total_max_met = total_max.map_or(true, |max| total <= max);

                section_min_met && total_min_met && section_max_met && total_max_met
            }
        }
    }

    /// Returns the sections with fewer options than `section_min`.
    ///
    /// A selection over such a layout can never validate. This is a caller
    /// configuration mistake; the engine reports it but does not correct it.
    pub fn unsatisfiable_sections<K>(&self, layout: &OptionLayout<K>) -> Vec<usize>
    where
        K: Clone + Eq + Hash + Debug,
    {
        match self.rule {
            RuleSpec::All { .. } => Vec::new(),
            RuleSpec::Sectioned { section_min, .. } => (0..layout.section_count())
                .filter(|&section| layout.option_count(section) < section_min)
                .collect(),
        }
    }
}
