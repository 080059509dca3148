//! User-facing messages for a selection that failed validation.

use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::rule::RuleSpec;
use crate::selection::SelectionState;

/// Label of the button that dismisses a validation alert.
pub const DISMISS_LABEL: &str = "OK";

/// Alert content for a rejected finish request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    /// Capitalized session title, if the session has one.
    pub title: Option<String>,
    /// What the user needs to change.
    pub message: String,
    /// Label of the dismiss button.
    pub dismiss_label: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{}: {}", title, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Builds the alert shown when a finish request fails validation.
///
/// # Examples
///
/// ```
/// use choiceforge_core::{MessageFormatter, OptionLayout, RuleSpec, SelectionState};
/// use std::collections::HashMap;
///
/// let layout = OptionLayout::new(HashMap::new(), HashMap::new(), Vec::new(), vec![vec!["a"]]);
/// let state = SelectionState::new(&layout);
///
/// let error = MessageFormatter::new(RuleSpec::single()).format(&state, Some("choose an option"));
/// assert_eq!(error.title.as_deref(), Some("Choose An Option"));
/// assert_eq!(error.message, "Please make a selection.");
/// assert_eq!(error.dismiss_label, "OK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFormatter {
    rule: RuleSpec,
}

impl MessageFormatter {
    /// Creates a formatter for the given rule.
    pub fn new(rule: RuleSpec) -> Self {
        Self { rule }
    }

    /// Returns the full alert for `state`, titled after the session.
    pub fn format<K>(&self, state: &SelectionState<K>, session_title: Option<&str>) -> ValidationError
    where
        K: Clone + Eq + Hash + Debug,
    {
        ValidationError {
            title: session_title.map(capitalize),
            message: self.message(state.count()),
            dismiss_label: DISMISS_LABEL.to_string(),
        }
    }

    /// Returns the alert message given the number of selected keys.
    pub fn message(&self, count: usize) -> String {
        match self.rule {
            RuleSpec::All { min, max } => {
                if count < min {
                    if count == 0 && min == 1 {
                        "Please make a selection.".to_string()
                    } else {
                        format!("Please select another {} choices.", min - count)
                    }
                } else {
                    match max {
                        Some(max) if count > max => {
                            format!("You can only select a maximum of {max}.")
                        }
                        _ => "Please make a selection.".to_string(),
                    }
                }
            }

            RuleSpec::Sectioned {
                section_min,
                section_max,
                total_min,
                total_max,
            } => {
                let base = format!(
                    "Please select at least {section_min} per section and {total_min} in total."
                );
                match (section_max, total_max) {
                    (None, None) => base,
                    (None, Some(total_max)) => {
                        format!("{base} You can select a maximum of {total_max}.")
                    }
                    (Some(section_max), None) => {
                        format!("{base} You can select a maximum of {section_max} per section.")
                    }
                    (Some(section_max), Some(total_max)) => format!(
                        "{base} You can select a maximum of {section_max} per section, and {total_max} overall."
                    ),
                }
            }
        }
    }
}

/// Upper-cases the first letter of every word and lower-cases the rest.
pub fn capitalize(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut at_word_start = true;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
