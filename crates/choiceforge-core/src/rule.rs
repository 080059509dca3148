//! Selection rules.
//!
//! A [`RuleSpec`] describes how many options a user may pick, either over the
//! whole list or per section. The two forms are mutually exclusive: a session
//! always runs under exactly one of them.

use std::fmt;

use crate::error::{ChoiceForgeError, Result};

/// Cardinality rule for a selection session.
///
/// Maxima are enforced eagerly by the
/// [`ConstraintEnforcer`](crate::enforcer::ConstraintEnforcer) as the user
/// taps; minima are only checked by the [`Validator`](crate::validator::Validator)
/// when the user asks to finish.
///
/// # Examples
///
/// ```
/// use choiceforge_core::RuleSpec;
///
/// assert_eq!(RuleSpec::single(), RuleSpec::All { min: 1, max: Some(1) });
/// assert_eq!(RuleSpec::single_sectioned().to_string(), "Single Sectioned");
/// assert_eq!(RuleSpec::all(1, Some(3)).to_string(), "All [1 - 3]");
/// assert!(!RuleSpec::single().allows_multiple_selection());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum RuleSpec {
    /// Bounds over the whole list; section membership is ignored.
    All {
        /// Minimum number of selections required to finish.
        #[cfg_attr(feature = "serde", serde(default))]
        min: usize,
        /// Maximum number of live selections. `None` for no limit.
        /// Older selections are evicted first in first out.
        #[cfg_attr(feature = "serde", serde(default))]
        max: Option<usize>,
    },

    /// Bounds per section and over the whole list.
    Sectioned {
        /// Minimum number of selections required in every section.
        #[cfg_attr(feature = "serde", serde(default))]
        section_min: usize,
        /// Maximum number of selections per section. `None` for no limit.
        /// Older selections in the same section are evicted first in first out.
        #[cfg_attr(feature = "serde", serde(default))]
        section_max: Option<usize>,
        /// Minimum number of selections required over the whole list.
        #[cfg_attr(feature = "serde", serde(default))]
        total_min: usize,
        /// Maximum number of selections over the whole list, checked on finish.
        #[cfg_attr(feature = "serde", serde(default))]
        total_max: Option<usize>,
    },
}

impl RuleSpec {
    /// Exactly one option over the whole list: `All(1, 1)`.
    pub const SINGLE: RuleSpec = RuleSpec::All {
        min: 1,
        max: Some(1),
    };

    /// At least one option, no upper bound: `All(1, ∅)`.
    pub const MULTIPLE: RuleSpec = RuleSpec::All { min: 1, max: None };

    /// Exactly one option in every section: `Sectioned(1, 1, 1, ∅)`.
    pub const SINGLE_SECTIONED: RuleSpec = RuleSpec::Sectioned {
        section_min: 1,
        section_max: Some(1),
        total_min: 1,
        total_max: None,
    };

    /// At least one option in every section: `Sectioned(1, ∅, 1, ∅)`.
    pub const MULTIPLE_SECTIONED: RuleSpec = RuleSpec::Sectioned {
        section_min: 1,
        section_max: None,
        total_min: 1,
        total_max: None,
    };

    /// Creates a whole-list rule.
    pub const fn all(min: usize, max: Option<usize>) -> Self {
        RuleSpec::All { min, max }
    }

    /// Creates a per-section rule.
    pub const fn sectioned(
        section_min: usize,
        section_max: Option<usize>,
        total_min: usize,
        total_max: Option<usize>,
    ) -> Self {
        RuleSpec::Sectioned {
            section_min,
            section_max,
            total_min,
            total_max,
        }
    }

    /// The [`SINGLE`](Self::SINGLE) preset.
    pub const fn single() -> Self {
        Self::SINGLE
    }

    /// The [`MULTIPLE`](Self::MULTIPLE) preset.
    pub const fn multiple() -> Self {
        Self::MULTIPLE
    }

    /// The [`SINGLE_SECTIONED`](Self::SINGLE_SECTIONED) preset.
    pub const fn single_sectioned() -> Self {
        Self::SINGLE_SECTIONED
    }

    /// The [`MULTIPLE_SECTIONED`](Self::MULTIPLE_SECTIONED) preset.
    pub const fn multiple_sectioned() -> Self {
        Self::MULTIPLE_SECTIONED
    }

    /// Returns true for the per-section form.
    pub fn is_sectioned(&self) -> bool {
        matches!(self, RuleSpec::Sectioned { .. })
    }

    /// Returns false only when at most one option may ever be live at once.
    ///
    /// Rendering layers use this to switch their list into single-selection mode.
    pub fn allows_multiple_selection(&self) -> bool {
        !matches!(self, RuleSpec::All { max: Some(1), .. })
    }

    /// Returns the name of the preset this rule equals, if any.
    pub fn preset_name(&self) -> Option<&'static str> {
        match *self {
            Self::SINGLE => Some("Single"),
            Self::SINGLE_SECTIONED => Some("Single Sectioned"),
            Self::MULTIPLE => Some("Multiple"),
            Self::MULTIPLE_SECTIONED => Some("Multiple Sectioned"),
            _ => None,
        }
    }

    /// Rejects bounds that no selection could ever satisfy.
    ///
    /// Sessions never call this themselves; configuration loaders do, before
    /// handing a rule to a session.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceForgeError::InvalidRule`] when a maximum is zero or
    /// below its matching minimum.
    pub fn check_bounds(&self) -> Result<()> {
        match *self {
            RuleSpec::All { min, max } => {
                if let Some(max) = max {
                    if max == 0 {
                        return Err(ChoiceForgeError::InvalidRule(
                            "max must be at least 1".to_string(),
                        ));
                    }
                    if max < min {
                        return Err(ChoiceForgeError::InvalidRule(format!(
                            "max {max} is below min {min}"
                        )));
                    }
                }
                Ok(())
            }
            RuleSpec::Sectioned {
                section_min,
                section_max,
                total_min,
                total_max,
            } => {
                if let Some(section_max) = section_max {
                    if section_max == 0 {
                        return Err(ChoiceForgeError::InvalidRule(
                            "section_max must be at least 1".to_string(),
                        ));
                    }
                    if section_max < section_min {
                        return Err(ChoiceForgeError::InvalidRule(format!(
                            "section_max {section_max} is below section_min {section_min}"
                        )));
                    }
                }
                if let Some(total_max) = total_max {
                    if total_max == 0 {
                        return Err(ChoiceForgeError::InvalidRule(
                            "total_max must be at least 1".to_string(),
                        ));
                    }
                    if total_max < total_min {
                        return Err(ChoiceForgeError::InvalidRule(format!(
                            "total_max {total_max} is below total_min {total_min}"
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

impl Default for RuleSpec {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.preset_name() {
            return f.write_str(name);
        }

        match *self {
            RuleSpec::All { min, max } => write!(f, "All [{} - {}]", min, max.unwrap_or(0)),
            RuleSpec::Sectioned {
                section_min,
                section_max,
                total_min,
                total_max,
            } => write!(
                f,
                "Sectioned [{} - {}] - [{} - {}]",
                section_min,
                section_max.unwrap_or(0),
                total_min,
                total_max.unwrap_or(0)
            ),
        }
    }
}
