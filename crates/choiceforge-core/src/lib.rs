//! ChoiceForge Core - Selection rules and their enforcement
//!
//! This crate provides the rendering-free engine behind a choice list:
//! - Option layout: keys, titles, details and their sections
//! - Rule types describing how many options may be picked
//! - Selection state with eager, first in first out eviction of maxima
//! - Finish-time validation of minima
//! - Alert messages for selections that fail validation

pub mod enforcer;
pub mod error;
pub mod layout;
pub mod message;
pub mod rule;
pub mod selection;
pub mod validator;

#[cfg(test)]
mod test_utils;

pub use enforcer::ConstraintEnforcer;
pub use error::{ChoiceForgeError, Result};
pub use layout::{CellIdentifier, OptionLayout, OptionPosition};
pub use message::{MessageFormatter, ValidationError, DISMISS_LABEL};
pub use rule::RuleSpec;
pub use selection::{SelectionState, ToggleOutcome};
pub use validator::Validator;
