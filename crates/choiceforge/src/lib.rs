//! ChoiceForge - Constrained choice lists in Rust
//!
//! A rendering layer hands over its options and a rule, forwards every tap,
//! and asks to finish or cancel. The session keeps the selection within the
//! rule's maxima as the user taps and checks the minima on finish.
//!
//! # Example
//!
//! ```rust
//! use choiceforge::prelude::*;
//!
//! let config = SessionConfig::from_toml_str(r#"
//!     title = "pick toppings"
//!
//!     [rule]
//!     type = "all"
//!     min = 2
//!     max = 2
//!
//!     [[sections]]
//!     options = [
//!         { key = "ham", title = "Ham" },
//!         { key = "olive", title = "Olive" },
//!         { key = "basil", title = "Basil" },
//!     ]
//! "#).unwrap();
//!
//! let mut session = SelectionSession::from_config(&config).unwrap();
//! for key in ["ham", "olive", "basil"] {
//!     session.toggle(&key.to_string()).unwrap();
//! }
//! assert_eq!(session.selected(), &["olive".to_string(), "basil".to_string()]);
//! assert!(session.request_finish().unwrap().is_approved());
//! ```

pub mod event;
pub mod session;

// Core types
pub use choiceforge_core::{
    CellIdentifier, ChoiceForgeError, ConstraintEnforcer, MessageFormatter, OptionLayout,
    OptionPosition, Result, RuleSpec, SelectionState, ToggleOutcome, ValidationError, Validator,
};

// Configuration
pub use choiceforge_config::{
    ConfigError, OptionConfig, RuleConfig, RulePreset, SectionConfig, SessionConfig,
};

pub use event::{
    CountingSessionListener, SessionEventSupport, SessionListener, TracingSessionListener,
};
pub use session::{CancelOutcome, FinishOutcome, SelectionSession, SessionState};

pub mod prelude {
    pub use super::{
        CancelOutcome, CellIdentifier, FinishOutcome, RuleSpec, SelectionSession, SessionConfig,
        SessionListener, SessionState, ToggleOutcome, ValidationError,
    };
}
