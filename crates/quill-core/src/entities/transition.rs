//! Like/dislike toggle state machine
//!
//! ```text
//!            like                 like
//!  NEUTRAL ────────▶ LIKED ────────────▶ NEUTRAL
//!     │               │ ▲
//!     │ dislike       │ │ like
//!     ▼       dislike ▼ │
//!  DISLIKED ◀──────────┘
//!     │
//!     │ dislike
//!     ▼
//!  NEUTRAL
//! ```
//!
//! `decide` is pure; applying the transition is the caller's job.

use serde::Serialize;

use super::reaction::ReactionValue;

/// Mutation to apply for one toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTransition {
    /// No reaction stored: create one
    Create(ReactionValue),
    /// Opposite reaction stored: overwrite it
    Flip { from: ReactionValue, to: ReactionValue },
    /// Same reaction stored: delete it
    Remove(ReactionValue),
}

/// Outcome reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    /// A reaction was created or its polarity changed
    Applied,
    /// A repeated intent removed the reaction
    Reverted,
}

impl ReactionTransition {
    /// Compute the transition for `intent` given the currently stored value
    pub fn decide(current: Option<ReactionValue>, intent: ReactionValue) -> Self {
        match current {
            None => Self::Create(intent),
            Some(value) if value == intent => Self::Remove(value),
            Some(value) => Self::Flip {
                from: value,
                to: intent,
            },
        }
    }

    /// Outcome tag for this transition
    ///
    /// A flip reports `Applied`, same as a fresh reaction.
    pub fn outcome(self) -> ToggleOutcome {
        match self {
            Self::Create(_) | Self::Flip { .. } => ToggleOutcome::Applied,
            Self::Remove(_) => ToggleOutcome::Reverted,
        }
    }

    /// Stored value after the transition has been applied
    pub fn resulting_value(self) -> Option<ReactionValue> {
        match self {
            Self::Create(value) => Some(value),
            Self::Flip { to, .. } => Some(to),
            Self::Remove(_) => None,
        }
    }

    /// The value the user acted with
    pub fn intent(self) -> ReactionValue {
        match self {
            Self::Create(value) | Self::Remove(value) => value,
            Self::Flip { to, .. } => to,
        }
    }
}
