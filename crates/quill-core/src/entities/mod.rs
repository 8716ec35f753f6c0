//! Domain entities - core business objects

mod reaction;
mod target;
mod transition;

pub use reaction::{Reaction, ReactionCounts, ReactionValue};
pub use target::TargetKind;
pub use transition::{ReactionTransition, ToggleOutcome};
