//! Reaction targets

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of entity a reaction is attached to
///
/// Articles and comments share identical reaction semantics but are stored
/// separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Article,
    Comment,
}

impl TargetKind {
    /// Capitalized name used in error messages
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Comment => "Comment",
        }
    }

    /// Lowercase noun used in response messages
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
