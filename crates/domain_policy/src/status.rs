//! Policy lifecycle states and the allowed-transition table
//!
//! The lifecycle is monotonic and acyclic: a policy is issued, may become
//! active, and may then be voided. Nothing leaves `void`, and self
//! transitions are not permitted. The legal moves live in a single lookup
//! table so that adding a state or transition is a one-line change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a policy
///
/// Persisted as the lowercase string tags `issued`, `active`, `void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    /// Initial state at creation
    Issued,
    /// Policy is in force
    Active,
    /// Terminal state; no transition leaves it
    Void,
}

impl PolicyStatus {
    /// The allowed-transition table.
    ///
    /// `issued -> active`, `active -> void`, nothing out of `void`.
    pub fn transitions(self) -> &'static [PolicyStatus] {
        match self {
            PolicyStatus::Issued => &[PolicyStatus::Active],
            PolicyStatus::Active => &[PolicyStatus::Void],
            PolicyStatus::Void => &[],
        }
    }

    /// Whether the state machine permits moving to `target`.
    ///
    /// Self-transitions are never in the table and therefore always fail.
    pub fn can_transition_to(self, target: PolicyStatus) -> bool {
        self.transitions().contains(&target)
    }

    /// True when no transition leaves this state
    pub fn is_terminal(self) -> bool {
        self.transitions().is_empty()
    }

    /// The lowercase storage tag for this state
    pub fn as_tag(self) -> &'static str {
        match self {
            PolicyStatus::Issued => "issued",
            PolicyStatus::Active => "active",
            PolicyStatus::Void => "void",
        }
    }

    /// Parses an exact lowercase storage tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "issued" => Some(PolicyStatus::Issued),
            "active" => Some(PolicyStatus::Active),
            "void" => Some(PolicyStatus::Void),
            _ => None,
        }
    }

    /// Lenient parse used by the list filter: case-insensitive, and
    /// unrecognized values yield `None` rather than an error.
    pub fn parse_filter_tag(raw: &str) -> Option<Self> {
        Self::from_tag(&raw.to_lowercase())
    }
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
