//! Query tree errors

use crate::query::TagKind;

/// Errors raised while turning a tag tree into XML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A tag that must be a leaf was given children.
    #[error("tag {kind} should not have any children")]
    ChildrenNotAllowed {
        /// The offending element kind.
        kind: TagKind,
    },
}

impl BuildError {
    /// Creates a new children-not-allowed error.
    pub fn children_not_allowed(kind: TagKind) -> Self {
        Self::ChildrenNotAllowed { kind }
    }

    /// Returns the element kind the error is about.
    pub fn kind(&self) -> TagKind {
        match self {
            Self::ChildrenNotAllowed { kind } => *kind,
        }
    }
}

/// Returned by [`TagKind::from_str`](std::str::FromStr::from_str) for an unrecognized verb.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown verb: {0}")]
pub struct UnknownVerb(pub String);
