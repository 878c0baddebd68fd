//! Element kinds of the query language.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownVerb;

use super::TagBuilder;

/// The closed vocabulary of elements a request document can contain.
///
/// Each kind fixes how its tag is laid out when serialized; see
/// [`is_self_closing`](Self::is_self_closing),
/// [`allows_children`](Self::allows_children) and
/// [`is_inline`](Self::is_inline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKind {
    /// Document root.
    Request,
    /// Authentication element, always the first child of the root.
    Login,
    /// A query against one object type.
    Query,
    /// Wraps the predicates of a query.
    Filter,
    /// All children must match.
    And,
    /// At least one child must match.
    Or,
    /// The field exists (or not, depending on `value`).
    Exists,
    /// Equal to.
    Eq,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Not equal.
    Ne,
    /// Matches a pattern.
    Like,
    /// Does not match a pattern.
    NotLike,
    /// Is one of a comma separated list.
    In,
    /// Is none of a comma separated list.
    NotIn,
    /// Geometry lies within a shape.
    Within,
    /// Geometry intersects a shape.
    Intersects,
    /// Geometry is near a point.
    Near,
    /// Field to return in the result.
    Include,
}

impl TagKind {
    /// Every kind, in declaration order.
    pub const ALL: [TagKind; 21] = [
        TagKind::Request,
        TagKind::Login,
        TagKind::Query,
        TagKind::Filter,
        TagKind::And,
        TagKind::Or,
        TagKind::Exists,
        TagKind::Eq,
        TagKind::Gt,
        TagKind::Gte,
        TagKind::Lt,
        TagKind::Lte,
        TagKind::Ne,
        TagKind::Like,
        TagKind::NotLike,
        TagKind::In,
        TagKind::NotIn,
        TagKind::Within,
        TagKind::Intersects,
        TagKind::Near,
        TagKind::Include,
    ];

    /// Returns the element name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Request => "REQUEST",
            TagKind::Login => "LOGIN",
            TagKind::Query => "QUERY",
            TagKind::Filter => "FILTER",
            TagKind::And => "AND",
            TagKind::Or => "OR",
            TagKind::Exists => "EXISTS",
            TagKind::Eq => "EQ",
            TagKind::Gt => "GT",
            TagKind::Gte => "GTE",
            TagKind::Lt => "LT",
            TagKind::Lte => "LTE",
            TagKind::Ne => "NE",
            TagKind::Like => "LIKE",
            TagKind::NotLike => "NOTLIKE",
            TagKind::In => "IN",
            TagKind::NotIn => "NOTIN",
            TagKind::Within => "WITHIN",
            TagKind::Intersects => "INTERSECTS",
            TagKind::Near => "NEAR",
            TagKind::Include => "INCLUDE",
        }
    }

    /// Returns `true` if the tag renders as `<NAME .../>`.
    pub fn is_self_closing(self) -> bool {
        !self.is_container() && self != TagKind::Include
    }

    /// Returns `true` if the tag may carry child tags.
    pub fn allows_children(self) -> bool {
        self.is_container()
    }

    /// Returns `true` if open tag, value and close tag share one line.
    pub fn is_inline(self) -> bool {
        self == TagKind::Include
    }

    fn is_container(self) -> bool {
        matches!(
            self,
            TagKind::Request | TagKind::Query | TagKind::Filter | TagKind::And | TagKind::Or
        )
    }

    /// Returns `true` if the kind can be looked up by name with [`from_verb`](Self::from_verb).
    pub fn is_verb(self) -> bool {
        !matches!(self, TagKind::Request | TagKind::Login | TagKind::Include)
    }

    /// Resolves an operator name, ignoring case.
    ///
    /// Only query verbs resolve; the structural `REQUEST`, `LOGIN` and
    /// `INCLUDE` elements return `None`, as does any unknown name.
    ///
    /// # Example
    ///
    /// ```
    /// use trafikverket_lib::query::TagKind;
    ///
    /// assert_eq!(TagKind::from_verb("eq"), Some(TagKind::Eq));
    /// assert_eq!(TagKind::from_verb("NotLike"), Some(TagKind::NotLike));
    /// assert_eq!(TagKind::from_verb("bogus"), None);
    /// ```
    pub fn from_verb(verb: &str) -> Option<TagKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| kind.is_verb())
            .find(|kind| kind.name().eq_ignore_ascii_case(verb))
    }

    /// Starts a new tag of this kind.
    pub fn builder(self) -> TagBuilder {
        TagBuilder::new(self)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TagKind {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_verb(s).ok_or_else(|| UnknownVerb(s.to_string()))
    }
}
