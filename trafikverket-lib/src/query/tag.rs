//! Tag tree: a mutable builder and the immutable tag it produces.

use super::Opts;
use super::TagKind;
use super::opt;

/// One element of a request document.
///
/// A `Tag` is frozen: it is produced by [`TagBuilder::build`] and only
/// exposes read accessors, so a finished tree can be serialized any number of
/// times, from any thread, with the same result.
///
/// The associated functions (`Tag::query()`, `Tag::eq()`, ...) start a
/// [`TagBuilder`] for the corresponding kind.
///
/// # Example
///
/// ```
/// use trafikverket_lib::query::{opt, Opts, Tag};
///
/// let query = Tag::query()
///     .opts(Opts::from([
///         (opt::OBJECT_TYPE, "TrainAnnouncement"),
///         (opt::SCHEMA_VERSION, "1.6"),
///     ]))
///     .add([
///         Tag::filter().child(Tag::eq().opt(opt::NAME, "ActivityType").opt(opt::VALUE, "Avgang")),
///         Tag::include("AdvertisedTrainIdent"),
///     ])
///     .build();
///
/// assert_eq!(query.children().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    kind: TagKind,
    opts: Opts,
    children: Vec<Tag>,
    value: Option<String>,
}

impl Tag {
    /// Starts a tag of the given kind.
    pub fn builder(kind: TagKind) -> TagBuilder {
        TagBuilder::new(kind)
    }

    /// `<LOGIN authenticationkey="..."/>`
    pub fn login(key: impl Into<String>) -> TagBuilder {
        TagBuilder::new(TagKind::Login).opt(opt::AUTHENTICATION_KEY, key)
    }

    /// `<QUERY>`
    pub fn query() -> TagBuilder {
        TagBuilder::new(TagKind::Query)
    }

    /// `<FILTER>`
    pub fn filter() -> TagBuilder {
        TagBuilder::new(TagKind::Filter)
    }

    /// `<AND>`
    pub fn and() -> TagBuilder {
        TagBuilder::new(TagKind::And)
    }

    /// `<OR>`
    pub fn or() -> TagBuilder {
        TagBuilder::new(TagKind::Or)
    }

    /// `<EXISTS/>`
    pub fn exists() -> TagBuilder {
        TagBuilder::new(TagKind::Exists)
    }

    /// `<EQ/>`, equal.
    pub fn eq() -> TagBuilder {
        TagBuilder::new(TagKind::Eq)
    }

    /// `<GT/>`, greater than.
    pub fn gt() -> TagBuilder {
        TagBuilder::new(TagKind::Gt)
    }

    /// `<GTE/>`, greater than or equal.
    pub fn gte() -> TagBuilder {
        TagBuilder::new(TagKind::Gte)
    }

    /// `<LT/>`, less than.
    pub fn lt() -> TagBuilder {
        TagBuilder::new(TagKind::Lt)
    }

    /// `<LTE/>`, less than or equal.
    pub fn lte() -> TagBuilder {
        TagBuilder::new(TagKind::Lte)
    }

    /// `<NE/>`, not equal.
    pub fn ne() -> TagBuilder {
        TagBuilder::new(TagKind::Ne)
    }

    /// `<LIKE/>`
    pub fn like() -> TagBuilder {
        TagBuilder::new(TagKind::Like)
    }

    /// `<NOTLIKE/>`
    pub fn not_like() -> TagBuilder {
        TagBuilder::new(TagKind::NotLike)
    }

    /// `<IN/>`
    pub fn in_() -> TagBuilder {
        TagBuilder::new(TagKind::In)
    }

    /// `<NOTIN/>`
    pub fn not_in() -> TagBuilder {
        TagBuilder::new(TagKind::NotIn)
    }

    /// `<WITHIN/>`
    pub fn within() -> TagBuilder {
        TagBuilder::new(TagKind::Within)
    }

    /// `<INTERSECTS/>`
    pub fn intersects() -> TagBuilder {
        TagBuilder::new(TagKind::Intersects)
    }

    /// `<NEAR/>`
    pub fn near() -> TagBuilder {
        TagBuilder::new(TagKind::Near)
    }

    /// `<INCLUDE>field</INCLUDE>`
    pub fn include(field: impl Into<String>) -> TagBuilder {
        TagBuilder::new(TagKind::Include).value(field)
    }

    /// Returns the element kind.
    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// Returns the element name, e.g. `"QUERY"`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns the attributes.
    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// Returns the child tags in document order.
    pub fn children(&self) -> &[Tag] {
        &self.children
    }

    /// Returns the inline text value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Builder for a [`Tag`].
///
/// All combinators take and return the builder so trees can be written as
/// one expression. Children may be added to any kind here; leaf kinds that
/// received children are rejected when the tree is serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBuilder {
    kind: TagKind,
    opts: Opts,
    children: Vec<Tag>,
    value: Option<String>,
}

impl TagBuilder {
    /// Creates an empty builder for the given kind.
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            opts: Opts::new(),
            children: Vec::new(),
            value: None,
        }
    }

    /// Starts a tag from an operator name such as `"eq"` or `"AND"`.
    ///
    /// Returns `None` for names that are not query verbs; see
    /// [`TagKind::from_verb`].
    pub fn from_verb(verb: &str) -> Option<Self> {
        TagKind::from_verb(verb).map(Self::new)
    }

    /// Replaces all attributes.
    pub fn opts(mut self, opts: impl Into<Opts>) -> Self {
        self.opts = opts.into();
        self
    }

    /// Sets a single attribute.
    pub fn opt(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.set(key, value);
        self
    }

    /// Appends children.
    pub fn add<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tag>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends one child.
    pub fn child(mut self, child: impl Into<Tag>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Sets the inline text value.
    ///
    /// The value is written as-is unless escaping is enabled in
    /// [`Settings`](crate::Settings).
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns the element kind.
    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// Freezes the builder into a [`Tag`].
    pub fn build(self) -> Tag {
        Tag {
            kind: self.kind,
            opts: self.opts,
            children: self.children,
            value: self.value,
        }
    }
}

impl From<TagBuilder> for Tag {
    fn from(builder: TagBuilder) -> Self {
        builder.build()
    }
}
