//! Tag attributes.

use std::collections::BTreeMap;

/// Predicate field name.
pub const NAME: &str = "name";
/// Object type a query runs against.
pub const OBJECT_TYPE: &str = "objecttype";
/// Result ordering.
pub const ORDER_BY: &str = "orderby";
/// Radius for `NEAR` / `WITHIN`.
pub const RADIUS: &str = "radius";
/// Schema version of the object type.
pub const SCHEMA_VERSION: &str = "schemaversion";
/// Geometry shape for `WITHIN`.
pub const SHAPE: &str = "shape";
/// Maximum number of results.
pub const LIMIT: &str = "limit";
/// Predicate value.
pub const VALUE: &str = "value";
/// API key on the `LOGIN` tag.
pub const AUTHENTICATION_KEY: &str = "authenticationkey";

/// Attributes of a tag, `<TAG key="value">`.
///
/// Keys are kept sorted so a tag always serializes the same way.
///
/// # Example
///
/// ```
/// use trafikverket_lib::query::opt;
/// use trafikverket_lib::query::Opts;
///
/// let opts = Opts::new()
///     .with(opt::NAME, "ActivityType")
///     .with(opt::VALUE, "Avgang");
///
/// assert_eq!(opts.get(opt::VALUE), Some("Avgang"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opts(BTreeMap<String, String>);

impl Opts {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Sets an attribute and returns the set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the value of an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Opts
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Opts
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
