//! Serialization and dispatch settings

use std::sync::PoisonError;
use std::sync::RwLock;

static GLOBAL: RwLock<Option<Settings>> = RwLock::new(None);

/// Controls how requests are written and reported.
///
/// Settings are passed explicitly to [`Tag::to_xml`](crate::query::Tag::to_xml)
/// and owned by each [`TrafikverketClient`](crate::TrafikverketClient).
/// A process-wide default, read by [`Settings::global`], is what new clients
/// start from.
///
/// # Example
///
/// ```
/// use trafikverket_lib::Settings;
///
/// let settings = Settings::default()
///     .with_debug(true)
///     .with_indent("\t");
///
/// // Make every client created from now on print its requests
/// Settings::set_global(settings.clone());
/// assert_eq!(Settings::global(), settings);
/// # Settings::set_global(Settings::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Log each serialized request before it is sent.
    ///
    /// The request goes to the `log` facade at `info` level; nothing is
    /// printed unless the host application installs a logger.
    ///
    /// Default: `false`
    pub debug: bool,

    /// Indent tags by their depth.
    ///
    /// Default: `true`
    pub pretty_print: bool,

    /// One level of indentation.
    ///
    /// Default: two spaces
    pub indent: String,

    /// Escape `& < > " '` in attribute values and text.
    ///
    /// Off by default: the values are sent exactly as given, so callers are
    /// expected to pass already escaped text.
    pub escape: bool,
}

impl Settings {
    /// Creates settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the process-wide default.
    pub fn global() -> Settings {
        let global = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
        global.clone().unwrap_or_default()
    }

    /// Replaces the process-wide default.
    ///
    /// Clients that were already built keep their own copy.
    pub fn set_global(settings: Settings) {
        let mut global = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
        *global = Some(settings);
    }

    /// Sets the debug flag.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets whether tags are indented.
    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    /// Sets the indentation unit.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets whether values are escaped.
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            pretty_print: true,
            indent: "  ".to_string(),
            escape: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.debug);
        assert!(settings.pretty_print);
        assert_eq!(settings.indent, "  ");
        assert!(!settings.escape);
    }

    #[test]
    fn test_builder() {
        let settings = Settings::new()
            .with_debug(true)
            .with_pretty_print(false)
            .with_indent("    ")
            .with_escape(true);
        assert!(settings.debug);
        assert!(!settings.pretty_print);
        assert_eq!(settings.indent, "    ");
        assert!(settings.escape);
    }

    #[test]
    fn test_global_round_trip() {
        assert_eq!(Settings::global(), Settings::default());

        let custom = Settings::default().with_indent("\t").with_debug(true);
        Settings::set_global(custom.clone());
        assert_eq!(Settings::global(), custom);

        Settings::set_global(Settings::default());
        assert_eq!(Settings::global(), Settings::default());
    }
}
