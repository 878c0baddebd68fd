//! XML generation for request documents.

use std::borrow::Cow;

use crate::Settings;
use crate::error::BuildError;

use super::Tag;

/// Escapes a string for use in XML attribute values and text.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl Tag {
    /// Serializes the tree rooted at this tag.
    ///
    /// Tags are written depth first. Each tag starts on its own line,
    /// indented by its depth when `settings.pretty_print` is on.
    /// Attributes are written in key order.
    ///
    /// Fails with [`BuildError::ChildrenNotAllowed`] if a leaf tag has
    /// children; nothing is returned in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use trafikverket_lib::query::{opt, Tag};
    /// use trafikverket_lib::Settings;
    ///
    /// let filter = Tag::filter()
    ///     .child(Tag::eq().opt(opt::NAME, "ActivityType").opt(opt::VALUE, "Avgang"))
    ///     .build();
    ///
    /// assert_eq!(
    ///     filter.to_xml(&Settings::default()).unwrap(),
    ///     "<FILTER>\n  <EQ name=\"ActivityType\" value=\"Avgang\"/>\n</FILTER>\n"
    /// );
    /// ```
    pub fn to_xml(&self, settings: &Settings) -> Result<String, BuildError> {
        let mut out = String::new();
        write_tag(&mut out, self, 0, settings)?;
        Ok(out)
    }
}

fn write_tag(
    out: &mut String,
    tag: &Tag,
    depth: usize,
    settings: &Settings,
) -> Result<(), BuildError> {
    let kind = tag.kind();
    if !kind.allows_children() && !tag.children().is_empty() {
        return Err(BuildError::children_not_allowed(kind));
    }

    write_indent(out, depth, settings);
    out.push('<');
    out.push_str(kind.name());
    for (key, value) in tag.opts().iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&text(value, settings));
        out.push('"');
    }

    if kind.is_self_closing() {
        out.push_str("/>\n");
        return Ok(());
    }

    out.push('>');
    if let Some(value) = tag.value().filter(|v| !v.is_empty()) {
        out.push_str(&text(value, settings));
    }

    if kind.is_inline() {
        write_close(out, tag);
        return Ok(());
    }

    out.push('\n');
    for child in tag.children() {
        write_tag(out, child, depth + 1, settings)?;
    }
    write_indent(out, depth, settings);
    write_close(out, tag);
    Ok(())
}

fn write_indent(out: &mut String, depth: usize, settings: &Settings) {
    if settings.pretty_print {
        for _ in 0..depth {
            out.push_str(&settings.indent);
        }
    }
}

fn write_close(out: &mut String, tag: &Tag) {
    out.push_str("</");
    out.push_str(tag.name());
    out.push_str(">\n");
}

fn text<'a>(value: &'a str, settings: &Settings) -> Cow<'a, str> {
    if settings.escape {
        Cow::Owned(escape_xml(value))
    } else {
        Cow::Borrowed(value)
    }
}
