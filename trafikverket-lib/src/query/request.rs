//! The request document root.

use crate::Settings;
use crate::error::BuildError;

use super::Tag;
use super::TagKind;

/// A complete request document.
///
/// Always `<REQUEST>` holding a `<LOGIN/>` with the authentication key
/// followed by one query subtree.
///
/// # Example
///
/// ```
/// use trafikverket_lib::query::{opt, Request, Tag};
/// use trafikverket_lib::Settings;
///
/// let request = Request::new(
///     "KEY",
///     Tag::query()
///         .opt(opt::OBJECT_TYPE, "TrainStation")
///         .opt(opt::SCHEMA_VERSION, "1.4")
///         .child(Tag::include("AdvertisedLocationName")),
/// );
///
/// let xml = request.to_xml(&Settings::default()).unwrap();
/// assert!(xml.starts_with("<REQUEST>\n  <LOGIN authenticationkey=\"KEY\"/>\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    root: Tag,
}

impl Request {
    /// Wraps a query in a request authenticated with `auth_key`.
    pub fn new(auth_key: impl Into<String>, query: impl Into<Tag>) -> Self {
        let root = Tag::builder(TagKind::Request)
            .child(Tag::login(auth_key))
            .child(query)
            .build();
        Self { root }
    }

    /// Returns the `<REQUEST>` tag.
    pub fn root(&self) -> &Tag {
        &self.root
    }

    /// Returns the query subtree.
    pub fn query(&self) -> &Tag {
        &self.root.children()[1]
    }

    /// Serializes the whole document.
    pub fn to_xml(&self, settings: &Settings) -> Result<String, BuildError> {
        self.root.to_xml(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::opt;

    #[test]
    fn test_shape() {
        let request = Request::new("K", Tag::query());
        let root = request.root();
        assert_eq!(root.kind(), TagKind::Request);
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].kind(), TagKind::Login);
        assert_eq!(
            root.children()[0].opts().get(opt::AUTHENTICATION_KEY),
            Some("K")
        );
        assert_eq!(request.query().kind(), TagKind::Query);
    }

    #[test]
    fn test_train_announcement_document() {
        let request = Request::new(
            "KEY",
            Tag::query()
                .opts([
                    (opt::OBJECT_TYPE, "TrainAnnouncement"),
                    (opt::SCHEMA_VERSION, "1.6"),
                    (opt::ORDER_BY, "AdvertisedTimeAtLocation"),
                ])
                .child(
                    Tag::filter().child(
                        Tag::eq()
                            .opt(opt::NAME, "ActivityType")
                            .opt(opt::VALUE, "Avgang"),
                    ),
                )
                .child(Tag::include("AdvertisedTrainIdent")),
        );

        let expected = "\
<REQUEST>
  <LOGIN authenticationkey=\"KEY\"/>
  <QUERY objecttype=\"TrainAnnouncement\" orderby=\"AdvertisedTimeAtLocation\" schemaversion=\"1.6\">
    <FILTER>
      <EQ name=\"ActivityType\" value=\"Avgang\"/>
    </FILTER>
    <INCLUDE>AdvertisedTrainIdent</INCLUDE>
  </QUERY>
</REQUEST>
";
        assert_eq!(request.to_xml(&Settings::default()).unwrap(), expected);
    }

    #[test]
    fn test_nested_or_of_time_windows() {
        let relative = |tag: crate::query::TagBuilder, field: &str, offset: &str| {
            tag.opt(opt::NAME, field)
                .opt(opt::VALUE, format!("$dateadd({offset})"))
        };
        let request = Request::new(
            "KEY",
            Tag::query()
                .opt(opt::OBJECT_TYPE, "TrainAnnouncement")
                .child(Tag::filter().child(Tag::or().add([
                    Tag::and().add([
                        relative(Tag::gt(), "AdvertisedTimeAtLocation", "-00:15:00"),
                        relative(Tag::lt(), "AdvertisedTimeAtLocation", "14:00:00"),
                    ]),
                    Tag::and().add([
                        relative(Tag::lt(), "AdvertisedTimeAtLocation", "00:30:00"),
                        relative(Tag::gt(), "EstimatedTimeAtLocation", "-00:15:00"),
                    ]),
                ]))),
        );

        let expected = "\
<REQUEST>
  <LOGIN authenticationkey=\"KEY\"/>
  <QUERY objecttype=\"TrainAnnouncement\">
    <FILTER>
      <OR>
        <AND>
          <GT name=\"AdvertisedTimeAtLocation\" value=\"$dateadd(-00:15:00)\"/>
          <LT name=\"AdvertisedTimeAtLocation\" value=\"$dateadd(14:00:00)\"/>
        </AND>
        <AND>
          <LT name=\"AdvertisedTimeAtLocation\" value=\"$dateadd(00:30:00)\"/>
          <GT name=\"EstimatedTimeAtLocation\" value=\"$dateadd(-00:15:00)\"/>
        </AND>
      </OR>
    </FILTER>
  </QUERY>
</REQUEST>
";
        assert_eq!(request.to_xml(&Settings::default()).unwrap(), expected);
    }

    #[test]
    fn test_bad_query_fails() {
        let request = Request::new("K", Tag::include("A").child(Tag::eq()));
        assert_eq!(
            request.to_xml(&Settings::default()),
            Err(BuildError::ChildrenNotAllowed {
                kind: TagKind::Include
            })
        );
    }
}
