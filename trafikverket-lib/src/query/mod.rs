//! Query documents.
//!
//! A request is a tree of [`Tag`]s. Trees are written with [`TagBuilder`]s,
//! frozen into [`Tag`]s and serialized to the XML dialect the API accepts.
//!
//! - [`TagKind`] - The closed set of elements, their layout and verb lookup
//! - [`Opts`] / [`opt`] - Tag attributes and the known attribute names
//! - [`Request`] - The `<REQUEST>` root with its `<LOGIN/>`
//!
//! # Example
//!
//! ```
//! use trafikverket_lib::query::{opt, Request, Tag};
//! use trafikverket_lib::Settings;
//!
//! let request = Request::new(
//!     "KEY",
//!     Tag::query()
//!         .opt(opt::OBJECT_TYPE, "TrainAnnouncement")
//!         .opt(opt::SCHEMA_VERSION, "1.6")
//!         .child(Tag::filter().child(Tag::and().add([
//!             Tag::eq().opt(opt::NAME, "ActivityType").opt(opt::VALUE, "Avgang"),
//!             Tag::eq().opt(opt::NAME, "LocationSignature").opt(opt::VALUE, "Cst"),
//!         ])))
//!         .child(Tag::include("AdvertisedTrainIdent")),
//! );
//!
//! let xml = request.to_xml(&Settings::default())?;
//! # Ok::<(), trafikverket_lib::error::BuildError>(())
//! ```

mod kind;
pub mod opt;
mod request;
mod tag;
mod xml;

pub use kind::TagKind;
pub use opt::Opts;
pub use request::Request;
pub use tag::Tag;
pub use tag::TagBuilder;
pub use xml::escape_xml;
