//! Trafikverket API client library
//!
//! Builds requests for the Trafikverket open data API (`data.json`, XML
//! request dialect) and sends them with a blocking HTTP client. Responses are
//! returned as raw bytes.

pub mod county;
pub mod error;
pub mod query;

mod client;
mod response;
mod settings;

pub use client::*;
pub use response::Response;
pub use settings::Settings;
