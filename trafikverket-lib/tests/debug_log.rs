//! Debug output of serialized requests.
//!
//! A logger can only be installed once per process, so this file holds a
//! single test that owns it.

mod common;

use std::sync::Mutex;
use std::sync::PoisonError;

use hyper::StatusCode;
use log::Level;
use log::LevelFilter;
use log::Log;
use log::Metadata;
use log::Record;

use trafikverket_lib::Settings;
use trafikverket_lib::query::Tag;
use trafikverket_lib::query::opt;

use common::MockEndpoint;

/// Keeps every record logged by the library.
struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl CapturingLogger {
    fn take(&self) -> Vec<(Level, String)> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *records)
    }
}

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if !record.target().starts_with("trafikverket_lib") {
            return;
        }
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

fn logged_requests(records: &[(Level, String)]) -> Vec<&str> {
    records
        .iter()
        .filter(|(level, message)| *level == Level::Info && message.contains("<REQUEST>"))
        .map(|(_, message)| message.as_str())
        .collect()
}

#[test]
fn test_debug_flag_logs_serialized_request() {
    log::set_logger(&LOGGER).expect("Logger already installed");
    log::set_max_level(LevelFilter::Trace);

    let endpoint = MockEndpoint::start(StatusCode::OK, "{}");
    let query = Tag::query()
        .opt(opt::OBJECT_TYPE, "TrainStation")
        .child(Tag::include("AdvertisedLocationName"))
        .build();

    // Debug on: the request shows up at info level, exactly as sent
    let client = endpoint.client(Settings::default().with_debug(true));
    client.execute(query.clone()).expect("Request failed");

    let records = LOGGER.take();
    let requests = logged_requests(&records);
    assert_eq!(requests.len(), 1, "records: {:?}", records);
    assert!(requests[0].contains("  <LOGIN authenticationkey=\"KEY\"/>\n"));
    assert!(requests[0].contains("<INCLUDE>AdvertisedLocationName</INCLUDE>"));

    // Debug off: nothing at info level
    let client = endpoint.client(Settings::default());
    client.execute(query).expect("Request failed");

    let records = LOGGER.take();
    assert!(logged_requests(&records).is_empty(), "records: {:?}", records);
    assert!(
        records.iter().all(|(level, _)| *level != Level::Info),
        "records: {:?}",
        records
    );
}
