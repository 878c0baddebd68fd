//! Departures from Stockholm Central in the next few hours.
//!
//! Run with: cargo run --example train_announcement
//!
//! Requires TRAFIKVERKET_API_KEY in the environment or a .env file.

use std::env;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use trafikverket_lib::query::{opt, Opts, Tag, TagBuilder};
use trafikverket_lib::{Settings, TrafikverketClient};

/// A time predicate relative to now, e.g. `$dateadd(-00:15:00)`.
fn relative(tag: TagBuilder, field: &str, offset: &str) -> Tag {
    tag.opt(opt::NAME, field)
        .opt(opt::VALUE, format!("$dateadd({offset})"))
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let api_key = env::var("TRAFIKVERKET_API_KEY").expect("TRAFIKVERKET_API_KEY not set");

    let client = TrafikverketClient::builder()
        .api_key(api_key)
        .settings(Settings::default().with_debug(true))
        .build()?;

    let query = Tag::query()
        .opts(Opts::from([
            (opt::OBJECT_TYPE, "TrainAnnouncement"),
            (opt::SCHEMA_VERSION, "1.6"),
            (opt::ORDER_BY, "AdvertisedTimeAtLocation"),
        ]))
        .child(
            Tag::filter().child(
                Tag::and().add([
                    Tag::eq()
                        .opt(opt::NAME, "ActivityType")
                        .opt(opt::VALUE, "Avgang")
                        .build(),
                    Tag::eq()
                        .opt(opt::NAME, "LocationSignature")
                        .opt(opt::VALUE, "Cst")
                        .build(),
                    Tag::or()
                        .add([
                            Tag::and().add([
                                relative(Tag::gt(), "AdvertisedTimeAtLocation", "-00:15:00"),
                                relative(Tag::lt(), "AdvertisedTimeAtLocation", "14:00:00"),
                            ]),
                            Tag::and().add([
                                relative(Tag::lt(), "AdvertisedTimeAtLocation", "00:30:00"),
                                relative(Tag::gt(), "EstimatedTimeAtLocation", "-00:15:00"),
                            ]),
                        ])
                        .build(),
                ]),
            ),
        )
        .add(
            ["AdvertisedTrainIdent", "AdvertisedTimeAtLocation", "TrackAtLocation", "ToLocation"]
                .map(Tag::include),
        );

    let response = client.execute(query)?;
    let json: serde_json::Value = serde_json::from_slice(response.body())?;

    let announcements = json["RESPONSE"]["RESULT"][0]["TrainAnnouncement"]
        .as_array()
        .cloned()
        .unwrap_or_default();

    println!("{} departures", announcements.len());
    for announcement in announcements {
        println!(
            "{}  train {}  track {}",
            announcement["AdvertisedTimeAtLocation"].as_str().unwrap_or("?"),
            announcement["AdvertisedTrainIdent"].as_str().unwrap_or("?"),
            announcement["TrackAtLocation"].as_str().unwrap_or("-"),
        );
    }

    Ok(())
}
