//! Field types embedded in serde document structs.

mod common;

use gbfs_fields::prelude::*;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct SystemInformation {
    system_id: Id,
    language: Language,
    timezone: Timezone,
    url: Url,
    email: Email,
    phone_number: PhoneNumber,
    start_date: Date,
    rental_apps: Vec<Mobile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Station {
    station_id: Id,
    lat: Latitude,
    lon: Longitude,
    capacity: NonNegativeInt,
    rental_methods: Vec<RentalMethod>,
    rental_uri: Uri,
    last_reported: Timestamp,
}

#[derive(Debug, Serialize, Deserialize)]
struct RentalHours {
    user_types: Vec<UserType>,
    days: Vec<DayOfWeek>,
    start_time: Time,
    end_time: Time,
}

const SYSTEM: &str = r#"{
    "system_id": "bixi_mtl",
    "language": "fr-CA",
    "timezone": "America/Toronto",
    "url": "https://bixi.example/",
    "email": "info@bixi.example",
    "phone_number": "514-789-2494",
    "start_date": "2014-04-15",
    "rental_apps": ["android", "ios"]
}"#;

const STATION: &str = r#"{
    "station_id": 7001,
    "lat": 45.5017,
    "lon": -73.5673,
    "capacity": 27,
    "rental_methods": ["KEY", "CREDITCARD"],
    "rental_uri": "bixi://station?id=7001",
    "last_reported": 1700000000
}"#;

#[test]
fn system_information_round_trips() {
    common::init_tracing();
    let system: SystemInformation = serde_json::from_str(SYSTEM).unwrap();
    assert_eq!(system.system_id, "bixi_mtl");
    assert_eq!(system.timezone.name(), "America/Toronto");
    assert_eq!(system.start_date.to_string(), "2014-04-15");
    assert_eq!(system.rental_apps, [Mobile::Android, Mobile::Ios]);

    let json = serde_json::to_value(&system).unwrap();
    let expected: serde_json::Value = serde_json::from_str(SYSTEM).unwrap();
    assert_eq!(json, expected);
}

#[test]
fn station_round_trips_with_numeric_id() {
    let station: Station = serde_json::from_str(STATION).unwrap();
    assert_eq!(station.station_id, "7001");
    assert_eq!(station.lat.get(), 45.5017);
    assert_eq!(station.capacity.get(), 27);
    assert_eq!(station.rental_uri.scheme(), "bixi");

    let json = serde_json::to_value(&station).unwrap();
    let expected: serde_json::Value = serde_json::from_str(STATION).unwrap();
    assert_eq!(json, expected);
}

#[test]
fn rental_hours_decode() {
    let hours: RentalHours = serde_json::from_str(
        r#"{
            "user_types": ["member"],
            "days": ["sat", "sun"],
            "start_time": "00:00:00",
            "end_time": "23:59:59"
        }"#,
    )
    .unwrap();
    assert_eq!(hours.user_types, [UserType::Member]);
    assert_eq!(
        hours.days.iter().map(|d| d.ordinal()).collect::<Vec<_>>(),
        [6, 7]
    );
    assert_eq!(hours.end_time.seconds_from_midnight(), 86_399);
}

#[test]
fn invalid_field_fails_the_document() {
    let bad = STATION.replace("45.5017", "95.0");
    let err = serde_json::from_str::<Station>(&bad).unwrap_err();
    assert!(err.to_string().contains("Latitude value 95.0 is out of range"), "{err}");

    let bad = STATION.replace(r#""KEY""#, r#""key""#);
    let err = serde_json::from_str::<Station>(&bad).unwrap_err();
    assert!(err.to_string().contains("unknown RentalMethod member `key`"), "{err}");

    let bad = SYSTEM.replace("https://bixi.example/", "ftp://bixi.example/");
    let err = serde_json::from_str::<SystemInformation>(&bad).unwrap_err();
    assert!(err.to_string().contains("got 'ftp'"), "{err}");
}

#[test]
fn negative_capacity_is_rejected() {
    let bad = STATION.replace("27", "-3");
    let err = serde_json::from_str::<Station>(&bad).unwrap_err();
    assert!(
        err.to_string()
            .contains("NonNegativeInt value -3 is out of range: must be >= 0"),
        "{err}"
    );
}
