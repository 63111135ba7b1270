use std::io::Write;
use std::process::{Command, Stdio};

use approx::assert_relative_eq;
use serde_json::{Value, json};
use tempfile::NamedTempFile;
use transit_router::document::{self, DocumentError};

const THREE_STOP_LINE: &str = r#"{
    "routing_settings": { "bus_wait_time": 2, "bus_velocity": 60 },
    "base_requests": [
        { "type": "Stop", "name": "A", "latitude": 0, "longitude": 0,
          "road_distances": { "B": 1000 } },
        { "type": "Stop", "name": "B", "latitude": 0.01, "longitude": 0,
          "road_distances": { "C": 1100 } },
        { "type": "Stop", "name": "C", "latitude": 0.02, "longitude": 0 },
        { "type": "Stop", "name": "D", "latitude": 1, "longitude": 1 },
        { "type": "Bus", "name": "1", "stops": ["A", "B", "C"], "is_roundtrip": false }
    ],
    "stat_requests": [
        { "id": 1, "type": "Bus", "name": "1" },
        { "id": 2, "type": "Stop", "name": "B" },
        { "id": 3, "type": "Route", "from": "A", "to": "C" },
        { "id": 4, "type": "Route", "from": "A", "to": "D" },
        { "id": 5, "type": "Stop", "name": "Z" },
        { "id": 6, "type": "Route", "from": "C", "to": "C" }
    ]
}"#;

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn answer(contents: &str) -> Value {
    let file = input_file(contents);
    let doc = document::read_path(file.path()).unwrap();
    let responses = document::answer_document(&doc).unwrap();
    serde_json::to_value(responses).unwrap()
}

#[test]
fn three_stop_line_bus() {
    let output = answer(THREE_STOP_LINE);
    let bus = &output[0];

    assert_eq!(bus["request_id"], json!(1));
    assert_eq!(bus["stop_count"], json!(5));
    assert_eq!(bus["unique_stop_count"], json!(3));
    assert_eq!(bus["route_length"], json!(4200));
    // 0.02 degrees of latitude, there and back
    let geo = 2.0 * 6_371_000.0 * 0.02_f64.to_radians();
    assert_relative_eq!(
        bus["curvature"].as_f64().unwrap(),
        4200.0 / geo,
        max_relative = 1e-6
    );
}

#[test]
fn three_stop_line_route() {
    let output = answer(THREE_STOP_LINE);
    let route = &output[2];

    assert_eq!(route["request_id"], json!(3));
    assert_relative_eq!(route["total_time"].as_f64().unwrap(), 4.1, epsilon = 1e-9);

    let items = route["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], json!({ "type": "Wait", "stop_name": "A", "time": 2.0 }));
    assert_eq!(items[1]["type"], json!("Bus"));
    assert_eq!(items[1]["bus"], json!("1"));
    assert_eq!(items[1]["span_count"], json!(2));
    assert_relative_eq!(items[1]["time"].as_f64().unwrap(), 2.1, epsilon = 1e-9);
}

#[test]
fn stop_and_not_found_answers() {
    let output = answer(THREE_STOP_LINE);

    assert_eq!(output[1], json!({ "request_id": 2, "buses": ["1"] }));
    assert_eq!(
        output[3],
        json!({ "request_id": 4, "error_message": "not found" })
    );
    assert_eq!(
        output[4],
        json!({ "request_id": 5, "error_message": "not found" })
    );
    assert_eq!(
        output[5],
        json!({ "request_id": 6, "total_time": 0.0, "items": [] })
    );
}

#[test]
fn output_is_byte_identical_across_runs() {
    let run = || {
        let mut out = Vec::new();
        document::process(THREE_STOP_LINE.as_bytes(), &mut out).unwrap();
        out
    };
    assert_eq!(run(), run());
}

#[test]
fn transfer_between_round_and_line() {
    let input = r#"{
        "routing_settings": { "bus_wait_time": 3, "bus_velocity": 60 },
        "base_requests": [
            { "type": "Stop", "name": "Depot", "latitude": 0, "longitude": 0,
              "road_distances": { "Market": 500 } },
            { "type": "Stop", "name": "Market", "latitude": 0, "longitude": 0.005,
              "road_distances": { "Park": 700, "Depot": 600 } },
            { "type": "Stop", "name": "Park", "latitude": 0.005, "longitude": 0.005,
              "road_distances": { "Depot": 900, "Station": 2000 } },
            { "type": "Stop", "name": "Station", "latitude": 0.02, "longitude": 0.005 },
            { "type": "Bus", "name": "loop", "stops": ["Depot", "Market", "Park", "Depot"],
              "is_roundtrip": true },
            { "type": "Bus", "name": "shuttle", "stops": ["Park", "Station"],
              "is_roundtrip": false }
        ],
        "stat_requests": [
            { "id": 1, "type": "Route", "from": "Depot", "to": "Station" },
            { "id": 2, "type": "Stop", "name": "Park" },
            { "id": 3, "type": "Bus", "name": "loop" }
        ]
    }"#;
    let output = answer(input);

    // 3 wait + 1.2 ride + 3 wait + 2 ride
    let route = &output[0];
    assert_relative_eq!(route["total_time"].as_f64().unwrap(), 9.2, epsilon = 1e-9);
    let kinds: Vec<_> = route["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, ["Wait", "Bus", "Wait", "Bus"]);
    assert_eq!(route["items"][2]["stop_name"], json!("Park"));

    assert_eq!(output[1]["buses"], json!(["loop", "shuttle"]));

    // Depot -> Market -> Park -> Depot, ignoring the Market -> Depot distance
    let bus = &output[2];
    assert_eq!(bus["stop_count"], json!(4));
    assert_eq!(bus["unique_stop_count"], json!(3));
    assert_eq!(bus["route_length"], json!(2100));
    assert!(bus["curvature"].as_f64().unwrap() > 1.0);
}

#[test]
fn malformed_document_is_rejected() {
    let file = input_file(r#"{ "routing_settings": { "bus_wait_time": 2 } }"#);
    let err = document::read_path(file.path()).unwrap_err();
    assert!(matches!(err, DocumentError::Json(_)));
}

#[test]
fn cli_reads_file_and_writes_json() {
    let file = input_file(THREE_STOP_LINE);
    let output = Command::new(env!("CARGO_BIN_EXE_transit-router"))
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 6);
}

#[test]
fn cli_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_transit-router"))
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(THREE_STOP_LINE.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["route_length"], json!(4200));
}

#[test]
fn cli_fails_on_integrity_error() {
    let file = input_file(
        r#"{
            "routing_settings": { "bus_wait_time": 2, "bus_velocity": 60 },
            "base_requests": [
                { "type": "Bus", "name": "1", "stops": ["Ghost"], "is_roundtrip": false }
            ]
        }"#,
    );
    let output = Command::new(env!("CARGO_BIN_EXE_transit-router"))
        .arg(file.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
