use assert_cmd::Command;

fn cli() -> Command {
    Command::cargo_bin("mapwright-cli").expect("binary builds")
}

const FIXTURE: &str = r#"{
    "Id": "map1",
    "Zoom": 12,
    "EnableMarkersClustering": true,
    "Markers": [
        {"Position": {"Latitude": 23.1136, "Longitude": -82.3666}, "Title": "Havana",
         "Window": {"Content": "<b>Havana</b>"}}
    ]
}"#;

#[test]
fn html_command_reads_stdin() {
    let assert = cli().arg("html").write_stdin(FIXTURE).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains(r#"<div id="map1""#));
    assert!(stdout.contains(r#"id="map1Marker0""#));
    assert!(stdout.contains("<b>Havana</b>"));
}

#[test]
fn script_command_emits_initialization_call() {
    let assert = cli().arg("script").write_stdin(FIXTURE).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("jQuery('#map1').googleMap({"));
    assert!(stdout.contains("Zoom: 12"));
    assert!(stdout.contains("Latitude: 23.1136"));
    assert!(stdout.contains("MarkerClusteringOptions"));
}

#[test]
fn scripts_command_lists_dependencies() {
    let assert = cli().arg("scripts").write_stdin(FIXTURE).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "mapwright.googlemap.js");
    assert!(lines[1].starts_with("https://maps.googleapis.com/maps/api/js"));
    assert_eq!(lines[2], "markerclusterer.js");
}

#[test]
fn page_command_reads_file_and_writes_out() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("map.json");
    let output = dir.path().join("map.html");
    std::fs::write(&input, FIXTURE).unwrap();

    cli()
        .args(["page", input.to_str().unwrap(), "--out", output.to_str().unwrap()])
        .assert()
        .success();

    let page = std::fs::read_to_string(&output).unwrap();
    assert!(page.contains(r#"<div id="map1""#));
    assert!(page.contains(r#"<script src="mapwright.googlemap.js"></script>"#));
    assert!(page.contains("<script>jQuery('#map1').googleMap({"));
}

#[test]
fn invalid_definition_fails_with_message() {
    let assert = cli()
        .arg("script")
        .write_stdin(r#"{"Id": "1bad"}"#)
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("invalid map id"));
}

#[test]
fn no_command_prints_usage() {
    cli().assert().failure();
}
