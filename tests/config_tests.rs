// Tests for configuration loading

use std::fs;

use voxdesk::display::DEFAULT_PLACEHOLDER;
use voxdesk::Config;

#[test]
fn test_defaults_when_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing");

    let cfg = Config::load(path.to_str().unwrap()).unwrap();

    assert!(cfg.synthesis.enabled);
    assert_eq!(cfg.synthesis.rate, 0);
    assert_eq!(cfg.synthesis.volume, 100);
    assert_eq!(cfg.synthesis.started_phrase, "Listening started");
    assert_eq!(cfg.synthesis.stopped_phrase, "Listening stopped");
    assert_eq!(cfg.display.placeholder, DEFAULT_PLACEHOLDER);
    assert_eq!(cfg.recognizer.event_delay_ms, 400);
    assert!(cfg.recognizer.script_path.is_none());
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn test_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("voxdesk.toml");
    fs::write(
        &path,
        r#"
[synthesis]
rate = -3
volume = 80
started_phrase = "Dinleme başladı"

[recognizer]
script_path = "scripts/meeting.json"
event_delay_ms = 100
"#,
    )
    .unwrap();

    let cfg = Config::load(path.to_str().unwrap()).unwrap();

    assert_eq!(cfg.synthesis.rate, -3);
    assert_eq!(cfg.synthesis.volume, 80);
    assert_eq!(cfg.synthesis.started_phrase, "Dinleme başladı");
    assert_eq!(cfg.synthesis.stopped_phrase, "Listening stopped");
    assert_eq!(cfg.recognizer.script_path.as_deref(), Some("scripts/meeting.json"));
    assert_eq!(cfg.recognizer.event_delay_ms, 100);

    let session = cfg.session_config();
    assert_eq!(session.started_phrase, "Dinleme başladı");

    let settings = cfg.synthesis_settings();
    assert_eq!(settings.rate, -3);
    assert_eq!(settings.volume, 80);
}

#[test]
fn test_rejects_rate_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("voxdesk.toml");
    fs::write(&path, "[synthesis]\nrate = 10\n").unwrap();
    assert!(Config::load(path.to_str().unwrap()).is_ok());

    fs::write(&path, "[synthesis]\nrate = -11\n").unwrap();
    let err = Config::load(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("synthesis.rate"));
}

#[test]
fn test_rejects_volume_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("voxdesk.toml");
    fs::write(&path, "[synthesis]\nvolume = 101\n").unwrap();

    let err = Config::load(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("synthesis.volume"));
}
