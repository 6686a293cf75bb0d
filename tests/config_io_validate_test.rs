use hestia::config::Config;
use std::fs;

#[test]
fn save_and_load_yaml_roundtrip() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("config.yaml");

    let mut cfg = Config::default();
    cfg.outages.group = "3.2".to_string();
    cfg.printer.base_url = "http://printer.local:7125".to_string();
    cfg.logging.file = path.with_extension("log").to_string_lossy().to_string();

    cfg.save_to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.outages.group, "3.2");
    assert_eq!(loaded.printer.base_url, "http://printer.local:7125");
    assert_eq!(loaded.logging.file, cfg.logging.file);
}

#[test]
fn partial_yaml_fills_in_defaults() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(
        tmp.path(),
        b"outages:\n  group: \"2.1\"\npause:\n  wait_before_minutes: 3\n",
    )
    .unwrap();

    let cfg = Config::from_file(tmp.path()).unwrap();
    assert_eq!(cfg.outages.group, "2.1");
    assert_eq!(cfg.pause.wait_before_minutes, 3.0);
    // Untouched sections keep their defaults
    assert_eq!(cfg.pause.wait_after_minutes, 10.0);
    assert_eq!(cfg.printer.base_url, "http://127.0.0.1:7125");
    assert_eq!(cfg.poll_interval_secs, 60);
}

#[test]
fn config_validation_errors() {
    let mut cfg = Config::default();

    // Empty group
    cfg.outages.group.clear();
    assert!(cfg.validate().is_err());

    // Empty printer URL
    cfg = Config::default();
    cfg.printer.base_url.clear();
    assert!(cfg.validate().is_err());

    // Negative wait_before
    cfg = Config::default();
    cfg.pause.wait_before_minutes = -1.0;
    assert!(cfg.validate().is_err());

    // Park temperature above the extruder setpoint
    cfg = Config::default();
    cfg.heaters.park_temp = 250.0;
    assert!(cfg.validate().is_err());

    // Poll interval zero or above the imminent-pause threshold
    cfg = Config::default();
    cfg.poll_interval_secs = 0;
    assert!(cfg.validate().is_err());
    cfg.poll_interval_secs = 61;
    assert!(cfg.validate().is_err());
}

#[test]
fn from_file_with_invalid_yaml_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    fs::write(tmp.path(), b"bad: [unclosed").unwrap();
    let err = Config::from_file(tmp.path()).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("Serialization error"));
}
