use indeed_jobs_client::{Config, Error};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_without_file_uses_defaults() {
    let config = Config::load(None).unwrap();
    assert!(config.indeed.base_url.starts_with("http"));
    assert_eq!(config.indeed.timeout_secs, 30);
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[indeed]
publisher_id = "1234567890"
highlight = true
timeout_secs = 10

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.indeed.publisher_id.as_deref(), Some("1234567890"));
    assert_eq!(config.indeed.highlight, Some(true));
    assert_eq!(config.indeed.timeout_secs, 10);
    // untouched keys keep their defaults
    assert_eq!(config.indeed.version.as_deref(), Some("2"));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_invalid_file_values_are_rejected() {
    let file = write_config(
        r#"
[indeed]
timeout_secs = 0
"#,
    );

    assert!(matches!(
        Config::load(Some(file.path())),
        Err(Error::InvalidInput { .. })
    ));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    assert!(matches!(Config::load(Some(missing.as_path())), Err(Error::Config(_))));
}
