use super::*;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = resolve_settings(None, no_env).expect("defaults resolve");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.api_base, "http://localhost:8000/api");
}

#[test]
fn file_values_override_defaults() {
    let raw = r#"
        api_base = "https://wills.example.com/api/"
        database_url = "sqlite:data/test.db"
    "#;
    let settings = resolve_settings(Some(raw), no_env).expect("file resolves");
    assert_eq!(settings.api_base, "https://wills.example.com/api");
    assert_eq!(settings.database_url, "sqlite://data/test.db");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let raw = r#"api_base = "http://file.example/api""#;
    let env = |key: &str| match key {
        "WILL_API_BASE" => Some("http://env.example/api".to_string()),
        "APP__API_BASE" => Some("http://app.example/api".to_string()),
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        _ => None,
    };
    let settings = resolve_settings(Some(raw), env).expect("env resolves");
    assert_eq!(settings.api_base, "http://app.example/api");
    assert_eq!(settings.database_url, "sqlite::memory:");
}

#[test]
fn rejects_unparseable_or_non_http_api_base() {
    let bad = |key: &str| (key == "WILL_API_BASE").then(|| "not a url".to_string());
    assert!(resolve_settings(None, bad).is_err());

    let ftp = |key: &str| (key == "WILL_API_BASE").then(|| "ftp://example.com".to_string());
    assert!(resolve_settings(None, ftp).is_err());
}

#[test]
fn rejects_non_string_config_values() {
    assert!(resolve_settings(Some("api_base = 5"), no_env).is_err());
}

#[test]
fn normalizes_database_urls() {
    assert_eq!(
        normalize_database_url("  "),
        Settings::default().database_url
    );
    assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
    assert_eq!(
        normalize_database_url("sqlite://./data/a.db"),
        "sqlite://./data/a.db"
    );
    assert_eq!(normalize_database_url("sqlite:data\\a.db"), "sqlite://data/a.db");
    assert_eq!(normalize_database_url("data/a.db"), "sqlite://data/a.db");
}
