use std::io::Write;

use super::*;

#[test]
fn empty_input_yields_defaults() {
	let config = EditorConfig::from_toml_str("").unwrap();
	assert_eq!(config, EditorConfig::default());
	assert_eq!(config.page_size, 3000);
	assert_eq!(config.min_chars_for_smart_analysis, 300);
	assert_eq!(config.default_tab, Tab::Analytics);
	assert!(config.split);
}

#[test]
fn overrides_are_applied() {
	let config = EditorConfig::from_toml_str(
		r#"
page-size = 1200
min-chars-for-smart-analysis = 50
history-limit = 10
default-tab = "semantic"
split = false
"#,
	)
	.unwrap();

	assert_eq!(config.page_size, 1200);
	assert_eq!(config.min_chars_for_smart_analysis, 50);
	assert_eq!(config.history_limit, 10);
	assert_eq!(config.default_tab, Tab::Semantic);
	assert!(!config.split);
}

#[test]
fn unknown_keys_are_rejected() {
	let err = EditorConfig::from_toml_str("page_size = 10").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn unknown_tab_is_rejected() {
	let err = EditorConfig::from_toml_str(r#"default-tab = "timeline""#).unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn zero_page_size_is_invalid() {
	let err = EditorConfig::from_toml_str("page-size = 0").unwrap_err();
	assert!(matches!(err, ConfigError::Invalid { field: "page-size", .. }));
}

#[test]
fn zero_history_limit_is_invalid() {
	let err = EditorConfig::from_toml_str("history-limit = 0").unwrap_err();
	assert!(matches!(err, ConfigError::Invalid { field: "history-limit", .. }));
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "page-size = 500").unwrap();

	let config = EditorConfig::load(file.path()).unwrap();
	assert_eq!(config.page_size, 500);
	assert_eq!(config.history_limit, 100);
}

#[test]
fn load_reports_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");

	let err = EditorConfig::load(&path).unwrap_err();
	match err {
		ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("expected Io error, got {other:?}"),
	}
}
