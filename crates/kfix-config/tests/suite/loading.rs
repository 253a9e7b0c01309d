use std::collections::BTreeSet;

use kfix_config::{init_tracing, ConfigError, KfixConfig, LoggingConfig, QuickFixConfig};
use pretty_assertions::assert_eq;

#[test]
fn empty_config_uses_defaults() {
    let config = KfixConfig::load_from_str("").expect("empty config parses");
    assert_eq!(config, KfixConfig::default());
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.stderr);
    assert_eq!(config.quick_fixes.max_signature_candidates, 5);
}

#[test]
fn full_config_round_trips_through_toml_fields() {
    let text = r#"
[logging]
level = "debug"
json = true
stderr = false

[quick_fixes]
enabled = true
max_signature_candidates = 2
disabled = ["remove-modifier", "add-modifier"]
"#;
    let config = KfixConfig::load_from_str(text).expect("config parses");

    assert_eq!(
        config,
        KfixConfig {
            logging: LoggingConfig {
                level: "debug".to_owned(),
                json: true,
                stderr: false,
            },
            quick_fixes: QuickFixConfig {
                enabled: true,
                max_signature_candidates: 2,
                disabled: BTreeSet::from(["remove-modifier".to_owned(), "add-modifier".to_owned()]),
            },
        }
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let err = KfixConfig::load_from_str("[quick_fixes]\nmax_candidates = 3\n").unwrap_err();
    match err {
        ConfigError::Toml(message) => assert!(message.contains("unknown field"), "{message}"),
        other => panic!("expected a toml error, got {other:?}"),
    }
}

#[test]
fn zero_signature_candidates_is_invalid() {
    let err = KfixConfig::load_from_str("[quick_fixes]\nmax_signature_candidates = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "{err:?}");
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.toml");
    let err = KfixConfig::load_from_path(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path.display().to_string()),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn tracing_is_installed_at_most_once() {
    let config = LoggingConfig {
        stderr: false,
        ..LoggingConfig::default()
    };
    // Another test binary thread may have won the race; a second call never installs.
    let _ = init_tracing(&config);
    assert!(!init_tracing(&config));
    tracing::info!("logging after init does not panic");
}
