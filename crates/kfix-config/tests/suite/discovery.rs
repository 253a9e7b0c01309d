use kfix_config::{discover_config_path, load_for_workspace, KfixConfig};

#[test]
fn no_config_file_means_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert_eq!(discover_config_path(dir.path()), None);
    assert_eq!(
        load_for_workspace(dir.path()).expect("defaults"),
        KfixConfig::default()
    );
}

#[test]
fn visible_config_file_takes_priority_over_hidden_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(".kfix.toml"), "[logging]\nlevel = \"warn\"\n").unwrap();
    assert_eq!(
        discover_config_path(dir.path()),
        Some(dir.path().join(".kfix.toml"))
    );

    std::fs::write(dir.path().join("kfix.toml"), "[logging]\nlevel = \"trace\"\n").unwrap();
    assert_eq!(
        discover_config_path(dir.path()),
        Some(dir.path().join("kfix.toml"))
    );
    assert_eq!(
        load_for_workspace(dir.path()).expect("config loads").logging.level,
        "trace"
    );
}
