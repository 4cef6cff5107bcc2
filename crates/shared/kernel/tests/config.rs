use config::FileFormat;
use fhub_domain::config::{NumberKind, NumericalInputConfig};
use fhub_domain::hints::{HintConfig, HintRules};
use fhub_kernel::config::{ConfigError, load_config, parse_config};
use std::io::Write;

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_input_config_from_toml_file() {
    let file = toml_file(
        r#"
label = "Age"
name = "age"
required = true
type = "integers"
"#,
    );

    let cfg: NumericalInputConfig = load_config(Some(file.path())).expect("load config");
    assert_eq!(cfg.base.label, "Age");
    assert_eq!(cfg.base.name, "age");
    assert!(cfg.base.required);
    assert_eq!(cfg.kind, NumberKind::Integers);
    assert!(cfg.min_val.is_none());
}

#[test]
fn loads_hint_tables_from_toml_file() {
    let file = toml_file(
        r#"
[toggle]
required = false

[translation]
between = "entre"
and = "et"
"#,
    );

    let cfg: HintConfig = load_config(Some(file.path())).expect("load config");
    assert!(!cfg.enabled(HintRules::REQUIRED));
    assert!(cfg.enabled(HintRules::MAX));
    assert_eq!(cfg.translation.between, "entre");
    assert_eq!(cfg.translation.and, "et");
    assert_eq!(cfg.translation.less_than, "less than");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_config::<NumericalInputConfig>(Some(dir.path().join("absent.toml")))
        .expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn parses_embedded_json_documents() {
    let raw = r#"{ "toggle": { "increment": false }, "translation": { "between": "zwischen" } }"#;
    let cfg: HintConfig = parse_config(raw, FileFormat::Json).expect("parse config");
    assert!(!cfg.enabled(HintRules::INCREMENT));
    assert_eq!(cfg.translation.between, "zwischen");
}
