use apex::config::{load_answers_file, load_answers_from, parse_answers, Answers, Architecture, Database};
use apex::error::Error;
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_empty_answers() {
    assert_eq!(parse_answers("").unwrap(), Answers::default());
    assert_eq!(parse_answers("  \n").unwrap(), Answers::default());
}

#[test]
fn test_json_answers() {
    let answers = parse_answers(
        r#"{"name": "shop", "architecture": "modular", "database": "mysql", "use_gorm": false}"#,
    )
    .unwrap();

    assert_eq!(answers.name.as_deref(), Some("shop"));
    assert_eq!(answers.architecture, Some(Architecture::Modular));
    assert_eq!(answers.database, Some(Database::Mysql));
    assert_eq!(answers.use_gorm, Some(false));
    assert_eq!(answers.docker, None);
}

#[test]
fn test_yaml_answers() {
    let answers = parse_answers("name: shop\nmodule: github.com/acme/shop\ndocker: true\n").unwrap();

    assert_eq!(answers.module.as_deref(), Some("github.com/acme/shop"));
    assert_eq!(answers.docker, Some(true));
}

#[test]
fn test_unknown_choice_is_rejected() {
    let result = parse_answers(r#"{"architecture": "hexagonal"}"#);
    assert!(matches!(result, Err(Error::YamlParseError(_))));
}

#[test]
fn test_unknown_field_is_rejected() {
    assert!(parse_answers("colour: blue\n").is_err());
}

#[test]
fn test_answers_from_reader() {
    let answers = load_answers_from(Cursor::new(r#"{"database": "none"}"#)).unwrap();
    assert_eq!(answers.database, Some(Database::None));
}

#[test]
fn test_answers_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.yaml");
    std::fs::write(&path, "name: shop\narchitecture: clean\n").unwrap();

    let answers = load_answers_file(&path).unwrap();
    assert_eq!(answers.architecture, Some(Architecture::Clean));

    let missing = load_answers_file(temp_dir.path().join("missing.json"));
    assert!(matches!(missing, Err(Error::ConfigError(_))));
}
