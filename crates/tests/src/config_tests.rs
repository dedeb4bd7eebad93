use server::config::{parse_config, read_config};
use shared_types::{AppConfig, AppErrorKind};

#[test]
fn test_sample_config_parses() {
    let config = parse_config(include_str!("../../../config.toml")).unwrap();
    assert!(!config.customers.is_empty());
    let mut ids: Vec<&str> = config.customers.iter().map(|c| c.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), config.customers.len(), "customer ids must be unique");
}

#[test]
fn test_invalid_config_is_bad_request() {
    let err = parse_config("customers = 3").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(err.message.starts_with("Invalid config"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    assert_eq!(read_config("does/not/exist.toml"), AppConfig::default());
}

#[test]
fn test_file_on_disk_is_read() {
    let path = std::env::temp_dir().join(format!("invoice-config-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(
        &path,
        "[[customers]]\nid = \"a\"\nname = \"Amy Burns\"\n\n[[customers]]\nid = \"b\"\nname = \"Balazs Orban\"\n",
    )
    .unwrap();

    let config = read_config(path.to_str().unwrap());
    let _ = std::fs::remove_file(&path);

    let names: Vec<&str> = config.customers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Amy Burns", "Balazs Orban"]);
}
