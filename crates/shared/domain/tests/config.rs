use potter_domain::config::{ApiConfig, CatalogConfig, LogConfig, ServerConfig, StorageConfig};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 3000);
    assert!(server.address.is_unspecified());
    assert!(server.ssl.is_none());

    assert_eq!(StorageConfig::default().static_dir, PathBuf::from("public"));

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.dir.is_none());
    assert!(!log.json);

    assert_eq!(CatalogConfig::default().default_page_size, 10);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "storage": { "static_dir": "/srv/potter/public" },
        "log": { "level": "debug", "dir": "/var/log/potter", "json": true },
        "catalog": { "default_page_size": 25 }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.storage.static_dir, PathBuf::from("/srv/potter/public"));
    assert_eq!(cfg.log.level, "debug");
    assert_eq!(cfg.log.dir, Some(PathBuf::from("/var/log/potter")));
    assert!(cfg.log.json);
    assert_eq!(cfg.log.max_files, 10, "missing keys fall back to defaults");
    assert_eq!(cfg.catalog.default_page_size, 25);
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.catalog.default_page_size, 10);
}

#[test]
fn deref_mut_copies_on_write() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 4000;

    assert_eq!(original.server.port, 3000);
    assert_eq!(changed.server.port, 4000);
}
