use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const KERNEL: &str = "0.1.0";

/// A migratable `0.9` config in tolerant mode carrying one unknown root key.
pub fn legacy_tolerant() -> Value {
    json!({
        "theme": "aurora",
        "text_domain": "aurora",
        "config_version": "0.9",
        "validation_mode": "tolerant",
        "legacy_sidebar": true
    })
}

pub fn current_strict() -> Value {
    json!({
        "theme": "aurora",
        "text_domain": "aurora",
        "config_version": "1.0",
        "feature_flags": { "dark_mode": true, "columns": 3, "hero": "video" },
        "paths": { "assets": "dist/assets", "templates": "templates" },
        "options": { "layout": { "sidebar": "left" } }
    })
}

/// Writes `contents` to `name` inside a fresh temporary directory.
pub fn write_config(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}
