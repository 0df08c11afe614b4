use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const VALID_JSON: &str = r#"{
    "theme": "aurora",
    "text_domain": "aurora",
    "config_version": "1.0",
    "feature_flags": { "dark_mode": true },
    "paths": { "assets": "dist/assets" }
}"#;

pub const LEGACY_TOLERANT_JSON: &str = r#"{
    "theme": "aurora",
    "text_domain": "aurora",
    "config_version": "0.9",
    "validation_mode": "tolerant",
    "legacy_sidebar": true
}"#;

pub fn export() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tkernel-export"));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn write_config(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}
