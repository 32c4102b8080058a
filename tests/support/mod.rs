#![allow(dead_code)]

pub mod config_env;

use std::path::{Path, PathBuf};

/// Write a CSV file with `header` followed by `rows`, one line each.
pub fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut text = String::from(header);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    std::fs::write(&path, text).expect("write csv fixture");
    path
}
