#![allow(dead_code)]

pub mod command;
pub mod objects;

const TMPDIR: &str = "../playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

/// The `kind_<first six hex digits>` prefix used for node labels
pub fn label(kind: &str, oid: &str) -> String {
    format!("{kind}_{}", &oid[..6])
}
