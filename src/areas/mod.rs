//! Core repository components
//!
//! - `config`: TOML configuration record
//! - `database`: Loose object store reader
//! - `refs`: Branch reference reader
//! - `repository`: Locates the git directory and ties the areas together

pub mod config;
pub mod database;
pub mod refs;
pub mod repository;
