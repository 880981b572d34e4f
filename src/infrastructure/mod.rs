//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where configuration is read from and where traces are written.

pub mod paths;

pub use paths::{expand_tilde, get_config_dir, get_config_file, get_data_dir};
