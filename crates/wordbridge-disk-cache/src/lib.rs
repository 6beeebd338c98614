//! # wordbridge-disk-cache
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod disk_cache;
pub mod path_resolver;
pub mod path_utils;

pub use disk_cache::{WordbridgeDiskCache, WordbridgeDiskCacheOptions};

/// Environment variable key to override the default cache directory.
pub const WORDBRIDGE_CACHE_DIR: &str = "WORDBRIDGE_CACHE_DIR";
/// Environment variable key to override the default data directory.
pub const WORDBRIDGE_DATA_DIR: &str = "WORDBRIDGE_DATA_DIR";

/// Default [`PathResolver`] for wordbridge.
pub const WORDBRIDGE_PATH_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.wordbridge",
    organization: "",
    application: "wordbridge",
    cache_env_vars: &[WORDBRIDGE_CACHE_DIR],
    data_env_vars: &[WORDBRIDGE_DATA_DIR],
};
