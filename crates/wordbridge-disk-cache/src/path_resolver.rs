//! # App Path Resolver
//!
//! Static library defaults for cache/data directory resolution.

use std::env;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;

/// Static configuration for application path resolution.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// The resolution order for cache directory environment variables.
    pub cache_env_vars: &'static [&'static str],

    /// The resolution order for data directory environment variables.
    pub data_env_vars: &'static [&'static str],
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.qualifier, self.organization, self.application)
    }

    /// Resolve the cache directory for this config.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.cache_env_vars`; in order.
    /// 3. `self.project_dirs().cache_dir()`, if present.
    /// 4. `None`
    ///
    /// On Linux, the project cache dir is
    /// `$XDG_CACHE_HOME/_project_path_` or `$HOME/.cache/_project_path_`.
    pub fn resolve_cache_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        self.resolve(path, self.cache_env_vars, |pds| pds.cache_dir())
    }

    /// Resolve the data directory for this config.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.data_env_vars`; in order.
    /// 3. `self.project_dirs().data_dir()`, if present.
    /// 4. `None`
    ///
    /// On Linux, the project data dir is
    /// `$XDG_DATA_HOME/_project_path_` or `$HOME/.local/share/_project_path_`.
    pub fn resolve_data_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        self.resolve(path, self.data_env_vars, |pds| pds.data_dir())
    }

    fn resolve<P: AsRef<Path>>(
        &self,
        path: Option<P>,
        env_vars: &[&str],
        project_dir: fn(&ProjectDirs) -> &Path,
    ) -> Option<PathBuf> {
        if let Some(path) = path.as_ref() {
            return Some(path.as_ref().to_path_buf());
        }

        for env_var in env_vars {
            if let Ok(path) = env::var(env_var) {
                return Some(PathBuf::from(path));
            }
        }

        if let Some(pds) = self.project_dirs() {
            return Some(project_dir(&pds).to_path_buf());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const CACHE_ENV1: &str = "_WB_PATH_CACHE_ENV1";
    const CACHE_ENV2: &str = "_WB_PATH_CACHE_ENV2";
    const DATA_ENV1: &str = "_WB_PATH_DATA_ENV1";
    const DATA_ENV2: &str = "_WB_PATH_DATA_ENV2";

    const TEST_CONFIG: PathResolver = PathResolver {
        qualifier: "io.crates.example",
        organization: "",
        application: "example",
        cache_env_vars: &[CACHE_ENV1, CACHE_ENV2],
        data_env_vars: &[DATA_ENV1, DATA_ENV2],
    };

    #[test]
    #[serial]
    fn test_resolve_dirs() {
        let pds = TEST_CONFIG
            .project_dirs()
            .expect("failed to get project dirs");

        let no_path: Option<PathBuf> = None;

        let user_cache_dir = PathBuf::from("/tmp/wb_paths/cache");
        let user_data_dir = PathBuf::from("/tmp/wb_paths/data");

        let env_cache_dir1 = PathBuf::from("/tmp/wb_paths/env_cache.1");
        let env_cache_dir2 = PathBuf::from("/tmp/wb_paths/env_cache.2");
        let env_data_dir1 = PathBuf::from("/tmp/wb_paths/env_data.1");
        let env_data_dir2 = PathBuf::from("/tmp/wb_paths/env_data.2");

        // No env vars
        unsafe {
            for v in TEST_CONFIG.cache_env_vars {
                env::remove_var(v);
            }
            for v in TEST_CONFIG.data_env_vars {
                env::remove_var(v);
            }
        }

        // User overrides.
        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(Some(user_cache_dir.clone())),
            Some(user_cache_dir.clone()),
        );
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(Some(user_data_dir.clone())),
            Some(user_data_dir.clone()),
        );

        // Resolution; use project dirs.
        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(no_path.clone()),
            Some(pds.cache_dir().to_path_buf())
        );
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(no_path.clone()),
            Some(pds.data_dir().to_path_buf())
        );

        // Lowest priority env vars.
        unsafe {
            env::set_var(CACHE_ENV2, env_cache_dir2.to_str().unwrap());
            env::set_var(DATA_ENV2, env_data_dir2.to_str().unwrap());
        }

        // User overrides still win.
        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(Some(user_cache_dir.clone())),
            Some(user_cache_dir.clone()),
        );

        // Resolution; use env vars.
        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(no_path.clone()),
            Some(env_cache_dir2.clone())
        );
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(no_path.clone()),
            Some(env_data_dir2.clone())
        );

        // Higher priority env vars.
        unsafe {
            env::set_var(CACHE_ENV1, env_cache_dir1.to_str().unwrap());
            env::set_var(DATA_ENV1, env_data_dir1.to_str().unwrap());
        }

        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(no_path.clone()),
            Some(env_cache_dir1.clone())
        );
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(no_path.clone()),
            Some(env_data_dir1.clone())
        );

        // Cleanup.
        unsafe {
            for v in TEST_CONFIG.cache_env_vars {
                env::remove_var(v);
            }
            for v in TEST_CONFIG.data_env_vars {
                env::remove_var(v);
            }
        }
    }
}
