//! # Wordbridge Disk Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};

use crate::{WORDBRIDGE_PATH_CONFIG, path_utils};

/// Default number of download retries for the built-in [`Downloader`].
pub const DEFAULT_DOWNLOAD_RETRIES: u16 = 3;

/// Options for [`WordbridgeDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct WordbridgeDiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,

    /// Optional path to the data directory.
    pub data_dir: Option<PathBuf>,

    /// Optional [`Downloader`] builder.
    pub downloader: Option<fn() -> Downloader>,
}

impl WordbridgeDiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the data directory.
    pub fn with_data_dir<P: AsRef<Path>>(
        mut self,
        data_dir: Option<P>,
    ) -> Self {
        self.data_dir = data_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the downloader builder.
    pub fn with_downloader(
        mut self,
        downloader: Option<fn() -> Downloader>,
    ) -> Self {
        self.downloader = downloader;
        self
    }
}

/// Disk cache for downloaded files.
///
/// Leverages [`Downloader`] for downloading files,
/// and [`PathResolver`](`crate::PathResolver`) for resolving cache and data paths
/// appropriate for a user/system combo, and any environment overrides.
pub struct WordbridgeDiskCache {
    /// Cache directory.
    cache_dir: PathBuf,

    /// Data directory.
    data_dir: PathBuf,

    /// Connection pool for downloading files.
    downloader: Downloader,
}

impl Default for WordbridgeDiskCache {
    fn default() -> Self {
        Self::new(WordbridgeDiskCacheOptions::default()).unwrap()
    }
}

impl WordbridgeDiskCache {
    /// Construct a new [`WordbridgeDiskCache`].
    pub fn new(options: WordbridgeDiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = WORDBRIDGE_PATH_CONFIG
            .resolve_cache_dir(options.cache_dir)
            .context("failed to resolve cache directory")?;

        let data_dir = WORDBRIDGE_PATH_CONFIG
            .resolve_data_dir(options.data_dir)
            .context("failed to resolve data directory")?;

        let downloader = match options.downloader {
            Some(builder) => builder(),
            None => Downloader::builder()
                .retries(DEFAULT_DOWNLOAD_RETRIES)
                .build()?,
        };

        Ok(Self {
            cache_dir,
            data_dir,
            downloader,
        })
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the cache path for the given key.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between `self.cache_dir` and `file`.
    /// * `file` - the final file name.
    pub fn cache_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.cache_dir, context, file)
    }

    /// Get the data path for the given key.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between `self.data_dir` and `file`.
    /// * `file` - the final file name.
    pub fn data_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.data_dir, context, file)
    }

    /// Loads a cached file, or downloads it if it does not exist.
    ///
    /// Files already present in the cache are returned without any
    /// network activity; absent files are fetched from the first
    /// reachable mirror URL, with retries.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between `self.cache_dir` and the
    ///   file name; these name the cache location of the file.
    /// * `urls` - the mirror URLs to download the file from when it is not
    ///   already cached. The file name is taken from the first URL.
    /// * `download` - whether to attempt downloading the file when it does
    ///   not already exist in the cache.
    ///
    /// # Errors
    /// * Returns an error if the cached file does not exist and `download`
    ///   is `false`.
    /// * Returns an error if downloading fails, or completes without
    ///   materializing the target file.
    pub fn load_cached_path<C, S>(
        &mut self,
        context: &[C],
        urls: &[S],
        download: bool,
    ) -> anyhow::Result<PathBuf>
    where
        C: AsRef<Path>,
        S: AsRef<str>,
    {
        let urls: Vec<_> = urls.iter().map(|s| s.as_ref()).collect();
        let mut dl = Download::new_mirrored(&urls);
        let file_name = dl.file_name.clone();
        let path = self.cache_path(context, &file_name);
        dl.file_name = path.clone();

        if path.exists() {
            return Ok(path);
        }

        if !download {
            anyhow::bail!("cached file not found: {}", path.display());
        }

        fs::create_dir_all(path.parent().unwrap())?;

        self.downloader.download(&[dl])?;

        // Downloader reports per-file failures in its summary values;
        // the target file is the ground truth.
        if !path.exists() {
            anyhow::bail!(
                "download failed: {} -> {}",
                urls.join(", "),
                path.display()
            );
        }

        Ok(path)
    }
}
