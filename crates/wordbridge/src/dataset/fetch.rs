//! # Corpus Fetching
//!
//! Idempotent materialization of raw corpus files: every file already in
//! the cache is left alone with zero network activity; every missing
//! file is downloaded (with retries) from the corpus base URL.

use std::path::PathBuf;

use wordbridge_disk_cache::WordbridgeDiskCache;

use crate::dataset::source::{CorpusSource, Split};
use crate::errors::{WBResult, WordbridgeError};

/// The cached train/test file paths for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageFiles {
    /// The language suffix.
    pub lang: String,

    /// The training split path.
    pub train: PathBuf,

    /// The test split path.
    pub test: PathBuf,
}

/// Fetch both splits of one language into the cache.
///
/// Downloads are sequential, one per missing file.
///
/// ## Arguments
/// * `cache` - the disk cache to materialize files into.
/// * `source` - the corpus description.
/// * `lang` - the language suffix; one of `source.langs`.
/// * `download` - whether missing files may be downloaded; when `false`,
///   a missing file is an immediate fetch error.
pub fn fetch_language(
    cache: &mut WordbridgeDiskCache,
    source: &CorpusSource,
    lang: &str,
    download: bool,
) -> WBResult<LanguageFiles> {
    let mut fetch_split = |split: Split| -> WBResult<PathBuf> {
        let filename = source.format_filename(split, lang);
        let context = source.cache_context();

        if download && !cache.cache_path(&context, &filename).exists() {
            log::info!("downloading {}", filename);
        }

        cache
            .load_cached_path(&context, &[source.file_url(&filename)], download)
            .map_err(|err| WordbridgeError::Fetch(err.to_string()))
    };

    Ok(LanguageFiles {
        lang: lang.to_string(),
        train: fetch_split(Split::Train)?,
        test: fetch_split(Split::Test)?,
    })
}

/// Fetch all four corpus files into the cache.
///
/// ## Returns
/// The per-language file paths, in `source.langs` order.
pub fn fetch_corpus(
    cache: &mut WordbridgeDiskCache,
    source: &CorpusSource,
    download: bool,
) -> WBResult<[LanguageFiles; 2]> {
    let [lang_a, lang_b] = &source.langs;

    Ok([
        fetch_language(cache, source, lang_a, download)?,
        fetch_language(cache, source, lang_b, download)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;
    use wordbridge_disk_cache::WordbridgeDiskCacheOptions;

    fn seeded_cache(tmpdir: &TempDir, source: &CorpusSource) -> WordbridgeDiskCache {
        let cache = WordbridgeDiskCache::new(
            WordbridgeDiskCacheOptions::default()
                .with_cache_dir(Some(tmpdir.path()))
                .with_data_dir(Some(tmpdir.path())),
        )
        .unwrap();

        for filename in source.filenames() {
            let path = cache.cache_path(&source.cache_context(), &filename);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "a b\n").unwrap();
        }

        cache
    }

    #[test]
    fn test_fetch_cached_corpus() {
        let tmpdir = TempDir::new("wordbridge-fetch-test").unwrap();

        // An unreachable base URL: present files must not hit the network.
        let source = CorpusSource::default().with_base_url("http://invalid.invalid");
        let mut cache = seeded_cache(&tmpdir, &source);

        let [en, ja] = fetch_corpus(&mut cache, &source, true).unwrap();

        assert_eq!(en.lang, "en");
        assert_eq!(ja.lang, "ja");
        assert!(en.train.ends_with("datasets/small_parallel_enja/train.en"));
        assert!(ja.test.exists());
    }

    #[test]
    fn test_fetch_missing_file_fails() {
        let tmpdir = TempDir::new("wordbridge-fetch-test").unwrap();

        let source = CorpusSource::default().with_base_url("http://invalid.invalid");
        let mut cache = seeded_cache(&tmpdir, &source);

        let path = cache.cache_path(&source.cache_context(), "train.ja");
        fs::remove_file(&path).unwrap();

        let res = fetch_language(&mut cache, &source, "ja", false);
        assert!(matches!(res, Err(WordbridgeError::Fetch(_))));
    }
}
