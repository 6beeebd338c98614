use std::path::PathBuf;

use wordbridge::dataset::{CorpusSource, fetch_corpus};
use wordbridge::disk_cache::{WordbridgeDiskCache, WordbridgeDiskCacheOptions};

use crate::logging::LogArgs;

/// Args for the fetch command.
#[derive(clap::Args, Debug)]
pub struct FetchArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Override the cache directory.
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Corpus name; names the cache subdirectory.
    #[arg(long)]
    name: Option<String>,

    /// Corpus base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// The language pair.
    #[arg(long, num_args = 2, value_names = ["LANG_A", "LANG_B"])]
    langs: Option<Vec<String>>,
}

impl FetchArgs {
    pub fn corpus_source(&self) -> CorpusSource {
        let mut source = CorpusSource::default();
        if let Some(name) = &self.name {
            source = source.with_name(name);
        }
        if let Some(base_url) = &self.base_url {
            source = source.with_base_url(base_url);
        }
        if let Some(langs) = &self.langs {
            source = source.with_langs([langs[0].as_str(), langs[1].as_str()]);
        }
        source
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut cache = WordbridgeDiskCache::new(
            WordbridgeDiskCacheOptions::default().with_cache_dir(self.cache_dir.as_ref()),
        )?;

        let source = self.corpus_source();
        log::info!("fetching {} from {}", source.name, source.base_url);

        let files = fetch_corpus(&mut cache, &source, true)?;
        for lang in &files {
            log::info!("{}: {}", lang.lang, lang.train.display());
            log::info!("{}: {}", lang.lang, lang.test.display());
        }

        Ok(())
    }
}
