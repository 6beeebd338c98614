//! # Corpus Source Descriptions

/// The upstream URL of the default corpus: the 50k en/ja parallel corpus.
pub static SMALL_PARALLEL_ENJA_BASE_URL: &str =
    "https://raw.githubusercontent.com/odashi/small_parallel_enja/master";

/// The cache name of the default corpus.
pub static SMALL_PARALLEL_ENJA_NAME: &str = "small_parallel_enja";

/// A corpus split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// The training split.
    Train,

    /// The test split.
    Test,
}

impl Split {
    /// The split name used in corpus filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

/// Parallel Corpus Source Configuration.
///
/// Describes where a bilingual corpus lives and how its four raw files
/// (train/test for each language) are named.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusSource {
    /// The corpus name; names the cache subdirectory.
    pub name: String,

    /// The upstream base URL.
    pub base_url: String,

    /// The language pair, as filename suffixes.
    pub langs: [String; 2],

    /// The filename template.
    pub file_template: String,
}

impl Default for CorpusSource {
    /// The 50k en/ja parallel corpus, `{split}.{lang}` files.
    fn default() -> Self {
        Self {
            name: SMALL_PARALLEL_ENJA_NAME.to_string(),
            base_url: SMALL_PARALLEL_ENJA_BASE_URL.to_string(),
            langs: ["en".to_string(), "ja".to_string()],
            file_template: "{split}.{lang}".to_string(),
        }
    }
}

impl CorpusSource {
    /// Set the corpus name.
    pub fn with_name<S: AsRef<str>>(
        mut self,
        name: S,
    ) -> Self {
        self.name = name.as_ref().to_string();
        self
    }

    /// Set the upstream base URL.
    pub fn with_base_url<S: AsRef<str>>(
        mut self,
        base_url: S,
    ) -> Self {
        self.base_url = base_url.as_ref().to_string();
        self
    }

    /// Set the language pair.
    pub fn with_langs<S: AsRef<str>>(
        mut self,
        langs: [S; 2],
    ) -> Self {
        self.langs = langs.map(|l| l.as_ref().to_string());
        self
    }

    /// Construct a corpus filename.
    ///
    /// Substitutes the split name and language suffix into the
    /// [`Self::file_template`].
    pub fn format_filename(
        &self,
        split: Split,
        lang: &str,
    ) -> String {
        self.file_template
            .replace("{split}", split.as_str())
            .replace("{lang}", lang)
    }

    /// Construct the download URL for a corpus filename.
    pub fn file_url(
        &self,
        filename: &str,
    ) -> String {
        format!("{}/{}", self.base_url, filename)
    }

    /// All corpus filenames, every split of every language.
    pub fn filenames(&self) -> Vec<String> {
        self.langs
            .iter()
            .flat_map(|lang| {
                [Split::Train, Split::Test]
                    .into_iter()
                    .map(|split| self.format_filename(split, lang))
            })
            .collect()
    }

    /// The cache context dirs for this corpus.
    pub fn cache_context(&self) -> [String; 2] {
        ["datasets".to_string(), self.name.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source() {
        let source = CorpusSource::default();

        assert_eq!(source.name, "small_parallel_enja");
        assert_eq!(source.langs, ["en", "ja"]);

        assert_eq!(source.format_filename(Split::Train, "en"), "train.en");
        assert_eq!(source.format_filename(Split::Test, "ja"), "test.ja");

        assert_eq!(
            source.file_url("train.en"),
            "https://raw.githubusercontent.com/odashi/small_parallel_enja/master/train.en"
        );

        assert_eq!(
            source.filenames(),
            vec!["train.en", "test.en", "train.ja", "test.ja"]
        );

        assert_eq!(
            source.cache_context(),
            ["datasets".to_string(), "small_parallel_enja".to_string()]
        );
    }

    #[test]
    fn test_custom_source() {
        let source = CorpusSource::default()
            .with_name("tatoeba")
            .with_base_url("https://example.com/corpora")
            .with_langs(["de", "fr"]);

        assert_eq!(source.format_filename(Split::Train, "de"), "train.de");
        assert_eq!(
            source.file_url("train.de"),
            "https://example.com/corpora/train.de"
        );
        assert_eq!(
            source.filenames(),
            vec!["train.de", "test.de", "train.fr", "test.fr"]
        );
    }
}
