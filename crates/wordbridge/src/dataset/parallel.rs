//! # Bilingual Dataset Loading
//!
//! Fetch + fit + transform for both languages of a parallel corpus,
//! with a direction flag selecting which language is the model input
//! (X) and which is the target (y).

use wordbridge_disk_cache::WordbridgeDiskCache;

use crate::dataset::fetch::{LanguageFiles, fetch_corpus};
use crate::dataset::source::CorpusSource;
use crate::errors::WBResult;
use crate::types::TokenType;
use crate::vocab::builder::VocabBuilderOptions;
use crate::vocab::vocab_types::{EncodedCorpus, TokenWordMap, WordTokenMap};
use crate::vocab::vocabulary::WordVocab;

/// Which language of the pair plays the model-input (X) role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairDirection {
    /// The first language is X, the second is y.
    #[default]
    Forward,

    /// The second language is X, the first is y.
    Reverse,
}

/// The encoded corpus and vocabulary for one language.
#[derive(Debug, Clone)]
pub struct LanguageData<T: TokenType> {
    /// The language suffix.
    pub lang: String,

    /// The encoded training split; ragged.
    pub train: EncodedCorpus<T>,

    /// The encoded test split; ragged.
    pub test: EncodedCorpus<T>,

    /// The vocabulary fit on the training split.
    pub vocab: WordVocab<T>,
}

impl<T: TokenType> LanguageData<T> {
    /// The ID-space size of the vocabulary.
    pub fn num_words(&self) -> usize {
        self.vocab.num_words()
    }

    /// The forward word -> ID map.
    pub fn word_map(&self) -> &WordTokenMap<T> {
        self.vocab.word_map()
    }

    /// The reverse ID -> word map.
    pub fn id_map(&self) -> &TokenWordMap<T> {
        self.vocab.id_map()
    }
}

/// A loaded bilingual dataset.
#[derive(Debug, Clone)]
pub struct ParallelDataset<T: TokenType> {
    /// The model-input (X) side.
    pub x: LanguageData<T>,

    /// The target (y) side.
    pub y: LanguageData<T>,
}

/// Options for loading a parallel corpus.
#[derive(Debug, Clone, Default)]
pub struct ParallelCorpusOptions<T: TokenType> {
    /// The corpus description.
    pub source: CorpusSource,

    /// The per-language vocabulary builder options.
    pub builder: VocabBuilderOptions<T>,

    /// The X/y role selection.
    pub direction: PairDirection,
}

impl<T: TokenType> ParallelCorpusOptions<T> {
    /// Set the corpus description.
    pub fn with_source(
        self,
        source: CorpusSource,
    ) -> Self {
        Self { source, ..self }
    }

    /// Set the vocabulary builder options.
    pub fn with_builder(
        self,
        builder: VocabBuilderOptions<T>,
    ) -> Self {
        Self { builder, ..self }
    }

    /// Set the X/y role selection.
    pub fn with_direction(
        self,
        direction: PairDirection,
    ) -> Self {
        Self { direction, ..self }
    }

    /// Fetch, fit, and encode the corpus.
    ///
    /// Fetches the four raw files (downloading any that are missing),
    /// then independently per language: fits a vocabulary on the
    /// training split and encodes both splits. The two languages share
    /// no state.
    ///
    /// ## Arguments
    /// * `cache` - the disk cache to materialize raw files into.
    ///
    /// ## Returns
    /// The encoded dataset, with X/y roles assigned per the direction.
    pub fn load(
        &self,
        cache: &mut WordbridgeDiskCache,
    ) -> WBResult<ParallelDataset<T>> {
        let [files_a, files_b] = fetch_corpus(cache, &self.source, true)?;

        let data_a = self.load_language(files_a)?;
        let data_b = self.load_language(files_b)?;

        Ok(match self.direction {
            PairDirection::Forward => ParallelDataset {
                x: data_a,
                y: data_b,
            },
            PairDirection::Reverse => ParallelDataset {
                x: data_b,
                y: data_a,
            },
        })
    }

    fn load_language(
        &self,
        files: LanguageFiles,
    ) -> WBResult<LanguageData<T>> {
        let mut builder = self.builder.clone().init()?;

        builder.fit(&files.train)?;
        let train = builder.transform(&files.train)?;
        let test = builder.transform(&files.test)?;

        Ok(LanguageData {
            lang: files.lang,
            train,
            test,
            vocab: builder.into_vocab()?,
        })
    }
}
