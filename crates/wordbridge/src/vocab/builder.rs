//! # Vocabulary Builder
//!
//! Two-state fit/transform pipeline: a [`VocabBuilder`] starts unfit,
//! `fit` consumes one training file to build a [`WordVocab`], and
//! `transform` encodes raw corpus files against it.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{WBResult, WordbridgeError};
use crate::types::TokenType;
use crate::vocab::reserved::ReservedTokens;
use crate::vocab::vocab_types::{EncodedCorpus, WordTokenMap};
use crate::vocab::vocabulary::WordVocab;

/// Options for [`VocabBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct VocabBuilderOptions<T: TokenType> {
    /// The reserved entry configuration.
    pub reserved: ReservedTokens<T>,

    /// The first ID assigned to corpus words.
    pub index_from: T,
}

impl<T: TokenType> Default for VocabBuilderOptions<T> {
    /// Default reserved entries, corpus IDs from 4.
    fn default() -> Self {
        Self {
            reserved: ReservedTokens::default(),
            index_from: T::from_usize(4).unwrap(),
        }
    }
}

impl<T: TokenType> VocabBuilderOptions<T> {
    /// Set the reserved entry configuration.
    pub fn with_reserved(
        self,
        reserved: ReservedTokens<T>,
    ) -> Self {
        Self { reserved, ..self }
    }

    /// Set the first ID assigned to corpus words.
    pub fn with_index_from(
        self,
        index_from: T,
    ) -> Self {
        Self { index_from, ..self }
    }

    /// Initialize a [`VocabBuilder`] from these options.
    ///
    /// ## Returns
    /// * `Ok(builder)` - an unfit builder.
    /// * `Err(WordbridgeError::InvalidReservedConfig)` - when reserved IDs
    ///   collide with each other or with the corpus ID range.
    pub fn init(self) -> WBResult<VocabBuilder<T>> {
        self.reserved.validate(self.index_from)?;

        Ok(VocabBuilder {
            options: self,
            vocab: None,
        })
    }
}

/// A fit/transform vocabulary builder for one language.
///
/// A builder is scoped to exactly one training file; `fit` transitions it
/// to the fit state, after which `transform` may be called any number of
/// times, on any file, without further mutation.
pub struct VocabBuilder<T: TokenType> {
    options: VocabBuilderOptions<T>,
    vocab: Option<WordVocab<T>>,
}

impl<T: TokenType> VocabBuilder<T> {
    /// Get the builder options.
    pub fn options(&self) -> &VocabBuilderOptions<T> {
        &self.options
    }

    /// Check whether `fit` has been called.
    pub fn is_fit(&self) -> bool {
        self.vocab.is_some()
    }

    /// Get the fit vocabulary, if any.
    pub fn vocab(&self) -> Option<&WordVocab<T>> {
        self.vocab.as_ref()
    }

    /// Consume the builder, returning the fit vocabulary.
    ///
    /// ## Returns
    /// * `Ok(vocab)` - in the fit state.
    /// * `Err(WordbridgeError::NotFitted)` - otherwise.
    pub fn into_vocab(self) -> WBResult<WordVocab<T>> {
        self.vocab.ok_or(WordbridgeError::NotFitted {
            operation: "into_vocab",
        })
    }

    /// Fit the vocabulary from a training file.
    ///
    /// Reads every line of the file, splits on whitespace, and assigns
    /// each distinct token a consecutive ID from `index_from`, in
    /// lexicographic token order. Reserved entries are injected last and
    /// overwrite same-named corpus words.
    ///
    /// ## Arguments
    /// * `path` - the training file; UTF-8, one sentence per line.
    ///
    /// ## Returns
    /// * `Ok(&vocab)` - the fit vocabulary.
    /// * `Err(e)` - on I/O failure, non-UTF-8 input, or ID-space overflow.
    pub fn fit<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> WBResult<&WordVocab<T>> {
        let lines = read_corpus_lines(path.as_ref())?;
        self.fit_lines(&lines)
    }

    /// Fit the vocabulary from in-memory sentence lines.
    ///
    /// See [`Self::fit`].
    pub fn fit_lines<I, S>(
        &mut self,
        lines: I,
    ) -> WBResult<&WordVocab<T>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = BTreeSet::new();
        for line in lines {
            for token in line.as_ref().split_whitespace() {
                tokens.insert(token.to_string());
            }
        }

        let vocab = self.build_vocab(tokens)?;
        log::debug!(
            "fit vocabulary: {} entries, num_words {}",
            vocab.len(),
            vocab.num_words()
        );

        self.vocab = Some(vocab);
        Ok(self.vocab.as_ref().unwrap())
    }

    /// Encode a raw corpus file against the fit vocabulary.
    ///
    /// ## Arguments
    /// * `path` - the corpus file; may be the training file or any other.
    ///
    /// ## Returns
    /// * `Ok(corpus)` - one encoded sentence per input line, in order.
    /// * `Err(WordbridgeError::NotFitted)` - when `fit` has not been
    ///   called.
    /// * `Err(e)` - on I/O failure or non-UTF-8 input.
    pub fn transform<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> WBResult<EncodedCorpus<T>> {
        let vocab = self.require_fit("transform")?;
        let lines = read_corpus_lines(path.as_ref())?;
        Ok(vocab.encode_lines(&lines))
    }

    /// Encode in-memory sentence lines against the fit vocabulary.
    ///
    /// See [`Self::transform`].
    pub fn transform_lines<I, S>(
        &self,
        lines: I,
    ) -> WBResult<EncodedCorpus<T>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocab = self.require_fit("transform")?;
        Ok(vocab.encode_lines(lines))
    }

    fn require_fit(
        &self,
        operation: &'static str,
    ) -> WBResult<&WordVocab<T>> {
        self.vocab
            .as_ref()
            .ok_or(WordbridgeError::NotFitted { operation })
    }

    fn build_vocab(
        &self,
        tokens: BTreeSet<String>,
    ) -> WBResult<WordVocab<T>> {
        let index_from = self.options.index_from.to_usize().unwrap();

        let size = index_from + tokens.len();
        if !tokens.is_empty() && T::from_usize(size - 1).is_none() {
            return Err(WordbridgeError::VocabSizeOverflow { size });
        }

        let mut words = WordTokenMap::with_capacity(tokens.len() + 4);
        for (i, token) in tokens.into_iter().enumerate() {
            words.insert(token, T::from_usize(index_from + i).unwrap());
        }

        // The reserved layer wins over same-named corpus words.
        for (label, id) in self.options.reserved.entries() {
            words.insert(label.to_string(), id);
        }

        WordVocab::from_word_map(words, self.options.reserved.clone())
    }
}

fn read_corpus_lines(path: &Path) -> WBResult<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
}
