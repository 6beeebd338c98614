//! # Vocabulary Type Aliases

use std::collections::HashMap;

/// Forward mapping from words to IDs.
pub type WordTokenMap<T> = HashMap<String, T>;

/// Reverse mapping from IDs to words.
pub type TokenWordMap<T> = HashMap<T, String>;

/// One encoded sentence: boundary markers plus word IDs, in order.
pub type EncodedSentence<T> = Vec<T>;

/// One encoded corpus: one [`EncodedSentence`] per source line, in order.
///
/// Sentences are ragged; see [`pad_corpus`](`crate::vocab::pad_corpus`)
/// for explicit padding.
pub type EncodedCorpus<T> = Vec<EncodedSentence<T>>;
