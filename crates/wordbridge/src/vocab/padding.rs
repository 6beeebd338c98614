//! # Explicit Corpus Padding
//!
//! Encoding always returns ragged corpora; padding to a rectangular
//! shape is a separate, explicitly invoked operation.

use crate::types::TokenType;
use crate::vocab::vocab_types::EncodedCorpus;

/// Pad every sentence of a corpus to a common length.
///
/// The target length is the longest sentence in the corpus, or
/// `target_length` when that is larger. Sentences are extended with
/// `pad_id`; nothing is ever truncated.
///
/// ## Arguments
/// * `corpus` - the ragged encoded corpus.
/// * `pad_id` - the padding ID to extend sentences with.
/// * `target_length` - optional minimum target length.
pub fn pad_corpus<T: TokenType>(
    corpus: &EncodedCorpus<T>,
    pad_id: T,
    target_length: Option<usize>,
) -> EncodedCorpus<T> {
    let max_len = corpus.iter().map(|s| s.len()).max().unwrap_or(0);
    let width = max_len.max(target_length.unwrap_or(0));

    corpus
        .iter()
        .map(|sentence| {
            let mut padded = sentence.clone();
            padded.resize(width, pad_id);
            padded
        })
        .collect()
}
