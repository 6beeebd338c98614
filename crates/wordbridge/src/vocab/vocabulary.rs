//! # Word Vocabulary Index

use crate::errors::{WBResult, WordbridgeError};
use crate::types::TokenType;
use crate::vocab::reserved::ReservedTokens;
use crate::vocab::vocab_types::{EncodedCorpus, EncodedSentence, TokenWordMap, WordTokenMap};
use crate::vocab::padding::pad_corpus;

/// An immutable, bijective word <-> ID vocabulary.
///
/// Built once (see [`VocabBuilder`](`crate::vocab::VocabBuilder`)), then
/// used to encode any number of raw sentences. The forward and reverse
/// maps are exact inverses; this is validated at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: TokenType> {
    reserved: ReservedTokens<T>,
    words: WordTokenMap<T>,
    ids: TokenWordMap<T>,
}

impl<T: TokenType> WordVocab<T> {
    /// Construct a vocabulary from a complete forward map.
    ///
    /// The map must already contain the reserved entries; this is the
    /// case for maps produced by `fit` and for persisted vocabularies.
    ///
    /// ## Arguments
    /// * `words` - the forward word -> ID map, reserved entries included.
    /// * `reserved` - the reserved entry configuration.
    ///
    /// ## Returns
    /// * `Ok(vocab)` - on success.
    /// * `Err(WordbridgeError::VocabConflict)` - when two words share an
    ///   ID, or a reserved entry is missing or remapped.
    pub fn from_word_map(
        words: WordTokenMap<T>,
        reserved: ReservedTokens<T>,
    ) -> WBResult<Self> {
        for (label, id) in reserved.entries() {
            match words.get(label) {
                Some(&mapped) if mapped == id => {}
                Some(&mapped) => {
                    return Err(WordbridgeError::VocabConflict(format!(
                        "reserved entry {label} maps to {mapped}, expected {id}"
                    )));
                }
                None => {
                    return Err(WordbridgeError::VocabConflict(format!(
                        "reserved entry {label} is missing from the word map"
                    )));
                }
            }
        }

        let mut ids = TokenWordMap::with_capacity(words.len());
        for (word, &id) in &words {
            if let Some(existing) = ids.insert(id, word.clone()) {
                return Err(WordbridgeError::VocabConflict(format!(
                    "words {existing:?} and {word:?} share id {id}"
                )));
            }
        }

        Ok(Self {
            reserved,
            words,
            ids,
        })
    }

    /// Get the reserved entry configuration.
    pub fn reserved(&self) -> &ReservedTokens<T> {
        &self.reserved
    }

    /// Get the forward word -> ID map.
    pub fn word_map(&self) -> &WordTokenMap<T> {
        &self.words
    }

    /// Get the reverse ID -> word map.
    pub fn id_map(&self) -> &TokenWordMap<T> {
        &self.ids
    }

    /// Get the number of entries in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the maximum ID present in the vocabulary.
    pub fn max_id(&self) -> Option<T> {
        self.words.values().max().copied()
    }

    /// The size of the ID space: ``1 + max ID``.
    ///
    /// This is the embedding-table size for the vocabulary, not the entry
    /// count; IDs need not be contiguous when reserved IDs leave holes.
    pub fn num_words(&self) -> usize {
        match self.max_id() {
            Some(max) => max.to_usize().unwrap() + 1,
            None => 0,
        }
    }

    /// Return the ID for a word, if present.
    pub fn lookup_id(
        &self,
        word: &str,
    ) -> Option<T> {
        self.words.get(word).copied()
    }

    /// Return the word for an ID, if present.
    pub fn lookup_word(
        &self,
        id: T,
    ) -> Option<&str> {
        self.ids.get(&id).map(|w| w.as_str())
    }

    /// Encode one word; unknown words resolve to the OOV ID.
    pub fn encode_word(
        &self,
        word: &str,
    ) -> T {
        self.lookup_id(word).unwrap_or(self.reserved.oov_id)
    }

    /// Encode one sentence line.
    ///
    /// The line is split on whitespace, wrapped with the sentence-start
    /// and sentence-end labels, and every token is mapped through the
    /// vocabulary with the OOV ID as fallback.
    ///
    /// ## Returns
    /// An [`EncodedSentence`] of length ``N + 2`` for a line of N tokens.
    pub fn encode_line(
        &self,
        line: &str,
    ) -> EncodedSentence<T> {
        let tokens = line.split_whitespace();

        let mut encoded = Vec::with_capacity(tokens.clone().count() + 2);
        encoded.push(self.encode_word(&self.reserved.bos_label));
        encoded.extend(tokens.map(|w| self.encode_word(w)));
        encoded.push(self.encode_word(&self.reserved.eos_label));
        encoded
    }

    /// Encode an iterator of sentence lines, in order.
    pub fn encode_lines<I, S>(
        &self,
        lines: I,
    ) -> EncodedCorpus<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.encode_line(line.as_ref()))
            .collect()
    }

    /// Pad an encoded corpus with this vocabulary's padding ID.
    ///
    /// See [`pad_corpus`]; padding is never applied implicitly by the
    /// encoding operations.
    ///
    /// ## Returns
    /// * `Ok(corpus)` - the padded corpus.
    /// * `Err(WordbridgeError::MissingPadToken)` - when no padding entry
    ///   is configured.
    pub fn pad_corpus(
        &self,
        corpus: &EncodedCorpus<T>,
        target_length: Option<usize>,
    ) -> WBResult<EncodedCorpus<T>> {
        let pad_id = self
            .reserved
            .pad_id
            .ok_or(WordbridgeError::MissingPadToken)?;

        Ok(pad_corpus(corpus, pad_id, target_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_vocab() -> WordVocab<u32> {
        let reserved = ReservedTokens::default();
        let mut words = WordTokenMap::new();
        for (label, id) in reserved.entries() {
            words.insert(label.to_string(), id);
        }
        words.insert("school".to_string(), 4);
        words.insert("went".to_string(), 5);

        WordVocab::from_word_map(words, reserved).unwrap()
    }

    #[test]
    fn test_inverse_maps() {
        let vocab = example_vocab();

        assert_eq!(vocab.len(), 6);
        assert!(!vocab.is_empty());

        for (word, &id) in vocab.word_map() {
            assert_eq!(vocab.lookup_word(id), Some(word.as_str()));
        }
        for (&id, word) in vocab.id_map() {
            assert_eq!(vocab.lookup_id(word), Some(id));
        }
    }

    #[test]
    fn test_num_words() {
        let vocab = example_vocab();
        assert_eq!(vocab.max_id(), Some(5));
        assert_eq!(vocab.num_words(), 6);
    }

    #[test]
    fn test_num_words_with_id_holes() {
        // Reserved IDs outside the assigned range leave holes;
        // num_words still counts the full ID space.
        let reserved: ReservedTokens<u32> =
            ReservedTokens::default().with_oov("<UNK>", 9);
        let mut words = WordTokenMap::new();
        for (label, id) in reserved.entries() {
            words.insert(label.to_string(), id);
        }

        let vocab = WordVocab::from_word_map(words, reserved).unwrap();
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.num_words(), 10);
    }

    #[test]
    fn test_encode_line() {
        let vocab = example_vocab();

        assert_eq!(vocab.encode_line("went school"), vec![1, 5, 4, 2]);

        // Unknown words resolve to the OOV ID.
        assert_eq!(vocab.encode_line("went home"), vec![1, 5, 3, 2]);

        // Empty lines are boundary markers only.
        assert_eq!(vocab.encode_line(""), vec![1, 2]);
    }

    #[test]
    fn test_from_word_map_rejects_conflicts() {
        let reserved: ReservedTokens<u32> = ReservedTokens::default();

        // Missing reserved entry.
        let res = WordVocab::from_word_map(WordTokenMap::new(), reserved.clone());
        assert!(matches!(res, Err(WordbridgeError::VocabConflict(_))));

        // Duplicate ID.
        let mut words = WordTokenMap::new();
        for (label, id) in reserved.entries() {
            words.insert(label.to_string(), id);
        }
        words.insert("school".to_string(), 4);
        words.insert("went".to_string(), 4);

        let res = WordVocab::from_word_map(words, reserved);
        assert!(matches!(res, Err(WordbridgeError::VocabConflict(_))));
    }
}
