//! # Vocabulary IO
//!
//! JSON persistence for [`WordVocab`]: a document carrying the reserved
//! entry configuration and the complete forward word map. Loading
//! re-validates bijectivity and reserved-entry consistency.

use std::collections::BTreeMap;
use std::io::{Read, Write};

use serde::{Serialize, de::DeserializeOwned};

use crate::errors::{WBResult, WordbridgeError};
use crate::types::TokenType;
use crate::vocab::reserved::ReservedTokens;
use crate::vocab::vocabulary::WordVocab;

/// The persisted form of a [`WordVocab`].
#[derive(serde::Serialize, serde::Deserialize)]
struct VocabDocument<T: TokenType> {
    /// The reserved entry configuration.
    reserved: ReservedTokens<T>,

    /// The forward word map, reserved entries included.
    ///
    /// A `BTreeMap` keeps the serialized form stable.
    words: BTreeMap<String, T>,
}

/// Write a vocabulary as a JSON document.
pub fn write_vocab_json<T, W>(
    vocab: &WordVocab<T>,
    writer: &mut W,
) -> WBResult<()>
where
    T: TokenType + Serialize,
    W: Write,
{
    let doc = VocabDocument {
        reserved: vocab.reserved().clone(),
        words: vocab
            .word_map()
            .iter()
            .map(|(word, &id)| (word.clone(), id))
            .collect(),
    };

    serde_json::to_writer_pretty(writer, &doc)
        .map_err(|err| WordbridgeError::Parse(err.to_string()))
}

/// Read a vocabulary from a JSON document.
///
/// ## Returns
/// * `Ok(vocab)` - on success.
/// * `Err(WordbridgeError::Parse)` - on malformed JSON.
/// * `Err(WordbridgeError::VocabConflict)` - when the document is not a
///   bijection, or remaps a reserved entry.
pub fn read_vocab_json<T, R>(reader: &mut R) -> WBResult<WordVocab<T>>
where
    T: TokenType + DeserializeOwned,
    R: Read,
{
    let doc: VocabDocument<T> = serde_json::from_reader(reader)
        .map_err(|err| WordbridgeError::Parse(err.to_string()))?;

    WordVocab::from_word_map(doc.words.into_iter().collect(), doc.reserved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::builder::VocabBuilderOptions;

    #[test]
    fn test_vocab_json_roundtrip() {
        let mut builder = VocabBuilderOptions::<u32>::default().init().unwrap();
        let vocab = builder.fit_lines(["a b", "b c"]).unwrap().clone();

        let mut buf = Vec::new();
        write_vocab_json(&vocab, &mut buf).unwrap();

        let loaded: WordVocab<u32> = read_vocab_json(&mut buf.as_slice()).unwrap();
        assert_eq!(loaded, vocab);
    }

    #[test]
    fn test_read_rejects_conflicts() {
        // "a" and "b" share an ID.
        let doc = r#"{
            "reserved": {
                "pad_label": "<PAD>", "pad_id": 0,
                "bos_label": "<BOS>", "bos_id": 1,
                "eos_label": "<EOS>", "eos_id": 2,
                "oov_label": "<UNK>", "oov_id": 3
            },
            "words": {
                "<PAD>": 0, "<BOS>": 1, "<EOS>": 2, "<UNK>": 3,
                "a": 4, "b": 4
            }
        }"#;

        let res = read_vocab_json::<u32, _>(&mut doc.as_bytes());
        assert!(matches!(res, Err(WordbridgeError::VocabConflict(_))));
    }

    #[test]
    fn test_read_rejects_malformed_json() {
        let res = read_vocab_json::<u32, _>(&mut "not json".as_bytes());
        assert!(matches!(res, Err(WordbridgeError::Parse(_))));
    }
}
