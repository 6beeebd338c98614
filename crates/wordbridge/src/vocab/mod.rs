//! # Vocabulary
//!
//! This module provides word vocabularies, vocabulary building, sentence
//! encoding, and the related io mechanisms.
//!
//! ## Word Vocabulary
//!
//! The user-oriented vocabulary is [`WordVocab`], a bijective
//! ``{ String <-> T }`` mapping containing two layers:
//! * corpus words, assigned consecutive IDs from a configurable offset,
//! * reserved entries ([`ReservedTokens`]), at fixed low IDs.
//!
//! ## Building
//!
//! [`VocabBuilderOptions`] configures and validates a [`VocabBuilder`],
//! which `fit`s a vocabulary from a training file and `transform`s raw
//! corpus files into [`EncodedCorpus`] values.

pub mod builder;
pub mod io;
pub mod padding;
pub mod reserved;
pub mod vocab_types;
pub mod vocabulary;

#[doc(inline)]
pub use builder::{VocabBuilder, VocabBuilderOptions};
#[doc(inline)]
pub use padding::pad_corpus;
#[doc(inline)]
pub use reserved::ReservedTokens;
#[doc(inline)]
pub use vocab_types::{EncodedCorpus, EncodedSentence, TokenWordMap, WordTokenMap};
#[doc(inline)]
pub use vocabulary::WordVocab;
