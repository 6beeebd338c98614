//! # `wordbridge` Parallel Corpus Toolkit
//!
//! `wordbridge` fetches parallel text corpora, builds per-language word
//! vocabularies, and encodes sentences into integer ID sequences.
//!
//! See:
//! * [`dataset`] to describe, fetch, and load bilingual corpora.
//! * [`vocab`] to build vocabularies and encode raw text.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``download``
//!
//! #### feature: ``download``
//!
//! * ``wordbridge-disk-cache``
//!
//! The download feature enables fetching corpus files from the internet
//! into a per-user disk cache.
//!
//! ## Loading a Parallel Corpus
//!
//! ```rust,ignore
//! use wordbridge::dataset::ParallelCorpusOptions;
//! use wordbridge::disk_cache::WordbridgeDiskCache;
//!
//! let mut cache = WordbridgeDiskCache::default();
//! let dataset = ParallelCorpusOptions::<u32>::default().load(&mut cache)?;
//!
//! let first_sentence = &dataset.x.train[0];
//! ```
#![warn(missing_docs, unused)]

pub mod dataset;
pub mod errors;
pub mod types;
pub mod vocab;

#[cfg(feature = "download")]
#[doc(inline)]
pub use wordbridge_disk_cache as disk_cache;

#[doc(inline)]
pub use errors::{WBResult, WordbridgeError};
#[doc(inline)]
pub use vocab::{ReservedTokens, VocabBuilder, VocabBuilderOptions, WordVocab};
