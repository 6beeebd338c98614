//! # Datasets
//!
//! This module describes parallel corpora ([`CorpusSource`]), fetches
//! their raw files into the disk cache, and loads them as encoded
//! bilingual datasets ([`ParallelDataset`]).

pub mod source;

#[cfg(feature = "download")]
pub mod fetch;

#[cfg(feature = "download")]
pub mod parallel;

#[doc(inline)]
pub use source::{CorpusSource, Split};

#[cfg(feature = "download")]
#[doc(inline)]
pub use fetch::{LanguageFiles, fetch_corpus, fetch_language};

#[cfg(feature = "download")]
#[doc(inline)]
pub use parallel::{LanguageData, PairDirection, ParallelCorpusOptions, ParallelDataset};
