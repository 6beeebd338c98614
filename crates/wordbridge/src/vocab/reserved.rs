//! # Reserved Token Configuration

use serde::{Deserialize, Serialize};

use crate::errors::{WBResult, WordbridgeError};
use crate::types::TokenType;

/// Default label for the padding entry.
pub const DEFAULT_PAD_LABEL: &str = "<PAD>";
/// Default label for the sentence-start entry.
pub const DEFAULT_BOS_LABEL: &str = "<BOS>";
/// Default label for the sentence-end entry.
pub const DEFAULT_EOS_LABEL: &str = "<EOS>";
/// Default label for the out-of-vocabulary entry.
pub const DEFAULT_OOV_LABEL: &str = "<UNK>";

/// Labels and IDs for the reserved vocabulary entries.
///
/// Reserved entries form a layer over the corpus words: they are injected
/// after corpus IDs are assigned, and overwrite same-named corpus words.
///
/// The padding entry is optional; `pad_id: None` builds a vocabulary with
/// no padding entry at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservedTokens<T: TokenType> {
    /// The padding label.
    pub pad_label: String,

    /// The padding ID; `None` omits the padding entry.
    pub pad_id: Option<T>,

    /// The sentence-start label.
    pub bos_label: String,

    /// The sentence-start ID.
    pub bos_id: T,

    /// The sentence-end label.
    pub eos_label: String,

    /// The sentence-end ID.
    pub eos_id: T,

    /// The out-of-vocabulary label.
    pub oov_label: String,

    /// The out-of-vocabulary ID.
    pub oov_id: T,
}

impl<T: TokenType> Default for ReservedTokens<T> {
    /// `<PAD>`:0, `<BOS>`:1, `<EOS>`:2, `<UNK>`:3.
    fn default() -> Self {
        Self {
            pad_label: DEFAULT_PAD_LABEL.to_string(),
            pad_id: Some(T::zero()),
            bos_label: DEFAULT_BOS_LABEL.to_string(),
            bos_id: T::one(),
            eos_label: DEFAULT_EOS_LABEL.to_string(),
            eos_id: T::from_usize(2).unwrap(),
            oov_label: DEFAULT_OOV_LABEL.to_string(),
            oov_id: T::from_usize(3).unwrap(),
        }
    }
}

impl<T: TokenType> ReservedTokens<T> {
    /// Set the padding entry.
    pub fn with_pad<S: AsRef<str>>(
        mut self,
        label: S,
        id: T,
    ) -> Self {
        self.pad_label = label.as_ref().to_string();
        self.pad_id = Some(id);
        self
    }

    /// Drop the padding entry.
    pub fn without_pad(mut self) -> Self {
        self.pad_id = None;
        self
    }

    /// Set the sentence-start entry.
    pub fn with_bos<S: AsRef<str>>(
        mut self,
        label: S,
        id: T,
    ) -> Self {
        self.bos_label = label.as_ref().to_string();
        self.bos_id = id;
        self
    }

    /// Set the sentence-end entry.
    pub fn with_eos<S: AsRef<str>>(
        mut self,
        label: S,
        id: T,
    ) -> Self {
        self.eos_label = label.as_ref().to_string();
        self.eos_id = id;
        self
    }

    /// Set the out-of-vocabulary entry.
    pub fn with_oov<S: AsRef<str>>(
        mut self,
        label: S,
        id: T,
    ) -> Self {
        self.oov_label = label.as_ref().to_string();
        self.oov_id = id;
        self
    }

    /// The present reserved entries, as ``(label, id)`` pairs.
    ///
    /// The padding entry is included only when `pad_id` is set.
    pub fn entries(&self) -> Vec<(&str, T)> {
        let mut entries = Vec::with_capacity(4);
        if let Some(pad_id) = self.pad_id {
            entries.push((self.pad_label.as_str(), pad_id));
        }
        entries.push((self.bos_label.as_str(), self.bos_id));
        entries.push((self.eos_label.as_str(), self.eos_id));
        entries.push((self.oov_label.as_str(), self.oov_id));
        entries
    }

    /// Validate this configuration against a corpus ID offset.
    ///
    /// ## Arguments
    /// * `index_from` - the first ID assigned to corpus words.
    ///
    /// ## Returns
    /// * `Ok(())` - when reserved IDs are pairwise distinct and all below
    ///   `index_from`.
    /// * `Err(WordbridgeError::InvalidReservedConfig)` - otherwise.
    pub fn validate(
        &self,
        index_from: T,
    ) -> WBResult<()> {
        let entries = self.entries();

        for (label, id) in &entries {
            if *id >= index_from {
                return Err(WordbridgeError::InvalidReservedConfig(format!(
                    "reserved id {id} ({label}) must be < index_from ({index_from})"
                )));
            }
        }

        for (i, (label_a, id_a)) in entries.iter().enumerate() {
            for (label_b, id_b) in &entries[i + 1..] {
                if id_a == id_b {
                    return Err(WordbridgeError::InvalidReservedConfig(format!(
                        "reserved entries {label_a} and {label_b} share id {id_a}"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reserved() {
        let reserved: ReservedTokens<u32> = ReservedTokens::default();

        assert_eq!(
            reserved.entries(),
            vec![("<PAD>", 0), ("<BOS>", 1), ("<EOS>", 2), ("<UNK>", 3)]
        );
        assert!(reserved.validate(4).is_ok());
    }

    #[test]
    fn test_without_pad() {
        let reserved: ReservedTokens<u32> = ReservedTokens::default().without_pad();

        assert_eq!(
            reserved.entries(),
            vec![("<BOS>", 1), ("<EOS>", 2), ("<UNK>", 3)]
        );
    }

    #[test]
    fn test_validate_rejects_high_ids() {
        let reserved: ReservedTokens<u32> = ReservedTokens::default().with_oov("<UNK>", 9);

        assert!(reserved.validate(4).is_err());
        assert!(reserved.validate(10).is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let reserved: ReservedTokens<u32> = ReservedTokens::default().with_eos("</s>", 1);

        assert!(reserved.validate(4).is_err());
    }
}
