//! Editable sequence buffer.
//!
//! [`MutableSeq`] keeps its content exactly as given (no case
//! normalization) and is edited in place. Convert to a [`Seq`] with
//! [`MutableSeq::to_seq`] once editing is done.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{SeqError, SeqResult};
use crate::seq::Seq;

/// A mutable biological sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MutableSeq {
    sequence: String,
}

impl MutableSeq {
    /// Creates a new buffer holding `sequence` verbatim.
    pub fn new(sequence: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
        }
    }

    /// Returns the number of characters.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the current content.
    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    /// Replaces the character at `index` with `value`.
    ///
    /// # Errors
    ///
    /// - [`SeqError::IndexOutOfRange`] if `index` is not below [`len`](Self::len)
    /// - [`SeqError::InvalidArgument`] if `value` is not exactly one character
    ///
    /// # Examples
    ///
    /// ```
    /// use bioseq::MutableSeq;
    ///
    /// let mut seq = MutableSeq::new("ACGT");
    /// seq.set(1, "T").unwrap();
    /// assert_eq!(seq.as_str(), "ATGT");
    /// assert!(seq.set(4, "A").is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: &str) -> SeqResult<()> {
        let Some((start, old)) = self.sequence.char_indices().nth(index) else {
            return Err(SeqError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        };

        let mut chars = value.chars();
        let replacement = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(SeqError::InvalidArgument(format!(
                    "expected a single character, got {:?}",
                    value
                )))
            }
        };

        let mut buf = [0u8; 4];
        self.sequence
            .replace_range(start..start + old.len_utf8(), replacement.encode_utf8(&mut buf));
        Ok(())
    }

    /// Deletes every occurrence of `pattern`.
    ///
    /// `pattern` is a literal: a single character removes that character
    /// everywhere, a longer string removes each non-overlapping occurrence of
    /// the whole string. An empty pattern leaves the buffer unchanged.
    pub fn remove(&mut self, pattern: &str) {
        if pattern.is_empty() {
            return;
        }
        let before = self.sequence.len();
        self.sequence = self.sequence.replace(pattern, "");
        debug!(
            "Removed {} occurrence(s) of {:?}",
            (before - self.sequence.len()) / pattern.len(),
            pattern
        );
    }

    /// Reverses the buffer in place.
    pub fn reverse(&mut self) {
        self.sequence = self.sequence.chars().rev().collect();
    }

    /// Builds an immutable (upper-cased) sequence from the current content.
    pub fn to_seq(&self) -> Seq {
        Seq::new(&self.sequence)
    }
}

impl fmt::Display for MutableSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence)
    }
}

impl From<&str> for MutableSeq {
    fn from(sequence: &str) -> Self {
        Self::new(sequence)
    }
}

impl From<String> for MutableSeq {
    fn from(sequence: String) -> Self {
        Self::new(sequence)
    }
}

impl From<Seq> for MutableSeq {
    fn from(seq: Seq) -> Self {
        Self::new(seq.into_string())
    }
}
