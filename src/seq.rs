//! Immutable biological sequence.
//!
//! [`Seq`] holds DNA, RNA or protein text, upper-cased on construction. Every
//! operation leaves the receiver untouched and returns a new value, so a `Seq`
//! can be shared freely, including across threads.
//!
//! No alphabet is enforced: mixed or non-biological text is accepted and
//! characters the tables do not know pass through unchanged (or translate to
//! `X`).

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::{Chars, FromStr};

use log::trace;
use serde::Serialize;

use crate::error::{SeqError, SeqResult};
use crate::functions::AsSeqStr;
use crate::genetic_code::{translate_sequence, TranslationOptions};
use crate::mutable_seq::MutableSeq;
use crate::nucleotide::{back_transcribe_base, complement_base, transcribe_base};

/// A read-only biological sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Seq {
    sequence: String,
}

/// Resolves a possibly negative index against `len`, clamping into `0..=len`.
fn clamp_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

impl Seq {
    /// Creates a new sequence, upper-casing the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use bioseq::Seq;
    ///
    /// let seq = Seq::new("acgt");
    /// assert_eq!(seq.to_string(), "ACGT");
    /// ```
    pub fn new(seq: impl AsRef<str>) -> Self {
        Self {
            sequence: seq.as_ref().to_uppercase(),
        }
    }

    /// Wraps already-derived content without re-normalizing its case.
    fn from_raw(sequence: String) -> Self {
        Self { sequence }
    }

    /// Content as the base tables expect it (upper case).
    fn normalized(&self) -> Cow<'_, str> {
        if self.sequence.chars().any(char::is_lowercase) {
            Cow::Owned(self.sequence.to_uppercase())
        } else {
            Cow::Borrowed(&self.sequence)
        }
    }

    fn map_bases(&self, f: impl Fn(char) -> char) -> Self {
        Self::from_raw(self.normalized().chars().map(f).collect())
    }

    /// Returns the number of characters.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Gets the character at `index`.
    ///
    /// Negative indices count from the end (`-1` is the last character).
    /// Returns `None` when the index falls outside the sequence.
    pub fn at(&self, index: isize) -> Option<char> {
        let pos = if index < 0 {
            self.len().checked_sub(index.unsigned_abs())?
        } else {
            index as usize
        };
        self.sequence.chars().nth(pos)
    }

    /// Iterates over the characters.
    pub fn chars(&self) -> Chars<'_> {
        self.sequence.chars()
    }

    /// Returns the underlying string.
    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    /// Consumes the sequence and returns the underlying string.
    pub fn into_string(self) -> String {
        self.sequence
    }

    /// Counts non-overlapping occurrences of `pattern`.
    ///
    /// Matching is literal and case-sensitive; after a match the search
    /// resumes past it, so `"AAAA"` contains `"AA"` twice.
    ///
    /// # Errors
    ///
    /// [`SeqError::InvalidArgument`] if `pattern` is empty.
    pub fn count(&self, pattern: &str) -> SeqResult<usize> {
        if pattern.is_empty() {
            return Err(SeqError::InvalidArgument(
                "cannot count an empty pattern".to_string(),
            ));
        }
        Ok(self.sequence.matches(pattern).count())
    }

    /// Returns the complementary strand (A<->T, C<->G, U->A).
    pub fn complement(&self) -> Self {
        self.map_bases(complement_base)
    }

    /// Returns the complement read in reverse order.
    pub fn reverse_complement(&self) -> Self {
        self.complement().reverse()
    }

    /// DNA to RNA: every T becomes U.
    pub fn transcribe(&self) -> Self {
        self.map_bases(transcribe_base)
    }

    /// RNA to DNA: every U becomes T.
    pub fn back_transcribe(&self) -> Self {
        self.map_bases(back_transcribe_base)
    }

    /// Translates with the standard genetic code, keeping stop codons as `*`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bioseq::Seq;
    ///
    /// let seq = Seq::new("ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG");
    /// assert_eq!(seq.translate().to_string(), "MAIVMGR*KGAR*");
    /// ```
    pub fn translate(&self) -> Self {
        self.translate_with(&TranslationOptions::default())
    }

    /// Translates with the standard genetic code.
    ///
    /// DNA and RNA are both accepted (U reads as T). A trailing partial
    /// codon is dropped and unknown codons become `X`. The result is
    /// upper-cased like any constructed sequence, stop symbol included.
    pub fn translate_with(&self, options: &TranslationOptions) -> Self {
        trace!("Translating {} bases with {:?}", self.len(), options);
        Self::new(translate_sequence(&self.sequence, options))
    }

    /// Returns the characters in `start..end` as a new sequence.
    ///
    /// Indices follow the same rules as [`Seq::at`]: negative values count
    /// from the end. Bounds are clamped, and `start >= end` yields an empty
    /// sequence. `end` defaults to the end of the sequence.
    pub fn slice(&self, start: isize, end: Option<isize>) -> Self {
        let len = self.len();
        let from = clamp_index(start, len);
        let to = end.map_or(len, |e| clamp_index(e, len));
        if from >= to {
            return Self::default();
        }
        Self::from_raw(self.sequence.chars().skip(from).take(to - from).collect())
    }

    pub fn to_uppercase(&self) -> Self {
        Self::new(&self.sequence)
    }

    /// Returns a lower-case copy.
    ///
    /// This is the only operation that yields lower-case content; every other
    /// producer returns upper case.
    pub fn to_lowercase(&self) -> Self {
        Self::from_raw(self.sequence.to_lowercase())
    }

    /// Appends `other` to this sequence. No alphabet check is made.
    pub fn concat(&self, other: &Seq) -> Self {
        let mut sequence = String::with_capacity(self.sequence.len() + other.sequence.len());
        sequence.push_str(&self.sequence);
        sequence.push_str(&other.sequence);
        Self::from_raw(sequence)
    }

    pub fn reverse(&self) -> Self {
        Self::from_raw(self.sequence.chars().rev().collect())
    }

    /// Exact string comparison against a string or another sequence.
    pub fn equals<S: AsSeqStr + ?Sized>(&self, other: &S) -> bool {
        self.sequence == other.as_seq_str()
    }

    /// Position of the first occurrence of `pattern`.
    ///
    /// # Errors
    ///
    /// [`SeqError::NotFound`] if `pattern` does not occur.
    pub fn index_of(&self, pattern: &str) -> SeqResult<usize> {
        self.sequence
            .find(pattern)
            .map(|byte| self.char_position(byte))
            .ok_or_else(|| SeqError::NotFound(pattern.to_string()))
    }

    /// Position of the last occurrence of `pattern`.
    ///
    /// # Errors
    ///
    /// [`SeqError::NotFound`] if `pattern` does not occur.
    pub fn last_index_of(&self, pattern: &str) -> SeqResult<usize> {
        self.sequence
            .rfind(pattern)
            .map(|byte| self.char_position(byte))
            .ok_or_else(|| SeqError::NotFound(pattern.to_string()))
    }

    fn char_position(&self, byte: usize) -> usize {
        self.sequence[..byte].chars().count()
    }

    /// Copies the content into an editable buffer.
    pub fn to_mutable(&self) -> MutableSeq {
        MutableSeq::new(self.sequence.clone())
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence)
    }
}

impl From<&str> for Seq {
    fn from(seq: &str) -> Self {
        Self::new(seq)
    }
}

impl From<String> for Seq {
    fn from(seq: String) -> Self {
        Self::new(seq)
    }
}

impl FromStr for Seq {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for Seq {
    fn as_ref(&self) -> &str {
        &self.sequence
    }
}

impl PartialEq<str> for Seq {
    fn eq(&self, other: &str) -> bool {
        self.sequence == other
    }
}

impl PartialEq<&str> for Seq {
    fn eq(&self, other: &&str) -> bool {
        self.sequence == *other
    }
}

impl PartialEq<String> for Seq {
    fn eq(&self, other: &String) -> bool {
        &self.sequence == other
    }
}
