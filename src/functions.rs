//! Convenience functions working on plain strings or sequences.
//!
//! Each function accepts anything implementing [`AsSeqStr`], builds a [`Seq`]
//! from it (so input is upper-cased first) and returns the result as a
//! `String`.
//!
//! ```
//! use bioseq::{reverse_complement, translate, Seq};
//!
//! assert_eq!(reverse_complement("atgc"), "GCAT");
//! assert_eq!(translate(&Seq::new("ATGGCC")), "MA");
//! ```

use crate::genetic_code::TranslationOptions;
use crate::mutable_seq::MutableSeq;
use crate::seq::Seq;

/// Anything that can be read as a sequence string.
pub trait AsSeqStr {
    fn as_seq_str(&self) -> &str;
}

impl AsSeqStr for str {
    fn as_seq_str(&self) -> &str {
        self
    }
}

impl AsSeqStr for String {
    fn as_seq_str(&self) -> &str {
        self
    }
}

impl AsSeqStr for Seq {
    fn as_seq_str(&self) -> &str {
        self.as_str()
    }
}

impl AsSeqStr for MutableSeq {
    fn as_seq_str(&self) -> &str {
        self.as_str()
    }
}

impl<T: AsSeqStr + ?Sized> AsSeqStr for &T {
    fn as_seq_str(&self) -> &str {
        (**self).as_seq_str()
    }
}

fn to_seq<S: AsSeqStr + ?Sized>(seq: &S) -> Seq {
    Seq::new(seq.as_seq_str())
}

/// Reverse complement of `seq`.
pub fn reverse_complement<S: AsSeqStr + ?Sized>(seq: &S) -> String {
    to_seq(seq).reverse_complement().into_string()
}

/// DNA to RNA (T -> U).
pub fn transcribe<S: AsSeqStr + ?Sized>(seq: &S) -> String {
    to_seq(seq).transcribe().into_string()
}

/// RNA to DNA (U -> T).
pub fn back_transcribe<S: AsSeqStr + ?Sized>(seq: &S) -> String {
    to_seq(seq).back_transcribe().into_string()
}

/// Translates with the default options (stop codons kept as `*`).
pub fn translate<S: AsSeqStr + ?Sized>(seq: &S) -> String {
    to_seq(seq).translate().into_string()
}

/// Translates with explicit [`TranslationOptions`].
pub fn translate_with<S: AsSeqStr + ?Sized>(seq: &S, options: &TranslationOptions) -> String {
    to_seq(seq).translate_with(options).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_strings_and_sequences() {
        let raw = "ATGC";
        let owned = String::from("ATGC");
        let seq = Seq::new("ATGC");
        let buffer = MutableSeq::new("atgc");

        assert_eq!(reverse_complement(raw), "GCAT");
        assert_eq!(reverse_complement(&owned), "GCAT");
        assert_eq!(reverse_complement(&seq), "GCAT");
        assert_eq!(reverse_complement(&buffer), "GCAT");
    }

    #[test]
    fn test_transcription_wrappers() {
        assert_eq!(transcribe("atgc"), "AUGC");
        assert_eq!(back_transcribe("AUGC"), "ATGC");
        assert_eq!(transcribe(&back_transcribe("UUAG")), "UUAG");
    }

    #[test]
    fn test_translate_wrappers() {
        let orf = "ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG";
        assert_eq!(translate(orf), "MAIVMGR*KGAR*");
        assert_eq!(
            translate_with(orf, &TranslationOptions::default().to_stop(true)),
            "MAIVMGR"
        );
    }

    #[test]
    fn test_wrappers_match_methods() {
        let seq = Seq::new("GATCGATGGGCCTATATAGGATCGAAAATCGC");
        assert_eq!(reverse_complement(&seq), seq.reverse_complement().to_string());
        assert_eq!(transcribe(&seq), seq.transcribe().to_string());
        assert_eq!(translate(&seq), seq.translate().to_string());
    }
}
