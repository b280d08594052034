//! # bioseq - Biological Sequence Toolkit
//!
//! In-memory DNA, RNA and protein sequences with the usual string-level
//! transforms.
//!
//! ## Architecture
//!
//! - `seq`: [`Seq`], the immutable sequence; every operation returns a new value
//! - `mutable_seq`: [`MutableSeq`], an editable buffer (`set`, `remove`, `reverse`)
//! - `functions`: free functions accepting a string or a sequence
//! - `nucleotide`: complement and transcription tables
//! - `genetic_code`: the standard codon table and translation
//! - `error`: [`SeqError`] for the operations that can fail
//!
//! ## Example
//!
//! ```
//! use bioseq::{Seq, TranslationOptions};
//!
//! let seq = Seq::new("atggccattgtaatgggccgctgaaagggtgcccgatag");
//! assert_eq!(seq.slice(0, Some(6)).to_string(), "ATGGCC");
//! assert_eq!(seq.translate_with(&TranslationOptions::default().to_stop(true)), "MAIVMGR");
//! assert_eq!(seq.index_of("TGA").unwrap(), 21);
//! ```

pub mod error;
pub mod functions;
pub mod genetic_code;
pub mod mutable_seq;
pub mod nucleotide;
pub mod seq;

pub use error::{SeqError, SeqResult};
pub use functions::{
    back_transcribe, reverse_complement, transcribe, translate, translate_with, AsSeqStr,
};
pub use genetic_code::TranslationOptions;
pub use mutable_seq::MutableSeq;
pub use seq::Seq;
