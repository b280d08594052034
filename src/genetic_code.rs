//! Genetic code and translation logic.
//!
//! This module provides:
//! - The NCBI standard genetic code (translation table 1)
//! - Codon to amino acid translation
//! - Whole-sequence translation with configurable stop handling

use log::debug;

/// Amino acids of the standard code in NCBI order: TTT, TTC, TTA, TTG, TCT, ...
/// (base 1, base 2, base 3 each iterating T, C, A, G).
const STANDARD_NCBIEAA: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Symbol the codon table uses for termination codons.
pub const STOP: char = '*';

/// Symbol produced for codons that are not in the table.
pub const UNKNOWN: char = 'X';

/// Options controlling [`translate_sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationOptions {
    /// Halt at the first stop codon, leaving it and everything after it out.
    pub to_stop: bool,
    /// Character emitted for stop codons when `to_stop` is false.
    pub stop_symbol: char,
}

impl TranslationOptions {
    /// Sets whether translation halts at the first stop codon.
    pub fn to_stop(mut self, to_stop: bool) -> Self {
        self.to_stop = to_stop;
        self
    }

    /// Sets the character emitted for stop codons.
    pub fn stop_symbol(mut self, stop_symbol: char) -> Self {
        self.stop_symbol = stop_symbol;
        self
    }
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            to_stop: false,
            stop_symbol: STOP,
        }
    }
}

/// Position of a base in NCBI order. U is read as T so RNA translates directly.
#[inline]
fn base_index(base: char) -> Option<usize> {
    match base.to_ascii_uppercase() {
        'T' | 'U' => Some(0),
        'C' => Some(1),
        'A' => Some(2),
        'G' => Some(3),
        _ => None,
    }
}

/// Translates a single codon to an amino acid.
///
/// # Rules:
/// - Bases are case-insensitive and U is treated as T
/// - Stop codons (TAA, TAG, TGA) return [`STOP`]
/// - Codons with any other character (N, R, gaps...) return [`UNKNOWN`]
pub fn translate_codon(codon: [char; 3]) -> char {
    let mut idx = 0;
    for base in codon {
        match base_index(base) {
            Some(i) => idx = idx * 4 + i,
            None => return UNKNOWN,
        }
    }
    STANDARD_NCBIEAA[idx] as char
}

/// Returns true if the codon is a termination codon.
pub fn is_stop_codon(codon: [char; 3]) -> bool {
    translate_codon(codon) == STOP
}

/// Translates an entire nucleotide sequence to amino acids.
///
/// Codons are read from position 0 without overlap; a trailing partial codon
/// of one or two bases is not translated.
pub fn translate_sequence(sequence: &str, options: &TranslationOptions) -> String {
    let chars: Vec<char> = sequence.chars().collect();
    let mut protein = String::with_capacity(chars.len() / 3);

    for (n, codon) in chars.chunks_exact(3).enumerate() {
        let aa = translate_codon([codon[0], codon[1], codon[2]]);
        if aa == STOP {
            if options.to_stop {
                debug!("Stop codon at position {}, halting translation", n * 3);
                break;
            }
            protein.push(options.stop_symbol);
        } else {
            protein.push(aa);
        }
    }

    protein
}
