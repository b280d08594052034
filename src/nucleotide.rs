//! Per-base nucleotide tables.
//!
//! This module provides:
//! - Watson-Crick complement (A<->T, C<->G, with U -> A for RNA input)
//! - Transcription (T -> U) and back-transcription (U -> T)
//!
//! Characters outside the tables pass through unchanged, so ambiguity codes,
//! gaps and protein letters survive every transform.

/// Complements a single base.
///
/// Expects upper-case input; anything not in {A, C, G, T, U} is returned as is.
#[inline]
pub const fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        'U' => 'A',
        other => other,
    }
}

/// DNA to RNA for a single base.
#[inline]
pub const fn transcribe_base(base: char) -> char {
    if base == 'T' {
        'U'
    } else {
        base
    }
}

/// RNA to DNA for a single base.
#[inline]
pub const fn back_transcribe_base(base: char) -> char {
    if base == 'U' {
        'T'
    } else {
        base
    }
}
