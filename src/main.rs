//! bioseq - Sequence transforms from the command line
//!
//! ## Usage
//!
//! ```bash
//! bioseq ATGGCCATTGTA reverse-complement
//! bioseq --to-stop ATGGCCATTGTAATGGGCCGCTGA translate
//! echo acgtacgt | bioseq - transcribe --count ACG --json
//! ```
//!
//! Operations are applied left to right; reports (`--count`, `--find`,
//! `--find-last`) are taken on the final sequence.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info, LevelFilter};
use serde::Serialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use bioseq::{Seq, TranslationOptions};

/// Transform to apply to the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Operation {
    /// Complement (A<->T, C<->G)
    Complement,
    /// Reverse complement
    ReverseComplement,
    /// DNA to RNA (T -> U)
    Transcribe,
    /// RNA to DNA (U -> T)
    BackTranscribe,
    /// Translate with the standard genetic code
    Translate,
    /// Reverse the sequence
    Reverse,
    /// Upper case
    Upper,
    /// Lower case
    Lower,
}

impl Operation {
    fn apply(self, seq: &Seq, options: &TranslationOptions) -> Seq {
        match self {
            Operation::Complement => seq.complement(),
            Operation::ReverseComplement => seq.reverse_complement(),
            Operation::Transcribe => seq.transcribe(),
            Operation::BackTranscribe => seq.back_transcribe(),
            Operation::Translate => seq.translate_with(options),
            Operation::Reverse => seq.reverse(),
            Operation::Upper => seq.to_uppercase(),
            Operation::Lower => seq.to_lowercase(),
        }
    }
}

/// bioseq - Apply complement, transcription and translation to a sequence
///
/// Prints the transformed sequence to stdout. Logging goes to stderr.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input sequence. Use "-" to read it from stdin (whitespace is ignored)
    sequence: String,

    /// Operations to apply, in order
    #[arg(value_enum)]
    operations: Vec<Operation>,

    /// Stop translation at the first stop codon
    #[arg(long = "to-stop")]
    to_stop: bool,

    /// Symbol used for stop codons in translated output
    #[arg(long = "stop-symbol", default_value = "*")]
    stop_symbol: char,

    /// Report the number of non-overlapping occurrences of a pattern
    #[arg(long = "count")]
    count: Option<String>,

    /// Report the position of the first occurrence of a pattern
    #[arg(long = "find")]
    find: Option<String>,

    /// Report the position of the last occurrence of a pattern
    #[arg(long = "find-last")]
    find_last: Option<String>,

    /// Print the result as JSON
    #[arg(long = "json")]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Final sequence plus the requested reports.
#[derive(Debug, Serialize)]
struct Report {
    #[serde(flatten)]
    seq: Seq,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_index: Option<usize>,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn read_sequence(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read sequence from stdin")?;
    Ok(content.chars().filter(|c| !c.is_whitespace()).collect())
}

fn build_report(args: &Args, input: &str) -> Result<Report> {
    let options = TranslationOptions::default()
        .to_stop(args.to_stop)
        .stop_symbol(args.stop_symbol);

    let mut seq = Seq::new(input);
    for &op in &args.operations {
        seq = op.apply(&seq, &options);
        debug!("{:?} -> {} characters", op, seq.len());
    }

    let count = args
        .count
        .as_deref()
        .map(|pattern| seq.count(pattern))
        .transpose()
        .context("Cannot count pattern")?;
    let index = args
        .find
        .as_deref()
        .map(|pattern| seq.index_of(pattern))
        .transpose()
        .context("Cannot find pattern")?;
    let last_index = args
        .find_last
        .as_deref()
        .map(|pattern| seq.last_index_of(pattern))
        .transpose()
        .context("Cannot find pattern")?;

    Ok(Report {
        seq,
        count,
        index,
        last_index,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    TermLogger::init(
        log_level(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let input = read_sequence(&args.sequence)?;
    info!(
        "Read {} characters, applying {} operation(s)",
        input.chars().count(),
        args.operations.len()
    );

    let report = build_report(&args, &input)?;

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.seq);
        if let Some(count) = report.count {
            println!("count\t{}", count);
        }
        if let Some(index) = report.index {
            println!("index\t{}", index);
        }
        if let Some(last_index) = report.last_index {
            println!("last_index\t{}", last_index);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("bioseq").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_operations_apply_in_order() {
        let a = args(&["atgc", "reverse-complement", "transcribe"]);
        assert_eq!(
            a.operations,
            vec![Operation::ReverseComplement, Operation::Transcribe]
        );
        let report = build_report(&a, &a.sequence).unwrap();
        assert_eq!(report.seq, "GCAU");
    }

    #[test]
    fn test_translation_options() {
        let orf = "ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG";
        let a = args(&[orf, "translate", "--stop-symbol", "#"]);
        assert_eq!(build_report(&a, orf).unwrap().seq, "MAIVMGR#KGAR#");

        let a = args(&["--to-stop", orf, "translate"]);
        assert_eq!(build_report(&a, orf).unwrap().seq, "MAIVMGR");
    }

    #[test]
    fn test_reports() {
        let a = args(&["AAAAGCAA", "--count", "AA", "--find", "GC", "--find-last", "AA", "--json"]);
        let report = build_report(&a, &a.sequence).unwrap();
        assert_eq!(report.count, Some(3));
        assert_eq!(report.index, Some(4));
        assert_eq!(report.last_index, Some(6));
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"sequence":"AAAAGCAA","count":3,"index":4,"last_index":6}"#
        );
    }

    #[test]
    fn test_missing_pattern_is_an_error() {
        let a = args(&["ACGT", "--find", "TTT"]);
        assert!(build_report(&a, &a.sequence).is_err());

        let a = args(&["ACGT", "--find-last", "GA"]);
        assert!(build_report(&a, &a.sequence).is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }
}
