//! Host binding layer for the `affine_align` library: adapts the three
//! Facade operations (`score`, `align`, `qalign`) to argv.
//!
//! Grounded on the `other_examples` FASTA-reading CLI
//! (`ScottSauers-Needleman-Wunsch-Aligner/src/aligner.rs`) for the
//! `clap`-derive shape and FASTA-file handling, and on BioShell's binaries
//! (e.g. `bioshell-hbonds/src/bin/dssp.rs`) for pairing `clap` with
//! `log`/`env_logger` initialization. Contains no alignment logic of its
//! own.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::info;

use affine_align::{align, qalign, score, Scoring};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Score,
    Align,
    Qalign,
}

/// Global pairwise sequence alignment under an affine gap-penalty model.
#[derive(Debug, Parser)]
#[command(name = "align", version, about)]
struct Args {
    /// First sequence, or a path to a FASTA file if --fasta is set.
    seq_a: String,

    /// Second sequence, or a path to a FASTA file if --fasta is set.
    seq_b: String,

    /// Score for a matching byte pair.
    #[arg(short, long, allow_hyphen_values = true)]
    r#match: i32,

    /// Score for a mismatching byte pair (typically negative).
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    mismatch: i32,

    /// Penalty for opening a gap (typically negative).
    #[arg(short, long, allow_hyphen_values = true)]
    gap: i32,

    /// Penalty for extending an open gap. Defaults to `gap` (the
    /// linear-gap model) when omitted.
    #[arg(short = 'e', long, allow_hyphen_values = true)]
    gap_extend: Option<i32>,

    /// Which Facade entry point to run.
    #[arg(short = 'o', long, value_enum, default_value_t = Mode::Align)]
    mode: Mode,

    /// Treat seq_a/seq_b as paths to single-record FASTA files.
    #[arg(long)]
    fasta: bool,
}

fn read_sequence(arg: &str, fasta: bool) -> Result<Vec<u8>, std::io::Error> {
    if !fasta {
        return Ok(arg.as_bytes().to_vec());
    }
    let contents = fs::read_to_string(Path::new(arg))?;
    let seq: String = contents
        .lines()
        .filter(|line| !line.starts_with('>'))
        .collect();
    Ok(seq.into_bytes())
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let a = read_sequence(&args.seq_a, args.fasta)?;
    let b = read_sequence(&args.seq_b, args.fasta)?;
    let gap_extend = args.gap_extend.unwrap_or(args.gap);
    let scoring = Scoring::try_new(args.r#match, args.mismatch, args.gap, gap_extend)?;

    info!(
        "aligning {} bytes against {} bytes in {:?} mode",
        a.len(),
        b.len(),
        args.mode
    );

    let output = match args.mode {
        Mode::Score => score(&a, &b, &scoring).to_string(),
        Mode::Align => {
            let (aligned_a, aligned_b, s) = align(&a, &b, &scoring)?;
            format_alignment(&aligned_a, &aligned_b, s)
        }
        Mode::Qalign => {
            let (aligned_a, aligned_b, s) = qalign(&a, &b, &scoring)?;
            format_alignment(&aligned_a, &aligned_b, s)
        }
    };
    Ok(output)
}

fn format_alignment(aligned_a: &[u8], aligned_b: &[u8], score: i32) -> String {
    format!(
        "{}\n{}\nscore: {score}",
        String::from_utf8_lossy(aligned_a),
        String::from_utf8_lossy(aligned_b),
    )
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
