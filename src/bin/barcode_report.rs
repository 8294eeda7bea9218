//! Barcode Report: Summary of a Persistence Barcode File
//!
//! Reads a standard or Gudhi-style barcode file and prints, per
//! dimension, the number of intervals, the birth/death ranges and the
//! persistence statistics. With `--emit` the barcode is written to
//! stdout in the standard two-column format instead, which converts a
//! Gudhi file into a standard one.
//!
//! ## Usage
//!
//! ```text
//! barcode_report h0.txt
//! barcode_report diagram.pers --format gudhi --dimension 1
//! barcode_report diagram.pers --format gudhi --all-dimensions
//! barcode_report diagram.pers --format gudhi --dimension 0 --emit > h0.txt
//! ```
//!
//! `RUST_LOG=debug` traces every accepted and skipped record.

use std::io::stdout;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use tda_barcode_io::{
    read_gudhi_diagram,
    read_gudhi_file_with,
    read_standard_file_with,
    write_standard,
    Barcode,
    ReadOptions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Standard,
    Gudhi,
}

#[derive(Debug, Parser)]
#[command(name = "barcode_report", about = "Summarise a persistence barcode file")]
struct Args {
    /// Barcode file to read
    file: PathBuf,

    /// Layout of the file
    #[arg(long, value_enum, default_value_t = Format::Standard)]
    format: Format,

    /// Dimension to keep (Gudhi files only)
    #[arg(long, default_value_t = 0)]
    dimension: usize,

    /// Report every dimension present (Gudhi files only)
    #[arg(long)]
    all_dimensions: bool,

    /// Read malformed values as 0.0 instead of failing
    #[arg(long)]
    lenient: bool,

    /// Drop intervals with birth == death
    #[arg(long)]
    skip_degenerate: bool,

    /// Write the barcode to stdout in standard format instead of a report
    #[arg(long)]
    emit: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode_options = if args.lenient { ReadOptions::lenient() } else { ReadOptions::strict() };
    let options = mode_options.with_skip_degenerate(args.skip_degenerate);

    let barcodes: Vec<(Option<usize>, Barcode)> = match (args.format, args.all_dimensions) {
        (Format::Standard, true) => bail!("--all-dimensions requires --format gudhi"),
        (Format::Standard, false) => {
            let barcode = read_standard_file_with(&args.file, &options)
                .with_context(|| format!("reading {}", args.file.display()))?;
            vec![(None, barcode)]
        }
        (Format::Gudhi, false) => {
            let barcode = read_gudhi_file_with(&args.file, args.dimension, &options)
                .with_context(|| format!("reading {}", args.file.display()))?;
            vec![(Some(args.dimension), barcode)]
        }
        (Format::Gudhi, true) => {
            let diagram = read_gudhi_diagram(&args.file, &options)
                .with_context(|| format!("reading {}", args.file.display()))?;
            diagram.dimensions()
                .into_iter()
                .map(|d| (Some(d), diagram.barcode(d)))
                .collect()
        }
    };

    if args.emit {
        if barcodes.len() > 1 {
            bail!("--emit writes a single barcode; choose one --dimension");
        }
        for (_, barcode) in &barcodes {
            write_standard(stdout().lock(), barcode).context("writing barcode")?;
        }
        return Ok(());
    }

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Barcode Report: {}", args.file.display());
    println!("═══════════════════════════════════════════════════════════════\n");

    if barcodes.is_empty() {
        println!("  No finite intervals found.");
    }

    for (dimension, barcode) in &barcodes {
        print_summary(*dimension, barcode);
    }

    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  Report Complete");
    println!("═══════════════════════════════════════════════════════════════");

    Ok(())
}

fn print_summary(dimension: Option<usize>, barcode: &Barcode) {
    match dimension {
        Some(d) => println!("Dimension {}:", d),
        None => println!("Barcode:"),
    }
    println!("─────────────────────────────────────────────────────────────");
    println!("  Intervals:          {}", barcode.len());

    if let (Some((b_lo, b_hi)), Some((d_lo, d_hi))) = (barcode.birth_range(), barcode.death_range()) {
        println!("  Birth range:        [{:.4}, {:.4}]", b_lo, b_hi);
        println!("  Death range:        [{:.4}, {:.4}]", d_lo, d_hi);
    }

    println!("  Total persistence:  {:.4}", barcode.total_persistence());
    println!("  Mean persistence:   {:.4}", barcode.mean_persistence());
    println!("  Max persistence:    {:.4}", barcode.max_persistence());
    println!();
}
