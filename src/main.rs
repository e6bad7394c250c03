// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Command-line interface for generating many-body cluster POSCAR files.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use manybody_rs::system::System;

/// Split a structure into monomers and write a POSCAR file for every
/// combination of monomers up to the requested order.
#[derive(Debug, Parser)]
#[command(name = "manybody", version, about)]
struct Args {
    /// Structure input path (POSCAR/CONTCAR format).
    #[arg(short = 's', long, default_value = "CONTCAR")]
    structure: PathBuf,

    /// Monomer definition path: one monomer per line as comma-separated
    /// atom indices, `#` starts a comment.
    #[arg(short, long, default_value = "monomers")]
    monomers: PathBuf,

    /// Highest cluster order to generate (default: no limit, i.e. the
    /// full decomposition).
    #[arg(short, long)]
    body_order: Option<usize>,

    /// Directory into which the cluster files are written.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut system = System::from_file(&args.structure)?;
    system.read_monomers(&args.monomers)?;

    let n_written = system.write_clusters(&args.output_dir, args.body_order.unwrap_or(0))?;

    println!(
        "Wrote {} cluster files for {} monomers into `{}`.",
        n_written,
        system.get_n_monomers(),
        args.output_dir.display()
    );

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
