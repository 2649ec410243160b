//! Tractor CLI - reclassification of invalid bundles in tractography submissions
//!
//! Subcommands:
//! - `reclassify`: regroup a submission's IC, NC and VCWP streamlines into
//!   invalid bundles and write the updated score record
//! - `check-versions`: verify a directory of score records shares one
//!   algorithm version

use anyhow::Result;
use clap::{Parser, Subcommand};

mod check_versions;
mod reclassify;

#[derive(Parser, Debug)]
#[command(name = "tractor")]
#[command(about = "Reclassify invalid connections of tractography submissions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Regroup IC, NC and VCWP streamlines into invalid bundles and update the scores
    Reclassify(reclassify::ReclassifyArgs),
    /// Check that every score record in a directory has the same algo_version
    #[command(name = "check-versions")]
    CheckVersions(check_versions::CheckVersionsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Reclassify(args) => reclassify::run(args),
        Commands::CheckVersions(args) => check_versions::run(args),
    }
}
