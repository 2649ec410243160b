use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;

use tractor_core::tracing::init_tracing;
use tractor_core::TractorErrorCode;
use tractor_io::check_versions;

#[derive(Args, Debug)]
pub struct CheckVersionsArgs {
    /// Directory of score records (*.json)
    pub scores_dir: PathBuf,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(args: CheckVersionsArgs) -> Result<()> {
    init_tracing(args.verbose);

    let version = check_versions(&args.scores_dir)
        .map_err(|e| anyhow!(e.coded_string()))
        .with_context(|| format!("Version check of {} failed", args.scores_dir.display()))?;
    println!("All score records use algo_version {version}");
    Ok(())
}
