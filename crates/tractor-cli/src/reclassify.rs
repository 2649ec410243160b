use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;

use tractor_core::config::{CliOverrides, TractorConfig};
use tractor_core::tracing::init_tracing;
use tractor_core::TractorErrorCode;
use tractor_io::{default_config_root, run_submission, RunRequest};

#[derive(Args, Debug)]
pub struct ReclassifyArgs {
    /// IC container `<id>_IC.<ext>`; NC and VCWP containers must sit beside it
    pub ic_container: PathBuf,

    /// Score record of the submission
    pub score_file: PathBuf,

    /// Base directory holding masks/rois/ and masks/wm.json
    pub base_dir: PathBuf,

    /// Existing output directory; segmented/ and scores/ are created inside
    pub out_dir: PathBuf,

    /// Export one container per invalid bundle plus the NC pool
    #[arg(long)]
    pub save_tracts: bool,

    /// Overwrite an existing output score file
    #[arg(short, long)]
    pub force: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory searched for tractor.toml (default: working directory)
    #[arg(long)]
    pub config_root: Option<PathBuf>,

    /// Minimum arclength for a curve to be clustered (default: 35)
    #[arg(long)]
    pub length_threshold: Option<f32>,

    /// QuickBundles distance threshold (default: 20)
    #[arg(long)]
    pub distance_threshold: Option<f32>,

    /// Points per resampled curve (default: 12)
    #[arg(long)]
    pub resample_points: Option<usize>,

    /// Shuffle seed (default: 2)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ReclassifyArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            length_threshold: self.length_threshold,
            shuffle_seed: self.seed,
            distance_threshold: self.distance_threshold,
            resample_points: self.resample_points,
            save_tracts: self.save_tracts.then_some(true),
        }
    }
}

pub fn run(args: ReclassifyArgs) -> Result<()> {
    init_tracing(args.verbose);

    let root = args.config_root.clone().unwrap_or_else(default_config_root);
    let config = TractorConfig::load(&root, Some(&args.overrides()))
        .map_err(|e| anyhow!(e.coded_string()))
        .with_context(|| format!("Failed to load configuration from {}", root.display()))?;

    let request = RunRequest {
        ic_container: args.ic_container,
        score_file: args.score_file,
        base_dir: args.base_dir,
        out_dir: args.out_dir,
        config,
        force: args.force,
    };
    let report = run_submission(&request)
        .map_err(|e| anyhow!(e.coded_string()))
        .with_context(|| format!("Reclassification of {} failed", request.ic_container.display()))?;

    println!("Submission:      {}", report.submission_id);
    println!("Invalid bundles: {}", report.scores.ib);
    println!("IC:              {:.4}", report.scores.ic);
    println!("NC:              {:.4}", report.scores.nc);
    if report.ambiguous_groups > 0 {
        println!("Ambiguous votes: {}", report.ambiguous_groups);
    }
    for path in &report.exports {
        println!("Exported:        {}", path.display());
    }
    println!("Scores written:  {}", report.score_path.display());
    Ok(())
}
