use censim_sim::random::{CountDistribution, SizeDistribution};
use censim_sim::simulation::SimulationParams;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::defaults;

/// Event-count model selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountModel {
    Poisson,
    NegativeBinomial,
}

impl From<CountModel> for CountDistribution {
    fn from(model: CountModel) -> Self {
        match model {
            CountModel::Poisson => CountDistribution::Poisson,
            CountModel::NegativeBinomial => CountDistribution::NegativeBinomial,
        }
    }
}

/// Indel-size model selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeModel {
    Poisson,
    Geometric,
    PowerLaw,
}

impl From<SizeModel> for SizeDistribution {
    fn from(model: SizeModel) -> Self {
        match model {
            SizeModel::Poisson => SizeDistribution::Poisson,
            SizeModel::Geometric => SizeDistribution::Geometric,
            SizeModel::PowerLaw => SizeDistribution::PowerLaw,
        }
    }
}

/// Per-field overrides applied on top of the default or loaded parameters.
#[derive(Args, Debug, Default, Clone)]
pub struct ParamOverrides {
    /// Parameter file (JSON); missing fields use defaults
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Number of monomer copies in the starting array
    #[arg(short = 'n', long)]
    pub initial_size: Option<usize>,

    /// Expected SNPs per generation (whole array)
    #[arg(long)]
    pub snp_rate: Option<f64>,

    /// Expected indel events per generation
    #[arg(long)]
    pub indel_rate: Option<f64>,

    /// Mean indel size in units
    #[arg(long)]
    pub indel_size: Option<f64>,

    /// Collapse threshold and lower hard bound
    #[arg(long)]
    pub min_size: Option<usize>,

    /// Upper hard bound
    #[arg(long)]
    pub max_size: Option<usize>,

    /// Disable hard bounding of indel events
    #[arg(long)]
    pub no_bounding: bool,

    /// Target size for elastic bounding
    #[arg(long)]
    pub target_size: Option<usize>,

    /// Strength of the pull toward the target size (0 disables it)
    #[arg(long)]
    pub elasticity: Option<f64>,

    /// Baseline probability that an indel is a duplication
    #[arg(long)]
    pub dup_bias: Option<f64>,

    /// Model for per-generation event counts
    #[arg(long, value_enum)]
    pub count_dist: Option<CountModel>,

    /// Negative-binomial dispersion
    #[arg(long)]
    pub dispersion: Option<f64>,

    /// Model for indel sizes
    #[arg(long, value_enum)]
    pub size_dist: Option<SizeModel>,

    /// Power-law tail exponent
    #[arg(long)]
    pub alpha: Option<f64>,
}

impl ParamOverrides {
    /// Write every given override into `params`.
    pub fn apply(&self, params: &mut SimulationParams) {
        if let Some(v) = self.initial_size {
            params.initial_size = v;
        }
        if let Some(v) = self.snp_rate {
            params.snp_rate = v;
        }
        if let Some(v) = self.indel_rate {
            params.indel_rate = v;
        }
        if let Some(v) = self.indel_size {
            params.indel_size_lambda = v;
        }
        if let Some(v) = self.min_size {
            params.min_array_size = v;
        }
        if let Some(v) = self.max_size {
            params.max_array_size = v;
        }
        if self.no_bounding {
            params.bounding_enabled = false;
        }
        if let Some(v) = self.target_size {
            params.target_size = v;
        }
        if let Some(v) = self.elasticity {
            params.elasticity = v;
        }
        if let Some(v) = self.dup_bias {
            params.dup_bias = v;
        }
        if let Some(v) = self.count_dist {
            params.count_distribution = v.into();
        }
        if let Some(v) = self.dispersion {
            params.nb_dispersion = v;
        }
        if let Some(v) = self.size_dist {
            params.size_distribution = v.into();
        }
        if let Some(v) = self.alpha {
            params.power_law_alpha = v;
        }
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of generations
    #[arg(short = 'g', long, default_value_t = defaults::GENERATIONS)]
    pub generations: u64,

    /// Random seed (random if omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    #[command(flatten)]
    pub overrides: ParamOverrides,

    /// Print a status line every N generations (0 disables)
    #[arg(long, default_value_t = defaults::REPORT_EVERY)]
    pub report_every: u64,

    /// Start from the units in this FASTA file instead of the monomer
    #[arg(long)]
    pub from_fasta: Option<PathBuf>,

    /// Write the final array as FASTA
    #[arg(long)]
    pub fasta: Option<PathBuf>,

    /// Write a per-unit color table (CSV)
    #[arg(long)]
    pub colors: Option<PathBuf>,

    /// Seed for the colorizer
    #[arg(long, default_value_t = defaults::COLOR_SEED)]
    pub color_seed: u32,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}
