//! Simulation engine for tandem-array evolution.
//!
//! The engine owns the array, the parameter record, the cumulative counters and
//! its own random generator. A generation runs the substitution phase and then
//! the indel phase; once the array shrinks below `min_array_size` the run is
//! collapsed and further steps do nothing until [`Simulation::reset`].

use crate::analysis::uniqueness;
use crate::base::RepeatUnit;
use crate::evolution::{IndelModel, SubstitutionModel};
use crate::genome::RepeatArray;
use crate::random::Xorshift32;
use crate::simulation::{ArraySummary, GenerationReport, SimStats, SimulationParams};
use log::{debug, info};
use std::collections::HashMap;

/// Main simulation engine.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Current repeat array
    array: RepeatArray,
    /// Parameters, re-read every generation
    params: SimulationParams,
    /// Cumulative counters
    stats: SimStats,
    /// Evolution stream; never shared with the colorizer
    rng: Xorshift32,
    /// Seed the generator was created from
    seed: u32,
}

impl Simulation {
    /// Create a simulation with default parameters and `initial_size` copies
    /// of the default monomer.
    ///
    /// # Arguments
    /// * `initial_size` - Number of units in the fresh array (also used by `reset`)
    /// * `seed` - Generator seed; `None` draws one from the OS-seeded thread RNG
    pub fn init(initial_size: usize, seed: Option<u32>) -> Self {
        Self::new(SimulationParams::with_initial_size(initial_size), seed)
    }

    /// Create a simulation whose array is `params.initial_size` copies of
    /// `params.monomer`.
    pub fn new(params: SimulationParams, seed: Option<u32>) -> Self {
        let array = fresh_array(&params);
        Self::from_parts(array, params, seed)
    }

    /// Start from externally supplied units (for example a FASTA file).
    ///
    /// `reset` still rebuilds from the parameter record, not from `units`.
    pub fn from_units(units: Vec<RepeatUnit>, params: SimulationParams, seed: Option<u32>) -> Self {
        Self::from_parts(RepeatArray::from_units(units), params, seed)
    }

    fn from_parts(array: RepeatArray, params: SimulationParams, seed: Option<u32>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        debug!(
            "Initialized simulation: {} units, seed {}",
            array.len(),
            seed
        );
        Self {
            array,
            params,
            stats: SimStats::default(),
            rng: Xorshift32::new(seed),
            seed,
        }
    }

    /// Rebuild the array from the parameter record and zero the counters.
    ///
    /// Parameters are kept and the generator continues its current stream;
    /// it is not reseeded.
    pub fn reset(&mut self) {
        self.array = fresh_array(&self.params);
        self.stats = SimStats::default();
        debug!("Reset simulation to {} units", self.array.len());
    }

    /// Advance one generation.
    ///
    /// A collapsed run is left untouched and the returned report has
    /// `advanced == false`.
    pub fn step(&mut self) -> GenerationReport {
        if self.stats.collapsed {
            return GenerationReport {
                generation: self.stats.generation,
                ..Default::default()
            };
        }

        self.stats.generation += 1;

        let snps = SubstitutionModel::from_params(&self.params).apply(&mut self.array, &mut self.rng);
        let tally = IndelModel::from_params(&self.params).apply(&mut self.array, &mut self.rng);

        let collapsed = tally.emptied || self.array.len() < self.params.min_array_size;
        let report = GenerationReport {
            generation: self.stats.generation,
            snps,
            duplications: tally.duplications,
            deletions: tally.deletions,
            skipped: tally.skipped,
            advanced: true,
            collapsed,
        };
        self.stats.record(&report);

        if collapsed {
            self.stats.collapsed = true;
            info!(
                "Array collapsed at generation {} ({} units, minimum {})",
                self.stats.generation,
                self.array.len(),
                self.params.min_array_size
            );
        }
        report
    }

    /// Run up to `generations` generations, stopping early on collapse.
    ///
    /// # Returns
    /// The number of generations actually executed.
    pub fn run(&mut self, generations: u64) -> u64 {
        let mut executed = 0;
        for _ in 0..generations {
            if self.stats.collapsed {
                break;
            }
            self.step();
            executed += 1;
        }
        executed
    }

    #[inline]
    pub fn array(&self) -> &RepeatArray {
        &self.array
    }

    #[inline]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Mutable access to the parameters; changes take effect next generation.
    #[inline]
    pub fn params_mut(&mut self) -> &mut SimulationParams {
        &mut self.params
    }

    #[inline]
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.stats.generation
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.stats.collapsed
    }

    /// Seed the generator was created from.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Approximate distinct-unit count (hash based).
    pub fn count_unique(&self) -> usize {
        uniqueness::count_unique(&self.array)
    }

    /// `count_unique / array size`, or 0 for an empty array.
    pub fn diversity(&self) -> f64 {
        uniqueness::diversity(&self.array)
    }

    /// Exact distinct units with their copy numbers.
    pub fn unique_sequences(&self) -> HashMap<&RepeatUnit, usize> {
        uniqueness::unique_sequences(&self.array)
    }

    pub fn exact_unique_count(&self) -> usize {
        uniqueness::exact_unique_count(&self.array)
    }

    /// Snapshot of the array and counters.
    pub fn summary(&self) -> ArraySummary {
        let unique = self.count_unique();
        let array_size = self.array.len();
        ArraySummary {
            generation: self.stats.generation,
            array_size,
            unique,
            diversity: if array_size == 0 {
                0.0
            } else {
                unique as f64 / array_size as f64
            },
            snp_count: self.stats.snp_count,
            dup_count: self.stats.dup_count,
            del_count: self.stats.del_count,
            collapsed: self.stats.collapsed,
        }
    }
}

fn fresh_array(params: &SimulationParams) -> RepeatArray {
    RepeatArray::filled(&params.monomer, params.initial_size)
}
