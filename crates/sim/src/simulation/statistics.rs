//! Run counters and snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cumulative counters for one run.
///
/// Updated by every generation and zeroed only by `Simulation::reset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    pub generation: u64,
    pub snp_count: u64,
    pub dup_count: u64,
    pub del_count: u64,
    /// Terminal: once set, stepping is a no-op until reset.
    pub collapsed: bool,
}

impl SimStats {
    pub(crate) fn record(&mut self, report: &GenerationReport) {
        self.snp_count += report.snps;
        self.dup_count += report.duplications;
        self.del_count += report.deletions;
    }
}

/// What a single call to `Simulation::step` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Generation number after the step (unchanged if nothing ran).
    pub generation: u64,
    pub snps: u64,
    pub duplications: u64,
    pub deletions: u64,
    /// Indel events drawn but not applied.
    pub skipped: u64,
    /// The step ran at all (false once the array has collapsed).
    pub advanced: bool,
    /// The array collapsed during this step.
    pub collapsed: bool,
}

/// Point-in-time summary of the array and its counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArraySummary {
    pub generation: u64,
    pub array_size: usize,
    /// Approximate (hash-based) distinct unit count.
    pub unique: usize,
    pub diversity: f64,
    pub snp_count: u64,
    pub dup_count: u64,
    pub del_count: u64,
    pub collapsed: bool,
}

impl fmt::Display for ArraySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gen {}: size={}, unique={}, diversity={:.4}, snps={}, dups={}, dels={}",
            self.generation,
            self.array_size,
            self.unique,
            self.diversity,
            self.snp_count,
            self.dup_count,
            self.del_count
        )?;
        if self.collapsed {
            write!(f, " [collapsed]")?;
        }
        Ok(())
    }
}
