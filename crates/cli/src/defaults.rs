//! Shared default values for command-line arguments.

pub const GENERATIONS: u64 = 1000;
pub const REPORT_EVERY: u64 = 100;
pub const COLOR_SEED: u32 = 42;
