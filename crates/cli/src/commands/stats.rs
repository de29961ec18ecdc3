use anyhow::{Context, Result};
use censim_sim::analysis::{count_unique, diversity, exact_unique_count, unit_heterozygosity};
use censim_sim::genome::RepeatArray;
use censim_sim::storage::read_fasta_file;
use serde_json::json;
use std::path::Path;

/// Report size and diversity of an array stored as FASTA.
pub fn show_stats(path: &Path, as_json: bool) -> Result<()> {
    let units =
        read_fasta_file(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let array = RepeatArray::from_units(units);

    let size = array.len();
    let unique = count_unique(&array);
    let exact = exact_unique_count(&array);
    let div = diversity(&array);
    let heterozygosity = unit_heterozygosity(&array);

    if as_json {
        let report = json!({
            "file": path.display().to_string(),
            "array_size": size,
            "unique": unique,
            "unique_exact": exact,
            "diversity": div,
            "heterozygosity": heterozygosity,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("📊 Array Statistics: {}", path.display());
    println!("  • Array Size: {size} units");
    println!("  • Unique (hash): {unique}");
    println!("  • Unique (exact): {exact}");
    println!("  • Diversity: {div:.4}");
    println!("  • Heterozygosity: {heterozygosity:.4}");
    Ok(())
}
