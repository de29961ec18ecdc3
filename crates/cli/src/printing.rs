use censim_sim::simulation::{ArraySummary, SimulationParams};

pub fn print_parameters(params: &SimulationParams, seed: u32) {
    println!("\n📋 Simulation Configuration");
    println!("  • Initial Size: {} units [-n, --initial-size]", params.initial_size);
    println!("  • Random Seed: {seed} [--seed]");
    if params.uses_default_monomer() {
        println!("  • Monomer: CEN178 (default)");
    } else {
        println!("  • Monomer: custom");
    }

    println!("\n⚡ Mutation Parameters");
    println!("  • SNP Rate: {} /gen [--snp-rate]", params.snp_rate);
    println!("  • Indel Rate: {} /gen [--indel-rate]", params.indel_rate);
    println!("  • Indel Size Mean: {} units [--indel-size]", params.indel_size_lambda);
    println!("  • Count Model: {:?} [--count-dist]", params.count_distribution);
    println!("    - Dispersion: {} [--dispersion]", params.nb_dispersion);
    println!("  • Size Model: {:?} [--size-dist]", params.size_distribution);
    println!("    - Power-law Alpha: {} [--alpha]", params.power_law_alpha);
    println!("  • Duplication Bias: {} [--dup-bias]", params.dup_bias);

    println!("\n📏 Size Control");
    println!(
        "  • Bounds: [{}, {}] units [--min-size, --max-size]",
        params.min_array_size, params.max_array_size
    );
    if params.bounding_enabled {
        println!("  • Hard Bounding: Enabled [--no-bounding]");
    } else {
        println!("  • Hard Bounding: Disabled");
    }
    if params.elasticity > 0.0 {
        println!(
            "  • Elastic Pull: {} toward {} units [--elasticity, --target-size]",
            params.elasticity, params.target_size
        );
    } else {
        println!("  • Elastic Pull: Disabled [--elasticity]");
    }
    println!();
}

pub fn print_summary(summary: &ArraySummary) {
    println!("\n📊 Final State");
    println!("  • Generation: {}", summary.generation);
    println!("  • Array Size: {} units", summary.array_size);
    println!("  • Unique Units: {}", summary.unique);
    println!("  • Diversity: {:.4}", summary.diversity);
    println!(
        "  • Events: {} SNPs, {} duplications, {} deletions",
        summary.snp_count, summary.dup_count, summary.del_count
    );
    if summary.collapsed {
        println!("  • Status: ⚠️  Collapsed");
    } else {
        println!("  • Status: Active");
    }
}
