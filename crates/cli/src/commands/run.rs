use anyhow::{Context, Result};
use censim_sim::color::Colorizer;
use censim_sim::simulation::{Simulation, SimulationParams};
use censim_sim::storage::{read_fasta_file, write_color_table, write_fasta_file};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::args::{ParamOverrides, RunArgs};
use crate::printing::{print_parameters, print_summary};

/// Load the parameter file (if any), apply overrides and validate.
pub fn resolve_params(overrides: &ParamOverrides) -> Result<SimulationParams> {
    let mut params = match &overrides.params {
        Some(path) => SimulationParams::from_json_file(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => SimulationParams::default(),
    };
    overrides.apply(&mut params);
    params.validate().context("Invalid simulation parameters")?;
    Ok(params)
}

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    println!("🧬 Censim - Running Simulation");
    println!("============================================");

    let params = resolve_params(&args.overrides)?;

    let mut sim = match &args.from_fasta {
        Some(path) => {
            let units = read_fasta_file(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if units.is_empty() {
                anyhow::bail!("No repeat units found in {}", path.display());
            }
            println!("📂 Loaded {} units from {}", units.len(), path.display());
            Simulation::from_units(units, params, args.seed)
        }
        None => Simulation::new(params, args.seed),
    };

    print_parameters(sim.params(), sim.seed());
    println!("Running {} generations...", args.generations);

    let pb = if args.progress {
        let pb = ProgressBar::new(args.generations);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let report_line = |line: String| match &pb {
        Some(pb) => pb.println(line),
        None => println!("{line}"),
    };

    for _ in 0..args.generations {
        let report = sim.step();
        if !report.advanced {
            break;
        }

        if args.report_every > 0 && report.generation % args.report_every == 0 {
            report_line(sim.summary().to_string());
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
        if report.collapsed {
            report_line(format!(
                "⚠️  Array collapsed at generation {} ({} units)",
                report.generation,
                sim.array().len()
            ));
            break;
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    println!("\n✓ Simulation complete!");
    print_summary(&sim.summary());

    if let Some(path) = &args.fasta {
        write_fasta_file(sim.array(), path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\n💾 Wrote {} units to {}", sim.array().len(), path.display());
    }

    if let Some(path) = &args.colors {
        export_colors(&sim, args.color_seed, path)?;
        println!("🎨 Wrote color table to {}", path.display());
    }

    Ok(())
}

fn export_colors(sim: &Simulation, color_seed: u32, path: &Path) -> Result<()> {
    let mut colorizer = Colorizer::new(color_seed);
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_color_table(sim.array(), &mut colorizer, &mut writer)?;
    writer.flush()?;
    log::debug!(
        "Color cache holds {} of {} slots",
        colorizer.cache_len(),
        colorizer.cache_capacity()
    );
    Ok(())
}
