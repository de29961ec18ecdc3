use assert_cmd::Command;
use censim_sim::base::DEFAULT_MONOMER;
use predicates::prelude::*;
use tempfile::tempdir;

fn censim() -> Command {
    Command::cargo_bin("censim").unwrap()
}

#[test]
fn test_run_reports_progress() {
    censim()
        .args(["run", "--generations", "20", "--seed", "1", "--initial-size", "500"])
        .args(["--report-every", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Censim - Running Simulation"))
        .stdout(predicate::str::contains("Gen 10: size="))
        .stdout(predicate::str::contains("Gen 20: size="))
        .stdout(predicate::str::contains("Simulation complete!"));
}

#[test]
fn test_run_zero_rates_writes_monomer_fasta() {
    let temp = tempdir().unwrap();
    let fasta = temp.path().join("array.fasta");

    censim()
        .args(["run", "-g", "5", "--seed", "3", "-n", "400"])
        .args(["--snp-rate", "0", "--indel-rate", "0"])
        .arg("--fasta")
        .arg(&fasta)
        .assert()
        .success()
        .stdout(predicate::str::contains("Array Size: 400 units"))
        .stdout(predicate::str::contains("Unique Units: 1"));

    let text = std::fs::read_to_string(&fasta).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 800);
    assert_eq!(lines[0], ">1");
    assert_eq!(lines[798], ">400");
    assert!(lines[1].starts_with("AGTATAAGAACTTAAACCGC"));
}

#[test]
fn test_run_collapses_small_array() {
    censim()
        .args(["run", "-g", "50", "--seed", "7", "-n", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Array collapsed at generation 1"))
        .stdout(predicate::str::contains("Collapsed"));
}

#[test]
fn test_run_invalid_override_fails() {
    censim()
        .args(["run", "-g", "5", "--dup-bias", "2.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid simulation parameters"));
}

#[test]
fn test_run_writes_color_table() {
    let temp = tempdir().unwrap();
    let colors = temp.path().join("colors.csv");

    censim()
        .args(["run", "-g", "10", "--seed", "5", "-n", "350", "--color-seed", "9"])
        .arg("--colors")
        .arg(&colors)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote color table"));

    let text = std::fs::read_to_string(&colors).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("index,hash,r,g,b"));
    let first: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(first[0], "1");
    assert_eq!(first.len(), 5);
}

#[test]
fn test_run_from_fasta_and_stats() {
    let temp = tempdir().unwrap();
    let start = temp.path().join("start.fasta");
    let end = temp.path().join("end.fasta");

    censim()
        .args(["run", "-g", "0", "-n", "320"])
        .arg("--fasta")
        .arg(&start)
        .assert()
        .success();

    censim()
        .args(["run", "-g", "30", "--seed", "11", "--snp-rate", "5"])
        .arg("--from-fasta")
        .arg(&start)
        .arg("--fasta")
        .arg(&end)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 320 units"));

    censim()
        .arg("stats")
        .arg(&start)
        .assert()
        .success()
        .stdout(predicate::str::contains("Array Size: 320 units"))
        .stdout(predicate::str::contains("Unique (exact): 1"));

    censim()
        .arg("stats")
        .arg(&end)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unique_exact\""));
}

#[test]
fn test_params_defaults_and_overrides() {
    censim()
        .arg("params")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"snp_rate\": 0.1"))
        .stdout(predicate::str::contains("\"count_distribution\": \"poisson\""));

    censim()
        .args(["params", "--indel-rate", "2.5", "--size-dist", "power-law"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"indel_rate\": 2.5"))
        .stdout(predicate::str::contains("\"size_distribution\": \"power_law\""));
}

#[test]
fn test_params_file_roundtrip() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("params.json");
    std::fs::write(&path, r#"{"elasticity": 0.75, "target_size": 800}"#).unwrap();

    censim()
        .arg("params")
        .arg("--params")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"elasticity\": 0.75"))
        .stdout(predicate::str::contains("\"target_size\": 800"));
}

#[test]
fn test_stats_heterozygosity_two_units() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("pair.fasta");
    let variant = format!("T{}", &DEFAULT_MONOMER[1..]);
    assert_ne!(variant, DEFAULT_MONOMER);
    std::fs::write(&path, format!(">1\n{DEFAULT_MONOMER}\n>2\n{variant}\n")).unwrap();

    censim()
        .arg("stats")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unique_exact\": 2"))
        .stdout(predicate::str::contains("\"heterozygosity\": 1.0"));
}

#[test]
fn test_stats_missing_file_fails() {
    censim()
        .args(["stats", "/nonexistent/array.fasta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
