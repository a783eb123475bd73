use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "freqtree workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Fenwick tree benchmarks and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Criterion baseline to save and report on
        #[arg(long, default_value = "latest")]
        baseline: String,
    },
}

const BENCH: &str = "fenwick_benchmark";
const GROUP: &str = "FenwickTree";
const REPORT_PATH: &str = "benchmark_results/report.md";

/// The slice of criterion's `estimates.json` we read.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
    std_dev: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// The slice of criterion's `benchmark.json` we read.
#[derive(Deserialize)]
struct BenchmarkInfo {
    throughput: Option<Throughput>,
}

/// Only element counts are reported; byte throughputs fail to parse and
/// are treated as absent.
#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
}

struct Measurement {
    mean_ns: f64,
    std_dev_ns: f64,
    elements: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            baseline,
        } => {
            if !report_only {
                run_benchmarks(quick, &baseline)?;
            }
            generate_report(&baseline)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str) -> Result<()> {
    println!(">>> Running {BENCH} (baseline: {baseline})");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    cmd.arg("--save-baseline").arg(baseline);

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run cargo bench for {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH} failed");
    }

    println!("Finished {BENCH} in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report(baseline: &str) -> Result<()> {
    println!("\n>>> Generating Report...");

    let group_dir = Path::new("target/criterion").join(GROUP);
    if !group_dir.exists() {
        eprintln!("No criterion output found at {}", group_dir.display());
        return Ok(());
    }

    let results = collect_results(&group_dir, baseline)?;
    if results.is_empty() {
        eprintln!("No measurements for baseline '{baseline}' in {}", group_dir.display());
        return Ok(());
    }

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Fenwick Tree Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "Baseline: `{baseline}`")?;
    writeln!(file)?;
    writeln!(file, "| Operation | Mean | Std Dev | Throughput | vs Naive |")?;
    writeln!(file, "|---|---|---|---|---|")?;

    for (name, m) in &results {
        let throughput = m
            .elements
            .map(|elements| format_ops(elements as f64 * 1e9 / m.mean_ns))
            .unwrap_or_else(|| "-".to_string());

        // "Query" is compared against "Naive Query", and so on.
        let vs_naive = results
            .get(&format!("Naive {name}"))
            .map(|naive| format!("**{:.1}x**", naive.mean_ns / m.mean_ns))
            .unwrap_or_else(|| "-".to_string());

        writeln!(
            file,
            "| {name} | {} | ±{} | {throughput} | {vs_naive} |",
            format_ns(m.mean_ns),
            format_ns(m.std_dev_ns),
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Reads `<group>/<function>/<baseline>/estimates.json` for every function.
fn collect_results(group_dir: &Path, baseline: &str) -> Result<BTreeMap<String, Measurement>> {
    let mut results = BTreeMap::new();

    for entry in fs::read_dir(group_dir)?.flatten() {
        let function_dir = entry.path();
        let Some(function) = function_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if function == "report" || !function_dir.is_dir() {
            continue;
        }

        let estimates_path = function_dir.join(baseline).join("estimates.json");
        let Ok(content) = fs::read_to_string(&estimates_path) else {
            continue;
        };
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("Malformed {}", estimates_path.display()))?;

        let elements = fs::read_to_string(function_dir.join(baseline).join("benchmark.json"))
            .ok()
            .and_then(|content| serde_json::from_str::<BenchmarkInfo>(&content).ok())
            .and_then(|info| info.throughput)
            .map(|Throughput::Elements(n)| n);

        results.insert(
            function.to_string(),
            Measurement {
                mean_ns: estimates.mean.point_estimate,
                std_dev_ns: estimates.std_dev.point_estimate,
                elements,
            },
        );
    }

    Ok(results)
}

fn format_ns(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M ops/s", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K ops/s", ops / 1_000.0)
    } else {
        format!("{ops:.0} ops/s")
    }
}
