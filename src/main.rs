use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

mod config;
mod experiment;
mod render;
mod report;
mod sim;
mod trace;

pub type Result<T> = anyhow::Result<T>;

use experiment::{Algorithm, Dataset};

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Page replacement simulator and chart generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the three synthetic reference-string files.
    Gen {
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,

        /// Overrides the config seed; omit both for an entropy seed.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Replay the reference strings under every policy and write one CSV
    /// measurement table per algorithm.
    Simulate {
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Render the 21 comparison charts from the CSV tables.
    Chart {
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Output directory; defaults to img/ under --dir.
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
    /// Full pipeline: gen, simulate, chart.
    Run {
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Gen { dir, config, seed } => cmd_gen(&dir, config.as_deref(), seed),
        Commands::Simulate { dir, config } => cmd_simulate(&dir, config.as_deref()),
        Commands::Chart { dir, out } => {
            let out = out.unwrap_or_else(|| dir.join("img"));
            cmd_chart(&dir, &out)
        }
        Commands::Run { dir, config, seed, out } => {
            let out = out.unwrap_or_else(|| dir.join("img"));
            cmd_gen(&dir, config.as_deref(), seed)?;
            cmd_simulate(&dir, config.as_deref())?;
            cmd_chart(&dir, &out)
        }
    }
}

/// Parse + validate the experiment config; no file means all defaults.
fn load_config(path: Option<&Path>) -> Result<config::ExperimentConfig> {
    let spec: config::ExperimentSpec = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse config file {}", path.display()))?
        }
        None => config::ExperimentSpec::default(),
    };
    spec.validate_and_build()
}

fn cmd_gen(dir: &Path, config: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let cfg = load_config(config)?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("create directory {}", dir.display()))?;

    // 1) Seed once; the three traces draw from the same stream.
    let mut rng = match seed.or(cfg.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // 2) One trace file per dataset flavor.
    for dataset in Dataset::ALL {
        let trace = trace::generate(dataset, &cfg.generator, &mut rng);
        let path = dir.join(dataset.trace_file_name());
        trace::write_trace_file(&path, &trace)?;
        println!("Wrote {} ({} references)", path.display(), trace.len());
    }

    Ok(())
}

fn cmd_simulate(dir: &Path, config: Option<&Path>) -> Result<()> {
    let cfg = load_config(config)?;

    // 1) Read the three reference strings.
    let mut traces = Vec::new();
    for dataset in Dataset::ALL {
        let path = dir.join(dataset.trace_file_name());
        let trace = trace::read_trace_file(&path)?;
        println!("{}: {} references", dataset.label(), trace.len());
        traces.push((dataset, trace));
    }

    // 2) Measure every policy over the grid and write its table.
    for algorithm in Algorithm::ALL {
        let table = report::build_table(algorithm, &traces, cfg.arb_interval)?;
        let path = dir.join(algorithm.table_file_name());
        report::write_table(&path, &table)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn cmd_chart(dir: &Path, out: &Path) -> Result<()> {
    // 1) Load the four measurement tables.
    let mut tables = Vec::new();
    for algorithm in Algorithm::ALL {
        let path = dir.join(algorithm.table_file_name());
        tables.push(report::read_table(&path, algorithm)?);
    }

    // 2) Render both chart families.
    for path in render::render_all(&tables, out)? {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
