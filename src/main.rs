use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use netanalysis::analysis::report::{describe_path, format_links, print_summary};
use netanalysis::config::{Config, Query};
use netanalysis::topology::{
    format_topology, generate_topology, parse_topology_file, GeneratorOptions, Medium, Topology,
};
use netanalysis::{config_loader, interactive, orchestrator};

/// Latency, bandwidth and resilience analysis for copper/fiber networks
#[derive(Parser, Debug)]
#[command(name = "netanalysis")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Topology file (`V` on the first line, then `from to medium bandwidth length`)
    #[arg(short, long, global = true)]
    topology: Option<PathBuf>,

    /// YAML configuration naming the topology and the queries to run
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Analyze(AnalyzeCommand),

    /// Write a random topology file
    Generate {
        #[arg(long, default_value = "8")]
        vertices: usize,
        #[arg(long, default_value = "12")]
        links: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Fraction of links that are fiber
        #[arg(long, default_value = "0.5")]
        fiber_ratio: f64,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Commands that run against a loaded topology
#[derive(Subcommand, Debug)]
enum AnalyzeCommand {
    /// Find the lowest-latency path between two vertices
    Path {
        from: usize,
        to: usize,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the network is connected using one medium only
    MediumConnected {
        #[arg(long, default_value = "copper")]
        medium: Medium,
    },

    /// Compute the minimum-latency spanning forest
    SpanningForest {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether any two vertices can fail without disconnecting the rest
    Robustness,

    /// Run the configured queries and write JSON and text reports
    Report {
        /// Output directory (overrides `general.output_dir`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the menu-driven prompt loop
    Interactive,
}

/// Topology plus an optional configuration it came from
struct Loaded {
    topology: Topology,
    source: String,
    config: Option<Config>,
}

fn load_inputs(args: &Args, config: Option<Config>) -> Result<Loaded> {
    if let Some(path) = &args.topology {
        let topology = parse_topology_file(path)?;
        if let Some(config) = &config {
            config
                .validate_against(&topology)
                .wrap_err("Configuration does not match the topology")?;
        }
        return Ok(Loaded {
            topology,
            source: path.display().to_string(),
            config,
        });
    }

    match (&args.config, config) {
        (Some(config_path), Some(config)) => {
            let path = config_loader::resolve_topology_path(&config, config_path);
            let topology = parse_topology_file(&path)?;
            config
                .validate_against(&topology)
                .wrap_err("Configuration does not match the topology")?;
            Ok(Loaded {
                topology,
                source: path.display().to_string(),
                config: Some(config),
            })
        }
        _ => bail!("No topology given: pass --topology FILE or --config FILE"),
    }
}

fn run(args: &Args, config: Option<Config>) -> Result<()> {
    match &args.command {
        Commands::Generate {
            vertices,
            links,
            seed,
            fiber_ratio,
            output,
        } => generate(*vertices, *links, *seed, *fiber_ratio, output.as_deref()),
        Commands::Analyze(command) => {
            let loaded = load_inputs(args, config)?;
            analyze(command, &loaded)
        }
    }
}

fn analyze(command: &AnalyzeCommand, loaded: &Loaded) -> Result<()> {
    let topology = &loaded.topology;

    match command {
        AnalyzeCommand::Path { from, to, json } => {
            let path = topology.shortest_path(*from, *to)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&path)?);
            } else {
                for line in describe_path(&path) {
                    println!("{}", line);
                }
            }
        }
        AnalyzeCommand::MediumConnected { medium } => {
            if topology.is_medium_connected(*medium) {
                println!("The network is completely {}-connected.", medium);
            } else {
                println!("The network is not completely {}-connected.", medium);
            }
        }
        AnalyzeCommand::SpanningForest { json } => {
            let forest = topology.minimum_spanning_forest()?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&forest)?);
            } else {
                println!("Weight of the forest: {}E-7 seconds", forest.total_weight);
                println!("Edges in the forest: {}", format_links(&forest.edges));
                println!("Trees: {}", forest.tree_count);
            }
        }
        AnalyzeCommand::Robustness => {
            let report = topology.robustness();
            if report.robust {
                println!("The system would remain connected if any two vertices fail.");
            } else {
                println!("The system would not remain connected if two vertices fail.");
                if let Some(pair) = report.failing_pair {
                    println!("Failing pair: {} and {}", pair.excluded, pair.critical);
                }
            }
        }
        AnalyzeCommand::Report { output } => {
            let queries = loaded
                .config
                .as_ref()
                .map(Config::queries)
                .unwrap_or_else(Query::defaults);
            let report = orchestrator::run_queries(topology, &queries, &loaded.source)?;
            print_summary(&report);

            let output_dir = output.clone().or_else(|| {
                loaded
                    .config
                    .as_ref()
                    .and_then(|c| c.general().output_dir.clone())
                    .map(PathBuf::from)
            });
            if let Some(dir) = output_dir {
                orchestrator::write_reports(&report, &dir)?;
                info!("Reports written to {:?}", dir);
            }
        }
        AnalyzeCommand::Interactive => {
            let stdin = io::stdin();
            interactive::run_interactive(topology, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}

fn generate(
    vertices: usize,
    links: usize,
    seed: Option<u64>,
    fiber_ratio: f64,
    output: Option<&Path>,
) -> Result<()> {
    if !(0.0..=1.0).contains(&fiber_ratio) {
        bail!("--fiber-ratio must be between 0 and 1, got {}", fiber_ratio);
    }
    let options = GeneratorOptions {
        vertices,
        links,
        fiber_ratio,
        seed,
        ..Default::default()
    };
    let topology = generate_topology(&options)?;
    let text = format_topology(&topology);

    match output {
        Some(path) => {
            fs::write(path, text)
                .wrap_err_with(|| format!("Failed to write topology to {}", path.display()))?;
            info!("Topology written to {:?}", path);
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Some(config_loader::load_config(path)?),
        None => None,
    };

    // Command line wins over configuration, default "info"
    let level = args
        .log_level
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.general().log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    info!("Starting netanalysis {}", env!("CARGO_PKG_VERSION"));
    run(&args, config)
}
