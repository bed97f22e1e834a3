//! Mantle CLI: cape simulation, benchmarking, and config validation.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mantle")]
#[command(version, about = "Mantle: verlet cloth simulation for character capes")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a cape hanging from a stationary wearer.
    Simulate {
        /// Path to a cape config (TOML). Uses the built-in cape if omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Frames to simulate.
        #[arg(short, long, default_value_t = 120)]
        frames: u32,

        /// Ambient wind speed.
        #[arg(short, long, default_value_t = 0.0)]
        wind: f32,

        /// Y coordinate of a solid floor below the wearer.
        #[arg(long)]
        ground: Option<f32>,

        /// Seed for the drag-variance RNG.
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Log every simulation event.
        #[arg(long)]
        telemetry: bool,

        /// Write the final corner positions as JSON to this path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (idle, walking, windy, wall_press, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Override each scenario's frame count.
        #[arg(short, long)]
        frames: Option<u32>,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a cape config (.toml or .json).
    Validate {
        /// Path to the config file.
        path: String,
    },

    /// Print the built-in cape config as TOML.
    Init,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Simulate {
            config,
            frames,
            wind,
            ground,
            seed,
            telemetry,
            output,
        } => commands::simulate(&commands::SimulateArgs {
            config_path: config.as_deref(),
            frames,
            wind,
            ground,
            seed,
            telemetry,
            output_path: output.as_deref(),
        }),
        Commands::Benchmark {
            scenario,
            frames,
            output,
        } => commands::benchmark(&scenario, frames, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Init => commands::init(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
