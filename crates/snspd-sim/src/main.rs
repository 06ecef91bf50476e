use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    evaluate::{self, EvaluateArgs},
    presets::{self, PresetsArgs},
    pulse::{self, PulseArgs},
    sweep::{self, SweepArgs},
    version::{self, VersionArgs},
};
use tracing::Level;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "snspd-sim", about = "SNSPD performance sandbox CLI")]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every metric for one parameter set.
    Evaluate(EvaluateArgs),
    /// Trace internal and system efficiency against bias.
    Sweep(SweepArgs),
    /// Sample the voltage pulse on a time grid.
    Pulse(PulseArgs),
    /// List the built-in presets.
    Presets(PresetsArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Evaluate(args) => evaluate::run(&args),
        Command::Sweep(args) => sweep::run(&args),
        Command::Pulse(args) => pulse::run(&args),
        Command::Presets(args) => presets::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
