use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use snspd_model::{bias_sweep, BiasSweep};

use super::inputs::InputArgs;
use super::output::csv_writer;

#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
    /// First bias value.
    #[arg(long, default_value_t = 0.5)]
    pub start: f64,
    /// Last bias value.
    #[arg(long, default_value_t = 1.1)]
    pub end: f64,
    /// Number of bias points.
    #[arg(long, default_value_t = 120)]
    pub points: usize,
    /// Write CSV here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &SweepArgs) -> Result<(), Box<dyn Error>> {
    let resolved = args.inputs.resolve()?;
    let sweep = BiasSweep {
        start: args.start,
        end: args.end,
        points: args.points,
    };
    let points = bias_sweep(&resolved.params, &resolved.constants, &sweep);
    tracing::info!(points = points.len(), "bias sweep complete");

    let mut writer = csv_writer(args.out.as_deref())?;
    for point in &points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}
