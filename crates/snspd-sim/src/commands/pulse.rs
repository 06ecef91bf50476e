use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use snspd_model::{evaluate_with_grid, TimeGrid};

use super::inputs::InputArgs;
use super::output::csv_writer;

#[derive(Args, Debug)]
pub struct PulseArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
    /// End of the time window, ns.
    #[arg(long, default_value_t = 20.0)]
    pub t_end: f64,
    /// Samples in the window.
    #[arg(long, default_value_t = 1000)]
    pub samples: usize,
    /// Write CSV here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &PulseArgs) -> Result<(), Box<dyn Error>> {
    let resolved = args.inputs.resolve()?;
    let grid = TimeGrid::linspace(0.0, args.t_end, args.samples);
    let evaluation = evaluate_with_grid(&resolved.params, &resolved.constants, &grid);
    tracing::info!(
        tau_ns = evaluation.pulse.decay_constant_ns,
        v_max = evaluation.pulse.max_voltage(),
        "pulse sampled"
    );

    let mut writer = csv_writer(args.out.as_deref())?;
    writer.write_record(["t_ns", "voltage"])?;
    for (t, v) in grid.as_slice().iter().zip(&evaluation.pulse.voltages) {
        writer.write_record([t.to_string(), v.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
