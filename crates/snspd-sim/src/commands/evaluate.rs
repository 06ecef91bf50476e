use std::error::Error;
use std::fmt::{self, Write as _};
use std::path::PathBuf;

use clap::Args;
use snspd_core::to_canonical_json_bytes;
use snspd_model::{build_report, evaluate_with_grid, EvaluationReport, TimeGrid};

use super::inputs::InputArgs;
use super::output::emit;

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
    /// Print a human-readable panel instead of the JSON report.
    #[arg(long)]
    pub summary: bool,
    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// End of the pulse window, ns.
    #[arg(long, default_value_t = 20.0)]
    pub t_end: f64,
    /// Pulse samples in the window.
    #[arg(long, default_value_t = 1000)]
    pub samples: usize,
}

pub fn run(args: &EvaluateArgs) -> Result<(), Box<dyn Error>> {
    let resolved = args.inputs.resolve()?;
    let grid = TimeGrid::linspace(0.0, args.t_end, args.samples);
    let evaluation = evaluate_with_grid(&resolved.params, &resolved.constants, &grid);
    let preset = resolved.preset.map(|preset| preset.name());
    let report = build_report(&evaluation, &resolved.constants, preset)?;
    tracing::info!(input_hash = %report.input_hash, "evaluation complete");

    let bytes = if args.summary {
        summary_panel(&report)?.into_bytes()
    } else {
        to_canonical_json_bytes(&report)?
    };
    emit(args.out.as_deref(), &bytes)
}

fn summary_panel(report: &EvaluationReport) -> Result<String, fmt::Error> {
    let m = &report.metrics;
    let mut panel = String::new();
    if let Some(preset) = &report.preset {
        writeln!(panel, "preset               {preset}")?;
    }
    writeln!(
        panel,
        "internal efficiency  {:.1} %",
        m.internal_detection_efficiency * 100.0
    )?;
    writeln!(
        panel,
        "system efficiency    {:.1} %",
        m.system_detection_efficiency * 100.0
    )?;
    writeln!(panel, "dark count rate      {:.3e} Hz", m.dark_count_rate_hz)?;
    writeln!(panel, "kinetic inductance   {:.1} nH", m.kinetic_inductance_nh)?;
    writeln!(panel, "decay constant       {:.2} ns", m.decay_constant_ns)?;
    writeln!(panel, "jitter (FWHM)        {:.1} ps", m.jitter_fwhm_ps)?;
    write!(
        panel,
        "latching risk        {} (score {:.2})",
        m.latching.level, m.latching.score
    )?;
    for warning in &report.warnings {
        write!(panel, "\nwarning: {} = {}", warning.param, warning.value)?;
    }
    Ok(panel)
}
