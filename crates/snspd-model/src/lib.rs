#![deny(missing_docs)]
#![doc = "Closed-form transfer functions from SNSPD device parameters to detection efficiency, dark counts, pulse shape, jitter and latching risk."]

/// Internal and system detection efficiency.
pub mod efficiency;
/// Kinetic inductance from meander geometry.
pub mod geometry;
/// Pulse sampling grids.
pub mod grid;
/// Timing jitter from pulse amplitude.
pub mod jitter;
/// Latching heuristic.
pub mod latching;
mod math;
/// Dark count rate.
pub mod noise;
/// Full evaluation pipeline.
pub mod pipeline;
/// Pulse waveform.
pub mod pulse;
/// Serializable evaluation reports.
pub mod report;
/// Efficiency against bias.
pub mod sweep;

pub use efficiency::{internal_detection_efficiency, logistic_center, system_detection_efficiency};
pub use geometry::kinetic_inductance_nh;
pub use grid::TimeGrid;
pub use jitter::jitter_fwhm_ps;
pub use latching::{latching_risk, LatchingLevel, LatchingRisk};
pub use math::linspace;
pub use noise::dark_count_rate_hz;
pub use pipeline::{evaluate, evaluate_with_grid, DetectorMetrics, Evaluation};
pub use pulse::{pulse_waveform, PulseSamples, PulseShape, PulseTrace};
pub use report::{build_report, EvaluationReport};
pub use sweep::{bias_sweep, BiasPoint, BiasSweep};
