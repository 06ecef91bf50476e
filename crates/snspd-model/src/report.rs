use serde::{Deserialize, Serialize};
use snspd_core::provenance::commit_string;
use snspd_core::{
    stable_hash_string, DetectorConstants, DeviceParams, RangeWarning, SchemaVersion,
    SnspdResult, REPORT_SCHEMA,
};

use crate::pipeline::{DetectorMetrics, Evaluation};

/// Serializable summary of an evaluation, without the sampled waveform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Report schema version.
    pub schema_version: SchemaVersion,
    /// Commit or package version that produced the report.
    pub commit: String,
    /// SHA-256 over the canonical JSON of the sanitized inputs and constants.
    pub input_hash: String,
    /// Optional name of the preset the inputs came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Sanitized inputs.
    pub params: DeviceParams,
    /// Constants in effect.
    pub constants: DetectorConstants,
    /// Scalar metrics.
    pub metrics: DetectorMetrics,
    /// Range warnings raised while sanitizing.
    pub warnings: Vec<RangeWarning>,
}

/// Wraps an evaluation into a hashable, serializable report.
pub fn build_report(
    evaluation: &Evaluation,
    constants: &DetectorConstants,
    preset: Option<&str>,
) -> SnspdResult<EvaluationReport> {
    let input_hash = stable_hash_string(&(&evaluation.params, constants))?;
    Ok(EvaluationReport {
        schema_version: REPORT_SCHEMA,
        commit: commit_string(),
        input_hash,
        preset: preset.map(str::to_string),
        params: evaluation.params,
        constants: constants.clone(),
        metrics: evaluation.metrics,
        warnings: evaluation.warnings.clone(),
    })
}
