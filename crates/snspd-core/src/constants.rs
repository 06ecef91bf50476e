//! Phenomenological coefficients read by every transfer function.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SnspdError, SnspdResult};
use crate::serde::read_document;

/// Reference wavelength (nm) at which the logistic centre and background floor are quoted.
pub const REFERENCE_WAVELENGTH_NM: f64 = 1550.0;
/// Reference wire width (nm) at which the logistic centre is quoted.
pub const REFERENCE_WIDTH_NM: f64 = 100.0;
/// Bias (fraction of Ic) at which the dark count base rate is quoted.
pub const DCR_REFERENCE_BIAS: f64 = 0.8;

/// Tunable coefficients of the detector model.
///
/// Any field missing from a YAML/JSON override falls back to its default, so a
/// file containing only `coupling: 0.95` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConstants {
    /// Kinetic inductance scale, nH·nm²/µm.
    pub k_lk: f64,
    /// Logistic steepness of the internal efficiency curve.
    pub ide_steepness: f64,
    /// Logistic centre at 1550 nm and 100 nm width, fraction of Ic.
    pub ide_center_base: f64,
    /// Centre shift per 500 nm of wavelength offset.
    pub ide_center_lambda_sens: f64,
    /// Centre shift per 50 nm of width offset.
    pub ide_center_width_sens: f64,
    /// Dark count rate at Ib/Ic = 0.8 before the Arrhenius factor, Hz.
    pub dcr_base_hz: f64,
    /// Exponential slope of the dark count rate against bias.
    pub dcr_bias_gain: f64,
    /// Activation temperature, K.
    pub dcr_e_over_k: f64,
    /// Blackbody/background floor at 1550 nm, Hz.
    pub dcr_bb_base: f64,
    /// Default optical coupling factor in [0, 1].
    pub coupling: f64,
    /// Nominal pulse rise time, ps.
    pub jitter_rise_ps: f64,
    /// Scale of the amplitude (slope) limited jitter term.
    pub jitter_noise_coeff: f64,
    /// Intrinsic jitter floor, ps.
    pub jitter_base_ps: f64,
    /// Pulse amplitude scale, arbitrary units.
    pub amp_scale: f64,
    /// Score at or above which latching risk is "High".
    pub latch_thresh: f64,
    /// Inductance normalisation of the latching score, nH.
    pub latch_scale_lk_nh: f64,
    /// Load normalisation of the latching score, ohm.
    pub latch_ref_rload: f64,
}

impl Default for DetectorConstants {
    fn default() -> Self {
        Self {
            k_lk: 30.0,
            ide_steepness: 20.0,
            ide_center_base: 0.9,
            ide_center_lambda_sens: 0.05,
            ide_center_width_sens: 0.05,
            dcr_base_hz: 1.0,
            dcr_bias_gain: 15.0,
            dcr_e_over_k: 20.0,
            dcr_bb_base: 10.0,
            coupling: 0.9,
            jitter_rise_ps: 100.0,
            jitter_noise_coeff: 0.02,
            jitter_base_ps: 20.0,
            amp_scale: 1.0,
            latch_thresh: 3.0,
            latch_scale_lk_nh: 100.0,
            latch_ref_rload: 50.0,
        }
    }
}

fn config_error(code: &str, field: &str, value: f64, message: &str) -> SnspdError {
    SnspdError::Config(
        ErrorInfo::new(code, message)
            .with_context("field", field)
            .with_context("value", value.to_string()),
    )
}

impl DetectorConstants {
    fn named_fields(&self) -> [(&'static str, f64); 17] {
        [
            ("k_lk", self.k_lk),
            ("ide_steepness", self.ide_steepness),
            ("ide_center_base", self.ide_center_base),
            ("ide_center_lambda_sens", self.ide_center_lambda_sens),
            ("ide_center_width_sens", self.ide_center_width_sens),
            ("dcr_base_hz", self.dcr_base_hz),
            ("dcr_bias_gain", self.dcr_bias_gain),
            ("dcr_e_over_k", self.dcr_e_over_k),
            ("dcr_bb_base", self.dcr_bb_base),
            ("coupling", self.coupling),
            ("jitter_rise_ps", self.jitter_rise_ps),
            ("jitter_noise_coeff", self.jitter_noise_coeff),
            ("jitter_base_ps", self.jitter_base_ps),
            ("amp_scale", self.amp_scale),
            ("latch_thresh", self.latch_thresh),
            ("latch_scale_lk_nh", self.latch_scale_lk_nh),
            ("latch_ref_rload", self.latch_ref_rload),
        ]
    }

    /// Checks the invariants every formula relies on.
    pub fn validate(&self) -> SnspdResult<()> {
        for (field, value) in self.named_fields() {
            if !value.is_finite() {
                return Err(config_error(
                    "non-finite-constant",
                    field,
                    value,
                    "model constants must be finite",
                ));
            }
        }

        let positive = [
            ("k_lk", self.k_lk),
            ("ide_steepness", self.ide_steepness),
            ("dcr_base_hz", self.dcr_base_hz),
            ("dcr_e_over_k", self.dcr_e_over_k),
            ("jitter_rise_ps", self.jitter_rise_ps),
            ("jitter_base_ps", self.jitter_base_ps),
            ("amp_scale", self.amp_scale),
            ("latch_thresh", self.latch_thresh),
            ("latch_scale_lk_nh", self.latch_scale_lk_nh),
            ("latch_ref_rload", self.latch_ref_rload),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(config_error(
                    "non-positive-constant",
                    field,
                    value,
                    "constant must be strictly positive",
                ));
            }
        }

        for (field, value) in [
            ("dcr_bb_base", self.dcr_bb_base),
            ("jitter_noise_coeff", self.jitter_noise_coeff),
        ] {
            if value < 0.0 {
                return Err(config_error(
                    "negative-constant",
                    field,
                    value,
                    "constant must not be negative",
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.coupling) {
            return Err(SnspdError::Config(
                ErrorInfo::new("coupling-out-of-range", "coupling must lie in [0, 1]")
                    .with_context("value", self.coupling.to_string()),
            ));
        }
        if self.latch_thresh < 1.0 {
            return Err(SnspdError::Config(
                ErrorInfo::new(
                    "latch-bands-unordered",
                    "latching threshold must not fall below the Low/Moderate boundary",
                )
                .with_context("value", self.latch_thresh.to_string())
                .with_hint("use a threshold of at least 1.0"),
            ));
        }
        Ok(())
    }

    /// Loads constants from a YAML or JSON file and validates them.
    pub fn from_path(path: &Path) -> SnspdResult<Self> {
        let constants: Self = read_document(path)?;
        constants.validate().map_err(|err| match err {
            SnspdError::Config(info) => {
                SnspdError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "loaded detector constants");
        Ok(constants)
    }
}
