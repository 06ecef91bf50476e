//! Validated-range policy applied once at the model's entry boundary.
//!
//! Each parameter carries a hard domain clamp, which is applied, and an
//! advisory range matching the sandbox controls, which is only reported.
//! Nothing here ever rejects an input.

use serde::{Deserialize, Serialize};

use crate::params::{DeviceParams, Param};

/// Hard and advisory bounds for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    /// Parameter the bounds apply to.
    pub param: Param,
    /// Values below this are raised to it.
    pub hard_min: Option<f64>,
    /// Values above this are lowered to it.
    pub hard_max: Option<f64>,
    /// Lower edge of the validated operating range.
    pub advisory_min: f64,
    /// Upper edge of the validated operating range.
    pub advisory_max: f64,
}

impl ParamRange {
    /// Applies the hard clamp. NaN maps to the lower bound when one exists.
    pub fn clamp(&self, value: f64) -> f64 {
        let mut clamped = value;
        if let Some(min) = self.hard_min {
            clamped = clamped.max(min);
        }
        if let Some(max) = self.hard_max {
            clamped = clamped.min(max);
        }
        clamped
    }

    /// Whether the value lies inside the advisory range.
    pub fn is_advised(&self, value: f64) -> bool {
        value >= self.advisory_min && value <= self.advisory_max
    }
}

const fn range(
    param: Param,
    hard_min: Option<f64>,
    hard_max: Option<f64>,
    advisory_min: f64,
    advisory_max: f64,
) -> ParamRange {
    ParamRange {
        param,
        hard_min,
        hard_max,
        advisory_min,
        advisory_max,
    }
}

/// The range table, one row per [`Param`] in declaration order.
///
/// Bias is clamped to the widest domain any formula accepts (1.2, used by the
/// latching heuristic); the efficiency, noise and pulse formulas saturate at
/// 1.1 internally.
pub const PARAM_RANGES: [ParamRange; 9] = [
    range(Param::IbOverIc, Some(0.0), Some(1.2), 0.0, 1.1),
    range(Param::WavelengthNm, None, None, 800.0, 2200.0),
    range(Param::TemperatureK, Some(0.5), None, 0.8, 10.0),
    range(Param::Absorption, Some(0.0), Some(1.0), 0.0, 1.0),
    range(Param::Coupling, Some(0.0), Some(1.0), 0.5, 1.0),
    range(Param::WidthNm, Some(1e-3), None, 50.0, 150.0),
    range(Param::ThicknessNm, Some(1e-3), None, 4.0, 10.0),
    range(Param::LengthUm, Some(1e-3), None, 100.0, 20000.0),
    range(Param::LoadOhm, Some(1.0), None, 25.0, 150.0),
];

/// Looks up the range row for a parameter.
pub fn range_for(param: Param) -> &'static ParamRange {
    // Table order matches Param::ALL.
    &PARAM_RANGES[param as usize]
}

/// What happened to an out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    /// The value was moved onto the hard domain boundary.
    Clamped {
        /// Value actually used by the model.
        to: f64,
    },
    /// The value was used unchanged but lies outside the validated range.
    OutsideAdvisory {
        /// Lower edge of the validated range.
        min: f64,
        /// Upper edge of the validated range.
        max: f64,
    },
}

/// Report of a single sanitized parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeWarning {
    /// Offending parameter.
    pub param: Param,
    /// Value as supplied by the caller.
    pub value: f64,
    /// What was done about it.
    #[serde(flatten)]
    pub kind: WarningKind,
}

/// Parameters after the hard clamps, plus everything worth telling the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sanitized {
    /// Clamped parameters, safe for every formula.
    pub params: DeviceParams,
    /// One entry per clamped or out-of-range input.
    pub warnings: Vec<RangeWarning>,
}

/// Applies [`PARAM_RANGES`] to a parameter set.
pub fn sanitize(params: &DeviceParams) -> Sanitized {
    let mut clamped = *params;
    let mut warnings = Vec::new();
    for row in PARAM_RANGES.iter() {
        let value = params.get(row.param);
        let used = row.clamp(value);
        let moved = !(used == value || (used.is_nan() && value.is_nan()));
        let kind = if moved {
            Some(WarningKind::Clamped { to: used })
        } else if !row.is_advised(value) {
            Some(WarningKind::OutsideAdvisory {
                min: row.advisory_min,
                max: row.advisory_max,
            })
        } else {
            None
        };
        if let Some(kind) = kind {
            tracing::warn!(param = %row.param, value, ?kind, "input outside validated range");
            warnings.push(RangeWarning {
                param: row.param,
                value,
                kind,
            });
        }
        clamped.set(row.param, used);
    }
    Sanitized {
        params: clamped,
        warnings,
    }
}
