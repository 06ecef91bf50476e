//! Per-call device inputs supplied by the shell.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::SnspdResult;
use crate::serde::read_document;

/// Scalar inputs for one evaluation of the detector model.
///
/// Defaults match the sandbox's initial control positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceParams {
    /// Normalised bias current Ib/Ic.
    pub ib_over_ic: f64,
    /// Photon wavelength, nm.
    pub wavelength_nm: f64,
    /// Operating temperature, K.
    pub temperature_k: f64,
    /// Optical absorption probability in [0, 1].
    pub absorption: f64,
    /// Optical coupling factor in [0, 1].
    pub coupling: f64,
    /// Nanowire width, nm.
    pub width_nm: f64,
    /// Film thickness, nm.
    pub thickness_nm: f64,
    /// Total meander length, µm.
    pub length_um: f64,
    /// Readout load resistance, ohm.
    pub load_ohm: f64,
}

impl Default for DeviceParams {
    fn default() -> Self {
        Self {
            ib_over_ic: 0.85,
            wavelength_nm: 1550.0,
            temperature_k: 2.0,
            absorption: 0.80,
            coupling: 0.9,
            width_nm: 100.0,
            thickness_nm: 7.0,
            length_um: 8000.0,
            load_ohm: 50.0,
        }
    }
}

/// Identifies a single field of [`DeviceParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    /// Normalised bias current.
    IbOverIc,
    /// Photon wavelength.
    WavelengthNm,
    /// Operating temperature.
    TemperatureK,
    /// Optical absorption.
    Absorption,
    /// Optical coupling.
    Coupling,
    /// Nanowire width.
    WidthNm,
    /// Film thickness.
    ThicknessNm,
    /// Meander length.
    LengthUm,
    /// Load resistance.
    LoadOhm,
}

impl Param {
    /// Every parameter in declaration order.
    pub const ALL: [Param; 9] = [
        Param::IbOverIc,
        Param::WavelengthNm,
        Param::TemperatureK,
        Param::Absorption,
        Param::Coupling,
        Param::WidthNm,
        Param::ThicknessNm,
        Param::LengthUm,
        Param::LoadOhm,
    ];

    /// Field name as it appears in serialized parameter files.
    pub fn name(self) -> &'static str {
        match self {
            Param::IbOverIc => "ib_over_ic",
            Param::WavelengthNm => "wavelength_nm",
            Param::TemperatureK => "temperature_k",
            Param::Absorption => "absorption",
            Param::Coupling => "coupling",
            Param::WidthNm => "width_nm",
            Param::ThicknessNm => "thickness_nm",
            Param::LengthUm => "length_um",
            Param::LoadOhm => "load_ohm",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl DeviceParams {
    /// Reads the value of a single field.
    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::IbOverIc => self.ib_over_ic,
            Param::WavelengthNm => self.wavelength_nm,
            Param::TemperatureK => self.temperature_k,
            Param::Absorption => self.absorption,
            Param::Coupling => self.coupling,
            Param::WidthNm => self.width_nm,
            Param::ThicknessNm => self.thickness_nm,
            Param::LengthUm => self.length_um,
            Param::LoadOhm => self.load_ohm,
        }
    }

    /// Overwrites a single field.
    pub fn set(&mut self, param: Param, value: f64) {
        let slot = match param {
            Param::IbOverIc => &mut self.ib_over_ic,
            Param::WavelengthNm => &mut self.wavelength_nm,
            Param::TemperatureK => &mut self.temperature_k,
            Param::Absorption => &mut self.absorption,
            Param::Coupling => &mut self.coupling,
            Param::WidthNm => &mut self.width_nm,
            Param::ThicknessNm => &mut self.thickness_nm,
            Param::LengthUm => &mut self.length_um,
            Param::LoadOhm => &mut self.load_ohm,
        };
        *slot = value;
    }

    /// Returns a copy with one field replaced.
    pub fn with(mut self, param: Param, value: f64) -> Self {
        self.set(param, value);
        self
    }

    /// Loads parameters from a YAML or JSON file; missing fields take defaults.
    pub fn from_path(path: &Path) -> SnspdResult<Self> {
        read_document(path)
    }
}

/// Partial parameter set. Only the fields present replace the base values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsOverlay {
    /// Normalised bias current Ib/Ic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ib_over_ic: Option<f64>,
    /// Photon wavelength, nm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wavelength_nm: Option<f64>,
    /// Operating temperature, K.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_k: Option<f64>,
    /// Optical absorption probability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absorption: Option<f64>,
    /// Optical coupling factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupling: Option<f64>,
    /// Nanowire width, nm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_nm: Option<f64>,
    /// Film thickness, nm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness_nm: Option<f64>,
    /// Total meander length, µm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_um: Option<f64>,
    /// Readout load resistance, ohm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_ohm: Option<f64>,
}

impl ParamsOverlay {
    /// Every field paired with its parameter, in declaration order.
    pub fn entries(&self) -> [(Param, Option<f64>); 9] {
        [
            (Param::IbOverIc, self.ib_over_ic),
            (Param::WavelengthNm, self.wavelength_nm),
            (Param::TemperatureK, self.temperature_k),
            (Param::Absorption, self.absorption),
            (Param::Coupling, self.coupling),
            (Param::WidthNm, self.width_nm),
            (Param::ThicknessNm, self.thickness_nm),
            (Param::LengthUm, self.length_um),
            (Param::LoadOhm, self.load_ohm),
        ]
    }

    /// Replaces the fields of `base` that this overlay sets.
    pub fn apply(&self, base: DeviceParams) -> DeviceParams {
        self.entries()
            .into_iter()
            .fold(base, |params, (param, value)| match value {
                Some(value) => params.with(param, value),
                None => params,
            })
    }

    /// Loads a partial parameter set from a YAML or JSON file.
    pub fn from_path(path: &Path) -> SnspdResult<Self> {
        read_document(path)
    }
}
