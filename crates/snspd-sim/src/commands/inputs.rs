use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use snspd_core::{DetectorConstants, DeviceParams, ParamsOverlay, Preset};

/// Where the device parameters and constants come from.
///
/// Precedence: preset or params file, then individual flags on top.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Start from a named preset (match-our-spec, high-throughput, low-noise).
    #[arg(long, conflicts_with = "params")]
    pub preset: Option<String>,
    /// Start from a YAML or JSON parameter file.
    #[arg(long)]
    pub params: Option<PathBuf>,
    /// YAML or JSON file overriding model constants.
    #[arg(long)]
    pub constants: Option<PathBuf>,
    /// Normalised bias Ib/Ic.
    #[arg(long = "bias")]
    pub ib_over_ic: Option<f64>,
    /// Wavelength in nm.
    #[arg(long = "wavelength")]
    pub wavelength_nm: Option<f64>,
    /// Temperature in K.
    #[arg(long = "temperature")]
    pub temperature_k: Option<f64>,
    /// Optical absorption in [0, 1].
    #[arg(long)]
    pub absorption: Option<f64>,
    /// Optical coupling in [0, 1].
    #[arg(long)]
    pub coupling: Option<f64>,
    /// Wire width in nm.
    #[arg(long = "width")]
    pub width_nm: Option<f64>,
    /// Film thickness in nm.
    #[arg(long = "thickness")]
    pub thickness_nm: Option<f64>,
    /// Meander length in µm.
    #[arg(long = "length")]
    pub length_um: Option<f64>,
    /// Load resistance in ohm.
    #[arg(long = "load")]
    pub load_ohm: Option<f64>,
}

/// Fully resolved inputs for one command.
#[derive(Debug)]
pub struct ResolvedInputs {
    pub params: DeviceParams,
    pub constants: DetectorConstants,
    pub preset: Option<Preset>,
}

impl InputArgs {
    fn flag_overlay(&self) -> ParamsOverlay {
        ParamsOverlay {
            ib_over_ic: self.ib_over_ic,
            wavelength_nm: self.wavelength_nm,
            temperature_k: self.temperature_k,
            absorption: self.absorption,
            coupling: self.coupling,
            width_nm: self.width_nm,
            thickness_nm: self.thickness_nm,
            length_um: self.length_um,
            load_ohm: self.load_ohm,
        }
    }

    pub fn resolve(&self) -> Result<ResolvedInputs, Box<dyn Error>> {
        let constants = match &self.constants {
            Some(path) => DetectorConstants::from_path(path)?,
            None => DetectorConstants::default(),
        };

        let preset = self
            .preset
            .as_deref()
            .map(str::parse::<Preset>)
            .transpose()?;
        // A params file only replaces the fields it names; coupling otherwise
        // follows the constants.
        let base = DeviceParams {
            coupling: constants.coupling,
            ..DeviceParams::default()
        };
        let params = match (preset, &self.params) {
            (Some(preset), _) => {
                tracing::info!(preset = %preset, "applying preset");
                preset.params()
            }
            (None, Some(path)) => ParamsOverlay::from_path(path)?.apply(base),
            (None, None) => base,
        };
        Ok(ResolvedInputs {
            params: self.flag_overlay().apply(params),
            constants,
            preset,
        })
    }
}
