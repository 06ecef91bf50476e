//! Named parameter sets applied wholesale by the shell.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SnspdError};
use crate::params::DeviceParams;

/// One-click scenarios shipped with the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// High system efficiency at 1550 nm with a ~353 nH NbTiN meander on 50 Ω.
    MatchOurSpec,
    /// Shorter reset time through a higher load and a shorter meander.
    HighThroughput,
    /// Cooler and shorter wavelength to pull the dark count rate down.
    LowNoise,
}

impl Preset {
    /// All presets in display order.
    pub const ALL: [Preset; 3] = [Preset::MatchOurSpec, Preset::HighThroughput, Preset::LowNoise];

    /// Kebab-case identifier accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Preset::MatchOurSpec => "match-our-spec",
            Preset::HighThroughput => "high-throughput",
            Preset::LowNoise => "low-noise",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Preset::MatchOurSpec => "Match-our-spec",
            Preset::HighThroughput => "High-throughput (faster reset)",
            Preset::LowNoise => "Low-noise demo",
        }
    }

    /// Short explanation of what the preset demonstrates.
    pub fn note(self) -> &'static str {
        match self {
            Preset::MatchOurSpec => {
                "Target point: bias near Ic, high absorption and coupling give high SDE; tau ~ L/R with 50 ohm."
            }
            Preset::HighThroughput => {
                "Shorter tau via higher R_load and smaller effective Lk; some efficiency trade."
            }
            Preset::LowNoise => {
                "Cooler and shorter wavelength give lower DCR; SDE drops since bias is not cranked."
            }
        }
    }

    /// Full parameter set for the preset.
    pub fn params(self) -> DeviceParams {
        match self {
            Preset::MatchOurSpec => DeviceParams {
                ib_over_ic: 1.02,
                wavelength_nm: 1550.0,
                temperature_k: 4.0,
                absorption: 0.97,
                coupling: 1.00,
                width_nm: 90.0,
                thickness_nm: 7.0,
                length_um: 7413.0,
                load_ohm: 50.0,
            },
            Preset::HighThroughput => DeviceParams {
                ib_over_ic: 0.95,
                wavelength_nm: 1550.0,
                temperature_k: 4.0,
                absorption: 0.90,
                coupling: 0.95,
                width_nm: 90.0,
                thickness_nm: 7.0,
                length_um: 5000.0,
                load_ohm: 100.0,
            },
            Preset::LowNoise => DeviceParams {
                ib_over_ic: 0.86,
                wavelength_nm: 800.0,
                temperature_k: 2.0,
                absorption: 0.97,
                coupling: 0.95,
                width_nm: 90.0,
                thickness_nm: 7.0,
                length_um: 7413.0,
                load_ohm: 50.0,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SnspdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
                SnspdError::Params(
                    ErrorInfo::new("unknown-preset", format!("unknown preset '{value}'"))
                        .with_hint(format!("expected one of: {}", known.join(", "))),
                )
            })
    }
}
