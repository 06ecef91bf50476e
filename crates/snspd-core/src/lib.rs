#![deny(missing_docs)]
#![doc = "Shared constants, device parameters, presets and range policy for the SNSPD performance sandbox."]

pub mod constants;
pub mod errors;
/// Canonical hashing helpers.
pub mod hash;
pub mod params;
pub mod presets;
pub mod provenance;
pub mod ranges;
/// Canonical JSON and YAML serde helpers.
pub mod serde;

pub use constants::DetectorConstants;
pub use errors::{ErrorInfo, SnspdError, SnspdResult};
pub use hash::stable_hash_string;
pub use params::{DeviceParams, Param, ParamsOverlay};
pub use presets::Preset;
pub use provenance::{SchemaVersion, REPORT_SCHEMA};
pub use ranges::{range_for, sanitize, ParamRange, RangeWarning, Sanitized, WarningKind, PARAM_RANGES};
pub use crate::serde::{from_json_slice, read_document, to_canonical_json_bytes, to_yaml_string};
