use std::error::Error;

use clap::Args;
use serde::Serialize;
use snspd_core::{to_canonical_json_bytes, DeviceParams, Preset};

use super::output::emit;

#[derive(Args, Debug)]
pub struct PresetsArgs {}

#[derive(Debug, Serialize)]
struct PresetEntry {
    name: &'static str,
    label: &'static str,
    note: &'static str,
    params: DeviceParams,
}

pub fn run(_args: &PresetsArgs) -> Result<(), Box<dyn Error>> {
    let entries: Vec<PresetEntry> = Preset::ALL
        .iter()
        .map(|preset| PresetEntry {
            name: preset.name(),
            label: preset.label(),
            note: preset.note(),
            params: preset.params(),
        })
        .collect();
    emit(None, &to_canonical_json_bytes(&entries)?)
}
