use std::error::Error;
use std::process::Command;

use clap::Args;
use serde::Serialize;
use snspd_core::provenance::commit_string;
use snspd_core::{to_canonical_json_bytes, SchemaVersion, REPORT_SCHEMA};

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata including commit, schema and toolchain.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    commit: String,
    report_schema: SchemaVersion,
    rustc: String,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: commit_string(),
        report_schema: REPORT_SCHEMA,
        rustc: rustc_version(),
    };
    println!("{}", String::from_utf8(to_canonical_json_bytes(&info)?)?);
    Ok(())
}

fn rustc_version() -> String {
    Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .unwrap_or_else(|| "rustc unavailable".into())
}
