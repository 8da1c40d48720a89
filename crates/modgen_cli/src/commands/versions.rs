//! Versions command - Print the locked toolchain versions.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::metadata_args::load_versions;

#[derive(Args)]
pub struct VersionsArgs {
    /// Locked versions file (YAML)
    #[arg(long, value_name = "FILE", env = "MODGEN_VERSIONS")]
    versions: Option<PathBuf>,
}

pub fn execute(args: VersionsArgs) -> Result<()> {
    let versions = load_versions(args.versions.as_deref())?;
    print!("{}", serde_yaml::to_string(&versions)?);
    Ok(())
}
