//! Preview command - Show normalized metadata and the target folder.

use anyhow::{Context, Result};
use clap::Args;

use modgen_templates::Generator;

use super::metadata_args::MetadataArgs;

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    metadata: MetadataArgs,

    /// Also list every file that would be written
    #[arg(long)]
    files: bool,
}

pub fn execute(args: PreviewArgs) -> Result<()> {
    let generator = Generator::new(args.metadata.locked_versions()?);
    let raw = args.metadata.raw_metadata()?;

    let preview = generator
        .preview(&raw)
        .context("Failed to resolve the project target")?;

    println!("Target: {}", preview.target.root().display());
    if preview.target.is_suffixed() {
        println!("  ({} is already populated)", preview.target.primary().display());
    }
    println!();
    print!("{}", serde_yaml::to_string(&preview.metadata)?);

    if !preview.notices.is_empty() {
        println!();
        for notice in &preview.notices {
            println!("{}", notice);
        }
    }

    if args.files {
        println!();
        println!("Files:");
        for file in &preview.files {
            println!("  {}", file.display());
        }
    }

    Ok(())
}
