//! Generate command - Write a new mod project to disk.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use modgen_templates::Generator;

use super::metadata_args::MetadataArgs;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    metadata: MetadataArgs,
}

pub fn execute(args: GenerateArgs, quiet: bool) -> Result<()> {
    let versions = args.metadata.locked_versions()?;
    let raw = args.metadata.raw_metadata()?;

    info!("Generating project for Minecraft {}", versions.minecraft_version);
    let generator = Generator::new(versions);

    let mut progress = |line: &str| {
        if !quiet {
            println!("{}", line);
        }
    };
    let outcome = generator
        .generate(&raw, &mut progress)
        .context("Failed to generate project")?;

    if outcome.target.is_suffixed() {
        println!(
            "Note: {} already exists, generated into a new folder instead",
            outcome.target.primary().display()
        );
    }
    println!("Project created at {}", outcome.root().display());
    if !quiet {
        println!();
        println!("Next steps:");
        println!("  cd {}", outcome.root().display());
        println!("  gradle wrapper && ./gradlew runClient");
    }

    Ok(())
}
