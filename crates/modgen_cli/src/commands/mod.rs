//! CLI command definitions.
//!
//! Each subcommand maps to one operation of the generator library.

use clap::{Parser, Subcommand};

pub mod fix_id;
pub mod generate;
pub mod metadata_args;
pub mod preview;
pub mod versions;

/// modgen - Fabric client mod project generator
#[derive(Parser)]
#[command(name = "modgen")]
#[command(version, about = "modgen - Fabric client mod project generator")]
#[command(long_about = r#"
modgen generates a ready-to-build Fabric client mod project from a handful of
identity fields. Identifiers are normalized into valid mod ids and package
names, and an already populated project folder is never overwritten: the
project lands in a timestamp-suffixed sibling instead.

COMMANDS:
  generate  → Generate a project tree
  preview   → Show normalized metadata and the target without writing
  fix-id    → Normalize a single identifier
  versions  → Print the locked toolchain versions

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Configuration error
  4 - I/O failure during generation
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new mod project
    Generate(generate::GenerateArgs),

    /// Show what `generate` would do without writing anything
    Preview(preview::PreviewArgs),

    /// Normalize a mod id or package namespace
    #[command(name = "fix-id")]
    FixId(fix_id::FixIdArgs),

    /// Print the locked toolchain versions as YAML
    Versions(versions::VersionsArgs),
}
