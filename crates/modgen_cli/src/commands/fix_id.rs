//! Fix-id command - Normalize a single identifier.

use anyhow::Result;
use clap::Args;

use modgen_templates::{normalize_namespace, normalize_slug};

#[derive(Args)]
pub struct FixIdArgs {
    /// Value to normalize
    value: String,

    /// Normalize as a dotted package namespace instead of a mod id
    #[arg(long)]
    namespace: bool,
}

pub fn execute(args: FixIdArgs) -> Result<()> {
    println!("{}", fix_id(&args.value, args.namespace));
    Ok(())
}

fn fix_id(value: &str, namespace: bool) -> String {
    if namespace {
        normalize_namespace(value)
    } else {
        normalize_slug(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_id_modes() {
        assert_eq!(fix_id("My Mod!", false), "my_mod");
        assert_eq!(fix_id("Com-Example..Test", true), "com_example.test");
    }
}
