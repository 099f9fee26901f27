//! Generate command implementation
//!
//! Loads Terraform outputs, resolves SSH settings, builds the inventory and writes
//! it. The output file is only touched once the whole document has been rendered.

mod display;

use crate::cli::GenerateArgs;
use crate::config::{ConfigFile, GeneratorSettings};
use crate::error::Result;
use crate::inventory::{Header, InventoryBuilder, render, write_atomic};
use crate::terraform::TerraformOutputs;

/// Run generate command
pub fn run(args: &GenerateArgs, quiet: bool) -> Result<()> {
    let outputs = TerraformOutputs::load(&args.outputs)?;
    tracing::debug!(
        path = %args.outputs.display(),
        entries = outputs.len(),
        "loaded terraform outputs"
    );

    let config = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let settings = GeneratorSettings::resolve(&args.overrides(), &config)?;
    settings.ssh.verify_key_file()?;

    let inventory = InventoryBuilder::new(&settings).build(&outputs);
    if inventory.is_empty() {
        tracing::warn!(
            "no hosts found in {}; the inventory will have empty groups",
            args.outputs.display()
        );
    }

    let header = Header::now(args.outputs.display().to_string(), settings.ssh.strategy);
    let document = render(&inventory, &header)?;

    if args.dry_run {
        print!("{document}");
        return Ok(());
    }

    write_atomic(&args.inventory, &document)?;

    if !quiet {
        display::print_summary(&args.inventory, &settings, &inventory);
    }

    Ok(())
}
