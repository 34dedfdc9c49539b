use std::path::Path;

use anyhow::Context;

use crate::{config::PackageConfig, package};

pub fn execute(config: &Path) -> anyhow::Result<()> {
    let config = PackageConfig::load(config)
        .with_context(|| format!("loading {}", config.display()))?;
    for archive in package::run(&config)? {
        println!("Created {}", archive.display());
    }
    Ok(())
}
