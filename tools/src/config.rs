//! Release packaging configuration (`package.toml`).

use std::{fs, path::{Path, PathBuf}};

use serde::Deserialize;

use crate::package::PackageError;

/// What goes into the release archives.
///
/// Relative paths are resolved against the directory of the
/// configuration file when it is [loaded](PackageConfig::load).
#[derive(Debug, Deserialize)]
pub struct PackageConfig {
    /// Directory assembled before zipping.  It must not exist and is
    /// removed once the archives are written.  Its name is the root
    /// folder of every archive.
    pub staging_dir: PathBuf,
    /// Archives are named `{archive_prefix}_{platform}.zip`.
    pub archive_prefix: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Files common to all platforms.
    #[serde(default)]
    pub files: Vec<StagedFile>,
    /// Name of the per-platform asset inside the staging directory.
    pub platform_asset: String,
    pub platforms: Vec<Platform>,
}

#[derive(Debug, Deserialize)]
pub struct StagedFile {
    pub source: PathBuf,
    /// File name in the staging directory (default: that of `source`).
    pub rename: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Platform {
    pub name: String,
    pub asset: PathBuf,
}

fn default_output_dir() -> PathBuf { PathBuf::from(".") }

impl StagedFile {
    pub fn file_name(&self) -> Option<String> {
        match &self.rename {
            Some(name) => Some(name.clone()),
            None => self.source.file_name().map(|n| n.to_string_lossy().into_owned()),
        }
    }
}

impl PackageConfig {
    pub fn load(path: &Path) -> Result<Self, PackageError> {
        let text = fs::read_to_string(path)?;
        let mut config: PackageConfig = toml::from_str(&text)?;
        let base = path.parent().unwrap_or(Path::new(""));
        config.resolve_paths(base);
        Ok(config)
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| if p.is_relative() { *p = base.join(&*p) };
        resolve(&mut self.staging_dir);
        resolve(&mut self.output_dir);
        self.files.iter_mut().for_each(|f| resolve(&mut f.source));
        self.platforms.iter_mut().for_each(|p| resolve(&mut p.asset));
    }
}
