//! Release packaging: stage the mod files and zip them once per platform.

use std::{collections::HashSet,
          fs::{self, File},
          io,
          path::{Component, Path, PathBuf}};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::{result::ZipError, write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::config::PackageConfig;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("Source file not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("Staging directory already exists: {}", .0.display())]
    StagingExists(PathBuf),

    #[error("Output directory {} is inside the staging directory {}",
            .output_dir.display(), .staging_dir.display())]
    OutputInStaging { output_dir: PathBuf, staging_dir: PathBuf },

    #[error("More than one staged file is named {0}")]
    DuplicateTarget(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] ZipError),
}

/// Build `{archive_prefix}_{platform}.zip` for every platform of
/// `config` and return the archive paths, in platform order.
///
/// Nothing is created unless the configuration passes [`validate`] and
/// the staging directory does not exist.  The staging directory is
/// removed afterwards, whether packaging succeeded or not.
pub fn run(config: &PackageConfig) -> Result<Vec<PathBuf>, PackageError> {
    let names = validate(config)?;
    if config.staging_dir.exists() {
        return Err(PackageError::StagingExists(config.staging_dir.clone()));
    }

    fs::create_dir_all(&config.output_dir)?;
    fs::create_dir_all(&config.staging_dir)?;
    let archives = stage_and_zip(config, &names);
    let cleanup = fs::remove_dir_all(&config.staging_dir);
    let archives = archives?;
    cleanup?;
    Ok(archives)
}

/// Check that every source file and platform asset exists, that staged
/// names are unique and that the archives are not written inside the
/// staging directory.  Returns the staged name of each of `config.files`.
fn validate(config: &PackageConfig) -> Result<Vec<String>, PackageError> {
    let sources = config.files.iter().map(|f| &f.source)
        .chain(config.platforms.iter().map(|p| &p.asset));
    for source in sources {
        if !source.is_file() {
            return Err(PackageError::MissingSource(source.clone()));
        }
    }

    let mut seen = HashSet::from([config.platform_asset.as_str()]);
    let mut names = Vec::with_capacity(config.files.len());
    for file in &config.files {
        let name = file.file_name()
            .ok_or_else(|| PackageError::MissingSource(file.source.clone()))?;
        names.push(name);
    }
    for name in &names {
        if !seen.insert(name.as_str()) {
            return Err(PackageError::DuplicateTarget(name.clone()));
        }
    }

    if lexical(&config.output_dir).starts_with(lexical(&config.staging_dir)) {
        return Err(PackageError::OutputInStaging {
            output_dir: config.output_dir.clone(),
            staging_dir: config.staging_dir.clone(),
        });
    }
    Ok(names)
}

/// `path` with `.` and `..` components folded away, without touching
/// the file system (the staging directory does not exist yet).
fn lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in path.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => if !out.pop() { out.push(c) },
            _ => out.push(c),
        }
    }
    out
}

fn stage_and_zip(config: &PackageConfig,
                 names: &[String]) -> Result<Vec<PathBuf>, PackageError> {
    let staging = &config.staging_dir;
    for (file, name) in config.files.iter().zip(names) {
        debug!(source = %file.source.display(), "Staging {name}");
        fs::copy(&file.source, staging.join(name))?;
    }

    let asset = staging.join(&config.platform_asset);
    let mut archives = Vec::with_capacity(config.platforms.len());
    for platform in &config.platforms {
        fs::copy(&platform.asset, &asset)?;
        let archive = config.output_dir
            .join(format!("{}_{}.zip", config.archive_prefix, platform.name));
        zip_dir(staging, &archive)?;
        info!(platform = %platform.name, "Created {}", archive.display());
        archives.push(archive);
    }
    Ok(archives)
}

/// Write `dir` to `archive`, entries rooted at the name of `dir`.
fn zip_dir(dir: &Path, archive: &Path) -> Result<(), PackageError> {
    let base = dir.parent().unwrap_or(Path::new(""));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(File::create(archive)?);

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        let path = entry.path();
        let name = normalize_path(path.strip_prefix(base).unwrap_or(path));
        if entry.file_type().is_dir() {
            zip.add_directory(name, options)?;
        } else {
            zip.start_file(name, options)?;
            io::copy(&mut File::open(path)?, &mut zip)?;
        }
    }
    zip.finish()?;
    Ok(())
}

/// Archive entry names use forward slashes.
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Platform, StagedFile};
    use pretty_assertions::assert_eq;
    use std::io::Read;
    use zip::ZipArchive;

    const PLATFORMS: [&str; 3] = ["windows", "linux", "osx"];

    /// A build tree with the mod binaries and one asset bundle per
    /// platform, and the matching configuration.
    fn fixture(root: &Path) -> PackageConfig {
        let bin = root.join("bin");
        fs::create_dir_all(&bin).unwrap();
        for dll in ["Heatmap.dll", "Heatmap.Unity.dll", "0Harmony.dll"] {
            fs::write(bin.join(dll), dll).unwrap();
        }
        fs::write(root.join("license_distribute.txt"), "MIT").unwrap();

        let platforms = PLATFORMS.iter().map(|&name| {
            let dir = root.join("assets").join(name);
            fs::create_dir_all(&dir).unwrap();
            let asset = dir.join("heatmapuiassets");
            fs::write(&asset, format!("{name} bundle")).unwrap();
            Platform { name: name.to_string(), asset }
        }).collect();

        let mut files: Vec<StagedFile> = ["Heatmap.dll", "Heatmap.Unity.dll", "0Harmony.dll"]
            .iter()
            .map(|dll| StagedFile { source: bin.join(dll), rename: None })
            .collect();
        files.push(StagedFile {
            source: root.join("license_distribute.txt"),
            rename: Some("license.txt".to_string()),
        });

        PackageConfig {
            staging_dir: root.join("Heatmap"),
            archive_prefix: "Heatmap".to_string(),
            output_dir: root.join("dist"),
            files,
            platform_asset: "heatmapuiassets".to_string(),
            platforms,
        }
    }

    #[test]
    fn one_archive_per_platform() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());

        let archives = run(&config).unwrap();
        let expected: Vec<PathBuf> = PLATFORMS.iter()
            .map(|p| dir.path().join("dist").join(format!("Heatmap_{p}.zip")))
            .collect();
        assert_eq!(archives, expected);
        assert!(!config.staging_dir.exists());

        for (platform, archive) in PLATFORMS.iter().zip(&archives) {
            let mut zip = ZipArchive::new(File::open(archive).unwrap()).unwrap();
            let mut names: Vec<&str> = zip.file_names().collect();
            names.sort();
            assert_eq!(names, ["Heatmap/",
                               "Heatmap/0Harmony.dll",
                               "Heatmap/Heatmap.Unity.dll",
                               "Heatmap/Heatmap.dll",
                               "Heatmap/heatmapuiassets",
                               "Heatmap/license.txt"]);

            let mut bundle = String::new();
            zip.by_name("Heatmap/heatmapuiassets").unwrap()
                .read_to_string(&mut bundle).unwrap();
            assert_eq!(bundle, format!("{platform} bundle"));

            let mut license = String::new();
            zip.by_name("Heatmap/license.txt").unwrap()
                .read_to_string(&mut license).unwrap();
            assert_eq!(license, "MIT");
        }
    }

    #[test]
    fn existing_staging_dir_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        fs::create_dir(&config.staging_dir).unwrap();
        fs::write(config.staging_dir.join("keep.txt"), "mine").unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, PackageError::StagingExists(ref p) if *p == config.staging_dir));
        assert!(config.staging_dir.join("keep.txt").exists());
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn missing_source_aborts_before_staging() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        let missing = config.platforms[2].asset.clone();
        fs::remove_file(&missing).unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, PackageError::MissingSource(ref p) if *p == missing));
        assert!(!config.staging_dir.exists());
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn output_inside_staging_is_rejected() {
        for output in ["Heatmap", "Heatmap/dist", "dist/../Heatmap/./zips"] {
            let dir = tempfile::tempdir().unwrap();
            let mut config = fixture(dir.path());
            config.output_dir = dir.path().join(output);

            let err = run(&config).unwrap_err();
            assert!(matches!(err, PackageError::OutputInStaging { .. }), "{output}: {err}");
            assert!(!config.staging_dir.exists(), "{output}");
            assert!(!config.output_dir.exists(), "{output}");
        }
    }

    #[test]
    fn output_next_to_staging_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture(dir.path());
        config.output_dir = dir.path().join("Heatmap-dist");
        assert_eq!(run(&config).unwrap().len(), 3);
        assert!(dir.path().join("Heatmap-dist/Heatmap_osx.zip").is_file());
    }

    #[test]
    fn colliding_staged_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture(dir.path());
        config.files[3].rename = Some("Heatmap.dll".to_string());
        let err = run(&config).unwrap_err();
        assert!(matches!(err, PackageError::DuplicateTarget(ref n) if n == "Heatmap.dll"));
        assert!(!config.staging_dir.exists());

        config.files[3].rename = Some("heatmapuiassets".to_string());
        let err = run(&config).unwrap_err();
        assert!(matches!(err, PackageError::DuplicateTarget(ref n) if n == "heatmapuiassets"));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn lexical_paths() {
        assert_eq!(lexical(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(lexical(Path::new("../a/.")), PathBuf::from("../a"));
    }

    #[test]
    fn entry_names_use_forward_slashes() {
        assert_eq!(normalize_path(Path::new("Heatmap/license.txt")), "Heatmap/license.txt");
        assert_eq!(normalize_path(Path::new("Heatmap\\license.txt")), "Heatmap/license.txt");
    }
}
