use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use heatmap_gradients::{ColormapFile, ColormapRegistry, Matplotlib};

pub mod generate;
pub mod list;
pub mod package;
pub mod palettes;

#[derive(Subcommand)]
pub enum Commands {
    /// Print ColorGradient declarations sampled from colormaps
    Generate {
        /// Colormaps to sample (default: viridis, cividis, plasma, inferno, magma)
        colormaps: Vec<String>,

        /// Number of colors of each gradient
        #[arg(short = 'n', long, default_value_t = 8)]
        points: usize,

        /// Property name (default: the capitalized colormap name).
        /// Requires a single colormap
        #[arg(short, long)]
        property: Option<String>,

        /// Hjson file with additional colormaps (they take precedence
        /// over the built-in ones)
        #[arg(short = 'c', long)]
        colormap_file: Option<PathBuf>,

        /// Write the declarations to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the available colormaps
    List {
        /// Hjson file with additional colormaps
        #[arg(short = 'c', long)]
        colormap_file: Option<PathBuf>,
    },

    /// Regenerate the built-in colormap table from an Hjson file
    Palettes {
        /// Hjson colormap file (e.g. matplotlib.hjson)
        #[arg(short, long)]
        source: PathBuf,

        /// Rust file to write (e.g. ../src/palettes.rs)
        #[arg(short, long)]
        destination: PathBuf,
    },

    /// Build the release archives
    Package {
        /// Packaging configuration
        #[arg(short, long, default_value = "package.toml")]
        config: PathBuf,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Generate { colormaps, points, property, colormap_file, output } => {
                generate::execute(colormaps, *points, property.as_deref(),
                                  colormap_file.as_deref(), output.as_deref())
            }
            Commands::List { colormap_file } => list::execute(colormap_file.as_deref()),
            Commands::Palettes { source, destination } => {
                palettes::execute(source, destination)
            }
            Commands::Package { config } => package::execute(config),
        }
    }
}

/// The built-in colormaps, preceded by those of `colormap_file` if any.
fn registry(colormap_file: Option<&Path>) -> anyhow::Result<Box<dyn ColormapRegistry>> {
    Ok(match colormap_file {
        Some(path) => {
            let file = ColormapFile::open(path)
                .with_context(|| format!("reading colormaps from {}", path.display()))?;
            Box::new(file.or(Matplotlib))
        }
        None => Box::new(Matplotlib),
    })
}
