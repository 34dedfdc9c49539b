// Tools for the Heatmap mod.
//
// `heatmap-tools generate` prints the `ColorGradient` declarations of
// `ColorGradientBuiltins.cs`, `heatmap-tools palettes` regenerates the
// built-in colormap table `../src/palettes.rs` from `matplotlib.hjson`
// and `heatmap-tools package` builds the release zips described by
// `package.toml`.

use clap::Parser;

mod commands;
mod config;
mod package;

use commands::Commands;

#[derive(Parser)]
#[command(name = "heatmap-tools")]
#[command(about = "Heatmap mod tools: ColorGradient generation and release packaging",
          long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    // Log to stderr, stdout carries the generated code
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
