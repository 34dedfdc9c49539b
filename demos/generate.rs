//! Print the `ColorGradient` declaration of a colormap.
//!
//!     cargo run --example generate -- cividis 8 [colormaps.hjson]

use std::{env, error::Error};
use heatmap_gradients::{generate_declaration, ColormapFile, ColormapRegistry,
                        Matplotlib, TracingDiagnostics};

type Err = Box<dyn Error>;

fn main() -> Result<(), Err> {
    let mut args = env::args().skip(1);
    let colormap = args.next().unwrap_or_else(|| "viridis".to_string());
    let points = match args.next() {
        Some(n) => n.parse()?,
        None => 8,
    };
    let code = match args.next() {
        Some(path) => {
            let registry = ColormapFile::open(path)?.or(Matplotlib);
            generate_declaration(&registry, &colormap, points, None,
                                 &TracingDiagnostics)?
        }
        None => generate_declaration(&Matplotlib, &colormap, points, None,
                                     &TracingDiagnostics)?,
    };
    println!("{code}");
    Ok(())
}
