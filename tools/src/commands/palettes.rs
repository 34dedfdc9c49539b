// To update the built-in table, edit `matplotlib.hjson` (one entry per
// colormap, as listed by matplotlib's `_cm_listed` module) and run
//   heatmap-tools palettes -s matplotlib.hjson -d ../src/palettes.rs

use std::{fs::File,
          io::{BufWriter, prelude::*},
          path::Path};

use anyhow::Context;
use heatmap_gradients::{Colormap, ColormapFile};

pub fn execute(source: &Path, destination: &Path) -> anyhow::Result<()> {
    let file = ColormapFile::open(source)
        .with_context(|| format!("reading colormaps from {}", source.display()))?;
    if let Some(empty) = file.colormaps().iter().find(|c| c.is_empty()) {
        anyhow::bail!("colormap “{}” has no colors", empty.name());
    }

    let mut fh = BufWriter::new(File::create(destination)
        .with_context(|| format!("creating {}", destination.display()))?);
    let source_name = source.file_name().unwrap_or(source.as_os_str());
    write_palettes(&mut fh, &source_name.to_string_lossy(), file.colormaps())?;
    fh.flush()?;

    println!("Wrote {} colormaps to {}", file.colormaps().len(), destination.display());
    Ok(())
}

/// Rust identifier of the static holding `name`.
fn static_name(name: &str) -> String {
    let mut id: String = name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    if id.starts_with(|c: char| c.is_ascii_digit()) { id.insert(0, '_') }
    id
}

fn write_palettes(fh: &mut impl Write, source: &str,
                  colormaps: &[Colormap]) -> std::io::Result<()> {
    writeln!(fh, "// Written by heatmap-tools palettes from {source}\n\n\
                  use lazy_static::lazy_static;\n\
                  pub(crate) mod ty;\n\
                  use ty::*;")?;

    for c in colormaps {
        write!(fh, "\nlazy_static! {{\n  \
                    pub(crate) static ref {}: PaletteData = PaletteData {{\n    \
                    name: {:?},\n    \
                    rgb: vec![\n",
               static_name(c.name()), c.name())?;
        for rgb in c.colors() {
            writeln!(fh, "      RGB{{r: {:.6}, g: {:.6}, b: {:.6}}},",
                     rgb.r, rgb.g, rgb.b)?;
        }
        writeln!(fh, "    ]}};\n}}")?;
    }

    write!(fh, "\nlazy_static! {{\n  \
                pub(crate) static ref ALL_PALETTES: \
                [&'static PaletteData; {}] = [\n   ",
           colormaps.len())?;
    for c in colormaps {
        write!(fh, " &*{},", static_name(c.name()))?;
    }
    writeln!(fh, "\n  ];\n}}")?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use heatmap_gradients::RGB;
    use pretty_assertions::assert_eq;

    fn colormap(name: &str, colors: &[[f64; 3]]) -> Colormap {
        Colormap::new(name, colors.iter().map(|&[r, g, b]| RGB::new(r, g, b)).collect())
    }

    #[test]
    fn static_names() {
        assert_eq!(static_name("viridis"), "VIRIDIS");
        assert_eq!(static_name("twilight-shifted"), "TWILIGHT_SHIFTED");
        assert_eq!(static_name("3d"), "_3D");
    }

    #[test]
    fn table_layout() {
        let maps = [colormap("grey", &[[0., 0., 0.], [0.5, 0.5, 0.5]]),
                    colormap("red", &[[1., 0., 0.]])];
        let mut out = vec![];
        write_palettes(&mut out, "test.hjson", &maps).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\
// Written by heatmap-tools palettes from test.hjson

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

lazy_static! {
  pub(crate) static ref GREY: PaletteData = PaletteData {
    name: \"grey\",
    rgb: vec![
      RGB{r: 0.000000, g: 0.000000, b: 0.000000},
      RGB{r: 0.500000, g: 0.500000, b: 0.500000},
    ]};
}

lazy_static! {
  pub(crate) static ref RED: PaletteData = PaletteData {
    name: \"red\",
    rgb: vec![
      RGB{r: 1.000000, g: 0.000000, b: 0.000000},
    ]};
}

lazy_static! {
  pub(crate) static ref ALL_PALETTES: [&'static PaletteData; 2] = [
    &*GREY, &*RED,
  ];
}
");
    }

    #[test]
    fn regenerates_builtin_table() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("palettes.rs");
        execute(&manifest.join("matplotlib.hjson"), &destination).unwrap();
        let generated = std::fs::read_to_string(&destination).unwrap();
        let builtin = std::fs::read_to_string(manifest.join("../src/palettes.rs")).unwrap();
        assert!(generated == builtin, "src/palettes.rs is out of date");
    }

    #[test]
    fn empty_colormap_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bad.hjson");
        std::fs::write(&source, "{ void: [] }").unwrap();
        assert!(execute(&source, &dir.path().join("out.rs")).is_err());
    }
}
