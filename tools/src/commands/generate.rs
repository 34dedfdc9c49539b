use std::{fs, io::{self, Write}, path::Path};

use anyhow::Context;
use heatmap_gradients::{generate_declaration, ColormapRegistry, TracingDiagnostics};

/// Colormaps generated when none is named.
const DEFAULT_COLORMAPS: [&str; 5] = ["viridis", "cividis", "plasma", "inferno", "magma"];

pub fn execute(
    colormaps: &[String],
    points: usize,
    property: Option<&str>,
    colormap_file: Option<&Path>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    if property.is_some() && colormaps.len() != 1 {
        anyhow::bail!("--property needs exactly one colormap, got {}", colormaps.len());
    }
    let names: Vec<&str> = if colormaps.is_empty() {
        DEFAULT_COLORMAPS.to_vec()
    } else {
        colormaps.iter().map(String::as_str).collect()
    };

    let registry = super::registry(colormap_file)?;
    let code = render(&*registry, &names, points, property)?;

    match output {
        Some(path) => {
            fs::write(path, code)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} declaration(s) to {}", names.len(), path.display());
        }
        None => io::stdout().lock().write_all(code.as_bytes())?,
    }
    Ok(())
}

/// The declarations of `colormaps`, separated by blank lines.
fn render<R>(
    registry: &R,
    colormaps: &[&str],
    points: usize,
    property: Option<&str>,
) -> heatmap_gradients::Result<String>
where R: ColormapRegistry + ?Sized {
    let mut code = String::new();
    for (i, name) in colormaps.iter().enumerate() {
        if i > 0 { code.push('\n') }
        code += &generate_declaration(registry, name, points, property,
                                      &TracingDiagnostics)?;
        code.push('\n');
    }
    Ok(code)
}


#[cfg(test)]
mod tests {
    use super::*;
    use heatmap_gradients::{Error, Matplotlib};
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_line_between_declarations() {
        let code = render(&Matplotlib, &["viridis", "magma"], 2, None).unwrap();
        assert_eq!(code, "\
public static ColorGradient Viridis => new ColorGradient(
    new Color(0.267004f, 0.004874f, 0.329415f),
    new Color(0.993248f, 0.906157f, 0.143936f)
);

public static ColorGradient Magma => new ColorGradient(
    new Color(0.001462f, 0.000466f, 0.013866f),
    new Color(0.987053f, 0.991438f, 0.749504f)
);
");
    }

    #[test]
    fn default_batch_starts_with_the_mod_gradients() {
        let code = render(&Matplotlib, &DEFAULT_COLORMAPS, 8, None).unwrap();
        let names: Vec<_> = code.lines()
            .filter_map(|l| l.strip_prefix("public static ColorGradient "))
            .filter_map(|l| l.split(' ').next())
            .collect();
        assert_eq!(names, ["Viridis", "Cividis", "Plasma", "Inferno", "Magma"]);
        assert!(code.contains("\
public static ColorGradient Cividis => new ColorGradient(
    new Color(0.000000f, 0.135112f, 0.304751f),
"));
    }

    #[test]
    fn explicit_property_name() {
        let code = render(&Matplotlib, &["plasma"], 1, Some("Hot")).unwrap();
        assert_eq!(code, "\
public static ColorGradient Hot => new ColorGradient(
    new Color(0.940015f, 0.975158f, 0.131326f)
);
");
    }

    #[test]
    fn unknown_colormap_fails() {
        let err = render(&Matplotlib, &["viridis", "jet"], 8, None).unwrap_err();
        assert!(matches!(err, Error::ColormapNotFound { ref name } if name == "jet"));
    }

    #[test]
    fn property_needs_one_colormap() {
        let maps = vec!["viridis".to_string(), "magma".to_string()];
        assert!(execute(&maps, 8, Some("X"), None, None).is_err());
        assert!(execute(&[], 8, Some("X"), None, None).is_err());
    }

    #[test]
    fn zero_points_fails() {
        let maps = vec!["viridis".to_string()];
        assert!(execute(&maps, 0, None, None, None).is_err());
    }

    #[test]
    fn write_to_file_with_custom_colormaps() {
        let dir = tempfile::tempdir().unwrap();
        let colormaps = dir.path().join("extra.hjson");
        fs::write(&colormaps, "{ cividis: [[0, 0.135112, 0.304751], \
                                           [0.995737, 0.909344, 0.217772]] }")
            .unwrap();
        let output = dir.path().join("Builtins.cs");
        let maps = vec!["cividis".to_string()];
        execute(&maps, 3, None, Some(&colormaps), Some(&output)).unwrap();
        let code = fs::read_to_string(&output).unwrap();
        assert_eq!(code, "\
public static ColorGradient Cividis => new ColorGradient(
    new Color(0.000000f, 0.135112f, 0.304751f),
    new Color(0.995737f, 0.909344f, 0.217772f),
    new Color(0.995737f, 0.909344f, 0.217772f)
);
");
    }
}
