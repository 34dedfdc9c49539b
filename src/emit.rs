//! C# `ColorGradient` declarations.

use std::fmt;
use rgb::RGB;

use crate::error::{Error, Result};

/// A `public static ColorGradient` property listing colors.
///
/// Its [`Display`](fmt::Display) output is
///
/// ```text
/// public static ColorGradient Viridis => new ColorGradient(
///     new Color(0.267004f, 0.004874f, 0.329415f),
///     …
///     new Color(0.993248f, 0.906157f, 0.143936f)
/// );
/// ```
///
/// without a final newline.
#[derive(Clone, Copy, Debug)]
pub struct GradientDeclaration<'a> {
    property_name: &'a str,
    colors: &'a [RGB<f64>], // Invariant: non-empty
}

impl<'a> GradientDeclaration<'a> {
    /// Fails with [`Error::EmptyGradient`] if there are no `colors`.
    pub fn new(property_name: &'a str, colors: &'a [RGB<f64>]) -> Result<Self> {
        if colors.is_empty() { return Err(Error::EmptyGradient) }
        Ok(Self { property_name, colors })
    }
}

impl fmt::Display for GradientDeclaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "public static ColorGradient {} => new ColorGradient(",
               self.property_name)?;
        let last = self.colors.len() - 1;
        for (i, RGB { r, g, b }) in self.colors.iter().enumerate() {
            let sep = if i < last { "," } else { "" };
            write!(f, "\n    new Color({r:.6}f, {g:.6}f, {b:.6}f){sep}")?;
        }
        write!(f, "\n);")
    }
}

/// Format `colors` as a `ColorGradient` property called
/// `property_name`.  See [`GradientDeclaration`].
pub fn format_declaration(property_name: &str, colors: &[RGB<f64>]) -> Result<String> {
    Ok(GradientDeclaration::new(property_name, colors)?.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn colors(n: usize) -> Vec<RGB<f64>> {
        (0 .. n).map(|i| RGB::new(0.123456 + i as f64 / 10., 0.234567, 0.345678))
            .collect()
    }

    #[test]
    fn eight_colors() {
        let code = format_declaration("Viridis", &colors(8)).unwrap();
        let lines: Vec<_> = code.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "public static ColorGradient Viridis => new ColorGradient(");
        assert_eq!(lines[1], "    new Color(0.123456f, 0.234567f, 0.345678f),");
        for l in &lines[1 .. 8] {
            assert!(l.starts_with("    new Color(") && l.ends_with("f),"), "{l}");
        }
        assert_eq!(lines[8], "    new Color(0.823456f, 0.234567f, 0.345678f)");
        assert_eq!(lines[9], ");");
        assert!(!code.ends_with('\n'));
    }

    #[test]
    fn no_comma_before_closing() {
        for n in 1 ..= 5 {
            let code = format_declaration("G", &colors(n)).unwrap();
            assert!(code.ends_with(")\n);"), "{code}");
            assert!(!code.contains(",\n);"));
            assert_eq!(code.matches("new Color(").count(), n);
        }
    }

    #[test]
    fn six_decimals() {
        let c = [RGB::new(1., 0., 1. / 3.)];
        assert_eq!(format_declaration("X", &c).unwrap(),
                   "public static ColorGradient X => new ColorGradient(\n    \
                    new Color(1.000000f, 0.000000f, 0.333333f)\n);");
    }

    #[test]
    fn empty_gradient_is_invalid() {
        let err = format_declaration("Empty", &[]).unwrap_err();
        assert!(matches!(err, Error::EmptyGradient));
        assert!(GradientDeclaration::new("Empty", &[]).is_err());
    }
}
