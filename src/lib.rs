//! Colormap sampling for the Heatmap mod's `ColorGradient`s.
//!
//! A [`Colormap`] is resolved by name through a [`ColormapRegistry`]
//! (the built-in [`Matplotlib`] table, a [`ColormapFile`] or both,
//! see [`ColormapRegistry::or`]), sampled at evenly spaced entries by
//! [`sample`] and turned into C# source by [`format_declaration`].
//!
//! ```
//! use heatmap_gradients::{generate_declaration, Matplotlib, TracingDiagnostics};
//! let code = generate_declaration(&Matplotlib, "viridis", 8, None,
//!                                 &TracingDiagnostics).unwrap();
//! assert!(code.starts_with("public static ColorGradient Viridis =>"));
//! ```

use std::fmt;

mod colormap_file;
mod emit;
mod error;
mod palettes;

pub use colormap_file::ColormapFile;
pub use emit::{format_declaration, GradientDeclaration};
pub use error::{Error, ErrorKind, Result};
pub use rgb::RGB;

/// A named, ordered list of colors with channels conventionally in
/// \[0, 1\].
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    name: String,
    colors: Vec<RGB<f64>>,
}

impl Colormap {
    pub fn new(name: impl Into<String>, colors: Vec<RGB<f64>>) -> Self {
        Self { name: name.into(), colors }
    }

    /// The name the colormap was registered under.
    pub fn name(&self) -> &str { &self.name }

    /// The colors of the colormap, in order.
    pub fn colors(&self) -> &[RGB<f64>] { &self.colors }

    /// Returns the number of colors in the colormap.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
}

/// A source of [`Colormap`]s, looked up by name.
pub trait ColormapRegistry {
    /// Return the colormap called `name` or
    /// [`Error::ColormapNotFound`].
    fn resolve(&self, name: &str) -> Result<Colormap>;

    /// Names of all colormaps this registry can resolve.
    fn names(&self) -> Vec<String>;

    /// Return a registry looking up colormaps in `self` first and in
    /// `fallback` for the names `self` does not know.
    ///
    /// # Example
    ///
    /// ```
    /// use heatmap_gradients::{ColormapFile, ColormapRegistry, Matplotlib};
    /// let custom: ColormapFile = "{ heat: [[0, 0, 0], [1, 0, 0]] }".parse().unwrap();
    /// let registry = custom.or(Matplotlib);
    /// assert_eq!(registry.resolve("heat").unwrap().len(), 2);
    /// assert_eq!(registry.resolve("viridis").unwrap().len(), 256);
    /// ```
    fn or<R>(self, fallback: R) -> Fallback<Self, R>
    where Self: Sized, R: ColormapRegistry {
        Fallback { first: self, second: fallback }
    }
}

impl<R> ColormapRegistry for &R
where R: ColormapRegistry + ?Sized {
    #[inline]
    fn resolve(&self, name: &str) -> Result<Colormap> { (**self).resolve(name) }

    #[inline]
    fn names(&self) -> Vec<String> { (**self).names() }
}

/// Two registries consulted in turn.
///
/// Created by [`ColormapRegistry::or`].
pub struct Fallback<A, B> {
    first: A,
    second: B,
}

impl<A, B> ColormapRegistry for Fallback<A, B>
where A: ColormapRegistry, B: ColormapRegistry {
    fn resolve(&self, name: &str) -> Result<Colormap> {
        match self.first.resolve(name) {
            Err(Error::ColormapNotFound { .. }) => self.second.resolve(name),
            found => found,
        }
    }

    fn names(&self) -> Vec<String> {
        let mut names = self.first.names();
        for n in self.second.names() {
            if !names.contains(&n) { names.push(n) }
        }
        names
    }
}

/// The Matplotlib perceptually uniform sequential colormaps: magma,
/// inferno, plasma and viridis (256 colors each) and cividis, reduced
/// to the 8 colors of the mod's default gradient.
#[derive(Clone, Copy, Debug, Default)]
pub struct Matplotlib;

impl Matplotlib {
    fn get(name: &str) -> Option<Colormap> {
        palettes::ALL_PALETTES.iter()
            .find(|p| p.name == name)
            .map(|p| Colormap::new(p.name, p.rgb.clone()))
    }

    /// Matplotlib magma color scheme.
    #[inline]
    pub fn magma() -> Colormap { Colormap::new("magma", palettes::MAGMA.rgb.clone()) }

    /// Matplotlib inferno color scheme.
    #[inline]
    pub fn inferno() -> Colormap {
        Colormap::new("inferno", palettes::INFERNO.rgb.clone())
    }

    /// Matplotlib plasma color scheme.
    #[inline]
    pub fn plasma() -> Colormap {
        Colormap::new("plasma", palettes::PLASMA.rgb.clone())
    }

    /// Matplotlib viridis color scheme.
    #[inline]
    pub fn viridis() -> Colormap {
        Colormap::new("viridis", palettes::VIRIDIS.rgb.clone())
    }

    /// Matplotlib cividis color scheme, 8 evenly spaced colors of it.
    #[inline]
    pub fn cividis() -> Colormap {
        Colormap::new("cividis", palettes::CIVIDIS.rgb.clone())
    }
}

impl ColormapRegistry for Matplotlib {
    /// Names are case-sensitive, as in Matplotlib.
    fn resolve(&self, name: &str) -> Result<Colormap> {
        Self::get(name).ok_or_else(|| Error::ColormapNotFound { name: name.to_string() })
    }

    fn names(&self) -> Vec<String> {
        palettes::ALL_PALETTES.iter().map(|p| p.name.to_string()).collect()
    }
}

/// Non-fatal notices produced while sampling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// More points were requested than the colormap has colors, so
    /// some colors are repeated.
    Oversampled {
        colormap: String,
        points: usize,
        colors: usize,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::Oversampled { colormap, points, colors } => write!(
                f, "Colormap {colormap} is being sampled at {points} points \
                    but there are only {colors} colors in the colormap"),
        }
    }
}

/// Where [`Advisory`] notices go.  Any `Fn(Advisory)` closure is a
/// valid channel.
pub trait Diagnostics {
    fn advise(&self, advisory: Advisory);
}

impl<F> Diagnostics for F
where F: Fn(Advisory) {
    #[inline]
    fn advise(&self, advisory: Advisory) { self(advisory) }
}

/// Report advisories as `tracing` warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn advise(&self, advisory: Advisory) {
        match &advisory {
            Advisory::Oversampled { colormap, points, colors } => {
                tracing::warn!(colormap = %colormap, points, colors, "{advisory}")
            }
        }
    }
}

/// Colors picked from a [`Colormap`] by [`sample`].
#[derive(Clone, Debug, PartialEq)]
pub struct SampledGradient {
    colormap: String,
    colors: Vec<RGB<f64>>, // Invariant: non-empty, last = last color of the colormap
}

impl SampledGradient {
    /// Name of the colormap the colors come from.
    pub fn colormap(&self) -> &str { &self.colormap }

    pub fn colors(&self) -> &[RGB<f64>] { &self.colors }

    /// Returns the number of points, i.e., the number requested.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn into_colors(self) -> Vec<RGB<f64>> { self.colors }
}

/// Resolve `colormap` in `registry` and sample it at `points` points.
/// See [`sample_colormap`].
pub fn sample<R>(
    registry: &R,
    colormap: &str,
    points: usize,
    diagnostics: &impl Diagnostics,
) -> Result<SampledGradient>
where R: ColormapRegistry + ?Sized {
    if points == 0 { return Err(Error::InvalidPoints) }
    let colormap = registry.resolve(colormap)?;
    tracing::debug!(colormap = colormap.name(), colors = colormap.len(),
                    "resolved colormap");
    sample_colormap(&colormap, points, diagnostics)
}

/// Return `points` colors of `colormap`: the colors at indices
/// ⌊k C / (points - 1)⌋ for k = 0, …, points - 2, where C is the
/// number of colors of the colormap, followed by its last color.
///
/// When `points` exceeds C some colors are repeated and an
/// [`Advisory::Oversampled`] is sent to `diagnostics` (the result is
/// the same).
pub fn sample_colormap(
    colormap: &Colormap,
    points: usize,
    diagnostics: &impl Diagnostics,
) -> Result<SampledGradient> {
    if points == 0 { return Err(Error::InvalidPoints) }
    let colors = colormap.colors();
    let Some(&last) = colors.last() else {
        return Err(Error::EmptyColormap { name: colormap.name().to_string() })
    };
    let c = colors.len();
    if points > c {
        diagnostics.advise(Advisory::Oversampled {
            colormap: colormap.name().to_string(), points, colors: c });
    }
    let n = points - 1; // n = 0 ⇒ empty range, no division
    let mut sampled: Vec<_> = (0 .. n).map(|k| colors[k * c / n]).collect();
    sampled.push(last);
    Ok(SampledGradient { colormap: colormap.name().to_string(), colors: sampled })
}

/// Property name used when none is given: the colormap name with its
/// first character upper-cased.
pub fn default_property_name(colormap: &str) -> String {
    let mut chars = colormap.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sample `colormap` at `points` points and format the result as a
/// `ColorGradient` declaration named `property_name` (by default
/// [`default_property_name`]).
pub fn generate_declaration<R>(
    registry: &R,
    colormap: &str,
    points: usize,
    property_name: Option<&str>,
    diagnostics: &impl Diagnostics,
) -> Result<String>
where R: ColormapRegistry + ?Sized {
    let gradient = sample(registry, colormap, points, diagnostics)?;
    let name = match property_name {
        Some(name) => name.to_string(),
        None => default_property_name(colormap),
    };
    format_declaration(&name, gradient.colors())
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn ramp(name: &str, n: usize) -> Colormap {
        let colors = (0 .. n).map(|i| {
            let x = i as f64 / n as f64;
            RGB::new(x, 1. - x, 0.5)
        }).collect();
        Colormap::new(name, colors)
    }

    struct Registry(Vec<Colormap>);

    impl ColormapRegistry for Registry {
        fn resolve(&self, name: &str) -> Result<Colormap> {
            self.0.iter().find(|c| c.name() == name).cloned()
                .ok_or_else(|| Error::ColormapNotFound { name: name.to_string() })
        }

        fn names(&self) -> Vec<String> {
            self.0.iter().map(|c| c.name().to_string()).collect()
        }
    }

    fn quiet(_: Advisory) {}

    #[test]
    fn length_and_last_color() {
        for c in [1, 2, 3, 10, 256] {
            let cm = ramp("ramp", c);
            for points in 1 ..= 300 {
                let g = sample_colormap(&cm, points, &quiet).unwrap();
                assert_eq!(g.len(), points, "C = {c}, points = {points}");
                assert_eq!(g.colors().last(), cm.colors().last());
            }
        }
    }

    #[test]
    fn single_point_is_last_color() {
        let cm = ramp("ramp", 5);
        let g = sample_colormap(&cm, 1, &quiet).unwrap();
        assert_eq!(g.colors(), &cm.colors()[4 ..]);
    }

    #[test]
    fn viridis_eight_points() {
        let viridis = Matplotlib::viridis();
        assert_eq!(viridis.len(), 256);
        let g = sample(&Matplotlib, "viridis", 8, &quiet).unwrap();
        let expected: Vec<_> = [0, 36, 73, 109, 146, 182, 219, 255].iter()
            .map(|&i| viridis.colors()[i]).collect();
        assert_eq!(g.colors(), &expected[..]);
        assert_eq!(g.colormap(), "viridis");
    }

    #[test]
    fn indices_are_evenly_spaced() {
        // Identify colors by their index.
        let cm = Colormap::new("idx", (0 .. 10).map(|i| RGB::new(i as f64, 0., 0.))
                               .collect());
        let g = sample_colormap(&cm, 5, &quiet).unwrap();
        let idx: Vec<_> = g.colors().iter().map(|c| c.r as usize).collect();
        assert_eq!(idx, [0, 2, 5, 7, 9]);
    }

    #[test]
    fn oversampling_is_advised_once() {
        let advised = RefCell::new(vec![]);
        let record = |a: Advisory| advised.borrow_mut().push(a);
        let cm = ramp("tiny", 3);
        let g = sample_colormap(&cm, 7, &record).unwrap();
        assert_eq!(g.len(), 7);
        assert_eq!(*advised.borrow(), vec![Advisory::Oversampled {
            colormap: "tiny".to_string(), points: 7, colors: 3 }]);
        let idx: Vec<_> = g.colors().iter()
            .map(|c| cm.colors().iter().position(|x| x == c).unwrap())
            .collect();
        assert_eq!(idx, [0, 0, 1, 1, 2, 2, 2]);

        advised.borrow_mut().clear();
        sample_colormap(&cm, 3, &record).unwrap();
        assert!(advised.borrow().is_empty());
    }

    #[test]
    fn advisory_message() {
        let a = Advisory::Oversampled { colormap: "tab10".to_string(),
                                        points: 12, colors: 10 };
        assert_eq!(a.to_string(),
                   "Colormap tab10 is being sampled at 12 points but there \
                    are only 10 colors in the colormap");
    }

    #[test]
    fn zero_points_is_invalid() {
        let err = sample(&Matplotlib, "viridis", 0, &quiet).unwrap_err();
        assert!(matches!(err, Error::InvalidPoints));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn empty_and_unknown_colormaps() {
        let registry = Registry(vec![Colormap::new("void", vec![])]);
        let err = sample(&registry, "void", 4, &quiet).unwrap_err();
        assert!(matches!(err, Error::EmptyColormap { ref name } if name == "void"));
        assert_eq!(err.kind(), ErrorKind::Lookup);
        let err = sample(&registry, "nope", 4, &quiet).unwrap_err();
        assert!(matches!(err, Error::ColormapNotFound { ref name } if name == "nope"));
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn sampling_is_idempotent() {
        let a = sample(&Matplotlib, "plasma", 13, &quiet).unwrap();
        let b = sample(&Matplotlib, "plasma", 13, &quiet).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn matplotlib_names_are_case_sensitive() {
        assert_eq!(Matplotlib.names(),
                   ["magma", "inferno", "plasma", "viridis", "cividis"]);
        assert!(Matplotlib.resolve("Viridis").is_err());
        assert!(Matplotlib.resolve("CIVIDIS").is_err());
        assert_eq!(Matplotlib.resolve("magma").unwrap(), Matplotlib::magma());
        assert_eq!(Matplotlib.resolve("cividis").unwrap(), Matplotlib::cividis());
    }

    #[test]
    fn fallback_prefers_first_registry() {
        let custom = Registry(vec![ramp("viridis", 4), ramp("heat", 2)]);
        let registry = custom.or(Matplotlib);
        assert_eq!(registry.resolve("viridis").unwrap().len(), 4);
        assert_eq!(registry.resolve("heat").unwrap().len(), 2);
        assert_eq!(registry.resolve("magma").unwrap().len(), 256);
        assert!(matches!(registry.resolve("jet"),
                         Err(Error::ColormapNotFound { .. })));
        assert_eq!(registry.names(),
                   ["viridis", "heat", "magma", "inferno", "plasma", "cividis"]);
    }

    #[test]
    fn default_names() {
        assert_eq!(default_property_name("viridis"), "Viridis");
        assert_eq!(default_property_name("RdBu"), "RdBu");
        assert_eq!(default_property_name("twilight_shifted"), "Twilight_shifted");
        assert_eq!(default_property_name(""), "");
    }

    #[test]
    fn generate_with_explicit_name() {
        let code = generate_declaration(&Matplotlib, "magma", 2, Some("Hot"),
                                        &quiet).unwrap();
        assert_eq!(code,
                   "public static ColorGradient Hot => new ColorGradient(\n    \
                    new Color(0.001462f, 0.000466f, 0.013866f),\n    \
                    new Color(0.987053f, 0.991438f, 0.749504f)\n);");
    }
}
