pub(crate) use rgb::RGB;

/// A built-in colormap.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) rgb: Vec<RGB<f64>>, // Invariant: length ≥ 1, channels in [0, 1]
}
