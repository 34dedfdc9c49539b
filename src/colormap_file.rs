//! Colormaps read from Hjson documents.

use std::{fs::File,
          io::BufReader,
          path::Path,
          str::FromStr};
use rgb::RGB;
use serde_hjson::Value;

use crate::{Colormap, ColormapRegistry, error::{Error, Result}};

/// A registry of colormaps defined in an Hjson document such as
///
/// ```hjson
/// {
///   # Channels in [0, 1]
///   heat: [[0, 0, 0], [1, 0.5, 0], [1, 1, 1]]
///   # CSS notation, channels in [0, 255]
///   rdbu: ["rgb(103,0,31)", "rgb(247,247,247)", "rgb(5,48,97)"]
/// }
/// ```
///
/// Colormaps keep the order of the document.
#[derive(Clone, Debug, Default)]
pub struct ColormapFile {
    colormaps: Vec<Colormap>,
}

impl ColormapFile {
    /// Read the colormaps defined in the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let fh = BufReader::new(File::open(path)?);
        let json: Value = serde_hjson::from_reader(fh)?;
        let file = Self::from_value(json)?;
        tracing::debug!(path = %path.display(), colormaps = file.colormaps.len(),
                        "loaded colormap file");
        Ok(file)
    }

    fn from_value(json: Value) -> Result<Self> {
        let Value::Object(m) = json else {
            return Err(Error::InvalidColormapFile(
                "expected an object mapping names to lists of colors".to_string()))
        };
        let mut colormaps = Vec::with_capacity(m.len());
        for (name, colors) in m.into_iter() {
            let Value::Array(colors) = colors else {
                return Err(Error::InvalidColormapFile(
                    format!("“{name}” is not a list of colors")))
            };
            let rgb = colors.iter().enumerate()
                .map(|(i, c)| parse_color(&name, i, c))
                .collect::<Result<Vec<_>>>()?;
            colormaps.push(Colormap::new(name, rgb));
        }
        Ok(Self { colormaps })
    }

    /// The colormaps of the file, in order.
    pub fn colormaps(&self) -> &[Colormap] { &self.colormaps }
}

impl FromStr for ColormapFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_value(serde_hjson::from_str(s)?)
    }
}

impl ColormapRegistry for ColormapFile {
    fn resolve(&self, name: &str) -> Result<Colormap> {
        self.colormaps.iter().find(|c| c.name() == name).cloned()
            .ok_or_else(|| Error::ColormapNotFound { name: name.to_string() })
    }

    fn names(&self) -> Vec<String> {
        self.colormaps.iter().map(|c| c.name().to_string()).collect()
    }
}

fn number(v: &Value) -> Option<f64> {
    match *v {
        Value::F64(x) => Some(x),
        Value::I64(i) => Some(i as f64),
        Value::U64(u) => Some(u as f64),
        _ => None,
    }
}

/// Convert colors such as "rgb(67,147,195)" to `[67., 147., 195.]`.
fn parse_css(s: &str) -> Option<[f64; 3]> {
    let inner = s.trim().strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut colors = [0.; 3];
    let mut channels = inner.split(',');
    for c in colors.iter_mut() {
        *c = channels.next()?.trim().parse().ok()?;
    }
    if channels.next().is_some() { return None }
    Some(colors)
}

fn parse_color(colormap: &str, index: usize, v: &Value) -> Result<RGB<f64>> {
    let malformed = |reason: String| Error::MalformedColor {
        colormap: colormap.to_string(), index, reason };
    match v {
        Value::Array(channels) => {
            if channels.len() != 3 {
                return Err(malformed(format!("expected 3 channels, found {}",
                                             channels.len())))
            }
            let mut rgb = [0.; 3];
            for (c, v) in rgb.iter_mut().zip(channels) {
                *c = number(v).ok_or_else(|| malformed(format!("{v:?} is not a number")))?;
            }
            Ok(RGB::new(rgb[0], rgb[1], rgb[2]))
        }
        Value::String(s) => match parse_css(s) {
            Some([r, g, b]) => Ok(RGB::new(r / 255., g / 255., b / 255.)),
            None => Err(malformed(format!("“{s}” is not of the form rgb(R,G,B)"))),
        },
        _ => Err(malformed(format!("{v:?} is neither a list of channels nor \
                                    an rgb(R,G,B) string"))),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::io::Write;

    #[test]
    fn channel_lists_and_css_strings() {
        let file: ColormapFile = "{
            # comment
            heat: [[0, 0, 0], [1, 0.5, 0.25]]
            blues: [\"rgb(255,255,255)\", \"rgb( 0, 51 ,255)\"]
        }".parse().unwrap();
        assert_eq!(file.names(), ["heat", "blues"]);
        let heat = file.resolve("heat").unwrap();
        assert_eq!(heat.colors(), [RGB::new(0., 0., 0.), RGB::new(1., 0.5, 0.25)]);
        let blues = file.resolve("blues").unwrap();
        assert_eq!(blues.colors(), [RGB::new(1., 1., 1.), RGB::new(0., 0.2, 1.)]);
    }

    #[test]
    fn empty_colormap_loads() {
        let file: ColormapFile = "{ void: [] }".parse().unwrap();
        assert!(file.resolve("void").unwrap().is_empty());
        assert!(matches!(file.resolve("heat"), Err(Error::ColormapNotFound { .. })));
    }

    #[test]
    fn malformed_colors() {
        let err = "{ a: [[0, 0, 0], [1, 1]] }".parse::<ColormapFile>().unwrap_err();
        assert!(matches!(err, Error::MalformedColor { ref colormap, index: 1, .. }
                         if colormap == "a"), "{err}");
        assert_eq!(err.kind(), ErrorKind::Parse);
        let err = "{ a: [[0, true, 0]] }".parse::<ColormapFile>().unwrap_err();
        assert!(matches!(err, Error::MalformedColor { index: 0, .. }), "{err}");
        let err = "{ a: [\"rgb(1,2)\"] }".parse::<ColormapFile>().unwrap_err();
        assert!(matches!(err, Error::MalformedColor { .. }), "{err}");
        let err = "{ a: [\"#ff0000\"] }".parse::<ColormapFile>().unwrap_err();
        assert!(matches!(err, Error::MalformedColor { .. }), "{err}");
    }

    #[test]
    fn wrong_shapes() {
        let err = "{ a: 3 }".parse::<ColormapFile>().unwrap_err();
        assert!(matches!(err, Error::InvalidColormapFile(_)), "{err}");
        let err = "[[0, 0, 0]]".parse::<ColormapFile>().unwrap_err();
        assert!(matches!(err, Error::InvalidColormapFile(_)), "{err}");
    }

    #[test]
    fn open_file() {
        let mut fh = tempfile::NamedTempFile::new().unwrap();
        writeln!(fh, "{{\n  cividis: [\n    [0.000000, 0.135112, 0.304751]\n    \
                      [0.995737, 0.909344, 0.217772]\n  ]\n}}").unwrap();
        let file = ColormapFile::open(fh.path()).unwrap();
        let cividis = file.resolve("cividis").unwrap();
        assert_eq!(cividis.len(), 2);
        assert_eq!(cividis.colors()[1], RGB::new(0.995737, 0.909344, 0.217772));
    }

    #[test]
    fn missing_file() {
        let err = ColormapFile::open("/nonexistent/colormaps.hjson").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
