use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

/// Blended highlights never become more opaque than this.
pub const MAX_BLEND_ALPHA: f64 = 0.9;

/// An RGBA colour with 8-bit colour channels and a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Opacity, from 0 to 1.
    pub a: f64,
}

impl Rgba {
    /// Construct a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Average a set of colours into one.
///
/// Returns [`None`] for no colours and the colour itself for one. Otherwise each colour channel is the rounded mean,
/// and alpha is the mean alpha plus 0.1, capped at [`MAX_BLEND_ALPHA`].
pub fn blend(colors: &[Rgba]) -> Option<Rgba> {
    match colors {
        [] => None,
        [only] => Some(*only),
        _ => {
            let count = colors.len() as f64;
            let mean = |channel: fn(&Rgba) -> f64| colors.iter().map(channel).sum::<f64>() / count;
            // means of u8 values stay within u8 range
            let round = |value: f64| value.round() as u8;

            Some(Rgba {
                r: round(mean(|c| c.r as f64)),
                g: round(mean(|c| c.g as f64)),
                b: round(mean(|c| c.b as f64)),
                a: MAX_BLEND_ALPHA.min(mean(|c| c.a) + 0.1),
            })
        }
    }
}

/// Reasons a CSS colour string could not be read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColorParseError {
    /// Not of the form `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    Malformed,
    /// A channel was not a number in range.
    BadChannel(String),
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    /// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`; alpha defaults to 1.
    ///
    /// The whole string, less surrounding whitespace, must be the colour: text around it is [`Malformed`].
    /// Colour channels must fit in a byte, so `rgba(300,0,0,1)` is a [`BadChannel`] rather than clamped.
    ///
    /// [`Malformed`]: ColorParseError::Malformed
    /// [`BadChannel`]: ColorParseError::BadChannel
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = s.strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ColorParseError::Malformed)?;

        let parts = inner.split(',').map(str::trim).collect_vec();
        let channel = |part: &str| part.parse::<u8>().map_err(|_| ColorParseError::BadChannel(part.to_string()));

        let (r, g, b, a) = match parts.as_slice() {
            [r, g, b] => (channel(*r)?, channel(*g)?, channel(*b)?, 1.0),
            [r, g, b, a] => {
                let alpha = a.parse::<f64>()
                    .ok()
                    .filter(|alpha| alpha.is_finite() && *alpha >= 0.0)
                    .ok_or_else(|| ColorParseError::BadChannel(a.to_string()))?;
                (channel(*r)?, channel(*g)?, channel(*b)?, alpha)
            }
            _ => return Err(ColorParseError::Malformed),
        };

        Ok(Self { r, g, b, a })
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Blend CSS colour strings.
///
/// An empty input gives an empty string and a single input is returned untouched.
/// Strings that fail to parse are left out of the average; if none parse, the result is empty.
pub fn blend_css<S: AsRef<str>>(colors: &[S]) -> String {
    if let [only] = colors {
        return only.as_ref().to_string();
    }

    let parsed = colors.iter().filter_map(|c| c.as_ref().parse::<Rgba>().ok()).collect_vec();
    let blended = match parsed.as_slice() {
        // a lone survivor of a larger set still gets the blended alpha
        [only] => blend(&[*only, *only]),
        _ => blend(&parsed),
    };
    blended.map(|color| color.to_string()).unwrap_or_default()
}
