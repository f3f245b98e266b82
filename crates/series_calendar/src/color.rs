//! Diverging colour scale for rates.
//!
//! Colours follow the ColorBrewer RdYlGn scheme (red for low rates,
//! green for high), interpolated with a uniform cubic B-spline through
//! the 11 scheme colours.

use std::fmt;

/// ColorBrewer RdYlGn, 11 classes, red to green.
const RD_YL_GN: [u32; 11] = [
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xd9ef8b, 0xa6d96a, 0x66bd63,
    0x1a9850, 0x006837,
];

/// Fill for days with no rate.
pub const MISSING_COLOR: &str = "#eeeeee";

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    fn from_hex(hex: u32) -> [f64; 3] {
        [
            ((hex >> 16) & 0xff) as f64,
            ((hex >> 8) & 0xff) as f64,
            (hex & 0xff) as f64,
        ]
    }

    fn from_channels(channels: [f64; 3]) -> Self {
        let clamp = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Self {
            r: clamp(channels[0]),
            g: clamp(channels[1]),
            b: clamp(channels[2]),
        }
    }
}

impl fmt::Display for Rgb {
    /// Formats as a CSS hex colour (`#rrggbb`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Cubic B-spline basis for one segment.
fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// Unrounded channels of the RdYlGn spline at `t` in `[0, 1]`.
///
/// The spline passes exactly through the first and last scheme colours.
pub(crate) fn interpolate_channels(t: f64) -> [f64; 3] {
    let values = RD_YL_GN.map(Rgb::from_hex);
    let n = values.len() - 1;

    let (t, i) = if t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };

    let mut out = [0.0; 3];
    for (c, channel) in out.iter_mut().enumerate() {
        let v1 = values[i][c];
        let v2 = values[i + 1][c];
        let v0 = if i > 0 { values[i - 1][c] } else { 2.0 * v1 - v2 };
        let v3 = if i < n - 1 { values[i + 2][c] } else { 2.0 * v2 - v1 };
        *channel = basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3);
    }
    out
}

/// Sequential scale mapping a clamped numeric domain onto RdYlGn.
///
/// # Examples
///
/// ```
/// use series_calendar::ColorScale;
///
/// let scale = ColorScale::default();
/// assert_eq!(scale.color(-10.0).to_string(), "#a50026");
/// assert_eq!(scale.color(10.0).to_string(), "#006837");
/// // Out-of-domain values clamp to the ends
/// assert_eq!(scale.color(50.0), scale.color(10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    lo: f64,
    hi: f64,
}

impl ColorScale {
    /// Create a scale over `[lo, hi]`.
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Lower end of the domain.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper end of the domain.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Position of `value` within the domain, clamped to `[0, 1]`.
    pub fn normalise(&self, value: f64) -> f64 {
        if self.hi == self.lo {
            return 0.0;
        }
        ((value - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0)
    }

    /// Colour for `value`.
    pub fn color(&self, value: f64) -> Rgb {
        Rgb::from_channels(interpolate_channels(self.normalise(value)))
    }

    /// Fill for an optional rate: the scale colour, or [`MISSING_COLOR`].
    pub fn fill(&self, rate: Option<i64>) -> String {
        match rate {
            Some(rate) => self.color(rate as f64).to_string(),
            None => MISSING_COLOR.to_string(),
        }
    }

    /// Evenly spaced "nice" tick values covering the domain, roughly `count` of them.
    ///
    /// Steps are 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.lo <= self.hi {
            (self.lo, self.hi)
        } else {
            (self.hi, self.lo)
        };
        if count == 0 || hi == lo {
            return vec![lo];
        }

        let raw = (hi - lo) / count as f64;
        let power = 10f64.powf(raw.log10().floor());
        let error = raw / power;
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };
        let step = factor * power;

        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|k| k as f64 * step).collect()
    }
}

impl Default for ColorScale {
    /// Domain `[-10, 10]`, matching the default rate bounds.
    fn default() -> Self {
        Self::new(-10.0, 10.0)
    }
}
