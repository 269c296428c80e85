use crate::foundation::core::Rgba8;
use crate::foundation::error::{BrellaError, BrellaResult};
use std::fmt;
use std::str::FromStr;

/// HSL colour with hue in degrees `[0, 360]` and saturation/lightness in percent `[0, 100]`.
///
/// `Hsl` is `Copy`, so "clone then darken" is just `color.darken(5.0)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    /// Create a colour from raw channel values (not normalized).
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Lower lightness by `amount` percentage points, clamped into `[0, 100]`.
    pub fn darken(self, amount: f64) -> Self {
        Self {
            l: (self.l - amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Raise lightness by `amount` percentage points, clamped into `[0, 100]`.
    pub fn lighten(self, amount: f64) -> Self {
        self.darken(-amount)
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    pub fn spin(self, degrees: f64) -> Self {
        let hue = (self.h + degrees) % 360.0;
        Self {
            h: if hue < 0.0 { 360.0 + hue } else { hue },
            ..self
        }
    }

    /// Unrounded RGB channels in `[0, 255]`.
    pub fn to_rgb(self) -> [f64; 3] {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        if s == 0.0 {
            return [l * 255.0; 3];
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        [
            hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0,
            hue_to_rgb(p, q, h) * 255.0,
            hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0,
        ]
    }

    /// Rounded, opaque RGBA8 (the same bytes [`Hsl::to_hex_string`] prints).
    pub fn to_rgba8(self) -> Rgba8 {
        // Round half up; hex strings and raster paint must agree byte for byte.
        fn to_u8(x: f64) -> u8 {
            (x + 0.5).floor().clamp(0.0, 255.0) as u8
        }
        let [r, g, b] = self.to_rgb();
        Rgba8::opaque(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex_string(self) -> String {
        let c = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    }

    /// Parse `#rrggbb` / `rrggbb` into HSL.
    pub fn from_hex(s: &str) -> BrellaResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(BrellaError::validation(format!(
                "hex colour must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> BrellaResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| BrellaError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        let r = f64::from(hex_byte(&s[0..2])?) / 255.0;
        let g = f64::from(hex_byte(&s[2..4])?) / 255.0;
        let b = f64::from(hex_byte(&s[4..6])?) / 255.0;
        Ok(rgb_to_hsl(r, g, b))
    }
}

fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Hsl {
    type Err = BrellaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Hsl> for Rgba8 {
    fn from(c: Hsl) -> Self {
        c.to_rgba8()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsl.rs"]
mod tests;
