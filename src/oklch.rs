//! Hex sRGB to OKLCH conversion
//!
//! Pipeline: hex → sRGB → linear sRGB → CIE XYZ (D65) → LMS → OKLab → OKLCH.
//! Constants follow Björn Ottosson's OKLab definition with the XYZ-based
//! first matrix, so output matches the stylesheet values generated so far.

use std::fmt;

use crate::error::ToolError;

/// Linear sRGB → XYZ (D65)
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ → LMS cone response
const XYZ_TO_LMS: [[f64; 3]; 3] = [
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.6338517070],
];

/// Non-linear LMS → OKLab
const LMS_TO_OKLAB: [[f64; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

const OKLAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

const LMS_TO_XYZ: [[f64; 3]; 3] = [
    [1.2270138511, -0.5577999807, 0.2812561490],
    [-0.0405801784, 1.1122568696, -0.0716766787],
    [-0.0763812845, -0.4214819784, 1.5861632204],
];

const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// A color in OKLCH space, rounded to the precision stored in tokens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OklchColor {
    /// Lightness in [0, 1], 4 decimals
    pub l: f64,
    /// Chroma, 4 decimals
    pub c: f64,
    /// Hue in degrees [0, 360), 2 decimals
    pub h: f64,
}

impl fmt::Display for OklchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({} {} {})",
            to_fixed(self.l, 2),
            to_fixed(self.c, 2),
            to_fixed(self.h, 0)
        )
    }
}

/// Parse `#RRGGBB` (or `RRGGBB`) into its three bytes
pub fn parse_hex(hex: &str) -> Result<[u8; 3], ToolError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ToolError::invalid_color(hex));
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| ToolError::invalid_color(hex))?;
    }
    Ok(rgb)
}

/// Convert a hex color to OKLCH
pub fn hex_to_oklch(hex: &str) -> Result<OklchColor, ToolError> {
    let [r, g, b] = parse_hex(hex)?;

    let linear = [r, g, b].map(|c| srgb_to_linear(f64::from(c) / 255.0));
    let xyz = mul(&RGB_TO_XYZ, linear);
    let lms = mul(&XYZ_TO_LMS, xyz).map(f64::cbrt);
    let [l, a, b] = mul(&LMS_TO_OKLAB, lms);

    let c = (a * a + b * b).sqrt();
    let mut h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }

    Ok(OklchColor {
        l: round_to(l, 4),
        c: round_to(c, 4),
        h: round_to(h, 2),
    })
}

/// Render a color as a CSS `oklch()` value
pub fn format_oklch(color: &OklchColor) -> String {
    color.to_string()
}

/// Convert OKLCH back to 8-bit sRGB, clamping out-of-gamut channels
pub fn oklch_to_rgb(color: &OklchColor) -> [u8; 3] {
    let h = color.h.to_radians();
    let lab = [color.l, color.c * h.cos(), color.c * h.sin()];

    let lms = mul(&OKLAB_TO_LMS, lab).map(|v| v * v * v);
    let xyz = mul(&LMS_TO_XYZ, lms);
    let linear = mul(&XYZ_TO_RGB, xyz);

    linear.map(|c| (linear_to_srgb(c).clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Enough fractional digits to print any f64 exactly
const EXACT_DIGITS: usize = 1100;

/// Fixed-point rendering of the exact binary value. A tie only exists when
/// the exact expansion ends in `5` right after `digits`; those round away
/// from zero instead of to even.
fn to_fixed(value: f64, digits: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let exact = format!("{:.*}", EXACT_DIGITS, magnitude);
    let Some((int_part, fraction)) = exact.split_once('.') else {
        return format!("{sign}{:.*}", digits, magnitude);
    };

    let (kept, rest) = fraction.split_at(digits.min(fraction.len()));
    let is_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{sign}{:.*}", digits, magnitude);
    }

    let truncated = if kept.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{kept}")
    };
    format!("{sign}{}", increment_last_digit(&truncated))
}

/// Add one unit in the last place of a plain decimal string, e.g. `0.99` → `1.00`
fn increment_last_digit(decimal: &str) -> String {
    let mut bytes = decimal.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}
