//! Hex colour strings used by the app's themed labels.

/// Clamp a value to [lo, hi]
fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Colour with components normalised to [0..1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl RgbaColor {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when alpha < 1. Components are clamped first.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = [self.r, self.g, self.b, self.a]
            .map(|c| (clamp(c, 0.0, 1.0) * 255.0).round() as u8);
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

/// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
///
/// Surrounding whitespace is ignored and digits are case-insensitive.
pub fn parse_hex_color(s: &str) -> Option<RgbaColor> {
    let t = s.trim();
    let hex = t.strip_prefix('#').unwrap_or(t);
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b, a) = match hex.len() {
        6 => (channel(0)?, channel(2)?, channel(4)?, u8::MAX),
        8 => (channel(0)?, channel(2)?, channel(4)?, channel(6)?),
        _ => return None,
    };
    let norm = |v: u8| f64::from(v) / 255.0;
    Some(RgbaColor::new(norm(r), norm(g), norm(b), norm(a)))
}
