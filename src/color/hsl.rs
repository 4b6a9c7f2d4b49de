use crate::foundation::{math::interpolate_number, scan::Scanner};

/// Integer hue/saturation/lightness triple, as written in `hsl(h, s%, l%)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: u32,
    /// Saturation in percent.
    pub s: u32,
    /// Lightness in percent.
    pub l: u32,
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl Hsl {
    /// Find the first `hsl(h,s%,l%)` occurrence in `color`.
    pub fn parse(color: &str) -> Option<Self> {
        color
            .match_indices("hsl(")
            .find_map(|(at, _)| parse_hsl_at(color, at))
    }

    /// Convert 8-bit RGB channels, rounding each component.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let mut h = 0.0;
        let mut s = 0.0;

        if max != min {
            let d = max - min;
            s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            h = if max == r {
                ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
            } else if max == g {
                ((b - r) / d + 2.0) / 6.0
            } else {
                ((r - g) / d + 4.0) / 6.0
            };
        }

        Self {
            h: (h * 360.0).round() as u32,
            s: (s * 100.0).round() as u32,
            l: (l * 100.0).round() as u32,
        }
    }
}

fn parse_hsl_at(color: &str, at: usize) -> Option<Hsl> {
    let mut sc = Scanner::at(color, at);
    sc.eat_str("hsl(").then_some(())?;
    let h = sc.uint()?;
    sc.eat(b',').then_some(())?;
    sc.skip_ws();
    let s = sc.uint()?;
    sc.eat_str("%,").then_some(())?;
    sc.skip_ws();
    let l = sc.uint()?;
    sc.eat_str("%)").then_some(())?;
    Some(Hsl { h, s, l })
}

fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let mut sc = Scanner::new(color.trim());
    sc.eat_str("rgb(").then_some(())?;
    let mut channel = |last: bool| -> Option<u8> {
        sc.skip_ws();
        let v = u8::try_from(sc.uint()?).ok()?;
        sc.skip_ws();
        sc.eat(if last { b')' } else { b',' }).then_some(v)
    };
    let r = channel(false)?;
    let g = channel(false)?;
    let b = channel(true)?;
    Some((r, g, b))
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((byte(0)?, byte(2)?, byte(4)?))
}

/// Rewrite `rgb(r,g,b)` and `#rrggbb` fills as `hsl(h, s%, l%)`; other
/// encodings are returned unchanged.
pub fn normalize_color(fill: &str) -> String {
    match parse_rgb(fill).or_else(|| parse_hex(fill)) {
        Some((r, g, b)) => Hsl::from_rgb8(r, g, b).to_string(),
        None => fill.to_owned(),
    }
}

/// Blend two `hsl(...)` colors component-wise. If either side does not parse
/// the result is a hard cut at `progress == 0.5`.
pub fn interpolate_color(from: &str, to: &str, progress: f64) -> String {
    if from == to {
        return from.to_owned();
    }
    let (Some(a), Some(b)) = (Hsl::parse(from), Hsl::parse(to)) else {
        return if progress < 0.5 { from } else { to }.to_owned();
    };

    let mix = |x: u32, y: u32| -> u32 {
        interpolate_number(f64::from(x), f64::from(y), progress)
            .round()
            .max(0.0) as u32
    };
    Hsl {
        h: mix(a.h, b.h),
        s: mix(a.s, b.s),
        l: mix(a.l, b.l),
    }
    .to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsl.rs"]
mod tests;
