/// Straight (non-premultiplied) RGBA color with normalized channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses the CSS color forms hosts commonly hand to wave fills:
    /// `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    pub fn parse_css(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            return parse_functional(body.strip_suffix(')')?);
        }
        None
    }

    pub fn to_css(self) -> String {
        fn channel(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        let a = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
        format!(
            "rgba({}, {}, {}, {a})",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    fn byte(pair: &str) -> Option<f64> {
        u8::from_str_radix(pair, 16)
            .ok()
            .map(|v| f64::from(v) / 255.0)
    }

    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut c = hex.chars().map(|ch| {
                let s = ch.to_string();
                byte(&format!("{s}{s}"))
            });
            Some(Rgba::new(c.next()??, c.next()??, c.next()??, 1.0))
        }
        6 => Some(Rgba::new(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            1.0,
        )),
        8 => Some(Rgba::new(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            byte(&hex[6..8])?,
        )),
        _ => None,
    }
}

fn parse_functional(body: &str) -> Option<Rgba> {
    let parts: Vec<f64> = body
        .split(',')
        .map(|p| p.trim().parse::<f64>().ok())
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [r, g, b] => Some(Rgba::new(r / 255.0, g / 255.0, b / 255.0, 1.0)),
        [r, g, b, a] => Some(Rgba::new(r / 255.0, g / 255.0, b / 255.0, *a)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
