//! Five-stop brand gradient used to colour ring tips.
//!
//! Stops are HSL triples (hue in degrees, saturation and lightness in
//! percent). Interpolation is channel-wise linear between the bracketing
//! stops, so the gradient is continuous over the whole [0, 100] range.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub percent: f64,
    pub color: Hsl,
}

pub const STOPS: [GradientStop; 5] = [
    // #C96457
    GradientStop {
        percent: 0.0,
        color: Hsl { h: 8.0, s: 48.0, l: 56.0 },
    },
    // #C9A66E
    GradientStop {
        percent: 25.0,
        color: Hsl { h: 44.0, s: 42.0, l: 50.0 },
    },
    // #90A26F
    GradientStop {
        percent: 50.0,
        color: Hsl { h: 90.0, s: 36.0, l: 44.0 },
    },
    // #58705A
    GradientStop {
        percent: 75.0,
        color: Hsl { h: 122.0, s: 29.0, l: 34.0 },
    },
    // #2E4A3F
    GradientStop {
        percent: 100.0,
        color: Hsl { h: 154.0, s: 23.0, l: 24.0 },
    },
];

/// Clamp to [0, 100], mapping NaN to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Colour of the gradient at `percent`.
///
/// The bracketing segment is found by a scan from the low end; a percent
/// that lands exactly on an inner stop belongs to the segment below it,
/// which puts it at `t = 1` and returns the stop colour unchanged.
pub fn color_at_percent(percent: f64) -> Hsl {
    let p = clamp_percent(percent);

    let mut i = 0;
    while i < STOPS.len() - 2 && p > STOPS[i + 1].percent {
        i += 1;
    }

    let start = STOPS[i];
    let end = STOPS[i + 1];
    let t = (p - start.percent) / (end.percent - start.percent);

    Hsl {
        h: lerp(start.color.h, end.color.h, t),
        s: lerp(start.color.s, end.color.s, t),
        l: lerp(start.color.l, end.color.l, t),
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Rgb {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// CSS form, e.g. `hsl(90, 36%, 44%)`
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
