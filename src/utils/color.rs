//! Color palette math for theme generation.
//!
//! The page head embeds a set of CSS custom properties derived from the
//! configured brand color. All palette work happens here as pure
//! conversions between hex, RGB and HSL; the render module only consumes
//! the resulting hex strings.

use anyhow::{Result, bail};

/// A color in 8-bit RGB space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in HSL space, all components normalized to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// Maximum lightness delta for shade variants, ±0.2 around the base.
const VARIANT_LIGHTNESS_DELTA: f32 = 0.2;

// ============================================================================
// Conversions
// ============================================================================

/// Parse a hex color string into RGB.
///
/// Accepts `#RRGGBB` and the shorthand `#RGB` (with or without `#`).
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let cleaned = hex.trim_start_matches('#');
    let expanded: String = match cleaned.len() {
        3 => cleaned.chars().flat_map(|c| [c, c]).collect(),
        6 => cleaned.to_string(),
        _ => bail!("invalid hex color `{hex}`"),
    };

    let value = u32::from_str_radix(&expanded, 16)
        .map_err(|_| anyhow::anyhow!("invalid hex color `{hex}`"))?;

    Ok(Rgb {
        r: ((value >> 16) & 255) as u8,
        g: ((value >> 8) & 255) as u8,
        b: (value & 255) as u8,
    })
}

/// Format RGB as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Convert RGB to HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f32::from(rgb.r) / 255.0;
    let g = f32::from(rgb.g) / 255.0;
    let b = f32::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d == 0.0 {
        // achromatic
        return Hsl { h: 0.0, s: 0.0, l };
    }

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

    Hsl { h: h / 6.0, s, l }
}

/// Convert HSL to RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    if s == 0.0 {
        // achromatic
        let v = (l * 255.0).round() as u8;
        return Rgb { r: v, g: v, b: v };
    }

    fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
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

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: (hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        g: (hue_to_channel(p, q, h) * 255.0).round() as u8,
        b: (hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    }
}

/// Convert HSL straight to a hex string.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

// ============================================================================
// Palette Generation
// ============================================================================

/// Generate `count` shade variants of a base color by sweeping lightness.
///
/// Variants are evenly distributed from `l - 0.2` to `l + 0.2` (clamped
/// to `[0, 1]`), darkest first. For `count == 1` the base color is
/// returned unchanged.
pub fn generate_variants(base: Rgb, count: usize) -> Vec<String> {
    let hsl = rgb_to_hsl(base);

    if count <= 1 {
        return vec![rgb_to_hex(base)];
    }

    (0..count)
        .map(|i| {
            let step = (i as f32) * (2.0 * VARIANT_LIGHTNESS_DELTA) / ((count - 1) as f32);
            let l = (hsl.l - VARIANT_LIGHTNESS_DELTA + step).clamp(0.0, 1.0);
            hsl_to_hex(Hsl { l, ..hsl })
        })
        .collect()
}

/// Derive an accent color from the brand color by rotating hue 30°.
///
/// Used when the theme config does not provide an explicit accent.
pub fn derive_accent(base: Rgb) -> Rgb {
    let hsl = rgb_to_hsl(base);
    let mut h = hsl.h + 30.0 / 360.0;
    if h > 1.0 {
        h -= 1.0;
    }
    hsl_to_rgb(Hsl { h, ..hsl })
}

/// Whether a color reads as "dark" by perceived luminance.
pub fn is_dark(rgb: Rgb) -> bool {
    let brightness = (u32::from(rgb.r) * 299 + u32::from(rgb.g) * 587 + u32::from(rgb.b) * 114)
        as f32
        / 1000.0;
    brightness < 128.0
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_full() {
        assert_eq!(parse_hex("#2b689c").unwrap(), Rgb { r: 0x2b, g: 0x68, b: 0x9c });
        assert_eq!(parse_hex("ffffff").unwrap(), Rgb { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn test_parse_hex_shorthand() {
        // #abc expands to #aabbcc
        assert_eq!(parse_hex("#abc").unwrap(), Rgb { r: 0xaa, g: 0xbb, b: 0xcc });
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(parse_hex("#12345").is_err());
        assert!(parse_hex("#gggggg").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn test_rgb_hex_round_trip() {
        let rgb = Rgb { r: 43, g: 104, b: 156 };
        assert_eq!(parse_hex(&rgb_to_hex(rgb)).unwrap(), rgb);
    }

    #[test]
    fn test_rgb_hsl_achromatic() {
        let gray = Rgb { r: 128, g: 128, b: 128 };
        let hsl = rgb_to_hsl(gray);
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);

        let back = hsl_to_rgb(hsl);
        assert_eq!(back, gray);
    }

    #[test]
    fn test_rgb_hsl_round_trip_close() {
        let base = Rgb { r: 43, g: 104, b: 156 };
        let back = hsl_to_rgb(rgb_to_hsl(base));

        // f32 rounding may drift by one step per channel
        assert!((i32::from(back.r) - i32::from(base.r)).abs() <= 1);
        assert!((i32::from(back.g) - i32::from(base.g)).abs() <= 1);
        assert!((i32::from(back.b) - i32::from(base.b)).abs() <= 1);
    }

    #[test]
    fn test_generate_variants_count() {
        let base = parse_hex("#2b689c").unwrap();
        assert_eq!(generate_variants(base, 10).len(), 10);
        assert_eq!(generate_variants(base, 1), vec![rgb_to_hex(base)]);
    }

    #[test]
    fn test_generate_variants_darkest_first() {
        let base = parse_hex("#2b689c").unwrap();
        let variants = generate_variants(base, 5);

        let first = rgb_to_hsl(parse_hex(&variants[0]).unwrap());
        let last = rgb_to_hsl(parse_hex(&variants[4]).unwrap());
        assert!(first.l < last.l);
    }

    #[test]
    fn test_generate_variants_clamped() {
        // Near-white base: upper variants must clamp at full lightness
        let base = parse_hex("#fefefe").unwrap();
        let variants = generate_variants(base, 3);
        assert_eq!(variants[2], "#ffffff");
    }

    #[test]
    fn test_derive_accent_differs() {
        let base = parse_hex("#2b689c").unwrap();
        assert_ne!(derive_accent(base), base);
    }

    #[test]
    fn test_is_dark() {
        assert!(is_dark(parse_hex("#000000").unwrap()));
        assert!(is_dark(parse_hex("#23547f").unwrap()));
        assert!(!is_dark(parse_hex("#ffffff").unwrap()));
        assert!(!is_dark(parse_hex("#f0e68c").unwrap()));
    }
}
