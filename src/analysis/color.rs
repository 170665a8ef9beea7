use regex::Regex;
use std::sync::LazyLock;

/// Luminance below which a color counts as dark
pub const DARK_LUMINANCE: f64 = 0.3;
/// Luminance above which a color counts as light
pub const LIGHT_LUMINANCE: f64 = 0.7;
/// Minimum saturation of a vibrant color
pub const VIBRANT_SATURATION: f64 = 0.4;
/// Exclusive channel bounds for the brightest channel of a vibrant color
pub const VIBRANT_MIN_CHANNEL: u8 = 50;
pub const VIBRANT_MAX_CHANNEL: u8 = 240;

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\((\d+),\s*(\d+),\s*(\d+)").expect("rgb pattern is valid")
});

/// Brightness classification of a color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorTraits {
    pub is_dark: bool,
    pub is_light: bool,
    pub is_vibrant: bool,
}

/// Parses `#rgb` or `#rrggbb` into channels
pub fn parse_hex(hex_color: &str) -> Option<(u8, u8, u8)> {
    let digits = hex_color.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Perceptual luminance in 0..=1
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0
}

/// Spread between the brightest and darkest channel relative to the brightest
pub fn saturation(r: u8, g: u8, b: u8) -> f64 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == 0 {
        0.0
    } else {
        (max - min) as f64 / max as f64
    }
}

/// Classifies a hex color. Malformed input is neither dark, light nor vibrant.
pub fn classify(hex_color: &str) -> ColorTraits {
    let Some((r, g, b)) = parse_hex(hex_color) else {
        ::log::trace!("Unparseable color: {:?}", hex_color);
        return ColorTraits::default();
    };

    let lum = luminance(r, g, b);
    let max = r.max(g).max(b);

    ColorTraits {
        is_dark: lum < DARK_LUMINANCE,
        is_light: lum > LIGHT_LUMINANCE,
        is_vibrant: saturation(r, g, b) > VIBRANT_SATURATION
            && max > VIBRANT_MIN_CHANNEL
            && max < VIBRANT_MAX_CHANNEL,
    }
}

pub fn is_dark(hex_color: &str) -> bool {
    classify(hex_color).is_dark
}

pub fn is_light(hex_color: &str) -> bool {
    classify(hex_color).is_light
}

pub fn is_vibrant(hex_color: &str) -> bool {
    classify(hex_color).is_vibrant
}

/// Scales every channel by `factor`. Malformed input is returned unchanged.
pub fn darken(hex_color: &str, factor: f64) -> String {
    let Some((r, g, b)) = parse_hex(hex_color) else {
        return hex_color.to_string();
    };

    let scale = |c: u8| (c as f64 * factor).clamp(0.0, 255.0).floor() as u8;
    format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b))
}

/// Converts `rgb(r, g, b)` or `rgba(r, g, b, a)` to `#rrggbb`
pub fn rgb_to_hex(rgb_string: &str) -> Option<String> {
    let caps = RGB_PATTERN.captures(rgb_string)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);
    Some(format!("#{:02x}{:02x}{:02x}", r, g, b))
}

/// Lowercase hex form of a CSS color string, if it is hex or rgb()/rgba()
pub fn normalize_color(color: &str) -> Option<String> {
    if color.starts_with('#') {
        Some(color.to_lowercase())
    } else if color.starts_with("rgb") {
        rgb_to_hex(color)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_extremes() {
        assert_eq!(
            classify("#000000"),
            ColorTraits {
                is_dark: true,
                is_light: false,
                is_vibrant: false
            }
        );
        assert_eq!(
            classify("#ffffff"),
            ColorTraits {
                is_dark: false,
                is_light: true,
                is_vibrant: false
            }
        );
    }

    #[test]
    fn test_classify_mid_tone() {
        // luminance of #808080 is ~0.5
        let traits = classify("#808080");
        assert!(!traits.is_dark);
        assert!(!traits.is_light);
        assert!(!traits.is_vibrant);
    }

    #[test]
    fn test_vibrant_colors() {
        assert!(is_vibrant("#2563eb"));
        assert!(is_vibrant("#d97706"));
        // saturated but the brightest channel is at or above 240
        assert!(!is_vibrant("#ff0000"));
        assert!(!is_vibrant("#3b82f6"));
        // saturated but too dark
        assert!(!is_vibrant("#300000"));
        assert!(!is_vibrant("#777777"));
    }

    #[test]
    fn test_short_hex_expands() {
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex("#1a2"), Some((0x11, 0xaa, 0x22)));
        assert!(is_light("#fff"));
        assert!(is_dark("#111"));
    }

    #[test]
    fn test_malformed_input_is_never_classified() {
        for input in ["", "#", "fff", "#ffff", "#gggggg", "#12345", "#1234567", "#+fffff", "blue"] {
            assert_eq!(
                classify(input),
                ColorTraits::default(),
                "input {:?} should not classify",
                input
            );
        }
    }

    #[test]
    fn test_dark_and_light_are_exclusive() {
        for v in (0..=255u32).step_by(5) {
            let hex = format!("#{:02x}{:02x}{:02x}", v, (v * 7) % 256, (v * 13) % 256);
            let traits = classify(&hex);
            assert!(!(traits.is_dark && traits.is_light), "{} is both", hex);
        }
    }

    #[test]
    fn test_darken() {
        assert_eq!(darken("#3b82f6", 0.8), "#2f68c4");
        assert_eq!(darken("#fff", 0.5), "#7f7f7f");
        assert_eq!(darken("#000000", 0.8), "#000000");
        assert_eq!(darken("#ffffff", 2.0), "#ffffff");
    }

    #[test]
    fn test_darken_malformed_unchanged() {
        assert_eq!(darken("not-a-color", 0.8), "not-a-color");
        assert_eq!(darken("#12", 0.8), "#12");
        assert_eq!(darken("", 0.8), "");
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex("rgb(59, 130, 246)"), Some("#3b82f6".to_string()));
        assert_eq!(rgb_to_hex("rgba(0, 0, 0, 0.5)"), Some("#000000".to_string()));
        assert_eq!(rgb_to_hex("rgb(255,255,255)"), Some("#ffffff".to_string()));
        assert_eq!(rgb_to_hex("rgb(300, 0, 0)"), None);
        assert_eq!(rgb_to_hex("color: rgb(1, 2, 3)"), None);
        assert_eq!(rgb_to_hex("transparent"), None);
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("#FFAA00"), Some("#ffaa00".to_string()));
        assert_eq!(normalize_color("rgb(17, 17, 17)"), Some("#111111".to_string()));
        assert_eq!(normalize_color("red"), None);
        assert_eq!(normalize_color(""), None);
    }
}
