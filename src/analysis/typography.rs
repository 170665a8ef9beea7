use crate::analysis::rank_by_frequency;
use crate::config::AnalysisDefaults;
use crate::results::Typography;

/// Picks heading and body fonts from the most common font families.
///
/// Only the top few families are considered; generic fallbacks like
/// `sans-serif` are dropped after ranking, so a page dominated by generic
/// names falls back to the default font. Sizes are always the configured scale.
pub fn build_typography(fonts: &[String], defaults: &AnalysisDefaults) -> Typography {
    let mut typography = Typography {
        heading_font: defaults.font.clone(),
        body_font: defaults.font.clone(),
        heading_sizes: defaults.heading_sizes.clone(),
        body_size: defaults.body_size.clone(),
    };

    if fonts.is_empty() {
        return typography;
    }

    let common = rank_by_frequency(fonts.iter().map(String::as_str), defaults.top_fonts);
    let specific: Vec<&String> = common
        .iter()
        .filter(|font| !is_generic(font, &defaults.generic_fonts))
        .collect();
    ::log::debug!("Most common fonts: {:?}, specific: {:?}", common, specific);

    if let Some(heading) = specific.first() {
        typography.heading_font = heading.to_string();
    }
    typography.body_font = match specific.get(1) {
        Some(body) => body.to_string(),
        None => typography.heading_font.clone(),
    };

    typography
}

fn is_generic(font: &str, generic_fonts: &[String]) -> bool {
    generic_fonts.iter().any(|g| g.eq_ignore_ascii_case(font))
}
