use crate::analysis::color::{self, ColorTraits};
use crate::analysis::rank_by_frequency;
use crate::config::AnalysisDefaults;
use crate::results::ColorPalette;

/// Builds a role-assigned palette from raw computed color strings.
///
/// Colors are normalized to lowercase hex, ranked by frequency, and split into
/// dark, light and vibrant subsets. The page set is treated as dark mode when
/// dark colors outnumber light ones among the ranked colors; background and
/// text roles follow from that, the accent roles from the vibrant subset.
pub fn build_palette(colors: &[String], defaults: &AnalysisDefaults) -> ColorPalette {
    let hex_colors: Vec<String> = colors
        .iter()
        .filter_map(|c| color::normalize_color(c))
        .collect();

    if hex_colors.is_empty() {
        ::log::debug!("No usable colors, using default palette");
        return defaults.palette.clone();
    }

    let ranked = rank_by_frequency(hex_colors.iter().map(String::as_str), defaults.top_colors);
    let classified: Vec<(&str, ColorTraits)> = ranked
        .iter()
        .map(|c| (c.as_str(), color::classify(c)))
        .collect();

    let subset = |pick: fn(&ColorTraits) -> bool| {
        classified
            .iter()
            .filter(|(_, traits)| pick(traits))
            .map(|(c, _)| *c)
            .collect::<Vec<&str>>()
    };
    let dark = subset(|t| t.is_dark);
    let light = subset(|t| t.is_light);
    let vibrant = subset(|t| t.is_vibrant);

    let is_dark_mode = dark.len() > light.len();
    ::log::debug!(
        "Palette from {} colors: {} dark, {} light, {} vibrant (dark mode: {})",
        ranked.len(),
        dark.len(),
        light.len(),
        vibrant.len(),
        is_dark_mode
    );

    let (background, text) = if is_dark_mode {
        (
            first_or(&dark, &defaults.dark_background),
            first_or(&light, &defaults.dark_text),
        )
    } else {
        (
            first_or(&light, &defaults.light_background),
            first_or(&dark, &defaults.light_text),
        )
    };

    let primary = first_or(&vibrant, &defaults.primary);
    let secondary = match vibrant.get(1) {
        Some(c) => c.to_string(),
        None => color::darken(&primary, defaults.darken_factor),
    };
    let accent = match vibrant.get(2) {
        Some(c) => c.to_string(),
        None => defaults.accent.clone(),
    };

    ColorPalette {
        primary,
        secondary,
        accent,
        background,
        text,
    }
}

fn first_or(list: &[&str], fallback: &str) -> String {
    list.first().copied().unwrap_or(fallback).to_string()
}
