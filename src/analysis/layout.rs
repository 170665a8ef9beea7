use crate::analysis::color;
use crate::results::{LayoutPattern, SectionElement, SectionKind};

/// Flags the common landing page blocks from section class names, ids and tags
pub fn detect_layout(sections: &[SectionElement]) -> LayoutPattern {
    let classes = joined_classes(sections);
    let ids = sections
        .iter()
        .map(|s| s.id.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let combined = format!("{} {}", classes, ids);
    let mentions = |needles: &[&str]| needles.iter().any(|n| combined.contains(n));

    let has_hero = mentions(&["hero"])
        || sections
            .iter()
            .any(|s| s.tag.eq_ignore_ascii_case("header") && s.has_heading);
    let has_features_grid = mentions(&["feature"]) || sections.iter().any(|s| s.has_grid);
    let has_footer = sections.iter().any(|s| s.tag.eq_ignore_ascii_case("footer"));

    LayoutPattern {
        has_hero,
        has_features_grid,
        has_testimonials: mentions(&["testimonial", "review"]),
        has_pricing: mentions(&["pricing", "price"]),
        has_cta: mentions(&["cta", "action"]),
        has_footer,
        is_dark_mode: has_dark_backgrounds(sections),
    }
}

/// More than half of the sections have a dark background
fn has_dark_backgrounds(sections: &[SectionElement]) -> bool {
    if sections.is_empty() {
        return false;
    }

    let dark = sections
        .iter()
        .filter_map(|s| color::normalize_color(&s.background_color))
        .filter(|hex| color::is_dark(hex))
        .count();
    ::log::debug!("{} of {} section backgrounds are dark", dark, sections.len());

    dark * 2 > sections.len()
}

/// Ordered section kinds found in class names, always starting with hero and
/// ending with footer
pub fn detect_sections(sections: &[SectionElement]) -> Vec<SectionKind> {
    let classes = joined_classes(sections);

    let mut detected: Vec<SectionKind> = SectionKind::ALL
        .into_iter()
        .filter(|kind| kind.keywords().iter().any(|kw| classes.contains(kw)))
        .collect();

    if !detected.contains(&SectionKind::Hero) {
        detected.insert(0, SectionKind::Hero);
    }
    if !detected.contains(&SectionKind::Footer) {
        detected.push(SectionKind::Footer);
    }

    ::log::debug!("Detected sections: {:?}", detected);
    detected
}

fn joined_classes(sections: &[SectionElement]) -> String {
    sections
        .iter()
        .map(|s| s.classes.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
