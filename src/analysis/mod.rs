pub mod animation;
pub mod color;
pub mod layout;
pub mod palette;
pub mod typography;

#[cfg(test)]
mod tests;

use crate::config::AnalysisDefaults;
use crate::results::{DesignAnalysis, LayoutPattern, RawPageSample, Typography, default_sections};
use animation::AnimationDetector;
use std::collections::HashMap;

/// Distinct items ordered by descending count, ties in first-seen order,
/// truncated to `limit`
pub fn rank_by_frequency<'a, I>(items: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        match index.get(item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item, counts.len());
                counts.push((item, 1));
            }
        }
    }

    // stable, so equal counts keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(item, _)| item.to_string())
        .collect()
}

/// Derives a unified design profile from scraped pages
#[derive(Debug, Default)]
pub struct DesignAnalyzer {
    defaults: AnalysisDefaults,
    animations: AnimationDetector,
}

impl DesignAnalyzer {
    /// Create an analyzer with the given fallback values and limits
    pub fn new(defaults: AnalysisDefaults) -> Self {
        Self {
            defaults,
            animations: AnimationDetector::default(),
        }
    }

    /// Analyze pages, pooling colors, fonts and sections in page order
    pub fn analyze(&self, pages: &[RawPageSample]) -> DesignAnalysis {
        if pages.is_empty() {
            ::log::info!("No pages to analyze, using default design");
            return DesignAnalysis::fallback(false, &self.defaults);
        }

        let colors: Vec<String> = pages.iter().flat_map(|p| p.colors.iter().cloned()).collect();
        let fonts: Vec<String> = pages.iter().flat_map(|p| p.fonts.iter().cloned()).collect();
        let sections: Vec<_> = pages.iter().flat_map(|p| p.sections.iter().cloned()).collect();
        ::log::debug!(
            "Analyzing {} pages: {} colors, {} fonts, {} sections",
            pages.len(),
            colors.len(),
            fonts.len(),
            sections.len()
        );

        let analysis = DesignAnalysis {
            colors: palette::build_palette(&colors, &self.defaults),
            typography: typography::build_typography(&fonts, &self.defaults),
            layout: layout::detect_layout(&sections),
            sections: layout::detect_sections(&sections),
            animations: self.animations.detect(pages, self.defaults.max_animations),
            source_urls: pages.iter().map(|p| p.url.clone()).collect(),
        };

        ::log::info!(
            "Analyzed {} pages: primary {}, background {}, {} sections, dark mode {}",
            pages.len(),
            analysis.colors.primary,
            analysis.colors.background,
            analysis.sections.len(),
            analysis.layout.is_dark_mode
        );
        analysis
    }
}

impl DesignAnalysis {
    /// Design used when there is nothing to analyze
    pub fn fallback(dark: bool, defaults: &AnalysisDefaults) -> Self {
        let colors = if dark {
            defaults.dark_palette.clone()
        } else {
            defaults.palette.clone()
        };

        Self {
            colors,
            typography: Typography {
                heading_font: defaults.font.clone(),
                body_font: defaults.font.clone(),
                heading_sizes: defaults.heading_sizes.clone(),
                body_size: defaults.body_size.clone(),
            },
            layout: LayoutPattern {
                is_dark_mode: dark,
                ..LayoutPattern::default()
            },
            sections: default_sections(),
            animations: Vec::new(),
            source_urls: Vec::new(),
        }
    }
}

/// Analyze pages with the default configuration
pub fn analyze_designs(pages: &[RawPageSample]) -> DesignAnalysis {
    DesignAnalyzer::default().analyze(pages)
}
