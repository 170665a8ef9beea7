use crate::analysis::rank_by_frequency;
use crate::results::RawPageSample;
use regex::Regex;

/// Class-name families that indicate animations or transitions
pub const ANIMATION_PATTERNS: [&str; 5] = [
    r"animate-[\w-]+",
    r"transition-[\w-]+",
    r"fade-[\w-]+",
    r"slide-[\w-]+",
    r"hover:[\w-]+",
];

/// Scans stylesheets and markup for animation class names
#[derive(Debug)]
pub struct AnimationDetector {
    patterns: Vec<Regex>,
}

impl Default for AnimationDetector {
    fn default() -> Self {
        Self::new().expect("Built-in animation patterns should be valid")
    }
}

impl AnimationDetector {
    /// Compile the built-in patterns
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_patterns(&ANIMATION_PATTERNS)
    }

    /// Compile a custom set of patterns
    pub fn with_patterns(patterns: &[&str]) -> Result<Self, regex::Error> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            compiled.push(Regex::new(pattern)?);
        }
        Ok(Self { patterns: compiled })
    }

    /// All matches in one text, in text order.
    ///
    /// Each pattern is searched on its own so overlapping classes such as
    /// `hover:fade-in` and `fade-in` are both reported. Matches starting at
    /// the same offset keep pattern order.
    pub fn find_in<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut matches: Vec<(usize, usize, &'t str)> = self
            .patterns
            .iter()
            .enumerate()
            .flat_map(|(index, re)| re.find_iter(text).map(move |m| (m.start(), index, m.as_str())))
            .collect();
        matches.sort_by_key(|&(start, index, _)| (start, index));
        matches.into_iter().map(|(_, _, found)| found).collect()
    }

    /// Distinct animation classes across all pages, most frequent first.
    ///
    /// Ties keep the order of first occurrence: stylesheets before markup
    /// within a page, pages in input order.
    pub fn detect(&self, pages: &[RawPageSample], limit: usize) -> Vec<String> {
        let mut found = Vec::new();
        for page in pages {
            for style in &page.styles {
                found.extend(self.find_in(style));
            }
            found.extend(self.find_in(&page.html));
        }
        ::log::debug!("Found {} animation class occurrences", found.len());

        rank_by_frequency(found, limit)
    }
}
