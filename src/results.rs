use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw design signals captured from one landing page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPageSample {
    /// URL the page was loaded from
    pub url: String,

    /// Full page markup
    #[serde(default)]
    pub html: String,

    /// Visible text of the body
    #[serde(default)]
    pub text_content: String,

    /// Inline stylesheet text blobs
    #[serde(default)]
    pub styles: Vec<String>,

    /// First font family of each text element
    #[serde(default)]
    pub fonts: Vec<String>,

    /// Computed colors in `#hex` or `rgb()`/`rgba()` form
    #[serde(default)]
    pub colors: Vec<String>,

    /// Section candidates in document order
    #[serde(default)]
    pub sections: Vec<SectionElement>,

    /// Title and meta tags
    #[serde(default)]
    pub meta: PageMeta,
}

/// Title and meta information of a page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub og_image: Option<String>,
    pub theme_color: Option<String>,
}

/// One DOM element considered a page section candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionElement {
    /// Lowercase tag name
    pub tag: String,

    /// Whitespace-joined class names
    pub classes: String,

    pub id: String,

    /// Computed background color as reported by the browser
    pub background_color: String,

    pub has_heading: bool,
    pub has_button: bool,
    pub has_grid: bool,

    /// Position among the captured candidates
    pub order: usize,

    /// Rendered height in CSS pixels
    pub height: f64,
}

impl SectionElement {
    /// Create a section candidate with only a tag and class names set
    pub fn new(tag: &str, classes: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: classes.to_string(),
            ..Self::default()
        }
    }
}

/// Role-assigned palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

/// Font choices and the fixed type scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    #[serde(default = "default_font")]
    pub heading_font: String,

    #[serde(default = "default_font")]
    pub body_font: String,

    /// h1, h2, h3
    #[serde(default = "default_heading_sizes")]
    pub heading_sizes: Vec<String>,

    #[serde(default = "default_body_size")]
    pub body_size: String,
}

pub(crate) fn default_font() -> String {
    "Inter".to_string()
}

pub(crate) fn default_heading_sizes() -> Vec<String> {
    vec!["4rem".to_string(), "2.5rem".to_string(), "1.5rem".to_string()]
}

pub(crate) fn default_body_size() -> String {
    "1rem".to_string()
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            heading_font: default_font(),
            body_font: default_font(),
            heading_sizes: default_heading_sizes(),
            body_size: default_body_size(),
        }
    }
}

/// Presence of the common landing page blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPattern {
    pub has_hero: bool,
    pub has_features_grid: bool,
    pub has_testimonials: bool,
    pub has_pricing: bool,
    pub has_cta: bool,
    pub has_footer: bool,
    pub is_dark_mode: bool,
}

impl Default for LayoutPattern {
    fn default() -> Self {
        Self {
            has_hero: true,
            has_features_grid: true,
            has_testimonials: false,
            has_pricing: false,
            has_cta: true,
            has_footer: true,
            is_dark_mode: false,
        }
    }
}

/// Canonical landing page block categories, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Features,
    HowItWorks,
    Testimonials,
    Pricing,
    Faq,
    Cta,
    Footer,
}

impl SectionKind {
    /// All kinds in detection priority order
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::Features,
        SectionKind::HowItWorks,
        SectionKind::Testimonials,
        SectionKind::Pricing,
        SectionKind::Faq,
        SectionKind::Cta,
        SectionKind::Footer,
    ];

    /// Label used in serialized output and prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::HowItWorks => "how_it_works",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Pricing => "pricing",
            SectionKind::Faq => "faq",
            SectionKind::Cta => "cta",
            SectionKind::Footer => "footer",
        }
    }

    /// Class-name fragments that indicate this kind
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SectionKind::Hero => &["hero", "header", "banner"],
            SectionKind::Features => &["feature", "benefit", "service"],
            SectionKind::HowItWorks => &["how", "step", "process"],
            SectionKind::Testimonials => &["testimonial", "review", "customer"],
            SectionKind::Pricing => &["pricing", "price", "plan"],
            SectionKind::Faq => &["faq", "question", "answer"],
            SectionKind::Cta => &["cta", "action", "signup", "subscribe"],
            SectionKind::Footer => &["footer"],
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section list used when nothing was analyzed
pub fn default_sections() -> Vec<SectionKind> {
    vec![
        SectionKind::Hero,
        SectionKind::Features,
        SectionKind::Cta,
        SectionKind::Footer,
    ]
}

/// Unified design profile of one or more analyzed pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignAnalysis {
    pub colors: ColorPalette,
    pub typography: Typography,
    pub layout: LayoutPattern,

    /// Ordered section kinds, hero first and footer last
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionKind>,

    /// Detected animation and transition class names
    #[serde(default)]
    pub animations: Vec<String>,

    pub source_urls: Vec<String>,
}

/// A product feature shown in the generated page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,

    /// Optional icon name or emoji
    #[serde(default)]
    pub icon: Option<String>,
}

/// User-supplied product copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    pub tagline: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub features: Vec<Feature>,

    #[serde(default = "default_cta_text")]
    pub cta_text: String,

    #[serde(default = "default_cta_url")]
    pub cta_url: String,

    #[serde(default)]
    pub logo_url: Option<String>,
}

fn default_cta_text() -> String {
    "Get Started".to_string()
}

fn default_cta_url() -> String {
    "#".to_string()
}

impl ProductInfo {
    /// Create product copy with default CTA and no features
    pub fn new(name: &str, tagline: &str) -> Self {
        Self {
            name: name.to_string(),
            tagline: tagline.to_string(),
            description: String::new(),
            features: Vec::new(),
            cta_text: default_cta_text(),
            cta_url: default_cta_url(),
            logo_url: None,
        }
    }
}

/// A generated landing page together with its inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPage {
    /// Complete HTML document
    pub html: String,
    pub design_analysis: DesignAnalysis,
    pub product_info: ProductInfo,
    pub created_at: DateTime<Utc>,
}
