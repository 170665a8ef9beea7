use crate::analysis::color;
use crate::error::ForgeError;
use crate::results::{ColorPalette, default_body_size, default_font, default_heading_sizes};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub scrape: ScrapeConfig,

    #[serde(default)]
    pub analysis: AnalysisDefaults,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Configuration for the browser-driven page capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum number of pages loaded at the same time
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Maximum number of URLs accepted per analysis
    #[serde(default = "default_max_urls")]
    pub max_urls: usize,

    /// Timeout for loading and extracting one page
    #[serde(default = "default_page_timeout_secs")]
    pub page_timeout_secs: u64,

    /// Time given to client-side rendering after the load event
    #[serde(default = "default_render_wait_ms")]
    pub render_wait_ms: u64,

    /// Maximum number of distinct computed colors kept per page
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_headless")]
    pub headless: bool,
}

/// Fallback values and limits used by the design heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDefaults {
    /// Palette returned when no color could be read
    #[serde(default = "default_palette")]
    pub palette: ColorPalette,

    /// Palette used for dark designs built without analysis
    #[serde(default = "default_dark_palette")]
    pub dark_palette: ColorPalette,

    #[serde(default = "default_dark_background")]
    pub dark_background: String,

    #[serde(default = "default_dark_text")]
    pub dark_text: String,

    #[serde(default = "default_light_background")]
    pub light_background: String,

    #[serde(default = "default_light_text")]
    pub light_text: String,

    #[serde(default = "default_primary")]
    pub primary: String,

    #[serde(default = "default_accent")]
    pub accent: String,

    /// Factor applied to the primary color when no second vibrant color exists
    #[serde(default = "default_darken_factor")]
    pub darken_factor: f64,

    #[serde(default = "default_top_colors")]
    pub top_colors: usize,

    #[serde(default = "default_font")]
    pub font: String,

    /// Family names that never become heading or body fonts
    #[serde(default = "default_generic_fonts")]
    pub generic_fonts: Vec<String>,

    #[serde(default = "default_top_fonts")]
    pub top_fonts: usize,

    #[serde(default = "default_heading_sizes")]
    pub heading_sizes: Vec<String>,

    #[serde(default = "default_body_size")]
    pub body_size: String,

    #[serde(default = "default_max_animations")]
    pub max_animations: usize,
}

/// Configuration for the completion service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl ForgeConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ForgeError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ForgeError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.analysis.validate()?;
        config.scrape.apply_env();
        Ok(config)
    }
}

impl AnalysisDefaults {
    /// Check that every fallback color is a hex color
    pub fn validate(&self) -> Result<(), ForgeError> {
        let palettes = [("palette", &self.palette), ("dark_palette", &self.dark_palette)];
        let mut fields: Vec<(String, &str)> = Vec::new();
        for (name, palette) in palettes {
            fields.extend([
                (format!("{}.primary", name), palette.primary.as_str()),
                (format!("{}.secondary", name), palette.secondary.as_str()),
                (format!("{}.accent", name), palette.accent.as_str()),
                (format!("{}.background", name), palette.background.as_str()),
                (format!("{}.text", name), palette.text.as_str()),
            ]);
        }
        fields.extend([
            ("dark_background".to_string(), self.dark_background.as_str()),
            ("dark_text".to_string(), self.dark_text.as_str()),
            ("light_background".to_string(), self.light_background.as_str()),
            ("light_text".to_string(), self.light_text.as_str()),
            ("primary".to_string(), self.primary.as_str()),
            ("accent".to_string(), self.accent.as_str()),
        ]);

        match fields.into_iter().find(|(_, value)| color::parse_hex(value).is_none()) {
            Some((field, value)) => Err(ForgeError::InvalidColor {
                field,
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl ScrapeConfig {
    /// Override the WebDriver URL with the WEBDRIVER_URL environment variable if set
    pub fn apply_env(&mut self) {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        let mut config = Self {
            webdriver_url: default_webdriver_url(),
            max_concurrency: default_max_concurrency(),
            max_urls: default_max_urls(),
            page_timeout_secs: default_page_timeout_secs(),
            render_wait_ms: default_render_wait_ms(),
            max_colors: default_max_colors(),
            user_agent: default_user_agent(),
            headless: default_headless(),
        };
        config.apply_env();
        config
    }
}

impl Default for AnalysisDefaults {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            dark_palette: default_dark_palette(),
            dark_background: default_dark_background(),
            dark_text: default_dark_text(),
            light_background: default_light_background(),
            light_text: default_light_text(),
            primary: default_primary(),
            accent: default_accent(),
            darken_factor: default_darken_factor(),
            top_colors: default_top_colors(),
            font: default_font(),
            generic_fonts: default_generic_fonts(),
            top_fonts: default_top_fonts(),
            heading_sizes: default_heading_sizes(),
            body_size: default_body_size(),
            max_animations: default_max_animations(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key_env: default_api_key_env(),
            api_version: default_api_version(),
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_max_concurrency() -> usize {
    5
}

fn default_max_urls() -> usize {
    5
}

fn default_page_timeout_secs() -> u64 {
    45
}

fn default_render_wait_ms() -> u64 {
    2000
}

fn default_max_colors() -> usize {
    50
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_palette() -> ColorPalette {
    ColorPalette {
        primary: "#3b82f6".to_string(),
        secondary: "#1e40af".to_string(),
        accent: "#f59e0b".to_string(),
        background: "#ffffff".to_string(),
        text: "#1f2937".to_string(),
    }
}

fn default_dark_palette() -> ColorPalette {
    ColorPalette {
        primary: "#6366f1".to_string(),
        secondary: "#4f46e5".to_string(),
        accent: "#f59e0b".to_string(),
        background: "#0f172a".to_string(),
        text: "#f8fafc".to_string(),
    }
}

fn default_dark_background() -> String {
    "#0a0a0a".to_string()
}

fn default_dark_text() -> String {
    "#ffffff".to_string()
}

fn default_light_background() -> String {
    "#ffffff".to_string()
}

fn default_light_text() -> String {
    "#1a1a1a".to_string()
}

fn default_primary() -> String {
    "#3b82f6".to_string()
}

fn default_accent() -> String {
    "#f59e0b".to_string()
}

fn default_darken_factor() -> f64 {
    0.8
}

fn default_top_colors() -> usize {
    20
}

fn default_generic_fonts() -> Vec<String> {
    vec![
        "serif".to_string(),
        "sans-serif".to_string(),
        "monospace".to_string(),
    ]
}

fn default_top_fonts() -> usize {
    3
}

fn default_max_animations() -> usize {
    10
}

fn default_api_url() -> String {
    "https://api.anthropic.com/v1/messages".to_string()
}

fn default_api_key_env() -> String {
    "ANTHROPIC_API_KEY".to_string()
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    8192
}
