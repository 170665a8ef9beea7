pub mod analysis;
pub mod capture;
pub mod config;
pub mod error;
pub mod generator;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use analysis::{DesignAnalyzer, analyze_designs};
pub use error::ForgeError;
pub use results::{DesignAnalysis, ProductInfo, RawPageSample};

/// Builder for scraping landing pages and analyzing their design
pub struct Forge {
    urls: Vec<String>,
    config: config::ForgeConfig,
}

impl Forge {
    /// Create a new builder for the given URLs with default configuration
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            config: config::ForgeConfig::default(),
        }
    }

    /// Set the configuration
    pub fn with_config(mut self, config: config::ForgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self, ForgeError> {
        let config = config::ForgeConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, ForgeError> {
        let config = config::ForgeConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Set the maximum number of pages loaded at the same time
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.scrape.max_concurrency = max_concurrency;
        self
    }

    /// Set the WebDriver URL
    pub fn with_webdriver_url(mut self, webdriver_url: &str) -> Self {
        self.config.scrape.webdriver_url = webdriver_url.to_string();
        self
    }

    /// The configuration in use
    pub fn config(&self) -> &config::ForgeConfig {
        &self.config
    }

    /// Scrape every URL and analyze the captured pages
    pub async fn analyze(self) -> Result<DesignAnalysis, ForgeError> {
        let urls = utils::prepare_urls(&self.urls, self.config.scrape.max_urls)?;

        let pages = capture::scrape_urls(&urls, &self.config.scrape).await;
        if pages.is_empty() {
            return Err(ForgeError::NothingScraped);
        }

        let analyzer = DesignAnalyzer::new(self.config.analysis);
        Ok(analyzer.analyze(&pages))
    }
}
