use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid color for '{field}': {value:?} is not a #rgb or #rrggbb hex color")]
    InvalidColor { field: String, value: String },
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),
    #[error("At most {max} URLs can be analyzed at once, got {given}")]
    TooManyUrls { given: usize, max: usize },
    #[error("No URLs given")]
    NoUrls,
    #[error("Could not scrape any of the provided URLs")]
    NothingScraped,
    #[error("API key required. Set the {0} environment variable")]
    MissingApiKey(String),
    #[error("Completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Completion service returned an error: {0}")]
    Api(String),
    #[error("Completion response contained no text")]
    EmptyCompletion,
}
