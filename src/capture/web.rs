use crate::capture::markup;
use crate::config::ScrapeConfig;
use crate::results::{RawPageSample, SectionElement};
use fantoccini::{Client, ClientBuilder};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::time::{Duration, timeout};

/// Collects computed colors, fonts and section candidates in one round trip.
/// `arguments[0]` is the maximum number of distinct colors to return.
const EXTRACT_SCRIPT: &str = r#"
const maxColors = arguments[0];

const colors = new Set();
document.querySelectorAll('*').forEach(el => {
    const computed = window.getComputedStyle(el);
    const bg = computed.backgroundColor;
    if (bg && bg !== 'rgba(0, 0, 0, 0)' && bg !== 'transparent') {
        colors.add(bg);
    }
    if (computed.color) {
        colors.add(computed.color);
    }
    const border = computed.borderColor;
    if (border && border !== 'rgba(0, 0, 0, 0)') {
        colors.add(border);
    }
});

const fonts = new Set();
document.querySelectorAll('h1, h2, h3, h4, p, a, button, span').forEach(el => {
    const family = window.getComputedStyle(el).fontFamily;
    if (family) {
        fonts.add(family.split(',')[0].trim().replace(/['"]/g, ''));
    }
});

const candidates = document.querySelectorAll(
    'section, header, footer, main, [class*="hero"], [class*="feature"], ' +
    '[class*="pricing"], [class*="testimonial"], [class*="cta"]'
);
const sections = Array.from(candidates).map((el, index) => {
    const rect = el.getBoundingClientRect();
    const computed = window.getComputedStyle(el);
    return {
        tag: el.tagName.toLowerCase(),
        classes: typeof el.className === 'string' ? el.className : (el.getAttribute('class') || ''),
        id: el.id || '',
        backgroundColor: computed.backgroundColor || '',
        hasHeading: el.querySelector('h1, h2, h3') !== null,
        hasButton: el.querySelector('button, a[class*="btn"], a[class*="button"]') !== null,
        hasGrid: el.querySelector('[class*="grid"]') !== null || computed.display === 'grid',
        order: index,
        height: rect.height,
    };
});

return {
    colors: Array.from(colors).slice(0, maxColors),
    fonts: Array.from(fonts),
    sections: sections,
    text: document.body ? document.body.innerText : '',
};
"#;

/// Shape of the extraction script's result
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BrowserSignals {
    colors: Vec<String>,
    fonts: Vec<String>,
    sections: Vec<SectionElement>,
    text: String,
}

/// Scrapes every URL concurrently and returns the pages that could be captured.
///
/// One task is spawned per URL; at most `max_concurrency` pages are loaded at
/// once. Pages that fail to load are logged and skipped, and the result keeps
/// the order of `urls`.
pub async fn scrape_urls(urls: &[String], config: &ScrapeConfig) -> Vec<RawPageSample> {
    ::log::info!("Scraping {} URLs via {}", urls.len(), config.webdriver_url);

    let semaphore = Arc::new(Semaphore::new(config.max_concurrency.max(1)));
    let mut handles = Vec::with_capacity(urls.len());

    for (worker_id, url) in urls.iter().enumerate() {
        let url = url.clone();
        let config = config.clone();
        let semaphore = Arc::clone(&semaphore);

        handles.push(tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await.ok()?;
            ::log::debug!("Worker {} acquired permit for: {}", worker_id, url);
            scrape_url(worker_id, &url, &config).await
        }));
    }

    let mut pages = Vec::with_capacity(urls.len());
    for (url, handle) in urls.iter().zip(handles) {
        match handle.await {
            Ok(Some(page)) => pages.push(page),
            Ok(None) => ::log::warn!("Skipping {}: page could not be scraped", url),
            Err(e) => ::log::error!("Scrape task for {} failed: {}", url, e),
        }
    }

    ::log::info!("Scraped {} of {} URLs", pages.len(), urls.len());
    pages
}

/// Scrapes one URL in its own WebDriver session
pub async fn scrape_url(worker_id: usize, url: &str, config: &ScrapeConfig) -> Option<RawPageSample> {
    let client = connect_to_webdriver(worker_id, config).await?;
    let started = std::time::Instant::now();

    let result = timeout(
        Duration::from_secs(config.page_timeout_secs),
        capture_page(&client, url, worker_id, config),
    )
    .await;

    if let Err(e) = client.close().await {
        ::log::warn!("Worker {} failed to close client: {}", worker_id, e);
    }

    match result {
        Ok(page) => {
            ::log::debug!(
                "Worker {} scraped {} in {:.2} seconds",
                worker_id,
                url,
                started.elapsed().as_secs_f64()
            );
            page
        }
        Err(_) => {
            ::log::error!("Timeout scraping: {}", url);
            None
        }
    }
}

/// Navigates to a page and collects its raw design signals
async fn capture_page(
    client: &Client,
    url: &str,
    worker_id: usize,
    config: &ScrapeConfig,
) -> Option<RawPageSample> {
    if let Err(e) = client.goto(url).await {
        return handle_navigation_error(e, "accessing", worker_id, url);
    }

    // give client-side rendering a moment after the load event
    tokio::time::sleep(Duration::from_millis(config.render_wait_ms)).await;

    let value = match client.execute(EXTRACT_SCRIPT, vec![json!(config.max_colors)]).await {
        Ok(value) => value,
        Err(e) => return handle_navigation_error(e, "running extraction script on", worker_id, url),
    };
    let signals: BrowserSignals = match serde_json::from_value(value) {
        Ok(signals) => signals,
        Err(e) => {
            ::log::error!("Unexpected extraction result for {}: {}", url, e);
            return None;
        }
    };

    let html = match client.source().await {
        Ok(source) => source,
        Err(e) => return handle_navigation_error(e, "getting source for", worker_id, url),
    };
    let markup = markup::extract(&html);

    ::log::info!(
        "Captured {} colors, {} fonts, {} sections from {}",
        signals.colors.len(),
        signals.fonts.len(),
        signals.sections.len(),
        url
    );

    Some(RawPageSample {
        url: url.to_string(),
        html,
        text_content: signals.text,
        styles: markup.styles,
        fonts: signals.fonts,
        colors: signals.colors,
        sections: signals.sections,
        meta: markup.meta,
    })
}

/// Browser capabilities for a headless Chrome session
fn capabilities(config: &ScrapeConfig) -> Map<String, Value> {
    let mut args = vec![
        format!("--user-agent={}", config.user_agent),
        "--no-sandbox".to_string(),
        "--disable-setuid-sandbox".to_string(),
    ];
    if config.headless {
        args.push("--headless=new".to_string());
    }

    let mut caps = Map::new();
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    caps
}

/// Connects to the configured WebDriver, falling back to common local ports
async fn connect_to_webdriver(worker_id: usize, config: &ScrapeConfig) -> Option<Client> {
    let mut builder = ClientBuilder::native();
    builder.capabilities(capabilities(config));

    match builder.connect(&config.webdriver_url).await {
        Ok(client) => {
            ::log::debug!(
                "Worker {} connected to WebDriver at {}",
                worker_id,
                config.webdriver_url
            );
            return Some(client);
        }
        Err(e) => {
            ::log::error!(
                "Worker {} failed to connect to WebDriver at {}: {}",
                worker_id,
                config.webdriver_url,
                e
            );
        }
    }

    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://127.0.0.1:4444",
    ];

    for url in fallback_urls {
        if url == config.webdriver_url {
            continue;
        }

        ::log::info!("Worker {} trying fallback WebDriver URL: {}", worker_id, url);
        if let Ok(client) = builder.connect(url).await {
            ::log::debug!("Worker {} connected to fallback WebDriver at {}", worker_id, url);
            return Some(client);
        }
    }

    ::log::error!(
        "Worker {} failed to connect to any WebDriver server. Make sure one is running or set WEBDRIVER_URL",
        worker_id
    );
    None
}

/// Logs a WebDriver command failure; the page is skipped
fn handle_navigation_error(
    error: fantoccini::error::CmdError,
    context: &str,
    worker_id: usize,
    url: &str,
) -> Option<RawPageSample> {
    if error.to_string().contains("Unable to find session") {
        ::log::warn!("Worker {} lost session while {} {}", worker_id, context, url);
    } else {
        ::log::error!("Failed {} {}: {}", context, url, error);
    }
    None
}
