use clap::Parser;
use landingforge::config::ForgeConfig;
use landingforge::generator::PageGenerator;
use landingforge::results::ProductInfo;
use landingforge::{DesignAnalysis, Forge, ForgeError, utils};
use std::path::{Path, PathBuf};

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match ForgeConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load configuration from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ForgeConfig::default(),
    };

    let result = match args.command {
        Command::Analyze {
            urls,
            output,
            concurrency,
        } => run_analyze(config, urls, output, concurrency).await,
        Command::Generate {
            name,
            tagline,
            description,
            features,
            cta_text,
            cta_url,
            logo_url,
            analysis,
            output,
            dark,
        } => {
            let product = ProductInfo {
                description,
                features: features.iter().map(|f| utils::parse_feature(f)).collect(),
                cta_text,
                cta_url,
                logo_url,
                ..ProductInfo::new(&name, &tagline)
            };
            run_generate(config, product, analysis, output, dark).await
        }
    };

    if let Err(e) = result {
        ::log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_analyze(
    config: ForgeConfig,
    urls: Vec<String>,
    output: Option<PathBuf>,
    concurrency: Option<usize>,
) -> Result<(), ForgeError> {
    println!("Note: scraping requires a WebDriver server (e.g., ChromeDriver).");
    println!("Set WEBDRIVER_URL if not using the default {}", config.scrape.webdriver_url);

    let mut forge = Forge::new(urls).with_config(config);
    if let Some(concurrency) = concurrency {
        forge = forge.with_max_concurrency(concurrency);
    }

    let start_time = std::time::Instant::now();
    let analysis = forge.analyze().await?;
    ::log::info!(
        "Analysis complete in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );

    print_summary(&analysis);

    if let Some(path) = output {
        std::fs::write(&path, serde_json::to_string_pretty(&analysis)?)?;
        println!("Analysis saved to {}", path.display());
    }
    Ok(())
}

async fn run_generate(
    config: ForgeConfig,
    product: ProductInfo,
    analysis: Option<PathBuf>,
    output: PathBuf,
    dark: bool,
) -> Result<(), ForgeError> {
    let design = match analysis {
        Some(path) => load_analysis(&path)?,
        None => DesignAnalysis::fallback(dark, &config.analysis),
    };

    let generator = PageGenerator::from_config(&config.generator)?;
    let page = generator.generate(&design, &product).await?;

    std::fs::write(&output, &page.html)?;
    println!("Landing page generated: {}", output.display());
    println!("Open the file in a browser to preview it.");
    Ok(())
}

fn load_analysis(path: &Path) -> Result<DesignAnalysis, ForgeError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn print_summary(analysis: &DesignAnalysis) {
    let colors = &analysis.colors;
    println!();
    println!("Color Palette");
    for (role, value) in [
        ("Primary", &colors.primary),
        ("Secondary", &colors.secondary),
        ("Accent", &colors.accent),
        ("Background", &colors.background),
        ("Text", &colors.text),
    ] {
        println!("  {:<12}{}", role, value);
    }
    println!();
    println!("Typography");
    println!("  Heading Font: {}", analysis.typography.heading_font);
    println!("  Body Font: {}", analysis.typography.body_font);
    println!();

    let sections = analysis
        .sections
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Detected Sections: {}", sections);
    println!(
        "Dark Mode: {}",
        if analysis.layout.is_dark_mode { "Yes" } else { "No" }
    );
    if !analysis.animations.is_empty() {
        println!("Animations: {}", analysis.animations.join(", "));
    }
    println!();
}
