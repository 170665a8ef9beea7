use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "landingforge")]
#[command(about = "Analyze landing pages and generate new ones inspired by their design")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze landing pages and extract design patterns
    Analyze {
        /// Landing page URLs to analyze
        #[arg(required = true)]
        urls: Vec<String>,

        /// Write the analysis as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of pages loaded at the same time
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Generate a landing page from product information
    Generate {
        /// Product or company name
        #[arg(short, long)]
        name: String,

        /// Hero headline
        #[arg(short, long)]
        tagline: String,

        /// What the product does
        #[arg(short, long, default_value = "")]
        description: String,

        /// Feature as 'Title:Description' (repeatable)
        #[arg(short, long = "feature")]
        features: Vec<String>,

        /// Call-to-action button text
        #[arg(long, default_value = "Get Started")]
        cta_text: String,

        /// Call-to-action link
        #[arg(long, default_value = "#")]
        cta_url: String,

        /// Logo image URL
        #[arg(long)]
        logo_url: Option<String>,

        /// JSON file with a saved design analysis
        #[arg(short, long)]
        analysis: Option<PathBuf>,

        /// Output HTML file
        #[arg(short, long, default_value = "landing-page.html")]
        output: PathBuf,

        /// Use the dark default design when no analysis is given
        #[arg(long)]
        dark: bool,
    },
}
