pub mod markup;
pub mod web;

pub use web::scrape_urls;
