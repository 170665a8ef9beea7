use crate::results::PageMeta;
use scraper::{Html, Selector};

/// Signals read from static page markup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkupSignals {
    /// Text of every inline `<style>` element
    pub styles: Vec<String>,
    pub meta: PageMeta,
}

/// Extracts inline stylesheets, the title and meta tags from HTML
pub fn extract(html: &str) -> MarkupSignals {
    let doc = Html::parse_document(html);

    let style_selector = Selector::parse("style").unwrap();
    let styles = doc
        .select(&style_selector)
        .map(|e| e.text().collect::<String>())
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>();

    let title_selector = Selector::parse("title").unwrap();
    let title = doc
        .select(&title_selector)
        .next()
        .map(|e| {
            e.text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|t| !t.is_empty());

    let meta = PageMeta {
        title,
        description: meta_content(&doc, "description")
            .or_else(|| meta_content(&doc, "og:description")),
        og_image: meta_content(&doc, "og:image"),
        theme_color: meta_content(&doc, "theme-color"),
    };

    ::log::debug!("Markup has {} inline stylesheets", styles.len());

    MarkupSignals { styles, meta }
}

/// Content of the first `<meta>` whose name or property equals `name`
fn meta_content(doc: &Html, name: &str) -> Option<String> {
    let meta_selector = Selector::parse("meta").unwrap();
    doc.select(&meta_selector)
        .find(|e| {
            let el = e.value();
            el.attr("name") == Some(name) || el.attr("property") == Some(name)
        })
        .and_then(|e| e.value().attr("content"))
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<html>
        <head>
            <title>  Acme   Rockets </title>
            <meta name="theme-color" content="#0f172a">
            <meta property="og:description" content="Rockets for everyone">
            <meta property="og:image" content="https://acme.test/og.png">
            <style>.hero { background: #000 }</style>
            <style>   </style>
        </head>
        <body><style>.fade-in { opacity: 1 }</style><h1>Acme</h1></body>
    </html>"##;

    #[test]
    fn test_extract_styles() {
        let signals = extract(PAGE);
        assert_eq!(
            signals.styles,
            vec![".hero { background: #000 }", ".fade-in { opacity: 1 }"]
        );
    }

    #[test]
    fn test_extract_meta() {
        let signals = extract(PAGE);
        assert_eq!(signals.meta.title.as_deref(), Some("Acme Rockets"));
        assert_eq!(signals.meta.description.as_deref(), Some("Rockets for everyone"));
        assert_eq!(signals.meta.og_image.as_deref(), Some("https://acme.test/og.png"));
        assert_eq!(signals.meta.theme_color.as_deref(), Some("#0f172a"));
    }

    #[test]
    fn test_description_prefers_name() {
        let html = r#"<head>
            <meta property="og:description" content="og">
            <meta name="description" content="plain">
        </head>"#;
        assert_eq!(extract(html).meta.description.as_deref(), Some("plain"));
    }

    #[test]
    fn test_empty_document() {
        let signals = extract("");
        assert!(signals.styles.is_empty());
        assert_eq!(signals.meta, PageMeta::default());
    }
}
