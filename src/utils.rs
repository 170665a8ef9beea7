use crate::error::ForgeError;
use crate::results::Feature;
use url::Url;

/// Prefixes `https://` when the URL has no http(s) scheme
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Normalizes and validates the URLs of one analysis request
pub fn prepare_urls(urls: &[String], max_urls: usize) -> Result<Vec<String>, ForgeError> {
    if urls.is_empty() {
        return Err(ForgeError::NoUrls);
    }
    if urls.len() > max_urls {
        return Err(ForgeError::TooManyUrls {
            given: urls.len(),
            max: max_urls,
        });
    }

    urls.iter()
        .map(|raw| {
            let normalized = normalize_url(raw);
            Url::parse(&normalized)
                .map(|parsed| parsed.to_string())
                .map_err(|e| ForgeError::InvalidUrl(raw.clone(), e))
        })
        .collect()
}

/// Parses `Title:Description`; without a colon the whole text is the title
pub fn parse_feature(spec: &str) -> Feature {
    let (title, description) = match spec.split_once(':') {
        Some((title, description)) => (title.trim(), description.trim()),
        None => (spec, ""),
    };
    Feature {
        title: title.to_string(),
        description: description.to_string(),
        icon: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("linear.app"), "https://linear.app");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url(" https://vercel.com "), "https://vercel.com");
    }

    #[test]
    fn test_prepare_urls() {
        let urls = vec!["stripe.com".to_string(), "http://example.com/page".to_string()];
        let prepared = prepare_urls(&urls, 5).unwrap();
        assert_eq!(prepared, vec!["https://stripe.com/", "http://example.com/page"]);
    }

    #[test]
    fn test_prepare_urls_limits() {
        let urls: Vec<String> = (0..6).map(|i| format!("site{}.com", i)).collect();
        assert!(matches!(
            prepare_urls(&urls, 5),
            Err(ForgeError::TooManyUrls { given: 6, max: 5 })
        ));
        assert!(matches!(prepare_urls(&[], 5), Err(ForgeError::NoUrls)));
    }

    #[test]
    fn test_prepare_urls_invalid() {
        let urls = vec!["https://exa mple.com".to_string()];
        assert!(matches!(
            prepare_urls(&urls, 5),
            Err(ForgeError::InvalidUrl(..))
        ));
    }

    #[test]
    fn test_parse_feature() {
        let feature = parse_feature("Fast: Ships in minutes: really");
        assert_eq!(feature.title, "Fast");
        assert_eq!(feature.description, "Ships in minutes: really");

        let feature = parse_feature("Secure");
        assert_eq!(feature.title, "Secure");
        assert_eq!(feature.description, "");
    }
}
