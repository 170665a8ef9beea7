pub mod client;
pub mod prompt;

use crate::config::GeneratorConfig;
use crate::error::ForgeError;
use crate::results::{DesignAnalysis, GeneratedPage, ProductInfo};
use client::{CompletionClient, MessagesClient};

/// Turns a design analysis and product copy into a complete HTML page
pub struct PageGenerator<C: CompletionClient> {
    client: C,
}

impl PageGenerator<MessagesClient> {
    /// Generator backed by the configured completion endpoint
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ForgeError> {
        Ok(Self::new(MessagesClient::from_env(config)?))
    }
}

impl<C: CompletionClient> PageGenerator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn generate(
        &self,
        design: &DesignAnalysis,
        product: &ProductInfo,
    ) -> Result<GeneratedPage, ForgeError> {
        let prompt = prompt::build_generation_prompt(design, product);
        ::log::debug!("Generation prompt is {} bytes", prompt.len());

        let reply = self.client.complete(prompt::SYSTEM_PROMPT, &prompt).await?;
        let html = clean_html(&reply);
        ::log::info!("Generated {} bytes of HTML for {}", html.len(), product.name);

        Ok(GeneratedPage {
            html,
            design_analysis: design.clone(),
            product_info: product.clone(),
            created_at: chrono::Utc::now(),
        })
    }
}

/// Strips a surrounding Markdown code fence and makes sure the document
/// starts with a doctype
pub fn clean_html(reply: &str) -> String {
    let mut html = reply.to_string();

    if html.starts_with("```") {
        let mut lines: Vec<&str> = reply.split('\n').skip(1).collect();
        if lines.last().is_some_and(|l| l.trim() == "```") {
            lines.pop();
        }
        html = lines.join("\n");
    }

    if !html.trim().starts_with("<!DOCTYPE") {
        html = format!("<!DOCTYPE html>\n{}", html);
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisDefaults;
    use std::sync::Mutex;

    /// Replies with a canned answer and records the prompts it saw
    struct CannedClient {
        reply: Result<String, ()>,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl CannedClient {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl CompletionClient for CannedClient {
        async fn complete(&self, system: &str, prompt: &str) -> Result<String, ForgeError> {
            self.seen
                .lock()
                .unwrap()
                .push((system.to_string(), prompt.to_string()));
            self.reply.clone().map_err(|_| ForgeError::EmptyCompletion)
        }
    }

    #[test]
    fn test_clean_html_strips_fences() {
        let reply = "```html\n<!DOCTYPE html>\n<html></html>\n```";
        assert_eq!(clean_html(reply), "<!DOCTYPE html>\n<html></html>");
    }

    #[test]
    fn test_clean_html_unterminated_fence() {
        let reply = "```\n<!DOCTYPE html><html></html>";
        assert_eq!(clean_html(reply), "<!DOCTYPE html><html></html>");
    }

    #[test]
    fn test_clean_html_adds_doctype() {
        assert_eq!(clean_html("<html></html>"), "<!DOCTYPE html>\n<html></html>");
        assert_eq!(
            clean_html("  <!DOCTYPE html><html></html>"),
            "  <!DOCTYPE html><html></html>"
        );
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_cleans_reply() {
        let generator = PageGenerator::new(CannedClient::replying("```html\n<html></html>\n```"));
        let design = DesignAnalysis::fallback(false, &AnalysisDefaults::default());
        let product = ProductInfo::new("Acme", "Rockets");

        let page = generator.generate(&design, &product).await.unwrap();
        assert_eq!(page.html, "<!DOCTYPE html>\n<html></html>");
        assert_eq!(page.design_analysis, design);
        assert_eq!(page.product_info, product);

        let seen = generator.client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, prompt::SYSTEM_PROMPT);
        assert!(seen[0].1.contains("- Name: Acme"));
    }

    #[tokio::test]
    async fn test_generate_propagates_client_errors() {
        let generator = PageGenerator::new(CannedClient {
            reply: Err(()),
            seen: Mutex::new(Vec::new()),
        });
        let design = DesignAnalysis::fallback(true, &AnalysisDefaults::default());
        let result = generator
            .generate(&design, &ProductInfo::new("Acme", "Rockets"))
            .await;
        assert!(matches!(result, Err(ForgeError::EmptyCompletion)));
    }
}
