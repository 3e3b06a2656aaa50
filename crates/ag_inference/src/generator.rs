use ag_core::InferenceModel;
use std::sync::Arc;
use tracing::error;

const EXTRACT_TEMPLATE: &str = "\
### SCRAPED TEXT FROM WEBSITE:
{page_data}
### INSTRUCTION:
Summarize the key points and content of the website. Highlight the main ideas.
### OUTPUT:
";

const COMPOSE_TEMPLATE: &str = "\
### ARTICLE INFORMATION:
{article_info}
### INSTRUCTION:
Write a high-quality article based on the provided information. It should be engaging, informative, and tailored to a general audience. Avoid fluff and keep it concise.
### Website Article:
";

/// Two-stage prompt pipeline: summarize the page, then rewrite the
/// summary as an article. Splitting the calls keeps "what is this page
/// about" independent from "how should it be phrased", so each template
/// can be tuned on its own.
#[derive(Debug, Clone)]
pub struct ArticleGenerator {
    model: Arc<dyn InferenceModel>,
}

impl ArticleGenerator {
    pub fn new(model: Arc<dyn InferenceModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Summarizes cleaned page text. Provider failures are logged and
    /// degrade to `None`; callers must branch on it.
    pub async fn extract_website_info(&self, page_text: &str) -> Option<String> {
        let prompt = EXTRACT_TEMPLATE.replace("{page_data}", page_text);
        match self.model.complete(&prompt).await {
            Ok(info) => Some(info),
            Err(e) => {
                error!("Error extracting website info: {}", e);
                None
            }
        }
    }

    /// Rewrites a summary as an article. Same call-and-degrade contract
    /// as [`extract_website_info`](Self::extract_website_info).
    pub async fn generate_article(&self, article_info: &str) -> Option<String> {
        let prompt = COMPOSE_TEMPLATE.replace("{article_info}", article_info);
        match self.model.complete(&prompt).await {
            Ok(article) => Some(article),
            Err(e) => {
                error!("Error generating article: {}", e);
                None
            }
        }
    }
}
