use ag_core::{Error, Page, PageLoader, Result};
use async_trait::async_trait;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Fetches pages over HTTP and extracts their visible text.
pub struct WebLoader {
    client: reqwest::Client,
}

impl WebLoader {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    async fn fetch_page(&self, url: &str) -> Result<Page> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!("Fetching {}", parsed);
        let response = self.client.get(parsed).send().await?.error_for_status()?;
        let body = response.text().await?;

        let content = extract_text(&body);
        info!("Loaded {} ({} characters of text)", url, content.len());

        Ok(Page {
            url: url.to_string(),
            content,
        })
    }
}

impl Default for WebLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageLoader for WebLoader {
    fn name(&self) -> &str {
        "web"
    }

    async fn load(&self, urls: &[String]) -> Result<Vec<Page>> {
        let mut pages = Vec::with_capacity(urls.len());
        for url in urls {
            pages.push(self.fetch_page(url).await?);
        }
        Ok(pages)
    }
}

/// Extracts the visible text of an HTML document: every text node in
/// document order, with `script`, `style` and `noscript` subtrees
/// skipped. Whitespace is left untouched; normalization happens in the
/// text cleaner downstream.
fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();
    collect_text(document.tree.root(), &mut text);
    text
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text),
            Node::Element(element)
                if matches!(element.name(), "script" | "style" | "noscript") => {}
            _ => collect_text(child, out),
        }
    }
}

pub mod prelude {
    pub use super::WebLoader;
    pub use ag_core::{Page, PageLoader, Result};
}
