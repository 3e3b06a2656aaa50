use crate::{Page, Result};
use async_trait::async_trait;
use std::fmt;

/// Fetches pages and exposes their text content.
#[async_trait]
pub trait PageLoader: Send + Sync {
    /// Returns the name of the loader backend
    fn name(&self) -> &str;

    /// Fetches each URL and returns the loaded pages
    async fn load(&self, urls: &[String]) -> Result<Vec<Page>>;
}

/// A hosted text-generation model invoked with a rendered prompt.
#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    /// Returns the name of the model backend
    fn name(&self) -> &str;

    /// Sends the prompt and returns the generated text
    async fn complete(&self, prompt: &str) -> Result<String>;
}
