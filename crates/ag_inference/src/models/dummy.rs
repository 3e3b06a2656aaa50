use ag_core::{InferenceModel, Result};
use async_trait::async_trait;
use std::fmt;

/// Offline stand-in for a hosted model. Echoes the first words of the
/// prompt so pipeline behavior stays observable in tests.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

#[async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let words: Vec<&str> = prompt.split_whitespace().take(20).collect();
        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_prompt_head() {
        let model = DummyModel;
        let output = model.complete("one two three").await.unwrap();
        assert_eq!(output, "one two three");

        let long_prompt = "word ".repeat(50);
        let output = model.complete(&long_prompt).await.unwrap();
        assert_eq!(output.split_whitespace().count(), 20);
    }
}
