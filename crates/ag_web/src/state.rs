use ag_core::PageLoader;
use ag_inference::ArticleGenerator;
use std::sync::Arc;

/// Read-only dependencies shared by every request. Built once at
/// startup; handlers never mutate it.
pub struct AppState {
    pub loader: Arc<dyn PageLoader>,
    pub generator: ArticleGenerator,
}

impl AppState {
    pub fn new(loader: Arc<dyn PageLoader>, generator: ArticleGenerator) -> Self {
        Self { loader, generator }
    }
}
