pub mod generator;
pub mod models;

pub use generator::ArticleGenerator;
pub use models::{DummyModel, GroqModel};

pub mod prelude {
    pub use crate::generator::ArticleGenerator;
    pub use crate::models::{DummyModel, GroqModel};
    pub use ag_core::{Error, InferenceModel, Result};
}
