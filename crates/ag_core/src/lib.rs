pub mod error;
pub mod text;
pub mod traits;
pub mod types;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use text::clean_text;
pub use traits::{InferenceModel, PageLoader};
pub use types::{ErrorResponse, GenerationRequest, GenerationResponse, Page};

pub mod prelude {
    pub use crate::text::clean_text;
    pub use crate::traits::{InferenceModel, PageLoader};
    pub use crate::types::{GenerationRequest, GenerationResponse, Page};
    pub use crate::{Error, Result};
}
