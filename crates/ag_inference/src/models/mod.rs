pub mod dummy;
pub mod groq;

pub use dummy::DummyModel;
pub use groq::GroqModel;
