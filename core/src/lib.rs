pub mod breakdown;
pub mod form;
pub mod llm;
pub mod model;
pub mod prompt;
pub mod segmenter;

pub use breakdown::generate;
pub use model::{Framework, GenerationRequest, GenerationResponse, Length, Section, Tone};
