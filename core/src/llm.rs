pub mod gateway;
pub mod openai;

pub use gateway::{CompletionError, CompletionGateway};
pub use openai::{GatewayConfig, OpenAiGateway};
