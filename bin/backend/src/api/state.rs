use axum::extract::FromRef;
use breakit_core::{llm::CompletionGateway, segmenter::RenderOptions};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub gateway: Arc<dyn CompletionGateway>,
    pub render: RenderOptions,
}

impl AppState {
    pub fn new(gateway: Arc<dyn CompletionGateway>, render: RenderOptions) -> Self {
        Self { gateway, render }
    }
}
