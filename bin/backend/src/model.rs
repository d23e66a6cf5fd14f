use breakit_core::model::{GenerationRequest, ValidationError};
use serde::{Deserialize, Serialize};

/// Body of `POST /generate` as it arrives on the wire. Every field is
/// optional here so that a missing problem gets the same answer as an empty
/// one.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub frameworks: Option<Vec<String>>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
}

impl TryFrom<GenerateRequest> for GenerationRequest {
    type Error = ValidationError;

    fn try_from(req: GenerateRequest) -> Result<Self, Self::Error> {
        GenerationRequest::parse(
            req.problem.as_deref().unwrap_or_default(),
            req.frameworks.as_deref().unwrap_or_default(),
            req.tone.as_deref(),
            req.length.as_deref(),
        )
    }
}

pub use breakit_core::model::GenerationResponse as GenerateResponse;
