use crate::{
    llm::{CompletionError, CompletionGateway},
    model::{GenerationRequest, GenerationResponse},
    prompt,
    segmenter::{self, RenderOptions},
};

use tracing::instrument;

/// Runs one request through the whole pipeline: compose the prompt, make a
/// single completion call and split the answer into sections. A failed call
/// fails the whole request; nothing is segmented.
#[instrument(skip_all, fields(frameworks = req.effective_frameworks().len()))]
pub async fn generate(
    gateway: &dyn CompletionGateway,
    req: &GenerationRequest,
    opts: &RenderOptions,
) -> Result<GenerationResponse, CompletionError> {
    let prompt = prompt::compose(req);
    let text = gateway.complete(&prompt).await?;
    let outputs = segmenter::segment(&text, opts);
    tracing::info!(
        completion_len = text.len(),
        sections = outputs.len(),
        "breakdown generated"
    );
    Ok(GenerationResponse { outputs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Framework, Length, Tone};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubGateway {
        reply: Result<String, (u16, String)>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubGateway {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionGateway for StubGateway {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply
                .clone()
                .map_err(|(status, body)| CompletionError::Upstream { status, body })
        }
    }

    #[tokio::test]
    async fn test_generate_end_to_end() {
        let gateway = StubGateway::replying("## SWOT\nStrengths: ...\n");
        let req = GenerationRequest::new(
            "Users churn after week 1",
            [Framework::Swot],
            Tone::Practical,
            Length::Concise,
        )
        .unwrap();

        let res = generate(&gateway, &req, &RenderOptions::default())
            .await
            .unwrap();
        assert_eq!(res.outputs.len(), 1);
        assert_eq!(res.outputs[0].title, "SWOT");
        assert!(res.outputs[0].html.starts_with("<h2>SWOT</h2>"));

        let prompts = gateway.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Users churn after week 1"));
        assert!(prompts[0].contains("SWOT"));
    }

    #[tokio::test]
    async fn test_generate_propagates_upstream_failure() {
        let gateway = StubGateway {
            reply: Err((401, "bad key".into())),
            prompts: Mutex::new(Vec::new()),
        };
        let req =
            GenerationRequest::new("x", [], Tone::Practical, Length::Concise).unwrap();

        match generate(&gateway, &req, &RenderOptions::default()).await {
            Err(CompletionError::Upstream { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "bad key");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
