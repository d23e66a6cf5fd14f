use atb_cli_utils::clap::{self, Parser};
use axum_client_ip::ClientIpSource;
use breakit_core::{
    llm::{
        GatewayConfig,
        openai::{DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE},
    },
    segmenter::RenderOptions,
};

#[derive(Debug, Clone, Parser)]
pub struct HttpOpts {
    /// Address/port for the HTTP listener
    #[arg(long, env = "BREAKIT_HOST", default_value = "0.0.0.0:3030")]
    pub host: String,

    #[arg(
        long,
        value_delimiter = ';',
        default_value = "http://localhost:3030;http://127.0.0.1:3030;http://localhost:3000;http://127.0.0.1:3000",
        env = "BREAKIT_CORS_ORIGINS"
    )]
    pub origins: Vec<String>,

    // Client IP extraction source (default: raw socket via ConnectInfo).
    #[arg(long, default_value = "ConnectInfo", env = "BREAKIT_CLIENT_IP_SOURCE")]
    pub client_ip_source: ClientIpSource,
}

#[derive(Clone, Parser)]
pub struct CompletionOpts {
    /// Bearer credential for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// Chat completions endpoint
    #[arg(long, env = "BREAKIT_COMPLETION_URL", default_value = DEFAULT_ENDPOINT)]
    pub completion_url: String,

    #[arg(long, env = "BREAKIT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, env = "BREAKIT_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Maximum output tokens per completion
    #[arg(long, env = "BREAKIT_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,
}

impl CompletionOpts {
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            api_key: self.openai_api_key.clone(),
            endpoint: self.completion_url.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

impl std::fmt::Debug for CompletionOpts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.gateway_config(), f)
    }
}

#[derive(Clone, Debug, Parser)]
pub struct RenderOpts {
    /// HTML-escape model output before it is wrapped in markup
    #[arg(long, env = "BREAKIT_ESCAPE_HTML", default_value = "false")]
    pub escape_html: bool,
}

impl From<&RenderOpts> for RenderOptions {
    fn from(opts: &RenderOpts) -> Self {
        RenderOptions {
            escape_html: opts.escape_html,
        }
    }
}

#[derive(Clone, Debug, Parser)]
pub struct PromptOpts {
    /// Problem statement to break down
    pub problem: String,

    /// Framework ids, comma separated (mece, swot, fiveWhys, firstPrinciples, porter)
    #[arg(long, value_delimiter = ',')]
    pub frameworks: Vec<String>,

    #[arg(long)]
    pub tone: Option<String>,

    #[arg(long)]
    pub length: Option<String>,
}
