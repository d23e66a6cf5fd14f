use crate::{api, opts::*};

use std::sync::Arc;

use atb_tokio_ext::shutdown_signal;
use breakit_core::{llm::OpenAiGateway, segmenter::RenderOptions};
use tokio::net::TcpListener;

pub async fn run(
    http_opts: HttpOpts,
    completion_opts: CompletionOpts,
    render_opts: RenderOpts,
) -> anyhow::Result<()> {
    let config = completion_opts.gateway_config();
    tracing::info!(
        endpoint = %config.endpoint,
        model = %config.model,
        max_tokens = config.max_tokens,
        "completion gateway configured"
    );
    let gateway = Arc::new(OpenAiGateway::new(config));
    let render = RenderOptions::from(&render_opts);
    if !render.escape_html {
        tracing::warn!("model output is rendered without HTML escaping");
    }

    let app_state = api::state::AppState::new(gateway, render);

    tracing::info!("http listening on {}", http_opts.host);
    let app = api::build_app(&http_opts, app_state)?;
    let listener = TcpListener::bind(&http_opts.host).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}
