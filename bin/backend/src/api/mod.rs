pub mod errors;
pub mod generate;
pub mod page;
pub mod state;

use crate::opts::HttpOpts;

use std::time::Duration;

use axum::{
    Router,
    extract::{self, FromRequestParts},
    http::{HeaderValue, Method, Request, StatusCode, header},
    middleware::{self, Next},
    routing::get,
};
use axum_client_ip::ClientIp;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Every route the service exposes, without middleware.
pub fn routes(state: state::AppState) -> Router {
    Router::new()
        .route("/infoz", get(infoz_handler))
        .route("/healthz", get(|| async { StatusCode::OK }))
        .merge(page::routes())
        .merge(generate::routes())
        .with_state(state)
}

async fn infoz_handler() -> String {
    serde_json::to_string_pretty(atb_cli_utils::process_info()).unwrap_or_default()
}

pub fn build_app(opts: &HttpOpts, state: state::AppState) -> anyhow::Result<Router> {
    let allowed_origins = opts
        .origins
        .iter()
        .map(|v| v.parse::<HeaderValue>())
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    Ok(routes(state)
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
                .max_age(Duration::from_secs(3600)),
        )
        .layer(
            tower::ServiceBuilder::new()
                .layer(opts.client_ip_source.clone().into_extension())
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            ip = tracing::field::Empty
                        )
                    }),
                )
                .layer(middleware::from_fn(
                    async |request: extract::Request, next: Next| {
                        let (mut parts, body) = request.into_parts();
                        if let Ok(ip) = ClientIp::from_request_parts(&mut parts, &()).await {
                            let span = tracing::Span::current();
                            span.record("ip", ip.0.to_string());
                        } else {
                            tracing::debug!("client ip unavailable");
                        }
                        next.run(extract::Request::from_parts(parts, body)).await
                    },
                )),
        ))
}
