use crate::api::state::AppState;

use axum::{Router, response::Html, routing::get};
use breakit_core::{Framework, Length, Tone, form::EMPTY_PROBLEM_MESSAGE};

const TEMPLATE: &str = include_str!("../../assets/index.html");

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}

async fn index_handler() -> Html<String> {
    Html(render_index())
}

/// The form page with toggles and select options filled in from the enums.
pub fn render_index() -> String {
    let toggles = enum_iterator::all::<Framework>()
        .map(|f| {
            format!(
                r#"<button type="button" class="toggle" data-framework="{id}" aria-pressed="{on}">{name}</button>"#,
                id = f,
                on = f.enabled_by_default(),
                name = f.display_name(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    let tones = options(
        enum_iterator::all::<Tone>().map(|t| (t.to_string(), t.label(), t == Tone::default())),
    );
    let lengths = options(
        enum_iterator::all::<Length>()
            .map(|l| (l.to_string(), l.label(), l == Length::default())),
    );

    // embedded as a JS string literal in the submit check
    let empty_problem = serde_json::to_string(EMPTY_PROBLEM_MESSAGE).unwrap_or_default();

    TEMPLATE
        .replace("{{framework_toggles}}", &toggles)
        .replace("{{tone_options}}", &tones)
        .replace("{{length_options}}", &lengths)
        .replace("{{empty_problem_message}}", &empty_problem)
}

fn options(items: impl Iterator<Item = (String, &'static str, bool)>) -> String {
    items
        .map(|(value, label, selected)| {
            let selected = if selected { " selected" } else { "" };
            format!(r#"<option value="{value}"{selected}>{}</option>"#, label.replace('&', "&amp;"))
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}
