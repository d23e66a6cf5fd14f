//! Minimal markdown to HTML conversion for model output.
//!
//! Only headings (`#` to `###`), dash bullets and blank-line breaks are
//! recognised. Everything else passes through as-is, so unless
//! [`RenderOptions::escape_html`] is set, markup in the source ends up in the
//! output untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LINE_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("line break pattern is valid. qed"));

static LIST_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<li>.*?</li>(?:\n<li>.*?</li>)*").expect("list run pattern is valid. qed")
});

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `& < > " '` in text content before wrapping it in tags.
    pub escape_html: bool,
}

pub fn to_html(md: &str, opts: &RenderOptions) -> String {
    let md = md.replace("\r\n", "\n");
    let html = md
        .split('\n')
        .map(|line| render_line(line, opts))
        .collect::<Vec<_>>()
        .join("\n");

    let html = LINE_BREAKS.replace_all(&html, "<br/>");
    LIST_RUN
        .replace_all(&html, |caps: &Captures| {
            format!("<ul>{}</ul>", caps[0].replace('\n', ""))
        })
        .into_owned()
}

fn render_line(line: &str, opts: &RenderOptions) -> String {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if (1..=3).contains(&level) {
        let text = line[level..].trim_start();
        return format!("<h{level}>{}</h{level}>", text_content(text, opts));
    }

    if let Some(rest) = line.strip_prefix('-') {
        if rest.starts_with([' ', '\t']) {
            return format!("<li>{}</li>", text_content(rest.trim_start(), opts));
        }
    }

    text_content(line, opts)
}

fn text_content(text: &str, opts: &RenderOptions) -> String {
    if opts.escape_html {
        escape_html(text)
    } else {
        text.to_string()
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
