//! Splits a completion into titled, rendered sections.
//!
//! Sections are cut at second-level headings (a line starting with `##`
//! followed by whitespace or nothing) and come out in the order they appear in the text, which is not
//! necessarily the order the frameworks were requested in.

pub mod markdown;

pub use markdown::{RenderOptions, to_html};

use crate::model::Section;
use once_cell::sync::Lazy;
use regex::Regex;

/// Title used when the text has no second-level heading at all.
pub const FALLBACK_TITLE: &str = "Breakdown";
/// Title used when a heading line has no text.
pub const UNTITLED: &str = "Section";
pub const TITLE_MAX_CHARS: usize = 60;

// a bare `##` line also opens a section; it gets the placeholder title
static SECTION_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^##(?:[ \t\r]|$)").expect("section heading pattern is valid. qed")
});

pub fn segment(text: &str, opts: &RenderOptions) -> Vec<Section> {
    let starts: Vec<usize> = SECTION_HEADING.find_iter(text).map(|m| m.start()).collect();
    let Some(&first) = starts.first() else {
        return vec![Section {
            title: FALLBACK_TITLE.to_string(),
            html: to_html(text, opts),
        }];
    };

    // text before the first heading is kept at the top of the first section
    let preamble = text[..first].trim();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            let chunk = text[start..end].trim_end();
            let html = if i == 0 && !preamble.is_empty() {
                to_html(&format!("{preamble}\n\n{chunk}"), opts)
            } else {
                to_html(chunk, opts)
            };
            Section {
                title: section_title(chunk),
                html,
            }
        })
        .collect()
}

fn section_title(chunk: &str) -> String {
    let first_line = chunk.lines().next().unwrap_or_default();
    let title: String = first_line
        .trim_start_matches('#')
        .trim()
        .chars()
        .take(TITLE_MAX_CHARS)
        .collect();
    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<Section> {
        segment(text, &RenderOptions::default())
    }

    #[test]
    fn test_one_section_per_heading() {
        let text = "## MECE\n- a\n- b\n\n## SWOT\nStrengths\n\n## 5-Whys\n1. why";
        let sections = split(text);
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["MECE", "SWOT", "5-Whys"]);
        assert_eq!(sections[0].html, "<h2>MECE</h2>\n<ul><li>a</li><li>b</li></ul>");
        assert_eq!(sections[1].html, "<h2>SWOT</h2>\nStrengths");
        assert_eq!(sections[2].html, "<h2>5-Whys</h2>\n1. why");
    }

    #[test]
    fn test_no_heading_falls_back_to_single_section() {
        let sections = split("Hello world");
        assert_eq!(
            sections,
            vec![Section {
                title: "Breakdown".into(),
                html: "Hello world".into(),
            }]
        );
    }

    #[test]
    fn test_empty_completion() {
        let sections = split("");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Breakdown");
        assert_eq!(sections[0].html, "");
    }

    #[test]
    fn test_other_heading_levels_do_not_split() {
        let sections = split("# Title\n### Sub\ntext");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Breakdown");
        assert_eq!(sections[0].html, "<h1>Title</h1>\n<h3>Sub</h3>\ntext");
    }

    #[test]
    fn test_heading_needs_whitespace_after_markers() {
        let sections = split("##NotASection\nbody");
        assert_eq!(sections[0].title, "Breakdown");
    }

    #[test]
    fn test_long_title_truncated_to_sixty_chars() {
        let heading = "A".repeat(75);
        let sections = split(&format!("## {heading}\nbody"));
        assert_eq!(sections[0].title.chars().count(), 60);
        assert_eq!(sections[0].title, "A".repeat(60));
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let heading = "é".repeat(70);
        let sections = split(&format!("## {heading}"));
        assert_eq!(sections[0].title, "é".repeat(60));
    }

    #[test]
    fn test_blank_heading_gets_placeholder_title() {
        let sections = split("##   \nbody\n## Next\nmore");
        assert_eq!(sections[0].title, "Section");
        assert_eq!(sections[1].title, "Next");
    }

    #[test]
    fn test_bare_heading_line_opens_section() {
        let sections = split("## A\nx\n##\nbody");
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "Section"]);
        assert_eq!(sections[0].html, "<h2>A</h2>\nx");
        assert_eq!(sections[1].html, "<h2></h2>\nbody");

        let sections = split("## A\r\nx\r\n##\r\nbody");
        assert_eq!(sections.len(), 2);
        assert_eq!(split("## A\n##").len(), 2);
    }

    #[test]
    fn test_preamble_joins_first_section() {
        let sections = split("Here is your breakdown:\n\n## MECE\n- a\n## SWOT\nb");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "MECE");
        assert_eq!(
            sections[0].html,
            "Here is your breakdown:<br/><h2>MECE</h2>\n<ul><li>a</li></ul>"
        );
        assert_eq!(sections[1].html, "<h2>SWOT</h2>\nb");
    }

    #[test]
    fn test_order_follows_text_not_request() {
        let sections = split("## SWOT\nx\n## MECE\ny");
        assert_eq!(sections[0].title, "SWOT");
        assert_eq!(sections[1].title, "MECE");
    }

    #[test]
    fn test_completion_scenario() {
        let sections = split("## SWOT\nStrengths: ...\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "SWOT");
        assert!(sections[0].html.starts_with("<h2>SWOT</h2>"));
    }
}
