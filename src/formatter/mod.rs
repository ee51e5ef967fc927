//! Renders a free-form advisor answer into a sanitized HTML fragment.

pub mod document;
pub mod inline;
pub mod sanitize;
pub mod sources;
pub mod table;

pub use document::{parse_document, Block, Document, Node, Section};
pub use inline::format_inline;
pub use sanitize::sanitize;
pub use sources::{extract_sources, render_sources, SplitAnswer};
pub use table::{render_table, Table};

use tracing::debug;

/// Formats `answer` into an `answer-container` fragment. Never fails:
/// anything not recognised falls back to an escaped paragraph.
pub fn format_answer(answer: &str) -> String {
    let split = extract_sources(answer);
    let document = parse_document(split.main_body);

    let mut html = String::from(r#"<div class="answer-container">"#);
    html.push_str(&document.to_html());
    html.push_str(&render_sources(split.sources_body));
    html.push_str("</div>");

    debug!(
        input_len = answer.len(),
        sections = document.section_count(),
        has_sources = split.sources_body.is_some(),
        "formatted answer"
    );
    html
}
