//! Inline formatting for a single line of answer text.
//!
//! The line is held as a list of segments. Raw text segments are still open to
//! the highlight passes; markup segments are finished HTML and are skipped by
//! every later pass. Raw text is escaped once, when the segments are joined,
//! so a pattern can never match inside an inserted tag or an entity.

use super::sanitize::sanitize;
use regex::{Captures, Regex};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Markup(String),
}

type Pass = fn(&str) -> Vec<Segment>;

const PASSES: [Pass; 5] = [
    emphasize_bold,
    highlight_currency,
    highlight_percentages,
    highlight_stock_symbols,
    highlight_bracketed_numbers,
];

/// Escapes `text` and applies bold emphasis plus the financial highlight spans.
pub fn format_inline(text: &str) -> String {
    let mut segments = vec![Segment::Text(text.to_string())];
    for pass in PASSES {
        segments = apply_pass(segments, pass);
    }
    render(&segments)
}

fn apply_pass(segments: Vec<Segment>, pass: Pass) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Text(text) => out.extend(pass(&text)),
            markup => out.push(markup),
        }
    }
    out
}

fn render(segments: &[Segment]) -> String {
    let mut html = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => html.push_str(&sanitize(text)),
            Segment::Markup(markup) => html.push_str(markup),
        }
    }
    html
}

fn split_on_matches<F>(text: &str, re: &Regex, mut replace: F) -> Vec<Segment>
where
    F: FnMut(&Captures) -> Vec<Segment>,
{
    let mut out = Vec::new();
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            out.push(Segment::Text(text[last..whole.start()].to_string()));
        }
        out.extend(replace(&caps));
        last = whole.end();
    }
    if last < text.len() {
        out.push(Segment::Text(text[last..].to_string()));
    }
    out
}

fn span(class: &str, visible: &str) -> Segment {
    Segment::Markup(format!(
        r#"<span class="{class}">{text}</span>"#,
        text = sanitize(visible),
    ))
}

fn emphasize_bold(text: &str) -> Vec<Segment> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold regex"));
    split_on_matches(text, re, |caps| {
        let inner = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        vec![
            Segment::Markup("<strong>".to_string()),
            Segment::Text(inner.to_string()),
            Segment::Markup("</strong>".to_string()),
        ]
    })
}

fn highlight_currency(text: &str) -> Vec<Segment> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(
            r"(?i)(₹|\bRs\.?|\bINR)\s*(\d(?:[\d,]*\d)?(?:\.\d+)?)(?:\s*(crores?\b|lakh\b\.?|lakhs\b|thousand\b|cr\b\.?))?",
        )
        .expect("currency regex")
    });
    split_on_matches(text, re, |caps| {
        let marker = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let amount = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let mut visible = format!("{marker} {amount}");
        if let Some(unit) = caps.get(3).map(|m| m.as_str().trim()).filter(|u| !u.is_empty()) {
            visible.push(' ');
            visible.push_str(unit);
        }
        vec![span("currency-value", &visible)]
    })
}

fn highlight_percentages(text: &str) -> Vec<Segment> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?%").expect("percentage regex"));
    split_on_matches(text, re, |caps| {
        vec![span("percentage-value", caps.get(0).map(|m| m.as_str()).unwrap_or_default())]
    })
}

fn highlight_stock_symbols(text: &str) -> Vec<Segment> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\b[A-Z]{2,}\.(?:NS|BO)\b").expect("stock symbol regex"));
    split_on_matches(text, re, |caps| {
        vec![span("stock-symbol", caps.get(0).map(|m| m.as_str()).unwrap_or_default())]
    })
}

fn highlight_bracketed_numbers(text: &str) -> Vec<Segment> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"\(\d(?:[\d,]*\d)?(?:\.\d+)?\)").expect("bracketed number regex")
    });
    split_on_matches(text, re, |caps| {
        vec![span("number-value", caps.get(0).map(|m| m.as_str()).unwrap_or_default())]
    })
}
