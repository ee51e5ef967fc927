use super::sanitize::sanitize;
use regex::Regex;
use std::sync::OnceLock;

/// An answer split around its trailing `Sources:` / `References:` block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitAnswer<'a> {
    pub main_body: &'a str,
    pub sources_body: Option<&'a str>,
}

pub fn extract_sources(answer: &str) -> SplitAnswer<'_> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?i)(?:^|\n)(?:sources?|references?):?\s*\n").expect("sources regex")
    });

    match re.find(answer) {
        Some(found) => {
            let sources = answer[found.end()..].trim();
            SplitAnswer {
                main_body: answer[..found.start()].trim(),
                sources_body: (!sources.is_empty()).then_some(sources),
            }
        }
        None => SplitAnswer {
            main_body: answer,
            sources_body: None,
        },
    }
}

/// Escapes each non-blank line and turns `http(s)://` runs into links that
/// open in a new tab without a back-reference to this page.
pub fn source_entries(body: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"https?://\S+").expect("url regex"));

    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let escaped = sanitize(line);
            re.replace_all(
                &escaped,
                r#"<a href="$0" target="_blank" rel="noopener noreferrer">$0</a>"#,
            )
            .into_owned()
        })
        .collect()
}

pub fn render_sources(body: Option<&str>) -> String {
    let Some(body) = body else {
        return String::new();
    };
    let entries = source_entries(body);
    if entries.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        r#"<div class="sources-section"><h3 class="sources-header"><i class="fas fa-link"></i> Sources</h3><ul class="sources-list">"#,
    );
    for entry in entries {
        html.push_str(&format!("<li>{entry}</li>"));
    }
    html.push_str("</ul></div>");
    html
}
