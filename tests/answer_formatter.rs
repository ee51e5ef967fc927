use advisor::formatter::format_answer;
use regex::Regex;
use scraper::{Html, Selector};

fn select_texts(html: &str, selector: &str) -> Vec<String> {
    let document = Html::parse_fragment(html);
    let selector = Selector::parse(selector).expect("selector");
    document
        .select(&selector)
        .map(|node| node.text().collect::<String>())
        .collect()
}

fn count(html: &str, selector: &str) -> usize {
    select_texts(html, selector).len()
}

const FULL_ANSWER: &str = "\
# RELIANCE.NS Analysis

Reliance Industries closed at ₹2,950 with revenue of ₹9,74,864 crores.

## Key Ratios
| Metric | Value | Peer |
|--------|:-----:|------|
| ROE | 9.2% | 12.5% |
| P/E | 27.4 |

- Debt is manageable (1,25,000)
- **Jio** keeps growing

RECOMMENDATION
**Verdict:** accumulate on dips

```
SIP = 0.2 * salary
```

Sources:
https://www.nseindia.com/get-quotes/equity?symbol=RELIANCE
Annual report FY24
";

#[test]
fn plain_lines_render_as_paragraphs_in_order() {
    let html = format_answer("First line here\n\nSecond, with commas & ampersands\n   Third line   ");
    assert_eq!(
        select_texts(&html, "p.answer-paragraph"),
        vec!["First line here", "Second, with commas & ampersands", "Third line"]
    );
    assert!(html.contains("Second, with commas &amp; ampersands"));
    assert_eq!(count(&html, ".answer-section"), 0);
}

#[test]
fn markup_in_input_is_escaped() {
    let html = format_answer(r#"<script>alert("x")</script> & more"#);
    assert!(!html.contains("<script"));
    assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; more"));
}

#[test]
fn no_raw_markup_characters_survive_outside_inserted_tags() {
    let tags = Regex::new(
        r"</?(?:div|p|span|strong|table|thead|tbody|tr|th|td|h[1-3]|i|ul|li|a)(?: [^<>]*)?>",
    )
    .expect("tag regex");
    let inputs = [
        r#"a < b > c & "d" 'e'"#,
        "| <x> | \"y\" |\n| 1 | <td> |",
        "- <li>\n## <h1> & co\n**<b>\"**",
        "```\n<div>\"</div>\n```",
        "TEXT\nSources:\nhttps://e.com/?q=\"><script>alert(1)</script>\n<img src=x>",
    ];

    for input in inputs {
        let html = format_answer(input);
        let stripped = tags.replace_all(&html, "");
        assert!(
            !stripped.contains(['<', '>', '"', '\'']),
            "unescaped markup in {stripped:?} for input {input:?}"
        );
    }
}

#[test]
fn simple_table_has_header_and_one_row() {
    let html = format_answer("A | B\n1 | 2");
    assert_eq!(select_texts(&html, "thead th"), vec!["A", "B"]);
    assert_eq!(count(&html, "tbody tr"), 1);
    assert_eq!(select_texts(&html, "tbody td"), vec!["1", "2"]);
}

#[test]
fn short_row_is_padded_to_header_width() {
    let html = format_answer("| A | B | C |\n|---|---|---|\n| 1 | 2 |");
    assert_eq!(select_texts(&html, "thead th").len(), 3);
    assert_eq!(select_texts(&html, "tbody td"), vec!["1", "2", ""]);
}

#[test]
fn sources_block_is_split_out_and_linked() {
    let html = format_answer("Answer text\nSources:\nhttp://x.com\nSite Y");
    assert_eq!(select_texts(&html, "p.answer-paragraph"), vec!["Answer text"]);
    assert_eq!(select_texts(&html, ".sources-list li"), vec!["http://x.com", "Site Y"]);

    let document = Html::parse_fragment(&html);
    let link = document
        .select(&Selector::parse(".sources-list li a").expect("selector"))
        .next()
        .expect("source link");
    assert_eq!(link.value().attr("href"), Some("http://x.com"));
    assert_eq!(link.value().attr("target"), Some("_blank"));
    assert_eq!(link.value().attr("rel"), Some("noopener noreferrer"));
}

#[test]
fn missing_sources_block_renders_no_sources_element() {
    let html = format_answer("Nothing cited here.\nStill nothing.");
    assert!(!html.contains("sources-section"));
    assert_eq!(count(&html, ".sources-section"), 0);
}

#[test]
fn currency_span_shows_normalized_phrase() {
    let html = format_answer("₹2,05,600 crores");
    assert_eq!(select_texts(&html, "span.currency-value"), vec!["₹ 2,05,600 crores"]);
}

#[test]
fn full_answer_builds_nested_sections() {
    let html = format_answer(FULL_ANSWER);

    assert_eq!(
        select_texts(&html, ".section-header")
            .iter()
            .map(|text| text.trim().to_string())
            .collect::<Vec<_>>(),
        vec!["RELIANCE.NS Analysis", "Key Ratios", "RECOMMENDATION"]
    );
    assert_eq!(count(&html, "h1.section-header"), 1);
    assert_eq!(count(&html, "h2.section-header"), 2);
    assert_eq!(count(&html, ".answer-section .section-content .financial-table"), 1);
    assert_eq!(select_texts(&html, "tbody tr:nth-child(2) td"), vec!["P/E", "27.4", ""]);
    assert_eq!(count(&html, ".answer-section .list-item"), 2);
    assert_eq!(select_texts(&html, ".code-line"), vec!["SIP = 0.2 * salary"]);
    assert_eq!(count(&html, "p.bold-text strong"), 1);
    assert_eq!(count(&html, ".sources-list li"), 2);
    assert_eq!(count(&html, ".sources-list li a"), 1);

    assert_eq!(select_texts(&html, ".stock-symbol"), vec!["RELIANCE.NS"]);
    assert_eq!(
        select_texts(&html, ".currency-value"),
        vec!["₹ 2,950", "₹ 9,74,864 crores"]
    );
    assert_eq!(select_texts(&html, ".percentage-value"), vec!["9.2%", "12.5%"]);
    assert_eq!(select_texts(&html, ".number-value"), vec!["(1,25,000)"]);
}

#[test]
fn output_tags_are_balanced() {
    let html = format_answer(FULL_ANSWER);
    assert!(html.starts_with(r#"<div class="answer-container">"#));
    assert!(html.ends_with("</div>"));
    for tag in ["div", "p", "table", "tbody", "thead", "tr", "ul", "li", "span", "strong"] {
        let opened = html.matches(&format!("<{tag}>")).count() + html.matches(&format!("<{tag} ")).count();
        let closed = html.matches(&format!("</{tag}>")).count();
        assert_eq!(opened, closed, "unbalanced <{tag}>");
    }
}

#[test]
fn odd_inputs_degrade_without_panicking() {
    for input in ["", "|", "||||", "```", "**", "#", "##", "\n\n\n", "Sources:\n", "₹", "Rs.", "( )", "• ", "1."] {
        let html = format_answer(input);
        assert!(html.starts_with(r#"<div class="answer-container">"#), "input {input:?}");
        assert!(html.ends_with("</div>"), "input {input:?}");
    }
}

#[test]
fn unterminated_code_block_runs_to_end() {
    let html = format_answer("```\nline one\n**not bold**");
    assert_eq!(select_texts(&html, ".code-line"), vec!["line one", "**not bold**"]);
    assert_eq!(count(&html, "strong"), 0);
}
