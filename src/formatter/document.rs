//! Line classification for the main body of an answer.
//!
//! The body is scanned once, top to bottom, into a [`Document`]. Rendering
//! works from the finished tree, so a table opened inside a section is always
//! closed before that section is.

use super::inline::format_inline;
use super::sanitize::sanitize;
use super::table::{render_table, Table};
use regex::Regex;
use std::sync::OnceLock;

const MAX_HEADER_LEVEL: usize = 3;
const DEFAULT_HEADER_LEVEL: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { text: String, emphasized: bool },
    ListItem(String),
    CodeLine(String),
    Table(Table),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub level: usize,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Block(Block),
    Section(Section),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

#[derive(Default)]
struct ScanState {
    in_code_block: bool,
    table: Option<Table>,
    section: Option<Section>,
    nodes: Vec<Node>,
}

impl ScanState {
    fn push_block(&mut self, block: Block) {
        match self.section.as_mut() {
            Some(section) => section.blocks.push(block),
            None => self.nodes.push(Node::Block(block)),
        }
    }

    fn flush_table(&mut self) {
        if let Some(table) = self.table.take() {
            if !table.is_empty() {
                self.push_block(Block::Table(table));
            }
        }
    }

    fn open_section(&mut self, title: String, level: usize) {
        self.flush_table();
        self.close_section();
        self.section = Some(Section {
            title,
            level,
            blocks: Vec::new(),
        });
    }

    fn close_section(&mut self) {
        if let Some(section) = self.section.take() {
            self.nodes.push(Node::Section(section));
        }
    }

    fn finish(mut self) -> Document {
        self.flush_table();
        self.close_section();
        Document { nodes: self.nodes }
    }
}

pub fn parse_document(body: &str) -> Document {
    let mut state = ScanState::default();

    for line in body.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            state.flush_table();
            continue;
        }

        if trimmed.starts_with("```") {
            state.flush_table();
            state.in_code_block = !state.in_code_block;
            continue;
        }

        if state.in_code_block {
            state.push_block(Block::CodeLine(line.trim_end().to_string()));
            continue;
        }

        if let Some(level) = header_level(trimmed) {
            state.open_section(header_title(trimmed), level);
            continue;
        }

        if trimmed.contains('|') {
            state.table.get_or_insert_with(Table::default).push_line(trimmed);
            continue;
        }

        state.flush_table();

        if let Some(item) = strip_list_marker(trimmed) {
            state.push_block(Block::ListItem(item.to_string()));
        } else if trimmed.contains("**") {
            state.push_block(Block::Paragraph {
                text: trimmed.to_string(),
                emphasized: true,
            });
        } else if !is_sources_label(trimmed) {
            state.push_block(Block::Paragraph {
                text: trimmed.to_string(),
                emphasized: false,
            });
        }
    }

    state.finish()
}

fn header_level(line: &str) -> Option<usize> {
    static MARKED: OnceLock<Regex> = OnceLock::new();
    static SHOUTED: OnceLock<Regex> = OnceLock::new();
    let marked = MARKED.get_or_init(|| Regex::new(r"^#{1,3}\s+").expect("header regex"));
    let shouted = SHOUTED.get_or_init(|| Regex::new(r"^[A-Z][A-Z\s]+$").expect("caps header regex"));

    if marked.is_match(line) {
        let hashes = line.chars().take_while(|c| *c == '#').count();
        Some(hashes.min(MAX_HEADER_LEVEL))
    } else if shouted.is_match(line) {
        Some(DEFAULT_HEADER_LEVEL)
    } else {
        None
    }
}

fn header_title(line: &str) -> String {
    let title = line.trim_start_matches('#').trim_start();
    let title = title.strip_prefix("**").unwrap_or(title);
    let title = title.strip_suffix("**").unwrap_or(title);
    title.to_string()
}

fn strip_list_marker(line: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^(?:[-*•]|\d+\.)\s+").expect("list regex"));
    re.find(line).map(|marker| &line[marker.end()..])
}

fn is_sources_label(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?i)^(?:sources?|references?):").expect("sources label regex"));
    re.is_match(line)
}

impl Block {
    pub fn to_html(&self) -> String {
        match self {
            Block::Paragraph { text, emphasized } => {
                let class = if *emphasized {
                    "answer-paragraph bold-text"
                } else {
                    "answer-paragraph"
                };
                format!(r#"<p class="{class}">{}</p>"#, format_inline(text))
            }
            Block::ListItem(text) => format!(
                r#"<div class="list-item"><i class="fas fa-circle"></i> {}</div>"#,
                format_inline(text)
            ),
            Block::CodeLine(text) => format!(r#"<div class="code-line">{}</div>"#, sanitize(text)),
            Block::Table(table) => render_table(table),
        }
    }
}

impl Section {
    pub fn to_html(&self) -> String {
        let mut html = format!(
            r#"<div class="answer-section"><h{level} class="section-header">{title}</h{level}>"#,
            level = self.level,
            title = format_inline(&self.title),
        );
        if !self.blocks.is_empty() {
            html.push_str(r#"<div class="section-content">"#);
            for block in &self.blocks {
                html.push_str(&block.to_html());
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html
    }
}

impl Document {
    pub fn to_html(&self) -> String {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Block(block) => block.to_html(),
                Node::Section(section) => section.to_html(),
            })
            .collect()
    }

    pub fn section_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Section(_)))
            .count()
    }
}
