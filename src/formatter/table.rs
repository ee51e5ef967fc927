use super::inline::format_inline;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Adds one `|`-delimited line. The first populated line becomes the
    /// header row; ruling rows (`| --- | :-: |`) are skipped.
    pub fn push_line(&mut self, line: &str) {
        let cells = split_cells(line);
        if cells.is_empty() {
            return;
        }
        if self.headers.is_empty() && self.rows.is_empty() {
            self.headers = cells;
        } else {
            self.rows.push(cells);
        }
    }
}

pub fn split_cells(line: &str) -> Vec<String> {
    let line = line.trim();
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    let cells: Vec<String> = inner
        .split('|')
        .map(str::trim)
        .filter(|cell| !is_ruling(cell))
        .map(str::to_string)
        .collect();
    if cells.iter().all(|cell| cell.is_empty()) {
        Vec::new()
    } else {
        cells
    }
}

fn is_ruling(cell: &str) -> bool {
    !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':')
}

pub fn render_table(table: &Table) -> String {
    if table.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<div class="table-wrapper"><table class="financial-table">"#);

    if !table.headers.is_empty() {
        html.push_str("<thead><tr>");
        for header in &table.headers {
            html.push_str(&format!("<th>{}</th>", format_inline(header)));
        }
        html.push_str("</tr></thead>");
    }

    if !table.rows.is_empty() {
        html.push_str("<tbody>");
        for row in &table.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", format_inline(cell)));
            }
            for _ in row.len()..table.headers.len() {
                html.push_str("<td></td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody>");
    }

    html.push_str("</table></div>");
    html
}
