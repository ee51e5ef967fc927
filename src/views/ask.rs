use crate::views::layout::{render_layout, render_template};
use minijinja::context;

pub fn render_ask_page(backend_url: &str, result: Option<&str>) -> String {
    let results_style = if result.is_some() { "" } else { " style=\"display: none\"" };
    let content = format!(
        r##"<h1 class="h3 mb-3"><i class="fas fa-chart-line"></i> Financial Advisor</h1>
        <p class="text-muted small">Answers from <code>{backend_url}</code></p>
        <form id="questionForm" class="card card-body mb-4" method="post" action="/ask"
              hx-post="/ask" hx-target="#resultsBody" hx-swap="innerHTML"
              hx-indicator="#loadingState" hx-disabled-elt="#submitBtn">
          <div class="mb-3">
            <label class="form-label" for="question">Your question</label>
            <textarea class="form-control advisor-input" id="question" name="question" rows="3" required
                      placeholder="e.g. Should I invest in RELIANCE.NS?"></textarea>
          </div>
          <div class="row g-3 mb-3">
            <div class="col-md-4">
              <label class="form-label" for="age">Age</label>
              <input class="form-control advisor-input" id="age" name="age" type="number" min="1" max="120">
            </div>
            <div class="col-md-4">
              <label class="form-label" for="monthlySalary">Monthly salary (₹)</label>
              <input class="form-control advisor-input" id="monthlySalary" name="monthly_salary" type="number" min="0" step="any">
            </div>
            <div class="col-md-4">
              <label class="form-label" for="riskAppetite">Risk appetite</label>
              <select class="form-select advisor-input" id="riskAppetite" name="risk_appetite">
                <option value="">Not specified</option>
                <option value="low">Low</option>
                <option value="medium">Medium</option>
                <option value="high">High</option>
              </select>
            </div>
          </div>
          <button class="btn btn-advisor-primary" id="submitBtn" type="submit">
            <span class="idle-label"><i class="fas fa-paper-plane"></i> Ask Question</span>
            <span class="busy-label"><i class="fas fa-spinner fa-spin"></i> Processing...</span>
          </button>
        </form>
        <section id="resultsSection" class="card"{results_style}>
          <div class="card-header d-flex justify-content-between align-items-center">
            <span>Answer</span>
            <button class="btn btn-sm btn-advisor-secondary" id="closeResults" type="button">Close</button>
          </div>
          <div class="card-body">
            <div id="loadingState" class="htmx-indicator text-muted">
              <i class="fas fa-spinner fa-spin"></i> Analysing, this can take a minute...
            </div>
            <div id="resultsBody">{result}</div>
          </div>
        </section>
        <script>
          const resultsSection = document.getElementById('resultsSection');
          document.getElementById('questionForm').addEventListener('htmx:beforeRequest', () => {{
            resultsSection.style.display = 'block';
            document.getElementById('resultsBody').innerHTML = '';
            resultsSection.scrollIntoView({{ behavior: 'smooth', block: 'start' }});
          }});
          document.getElementById('closeResults').addEventListener('click', () => {{
            resultsSection.style.display = 'none';
          }});
          fetch('/api/health')
            .then((response) => response.json())
            .then((data) => {{
              if (data.backend && data.backend.reachable) {{
                console.log('API is healthy');
              }} else {{
                console.warn('API health check failed:', data.backend && data.backend.error);
              }}
            }})
            .catch((error) => console.warn('API health check failed:', error));
        </script>"##,
        backend_url = html_escape::encode_text(backend_url),
        results_style = results_style,
        result = result.unwrap_or_default(),
    );

    render_layout("Financial Advisor", "ask", &content)
}

/// Result fragment for a successful submission. `answer_html` must already be
/// sanitized markup from the formatter.
pub fn render_answer_result(question: &str, answer_html: &str, answered_at: &str) -> String {
    render_template(
        "partials/answer_result.html",
        context! {
            question => question,
            answer_html => answer_html,
            answered_at => answered_at,
        },
    )
}

pub fn render_error_result(question: &str, message: &str) -> String {
    render_template(
        "partials/answer_result.html",
        context! {
            question => question,
            error => message,
        },
    )
}
