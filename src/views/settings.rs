use crate::views::layout::render_layout;
use advisor::storage::AppSettings;

pub enum Notice<'a> {
    Saved(&'a str),
    Invalid(&'a str),
}

pub fn render_settings_page(settings: &AppSettings, notice: Option<Notice<'_>>) -> String {
    let notice = match notice {
        Some(Notice::Saved(message)) => format!(
            "<p class=\"text-success\">{}</p>",
            html_escape::encode_text(message)
        ),
        Some(Notice::Invalid(message)) => format!(
            "<p class=\"text-danger\">{}</p>",
            html_escape::encode_text(message)
        ),
        None => String::new(),
    };

    let content = format!(
        r#"<h1 class="h3 mb-3">Settings</h1>
        {notice}
        <form method="post" action="/settings">
          <div class="mb-3">
            <label class="form-label" for="backend_url">Advisor backend URL</label>
            <input class="form-control advisor-input" id="backend_url" name="backend_url" value="{backend_url}">
            <div class="form-text text-muted">Questions are posted to <code>&lt;url&gt;/api/ask</code>. <code>ADVISOR_BACKEND_URL</code> overrides this value.</div>
          </div>
          <div class="mb-3">
            <label class="form-label" for="bind_addr">Listen address</label>
            <input class="form-control advisor-input" id="bind_addr" name="bind_addr" value="{bind_addr}">
            <div class="form-text text-muted">Takes effect after a restart. <code>ADVISOR_BIND_ADDR</code> overrides this value.</div>
          </div>
          <button class="btn btn-advisor-primary" type="submit">Save</button>
        </form>"#,
        notice = notice,
        backend_url = html_escape::encode_double_quoted_attribute(&settings.backend_url),
        bind_addr = html_escape::encode_double_quoted_attribute(&settings.bind_addr),
    );

    render_layout("Advisor Settings", "settings", &content)
}
