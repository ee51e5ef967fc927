use minijinja::{context, Environment};
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub key: &'static str,
}

static NAV_ITEMS: [NavItem; 2] = [
    NavItem { label: "Ask", href: "/", key: "ask" },
    NavItem { label: "Settings", href: "/settings", key: "settings" },
];

pub fn render_layout(title: &str, active: &str, content: &str) -> String {
    let context = context! {
        title => title,
        active => active,
        nav_items => &NAV_ITEMS[..],
        content => content,
    };
    render_template("layouts/base.html", context)
}

pub fn render_template(name: &str, context: minijinja::Value) -> String {
    template_env()
        .get_template(name)
        .and_then(|template| template.render(context))
        .unwrap_or_else(|err| format!("Template error: {err}"))
}

pub fn template_env() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(templates_dir()));
        env.set_auto_escape_callback(|_| minijinja::AutoEscape::Html);
        env
    })
}

fn templates_dir() -> String {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("templates")
        .to_string_lossy()
        .to_string()
}
