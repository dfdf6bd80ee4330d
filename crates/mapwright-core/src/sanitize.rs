//! Info-window template sanitization.
//!
//! Info-window content is caller-supplied HTML that ends up verbatim inside
//! the rendered page, so script vectors are stripped server-side: `<script>`,
//! `<iframe>` and `<style>` elements, `on*` event-handler attributes, and
//! script-scheme (`javascript:`, `vbscript:`, `data:`) URL attributes.
//! Everything else passes through untouched.

use lol_html::{RewriteStrSettings, element, rewrite_str};
use regex::Regex;
use std::sync::OnceLock;

fn script_or_data_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\s*(?:\w+script|data):").expect("valid regex"))
}

/// Strips active content from an HTML fragment, best-effort.
///
/// Rendering never fails because of a bad template: if the fragment cannot be
/// rewritten at all, it is emitted fully escaped instead of dropped.
pub fn remove_script(html: &str) -> String {
    if html.is_empty() || !html.contains('<') {
        return html.to_string();
    }

    let handlers = vec![
        element!("script", |el| {
            el.remove();
            Ok(())
        }),
        element!("iframe", |el| {
            el.remove();
            Ok(())
        }),
        element!("style", |el| {
            el.remove();
            Ok(())
        }),
        element!("*", |el| {
            let names: Vec<String> = el.attributes().iter().map(|a| a.name()).collect();
            for name in names {
                if name.starts_with("on") {
                    el.remove_attribute(&name);
                    continue;
                }
                if matches!(name.as_str(), "href" | "src" | "xlink:href") {
                    let scripty = el
                        .get_attribute(&name)
                        .is_some_and(|value| script_or_data_url_regex().is_match(&value));
                    if scripty {
                        el.remove_attribute(&name);
                    }
                }
            }
            Ok(())
        }),
    ];

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::new()
        },
    )
    .unwrap_or_else(|_| htmlize::escape_text(html).into_owned())
}
