use crate::domain::ports::{FormRenderer, PaymentForm};
use std::fmt::Write;

/// Renders the checkout as a plain HTML form of hidden inputs.
///
/// When auto-submit is enabled a one-line script posts the form as soon as the
/// page loads.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormRenderer;

impl HtmlFormRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl FormRenderer for HtmlFormRenderer {
    fn render(&self, form: &PaymentForm<'_>) -> String {
        let presentation = form.presentation;
        let mut html = String::new();

        // Writing into a String cannot fail.
        let _ = write!(
            html,
            r#"<form method="post" action="{}" name="{}" class="{}">"#,
            escape(form.action),
            escape(&presentation.form_name),
            escape(&presentation.form_class),
        );
        for field in form.fields {
            let _ = write!(
                html,
                r#"<input type="hidden" name="{}" value="{}">"#,
                escape(&field.name),
                escape(&field.value),
            );
        }
        let _ = write!(
            html,
            r#"<input type="submit" value="{}" class="{}">"#,
            escape(&presentation.button_text),
            escape(&presentation.button_class),
        );
        html.push_str("</form>");

        if presentation.auto_submit {
            let _ = write!(
                html,
                r#"<script type="text/javascript">document.forms["{}"].submit();</script>"#,
                escape_js(&presentation.form_name),
            );
        }
        html
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// The form name lands inside a JS string literal inside a <script> block.
fn escape_js(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            _ => out.push(c),
        }
    }
    out
}
