//! MiniJinja filter and formatter registration.

use std::fmt::Write;

use minijinja::{escape_formatter, AutoEscape, Environment, Error, ErrorKind, Output, Value};

/// Registers the mockup filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Joins a list of class names, dropping falsy entries.
    // Usage: {{ ["device-media", "hover-media" if hover] | class_list }}
    env.add_filter("class_list", class_list);
}

/// Auto-escape mode of the stylesheet template.
const CSS_ESCAPE: &str = "css";

/// Installs the output formatter and picks an escape mode per template.
///
/// `.html` templates escape only the characters that can break out of
/// markup or a quoted attribute; the stock formatter also escapes `/`,
/// which mangles every URL written into `src` and `href`. `.css` templates
/// escape `<`, since the stylesheet ends up inside a `<style>` element.
/// Must run before templates are added.
pub(crate) fn register_formatter(env: &mut Environment<'static>) {
    env.set_auto_escape_callback(auto_escape_for);
    env.set_formatter(|out, state, value| match state.auto_escape() {
        AutoEscape::Html if !value.is_safe() && value.as_str().is_some() => {
            write_str(out, &escape_html(value.as_str().unwrap_or_default()))
        }
        AutoEscape::Custom(mode) if mode == CSS_ESCAPE => {
            if value.is_undefined() || value.is_none() {
                return Ok(());
            }
            let text = match value.as_str() {
                Some(text) => escape_css(text),
                None => escape_css(&value.to_string()),
            };
            write_str(out, &text)
        }
        _ => escape_formatter(out, state, value),
    });
}

fn auto_escape_for(name: &str) -> AutoEscape {
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => AutoEscape::Custom(CSS_ESCAPE),
        Some("html" | "htm" | "xml") => AutoEscape::Html,
        _ => AutoEscape::None,
    }
}

fn write_str(out: &mut Output<'_>, text: &str) -> Result<(), Error> {
    out.write_str(text)
        .map_err(|_| Error::new(ErrorKind::WriteFailure, "could not write output"))
}

fn class_list(values: Vec<Value>) -> String {
    values
        .iter()
        .filter(|v| v.is_true())
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use in markup and quoted attributes.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes `<` as a CSS escape so values cannot close a `<style>` element.
pub(crate) fn escape_css(text: &str) -> String {
    text.replace('<', "\\3c ")
}
