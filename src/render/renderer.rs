//! Pre-compiled mockup renderer.

use minijinja::{context, Environment, Value};
use serde::Serialize;

use super::filters::{register_filters, register_formatter};
use crate::advisory::Advisory;
use crate::config::{Attributes, DeviceType, RenderMode};
use crate::error::MockupError;
use crate::media::{resolve_slot, MediaSlot, SlotOptions, SlotRole};
use crate::style::{StyleContext, NO_PADDING};
use crate::theme::ColorMode;

/// Sandbox flags granted to embedded pages.
pub const IFRAME_SANDBOX: &str = "allow-same-origin allow-scripts allow-forms allow-popups \
     allow-top-navigation allow-top-navigation-by-user-activation allow-downloads allow-modals";

const DEVICE_TEMPLATE: &str = "device.html";
const MEDIA_TEMPLATE: &str = "media.html";
const IFRAME_TEMPLATE: &str = "iframe.html";
const STYLESHEET_TEMPLATE: &str = "stylesheet.css";

// Auto-escaping follows the extension: HTML templates escape, the stylesheet does not.
const TEMPLATES: &[(&str, &str)] = &[
    (DEVICE_TEMPLATE, include_str!("templates/device.html")),
    (MEDIA_TEMPLATE, include_str!("templates/media.html")),
    (IFRAME_TEMPLATE, include_str!("templates/iframe.html")),
    (STYLESHEET_TEMPLATE, include_str!("templates/stylesheet.css")),
];

/// The output of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The device tree markup.
    pub markup: String,
    /// The generated stylesheet, without the `<style>` wrapper.
    pub stylesheet: String,
}

impl Rendered {
    /// Returns the stylesheet and markup as one HTML fragment.
    pub fn html(&self) -> String {
        format!("<style>{}</style>\n{}", self.stylesheet, self.markup)
    }
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    /// `None` when rendering was skipped.
    pub rendered: Option<Rendered>,
    pub advisories: Vec<Advisory>,
}

impl RenderOutcome {
    fn skipped(advisory: Advisory) -> Self {
        Self {
            rendered: None,
            advisories: vec![advisory],
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.rendered.is_none()
    }
}

#[derive(Serialize)]
struct Link<'a> {
    href: &'a str,
    target: &'a str,
}

/// A renderer with the mockup templates compiled once.
///
/// Rendering is pure: the output depends only on the attributes and the
/// resolved color mode passed in.
///
/// # Example
///
/// ```rust
/// use device_mockup::{Attributes, ColorMode, MockupRenderer};
///
/// let renderer = MockupRenderer::new().unwrap();
/// let attrs = Attributes::new()
///     .with("type", "phone")
///     .with("src", "demo.mp4")
///     .with("alt", "App demo");
///
/// let outcome = renderer.render(&attrs, ColorMode::Dark).unwrap();
/// let rendered = outcome.rendered.unwrap();
/// assert!(rendered.markup.contains(r#"<source src="demo.mp4" type="video/mp4">"#));
/// assert!(rendered.stylesheet.contains("--bezel-color: #6b7280;"));
/// ```
pub struct MockupRenderer {
    env: Environment<'static>,
}

impl MockupRenderer {
    /// Creates a renderer, compiling the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self, MockupError> {
        let mut env = Environment::new();
        register_formatter(&mut env);
        register_filters(&mut env);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders the device tree and stylesheet for `attrs`.
    ///
    /// Missing media outside iframe mode is not an error: the outcome is
    /// skipped and carries a [`Advisory::NoMediaSources`].
    pub fn render(&self, attrs: &Attributes, theme: ColorMode) -> Result<RenderOutcome, MockupError> {
        let device = DeviceType::from_attr(attrs.get("type"));
        let mode = RenderMode::from_attr(attrs.get("mode"));
        let href = attrs.get("href");
        let alt = attrs.get_or("alt", "");
        let padding = attrs.get_or("padding", NO_PADDING);
        let hover_padding = attrs.get_or("hover-padding", padding);

        let content = match (mode, href) {
            (RenderMode::Iframe, Some(url)) => self.render_iframe(attrs, url, padding)?,
            _ => {
                let options = SlotOptions {
                    alt,
                    padding,
                    fit: attrs.get("fit"),
                };
                match resolve_slot(attrs, SlotRole::Main, options) {
                    Some(slot) => self.render_media(&slot)?,
                    None => return Ok(RenderOutcome::skipped(Advisory::NoMediaSources)),
                }
            }
        };

        let hover_options = SlotOptions {
            alt,
            padding: hover_padding,
            fit: attrs.get("hover-fit"),
        };
        let hover_content = match resolve_slot(attrs, SlotRole::Hover, hover_options) {
            Some(slot) => Some(self.render_media(&slot)?),
            None => None,
        };

        // An embedded page navigates on its own, so it is never wrapped in a link
        let link = match (mode, href) {
            (RenderMode::Normal, Some(href)) => Some(Link {
                href,
                target: attrs.get_or("target", "_blank"),
            }),
            _ => None,
        };

        let markup = self.env.get_template(DEVICE_TEMPLATE)?.render(context! {
            device => device,
            link => link,
            has_hover => hover_content.is_some(),
            content => Value::from_safe_string(content),
            hover_content => Value::from_safe_string(hover_content.unwrap_or_default()),
        })?;

        let (style, advisories) = StyleContext::from_attributes(attrs, theme);
        let stylesheet = self.env.get_template(STYLESHEET_TEMPLATE)?.render(&style)?;

        tracing::debug!(
            target: "device_mockup",
            device = device.as_str(),
            theme = theme.as_str(),
            "rendered mockup"
        );

        Ok(RenderOutcome {
            rendered: Some(Rendered { markup, stylesheet }),
            advisories,
        })
    }

    fn render_media(&self, slot: &MediaSlot) -> Result<String, MockupError> {
        let tmpl = self.env.get_template(MEDIA_TEMPLATE)?;
        Ok(tmpl.render(context! { slot => slot })?)
    }

    fn render_iframe(&self, attrs: &Attributes, url: &str, padding: &str) -> Result<String, MockupError> {
        let tmpl = self.env.get_template(IFRAME_TEMPLATE)?;
        Ok(tmpl.render(context! {
            url => url,
            target => attrs.get_or("target", "_self"),
            title => attrs.get_or("alt", "Website preview"),
            padded => padding != NO_PADDING,
            sandbox => IFRAME_SANDBOX,
        })?)
    }
}

/// Renders `attrs` once with a fresh renderer.
///
/// Prefer [`MockupRenderer`] when rendering repeatedly.
pub fn render(attrs: &Attributes, theme: ColorMode) -> Result<RenderOutcome, MockupError> {
    MockupRenderer::new()?.render(attrs, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(attrs: &Attributes) -> String {
        render(attrs, ColorMode::Light)
            .unwrap()
            .rendered
            .expect("render should not be skipped")
            .markup
    }

    #[test]
    fn test_templates_compile() {
        assert!(MockupRenderer::new().is_ok());
    }

    #[test]
    fn test_skipped_without_sources() {
        let outcome = render(&Attributes::new(), ColorMode::Light).unwrap();
        assert!(outcome.is_skipped());
        assert_eq!(outcome.advisories, vec![Advisory::NoMediaSources]);
    }

    #[test]
    fn test_iframe_mode_without_href_needs_media() {
        let attrs = Attributes::new().with("mode", "iframe");
        assert!(render(&attrs, ColorMode::Light).unwrap().is_skipped());
    }

    #[test]
    fn test_laptop_structure() {
        let out = markup(&Attributes::new().with("src", "a.png"));
        assert!(out.contains(r#"class="device-container laptop-container""#));
        assert!(out.contains(r#"<div class="laptop-frame">"#));
        assert!(out.contains(r#"<div class="laptop-screen">"#));
        assert!(out.contains(r#"<div class="laptop-base"></div>"#));
        assert!(!out.contains("phone-home-indicator"));
        assert!(!out.contains("<a "));
    }

    #[test]
    fn test_phone_structure() {
        let out = markup(&Attributes::new().with("type", "phone").with("src", "a.png"));
        assert!(out.contains(r#"<div class="phone-screen">"#));
        assert!(out.contains(r#"<div class="phone-home-indicator"></div>"#));
        assert!(!out.contains("laptop-base"));
    }

    #[test]
    fn test_tablet_structure() {
        let out = markup(&Attributes::new().with("type", "tablet").with("src", "a.png"));
        assert!(out.contains(r#"<div class="tablet-frame">"#));
        assert!(!out.contains("phone-home-indicator"));
        assert!(!out.contains("laptop-base"));
    }

    #[test]
    fn test_link_wrapper_defaults_to_blank_target() {
        let out = markup(
            &Attributes::new()
                .with("src", "a.png")
                .with("href", "https://example.com"),
        );
        assert!(out.starts_with(r#"<a href="https://example.com" target="_blank" class="device-link">"#));
        assert!(out.trim_end().ends_with("</a>"));
    }

    #[test]
    fn test_link_target_is_configurable() {
        let out = markup(
            &Attributes::new()
                .with("src", "a.png")
                .with("href", "/docs")
                .with("target", "_self"),
        );
        assert!(out.contains(r#"target="_self""#));
    }

    #[test]
    fn test_iframe_replaces_media_and_is_not_linked() {
        let out = markup(
            &Attributes::new()
                .with("mode", "iframe")
                .with("href", "https://example.com")
                .with("src", "ignored.png"),
        );
        assert!(out.contains(r#"<iframe class="device-media device-iframe""#));
        assert!(out.contains(r#"name="_self""#));
        assert!(out.contains(r#"title="Website preview""#));
        assert!(out.contains(&format!(r#"sandbox="{}""#, IFRAME_SANDBOX)));
        assert!(!out.contains("<a "));
        assert!(!out.contains("ignored.png"));
    }

    #[test]
    fn test_iframe_uses_alt_as_title_and_padding_class() {
        let out = markup(
            &Attributes::new()
                .with("mode", "iframe")
                .with("href", "https://example.com")
                .with("alt", "Docs")
                .with("padding", "4px"),
        );
        assert!(out.contains(r#"title="Docs""#));
        assert!(out.contains("device-iframe has-padding-main"));
    }

    #[test]
    fn test_hover_overlay() {
        let out = markup(
            &Attributes::new()
                .with("src", "a.png")
                .with("hover-src", "b.png"),
        );
        assert!(out.contains("laptop-container has-hover"));
        assert!(out.contains(r#"<img class="device-media hover-media" src="b.png""#));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let out = markup(&Attributes::new().with("src", "a.png").with("alt", r#"x" onload="y"#));
        assert!(!out.contains(r#"onload="y""#));
        assert!(out.contains("&quot;"));
    }

    #[test]
    fn test_stylesheet_values_cannot_close_style_element() {
        let attrs = Attributes::new()
            .with("src", "a.png")
            .with("bezel-color", "red</style><img src=x onerror=alert(1)>")
            .with("padding", "1px</style>");
        let rendered = render(&attrs, ColorMode::Light).unwrap().rendered.unwrap();
        assert!(!rendered.stylesheet.contains('<'));
        assert!(rendered.stylesheet.contains(r"--bezel-color: red\3c /style>\3c img src=x"));

        let html = rendered.html();
        assert_eq!(html.matches("</style>").count(), 1);
        assert!(!html.contains("<img src=x"));
    }

    #[test]
    fn test_html_joins_style_and_markup() {
        let rendered = render(&Attributes::new().with("src", "a.png"), ColorMode::Light)
            .unwrap()
            .rendered
            .unwrap();
        let html = rendered.html();
        assert!(html.starts_with("<style>:host {"));
        assert!(html.contains("</style>\n"));
        assert!(html.ends_with(&rendered.markup));
    }
}
