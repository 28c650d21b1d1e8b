//! Markup and stylesheet rendering.
//!
//! Rendering goes through a [minijinja] environment holding four embedded
//! templates: the device silhouette, a media slot, the iframe preview and
//! the stylesheet. Every interpolated value is escaped for its template:
//! HTML escaping for markup, and `<` as `\3c ` for the stylesheet so a value
//! cannot close the surrounding `<style>` element. Media and iframe
//! fragments are rendered first and handed to the silhouette as safe strings.
//!
//! [minijinja]: https://docs.rs/minijinja

mod filters;
mod renderer;

pub use renderer::{render, MockupRenderer, RenderOutcome, Rendered, IFRAME_SANDBOX};
