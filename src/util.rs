//! Utility functions for URL and length processing.

use cssparser::{Parser, ParserInput, Token};

/// Returns the lowercased file extension of a media URL.
///
/// Query strings and fragments are ignored, so `clip.MP4?v=2` yields `mp4`.
/// Returns `None` when the last path segment carries no dot.
///
/// # Example
///
/// ```rust
/// use device_mockup::extension_of;
///
/// assert_eq!(extension_of("media/demo.WebP").as_deref(), Some("webp"));
/// assert_eq!(extension_of("clip.mp4?autoplay=1").as_deref(), Some("mp4"));
/// assert_eq!(extension_of("https://example.com/video"), None);
/// ```
pub fn extension_of(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Parses a length such as `"476px"` or `"504"` into a number.
///
/// The first `px` is removed, then the leading CSS numeric token (a number,
/// a dimension in any unit, or a percentage) gives the value. Anything after
/// it is ignored. Input that does not start with a number yields `NaN`,
/// which callers pass through unguarded.
///
/// # Example
///
/// ```rust
/// use device_mockup::parse_length;
///
/// assert_eq!(parse_length("476px"), 476.0);
/// assert_eq!(parse_length(" 12.5rem"), 12.5);
/// assert!(parse_length("wide").is_nan());
/// ```
pub fn parse_length(value: &str) -> f64 {
    let stripped = value.replacen("px", "", 1);
    let mut input = ParserInput::new(&stripped);
    let mut parser = Parser::new(&mut input);

    let start = parser.position();
    let token = match parser.next() {
        Ok(token) => token.clone(),
        Err(_) => return f64::NAN,
    };
    let text = parser.slice_from(start).trim();

    // Tokens carry f32; the source text keeps full precision
    let (number, approx) = match &token {
        Token::Number { value, .. } => (text, *value),
        Token::Dimension { value, unit, .. } => (text.strip_suffix(unit.as_ref()).unwrap_or(text), *value),
        Token::Percentage { unit_value, .. } => (text.trim_end_matches('%'), unit_value * 100.0),
        _ => return f64::NAN,
    };
    number.parse().unwrap_or(f64::from(approx))
}

/// Formats a number the way CSS expects it: integers without a trailing `.0`.
pub(crate) fn css_number(value: f64) -> String {
    format!("{}", value)
}
