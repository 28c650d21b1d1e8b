//! Error types.

/// Error returned when a mockup cannot be rendered.
///
/// Missing media and deprecated attributes are not errors; they surface as
/// [`Advisory`](crate::Advisory) values instead. What remains are failures of
/// the template engine itself.
#[derive(Debug, thiserror::Error)]
pub enum MockupError {
    /// A built-in template failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
