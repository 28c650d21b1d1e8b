//! Advisory notices for soft failures.
//!
//! Rendering never fails because of bad input. Instead, two conditions are
//! reported as [`Advisory`] values and logged through `tracing`:
//!
//! - no usable media source outside iframe mode (rendering is skipped)
//! - a deprecated attribute name resolved a value (rendering proceeds)

use std::fmt;

/// A non-fatal notice produced while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// Neither `src` nor its fallbacks are set and iframe mode is not active.
    NoMediaSources,
    /// A deprecated attribute supplied a value its replacement did not.
    DeprecatedAttribute {
        used: &'static str,
        replacement: &'static str,
    },
}

impl Advisory {
    /// Logs the advisory at warn level.
    pub(crate) fn emit(&self) {
        match self {
            Advisory::NoMediaSources => {
                tracing::warn!(target: "device_mockup", "{}", self);
            }
            Advisory::DeprecatedAttribute { used, replacement } => {
                tracing::warn!(
                    target: "device_mockup",
                    used = *used,
                    replacement = *replacement,
                    "{}",
                    self
                );
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NoMediaSources => write!(f, "device-mockup: No media sources provided"),
            Advisory::DeprecatedAttribute { used, replacement } => write!(
                f,
                "device-mockup: \"{}\" is deprecated. Use \"{}\" instead.",
                used, replacement
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_media_display() {
        assert_eq!(
            Advisory::NoMediaSources.to_string(),
            "device-mockup: No media sources provided"
        );
    }

    #[test]
    fn test_deprecated_display_names_replacement() {
        let advisory = Advisory::DeprecatedAttribute {
            used: "frame-color",
            replacement: "bezel-color",
        };
        let msg = advisory.to_string();
        assert!(msg.contains("\"frame-color\" is deprecated"));
        assert!(msg.contains("Use \"bezel-color\" instead"));
    }
}
