//! Deprecated attribute names.
//!
//! Earlier releases named the color attributes after the parts of a laptop
//! (`frame-color`, `base-color`, ...). The current names describe the role
//! of the color instead. Old names still resolve through this table.

/// A deprecated attribute name and the attribute that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub deprecated: &'static str,
    pub replacement: &'static str,
}

/// All deprecated names, keyed by the replacement they alias.
pub const DEPRECATED_ALIASES: &[Alias] = &[
    Alias {
        deprecated: "frame-color",
        replacement: "bezel-color",
    },
    Alias {
        deprecated: "frame-dark",
        replacement: "camera-color",
    },
    Alias {
        deprecated: "base-color",
        replacement: "keyboard-color",
    },
    Alias {
        deprecated: "base-dark",
        replacement: "keyboard-gradient",
    },
    Alias {
        deprecated: "screen-bg",
        replacement: "screen-background",
    },
];

/// Returns the deprecated name aliasing `replacement`, if any.
pub fn deprecated_name_for(replacement: &str) -> Option<&'static str> {
    DEPRECATED_ALIASES
        .iter()
        .find(|a| a.replacement == replacement)
        .map(|a| a.deprecated)
}
