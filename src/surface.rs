//! The live presentation context as an injected capability.
//!
//! The theme store never talks to a rendering surface directly; it writes
//! style variables through [`StyleSurface`]. This keeps the store testable
//! without a real page and lets embedders bridge to whatever surface they
//! render with.

use crate::role::{RoleBindings, ALL_ROLES};
use std::collections::BTreeMap;

/// A named-style-variable sink with resolved-value reads.
pub trait StyleSurface {
    /// Set a style variable to a raw value.
    fn set_var(&mut self, name: &str, value: &str);

    /// The currently rendered value for a variable, in whatever resolved
    /// form the surface uses. `None` when the variable was never set.
    fn resolved_var(&self, name: &str) -> Option<String>;
}

/// In-process surface backed by a plain map.
///
/// Resolved reads return the stored value trimmed, mirroring how computed
/// style lookups strip surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    vars: BTreeMap<String, String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no variable has ever been set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl StyleSurface for MemorySurface {
    fn set_var(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    fn resolved_var(&self, name: &str) -> Option<String> {
        self.vars.get(name).map(|value| value.trim().to_string())
    }
}

/// Render the bound role variables as a CSS `:root` block.
///
/// Unset variables are omitted, so a freshly constructed surface renders an
/// empty block.
pub fn render_root_block(surface: &dyn StyleSurface, bindings: &RoleBindings) -> String {
    let mut out = String::from(":root {\n");
    for role in ALL_ROLES {
        let variable = bindings.variable(role);
        if let Some(value) = surface.resolved_var(variable) {
            out.push_str("  ");
            out.push_str(variable);
            out.push_str(": ");
            out.push_str(&value);
            out.push_str(";\n");
        }
    }
    out.push_str("}\n");
    out
}
