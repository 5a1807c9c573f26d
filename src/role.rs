//! Logical color roles and their style-variable bindings.
//!
//! Roles are a fixed, process-wide set; the binding from role to CSS custom
//! property is immutable after construction and defines which roles are
//! settable at all.

use serde::{Deserialize, Serialize};

/// A themeable color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Bg,
    Primary,
    PrimaryHover,
    PrimaryActive,
    Text,
    White,
    Border,
}

/// Every role, in presentation order.
pub const ALL_ROLES: [ColorRole; 7] = [
    ColorRole::Bg,
    ColorRole::Primary,
    ColorRole::PrimaryHover,
    ColorRole::PrimaryActive,
    ColorRole::Text,
    ColorRole::White,
    ColorRole::Border,
];

impl ColorRole {
    /// The wire/storage name (camelCase, matching the persisted blob keys).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::Primary => "primary",
            Self::PrimaryHover => "primaryHover",
            Self::PrimaryActive => "primaryActive",
            Self::Text => "text",
            Self::White => "white",
            Self::Border => "border",
        }
    }

    /// Parse a wire/storage name. Unrecognized names are not an error at this
    /// level; callers decide whether to skip or report.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "bg" => Some(Self::Bg),
            "primary" => Some(Self::Primary),
            "primaryHover" => Some(Self::PrimaryHover),
            "primaryActive" => Some(Self::PrimaryActive),
            "text" => Some(Self::Text),
            "white" => Some(Self::White),
            "border" => Some(Self::Border),
            _ => None,
        }
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role-name to color-value mapping as it travels over the wire and into
/// durable storage. Keys are wire names; unrecognized keys are tolerated and
/// skipped at application time.
pub type RoleValueMap = std::collections::BTreeMap<String, String>;

/// Immutable mapping from [`ColorRole`] to a style-variable identifier.
#[derive(Debug, Clone, Default)]
pub struct RoleBindings;

impl RoleBindings {
    /// Style-variable identifier bound to a role.
    pub fn variable(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::Bg => "--color-bg",
            ColorRole::Primary => "--color-primary",
            ColorRole::PrimaryHover => "--color-primary-hover",
            ColorRole::PrimaryActive => "--color-primary-active",
            ColorRole::Text => "--color-text",
            ColorRole::White => "--color-white",
            ColorRole::Border => "--color-border",
        }
    }
}

/// Built-in default color set applied by a reset.
///
/// The hover/active shades are intentionally absent: they are derived from
/// `primary` when it is applied.
pub const DEFAULT_COLORS: [(ColorRole, &str); 5] = [
    (ColorRole::Bg, "#F6F6F6"),
    (ColorRole::Primary, "#1612FF"),
    (ColorRole::Text, "#000000"),
    (ColorRole::White, "#FFFFFF"),
    (ColorRole::Border, "#E0E0E0"),
];

#[cfg(test)]
mod tests {
    use super::*;

    // Ensures the parse/as_str pair covers every role symmetrically.
    #[test]
    fn parse_round_trips_every_role() {
        for role in ALL_ROLES {
            assert_eq!(ColorRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_case_variants() {
        assert_eq!(ColorRole::parse("accent"), None);
        assert_eq!(ColorRole::parse("Primary"), None);
        assert_eq!(ColorRole::parse("primary-hover"), None);
        assert_eq!(ColorRole::parse(""), None);
    }

    #[test]
    fn serde_names_match_wire_names() {
        for role in ALL_ROLES {
            let json = serde_json::to_string(&role).expect("serialize role");
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn bindings_use_kebab_case_custom_properties() {
        let bindings = RoleBindings;
        assert_eq!(bindings.variable(ColorRole::Bg), "--color-bg");
        assert_eq!(
            bindings.variable(ColorRole::PrimaryHover),
            "--color-primary-hover"
        );
    }

    #[test]
    fn defaults_omit_derived_shades() {
        assert!(DEFAULT_COLORS
            .iter()
            .all(|(role, _)| !matches!(role, ColorRole::PrimaryHover | ColorRole::PrimaryActive)));
    }
}
