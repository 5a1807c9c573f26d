//! Design-system token tables.
//!
//! Pure declarative data carried over from the project's styling-framework
//! configuration: color scales, typography, shadows, radii, and motion.
//! Nothing here has behavior beyond lookups; the live theme layer is
//! [`crate::store`].

/// A named color ramp with a default shade and ten numbered steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    pub name: &'static str,
    pub default: &'static str,
    pub steps: [(u16, &'static str); 10],
}

impl ColorScale {
    /// Look up a numbered step (50, 100, ..., 900).
    pub fn step(&self, number: u16) -> Option<&'static str> {
        self.steps
            .iter()
            .find(|(step, _)| *step == number)
            .map(|(_, hex)| *hex)
    }
}

/// Primary colors: deep navy authority.
pub const PRIMARY: ColorScale = ColorScale {
    name: "primary",
    default: "#1a365d",
    steps: [
        (50, "#f0f4f8"),
        (100, "#d6e3f0"),
        (200, "#b8d4ea"),
        (300, "#9ac2e4"),
        (400, "#7cb0de"),
        (500, "#5e9ed8"),
        (600, "#4a7ba7"),
        (700, "#365876"),
        (800, "#223545"),
        (900, "#1a365d"),
    ],
};

/// Secondary colors: innovation teal.
pub const SECONDARY: ColorScale = ColorScale {
    name: "secondary",
    default: "#38b2ac",
    steps: [
        (50, "#f0fdfa"),
        (100, "#ccfbf1"),
        (200, "#99f6e4"),
        (300, "#5eead4"),
        (400, "#2dd4bf"),
        (500, "#14b8a6"),
        (600, "#0d9488"),
        (700, "#0f766e"),
        (800, "#115e59"),
        (900, "#134e4a"),
    ],
};

/// Accent colors: bright highlight.
pub const ACCENT: ColorScale = ColorScale {
    name: "accent",
    default: "#4fd1c7",
    steps: [
        (50, "#f0fdfa"),
        (100, "#ccfbf1"),
        (200, "#99f6e4"),
        (300, "#5eead4"),
        (400, "#4fd1c7"),
        (500, "#2dd4bf"),
        (600, "#14b8a6"),
        (700, "#0d9488"),
        (800, "#0f766e"),
        (900, "#115e59"),
    ],
};

pub const SUCCESS: ColorScale = ColorScale {
    name: "success",
    default: "#38a169",
    steps: [
        (50, "#f0fff4"),
        (100, "#c6f6d5"),
        (200, "#9ae6b4"),
        (300, "#68d391"),
        (400, "#48bb78"),
        (500, "#38a169"),
        (600, "#2f855a"),
        (700, "#276749"),
        (800, "#22543d"),
        (900, "#1c4532"),
    ],
};

pub const WARNING: ColorScale = ColorScale {
    name: "warning",
    default: "#d69e2e",
    steps: [
        (50, "#fffff0"),
        (100, "#fefcbf"),
        (200, "#faf089"),
        (300, "#f6e05e"),
        (400, "#ecc94b"),
        (500, "#d69e2e"),
        (600, "#b7791f"),
        (700, "#975a16"),
        (800, "#744210"),
        (900, "#5f370e"),
    ],
};

pub const ERROR: ColorScale = ColorScale {
    name: "error",
    default: "#e53e3e",
    steps: [
        (50, "#fed7d7"),
        (100, "#feb2b2"),
        (200, "#fc8181"),
        (300, "#f56565"),
        (400, "#e53e3e"),
        (500, "#c53030"),
        (600, "#9b2c2c"),
        (700, "#742a2a"),
        (800, "#63171b"),
        (900, "#521b1b"),
    ],
};

/// Silver highlights.
pub const SILVER: ColorScale = ColorScale {
    name: "silver",
    default: "#cbd5e0",
    steps: [
        (50, "#f8fafc"),
        (100, "#f1f5f9"),
        (200, "#e2e8f0"),
        (300, "#cbd5e0"),
        (400, "#a0aec0"),
        (500, "#718096"),
        (600, "#4a5568"),
        (700, "#2d3748"),
        (800, "#1a202c"),
        (900, "#171923"),
    ],
};

/// Every ramp, for enumeration and name lookup.
pub const SCALES: [&ColorScale; 7] = [
    &PRIMARY, &SECONDARY, &ACCENT, &SUCCESS, &WARNING, &ERROR, &SILVER,
];

/// Look up a ramp by name.
pub fn scale(name: &str) -> Option<&'static ColorScale> {
    SCALES.iter().find(|s| s.name == name).copied()
}

// Single-value colors.
pub const BACKGROUND: &str = "#f7fafc";
pub const SURFACE: &str = "#e2e8f0";
pub const TEXT_PRIMARY: &str = "#2d3748";
pub const TEXT_SECONDARY: &str = "#718096";

/// Font stacks: (name, families).
pub const FONT_FAMILIES: [(&str, &str); 4] = [
    ("sans", "Inter, sans-serif"),
    ("primary", "Inter, sans-serif"),
    ("technical", "JetBrains Mono, monospace"),
    ("mono", "JetBrains Mono, monospace"),
];

/// Type ladder: (name, size, line-height).
pub const FONT_SIZES: [(&str, &str, &str); 10] = [
    ("xs", "0.75rem", "1rem"),
    ("sm", "0.875rem", "1.25rem"),
    ("base", "1rem", "1.5rem"),
    ("lg", "1.125rem", "1.75rem"),
    ("xl", "1.25rem", "1.75rem"),
    ("2xl", "1.5rem", "2rem"),
    ("3xl", "1.875rem", "2.25rem"),
    ("4xl", "2.25rem", "2.5rem"),
    ("5xl", "3rem", "1"),
    ("6xl", "3.75rem", "1"),
];

/// Box shadows: (name, value).
pub const BOX_SHADOWS: [(&str, &str); 3] = [
    (
        "subtle",
        "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
    ),
    (
        "card",
        "0 4px 6px -1px rgba(26, 54, 93, 0.1), 0 2px 4px -1px rgba(26, 54, 93, 0.06)",
    ),
    (
        "elevation",
        "0 10px 15px -3px rgba(26, 54, 93, 0.1), 0 4px 6px -2px rgba(26, 54, 93, 0.05)",
    ),
];

/// Border radii: (name, value). The unnamed default is "DEFAULT".
pub const BORDER_RADII: [(&str, &str); 9] = [
    ("none", "0"),
    ("sm", "0.125rem"),
    ("DEFAULT", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

/// Motion tokens.
pub const EASING_SMOOTH: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
pub const DURATION_STANDARD: &str = "300ms";

/// Spacing extensions beyond the framework defaults: (name, value).
pub const SPACING: [(&str, &str); 3] = [
    ("18", "4.5rem"),
    ("88", "22rem"),
    ("128", "32rem"),
];

/// Named entrance animations: (name, value). The first word of each value
/// names an entry in [`KEYFRAMES`].
pub const ANIMATIONS: [(&str, &str); 3] = [
    ("fade-in", "fadeIn 300ms ease-out"),
    ("slide-up", "slideUp 300ms ease-out"),
    ("slide-down", "slideDown 300ms ease-out"),
];

/// A keyframes table: each stop is (offset, declarations).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframes {
    pub name: &'static str,
    pub stops: [(&'static str, &'static str); 2],
}

/// Keyframes backing the named animations.
pub const KEYFRAMES: [Keyframes; 3] = [
    Keyframes {
        name: "fadeIn",
        stops: [("0%", "opacity: 0"), ("100%", "opacity: 1")],
    },
    Keyframes {
        name: "slideUp",
        stops: [
            ("0%", "transform: translateY(10px); opacity: 0"),
            ("100%", "transform: translateY(0); opacity: 1"),
        ],
    },
    Keyframes {
        name: "slideDown",
        stops: [
            ("0%", "transform: translateY(-10px); opacity: 0"),
            ("100%", "transform: translateY(0); opacity: 1"),
        ],
    },
];
