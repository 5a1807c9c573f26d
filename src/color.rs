//! Hex color parsing and the shade-derivation arithmetic.
//!
//! Colors are 6-hex-digit `#RRGGBB` strings, optionally without the leading
//! `#`. There is no alpha channel and no 3-digit short form. Malformed input
//! is not rejected: any channel that fails to parse behaves as fully dark (0).

/// Percentage by which the hover shade is darker than its base color.
pub const HOVER_DARKEN_PERCENT: f64 = 10.0;

/// Percentage by which the active shade is darker than its base color.
pub const ACTIVE_DARKEN_PERCENT: f64 = 20.0;

/// An RGB channel triple decoded from a hex color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Decode a `#RRGGBB` string. Unparsable or missing channels become 0.
    pub fn parse(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        Self {
            r: parse_channel(digits, 0),
            g: parse_channel(digits, 2),
            b: parse_channel(digits, 4),
        }
    }

    /// Encode as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse the 2-digit channel starting at `offset`, defaulting to fully dark.
fn parse_channel(digits: &str, offset: usize) -> u8 {
    digits
        .get(offset..offset + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .unwrap_or(0)
}

/// Darken a hex color by `percent`, channel-wise.
///
/// Each channel is scaled by `(1 - percent/100)`, floored, and clamped at 0.
/// No upper clamp is needed for non-negative percentages since scaling only
/// reduces. Output is always lowercase `#rrggbb`.
pub fn darken(hex: &str, percent: f64) -> String {
    let rgb = Rgb::parse(hex);
    let factor = 1.0 - percent / 100.0;
    Rgb {
        r: darken_channel(rgb.r, factor),
        g: darken_channel(rgb.g, factor),
        b: darken_channel(rgb.b, factor),
    }
    .to_hex()
}

fn darken_channel(channel: u8, factor: f64) -> u8 {
    // Float-to-int `as` saturates, so oversized results cannot wrap.
    (f64::from(channel) * factor).floor().max(0.0) as u8
}

/// The hover shade derived from a base color.
pub fn hover_shade(hex: &str) -> String {
    darken(hex, HOVER_DARKEN_PERCENT)
}

/// The active (pressed) shade derived from a base color.
pub fn active_shade(hex: &str) -> String {
    darken(hex, ACTIVE_DARKEN_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_lowercase() {
        let rgb = Rgb::parse("#1A2B3C");
        assert_eq!(rgb, Rgb { r: 0x1a, g: 0x2b, b: 0x3c });
        assert_eq!(rgb.to_hex(), "#1a2b3c");
    }

    #[test]
    fn parse_accepts_missing_hash_prefix() {
        assert_eq!(Rgb::parse("ff8000"), Rgb { r: 255, g: 128, b: 0 });
    }

    // Ensures the fully-dark fallback applies per channel, not per color.
    #[test]
    fn unparsable_channels_become_zero() {
        assert_eq!(Rgb::parse("#ZZ12FF"), Rgb { r: 0, g: 0x12, b: 0xff });
        assert_eq!(Rgb::parse("#ff"), Rgb { r: 0xff, g: 0, b: 0 });
        assert_eq!(Rgb::parse(""), Rgb { r: 0, g: 0, b: 0 });
    }

    // Ensures the channel-wise floor-scale arithmetic matches the documented
    // derivation: 0x16*0.9 -> 19, 0x12*0.9 -> 16, 0xFF*0.9 -> 229.
    #[test]
    fn darken_scales_each_channel_and_floors() {
        assert_eq!(darken("#1612FF", 10.0), "#1310e5");
    }

    #[test]
    fn darken_black_is_idempotent() {
        assert_eq!(darken("#000000", 50.0), "#000000");
    }

    #[test]
    fn darken_by_zero_is_identity_modulo_case() {
        assert_eq!(darken("#A0B0C0", 0.0), "#a0b0c0");
    }

    #[test]
    fn darken_by_full_hundred_is_black() {
        assert_eq!(darken("#ffffff", 100.0), "#000000");
    }

    // Ensures garbage input flows through the fully-dark policy instead of
    // erroring out.
    #[test]
    fn darken_garbage_input_is_black() {
        assert_eq!(darken("not-a-color", 10.0), "#000000");
    }

    #[test]
    fn hover_and_active_use_fixed_percentages() {
        assert_eq!(hover_shade("#1612FF"), darken("#1612FF", 10.0));
        assert_eq!(active_shade("#1612FF"), darken("#1612FF", 20.0));
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn darken_never_brightens_and_stays_well_formed(
                r in 0u8..=255,
                g in 0u8..=255,
                b in 0u8..=255,
                percent in 0.0f64..=100.0,
            ) {
                let base = Rgb { r, g, b };
                let out = darken(&base.to_hex(), percent);
                prop_assert!(out.starts_with('#'));
                prop_assert_eq!(out.len(), 7);
                prop_assert!(out[1..].chars().all(|ch| ch.is_ascii_hexdigit()
                    && !ch.is_ascii_uppercase()));

                let shaded = Rgb::parse(&out);
                prop_assert!(shaded.r <= r);
                prop_assert!(shaded.g <= g);
                prop_assert!(shaded.b <= b);
            }
        }
    }
}
