//! Compile-time build metadata exposed to the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("TINCT_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("TINCT_BUILD_TIMESTAMP");

/// Help trailer block that surfaces build metadata in `tinct --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("TINCT_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("TINCT_BUILD_TIMESTAMP")
);

/// Render CLI version block used by `tinct --version`.
pub fn cli_version_text() -> String {
    format!("tinct {VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_version_text_includes_expected_lines() {
        // Version output must include all embedded metadata fields.
        let text = cli_version_text();
        assert!(text.starts_with("tinct "));
        assert!(text.contains("commit:"));
        assert!(text.contains("built:"));
    }
}
