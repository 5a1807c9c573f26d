//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

/// Live-update, persist, and sync a page's theme color variables.
#[derive(Debug, Parser)]
#[command(name = "tinct", version, after_help = tinct::build_info::HELP_BUILD_METADATA)]
pub struct Args {
    /// Path to config file (default: ./tinct.toml or ~/.config/tinct/tinct.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the durable storage directory.
    #[arg(long = "storage-dir")]
    pub storage_dir: Option<String>,

    /// Override the remote color endpoint.
    #[arg(long = "endpoint")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set one color role (e.g. `tinct set primary '#1612FF'`).
    Set {
        /// Role name: bg, primary, primaryHover, primaryActive, text, white, border.
        role: String,
        /// Hex color value (`#RRGGBB`).
        value: String,
    },
    /// Apply a JSON object of role-value pairs at once.
    Apply {
        /// e.g. `{"primary": "#1612FF", "bg": "#F6F6F6"}`
        colors: String,
    },
    /// Print the resolved value for one role.
    Get { role: String },
    /// List every role with its resolved value and a terminal swatch.
    Show,
    /// Render the current variables as a CSS `:root` block.
    Css {
        /// Write to a file instead of stdout.
        #[arg(long = "out")]
        out: Option<String>,
    },
    /// Restore the built-in defaults and clear persisted state.
    Reset,
    /// Fetch the color map from the configured endpoint and apply it.
    Fetch,
    /// Post the current color set to the configured endpoint.
    Push,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn set_parses_role_and_value() {
        let args = Args::parse_from(["tinct", "set", "primary", "#1612FF"]);
        match args.command {
            Command::Set { role, value } => {
                assert_eq!(role, "primary");
                assert_eq!(value, "#1612FF");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_overrides_parse_before_subcommand() {
        let args = Args::parse_from([
            "tinct",
            "--storage-dir",
            "/tmp/theme",
            "--endpoint",
            "http://localhost:9000/colors",
            "fetch",
        ]);
        assert_eq!(args.storage_dir.as_deref(), Some("/tmp/theme"));
        assert_eq!(
            args.endpoint.as_deref(),
            Some("http://localhost:9000/colors")
        );
        assert!(matches!(args.command, Command::Fetch));
    }

    #[test]
    fn css_out_flag_is_optional() {
        let args = Args::parse_from(["tinct", "css"]);
        assert!(matches!(args.command, Command::Css { out: None }));

        let args = Args::parse_from(["tinct", "css", "--out", "theme.css"]);
        match args.command {
            Command::Css { out } => assert_eq!(out.as_deref(), Some("theme.css")),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
