//! CLI entry point for tinct.
//!
//! Each invocation behaves like one page load: seed the surface with the
//! built-in defaults, rehydrate any persisted overrides, then run a single
//! command against the store.

mod cli;

use clap::Parser;
use crossterm::style::{Color, Stylize};
use tinct::api::ThemeApiClient;
use tinct::color::{active_shade, hover_shade, Rgb};
use tinct::config::{load_config, TinctConfig};
use tinct::error::{ConfigError, TinctError};
use tinct::role::{ColorRole, RoleBindings, RoleValueMap, ALL_ROLES, DEFAULT_COLORS};
use tinct::storage::FileStore;
use tinct::store::ThemeStore;
use tinct::surface::{render_root_block, MemorySurface, StyleSurface};

#[tokio::main]
async fn main() {
    init_tracing();

    let args = cli::Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("TINCT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: cli::Args) -> Result<(), TinctError> {
    let mut config = load_config(args.config.as_deref())?;
    apply_cli_overrides(&mut config, &args);

    let storage = FileStore::open(&config.storage_dir)?;
    let mut store = ThemeStore::new(Box::new(seeded_surface()), Box::new(storage));

    // Rehydrate persisted overrides on top of the defaults. A corrupt blob
    // is diagnostic-only; the defaults stay up.
    if let Err(e) = store.load_saved_colors() {
        tracing::warn!(error = %e, "ignoring persisted theme colors");
    }

    match args.command {
        cli::Command::Set { role, value } => {
            if !store.update_color(&role, &value) {
                return Err(TinctError::UnknownRole(role));
            }
            print_role_line(&store, &role);
        }
        cli::Command::Apply { colors } => {
            let map: RoleValueMap = serde_json::from_str(&colors)
                .map_err(|e| TinctError::InvalidInput(e.to_string()))?;
            let applied = store
                .update_theme_colors(map.iter().map(|(name, value)| (name.as_str(), value.as_str())));
            println!("applied {applied} of {} entries", map.len());
        }
        cli::Command::Get { role } => match store.get_color(&role) {
            Some(value) => println!("{value}"),
            None => return Err(TinctError::UnknownRole(role)),
        },
        cli::Command::Show => {
            for role in ALL_ROLES {
                print_role_line(&store, role.as_str());
            }
        }
        cli::Command::Css { out } => {
            let css = render_root_block(store.surface(), store.bindings());
            match out {
                Some(path) => std::fs::write(&path, css)
                    .map_err(|e| TinctError::Storage(e.into()))?,
                None => print!("{css}"),
            }
        }
        cli::Command::Reset => {
            store.reset_to_defaults()?;
            println!("reset to defaults");
        }
        cli::Command::Fetch => {
            let endpoint = require_endpoint(&config)?;
            let colors = store.fetch_from_api(&ThemeApiClient::new(), &endpoint).await?;
            println!("fetched {} entries from {endpoint}", colors.len());
        }
        cli::Command::Push => {
            let endpoint = require_endpoint(&config)?;
            let response = store.push_to_api(&ThemeApiClient::new(), &endpoint).await?;
            println!("{response}");
        }
    }
    Ok(())
}

fn apply_cli_overrides(config: &mut TinctConfig, args: &cli::Args) {
    if let Some(dir) = &args.storage_dir {
        config.storage_dir = dir.into();
    }
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = Some(endpoint.clone());
    }
}

fn require_endpoint(config: &TinctConfig) -> Result<String, TinctError> {
    config.endpoint.clone().ok_or_else(|| {
        TinctError::Config(ConfigError::Invalid(
            "no endpoint configured; set [api] endpoint, TINCT_ENDPOINT, or --endpoint".to_string(),
        ))
    })
}

/// Surface pre-seeded with the built-in defaults, the way a page ships a
/// stylesheet with the default variable values baked in. Nothing here is
/// persisted.
fn seeded_surface() -> MemorySurface {
    let bindings = RoleBindings;
    let mut surface = MemorySurface::new();
    let mut default_primary = None;
    for (role, value) in DEFAULT_COLORS {
        surface.set_var(bindings.variable(role), value);
        if role == ColorRole::Primary {
            default_primary = Some(value);
        }
    }
    if let Some(primary) = default_primary {
        surface.set_var(
            bindings.variable(ColorRole::PrimaryHover),
            &hover_shade(primary),
        );
        surface.set_var(
            bindings.variable(ColorRole::PrimaryActive),
            &active_shade(primary),
        );
    }
    surface
}

/// Print one `role  value` line with a terminal color swatch.
fn print_role_line(store: &ThemeStore, role: &str) {
    let value = store.get_color(role).unwrap_or_default();
    let rgb = Rgb::parse(&value);
    let swatch = "  ".on(Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    });
    println!("{swatch} {role:<14} {value}");
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ensures the seeded surface matches what a reset produces, shades
    // included, so `show` before and after a reset agree.
    #[test]
    fn seeded_surface_matches_reset_state() {
        let surface = seeded_surface();
        let bindings = RoleBindings;
        assert_eq!(
            surface.resolved_var(bindings.variable(ColorRole::Bg)).as_deref(),
            Some("#F6F6F6")
        );
        assert_eq!(
            surface
                .resolved_var(bindings.variable(ColorRole::PrimaryHover))
                .as_deref(),
            Some(hover_shade("#1612FF").as_str())
        );
        assert_eq!(
            surface
                .resolved_var(bindings.variable(ColorRole::PrimaryActive))
                .as_deref(),
            Some(active_shade("#1612FF").as_str())
        );
    }

    #[test]
    fn endpoint_is_required_for_sync_commands() {
        let config = TinctConfig {
            endpoint: None,
            ..TinctConfig::default()
        };
        let err = require_endpoint(&config).expect_err("must fail");
        assert!(err.to_string().contains("no endpoint configured"));
    }
}
