//! The theme color store.
//!
//! Mediates all reads and writes of theme colors between the live
//! presentation surface, durable storage, and an optional remote endpoint.
//! Constructed once with both capabilities injected; stateless beyond them.
//!
//! Persistence is merge-on-write: every successful update reads the full
//! stored blob, merges one entry, and rewrites it. One process cannot
//! interleave its own writes (`&mut self`), but two processes sharing a
//! store race with last-writer-wins.

use crate::api::ThemeApiClient;
use crate::color::{active_shade, hover_shade};
use crate::error::{ApiError, StorageError};
use crate::role::{ColorRole, RoleBindings, RoleValueMap, DEFAULT_COLORS};
use crate::storage::KvStore;
use crate::surface::StyleSurface;

/// Fixed durable-storage key holding the persisted role-value JSON blob.
const STORAGE_KEY: &str = "themeColors";

/// Service object owning the role bindings and both injected capabilities.
pub struct ThemeStore {
    bindings: RoleBindings,
    surface: Box<dyn StyleSurface>,
    storage: Box<dyn KvStore>,
}

impl ThemeStore {
    pub fn new(surface: Box<dyn StyleSurface>, storage: Box<dyn KvStore>) -> Self {
        Self {
            bindings: RoleBindings,
            surface,
            storage,
        }
    }

    pub fn bindings(&self) -> &RoleBindings {
        &self.bindings
    }

    /// The live surface, for rendering the current variable set.
    pub fn surface(&self) -> &dyn StyleSurface {
        self.surface.as_ref()
    }

    /// Update a single color variable.
    ///
    /// Returns `true` when `name` is a recognized role: the value is applied
    /// to the bound variable, hover/active shades are derived when the role
    /// is `primary`, and the entry is persisted. Unrecognized names return
    /// `false` with no side effects.
    ///
    /// Persistence failures are logged and swallowed; the live update has
    /// already happened and this call never fails because of storage.
    pub fn update_color(&mut self, name: &str, value: &str) -> bool {
        let Some(role) = ColorRole::parse(name) else {
            return false;
        };
        self.surface.set_var(self.bindings.variable(role), value);

        // Hover and active states always track the primary color.
        if role == ColorRole::Primary {
            self.surface.set_var(
                self.bindings.variable(ColorRole::PrimaryHover),
                &hover_shade(value),
            );
            self.surface.set_var(
                self.bindings.variable(ColorRole::PrimaryActive),
                &active_shade(value),
            );
        }

        if let Err(e) = self.save_entry(name, value) {
            tracing::warn!(role = name, error = %e, "failed to persist color update");
        }
        true
    }

    /// Apply `update_color` once per entry, in the supplied iteration order.
    ///
    /// Unrecognized roles are skipped per entry; returns the number applied.
    /// No atomicity: an interrupted batch leaves earlier entries applied.
    pub fn update_theme_colors<'a, I>(&mut self, colors: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        colors
            .into_iter()
            .filter(|(name, value)| self.update_color(name, value))
            .count()
    }

    /// Rehydrate the live surface from the persisted blob.
    ///
    /// Absent storage is `Ok(0)`. A malformed blob is a parse error and
    /// nothing is applied. Otherwise every stored entry is applied and the
    /// applied count returned.
    pub fn load_saved_colors(&mut self) -> Result<usize, StorageError> {
        let Some(raw) = self.storage.get(STORAGE_KEY)? else {
            return Ok(0);
        };
        let colors: RoleValueMap =
            serde_json::from_str(&raw).map_err(|e| StorageError::Parse(e.to_string()))?;
        Ok(self.update_theme_colors(
            colors.iter().map(|(name, value)| (name.as_str(), value.as_str())),
        ))
    }

    /// Merge one entry into the persisted blob and rewrite it whole.
    ///
    /// A missing or unreadable blob is treated as empty so a single corrupt
    /// write cannot wedge future persistence.
    fn save_entry(&mut self, name: &str, value: &str) -> Result<(), StorageError> {
        let mut colors = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<RoleValueMap>(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "discarding unparsable persisted colors");
                RoleValueMap::new()
            }),
            Ok(None) => RoleValueMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "treating unreadable persisted colors as empty");
                RoleValueMap::new()
            }
        };
        colors.insert(name.to_string(), value.to_string());
        let json = serde_json::to_string(&colors)
            .map_err(|e| StorageError::Parse(e.to_string()))?;
        self.storage.set(STORAGE_KEY, &json)
    }

    /// Apply the built-in default set and delete the storage entry entirely.
    pub fn reset_to_defaults(&mut self) -> Result<(), StorageError> {
        self.update_theme_colors(
            DEFAULT_COLORS
                .iter()
                .map(|(role, value)| (role.as_str(), *value)),
        );
        self.storage.remove(STORAGE_KEY)
    }

    /// The currently rendered value for a role, from the live surface.
    ///
    /// This reads the resolved form, not the persisted blob, so the result
    /// may be format-normalized by the surface. `None` for unrecognized
    /// roles or never-set variables.
    pub fn get_color(&self, name: &str) -> Option<String> {
        let role = ColorRole::parse(name)?;
        self.surface.resolved_var(self.bindings.variable(role))
    }

    /// Every bound role with a currently resolved value.
    pub fn current_colors(&self) -> RoleValueMap {
        crate::role::ALL_ROLES
            .iter()
            .filter_map(|role| {
                self.surface
                    .resolved_var(self.bindings.variable(*role))
                    .map(|value| (role.as_str().to_string(), value))
            })
            .collect()
    }

    /// Fetch the remote color map and apply it.
    ///
    /// Nothing is applied on transport or parse failure; the typed error
    /// distinguishes the two.
    pub async fn fetch_from_api(
        &mut self,
        api: &ThemeApiClient,
        endpoint: &str,
    ) -> Result<RoleValueMap, ApiError> {
        let colors = api.fetch_colors(endpoint).await?;
        self.update_theme_colors(
            colors.iter().map(|(name, value)| (name.as_str(), value.as_str())),
        );
        Ok(colors)
    }

    /// Post the currently bound role values; returns the endpoint's parsed
    /// JSON response.
    pub async fn push_to_api(
        &self,
        api: &ThemeApiClient,
        endpoint: &str,
    ) -> Result<serde_json::Value, ApiError> {
        api.save_colors(endpoint, &self.current_colors()).await
    }
}
