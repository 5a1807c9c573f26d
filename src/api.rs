//! HTTP client for the remote theme color endpoint.
//!
//! The endpoint contract is deliberately small: `GET` returns a JSON object
//! of role-name to color-value strings, `POST` accepts the same shape and
//! returns an arbitrary JSON body. There is no retry policy; every failure
//! is terminal for that call.

use crate::error::ApiError;
use crate::role::RoleValueMap;

/// Client for a role-value color endpoint.
pub struct ThemeApiClient {
    http: reqwest::Client,
}

impl ThemeApiClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the remote color map.
    pub async fn fetch_colors(&self, endpoint: &str) -> Result<RoleValueMap, ApiError> {
        let response = self.http.get(endpoint).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status(status, body));
        }

        let body = response.text().await?;
        serde_json::from_str::<RoleValueMap>(&body).map_err(|e| ApiError::Json(e.to_string()))
    }

    /// Post a color map; returns the endpoint's parsed JSON response.
    pub async fn save_colors(
        &self,
        endpoint: &str,
        colors: &RoleValueMap,
    ) -> Result<serde_json::Value, ApiError> {
        let response = self.http.post(endpoint).json(colors).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status(status, body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Json(e.to_string()))
    }
}

impl Default for ThemeApiClient {
    fn default() -> Self {
        Self::new()
    }
}
