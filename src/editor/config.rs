use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;

use crate::{
    assist::gemini::GeminiClient,
    export::png::EXPORT_SCALE,
    foundation::error::{StudioError, StudioResult},
    render::RenderSettings,
};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Runtime configuration. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    pub model: String,
    pub api_base_url: String,
    /// Deadline for each assistant call.
    pub request_timeout_secs: u64,
    pub export_scale: f32,
    /// First component of every export file name.
    pub brand_prefix: String,
    /// Extra fonts for text rendering, loaded next to system fonts.
    pub fonts_dir: Option<PathBuf>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base_url: GeminiClient::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 45,
            export_scale: EXPORT_SCALE,
            brand_prefix: "arte".to_string(),
            fonts_dir: None,
        }
    }
}

impl StudioConfig {
    pub fn from_json_str(s: &str) -> StudioResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| StudioError::serde(format!("invalid studio config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> StudioResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read studio config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> StudioResult<()> {
        if self.model.trim().is_empty() {
            return Err(StudioError::validation("model must be non-empty"));
        }
        if self.brand_prefix.trim().is_empty() {
            return Err(StudioError::validation("brand_prefix must be non-empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(StudioError::validation("request_timeout_secs must be > 0"));
        }
        if !self.export_scale.is_finite() || self.export_scale <= 0.0 {
            return Err(StudioError::validation(
                "export_scale must be finite and > 0",
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            scale: self.export_scale,
            fonts_dir: self.fonts_dir.clone(),
        }
    }

    /// API key from `GEMINI_API_KEY`, falling back to `API_KEY`.
    pub fn api_key_from_env() -> Option<String> {
        ["GEMINI_API_KEY", "API_KEY"]
            .into_iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|v| !v.trim().is_empty())
    }

    /// Gemini client for this config using the key from the environment.
    pub fn gemini_client(&self) -> StudioResult<GeminiClient> {
        let key = Self::api_key_from_env().ok_or_else(|| {
            StudioError::validation("set GEMINI_API_KEY (or API_KEY) to use the assistants")
        })?;
        GeminiClient::new(key, &self.api_base_url, self.request_timeout())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/config.rs"]
mod tests;
