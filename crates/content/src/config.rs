//! Launch configuration
//!
//! The desktop binary reads its configuration from the environment:
//!
//! | Variable              | Meaning                                   | Default   |
//! |-----------------------|-------------------------------------------|-----------|
//! | `CLINIC_SITE_VARIANT` | Built-in content set (`clinic`, `aesthetics`) | `clinic` |
//! | `CLINIC_SITE_CONTENT` | Path to a `.toml` / `.json` content file  | unset     |
//! | `CLINIC_SITE_WINDOW`  | Window size as `WIDTHxHEIGHT`             | `1280x860` |
//!
//! A content file, when given, wins over the variant.

use crate::serialization::load_content;
use crate::site::SiteContent;
use crate::validation::validate_content;
use crate::variants::Variant;
use clinic_core::{SiteError, SiteResult};
use std::path::PathBuf;

/// Environment variable selecting the built-in variant
pub const ENV_VARIANT: &str = "CLINIC_SITE_VARIANT";

/// Environment variable pointing at a content file
pub const ENV_CONTENT: &str = "CLINIC_SITE_CONTENT";

/// Environment variable with the window size
pub const ENV_WINDOW: &str = "CLINIC_SITE_WINDOW";

// ============================================================================
// Window Configuration
// ============================================================================

/// Desktop window settings
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Title override; the clinic name is used when unset
    pub title: Option<String>,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: 1280.0,
            height: 860.0,
        }
    }
}

impl WindowConfig {
    /// Minimum window size
    pub const MIN_WIDTH: f64 = 360.0;
    pub const MIN_HEIGHT: f64 = 480.0;

    /// Parse a `WIDTHxHEIGHT` size
    pub fn parse_size(value: &str) -> SiteResult<(f64, f64)> {
        let (w, h) = value
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| SiteError::config(format!("window size '{}' is not WIDTHxHEIGHT", value)))?;

        let parse = |part: &str| -> SiteResult<f64> {
            part.trim()
                .parse::<u32>()
                .map(f64::from)
                .map_err(|_| SiteError::config(format!("window size '{}' is not WIDTHxHEIGHT", value)))
        };
        let (width, height) = (parse(w)?, parse(h)?);

        if width < Self::MIN_WIDTH || height < Self::MIN_HEIGHT {
            return Err(SiteError::config(format!(
                "window size {}x{} is below the minimum {}x{}",
                width,
                height,
                Self::MIN_WIDTH,
                Self::MIN_HEIGHT
            )));
        }
        Ok((width, height))
    }
}

// ============================================================================
// Site Configuration
// ============================================================================

/// Everything needed to launch the site
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
    pub variant: Variant,
    pub content_path: Option<PathBuf>,
    pub window: WindowConfig,
}

impl SiteConfig {
    /// Build from process environment variables
    pub fn from_env() -> SiteResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> SiteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(variant) = get(ENV_VARIANT) {
            config.variant = variant.parse()?;
        }

        if let Some(path) = get(ENV_CONTENT) {
            config.content_path = Some(PathBuf::from(path.trim()));
        }

        if let Some(size) = get(ENV_WINDOW) {
            let (width, height) = WindowConfig::parse_size(&size)?;
            config.window.width = width;
            config.window.height = height;
        }

        Ok(config)
    }

    /// Load and validate the content this configuration points at.
    ///
    /// Validation errors abort; warnings are logged.
    pub fn load_content(&self) -> SiteResult<SiteContent> {
        let content = match &self.content_path {
            Some(path) => {
                tracing::info!("Loading site content from {}", path.display());
                load_content(path)?
            }
            None => {
                tracing::info!("Using built-in '{}' site content", self.variant);
                self.variant.content()
            }
        };

        let result = validate_content(&content);
        for warning in &result.warnings {
            tracing::warn!("{}", warning);
        }
        result.to_result()?;

        Ok(content)
    }

    /// Window title for the loaded content
    pub fn window_title(&self, content: &SiteContent) -> String {
        self.window
            .title
            .clone()
            .unwrap_or_else(|| content.window_title())
    }
}

// ============================================================================
// Tests
// ============================================================================
