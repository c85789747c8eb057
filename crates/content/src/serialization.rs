//! Reading and writing site content files
//!
//! Content files are TOML or JSON, chosen by extension. Both wrap the
//! content in a small versioned envelope; a bare `SiteContent` document is
//! accepted too.

use crate::SCHEMA_VERSION;
use crate::site::SiteContent;
use clinic_core::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Content Format
// ============================================================================

/// On-disk format of a content file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFormat {
    #[default]
    Toml,
    Json,
}

impl ContentFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ContentFormat::Toml => "toml",
            ContentFormat::Json => "json",
        }
    }

    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> SiteResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl std::str::FromStr for ContentFormat {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(ContentFormat::Toml),
            "json" => Ok(ContentFormat::Json),
            other => Err(SiteError::UnsupportedFormat(other.to_string())),
        }
    }
}

// ============================================================================
// Content File Wrapper
// ============================================================================

/// Top-level key that marks a versioned content file
const SCHEMA_VERSION_KEY: &str = "schema_version";

/// Wrapper for content files that includes version information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFile {
    /// Schema version of the content
    pub schema_version: u32,

    /// The site content
    pub content: SiteContent,
}

impl ContentFile {
    /// Wrap content at the current schema version
    pub fn new(content: SiteContent) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            content,
        }
    }

    /// Unwrap the content, rejecting files written by a newer schema
    pub fn into_content(self) -> SiteResult<SiteContent> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(SiteError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        Ok(self.content)
    }
}

// ============================================================================
// Save Functions
// ============================================================================

/// Serialize content to a string in the given format
pub fn save_content_to_string(content: &SiteContent, format: ContentFormat) -> SiteResult<String> {
    let file = ContentFile::new(content.clone());
    let text = match format {
        ContentFormat::Toml => toml::to_string_pretty(&file)?,
        ContentFormat::Json => serde_json::to_string_pretty(&file)?,
    };
    Ok(text)
}

/// Save content to a file, choosing the format from the extension
///
/// # Example
///
/// ```rust,ignore
/// use clinic_content::{Variant, save_content};
///
/// save_content(&Variant::Clinic.content(), "site/clinic.toml").unwrap();
/// ```
pub fn save_content(content: &SiteContent, path: impl AsRef<Path>) -> SiteResult<()> {
    let path = path.as_ref();
    let format = ContentFormat::from_path(path)?;

    let text = save_content_to_string(content, format).map_err(|e| SiteError::FileWrite {
        path: path.to_path_buf(),
        message: format!("Failed to serialize content: {}", e),
    })?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| SiteError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    std::fs::write(path, text).map_err(|e| SiteError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!("Wrote site content to {}", path.display());
    Ok(())
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load content from a file, choosing the format from the extension
pub fn load_content(path: impl AsRef<Path>) -> SiteResult<SiteContent> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SiteError::ContentNotFound(path.to_path_buf()));
    }
    let format = ContentFormat::from_path(path)?;

    let text = std::fs::read_to_string(path).map_err(|e| SiteError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    load_content_from_str(&text, format).map_err(|e| match e {
        SiteError::TomlParse(_) | SiteError::JsonSerialization(_) => SiteError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid content file: {}", e),
        },
        other => other,
    })
}

/// Parse content from a string.
///
/// A document with a top-level `schema_version` key is parsed as a
/// [`ContentFile`] envelope and its errors are reported as is. Anything else
/// is parsed as a bare [`SiteContent`].
pub fn load_content_from_str(text: &str, format: ContentFormat) -> SiteResult<SiteContent> {
    match format {
        ContentFormat::Toml => {
            let table: toml::Table = toml::from_str(text)?;
            if table.contains_key(SCHEMA_VERSION_KEY) {
                toml::from_str::<ContentFile>(text)?.into_content()
            } else {
                Ok(toml::from_str::<SiteContent>(text)?)
            }
        }
        ContentFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(text)?;
            if value.get(SCHEMA_VERSION_KEY).is_some() {
                serde_json::from_str::<ContentFile>(text)?.into_content()
            } else {
                Ok(serde_json::from_str::<SiteContent>(text)?)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ContentFormat::from_path(Path::new("site.toml")).unwrap(),
            ContentFormat::Toml
        );
        assert_eq!(
            ContentFormat::from_path(Path::new("a/b/site.JSON")).unwrap(),
            ContentFormat::Json
        );
        let err = ContentFormat::from_path(Path::new("site.yaml")).unwrap_err();
        assert!(matches!(err, SiteError::UnsupportedFormat(ref ext) if ext == "yaml"));
    }

    #[test]
    fn test_toml_file_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("clinic.toml");
        let content = Variant::Clinic.content();

        save_content(&content, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("schema_version = 1"));

        let loaded = load_content(&path).unwrap();
        assert_eq!(loaded, content);
    }

    #[test]
    fn test_json_file_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("aesthetics.json");
        let content = Variant::Aesthetics.content();

        save_content(&content, &path).unwrap();
        assert_eq!(load_content(&path).unwrap(), content);
    }

    #[test]
    fn test_bare_content_is_accepted() {
        let content = Variant::Clinic.content();
        let bare = serde_json::to_string(&content).unwrap();
        let loaded = load_content_from_str(&bare, ContentFormat::Json).unwrap();
        assert_eq!(loaded.brand.name, "Shree Sai Clinic");
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let mut file = ContentFile::new(Variant::Clinic.content());
        file.schema_version = SCHEMA_VERSION + 1;
        let json = serde_json::to_string(&file).unwrap();

        let err = load_content_from_str(&json, ContentFormat::Json).unwrap_err();
        assert!(matches!(err, SiteError::SchemaVersionMismatch { found, .. } if found == SCHEMA_VERSION + 1));
    }

    #[test]
    fn test_missing_file() {
        let err = load_content("/definitely/not/here.toml").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "brand = 3").unwrap();

        let err = load_content(&path).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_theme_defaults_when_missing() {
        let mut value = serde_json::to_value(Variant::Aesthetics.content()).unwrap();
        value.as_object_mut().unwrap().remove("theme");
        value.as_object_mut().unwrap().remove("social");

        let loaded = load_content_from_str(&value.to_string(), ContentFormat::Json).unwrap();
        assert_eq!(loaded.theme, crate::Theme::default());
        assert!(loaded.social.is_empty());
    }

    #[test]
    fn test_envelope_reports_nested_json_error() {
        let json = save_content_to_string(&Variant::Clinic.content(), ContentFormat::Json).unwrap();
        let broken = json.replacen("\"rating\": 5", "\"rating\": \"five\"", 1);
        assert_ne!(broken, json);

        let err = load_content_from_str(&broken, ContentFormat::Json).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("five"), "unexpected error: {message}");
        assert!(!message.contains("missing field `brand`"), "unexpected error: {message}");
    }

    #[test]
    fn test_envelope_reports_nested_toml_error() {
        let text = save_content_to_string(&Variant::Clinic.content(), ContentFormat::Toml).unwrap();
        let broken = text.replacen("rating = 5", "rating = \"five\"", 1);
        assert_ne!(broken, text);

        let err = load_content_from_str(&broken, ContentFormat::Toml).unwrap_err();
        assert!(matches!(err, SiteError::TomlParse(_)));
        assert!(!err.to_string().contains("missing field `brand`"));
    }

    #[test]
    fn test_bare_content_error_is_reported() {
        let mut value = serde_json::to_value(Variant::Clinic.content()).unwrap();
        value["brand"]["name"] = serde_json::json!(42);

        let err = load_content_from_str(&value.to_string(), ContentFormat::Json).unwrap_err();
        assert!(err.to_string().contains("42"));
    }
}
