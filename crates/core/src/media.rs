//! Media references and the upload-over-URL resolution policy.
//!
//! Every media-bearing field (logos, hero videos, photos, portfolio media,
//! gallery images) is a single [`MediaRef`]. An uploaded file always takes
//! priority over an external URL; the tagged representation makes the
//! "both present" state unrepresentable once a value has been built.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::slug::slugify;

/// URL prefix under which uploaded files are served.
pub const MEDIA_URL_PREFIX: &str = "/media";

/// Folders an upload may be stored under.
pub const UPLOAD_FOLDERS: &[&str] = &["navigation", "hero", "testimonials", "team", "portfolio", "gallery"];

/// Accepted upload extensions (lowercase, no dot).
pub const UPLOAD_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "svg", "mp4", "webm", "mov",
];

/// One logical media reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaRef {
    /// No media.
    #[default]
    None,
    /// A file stored under the media root; `path` is relative to it.
    Uploaded { path: String },
    /// An externally hosted (or site-relative) URL, returned verbatim.
    External { url: String },
}

impl MediaRef {
    /// Build a reference from the legacy pair of optional upload location and
    /// fallback URL. The upload wins when both are present; empty or
    /// whitespace-only strings count as absent.
    pub fn from_parts(upload: Option<&str>, url: Option<&str>) -> Self {
        fn present(s: Option<&str>) -> Option<&str> {
            s.map(str::trim).filter(|s| !s.is_empty())
        }

        match (present(upload), present(url)) {
            (Some(path), _) => MediaRef::Uploaded {
                path: path.to_string(),
            },
            (None, Some(url)) => MediaRef::External {
                url: url.to_string(),
            },
            (None, None) => MediaRef::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, MediaRef::None)
    }
}

/// Turns [`MediaRef`]s into absolute URLs for readers.
///
/// Pure: the only input besides the reference is the public base address the
/// server is reachable at.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    base_url: String,
}

impl MediaResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a reference to the single URL a reader should use.
    ///
    /// Returns `None` when there is no media.
    pub fn resolve(&self, media: &MediaRef) -> Option<String> {
        match media {
            MediaRef::None => None,
            MediaRef::Uploaded { path } => Some(format!(
                "{}{MEDIA_URL_PREFIX}/{}",
                self.base_url,
                path.trim_start_matches('/')
            )),
            MediaRef::External { url } if url.is_empty() => None,
            MediaRef::External { url } => Some(url.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// Upload naming
// ---------------------------------------------------------------------------

/// Compute the relative storage path for an uploaded file.
///
/// `unique` disambiguates uploads with the same original name (the API passes
/// a UUID). The original file stem is slugified so stored names are always
/// URL-safe.
pub fn upload_path(folder: &str, original_name: &str, unique: &str) -> Result<String, CoreError> {
    if !UPLOAD_FOLDERS.contains(&folder) {
        return Err(CoreError::Validation(format!(
            "Unknown upload folder '{folder}'. Must be one of: {}",
            UPLOAD_FOLDERS.join(", ")
        )));
    }

    let (stem, ext) = match original_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, ext.to_lowercase()),
        None => (original_name, String::new()),
    };

    if !UPLOAD_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "Unsupported file type '.{ext}'. Supported: {}",
            UPLOAD_EXTENSIONS.join(", ")
        )));
    }

    let stem = slugify(stem);
    let name = if stem.is_empty() {
        format!("{unique}.{ext}")
    } else {
        format!("{unique}-{stem}.{ext}")
    };

    Ok(format!("{folder}/{name}"))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn resolver() -> MediaResolver {
        MediaResolver::new("https://api.pixelbox.studio/")
    }

    #[test]
    fn upload_wins_over_url() {
        let media = MediaRef::from_parts(Some("portfolio/reel.mp4"), Some("x"));
        assert_eq!(
            resolver().resolve(&media).as_deref(),
            Some("https://api.pixelbox.studio/media/portfolio/reel.mp4")
        );
    }

    #[test]
    fn url_used_verbatim_without_upload() {
        let media = MediaRef::from_parts(None, Some("x"));
        assert_eq!(resolver().resolve(&media).as_deref(), Some("x"));
    }

    #[test]
    fn empty_url_without_upload_is_no_media() {
        let media = MediaRef::from_parts(None, Some(""));
        assert_eq!(media, MediaRef::None);
        assert_eq!(resolver().resolve(&media), None);
    }

    #[test]
    fn blank_upload_falls_back_to_url() {
        let media = MediaRef::from_parts(Some("  "), Some("/hero.jpg"));
        assert_matches!(media, MediaRef::External { ref url } if url == "/hero.jpg");
    }

    #[test]
    fn empty_external_resolves_to_none() {
        let media = MediaRef::External { url: String::new() };
        assert_eq!(resolver().resolve(&media), None);
    }

    #[test]
    fn resolver_joins_without_double_slash() {
        let media = MediaRef::Uploaded {
            path: "/team/a.png".into(),
        };
        assert_eq!(
            MediaResolver::new("http://localhost:8000")
                .resolve(&media)
                .as_deref(),
            Some("http://localhost:8000/media/team/a.png")
        );
    }

    #[test]
    fn media_ref_wire_format_is_tagged() {
        let json = serde_json::to_value(MediaRef::External {
            url: "https://cdn.example.com/a.jpg".into(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "external", "url": "https://cdn.example.com/a.jpg"})
        );

        let none: MediaRef = serde_json::from_value(serde_json::json!({"kind": "none"})).unwrap();
        assert_eq!(none, MediaRef::None);
    }

    #[test]
    fn upload_path_slugifies_stem() {
        let path = upload_path("team", "Maya Patel Headshot.JPG", "abc123").unwrap();
        assert_eq!(path, "team/abc123-maya-patel-headshot.jpg");
    }

    #[test]
    fn upload_path_rejects_unknown_folder() {
        assert_matches!(
            upload_path("etc", "a.png", "u"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn upload_path_rejects_unsupported_extension() {
        assert_matches!(
            upload_path("team", "payload.exe", "u"),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            upload_path("team", "noext", "u"),
            Err(CoreError::Validation(_))
        );
    }
}
