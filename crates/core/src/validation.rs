//! Field validators used by `#[validate(custom(...))]` on request DTOs.
//!
//! Each function follows the `validator` crate's custom-function contract:
//! it receives a reference to the field value and returns a
//! [`ValidationError`] whose code names the rule that failed.

use std::borrow::Cow;

use validator::{Validate, ValidateUrl, ValidationError};

use crate::content::{NavLink, SocialLinks, VALID_MEDIA_TYPES};
use crate::media::MediaRef;

fn failure(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn is_absolute_web_url(value: &str) -> bool {
    (value.starts_with("http://") || value.starts_with("https://")) && value.validate_url()
}

/// A link target: absolute http(s) URL, `mailto:`/`tel:` link, site-relative
/// path (`/about`) or in-page fragment (`#contact`).
pub fn validate_href(href: &str) -> Result<(), ValidationError> {
    let ok = href.starts_with('/')
        || href.starts_with('#')
        || href.strip_prefix("mailto:").is_some_and(|rest| !rest.is_empty())
        || href.strip_prefix("tel:").is_some_and(|rest| !rest.is_empty())
        || is_absolute_web_url(href);

    if ok {
        Ok(())
    } else {
        Err(failure(
            "href",
            format!("'{href}' is not a valid link (expected http(s) URL, /path, #fragment, mailto: or tel:)"),
        ))
    }
}

/// An absolute http(s) URL or a site-relative path. Empty means "not set".
pub fn validate_optional_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() || url.starts_with('/') || is_absolute_web_url(url) {
        Ok(())
    } else {
        Err(failure("url", format!("'{url}' is not a valid URL")))
    }
}

/// An absolute http(s) URL or a site-relative path; must be present.
pub fn validate_required_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(failure("required", "URL must not be empty"));
    }
    validate_optional_url(url)
}

pub fn validate_media(media: &MediaRef) -> Result<(), ValidationError> {
    match media {
        MediaRef::None => Ok(()),
        MediaRef::External { url } => {
            if url.is_empty() {
                return Err(failure(
                    "media_url",
                    "External media needs a URL; use kind 'none' for no media",
                ));
            }
            validate_optional_url(url).map_err(|_| {
                failure(
                    "media_url",
                    format!("'{url}' is not an http(s) URL or site-relative path"),
                )
            })
        }
        MediaRef::Uploaded { path } => {
            let escapes = path.split('/').any(|segment| segment == "..");
            if path.is_empty() || path.starts_with('/') || path.contains('\\') || escapes {
                Err(failure(
                    "media_path",
                    format!("'{path}' is not a valid upload location"),
                ))
            } else {
                Ok(())
            }
        }
    }
}

pub fn validate_nav_links(links: &[NavLink]) -> Result<(), ValidationError> {
    for (index, link) in links.iter().enumerate() {
        if let Err(errors) = link.validate() {
            return Err(failure(
                "menu_link",
                format!("menu link #{index} is invalid: {errors}"),
            ));
        }
    }
    Ok(())
}

pub fn validate_social_links(links: &SocialLinks) -> Result<(), ValidationError> {
    for (platform, href) in links {
        if platform.trim().is_empty() {
            return Err(failure("social_link", "social link platform must not be empty"));
        }
        validate_href(href).map_err(|_| {
            failure(
                "social_link",
                format!("social link for '{platform}' is not a valid link: '{href}'"),
            )
        })?;
    }
    Ok(())
}

pub fn validate_media_type(media_type: &str) -> Result<(), ValidationError> {
    if VALID_MEDIA_TYPES.contains(&media_type) {
        Ok(())
    } else {
        Err(failure(
            "media_type",
            format!(
                "Invalid media type '{media_type}'. Must be one of: {}",
                VALID_MEDIA_TYPES.join(", ")
            ),
        ))
    }
}

/// Tags, features and company values: no blank entries.
pub fn validate_string_list(items: &[String]) -> Result<(), ValidationError> {
    if items.iter().any(|item| item.trim().is_empty()) {
        Err(failure("blank_item", "list entries must not be blank"))
    } else {
        Ok(())
    }
}
