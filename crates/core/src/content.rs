//! Typed value objects for the structured fields editors fill in.
//!
//! These replace free-form JSON payloads: menu links, social links, business
//! hours and the portfolio media type all have a fixed shape and are checked
//! when a request is deserialized and validated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_href;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// One entry in the site's top navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NavLink {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(custom(function = "validate_href"))]
    pub href: String,
}

// ---------------------------------------------------------------------------
// Social links and business hours
// ---------------------------------------------------------------------------

/// Platform name (`linkedin`, `instagram`, ...) to link target.
pub type SocialLinks = BTreeMap<String, String>;

/// Day of the week used as a business-hours key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Opening hours per day, e.g. `monday -> "9:00 AM - 6:00 PM"`, `sunday -> "Closed"`.
///
/// Keys serialize lowercase and iterate Monday first.
pub type BusinessHours = BTreeMap<Weekday, String>;

// ---------------------------------------------------------------------------
// Portfolio media type
// ---------------------------------------------------------------------------

pub const MEDIA_TYPE_IMAGE: &str = "image";
pub const MEDIA_TYPE_VIDEO: &str = "video";
pub const MEDIA_TYPE_GIF: &str = "gif";

/// All valid portfolio media types.
pub const VALID_MEDIA_TYPES: &[&str] = &[MEDIA_TYPE_IMAGE, MEDIA_TYPE_VIDEO, MEDIA_TYPE_GIF];

// ---------------------------------------------------------------------------
// Testimonial rating
// ---------------------------------------------------------------------------

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;
pub const DEFAULT_RATING: i16 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_hours_iterate_from_monday() {
        let hours: BusinessHours = serde_json::from_value(serde_json::json!({
            "sunday": "Closed",
            "monday": "9:00 AM - 6:00 PM",
            "saturday": "10:00 AM - 4:00 PM",
        }))
        .unwrap();

        let days: Vec<Weekday> = hours.keys().copied().collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Saturday, Weekday::Sunday]);
    }

    #[test]
    fn business_hours_reject_unknown_day() {
        let result: Result<BusinessHours, _> =
            serde_json::from_value(serde_json::json!({"funday": "all day"}));
        assert!(result.is_err());
    }

    #[test]
    fn nav_link_validates_href() {
        let ok = NavLink {
            name: "Portfolio".into(),
            href: "/portfolio".into(),
        };
        assert!(ok.validate().is_ok());

        let bad = NavLink {
            name: "Portfolio".into(),
            href: "javascript:alert(1)".into(),
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn nav_link_requires_name() {
        let link = NavLink {
            name: String::new(),
            href: "/".into(),
        };
        assert!(link.validate().is_err());
    }
}
