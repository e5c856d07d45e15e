//! Portfolio project slug generation and collision-free assignment.
//!
//! A slug is derived from the project title once, at first persistence, and
//! never regenerated afterwards so that external links stay stable. The
//! repository layer supplies the set of slugs already reserved; this module
//! only decides which candidate wins.

/// Base used when a title contains nothing that survives normalization
/// (for example `"!!!"`), so the counter scheme never produces `-1`, `-2`.
pub const FALLBACK_BASE: &str = "project";

/// Slugs that collide with static routes under `/portfolio`.
pub const ROUTE_SEGMENTS: &[&str] = &["featured"];

/// Maximum slug length, matching the `portfolio_projects.slug` column.
pub const MAX_SLUG_LEN: usize = 200;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a title into a URL-safe slug.
///
/// Lowercases, folds common Latin diacritics to ASCII, turns every run of
/// other characters into a single hyphen and trims hyphens from both ends.
/// May return an empty string; see [`base_slug`].
pub fn slugify(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        let folded = if c.is_ascii_alphanumeric() {
            Some(Folded::Char(c))
        } else {
            fold_latin(c).map(Folded::Str)
        };

        match folded {
            Some(piece) => {
                if pending_hyphen && !result.is_empty() {
                    result.push('-');
                }
                pending_hyphen = false;
                match piece {
                    Folded::Char(ch) => result.push(ch),
                    Folded::Str(s) => result.push_str(s),
                }
            }
            None => pending_hyphen = true,
        }
    }

    truncate_at_boundary(result, MAX_SLUG_LEN)
}

/// The base slug for a title: [`slugify`], or [`FALLBACK_BASE`] when the title
/// normalizes to nothing.
pub fn base_slug(title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        slug
    }
}

enum Folded {
    Char(char),
    Str(&'static str),
}

fn fold_latin(c: char) -> Option<&'static str> {
    let s = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' => "c",
        'ď' | 'đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
        'ł' => "l",
        'ñ' | 'ń' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => "o",
        'œ' => "oe",
        'ř' => "r",
        'ß' => "ss",
        'ś' | 'š' => "s",
        'ť' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(s)
}

/// Cut an ASCII slug to `max` bytes without leaving a trailing hyphen.
fn truncate_at_boundary(mut slug: String, max: usize) -> String {
    if slug.len() > max {
        slug.truncate(max);
        while slug.ends_with('-') {
            slug.pop();
        }
    }
    slug
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

/// Return the first candidate from `base`, `base-1`, `base-2`, ... for which
/// `is_taken` is false.
pub fn next_available(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(base) {
        return base.to_string();
    }

    let mut counter: u64 = 1;
    loop {
        let candidate = format!("{base}-{counter}");
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Decide the slug a project should carry.
///
/// An already-assigned slug is returned untouched regardless of the current
/// title. Otherwise a fresh slug is derived from `title`, skipping
/// [`ROUTE_SEGMENTS`]. `is_taken` must answer for every record except the one
/// being evaluated.
pub fn assign_slug(existing: Option<&str>, title: &str, is_taken: impl Fn(&str) -> bool) -> String {
    match existing {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => next_available(&base_slug(title), |candidate| {
            ROUTE_SEGMENTS.contains(&candidate) || is_taken(candidate)
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn taken(slugs: &[&str]) -> HashSet<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    // -- slugify -------------------------------------------------------------

    #[test]
    fn slugify_strips_trailing_punctuation() {
        assert_eq!(slugify("Brand Identity Design!!"), "brand-identity-design");
    }

    #[test]
    fn slugify_collapses_runs() {
        assert_eq!(slugify("3D   --  Product / Viz"), "3d-product-viz");
    }

    #[test]
    fn slugify_trims_edges() {
        assert_eq!(slugify("  --Hello--  "), "hello");
    }

    #[test]
    fn slugify_folds_diacritics() {
        assert_eq!(slugify("Café Crème Brûlée"), "cafe-creme-brulee");
        assert_eq!(slugify("Straße"), "strasse");
    }

    #[test]
    fn slugify_drops_unfoldable_symbols() {
        assert_eq!(slugify("Motion ★ Graphics"), "motion-graphics");
    }

    #[test]
    fn slugify_punctuation_only_is_empty() {
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(base_slug("!!! ???"), FALLBACK_BASE);
    }

    #[test]
    fn slugify_caps_length_without_trailing_hyphen() {
        let title = format!("{} tail", "a".repeat(MAX_SLUG_LEN - 1));
        let slug = slugify(&title);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
    }

    // -- next_available / assign_slug ---------------------------------------

    #[test]
    fn unused_base_is_assigned_as_is() {
        let used = taken(&[]);
        assert_eq!(
            assign_slug(None, "Brand Identity Design!!", |s| used.contains(s)),
            "brand-identity-design"
        );
    }

    #[test]
    fn collision_gets_first_suffix() {
        let used = taken(&["brand-identity-design"]);
        assert_eq!(
            assign_slug(None, "Brand Identity Design", |s| used.contains(s)),
            "brand-identity-design-1"
        );
    }

    #[test]
    fn smallest_unused_suffix_wins() {
        let used = taken(&["web", "web-1", "web-3"]);
        assert_eq!(next_available("web", |s| used.contains(s)), "web-2");
    }

    #[test]
    fn retired_base_is_skipped() {
        // "a" was deleted but stays reserved, "a-1" is live.
        let used = taken(&["a", "a-1"]);
        assert_eq!(next_available("a", |s| used.contains(s)), "a-2");
    }

    #[test]
    fn existing_slug_is_never_changed() {
        let used = taken(&["old-title"]);
        let slug = assign_slug(Some("old-title"), "A Completely New Title", |s| {
            used.contains(s)
        });
        assert_eq!(slug, "old-title");
    }

    #[test]
    fn empty_existing_slug_is_treated_as_unset() {
        let used = taken(&[]);
        assert_eq!(assign_slug(Some(""), "Reel", |s| used.contains(s)), "reel");
    }

    #[test]
    fn route_segment_is_never_assigned() {
        let used = taken(&[]);
        assert_eq!(assign_slug(None, "Featured", |s| used.contains(s)), "featured-1");
        assert_eq!(
            assign_slug(None, "Featured Work", |s| used.contains(s)),
            "featured-work"
        );
    }

    #[test]
    fn empty_title_uses_fallback_base() {
        let used = taken(&["project"]);
        assert_eq!(assign_slug(None, "???", |s| used.contains(s)), "project-1");
    }
}
