//! "Related articles" for the detail view.
use crate::models::{BlogPost, Category};

/// Upper bound on related articles. Part of the selection rule, not a layout knob.
pub const RELATED_LIMIT: usize = 3;

/// Same-category posts from `pool`, minus the current one, first-match order, at most
/// [`RELATED_LIMIT`].
pub fn select_related<'a>(
    current_slug: &str,
    current_category: Category,
    pool: &'a [BlogPost],
) -> Vec<&'a BlogPost> {
    pool.iter()
        .filter(|p| p.slug != current_slug)
        .filter(|p| p.category == current_category)
        .take(RELATED_LIMIT)
        .collect()
}
