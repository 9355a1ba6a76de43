//! Course list projection: search, favorites-only, favorites first

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::{Course, SortOrder};

/// Parameters of the sidebar course list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub search: String,
    pub favorites_only: bool,
    pub order: SortOrder,
}

/// Filter and sort `courses` for display.
///
/// Favorites always come first; inside each group names are compared
/// case-insensitively (raw name breaks ties) in the requested order.
pub fn project<'a>(
    courses: &'a [Course],
    favorites: &HashSet<String>,
    filter: &CourseFilter,
) -> Vec<&'a Course> {
    let needle = filter.search.to_lowercase();
    let mut visible: Vec<&Course> = courses
        .iter()
        .filter(|c| c.subject_name.to_lowercase().contains(&needle))
        .filter(|c| !filter.favorites_only || favorites.contains(&c.id))
        .collect();

    visible.sort_by(|a, b| {
        let fav_a = favorites.contains(&a.id);
        let fav_b = favorites.contains(&b.id);
        fav_b
            .cmp(&fav_a)
            .then_with(|| match filter.order {
                SortOrder::Ascending => compare_names(a, b),
                SortOrder::Descending => compare_names(b, a),
            })
    });
    visible
}

fn compare_names(a: &Course, b: &Course) -> Ordering {
    a.subject_name
        .to_lowercase()
        .cmp(&b.subject_name.to_lowercase())
        .then_with(|| a.subject_name.cmp(&b.subject_name))
}
