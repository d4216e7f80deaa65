//! Filter predicates.
//!
//! A record is retained when every active check passes. Checks whose filter
//! value is blank or unset are skipped, so an empty [`Query`] keeps the whole
//! collection in its original order.

use crate::query::Query;
use crate::record::Skill;
use crate::traits::Searchable;

/// Case-insensitive substring test. `needle` must already be lower-cased.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn any_skill_contains(skills: &[Skill], needle: &str) -> bool {
    skills.iter().any(|skill| contains_ci(skill.name(), needle))
}

fn lowered(filter: &str) -> Option<String> {
    (!filter.is_empty()).then(|| filter.to_lowercase())
}

/// Filter values lower-cased once per query instead of once per record.
struct Needles {
    search: Option<String>,
    skills: Option<String>,
    location: Option<String>,
}

impl Needles {
    fn new(query: &Query) -> Self {
        Needles {
            search: lowered(query.search_text()),
            skills: lowered(query.skills_filter()),
            location: lowered(query.location_filter()),
        }
    }

    fn matches<T: Searchable>(&self, item: &T, query: &Query) -> bool {
        if let Some(needle) = &self.search {
            let hit = contains_ci(&item.display_name(), needle)
                || contains_ci(item.title().unwrap_or(""), needle)
                || contains_ci(item.bio().unwrap_or(""), needle)
                || any_skill_contains(item.skills(), needle);
            if !hit {
                return false;
            }
        }

        if let Some(needle) = &self.skills {
            if !any_skill_contains(item.skills(), needle) {
                return false;
            }
        }

        if let Some(needle) = &self.location {
            match item.location() {
                Some(location) if contains_ci(location, needle) => {}
                _ => return false,
            }
        }

        if let Some(min) = query.get_min_rate() {
            if !item.hourly_rate().is_some_and(|rate| rate >= min) {
                return false;
            }
        }

        if let Some(max) = query.get_max_rate() {
            if !item.hourly_rate().is_some_and(|rate| rate <= max) {
                return false;
            }
        }

        if let Some(wanted) = query.get_availability() {
            if item.availability() != Some(wanted) {
                return false;
            }
        }

        true
    }
}

/// Tests if a single item passes every active check of `query`.
pub fn matches<T: Searchable>(item: &T, query: &Query) -> bool {
    Needles::new(query).matches(item, query)
}

/// Returns references to the retained items, in input order.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &Query) -> Vec<&'a T> {
    let needles = Needles::new(query);
    items
        .iter()
        .filter(|item| needles.matches(*item, query))
        .collect()
}
