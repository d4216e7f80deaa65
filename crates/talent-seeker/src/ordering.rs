//! Sort keys and comparators.
//!
//! Every ordering is applied with a stable sort, so records that compare
//! equal keep their filtered order. [`SortKey::Featured`] is a named no-op:
//! it keeps the upstream order, which is where curated entries come first.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekerError};
use crate::traits::Searchable;
use crate::value::Timestamp;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

/// How the filtered records are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep the upstream order.
    #[default]
    Featured,
    /// Highest rating first.
    Rating,
    /// Cheapest hourly rate first.
    RateLow,
    /// Most expensive hourly rate first.
    RateHigh,
    /// Most recently created first.
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::Rating,
        SortKey::RateLow,
        SortKey::RateHigh,
        SortKey::Newest,
    ];

    /// Returns the wire name of this key.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Rating => "rating",
            SortKey::RateLow => "rate_low",
            SortKey::RateHigh => "rate_high",
            SortKey::Newest => "newest",
        }
    }

    /// Human-readable label for sort pickers.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::Rating => "Highest Rated",
            SortKey::RateLow => "Rate: Low to High",
            SortKey::RateHigh => "Rate: High to Low",
            SortKey::Newest => "Newest",
        }
    }

    /// Compares two items under this key.
    ///
    /// Returns `None` for [`SortKey::Featured`], which has no comparator.
    pub fn compare<T: Searchable>(self, a: &T, b: &T) -> Option<Ordering> {
        match self {
            SortKey::Featured => None,
            SortKey::Rating => Some(compare_numbers(a.rating(), b.rating(), Dir::Desc)),
            SortKey::RateLow => Some(compare_numbers(
                a.hourly_rate(),
                b.hourly_rate(),
                Dir::Asc,
            )),
            SortKey::RateHigh => Some(compare_numbers(
                a.hourly_rate(),
                b.hourly_rate(),
                Dir::Desc,
            )),
            SortKey::Newest => Some(compare_timestamps(a.created_at(), b.created_at(), Dir::Desc)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SeekerError::UnknownSortKey(s.to_string()))
    }
}

/// Compares optional numbers, reading absent as 0.
pub fn compare_numbers(a: Option<f64>, b: Option<f64>, dir: Dir) -> Ordering {
    let a = a.unwrap_or(0.0);
    let b = b.unwrap_or(0.0);
    dir.apply(a.total_cmp(&b))
}

/// Compares optional timestamps, reading absent as the earliest instant.
pub fn compare_timestamps(a: Option<Timestamp>, b: Option<Timestamp>, dir: Dir) -> Ordering {
    // None < Some(_) in Option's ordering
    dir.apply(a.cmp(&b))
}

/// Sorts filtered items in place. Stable for every key.
pub fn sort<T: Searchable>(items: &mut [&T], key: SortKey) {
    match key {
        SortKey::Featured => {}
        SortKey::Newest => {
            // createdAt is text on records; parse once per item, not per comparison
            let mut keyed: Vec<(Option<Timestamp>, &T)> =
                items.iter().map(|item| (item.created_at(), *item)).collect();
            keyed.sort_by(|(a, _), (b, _)| compare_timestamps(*a, *b, Dir::Desc));
            for (slot, (_, item)) in items.iter_mut().zip(keyed) {
                *slot = item;
            }
        }
        _ => items.sort_by(|a, b| key.compare(*a, *b).unwrap_or(Ordering::Equal)),
    }
}
