//! Property-based tests for the listing engine using proptest.

use proptest::prelude::*;
use talent_seeker::{paginate, Query, Record, SearchSession, Skill, SortKey, PAGE_SIZE};

// ============================================================================
// Test helpers
// ============================================================================

fn skill_strategy() -> impl Strategy<Value = Skill> {
    prop_oneof![
        "[a-z]{2,6}".prop_map(Skill::Name),
        prop::option::of("[a-z]{2,6}").prop_map(|name| Skill::Object { name }),
    ]
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        (
            prop::option::of("[A-Za-z]{1,8}"),
            prop::option::of("[A-Za-z]{1,8}"),
            prop::option::of("[a-z ]{0,16}"),
            prop::collection::vec(skill_strategy(), 0..4),
        ),
        (
            prop::option::of("[a-z]{3,8}"),
            prop::option::of(0u32..200),
            prop::option::of(prop::sample::select(vec!["available", "busy", "part-time"])),
            prop::option::of(0u8..=5),
            prop::option::of(0i64..4_000_000_000),
            any::<bool>(),
        ),
    )
        .prop_map(
            |((first, last, title, skills), (location, rate, availability, rating, created, featured))| {
                let mut record = Record::new(0);
                record.first_name = first;
                record.last_name = last;
                record.title = title;
                record.skills = skills;
                record.location = location;
                record.hourly_rate = rate.map(f64::from);
                record.availability = availability.map(str::to_string);
                record.rating = rating.map(f64::from);
                record.created_at = created.map(|secs| {
                    time::OffsetDateTime::from_unix_timestamp(secs)
                        .map(|dt| dt.date().to_string())
                        .unwrap_or_default()
                });
                record.is_featured = featured;
                record
            },
        )
}

/// Records with their position as id, so order can be checked by id.
fn records_strategy(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..max).prop_map(|mut records| {
        for (i, record) in records.iter_mut().enumerate() {
            record.id = (i as i64).into();
        }
        records
    })
}

fn sort_key_strategy() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn query_strategy() -> impl Strategy<Value = Query> {
    (
        prop::option::of("[a-z]{1,2}"),
        prop::option::of("[a-z]{1,2}"),
        prop::option::of(0u32..200),
        prop::option::of(0u32..200),
        sort_key_strategy(),
    )
        .prop_map(|(search, skills, min, max, sort)| {
            Query::new()
                .search(search.unwrap_or_default())
                .skills(skills.unwrap_or_default())
                .min_rate(min.map(f64::from))
                .max_rate(max.map(f64::from))
                .sort(sort)
        })
}

fn ids(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.id.to_string()).collect()
}

fn position(id: &talent_seeker::RecordId) -> i64 {
    match id {
        talent_seeker::RecordId::Number(n) => *n,
        talent_seeker::RecordId::Text(_) => unreachable!("ids are positions"),
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Running the same query twice gives identical output and leaves the
    /// collection untouched.
    #[test]
    fn execute_is_idempotent(
        records in records_strategy(40),
        query in query_strategy(),
        page in 1usize..5,
    ) {
        let before = records.clone();
        let query = query.page(page);

        let first = query.execute(&records);
        let second = query.execute(&records);

        prop_assert_eq!(ids(first.filtered()), ids(second.filtered()));
        prop_assert_eq!(ids(first.page()), ids(second.page()));
        prop_assert_eq!(first.window(), second.window());
        prop_assert_eq!(&records, &before);
    }

    /// Adding a constraint never adds records.
    #[test]
    fn filter_is_monotonic(
        records in records_strategy(40),
        query in query_strategy(),
        location in "[a-z]{1,2}",
        min in 0u32..200,
    ) {
        let wider = query.filter(&records);

        let narrower = query.clone().location(location).filter(&records);
        prop_assert!(narrower.iter().all(|r| wider.iter().any(|w| std::ptr::eq(*w, *r))));

        let narrower = query.clone().min_rate(f64::from(min)).filter(&records);
        prop_assert!(narrower.len() <= wider.len());

        let narrower = query.availability("busy").filter(&records);
        prop_assert!(narrower.iter().all(|r| wider.iter().any(|w| std::ptr::eq(*w, *r))));
    }

    /// Any mutation other than a page move lands on page 1.
    #[test]
    fn mutations_reset_page(
        records in records_strategy(60),
        page in 1usize..6,
        text in "[a-z]{0,2}",
        sort in sort_key_strategy(),
        which in 0usize..7,
    ) {
        let mut session = SearchSession::with_records(records);
        session.set_page(page);

        match which {
            0 => session.set_search_text(text),
            1 => session.set_skills_filter(text),
            2 => session.set_location_filter(text),
            3 => session.set_min_rate_input(&text),
            4 => session.set_max_rate(None),
            5 => session.set_availability(text),
            _ => session.set_sort(sort),
        }

        prop_assert_eq!(session.query().current_page(), 1);
    }

    /// Concatenating every page rebuilds the sorted set exactly.
    #[test]
    fn pages_cover_sorted_set(
        records in records_strategy(80),
        sort in sort_key_strategy(),
    ) {
        let sorted = Query::new().sort(sort).sorted(&records);
        let (_, window) = paginate(&sorted, 1, PAGE_SIZE);

        let mut rebuilt = Vec::new();
        for page in 1..=window.total_pages {
            let (items, _) = paginate(&sorted, page, PAGE_SIZE);
            if page < window.total_pages {
                prop_assert_eq!(items.len(), PAGE_SIZE);
            }
            rebuilt.extend_from_slice(items);
        }

        prop_assert_eq!(ids(&rebuilt), ids(&sorted));
    }

    /// Equal ratings keep their filtered order.
    #[test]
    fn rating_sort_is_stable(records in records_strategy(50)) {
        let sorted = Query::new().sort(SortKey::Rating).sorted(&records);

        for pair in sorted.windows(2) {
            let a = pair[0].rating.unwrap_or(0.0);
            let b = pair[1].rating.unwrap_or(0.0);
            prop_assert!(a >= b, "rating order violated");
            if a == b {
                prop_assert!(position(&pair[0].id) < position(&pair[1].id), "stable sort violated");
            }
        }
    }

    /// Every sort is a permutation of the filtered set.
    #[test]
    fn sorting_keeps_membership(
        records in records_strategy(50),
        query in query_strategy(),
    ) {
        let mut filtered = ids(&query.filter(&records));
        let mut sorted = ids(&query.sorted(&records));
        filtered.sort();
        sorted.sort();
        prop_assert_eq!(filtered, sorted);
    }

    /// The featured sort leaves filtered order untouched.
    #[test]
    fn featured_sort_preserves_order(
        records in records_strategy(50),
        query in query_strategy(),
    ) {
        let query = query.sort(SortKey::Featured);
        prop_assert_eq!(ids(&query.sorted(&records)), ids(&query.filter(&records)));
    }
}

// ============================================================================
// Boundary cases
// ============================================================================

#[test]
fn empty_collection_has_one_empty_page() {
    let records: Vec<Record> = Vec::new();
    let view = Query::new().page(3).execute(&records);

    assert!(view.filtered().is_empty());
    assert!(view.page().is_empty());
    assert_eq!(view.total_pages(), 1);
    assert_eq!(view.current_page(), 1);
}
