//! Featured carousel selection.

use crate::traits::Searchable;

/// Featured items that have a full name.
///
/// Featured entries missing a first or last name are dropped rather than
/// shown half-filled. Independent of the main query and never paginated.
pub fn select_featured<T: Searchable>(items: &[T]) -> Vec<&T> {
    items
        .iter()
        .filter(|item| item.is_featured() && item.has_full_name())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn keeps_featured_with_full_names() {
        let mut nameless = Record::new(3).featured();
        nameless.first_name = Some("Cy".to_string());

        let records = vec![
            Record::new(1).with_name("Ann", "Lee").featured(),
            Record::new(2).with_name("Bob", "Ray"),
            nameless,
            Record::new(4).with_name("Dee", "Fox").featured(),
        ];

        let ids: Vec<String> = select_featured(&records)
            .iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn empty_input() {
        let records: Vec<Record> = Vec::new();
        assert!(select_featured(&records).is_empty());
    }
}
