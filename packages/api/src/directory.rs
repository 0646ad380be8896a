//! # Contractor directory query
//!
//! The API serves the whole contractor collection; searching happens on the
//! client. A [`DirectoryQuery`] holds the three inputs of the search form and
//! [`DirectoryQuery::apply`] narrows and orders a fetched list:
//!
//! 1. **Text**: kept when the needle is a case-insensitive substring of the
//!    display name, the description *or* the category (each checked on its own).
//! 2. **Category**: exact match, only when a category is selected.
//! 3. **Sort**: see [`SortKey`]. The sort is stable, so ties keep server order.

use std::cmp::Ordering;

use crate::models::Contractor;

/// Ordering selected in the search form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the order the server returned.
    #[default]
    ServerOrder,
    /// Highest rating first; missing ratings count as zero.
    Rating,
    /// Most experience first; missing values count as zero.
    Experience,
    /// Display name, A → Я.
    Name,
}

impl SortKey {
    /// Map the `<select>` value; anything unrecognised keeps server order.
    pub fn from_param(value: &str) -> Self {
        match value {
            "rating" => SortKey::Rating,
            "experience" => SortKey::Experience,
            "name" => SortKey::Name,
            _ => SortKey::ServerOrder,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryQuery {
    /// Lowercased, trimmed search text. Empty matches everything.
    pub text: String,
    /// Exact category filter. Empty matches everything.
    pub category: String,
    pub sort: SortKey,
}

impl DirectoryQuery {
    pub fn new(text: &str, category: &str, sort: &str) -> Self {
        Self {
            text: text.trim().to_lowercase(),
            category: category.to_string(),
            sort: SortKey::from_param(sort),
        }
    }

    pub fn matches(&self, contractor: &Contractor) -> bool {
        self.matches_text(contractor)
            && (self.category.is_empty() || contractor.category.as_deref() == Some(self.category.as_str()))
    }

    fn matches_text(&self, contractor: &Contractor) -> bool {
        if self.text.is_empty() {
            return true;
        }
        [
            contractor.display_name(),
            contractor.description(),
            contractor.category(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.text))
    }

    /// Filter, then sort, the fetched collection.
    pub fn apply(&self, contractors: Vec<Contractor>) -> Vec<Contractor> {
        let mut found: Vec<Contractor> = contractors
            .into_iter()
            .filter(|c| self.matches(c))
            .collect();

        match self.sort {
            SortKey::ServerOrder => {}
            SortKey::Rating => {
                found.sort_by(|a, b| b.rating_value().total_cmp(&a.rating_value()))
            }
            SortKey::Experience => {
                found.sort_by(|a, b| b.experience_value().total_cmp(&a.experience_value()))
            }
            SortKey::Name => found.sort_by(|a, b| compare_names(a.display_name(), b.display_name())),
        }
        found
    }
}

/// Case-insensitive name order with `ё` sorted next to `е`, falling back to
/// the raw strings so distinct names never compare equal by accident.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> Vec<char> {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contractor(username: &str) -> Contractor {
        Contractor {
            username: username.to_string(),
            ..Default::default()
        }
    }

    fn usernames(list: &[Contractor]) -> Vec<&str> {
        list.iter().map(|c| c.username.as_str()).collect()
    }

    fn sample() -> Vec<Contractor> {
        vec![
            Contractor {
                full_name: Some("Иван Петров".into()),
                category: Some("Сантехника".into()),
                description: Some("Замена труб и смесителей".into()),
                rating: Some(4.2),
                experience_years: Some(10.0),
                ..contractor("ivan")
            },
            Contractor {
                full_name: Some("Anna Smith".into()),
                category: Some("Электрика".into()),
                description: Some("Wiring, sockets".into()),
                rating: Some(4.7),
                ..contractor("anna")
            },
            Contractor {
                category: Some("Сантехника".into()),
                experience_years: Some(3.0),
                ..contractor("zed")
            },
        ]
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let found = DirectoryQuery::default().apply(sample());
        assert_eq!(usernames(&found), vec!["ivan", "anna", "zed"]);
    }

    #[test]
    fn test_text_matches_any_field_case_insensitively() {
        // name
        let found = DirectoryQuery::new("ANNA", "", "").apply(sample());
        assert_eq!(usernames(&found), vec!["anna"]);
        // description
        let found = DirectoryQuery::new("смесител", "", "").apply(sample());
        assert_eq!(usernames(&found), vec!["ivan"]);
        // category
        let found = DirectoryQuery::new("сантех", "", "").apply(sample());
        assert_eq!(usernames(&found), vec!["ivan", "zed"]);
        // username fallback when full_name is absent
        let found = DirectoryQuery::new("  Zed ", "", "").apply(sample());
        assert_eq!(usernames(&found), vec!["zed"]);
    }

    #[test]
    fn test_text_inclusion_property() {
        let needles = ["", "a", "ан", "wiring", "труб", "nothing-like-this", "4.7"];
        for needle in needles {
            let query = DirectoryQuery::new(needle, "", "");
            let found = query.apply(sample());
            for c in sample() {
                let expected = needle.is_empty()
                    || [c.display_name(), c.description(), c.category()]
                        .iter()
                        .any(|f| f.to_lowercase().contains(&needle.to_lowercase()));
                assert_eq!(
                    found.iter().any(|f| f.username == c.username),
                    expected,
                    "needle {needle:?} contractor {}",
                    c.username
                );
            }
        }
    }

    #[test]
    fn test_category_is_exact() {
        let found = DirectoryQuery::new("", "Сантехника", "").apply(sample());
        assert_eq!(usernames(&found), vec!["ivan", "zed"]);
        let found = DirectoryQuery::new("", "сантехника", "").apply(sample());
        assert!(found.is_empty());
    }

    #[test]
    fn test_rating_sort_descending() {
        let list = vec![
            Contractor { rating: Some(4.2), ..contractor("b") },
            Contractor { rating: Some(4.7), ..contractor("a") },
        ];
        let found = DirectoryQuery::new("", "", "rating").apply(list);
        assert_eq!(usernames(&found), vec!["a", "b"]);

        let found = DirectoryQuery::new("", "", "rating").apply(sample());
        assert_eq!(usernames(&found), vec!["anna", "ivan", "zed"]);
    }

    #[test]
    fn test_experience_sort_treats_missing_as_zero() {
        let found = DirectoryQuery::new("", "", "experience").apply(sample());
        assert_eq!(usernames(&found), vec!["ivan", "zed", "anna"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let list = vec![
            contractor("first"),
            Contractor { rating: Some(0.0), ..contractor("second") },
            contractor("third"),
        ];
        let found = DirectoryQuery::new("", "", "rating").apply(list);
        assert_eq!(usernames(&found), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_name_sort() {
        let list = vec![
            Contractor { full_name: Some("Борис".into()), ..contractor("b") },
            Contractor { full_name: Some("анна".into()), ..contractor("a") },
            Contractor { full_name: Some("Ёлка".into()), ..contractor("yo") },
            Contractor { full_name: Some("Вера".into()), ..contractor("v") },
        ];
        let found = DirectoryQuery::new("", "", "name").apply(list);
        assert_eq!(usernames(&found), vec!["a", "b", "v", "yo"]);
    }

    #[test]
    fn test_unknown_sort_keeps_server_order() {
        assert_eq!(SortKey::from_param("price"), SortKey::ServerOrder);
        let found = DirectoryQuery::new("", "", "price").apply(sample());
        assert_eq!(usernames(&found), vec!["ivan", "anna", "zed"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let found = DirectoryQuery::new("квантовая физика", "", "").apply(sample());
        assert!(found.is_empty());
    }
}
