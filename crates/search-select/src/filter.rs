//! Case-insensitive substring matching over option labels.
//!
//! The visible list is always an in-order subsequence of the full option
//! list; nothing is ranked or reordered.

use crate::option::SelectOption;

/// Whether `label` contains `query`, ignoring case. An empty query matches
/// everything.
pub fn matches(label: &str, query: &str) -> bool {
    query.is_empty() || label.to_lowercase().contains(&query.to_lowercase())
}

/// Indices into `options` of every option whose label matches `query`, in
/// original order.
pub fn filter_indices<T>(options: &[SelectOption<T>], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }
    let query = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, o)| o.label.to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<SelectOption<u32>> {
        vec![
            SelectOption::new(1, "Apple"),
            SelectOption::new(2, "Banana"),
            SelectOption::new(3, "Avocado"),
        ]
    }

    fn labels<'a>(options: &'a [SelectOption<u32>], idx: &[usize]) -> Vec<&'a str> {
        idx.iter().map(|&i| options[i].label.as_str()).collect()
    }

    #[test]
    fn single_letter_matches_all_containing_it() {
        let options = fruit();
        let idx = filter_indices(&options, "a");
        assert_eq!(labels(&options, &idx), vec!["Apple", "Banana", "Avocado"]);
    }

    #[test]
    fn prefix_narrows_case_insensitively() {
        let options = fruit();
        assert_eq!(labels(&options, &filter_indices(&options, "Av")), vec!["Avocado"]);
        assert_eq!(labels(&options, &filter_indices(&options, "aV")), vec!["Avocado"]);
    }

    #[test]
    fn empty_query_keeps_everything() {
        let options = fruit();
        assert_eq!(filter_indices(&options, ""), vec![0, 1, 2]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_indices(&fruit(), "zz").is_empty());
    }

    #[test]
    fn matches_inner_substring() {
        assert!(matches("United Kingdom", "kingdom"));
        assert!(matches("United Kingdom", "ED KI"));
        assert!(!matches("France", "germ"));
    }

    #[test]
    fn unicode_case_folding() {
        assert!(matches("Ärger", "är"));
        assert!(matches("résumé", "RÉSUMÉ"));
    }

    #[test]
    fn every_result_contains_query_and_order_is_preserved() {
        let options: Vec<SelectOption<usize>> = [
            "Mango", "melon", "Lemon", "Lime", "Plum", "MELONADE", "Peach",
        ]
        .iter()
        .enumerate()
        .map(|(i, l)| SelectOption::new(i, *l))
        .collect();

        for query in ["m", "mel", "ON", "e", "lim", "x", ""] {
            let idx = filter_indices(&options, query);
            assert!(idx.windows(2).all(|w| w[0] < w[1]), "order for {query:?}");
            for &i in &idx {
                assert!(
                    options[i].label.to_lowercase().contains(&query.to_lowercase()),
                    "{} should contain {query:?}",
                    options[i].label
                );
            }
            let expected = options
                .iter()
                .filter(|o| matches(&o.label, query))
                .count();
            assert_eq!(idx.len(), expected);
        }
    }
}
