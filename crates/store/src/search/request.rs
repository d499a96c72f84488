//! Parsing raw search parameters into a typed request, and building the
//! filter from it.
//!
//! # Parameter semantics
//!
//! - `all=true` (the literal string) switches from match-any (the default,
//!   fragments OR'd together) to match-all (fragments AND'd together).
//! - `wildcard` and `ingredients` are comma-separated term lists. Each term
//!   becomes its own fragment; terms are never merged into a single OR, so
//!   in match-all mode every term must match independently.
//! - `tags` is a comma-separated list. With more than one entry it becomes a
//!   single membership fragment (all-of when matching all, any-of
//!   otherwise); a single entry becomes an exact membership fragment. Tag
//!   values are trimmed and lowercased.
//! - `title`, `source`, `submitted_by`, `steps`, `footnotes` each become one
//!   trimmed, case-insensitive substring fragment.
//! - `category` becomes a literal equality fragment: case-sensitive, and an
//!   unrecognized value matches nothing rather than erroring.
//! - `vegetarian` and `featured` follow the *presence coercion* policy: the
//!   parameter being present at all produces a flag fragment, and its value
//!   is the string's non-emptiness. `vegetarian=false` therefore asserts
//!   `vegetarian == true`. This mirrors the behavior clients have relied on
//!   and is covered by tests; changing it is a semantic change, not a fix.
//! - `limit` is strictly validated here, at the parse boundary: it must
//!   parse as an integer and be at least 1 (an empty value counts as
//!   absent). It caps results but is not itself a search criterion.
//!
//! Comma-separated values split on literal commas with no escaping; a term
//! containing a comma cannot be expressed.

use std::collections::HashMap;

use crate::error::SearchError;

use super::filter::{Filter, FlagField, TextField};

/// A typed, validated search request, parsed from the raw query-string map.
///
/// One instance is built per call and discarded after producing a filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    /// Whether all fragments must match (AND) instead of any (OR).
    pub match_all: bool,
    /// Wildcard terms, comma-split, in query order.
    pub wildcard: Vec<String>,
    /// Tag values, comma-split, in query order.
    pub tags: Vec<String>,
    /// Ingredient terms, comma-split, in query order.
    pub ingredients: Vec<String>,
    /// Title substring.
    pub title: Option<String>,
    /// Source substring.
    pub source: Option<String>,
    /// Submitter substring.
    pub submitted_by: Option<String>,
    /// Literal category value.
    pub category: Option<String>,
    /// Presence-coerced vegetarian flag.
    pub vegetarian: Option<bool>,
    /// Presence-coerced featured flag.
    pub featured: Option<bool>,
    /// Steps substring.
    pub steps: Option<String>,
    /// Footnotes substring.
    pub footnotes: Option<String>,
    /// Result cap. Validated at parse time; always at least 1 when present.
    pub limit: Option<u32>,
}

/// The built search: one filter tree plus an optional result cap.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    /// The combined predicate to hand to the store.
    pub filter: Filter,
    /// Result cap, applied after filtering and sorting.
    pub limit: Option<u32>,
}

impl SearchRequest {
    /// Parses the raw query-string map into a typed request.
    ///
    /// Empty-string values are treated as absent for every text parameter;
    /// for `vegetarian`/`featured` presence is what matters, and an empty
    /// value coerces to `false` under the presence coercion policy.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidLimit`] when `limit` is present but does not
    /// parse as an integer of at least 1.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, SearchError> {
        // Like the text parameters, an empty limit is treated as absent
        // rather than invalid.
        let limit = match params.get("limit").filter(|raw| !raw.is_empty()) {
            None => None,
            Some(raw) => {
                let parsed: u32 = raw.parse().map_err(|_| SearchError::InvalidLimit)?;
                if parsed < 1 {
                    return Err(SearchError::InvalidLimit);
                }
                Some(parsed)
            }
        };

        Ok(SearchRequest {
            match_all: params.get("all").is_some_and(|value| value == "true"),
            wildcard: csv(params, "wildcard"),
            tags: csv(params, "tags"),
            ingredients: csv(params, "ingredients"),
            title: non_empty(params, "title"),
            source: non_empty(params, "source"),
            submitted_by: non_empty(params, "submitted_by"),
            category: non_empty(params, "category"),
            vegetarian: params.get("vegetarian").map(|raw| !raw.is_empty()),
            featured: params.get("featured").map(|raw| !raw.is_empty()),
            steps: non_empty(params, "steps"),
            footnotes: non_empty(params, "footnotes"),
            limit,
        })
    }

    /// Builds the filter from the typed request.
    ///
    /// Fragments are collected in a fixed order (wildcard terms, tags,
    /// ingredient terms, title, source, submitted_by, category, vegetarian,
    /// featured, steps, footnotes) and combined per `match_all`. A single
    /// fragment is returned unwrapped, so backends see a one-clause filter
    /// rather than a trivial AND/OR.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoCriteria`] when no fragments were produced. `limit`
    /// alone does not count as a criterion.
    pub fn build(&self) -> Result<Search, SearchError> {
        let mut fragments = Vec::new();

        for term in &self.wildcard {
            fragments.push(wildcard_fragment(term));
        }

        if self.tags.len() > 1 {
            let values: Vec<String> = self
                .tags
                .iter()
                .map(|tag| tag.trim().to_lowercase())
                .collect();
            fragments.push(if self.match_all {
                Filter::TagsAll(values)
            } else {
                Filter::TagsAny(values)
            });
        } else if let Some(tag) = self.tags.first() {
            fragments.push(Filter::TagsAny(vec![tag.trim().to_lowercase()]));
        }

        for term in &self.ingredients {
            fragments.push(ingredient_fragment(term));
        }

        if let Some(title) = &self.title {
            fragments.push(Filter::contains(TextField::Title, title.trim()));
        }
        if let Some(source) = &self.source {
            fragments.push(Filter::contains(TextField::Source, source.trim()));
        }
        if let Some(submitted_by) = &self.submitted_by {
            fragments.push(Filter::contains(TextField::SubmittedBy, submitted_by.trim()));
        }
        if let Some(category) = &self.category {
            fragments.push(Filter::CategoryIs(category.clone()));
        }
        if let Some(value) = self.vegetarian {
            fragments.push(Filter::FlagIs {
                field: FlagField::Vegetarian,
                value,
            });
        }
        if let Some(value) = self.featured {
            fragments.push(Filter::FlagIs {
                field: FlagField::Featured,
                value,
            });
        }
        if let Some(steps) = &self.steps {
            fragments.push(Filter::contains(TextField::Steps, steps.trim()));
        }
        if let Some(footnotes) = &self.footnotes {
            fragments.push(Filter::contains(TextField::Footnotes, footnotes.trim()));
        }

        let filter = if fragments.is_empty() {
            return Err(SearchError::NoCriteria);
        } else if fragments.len() == 1 {
            fragments.remove(0)
        } else if self.match_all {
            Filter::And(fragments)
        } else {
            Filter::Or(fragments)
        };

        Ok(Search {
            filter,
            limit: self.limit,
        })
    }
}

/// One wildcard term: matches when the trimmed term appears in any of the
/// scanned fields.
fn wildcard_fragment(term: &str) -> Filter {
    let term = term.trim();
    Filter::Or(vec![
        Filter::contains(TextField::Title, term),
        Filter::contains(TextField::IngredientName, term),
        Filter::contains(TextField::IngredientNote, term),
        Filter::contains(TextField::Steps, term),
        Filter::contains(TextField::Tags, term),
        Filter::contains(TextField::Footnotes, term),
    ])
}

/// One ingredient term: matches against any ingredient's name or note.
fn ingredient_fragment(term: &str) -> Filter {
    Filter::Or(vec![
        Filter::contains(TextField::IngredientName, term),
        Filter::contains(TextField::IngredientNote, term),
    ])
}

/// Reads a comma-separated parameter, treating an empty value as absent.
fn csv(params: &HashMap<String, String>, key: &str) -> Vec<String> {
    match params.get(key) {
        Some(raw) if !raw.is_empty() => raw.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Reads a plain text parameter, treating an empty value as absent.
fn non_empty(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params.get(key).filter(|raw| !raw.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn build(pairs: &[(&str, &str)]) -> Result<Search, SearchError> {
        SearchRequest::from_query(&query(pairs))?.build()
    }

    #[test]
    fn test_empty_query_reports_no_criteria() {
        assert_eq!(build(&[]), Err(SearchError::NoCriteria));
    }

    #[test]
    fn test_limit_alone_is_not_a_criterion() {
        assert_eq!(build(&[("limit", "5")]), Err(SearchError::NoCriteria));
    }

    #[test]
    fn test_invalid_limits_are_rejected() {
        for bad in ["0", "-1", "abc", "5abc"] {
            assert_eq!(
                build(&[("title", "cake"), ("limit", bad)]),
                Err(SearchError::InvalidLimit),
                "limit={bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_limit_is_ignored() {
        let search = build(&[("title", "cake"), ("limit", "")]).unwrap();
        assert_eq!(search.limit, None);
    }

    #[test]
    fn test_valid_limit_is_carried_through() {
        let search = build(&[("title", "cake"), ("limit", "5")]).unwrap();
        assert_eq!(search.limit, Some(5));
    }

    #[test]
    fn test_single_fragment_is_unwrapped() {
        let search = build(&[("title", "cake")]).unwrap();
        assert_eq!(
            search.filter,
            Filter::contains(TextField::Title, "cake"),
            "a lone fragment must not be wrapped in a one-element AND/OR"
        );
    }

    #[test]
    fn test_text_fragments_are_trimmed() {
        let search = build(&[("title", "  cake  ")]).unwrap();
        assert_eq!(search.filter, Filter::contains(TextField::Title, "cake"));
    }

    #[test]
    fn test_default_combination_is_or() {
        let search = build(&[("title", "cake"), ("source", "aunt")]).unwrap();
        match search.filter {
            Filter::Or(parts) => assert_eq!(parts.len(), 2),
            other => panic!("expected Or, got {other:?}"),
        }
    }

    #[test]
    fn test_all_true_combines_with_and() {
        let search = build(&[("title", "cake"), ("source", "aunt"), ("all", "true")]).unwrap();
        assert!(matches!(search.filter, Filter::And(_)));
    }

    #[test]
    fn test_all_requires_the_literal_true() {
        // Anything but the literal "true" leaves the default match-any mode.
        for not_true in ["TRUE", "1", "yes", ""] {
            let search = build(&[("title", "cake"), ("source", "aunt"), ("all", not_true)]).unwrap();
            assert!(matches!(search.filter, Filter::Or(_)), "all={not_true:?}");
        }
    }

    #[test]
    fn test_wildcard_terms_stay_separate_fragments() {
        let search = build(&[("wildcard", "foo,bar"), ("all", "true")]).unwrap();
        let Filter::And(parts) = search.filter else {
            panic!("expected And of two wildcard fragments");
        };
        assert_eq!(parts.len(), 2);
        // Each term expands to its own OR over the scanned fields; the terms
        // are never merged into a single OR.
        for (part, term) in parts.iter().zip(["foo", "bar"]) {
            let Filter::Or(scans) = part else {
                panic!("expected per-term Or, got {part:?}");
            };
            assert_eq!(scans.len(), 6);
            assert_eq!(scans[0], Filter::contains(TextField::Title, term));
        }
    }

    #[test]
    fn test_wildcard_terms_are_trimmed() {
        let search = build(&[("wildcard", " foo , bar ")]).unwrap();
        let Filter::Or(parts) = search.filter else {
            panic!("expected Or");
        };
        let Filter::Or(scans) = &parts[0] else {
            panic!("expected per-term Or");
        };
        assert_eq!(scans[0], Filter::contains(TextField::Title, "foo"));
    }

    #[test]
    fn test_multi_tags_become_one_membership_fragment() {
        let any = build(&[("tags", "A, b")]).unwrap();
        assert_eq!(
            any.filter,
            Filter::TagsAny(vec!["a".to_string(), "b".to_string()])
        );

        let all = build(&[("tags", "A, b"), ("all", "true")]).unwrap();
        assert_eq!(
            all.filter,
            Filter::TagsAll(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_single_tag_is_exact_membership() {
        let search = build(&[("tags", " Baking ")]).unwrap();
        assert_eq!(search.filter, Filter::TagsAny(vec!["baking".to_string()]));
    }

    #[test]
    fn test_ingredient_terms_stay_separate_fragments() {
        let search = build(&[("ingredients", "flour,sugar")]).unwrap();
        let Filter::Or(parts) = search.filter else {
            panic!("expected Or of two ingredient fragments");
        };
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[0],
            Filter::Or(vec![
                Filter::contains(TextField::IngredientName, "flour"),
                Filter::contains(TextField::IngredientNote, "flour"),
            ])
        );
    }

    #[test]
    fn test_category_is_a_literal_equality_fragment() {
        let search = build(&[("category", "Dessert")]).unwrap();
        // Passed through untouched: no trimming, no case folding. A value
        // that names no real category builds fine and matches nothing.
        assert_eq!(search.filter, Filter::CategoryIs("Dessert".to_string()));
    }

    #[test]
    fn test_presence_coercion_treats_false_as_true() {
        // Documented quirk: any non-empty value, including "false", asserts
        // the flag is set. A deliberate change here must update this test.
        let search = build(&[("vegetarian", "false")]).unwrap();
        assert_eq!(
            search.filter,
            Filter::FlagIs {
                field: FlagField::Vegetarian,
                value: true
            }
        );
    }

    #[test]
    fn test_presence_coercion_empty_value_means_false() {
        let search = build(&[("featured", "")]).unwrap();
        assert_eq!(
            search.filter,
            Filter::FlagIs {
                field: FlagField::Featured,
                value: false
            }
        );
    }

    #[test]
    fn test_fragment_order_is_stable() {
        let search = build(&[
            ("title", "cake"),
            ("wildcard", "foo"),
            ("category", "dessert"),
            ("tags", "a,b"),
        ])
        .unwrap();
        let Filter::Or(parts) = search.filter else {
            panic!("expected Or");
        };
        assert_eq!(parts.len(), 4);
        assert!(matches!(parts[0], Filter::Or(_)), "wildcard first");
        assert!(matches!(parts[1], Filter::TagsAny(_)), "tags second");
        assert_eq!(parts[2], Filter::contains(TextField::Title, "cake"));
        assert_eq!(parts[3], Filter::CategoryIs("dessert".to_string()));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        assert_eq!(
            build(&[("title", ""), ("wildcard", ""), ("tags", "")]),
            Err(SearchError::NoCriteria)
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let request = SearchRequest::from_query(&query(&[
            ("wildcard", "foo,bar"),
            ("tags", "a,b"),
            ("all", "true"),
            ("limit", "3"),
        ]))
        .unwrap();
        assert_eq!(request.build(), request.build());
    }
}
