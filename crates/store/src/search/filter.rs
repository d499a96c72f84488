//! The filter predicate tree.
//!
//! A [`Filter`] is a tagged union of atomic predicate fragments (substring
//! match, literal equality, flag equality, tag membership) combined with
//! `And`/`Or`. The tree is deliberately backend-agnostic: it carries no query
//! syntax, so each backend decides how to execute it. [`Filter::matches`] is
//! the reference evaluation, used directly by backends that match against
//! deserialized documents.

use larder_model::Recipe;

/// Text fields a substring fragment can address.
///
/// Sequence fields (`Steps`, `Footnotes`, `Tags`, and the two ingredient
/// fields) match when any element matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// The recipe title.
    Title,
    /// The recipe source.
    Source,
    /// The submitter's name.
    SubmittedBy,
    /// Any preparation step.
    Steps,
    /// Any footnote.
    Footnotes,
    /// Any tag.
    Tags,
    /// Any ingredient's name.
    IngredientName,
    /// Any ingredient's note.
    IngredientNote,
}

/// Boolean fields a flag fragment can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagField {
    /// The vegetarian flag.
    Vegetarian,
    /// The featured flag.
    Featured,
}

/// A boolean predicate over a recipe.
///
/// Leaves are the atomic fragments the search builder produces; `And`/`Or`
/// combine them. The builder never wraps a single fragment, so a one-clause
/// filter reaches the backend unwrapped.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Every part must hold.
    And(Vec<Filter>),
    /// At least one part must hold.
    Or(Vec<Filter>),
    /// Case-insensitive substring match against a text field.
    Contains {
        /// The field to scan.
        field: TextField,
        /// The needle. An empty term matches everything.
        term: String,
    },
    /// Literal, case-sensitive equality against the category value. An
    /// unrecognized value simply matches nothing.
    CategoryIs(String),
    /// Boolean equality against a flag field.
    FlagIs {
        /// The flag to compare.
        field: FlagField,
        /// The expected value.
        value: bool,
    },
    /// At least one of the values is present in the tag collection. Values
    /// must already be lowercased; stored tags are lowercased on comparison.
    TagsAny(Vec<String>),
    /// Every value is present in the tag collection. Values must already be
    /// lowercased.
    TagsAll(Vec<String>),
}

impl Filter {
    /// Convenience constructor for a substring fragment.
    pub fn contains(field: TextField, term: impl Into<String>) -> Self {
        Filter::Contains {
            field,
            term: term.into(),
        }
    }

    /// Evaluates the filter against a recipe.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            Filter::And(parts) => parts.iter().all(|part| part.matches(recipe)),
            Filter::Or(parts) => parts.iter().any(|part| part.matches(recipe)),
            Filter::Contains { field, term } => {
                contains_match(recipe, *field, &term.to_lowercase())
            }
            Filter::CategoryIs(value) => recipe.category.as_str() == value,
            Filter::FlagIs { field, value } => match field {
                FlagField::Vegetarian => recipe.vegetarian == *value,
                FlagField::Featured => recipe.featured == *value,
            },
            Filter::TagsAny(values) => values.iter().any(|wanted| has_tag(recipe, wanted)),
            Filter::TagsAll(values) => values.iter().all(|wanted| has_tag(recipe, wanted)),
        }
    }
}

/// Case-insensitive substring test against one field. `needle` is already
/// lowercased.
fn contains_match(recipe: &Recipe, field: TextField, needle: &str) -> bool {
    let hit = |value: &str| value.to_lowercase().contains(needle);
    match field {
        TextField::Title => hit(&recipe.title),
        TextField::Source => recipe.source.as_deref().is_some_and(hit),
        TextField::SubmittedBy => hit(&recipe.submitted_by),
        TextField::Steps => recipe.steps.iter().any(|step| hit(step)),
        TextField::Footnotes => recipe.footnotes.iter().any(|note| hit(note)),
        TextField::Tags => recipe.tags.iter().any(|tag| hit(tag)),
        TextField::IngredientName => recipe.ingredients.iter().any(|item| hit(&item.ingredient)),
        TextField::IngredientNote => recipe
            .ingredients
            .iter()
            .filter_map(|item| item.note.as_deref())
            .any(hit),
    }
}

/// Exact membership test against the tag collection. `wanted` is already
/// lowercased; stored tags are normalized on the fly.
fn has_tag(recipe: &Recipe, wanted: &str) -> bool {
    recipe.tags.iter().any(|tag| tag.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use larder_model::{Category, Ingredient};

    fn recipe() -> Recipe {
        Recipe {
            id: 1,
            title: "Chocolate Cake".to_string(),
            source: Some("Aunt May".to_string()),
            source_url: None,
            submitted_by: "alice".to_string(),
            servings: None,
            category: Category::Dessert,
            vegetarian: true,
            featured: false,
            created_at: Utc::now(),
            tags: vec!["Baking".to_string(), "chocolate".to_string()],
            footnotes: vec!["Best served warm".to_string()],
            ingredients: vec![
                Ingredient {
                    ingredient: "2 cups Flour".to_string(),
                    note: Some("sifted".to_string()),
                },
                Ingredient {
                    ingredient: "1 cup cocoa".to_string(),
                    note: None,
                },
            ],
            steps: vec!["Mix dry ingredients".to_string(), "Bake".to_string()],
        }
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let recipe = recipe();
        assert!(Filter::contains(TextField::Title, "CAKE").matches(&recipe));
        assert!(Filter::contains(TextField::IngredientName, "flour").matches(&recipe));
        assert!(Filter::contains(TextField::IngredientNote, "SIFTED").matches(&recipe));
        assert!(!Filter::contains(TextField::Title, "pie").matches(&recipe));
    }

    #[test]
    fn test_contains_scans_every_sequence_element() {
        let recipe = recipe();
        assert!(Filter::contains(TextField::Steps, "bake").matches(&recipe));
        assert!(Filter::contains(TextField::Footnotes, "warm").matches(&recipe));
        assert!(Filter::contains(TextField::Tags, "bak").matches(&recipe));
    }

    #[test]
    fn test_contains_empty_term_matches_everything() {
        let recipe = recipe();
        assert!(Filter::contains(TextField::Title, "").matches(&recipe));
    }

    #[test]
    fn test_contains_absent_source_never_matches() {
        let mut recipe = recipe();
        recipe.source = None;
        assert!(!Filter::contains(TextField::Source, "may").matches(&recipe));
    }

    #[test]
    fn test_category_equality_is_case_sensitive() {
        let recipe = recipe();
        assert!(Filter::CategoryIs("dessert".to_string()).matches(&recipe));
        assert!(!Filter::CategoryIs("Dessert".to_string()).matches(&recipe));
        assert!(!Filter::CategoryIs("entree".to_string()).matches(&recipe));
    }

    #[test]
    fn test_flag_equality() {
        let recipe = recipe();
        assert!(
            Filter::FlagIs {
                field: FlagField::Vegetarian,
                value: true
            }
            .matches(&recipe)
        );
        assert!(
            !Filter::FlagIs {
                field: FlagField::Featured,
                value: true
            }
            .matches(&recipe)
        );
    }

    #[test]
    fn test_tag_membership_normalizes_stored_tags() {
        let recipe = recipe();
        // "Baking" is stored capitalized; membership values arrive lowercased.
        assert!(Filter::TagsAny(vec!["baking".to_string()]).matches(&recipe));
        assert!(Filter::TagsAll(vec!["baking".to_string(), "chocolate".to_string()]).matches(&recipe));
        assert!(!Filter::TagsAll(vec!["baking".to_string(), "savory".to_string()]).matches(&recipe));
        assert!(Filter::TagsAny(vec!["savory".to_string(), "chocolate".to_string()]).matches(&recipe));
    }

    #[test]
    fn test_tag_membership_is_exact_not_substring() {
        let recipe = recipe();
        assert!(!Filter::TagsAny(vec!["bak".to_string()]).matches(&recipe));
    }

    #[test]
    fn test_and_or_combination() {
        let recipe = recipe();
        let title = Filter::contains(TextField::Title, "cake");
        let missing = Filter::contains(TextField::Title, "pie");
        assert!(Filter::And(vec![title.clone(), title.clone()]).matches(&recipe));
        assert!(!Filter::And(vec![title.clone(), missing.clone()]).matches(&recipe));
        assert!(Filter::Or(vec![missing.clone(), title]).matches(&recipe));
        assert!(!Filter::Or(vec![missing.clone(), missing]).matches(&recipe));
    }
}
