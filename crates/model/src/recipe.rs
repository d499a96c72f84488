//! Recipe types.
//!
//! A [`Recipe`] is a self-contained document: scalar fields (title, source,
//! submitter), a fixed [`Category`], two presentation flags, and the ordered
//! collections that make up the recipe body (ingredients, steps, tags,
//! footnotes). Tags carry case-insensitive semantics; comparisons against the
//! tag collection normalize case at the query boundary.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed set of recipe categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Starters and small bites.
    Appetizer,
    /// Main dishes.
    Entree,
    /// Side dishes.
    Side,
    /// Desserts.
    Dessert,
    /// Breakfast dishes.
    Breakfast,
    /// Drinks.
    Beverage,
    /// Sauces, dressings, and condiments.
    Sauce,
}

impl Category {
    /// Every category, in canonical listing order.
    pub const ALL: [Category; 7] = [
        Category::Appetizer,
        Category::Entree,
        Category::Side,
        Category::Dessert,
        Category::Breakfast,
        Category::Beverage,
        Category::Sauce,
    ];

    /// Returns the wire representation of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::Entree => "entree",
            Category::Side => "side",
            Category::Dessert => "dessert",
            Category::Breakfast => "breakfast",
            Category::Beverage => "beverage",
            Category::Sauce => "sauce",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A serving count, which historical data stores as either a number or a
/// free-form string ("4-6", "one 9x13 pan").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Servings {
    /// A plain numeric serving count.
    Count(u32),
    /// A free-form description.
    Text(String),
}

/// One entry in a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// The ingredient itself, including quantity ("2 cups flour").
    pub ingredient: String,
    /// An optional preparation note ("sifted", "room temperature").
    #[serde(default)]
    pub note: Option<String>,
}

/// A stored recipe document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned numeric id, carried over from the original data set.
    pub id: u64,
    /// Recipe title. Always present.
    pub title: String,
    /// Where the recipe came from ("Grandma", "NYT Cooking").
    #[serde(default)]
    pub source: Option<String>,
    /// Link to the original recipe, if it came from the web.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Username of the submitter. Always present.
    pub submitted_by: String,
    /// Serving count or description.
    #[serde(default)]
    pub servings: Option<Servings>,
    /// Recipe category. Always present.
    pub category: Category,
    /// Whether the recipe is vegetarian.
    #[serde(default)]
    pub vegetarian: bool,
    /// Whether the recipe is featured on the front page.
    #[serde(default)]
    pub featured: bool,
    /// When the recipe was created.
    pub created_at: DateTime<Utc>,
    /// Free-form tags. Case-insensitive semantics.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Footnotes displayed after the steps.
    #[serde(default)]
    pub footnotes: Vec<String>,
    /// Ordered ingredient list. Non-empty for a creatable recipe.
    pub ingredients: Vec<Ingredient>,
    /// Ordered preparation steps. Non-empty for a creatable recipe.
    pub steps: Vec<String>,
}

/// A validated recipe creation payload. The store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    /// Recipe title.
    pub title: String,
    /// Where the recipe came from.
    #[serde(default)]
    pub source: Option<String>,
    /// Link to the original recipe.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Username of the submitter.
    pub submitted_by: String,
    /// Serving count or description.
    #[serde(default)]
    pub servings: Option<Servings>,
    /// Recipe category.
    pub category: Category,
    /// Whether the recipe is vegetarian.
    #[serde(default)]
    pub vegetarian: bool,
    /// Whether the recipe is featured.
    #[serde(default)]
    pub featured: bool,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Footnotes.
    #[serde(default)]
    pub footnotes: Vec<String>,
    /// Ordered ingredient list.
    pub ingredients: Vec<Ingredient>,
    /// Ordered preparation steps.
    pub steps: Vec<String>,
}

/// A partial recipe update. Only the provided fields are changed; unknown
/// fields in the incoming body are ignored by the HTTP layer before this
/// struct is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeUpdate {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New source.
    #[serde(default)]
    pub source: Option<String>,
    /// New source URL.
    #[serde(default)]
    pub source_url: Option<String>,
    /// New submitter.
    #[serde(default)]
    pub submitted_by: Option<String>,
    /// New servings.
    #[serde(default)]
    pub servings: Option<Servings>,
    /// New category.
    #[serde(default)]
    pub category: Option<Category>,
    /// New vegetarian flag.
    #[serde(default)]
    pub vegetarian: Option<bool>,
    /// New featured flag.
    #[serde(default)]
    pub featured: Option<bool>,
    /// Replacement tag list.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Replacement footnotes.
    #[serde(default)]
    pub footnotes: Option<Vec<String>>,
    /// Replacement ingredient list.
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
    /// Replacement step list.
    #[serde(default)]
    pub steps: Option<Vec<String>>,
}

impl RecipeUpdate {
    /// Returns true when the update carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.source.is_none()
            && self.source_url.is_none()
            && self.submitted_by.is_none()
            && self.servings.is_none()
            && self.category.is_none()
            && self.vegetarian.is_none()
            && self.featured.is_none()
            && self.tags.is_none()
            && self.footnotes.is_none()
            && self.ingredients.is_none()
            && self.steps.is_none()
    }
}

impl Recipe {
    /// Builds a stored recipe from a creation payload.
    pub fn from_new(id: u64, created_at: DateTime<Utc>, new: NewRecipe) -> Self {
        Recipe {
            id,
            title: new.title,
            source: new.source,
            source_url: new.source_url,
            submitted_by: new.submitted_by,
            servings: new.servings,
            category: new.category,
            vegetarian: new.vegetarian,
            featured: new.featured,
            created_at,
            tags: new.tags,
            footnotes: new.footnotes,
            ingredients: new.ingredients,
            steps: new.steps,
        }
    }

    /// Applies a partial update in place, replacing only the provided fields.
    pub fn apply(&mut self, update: RecipeUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(source) = update.source {
            self.source = Some(source);
        }
        if let Some(source_url) = update.source_url {
            self.source_url = Some(source_url);
        }
        if let Some(submitted_by) = update.submitted_by {
            self.submitted_by = submitted_by;
        }
        if let Some(servings) = update.servings {
            self.servings = Some(servings);
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(vegetarian) = update.vegetarian {
            self.vegetarian = vegetarian;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(footnotes) = update.footnotes {
            self.footnotes = footnotes;
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(steps) = update.steps {
            self.steps = steps;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: 1,
            title: "Lemon Bars".to_string(),
            source: Some("Grandma".to_string()),
            source_url: None,
            submitted_by: "alice".to_string(),
            servings: Some(Servings::Text("one 9x13 pan".to_string())),
            category: Category::Dessert,
            vegetarian: true,
            featured: false,
            created_at: Utc::now(),
            tags: vec!["citrus".to_string(), "baking".to_string()],
            footnotes: vec![],
            ingredients: vec![Ingredient {
                ingredient: "2 cups flour".to_string(),
                note: Some("sifted".to_string()),
            }],
            steps: vec!["Mix".to_string(), "Bake".to_string()],
        }
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_category_rejects_unknown() {
        assert!(serde_json::from_str::<Category>("\"Dessert\"").is_err());
        assert!(serde_json::from_str::<Category>("\"snack\"").is_err());
    }

    #[test]
    fn test_servings_untagged() {
        let n: Servings = serde_json::from_str("4").unwrap();
        assert_eq!(n, Servings::Count(4));
        let s: Servings = serde_json::from_str("\"4-6\"").unwrap();
        assert_eq!(s, Servings::Text("4-6".to_string()));
    }

    #[test]
    fn test_recipe_defaults_on_deserialize() {
        let recipe: Recipe = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Toast",
            "submitted_by": "bob",
            "category": "breakfast",
            "created_at": "2024-01-01T00:00:00Z",
            "ingredients": [{"ingredient": "bread"}],
            "steps": ["toast it"]
        }))
        .unwrap();
        assert!(!recipe.vegetarian);
        assert!(!recipe.featured);
        assert!(recipe.tags.is_empty());
        assert_eq!(recipe.ingredients[0].note, None);
    }

    #[test]
    fn test_update_is_empty() {
        assert!(RecipeUpdate::default().is_empty());
        let update = RecipeUpdate {
            title: Some("New".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_apply_replaces_only_provided_fields() {
        let mut recipe = sample_recipe();
        recipe.apply(RecipeUpdate {
            title: Some("Lime Bars".to_string()),
            tags: Some(vec!["citrus".to_string()]),
            ..Default::default()
        });
        assert_eq!(recipe.title, "Lime Bars");
        assert_eq!(recipe.tags, vec!["citrus".to_string()]);
        // Untouched fields survive.
        assert_eq!(recipe.submitted_by, "alice");
        assert_eq!(recipe.category, Category::Dessert);
    }
}
