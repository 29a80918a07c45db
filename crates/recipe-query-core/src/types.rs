//! Domain types shared by the classifier and the search session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the nine semantic tags a token can be filed under.
///
/// The serialized form is the camelCase key used by the structured query
/// (`"excludedIngredients"`, `"mealType"`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Ingredients,
    ExcludedIngredients,
    DietaryPreferences,
    MealType,
    Cuisine,
    CookingMethod,
    NutritionGoals,
    PrepConstraints,
    Dishes,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Ingredients,
        Category::ExcludedIngredients,
        Category::DietaryPreferences,
        Category::MealType,
        Category::Cuisine,
        Category::CookingMethod,
        Category::NutritionGoals,
        Category::PrepConstraints,
        Category::Dishes,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Ingredients => "ingredients",
            Category::ExcludedIngredients => "excludedIngredients",
            Category::DietaryPreferences => "dietaryPreferences",
            Category::MealType => "mealType",
            Category::Cuisine => "cuisine",
            Category::CookingMethod => "cookingMethod",
            Category::NutritionGoals => "nutritionGoals",
            Category::PrepConstraints => "prepConstraints",
            Category::Dishes => "dishes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accepts the camelCase key or its snake_case spelling, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '_').collect();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// A ranked guess that a token belongs to `category`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySuggestion {
    pub category: Category,
    /// Heuristic certainty in `[0, 1]`; higher is better.
    pub confidence: f32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfirmedCategory {
    pub category: Category,
    pub label: String,
}

/// A token of the live input together with its suggestions.
///
/// `confirmed` is only set once the user has picked a category for this
/// token during the current input session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedToken {
    pub text: String,
    pub suggested_categories: Vec<CategorySuggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<ConfirmedCategory>,
}

impl ParsedToken {
    pub fn is_confirmed(&self) -> bool {
        self.confirmed.is_some()
    }
}

/// A confirmed, removable and editable selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchChip {
    pub id: String,
    pub text: String,
    pub category: Category,
    pub label: String,
    pub color: String,
}

/// The nine-array query handed to the recipe-retrieval collaborator.
///
/// Each array keeps confirmation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery {
    pub ingredients: Vec<String>,
    pub excluded_ingredients: Vec<String>,
    pub dietary_preferences: Vec<String>,
    pub meal_type: Vec<String>,
    pub cuisine: Vec<String>,
    pub cooking_method: Vec<String>,
    pub nutrition_goals: Vec<String>,
    pub prep_constraints: Vec<String>,
    pub dishes: Vec<String>,
}

impl StructuredQuery {
    pub fn values(&self, category: Category) -> &[String] {
        match category {
            Category::Ingredients => &self.ingredients,
            Category::ExcludedIngredients => &self.excluded_ingredients,
            Category::DietaryPreferences => &self.dietary_preferences,
            Category::MealType => &self.meal_type,
            Category::Cuisine => &self.cuisine,
            Category::CookingMethod => &self.cooking_method,
            Category::NutritionGoals => &self.nutrition_goals,
            Category::PrepConstraints => &self.prep_constraints,
            Category::Dishes => &self.dishes,
        }
    }

    pub fn values_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Ingredients => &mut self.ingredients,
            Category::ExcludedIngredients => &mut self.excluded_ingredients,
            Category::DietaryPreferences => &mut self.dietary_preferences,
            Category::MealType => &mut self.meal_type,
            Category::Cuisine => &mut self.cuisine,
            Category::CookingMethod => &mut self.cooking_method,
            Category::NutritionGoals => &mut self.nutrition_goals,
            Category::PrepConstraints => &mut self.prep_constraints,
            Category::Dishes => &mut self.dishes,
        }
    }

    /// True when every category array is empty.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.values(*c).is_empty())
    }

    pub fn total_len(&self) -> usize {
        Category::ALL.iter().map(|c| self.values(*c).len()).sum()
    }
}

/// A snapshot of the structured query taken when a search ran.
///
/// Entries are read-only once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    query: StructuredQuery,
    executed_at: DateTime<Utc>,
}

impl SearchHistoryEntry {
    pub fn new(query: StructuredQuery, executed_at: DateTime<Utc>) -> Self {
        Self { query, executed_at }
    }

    pub fn query(&self) -> &StructuredQuery { &self.query }

    pub fn executed_at(&self) -> DateTime<Utc> { self.executed_at }
}
