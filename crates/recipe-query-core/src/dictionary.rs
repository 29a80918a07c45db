//! Static category reference data.
//!
//! Word lists are lowercase and scanned in the order of [`WORD_LISTS`]; the
//! classifier relies on that order to break confidence ties.

use crate::types::Category;

/// How a category is rendered: a short label, a hex color and an emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

pub fn style(category: Category) -> &'static CategoryStyle {
    match category {
        Category::Ingredients => &CategoryStyle { label: "Ingredient", color: "#16a34a", emoji: "🥕" },
        Category::ExcludedIngredients => &CategoryStyle { label: "Avoid", color: "#dc2626", emoji: "🚫" },
        Category::DietaryPreferences => &CategoryStyle { label: "Diet", color: "#7c3aed", emoji: "🥗" },
        Category::MealType => &CategoryStyle { label: "Meal", color: "#ea580c", emoji: "🍽️" },
        Category::Cuisine => &CategoryStyle { label: "Cuisine", color: "#2563eb", emoji: "🌍" },
        Category::CookingMethod => &CategoryStyle { label: "Method", color: "#92400e", emoji: "🔥" },
        Category::NutritionGoals => &CategoryStyle { label: "Nutrition", color: "#0891b2", emoji: "💪" },
        Category::PrepConstraints => &CategoryStyle { label: "Time", color: "#475569", emoji: "⏱️" },
        Category::Dishes => &CategoryStyle { label: "Dish", color: "#db2777", emoji: "🍲" },
    }
}

/// An exact-match word list and the confidence a hit earns.
#[derive(Debug)]
pub struct WordList {
    pub category: Category,
    pub confidence: f32,
    pub words: &'static [&'static str],
}

impl WordList {
    pub fn contains(&self, lowered: &str) -> bool {
        self.words.contains(&lowered)
    }
}

pub const EXCLUSION_PREFIXES: [&str; 3] = ["no ", "without ", "avoid "];
pub const EXCLUSION_CONFIDENCE: f32 = 0.9;

/// Matched by substring, not by equality.
pub const TIME_PHRASES: &[&str] = &[
    "quick",
    "fast",
    "30 minutes",
    "30-minute",
    "under 30",
    "15 minutes",
    "15-minute",
    "slow cook",
    "slow-cook",
    "make-ahead",
    "overnight",
    "no-cook",
];
pub const TIME_CONFIDENCE: f32 = 0.8;

pub const FALLBACK_CONFIDENCE: f32 = 0.3;

pub const INGREDIENTS: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "turkey", "bacon", "sausage", "fish", "salmon", "tuna",
    "cod", "shrimp", "prawns", "tofu", "tempeh", "egg", "eggs", "rice", "pasta", "noodles",
    "quinoa", "oats", "bread", "potato", "potatoes", "tomato", "tomatoes", "onion", "onions",
    "garlic", "ginger", "carrot", "carrots", "broccoli", "spinach", "kale", "mushroom",
    "mushrooms", "zucchini", "pepper", "peppers", "corn", "peas", "beans", "chickpeas",
    "lentils", "avocado", "lemon", "lime", "apple", "banana", "berries", "cheese", "milk",
    "butter", "yogurt", "cream", "dairy", "gluten", "nuts", "peanuts", "almonds", "coconut",
    "basil", "cilantro", "parsley",
];

pub const DIETS: &[&str] = &[
    "vegetarian", "vegan", "keto", "paleo", "pescatarian", "gluten-free", "dairy-free",
    "nut-free", "low-carb", "whole30", "halal", "kosher", "mediterranean-diet",
];

pub const MEAL_TYPES: &[&str] = &[
    "breakfast", "brunch", "lunch", "dinner", "supper", "snack", "dessert", "appetizer",
    "side",
];

pub const CUISINES: &[&str] = &[
    "italian", "mexican", "chinese", "indian", "japanese", "thai", "french", "greek",
    "mediterranean", "korean", "vietnamese", "spanish", "american", "cajun", "caribbean",
    "moroccan", "turkish", "lebanese",
];

pub const COOKING_METHODS: &[&str] = &[
    "bake", "baked", "grill", "grilled", "fry", "fried", "air-fried", "roast", "roasted",
    "steam", "steamed", "saute", "sauteed", "braise", "braised", "boil", "boiled", "poached",
    "smoked", "stir-fry", "slow-cooked", "pressure-cooked",
];

pub const DISHES: &[&str] = &[
    "soup", "salad", "stew", "curry", "casserole", "sandwich", "tacos", "burrito", "pizza",
    "burger", "stir-fry", "bowl", "wrap", "risotto", "chili", "omelette", "smoothie", "pie",
    "lasagna",
];

pub const NUTRITION_GOALS: &[&str] = &[
    "high-protein", "protein", "low-calorie", "low-fat", "high-fiber", "low-sodium",
    "low-sugar", "heart-healthy",
];

/// Exact-match lists in scan order.
pub const WORD_LISTS: &[WordList] = &[
    WordList { category: Category::Ingredients, confidence: 0.8, words: INGREDIENTS },
    WordList { category: Category::DietaryPreferences, confidence: 0.9, words: DIETS },
    WordList { category: Category::MealType, confidence: 0.8, words: MEAL_TYPES },
    WordList { category: Category::Cuisine, confidence: 0.8, words: CUISINES },
    WordList { category: Category::CookingMethod, confidence: 0.7, words: COOKING_METHODS },
    WordList { category: Category::Dishes, confidence: 0.8, words: DISHES },
    WordList { category: Category::NutritionGoals, confidence: 0.8, words: NUTRITION_GOALS },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_lists_are_lowercase() {
        for list in WORD_LISTS {
            for w in list.words {
                assert_eq!(*w, w.to_lowercase(), "{} entry '{}' must be lowercase", list.category, w);
            }
        }
    }

    #[test]
    fn every_category_has_a_style() {
        for c in Category::ALL {
            let s = style(c);
            assert!(s.color.starts_with('#'));
            assert!(!s.label.is_empty());
        }
    }

    #[test]
    fn nutrition_words_do_not_overlap_other_lists() {
        for list in WORD_LISTS.iter().filter(|l| l.category != Category::NutritionGoals) {
            for w in NUTRITION_GOALS {
                assert!(!list.contains(w), "'{}' also in {}", w, list.category);
            }
        }
    }
}
