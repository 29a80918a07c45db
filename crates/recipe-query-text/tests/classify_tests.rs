use recipe_query_core::types::Category;
use recipe_query_text::{classify, parse, tokenize};

#[test]
fn keto_is_a_diet_first() {
    for _ in 0..3 {
        let s = classify("keto");
        assert_eq!(s[0].category, Category::DietaryPreferences);
        assert!((s[0].confidence - 0.9).abs() < 1e-6);
    }
}

#[test]
fn unknown_token_falls_back_to_uncertain_ingredient() {
    for token in ["xyz123", "Zorblax", "qq"] {
        let s = classify(token);
        assert_eq!(s.len(), 1, "exactly one fallback suggestion for {}", token);
        assert_eq!(s[0].category, Category::Ingredients);
        assert!((s[0].confidence - 0.3).abs() < 1e-6);
    }
}

#[test]
fn quick_is_only_a_prep_constraint() {
    let s = classify("quick");
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].category, Category::PrepConstraints);
    assert!((s[0].confidence - 0.8).abs() < 1e-6);
}

#[test]
fn matching_ignores_case_but_labels_keep_it() {
    let s = classify("Chicken");
    assert_eq!(s[0].category, Category::Ingredients);
    assert!((s[0].confidence - 0.8).abs() < 1e-6);
    assert_eq!(s[0].label, "Add Chicken to ingredients");
}

#[test]
fn suggestions_are_sorted_by_confidence() {
    // "stir-fry" is both a cooking method (0.7) and a dish (0.8).
    let s = classify("stir-fry");
    let cats: Vec<Category> = s.iter().map(|x| x.category).collect();
    assert_eq!(cats, vec![Category::Dishes, Category::CookingMethod]);
    for pair in s.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
}

#[test]
fn ties_keep_dictionary_scan_order() {
    // "breakfast" is a meal type and also contains the time phrase "fast";
    // both score 0.8 and the word list is scanned before the phrases.
    let s = classify("breakfast");
    let cats: Vec<Category> = s.iter().map(|x| x.category).collect();
    assert_eq!(cats, vec![Category::MealType, Category::PrepConstraints]);
}

#[test]
fn time_phrases_match_as_substrings() {
    let s = classify("30-minute");
    assert_eq!(s[0].category, Category::PrepConstraints);
    let s = classify("super-quick");
    assert_eq!(s[0].category, Category::PrepConstraints);
}

#[test]
fn nutrition_goals_are_recognised() {
    let s = classify("high-protein");
    assert_eq!(s[0].category, Category::NutritionGoals);
}

#[test]
fn exclusion_prefix_applies_to_unsplit_text() {
    let s = classify("no dairy");
    assert_eq!(s[0].category, Category::ExcludedIngredients);
    assert!((s[0].confidence - 0.9).abs() < 1e-6);
    assert_eq!(s[0].label, "Avoid dairy");
}

#[test]
fn exclusion_prefix_never_reaches_parsed_tokens() {
    let tokens = parse("no dairy");
    assert_eq!(tokens.len(), 2);
    assert!(tokens
        .iter()
        .all(|t| t.suggested_categories.iter().all(|s| s.category != Category::ExcludedIngredients)));
    // "dairy" on its own is just an ingredient word.
    assert_eq!(tokens[1].suggested_categories[0].category, Category::Ingredients);
}

#[test]
fn parse_rebuilds_every_token() {
    let tokens = parse("chicken no dairy keto quick dinner");
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, tokenize("chicken no dairy keto quick dinner"));
    assert!(tokens.iter().all(|t| !t.suggested_categories.is_empty()));
    assert!(tokens.iter().all(|t| t.confirmed.is_none()));
    assert_eq!(parse("chicken no dairy keto quick dinner"), tokens);
}

#[test]
fn parse_of_separators_is_empty() {
    assert!(parse(" , ,, ").is_empty());
}

#[test]
fn parsed_tokens_serialize_for_the_presentation_layer() {
    let tokens = parse("keto");
    let json = serde_json::to_value(&tokens).expect("serialize");
    assert_eq!(json[0]["text"], "keto");
    assert_eq!(json[0]["suggestedCategories"][0]["category"], "dietaryPreferences");
    assert!(json[0].get("confirmed").is_none());
}
