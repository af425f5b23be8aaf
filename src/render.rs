//! Plain-text views of recipes and preferences for the terminal.

use scraper::Html;

use crate::model::{Recipe, UserPreferences};

/// One-line summary used in result and bookmark lists
pub fn card(recipe: &Recipe, saved: bool) -> String {
    let marker = if saved { "♥" } else { " " };
    format!(
        "{} [{}] {} ({} min, serves {})",
        marker, recipe.id, recipe.title, recipe.ready_in_minutes, recipe.servings
    )
}

/// Full recipe view with ingredients and instructions
pub fn details(recipe: &Recipe, saved: bool) -> String {
    let mut output = String::new();
    output.push_str(&recipe.title);
    output.push('\n');
    output.push_str(&format!(
        "{} minutes · {} servings{}\n",
        recipe.ready_in_minutes,
        recipe.servings,
        if saved { " · Saved" } else { "" }
    ));

    if !recipe.source_url.is_empty() {
        output.push_str(&format!("Source: {}\n", recipe.source_url));
    }

    output.push_str("\nIngredients\n");
    for ingredient in recipe.extended_ingredients.iter().flatten() {
        output.push_str(&format!("  • {}\n", ingredient.original));
    }

    output.push_str("\nInstructions\n");
    let instructions = html_to_text(recipe.instructions.as_deref().unwrap_or_default());
    if !instructions.is_empty() {
        output.push_str(&instructions);
        output.push('\n');
    }

    output
}

pub fn preferences(prefs: &UserPreferences) -> String {
    let list = |items: &[String]| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };

    let ingredients = prefs
        .ingredients
        .iter()
        .enumerate()
        .map(|(i, ingredient)| format!("{}:{}", i, ingredient))
        .collect::<Vec<_>>();

    format!(
        "Mood: {}\nIngredients: {}\nDietary: {}",
        if prefs.mood.is_empty() { "-" } else { prefs.mood.as_str() },
        list(&ingredients),
        list(&prefs.dietary)
    )
}

/// Collapse HTML markup into whitespace-normalised text.
fn html_to_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    fragment
        .root_element()
        .text()
        .flat_map(|chunk| chunk.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExtendedIngredient;

    #[test]
    fn test_card() {
        let recipe = Recipe {
            id: 9,
            title: "Pho".to_string(),
            ready_in_minutes: 50,
            servings: 3,
            ..Default::default()
        };
        assert_eq!(card(&recipe, false), "  [9] Pho (50 min, serves 3)");
        assert!(card(&recipe, true).starts_with('♥'));
    }

    #[test]
    fn test_details_strips_markup() {
        let recipe = Recipe {
            id: 1,
            title: "Soup".to_string(),
            instructions: Some("<ol><li>Chop &amp; fry</li><li>Simmer</li></ol>".to_string()),
            extended_ingredients: Some(vec![ExtendedIngredient {
                original: "2 leeks".to_string(),
                amount: 2.0,
                unit: String::new(),
            }]),
            ..Default::default()
        };

        let text = details(&recipe, true);
        assert!(text.contains("Saved"));
        assert!(text.contains("• 2 leeks"));
        assert!(text.contains("Chop & fry Simmer"));
        assert!(!text.contains("<li>"));
    }

    #[test]
    fn test_details_without_optional_fields() {
        let recipe = Recipe {
            id: 1,
            title: "Plain".to_string(),
            ..Default::default()
        };
        let text = details(&recipe, false);
        assert!(text.contains("Ingredients"));
        assert!(!text.contains("Source:"));
    }

    #[test]
    fn test_preferences_summary() {
        let prefs = UserPreferences {
            mood: "Cozy".to_string(),
            ingredients: vec!["egg".to_string(), "rice".to_string()],
            dietary: vec![],
        };
        assert_eq!(
            preferences(&prefs),
            "Mood: Cozy\nIngredients: 0:egg, 1:rice\nDietary: -"
        );
    }
}
