use serde::{Deserialize, Serialize};

/// A recipe as returned by the recipe service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub source_url: String,
    /// HTML markup
    #[serde(default)]
    pub summary: String,
    /// HTML markup, only present on detailed recipes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_ingredients: Option<Vec<ExtendedIngredient>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedIngredient {
    /// Free-text description, e.g. "2 cups of rice"
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

/// What the user asked for: a mood, what is in the pantry and dietary tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Empty when no mood is selected
    pub mood: String,
    pub ingredients: Vec<String>,
    pub dietary: Vec<String>,
}

/// A partial update to [`UserPreferences`]
///
/// Every field that is `Some` replaces the matching preference wholesale;
/// `None` fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub mood: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub dietary: Option<Vec<String>>,
}

impl PreferencesPatch {
    pub fn mood(mood: impl Into<String>) -> Self {
        Self::default().with_mood(mood)
    }

    pub fn ingredients(ingredients: Vec<String>) -> Self {
        Self::default().with_ingredients(ingredients)
    }

    pub fn dietary(dietary: Vec<String>) -> Self {
        Self::default().with_dietary(dietary)
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = Some(ingredients);
        self
    }

    pub fn with_dietary(mut self, dietary: Vec<String>) -> Self {
        self.dietary = Some(dietary);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.mood.is_none() && self.ingredients.is_none() && self.dietary.is_none()
    }
}

impl UserPreferences {
    /// Shallow merge: each field present in the patch replaces ours.
    pub fn apply(&mut self, patch: PreferencesPatch) {
        if let Some(mood) = patch.mood {
            self.mood = mood;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(dietary) = patch.dietary {
            self.dietary = dietary;
        }
    }
}
