//! Mood labels and the search filter each one maps to.

/// Moods offered to the user, in display order
pub const MOODS: [&str; 5] = ["Happy", "Energetic", "Cozy", "Stressed", "Relaxed"];

/// Dietary tags offered to the user
pub const DIETARY_OPTIONS: [&str; 5] = ["Vegetarian", "Vegan", "Gluten-Free", "Dairy-Free", "Keto"];

/// Extra search filter contributed by a mood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodFilter {
    Cuisine(&'static str),
    MealType(&'static str),
}

impl MoodFilter {
    /// Query parameter name used by the recipe service
    pub fn param_name(&self) -> &'static str {
        match self {
            MoodFilter::Cuisine(_) => "cuisine",
            MoodFilter::MealType(_) => "type",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            MoodFilter::Cuisine(value) | MoodFilter::MealType(value) => value,
        }
    }
}

// Keys are lower-case
const MOOD_TABLE: [(&str, MoodFilter); 5] = [
    ("happy", MoodFilter::Cuisine("mediterranean")),
    ("energetic", MoodFilter::MealType("main course")),
    ("cozy", MoodFilter::MealType("soup")),
    ("stressed", MoodFilter::MealType("snack")),
    ("relaxed", MoodFilter::Cuisine("italian")),
];

/// Look up the filter for a mood, ignoring case and surrounding whitespace.
///
/// Unknown and empty moods map to nothing.
pub fn lookup(mood: &str) -> Option<MoodFilter> {
    let key = mood.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }

    MOOD_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, filter)| *filter)
}
