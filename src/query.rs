use urlencoding::encode as urlencode;

use crate::model::UserPreferences;
use crate::mood;

/// Number of recipes requested when nothing else is configured
pub const DEFAULT_RESULT_COUNT: u32 = 6;

/// Ordered search parameters for the recipe service's complex search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    params: Vec<(String, String)>,
}

impl SearchQuery {
    fn push(&mut self, name: &str, value: impl Into<String>) {
        self.params.push((name.to_string(), value.into()));
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// First value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// URL-encoded `key=value&...` form, for diagnostics
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{}={}", urlencode(key), urlencode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Translate preferences into search parameters.
///
/// Always carries the result count and the full-information flag; the
/// ingredient, diet and mood filters are added only when set.
pub fn build_query(preferences: &UserPreferences, count: u32) -> SearchQuery {
    let mut query = SearchQuery::default();
    query.push("number", count.to_string());
    query.push("addRecipeInformation", "true");

    if !preferences.ingredients.is_empty() {
        query.push("includeIngredients", preferences.ingredients.join(","));
    }

    if !preferences.dietary.is_empty() {
        query.push("diet", preferences.dietary.join(","));
    }

    if let Some(filter) = mood::lookup(&preferences.mood) {
        query.push(filter.param_name(), filter.value());
    }

    query
}
