//! Session state: the user's search preferences and their bookmarked recipes.
//!
//! The store is owned by whoever drives the session and is mutated only
//! through the operations below. Every mutation notifies subscribers
//! synchronously, after the state has changed.

use log::{debug, trace};

use crate::model::{PreferencesPatch, Recipe, UserPreferences};

/// What changed in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    PreferencesUpdated,
    SavedRecipesChanged,
}

/// Handle returned by [`RecipeStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(StoreEvent)>;

#[derive(Default)]
pub struct RecipeStore {
    preferences: UserPreferences,
    saved: Vec<Recipe>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for RecipeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeStore")
            .field("preferences", &self.preferences)
            .field("saved", &self.saved)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Merge `patch` into the current preferences, replacing each named field.
    pub fn update_preferences(&mut self, patch: PreferencesPatch) {
        debug!("Updating preferences with {:?}", patch);
        self.preferences.apply(patch);
        self.notify(StoreEvent::PreferencesUpdated);
    }

    /// Bookmark a recipe. A recipe whose id is already saved is not added again.
    pub fn add_recipe(&mut self, recipe: Recipe) {
        if self.is_saved(recipe.id) {
            debug!("Recipe {} already saved", recipe.id);
        } else {
            debug!("Saving recipe {} ({})", recipe.id, recipe.title);
            self.saved.push(recipe);
        }
        self.notify(StoreEvent::SavedRecipesChanged);
    }

    /// Drop every saved recipe with this id. Unknown ids are ignored.
    pub fn remove_recipe(&mut self, id: u64) {
        let before = self.saved.len();
        self.saved.retain(|recipe| recipe.id != id);
        debug!("Removed {} saved recipe(s) with id {}", before - self.saved.len(), id);
        self.notify(StoreEvent::SavedRecipesChanged);
    }

    pub fn saved_recipes(&self) -> &[Recipe] {
        &self.saved
    }

    pub fn is_saved(&self, id: u64) -> bool {
        self.saved.iter().any(|recipe| recipe.id == id)
    }

    /// Save the recipe if it is not bookmarked yet, otherwise unsave it.
    ///
    /// Returns whether the recipe is saved afterwards.
    pub fn toggle_saved(&mut self, recipe: Recipe) -> bool {
        if self.is_saved(recipe.id) {
            self.remove_recipe(recipe.id);
            false
        } else {
            self.add_recipe(recipe);
            true
        }
    }

    pub fn set_mood(&mut self, mood: impl Into<String>) {
        self.update_preferences(PreferencesPatch::mood(mood));
    }

    /// Append a pantry ingredient. Blank input is ignored.
    pub fn add_ingredient(&mut self, ingredient: &str) {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            return;
        }

        let mut ingredients = self.preferences.ingredients.clone();
        ingredients.push(ingredient.to_string());
        self.update_preferences(PreferencesPatch::ingredients(ingredients));
    }

    /// Remove the ingredient shown at `index`. Out-of-range indexes are ignored.
    pub fn remove_ingredient(&mut self, index: usize) {
        if index >= self.preferences.ingredients.len() {
            return;
        }

        let ingredients = self
            .preferences
            .ingredients
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, ingredient)| ingredient.clone())
            .collect();
        self.update_preferences(PreferencesPatch::ingredients(ingredients));
    }

    /// Select a dietary tag, or deselect it if it is already selected.
    pub fn toggle_dietary(&mut self, tag: &str) {
        let dietary = if self.preferences.dietary.iter().any(|d| d == tag) {
            self.preferences
                .dietary
                .iter()
                .filter(|d| *d != tag)
                .cloned()
                .collect()
        } else {
            let mut dietary = self.preferences.dietary.clone();
            dietary.push(tag.to_string());
            dietary
        };
        self.update_preferences(PreferencesPatch::dietary(dietary));
    }

    pub fn subscribe(&mut self, listener: impl FnMut(StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        trace!("Notifying {} listener(s) of {:?}", self.listeners.len(), event);
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}
