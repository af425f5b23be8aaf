use log::{error, info, warn};

use crate::client::RecipeSource;
use crate::model::Recipe;
use crate::query::{build_query, DEFAULT_RESULT_COUNT};
use crate::store::RecipeStore;

/// Drives one user session: owns the store, the recipe source, the results
/// of the last search and the last recipe opened in full.
///
/// Failures talking to the recipe service are logged and never reach the
/// store: a failed search leaves the previous results in place and a failed
/// detail lookup yields no recipe.
pub struct Session<S: RecipeSource> {
    store: RecipeStore,
    source: S,
    results: Vec<Recipe>,
    last_details: Option<Recipe>,
    result_count: u32,
}

impl<S: RecipeSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self::with_result_count(source, DEFAULT_RESULT_COUNT)
    }

    pub fn with_result_count(source: S, result_count: u32) -> Self {
        Session {
            store: RecipeStore::new(),
            source,
            results: Vec::new(),
            last_details: None,
            result_count,
        }
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecipeStore {
        &mut self.store
    }

    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    /// Search with the current preferences.
    ///
    /// On success the results are replaced; on failure the previous results
    /// are kept.
    pub async fn search(&mut self) -> &[Recipe] {
        let query = build_query(self.store.preferences(), self.result_count);

        match self.source.search(&query).await {
            Ok(recipes) => {
                info!("Found {} recipe(s)", recipes.len());
                self.results = recipes;
            }
            Err(e) => error!("Error fetching recipes: {}", e),
        }

        &self.results
    }

    /// Fetch the full recipe; `None` if the service could not provide it.
    ///
    /// The fetched recipe is remembered so it can be saved afterwards.
    pub async fn recipe_details(&mut self, id: u64) -> Option<Recipe> {
        match self.source.recipe_details(id).await {
            Ok(recipe) => {
                self.last_details = Some(recipe.clone());
                Some(recipe)
            }
            Err(e) => {
                error!("Error fetching recipe details: {}", e);
                None
            }
        }
    }

    /// Toggle the bookmark for a recipe the user has seen: the last opened
    /// recipe, the last results or the saved list, in that order.
    ///
    /// Returns the new saved state, or `None` if the id is in none of them.
    pub fn toggle_saved(&mut self, id: u64) -> Option<bool> {
        let recipe = self
            .last_details
            .iter()
            .chain(&self.results)
            .chain(self.store.saved_recipes())
            .find(|recipe| recipe.id == id)
            .cloned();

        match recipe {
            Some(recipe) => Some(self.store.toggle_saved(recipe)),
            None => {
                warn!("Recipe {} has not been opened, found or saved", id);
                None
            }
        }
    }

    pub fn saved_summary(&self) -> String {
        match self.store.saved_recipes().len() {
            0 => "You haven't saved any recipes yet".to_string(),
            1 => "You have 1 saved recipe".to_string(),
            n => format!("You have {} saved recipes", n),
        }
    }
}
