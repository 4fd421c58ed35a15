//! Address autocomplete state.
//!
//! Every input change takes a new generation number. A response is applied only
//! if its generation is still current, so a slow answer for an older input can
//! never overwrite the suggestions for a newer one.

use std::sync::{Mutex, MutexGuard, PoisonError};

use storefront_domain::place::{Prediction, is_autocomplete_query};

use crate::error::ClientError;

/// Source of address predictions.
#[allow(async_fn_in_trait)]
pub trait PlaceSuggester: Send + Sync {
    async fn suggest(&self, input: &str) -> Result<Vec<Prediction>, ClientError>;
}

#[derive(Default)]
struct AutocompleteState {
    input: String,
    suggestions: Vec<Prediction>,
    generation: u64,
}

type SelectCallback = Box<dyn Fn(&Prediction) + Send + Sync>;

pub struct AddressAutocomplete<S: PlaceSuggester> {
    suggester: S,
    state: Mutex<AutocompleteState>,
    on_select: SelectCallback,
}

impl<S: PlaceSuggester> AddressAutocomplete<S> {
    /// `on_select` receives every prediction the user picks.
    pub fn new(suggester: S, on_select: impl Fn(&Prediction) + Send + Sync + 'static) -> Self {
        Self {
            suggester,
            state: Mutex::new(AutocompleteState::default()),
            on_select: Box::new(on_select),
        }
    }

    fn state(&self) -> MutexGuard<'_, AutocompleteState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn input(&self) -> String {
        self.state().input.clone()
    }

    pub fn suggestions(&self) -> Vec<Prediction> {
        self.state().suggestions.clone()
    }

    /// Record the new input text and refresh the suggestions for it.
    pub async fn on_input(&self, text: impl Into<String>) {
        let text = text.into();
        let generation = {
            let mut state = self.state();
            state.generation += 1;
            state.input.clone_from(&text);
            if !is_autocomplete_query(&text) {
                state.suggestions.clear();
                return;
            }
            state.generation
        };

        let result = self.suggester.suggest(&text).await;

        let mut state = self.state();
        if state.generation != generation {
            tracing::debug!(generation, current = state.generation, "discarding stale suggestions");
            return;
        }
        state.suggestions = match result {
            Ok(predictions) => predictions,
            Err(err) => {
                tracing::warn!(error = %err, "address autocomplete failed");
                Vec::new()
            }
        };
    }

    /// Accept `prediction`: it replaces the input and closes the suggestion list.
    pub fn select(&self, prediction: Prediction) {
        {
            let mut state = self.state();
            state.generation += 1;
            state.input.clone_from(&prediction.description);
            state.suggestions.clear();
        }
        (self.on_select)(&prediction);
    }
}
