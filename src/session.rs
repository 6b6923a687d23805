use serde::{Deserialize, Serialize};
use sous_recipe::{Action, RecipeBuilderState, reduce, reduce_json};
use sous_shared::provider::SuggestionProvider;

/// An autocomplete lookup the host runs on behalf of the builder page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "search", rename_all = "snake_case")]
pub enum SearchRequest {
    Preparations {
        step_index: usize,
        query: String,
    },
    Ingredients {
        step_index: usize,
        query: String,
    },
    Instruments {
        step_index: usize,
    },
    IngredientMeasurementUnits {
        step_index: usize,
        ingredient_index: usize,
        query: String,
    },
    ProductMeasurementUnits {
        step_index: usize,
        product_index: usize,
        query: String,
    },
    IngredientStates {
        step_index: usize,
        condition_index: usize,
        query: String,
    },
}

impl SearchRequest {
    /// The edit recording what the user typed, applied before the lookup starts.
    pub fn query_action(&self) -> Option<Action> {
        let action = match self {
            SearchRequest::Preparations { step_index, query } => {
                Action::UpdateStepPreparationQuery {
                    step_index: *step_index,
                    query: query.clone(),
                }
            }
            SearchRequest::Ingredients { step_index, query } => Action::UpdateStepIngredientQuery {
                step_index: *step_index,
                query: query.clone(),
            },
            SearchRequest::Instruments { .. } => return None,
            SearchRequest::IngredientMeasurementUnits {
                step_index,
                ingredient_index,
                query,
            } => Action::UpdateIngredientMeasurementUnitQuery {
                step_index: *step_index,
                ingredient_index: *ingredient_index,
                query: query.clone(),
            },
            SearchRequest::ProductMeasurementUnits {
                step_index,
                product_index,
                query,
            } => Action::UpdateProductMeasurementUnitQuery {
                step_index: *step_index,
                product_index: *product_index,
                query: query.clone(),
            },
            SearchRequest::IngredientStates {
                step_index,
                condition_index,
                query,
            } => Action::UpdateCompletionConditionIngredientStateQuery {
                step_index: *step_index,
                condition_index: *condition_index,
                query: query.clone(),
            },
        };

        Some(action)
    }
}

/// Owns the builder state of one editing session and feeds it suggestions.
///
/// Lookups are awaited outside the reducer; their results come back as
/// ordinary actions, so a response for a step removed in the meantime is
/// rejected like any other stale index.
pub struct Session<P> {
    state: RecipeBuilderState,
    provider: P,
}

impl<P: SuggestionProvider> Session<P> {
    pub fn new(provider: P) -> Self {
        Self::with_state(provider, RecipeBuilderState::new())
    }

    pub fn with_state(provider: P, state: RecipeBuilderState) -> Self {
        Self { state, provider }
    }

    pub fn state(&self) -> &RecipeBuilderState {
        &self.state
    }

    pub fn into_state(self) -> RecipeBuilderState {
        self.state
    }

    pub fn dispatch(&mut self, action: Action) -> &RecipeBuilderState {
        self.state = reduce(&self.state, action);

        &self.state
    }

    pub fn dispatch_json(&mut self, value: &serde_json::Value) -> &RecipeBuilderState {
        self.state = reduce_json(&self.state, value);

        &self.state
    }

    /// Runs the lookup against the current state and returns the action that
    /// stores its results. Nothing is dispatched.
    pub async fn suggestions_for(&self, request: &SearchRequest) -> sous_shared::Result<Action> {
        let action = match request {
            SearchRequest::Preparations { step_index, query } => {
                Action::UpdateStepPreparationSuggestions {
                    step_index: *step_index,
                    results: self.provider.preparations(query).await?,
                }
            }
            SearchRequest::Ingredients { step_index, query } => {
                Action::UpdateStepIngredientSuggestions {
                    step_index: *step_index,
                    results: self.provider.ingredients(query).await?,
                }
            }
            SearchRequest::Instruments { step_index } => {
                let Some(preparation) = self
                    .state
                    .step(*step_index)
                    .and_then(|step| step.preparation.clone())
                else {
                    sous_shared::not_found!(format!("preparation of step {step_index}"));
                };

                Action::UpdateStepInstrumentSuggestions {
                    step_index: *step_index,
                    results: self.provider.instruments_for(&preparation).await?,
                }
            }
            SearchRequest::IngredientMeasurementUnits {
                step_index,
                ingredient_index,
                query,
            } => Action::UpdateIngredientMeasurementUnitSuggestions {
                step_index: *step_index,
                ingredient_index: *ingredient_index,
                results: self.provider.measurement_units(query).await?,
            },
            SearchRequest::ProductMeasurementUnits {
                step_index,
                product_index,
                query,
            } => Action::UpdateProductMeasurementUnitSuggestions {
                step_index: *step_index,
                product_index: *product_index,
                results: self.provider.measurement_units(query).await?,
            },
            SearchRequest::IngredientStates {
                step_index,
                condition_index,
                query,
            } => Action::UpdateCompletionConditionIngredientStateSuggestions {
                step_index: *step_index,
                condition_index: *condition_index,
                results: self.provider.ingredient_states(query).await?,
            },
        };

        Ok(action)
    }

    /// Records the query, awaits the provider and stores the results. A failed
    /// lookup is logged and leaves the previous suggestions in place.
    #[tracing::instrument(skip(self))]
    pub async fn search(&mut self, request: SearchRequest) -> &RecipeBuilderState {
        if let Some(action) = request.query_action() {
            self.dispatch(action);
        }

        match self.suggestions_for(&request).await {
            Ok(action) => self.dispatch(action),
            Err(err) => {
                tracing::error!(error = %err, "suggestion lookup failed");
                &self.state
            }
        }
    }
}
