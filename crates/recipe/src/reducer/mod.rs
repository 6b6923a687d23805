use im::Vector;

use crate::action::Action;
use crate::error::{BuilderError, BuilderResult, ItemKind};
use crate::state::{RecipeBuilderState, Step};

mod completion;
mod ingredient;
mod instrument;
mod product;
mod recipe;
mod step;

/// Applies `action` to `state` and returns the next state.
///
/// The previous state is never modified. A rejected action (stale index,
/// selection missing from the suggestions, absent value) is logged and the
/// previous state comes back unchanged.
pub fn reduce(state: &RecipeBuilderState, action: Action) -> RecipeBuilderState {
    let kind = action.kind();

    match try_reduce(state, action) {
        Ok(next) => {
            tracing::debug!(action = kind, "builder action applied");
            next
        }
        Err(err) => {
            tracing::warn!(action = kind, error = %err, "builder action rejected");
            state.clone()
        }
    }
}

/// Same transition as [`reduce`], handing the rejection back instead of
/// logging it.
pub fn try_reduce(state: &RecipeBuilderState, action: Action) -> BuilderResult<RecipeBuilderState> {
    let mut next = state.clone();
    apply(&mut next, action)?;
    next.submission_allowed = next.can_submit();

    Ok(next)
}

/// Decodes a tagged JSON action and applies it. Unknown tags and malformed
/// payloads leave the state unchanged.
pub fn reduce_json(state: &RecipeBuilderState, value: &serde_json::Value) -> RecipeBuilderState {
    match Action::from_value(value) {
        Ok(action) => reduce(state, action),
        Err(err) => {
            tracing::warn!(error = %err, "builder action ignored");
            state.clone()
        }
    }
}

fn apply(state: &mut RecipeBuilderState, action: Action) -> BuilderResult<()> {
    match action {
        Action::UpdateName { name } => recipe::update_name(state, name),
        Action::UpdateSlug { slug } => recipe::update_slug(state, slug),
        Action::UpdateDescription { description } => {
            recipe::update_description(state, description)
        }
        Action::UpdateSource { source } => recipe::update_source(state, source),
        Action::UpdateYieldsPortions { portions } => {
            recipe::update_yields_portions(state, portions)
        }
        Action::UpdateSubmissionError { error } => recipe::update_submission_error(state, error),
        Action::ToggleShowIngredientsSummary => recipe::toggle_show_ingredients_summary(state),
        Action::ToggleShowInstrumentsSummary => recipe::toggle_show_instruments_summary(state),
        Action::ToggleShowAdvancedPrepInputs => recipe::toggle_show_advanced_prep_inputs(state),

        Action::AddStep => step::add(state),
        Action::RemoveStep { step_index } => step::remove(state, step_index),
        Action::ToggleShowStep { step_index } => step::toggle_show(state, step_index),
        Action::ToggleStepOptional { step_index } => step::toggle_optional(state, step_index),
        Action::UpdateStepNotes { step_index, notes } => {
            step::update_notes(state, step_index, notes)
        }
        Action::UpdateStepPreparationQuery { step_index, query } => {
            step::update_preparation_query(state, step_index, query)
        }
        Action::UpdateStepPreparationSuggestions {
            step_index,
            results,
        } => step::update_preparation_suggestions(state, step_index, results),
        Action::UpdateStepPreparation {
            step_index,
            preparation_name,
        } => step::update_preparation(state, step_index, preparation_name),
        Action::UpdateStepMinimumTemperature {
            step_index,
            temperature,
        } => step::update_minimum_temperature(state, step_index, temperature),
        Action::UpdateStepMaximumTemperature {
            step_index,
            temperature,
        } => step::update_maximum_temperature(state, step_index, temperature),
        Action::UpdateStepMinimumEstimatedTime {
            step_index,
            seconds,
        } => step::update_minimum_estimated_time(state, step_index, seconds),
        Action::UpdateStepMaximumEstimatedTime {
            step_index,
            seconds,
        } => step::update_maximum_estimated_time(state, step_index, seconds),

        Action::UpdateStepIngredientQuery { step_index, query } => {
            ingredient::update_query(state, step_index, query)
        }
        Action::UpdateStepIngredientSuggestions {
            step_index,
            results,
        } => ingredient::update_suggestions(state, step_index, results),
        Action::AddIngredientToStep {
            step_index,
            ingredient_name,
        } => ingredient::add(state, step_index, ingredient_name),
        Action::RemoveIngredientFromStep {
            step_index,
            ingredient_index,
        } => ingredient::remove(state, step_index, ingredient_index),
        Action::ToggleIngredientRange {
            step_index,
            ingredient_index,
        } => ingredient::toggle_range(state, step_index, ingredient_index),
        Action::ToggleIngredientOptional {
            step_index,
            ingredient_index,
        } => ingredient::toggle_optional(state, step_index, ingredient_index),
        Action::UpdateIngredientMinimumQuantity {
            step_index,
            ingredient_index,
            quantity,
        } => ingredient::update_minimum_quantity(state, step_index, ingredient_index, quantity),
        Action::UpdateIngredientMaximumQuantity {
            step_index,
            ingredient_index,
            quantity,
        } => ingredient::update_maximum_quantity(state, step_index, ingredient_index, quantity),
        Action::UpdateIngredientMeasurementUnitQuery {
            step_index,
            ingredient_index,
            query,
        } => ingredient::update_measurement_unit_query(state, step_index, ingredient_index, query),
        Action::UpdateIngredientMeasurementUnitSuggestions {
            step_index,
            ingredient_index,
            results,
        } => ingredient::update_measurement_unit_suggestions(
            state,
            step_index,
            ingredient_index,
            results,
        ),
        Action::UpdateIngredientMeasurementUnit {
            step_index,
            ingredient_index,
            measurement_unit,
        } => ingredient::update_measurement_unit(
            state,
            step_index,
            ingredient_index,
            measurement_unit,
        ),
        Action::UpdateIngredientQuantityNotes {
            step_index,
            ingredient_index,
            notes,
        } => ingredient::update_quantity_notes(state, step_index, ingredient_index, notes),
        Action::UpdateIngredientNotes {
            step_index,
            ingredient_index,
            notes,
        } => ingredient::update_notes(state, step_index, ingredient_index, notes),

        Action::UpdateStepInstrumentSuggestions {
            step_index,
            results,
        } => instrument::update_suggestions(state, step_index, results),
        Action::AddInstrumentToStep {
            step_index,
            instrument_name,
        } => instrument::add(state, step_index, instrument_name),
        Action::RemoveInstrumentFromStep {
            step_index,
            instrument_index,
        } => instrument::remove(state, step_index, instrument_index),
        Action::ToggleInstrumentRange {
            step_index,
            instrument_index,
        } => instrument::toggle_range(state, step_index, instrument_index),
        Action::ToggleInstrumentOptional {
            step_index,
            instrument_index,
        } => instrument::toggle_optional(state, step_index, instrument_index),
        Action::UpdateInstrumentMinimumQuantity {
            step_index,
            instrument_index,
            quantity,
        } => instrument::update_minimum_quantity(state, step_index, instrument_index, quantity),
        Action::UpdateInstrumentMaximumQuantity {
            step_index,
            instrument_index,
            quantity,
        } => instrument::update_maximum_quantity(state, step_index, instrument_index, quantity),
        Action::UpdateInstrumentNotes {
            step_index,
            instrument_index,
            notes,
        } => instrument::update_notes(state, step_index, instrument_index, notes),

        Action::AddProductToStep { step_index } => product::add(state, step_index),
        Action::RemoveProductFromStep {
            step_index,
            product_index,
        } => product::remove(state, step_index, product_index),
        Action::UpdateProductName {
            step_index,
            product_index,
            name,
        } => product::update_name(state, step_index, product_index, name),
        Action::UpdateProductKind {
            step_index,
            product_index,
            kind,
        } => product::update_kind(state, step_index, product_index, kind),
        Action::ToggleProductRange {
            step_index,
            product_index,
        } => product::toggle_range(state, step_index, product_index),
        Action::ToggleManualProductNaming {
            step_index,
            product_index,
        } => product::toggle_manual_naming(state, step_index, product_index),
        Action::UpdateProductMinimumQuantity {
            step_index,
            product_index,
            quantity,
        } => product::update_minimum_quantity(state, step_index, product_index, quantity),
        Action::UpdateProductMaximumQuantity {
            step_index,
            product_index,
            quantity,
        } => product::update_maximum_quantity(state, step_index, product_index, quantity),
        Action::UpdateProductMeasurementUnitQuery {
            step_index,
            product_index,
            query,
        } => product::update_measurement_unit_query(state, step_index, product_index, query),
        Action::UpdateProductMeasurementUnitSuggestions {
            step_index,
            product_index,
            results,
        } => product::update_measurement_unit_suggestions(state, step_index, product_index, results),
        Action::UpdateProductMeasurementUnit {
            step_index,
            product_index,
            measurement_unit,
        } => product::update_measurement_unit(state, step_index, product_index, measurement_unit),
        Action::UpdateProductQuantityNotes {
            step_index,
            product_index,
            notes,
        } => product::update_quantity_notes(state, step_index, product_index, notes),

        Action::AddCompletionConditionToStep { step_index } => completion::add(state, step_index),
        Action::RemoveCompletionConditionFromStep {
            step_index,
            condition_index,
        } => completion::remove(state, step_index, condition_index),
        Action::UpdateCompletionConditionIngredientStateQuery {
            step_index,
            condition_index,
            query,
        } => completion::update_ingredient_state_query(state, step_index, condition_index, query),
        Action::UpdateCompletionConditionIngredientStateSuggestions {
            step_index,
            condition_index,
            results,
        } => completion::update_ingredient_state_suggestions(
            state,
            step_index,
            condition_index,
            results,
        ),
        Action::UpdateCompletionConditionIngredientState {
            step_index,
            condition_index,
            ingredient_state,
        } => completion::update_ingredient_state(
            state,
            step_index,
            condition_index,
            ingredient_state,
        ),
        Action::UpdateCompletionConditionNotes {
            step_index,
            condition_index,
            notes,
        } => completion::update_notes(state, step_index, condition_index, notes),
        Action::ToggleCompletionConditionOptional {
            step_index,
            condition_index,
        } => completion::toggle_optional(state, step_index, condition_index),
    }
}

fn step_mut(state: &mut RecipeBuilderState, step_index: usize) -> BuilderResult<&mut Step> {
    state
        .recipe
        .steps
        .get_mut(step_index)
        .ok_or(BuilderError::StepNotFound { step_index })
}

fn item_mut<T: Clone>(
    items: &mut Vector<T>,
    kind: ItemKind,
    step_index: usize,
    index: usize,
) -> BuilderResult<&mut T> {
    items.get_mut(index).ok_or(BuilderError::ItemNotFound {
        kind,
        step_index,
        index,
    })
}

fn remove_item<T: Clone>(
    items: &mut Vector<T>,
    kind: ItemKind,
    step_index: usize,
    index: usize,
) -> BuilderResult<T> {
    if index >= items.len() {
        return Err(BuilderError::ItemNotFound {
            kind,
            step_index,
            index,
        });
    }

    Ok(items.remove(index))
}

fn selection_not_found(kind: ItemKind, name: &str) -> BuilderError {
    BuilderError::SelectionNotFound {
        kind,
        name: name.to_owned(),
    }
}
