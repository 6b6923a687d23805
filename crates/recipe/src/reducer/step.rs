use im::Vector;
use sous_shared::catalog::ValidPreparation;

use super::{selection_not_found, step_mut};
use crate::derive::{available_instruments_up_to, available_products_up_to};
use crate::error::{BuilderError, BuilderResult, ItemKind};
use crate::state::{RecipeBuilderState, Step, StepProduct};

/// Appends an empty step whose caches already offer the products of the steps
/// before it.
pub(super) fn add(state: &mut RecipeBuilderState) -> BuilderResult<()> {
    let step_index = state.recipe.steps.len();
    let mut step = Step::default();
    step.helper.ingredient_suggestions =
        Vector::from(available_products_up_to(&state.recipe, step_index));
    step.helper.instrument_suggestions =
        Vector::from(available_instruments_up_to(&state.recipe, step_index));

    state.recipe.steps.push_back(step);

    Ok(())
}

/// Drops the step with its helper. Later steps keep their product
/// back-references as they are, even when these now point at a shifted or
/// missing step.
pub(super) fn remove(state: &mut RecipeBuilderState, step_index: usize) -> BuilderResult<()> {
    if step_index >= state.recipe.steps.len() {
        return Err(BuilderError::StepNotFound { step_index });
    }

    state.recipe.steps.remove(step_index);

    Ok(())
}

pub(super) fn toggle_show(state: &mut RecipeBuilderState, step_index: usize) -> BuilderResult<()> {
    let step = step_mut(state, step_index)?;
    step.helper.show = !step.helper.show;

    Ok(())
}

pub(super) fn toggle_optional(
    state: &mut RecipeBuilderState,
    step_index: usize,
) -> BuilderResult<()> {
    let step = step_mut(state, step_index)?;
    step.optional = !step.optional;

    Ok(())
}

pub(super) fn update_notes(
    state: &mut RecipeBuilderState,
    step_index: usize,
    notes: String,
) -> BuilderResult<()> {
    step_mut(state, step_index)?.notes = notes;

    Ok(())
}

pub(super) fn update_preparation_query(
    state: &mut RecipeBuilderState,
    step_index: usize,
    query: String,
) -> BuilderResult<()> {
    step_mut(state, step_index)?.helper.preparation_query = query;

    Ok(())
}

pub(super) fn update_preparation_suggestions(
    state: &mut RecipeBuilderState,
    step_index: usize,
    results: Vec<ValidPreparation>,
) -> BuilderResult<()> {
    step_mut(state, step_index)?.helper.preparation_suggestions = Vector::from(results);

    Ok(())
}

/// Everything in a step hangs off its preparation, so picking another one
/// starts the step over: ingredients, instruments and completion conditions
/// are dropped and the products go back to a single blank one.
pub(super) fn update_preparation(
    state: &mut RecipeBuilderState,
    step_index: usize,
    preparation_name: String,
) -> BuilderResult<()> {
    let available_products = available_products_up_to(&state.recipe, step_index);
    let available_instruments = available_instruments_up_to(&state.recipe, step_index);

    let step = step_mut(state, step_index)?;
    let preparation = step
        .helper
        .preparation_suggestions
        .iter()
        .find(|preparation| preparation.name == preparation_name)
        .cloned()
        .ok_or_else(|| selection_not_found(ItemKind::Preparation, &preparation_name))?;

    step.helper.preparation_query = preparation.name.clone();
    step.helper.ingredient_query.clear();
    step.helper.ingredient_suggestions = Vector::from(available_products);
    step.helper.instrument_suggestions = Vector::from(available_instruments);

    step.preparation = Some(preparation);
    step.ingredients.clear();
    step.instruments.clear();
    step.completion_conditions.clear();
    step.products = Vector::unit(StepProduct::default());

    Ok(())
}

fn check_temperature(temperature: Option<f32>) -> BuilderResult<()> {
    match temperature {
        Some(value) if !value.is_finite() => Err(BuilderError::InvalidQuantity(value)),
        _ => Ok(()),
    }
}

pub(super) fn update_minimum_temperature(
    state: &mut RecipeBuilderState,
    step_index: usize,
    temperature: Option<f32>,
) -> BuilderResult<()> {
    check_temperature(temperature)?;
    step_mut(state, step_index)?
        .temperature_in_celsius
        .set_minimum(temperature);

    Ok(())
}

pub(super) fn update_maximum_temperature(
    state: &mut RecipeBuilderState,
    step_index: usize,
    temperature: Option<f32>,
) -> BuilderResult<()> {
    check_temperature(temperature)?;
    step_mut(state, step_index)?
        .temperature_in_celsius
        .set_maximum(temperature);

    Ok(())
}

pub(super) fn update_minimum_estimated_time(
    state: &mut RecipeBuilderState,
    step_index: usize,
    seconds: Option<u32>,
) -> BuilderResult<()> {
    step_mut(state, step_index)?
        .estimated_time_in_seconds
        .set_minimum(seconds);

    Ok(())
}

pub(super) fn update_maximum_estimated_time(
    state: &mut RecipeBuilderState,
    step_index: usize,
    seconds: Option<u32>,
) -> BuilderResult<()> {
    step_mut(state, step_index)?
        .estimated_time_in_seconds
        .set_maximum(seconds);

    Ok(())
}
