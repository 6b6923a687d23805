use im::Vector;
use sous_shared::catalog::{ValidIngredient, ValidMeasurementUnit, matches_query};

use super::{item_mut, remove_item, selection_not_found, step_mut};
use crate::derive::{
    available_products_up_to, ingredient_product_open, products_consumed_anywhere,
    refresh_product_name,
};
use crate::error::{BuilderError, BuilderResult, ItemKind};
use crate::state::{IngredientSuggestion, RecipeBuilderState, StepIngredient};

fn ingredient_mut(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_index: usize,
) -> BuilderResult<&mut StepIngredient> {
    let step = step_mut(state, step_index)?;

    item_mut(
        &mut step.ingredients,
        ItemKind::Ingredient,
        step_index,
        ingredient_index,
    )
}

pub(super) fn update_query(
    state: &mut RecipeBuilderState,
    step_index: usize,
    query: String,
) -> BuilderResult<()> {
    step_mut(state, step_index)?.helper.ingredient_query = query;

    Ok(())
}

/// Earlier products matching the current query come first, then the catalog
/// results. Products already taken by any step are left out.
pub(super) fn update_suggestions(
    state: &mut RecipeBuilderState,
    step_index: usize,
    results: Vec<ValidIngredient>,
) -> BuilderResult<()> {
    let consumed = products_consumed_anywhere(&state.recipe);
    let available = available_products_up_to(&state.recipe, step_index);

    let step = step_mut(state, step_index)?;
    let query = step.helper.ingredient_query.clone();

    step.helper.ingredient_suggestions = available
        .into_iter()
        .filter(|suggestion| {
            suggestion
                .source
                .product_ref()
                .is_none_or(|product| !consumed.contains(&product))
        })
        .filter(|suggestion| matches_query(&suggestion.name, &query))
        .chain(results.into_iter().map(IngredientSuggestion::from))
        .collect();

    Ok(())
}

pub(super) fn add(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_name: String,
) -> BuilderResult<()> {
    let suggestion = step_mut(state, step_index)?
        .helper
        .ingredient_suggestions
        .iter()
        .find(|suggestion| suggestion.name == ingredient_name)
        .cloned()
        .ok_or_else(|| selection_not_found(ItemKind::Ingredient, &ingredient_name))?;

    if let Some(product) = suggestion.source.product_ref() {
        if !ingredient_product_open(&state.recipe, step_index, product) {
            return Err(selection_not_found(ItemKind::Ingredient, &ingredient_name));
        }
    }

    let step = step_mut(state, step_index)?;
    step.ingredients.push_back(StepIngredient::from(suggestion));
    step.helper.ingredient_query.clear();
    step.helper.ingredient_suggestions.clear();
    refresh_product_name(step);

    Ok(())
}

pub(super) fn remove(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_index: usize,
) -> BuilderResult<()> {
    let step = step_mut(state, step_index)?;
    remove_item(
        &mut step.ingredients,
        ItemKind::Ingredient,
        step_index,
        ingredient_index,
    )?;
    refresh_product_name(step);

    Ok(())
}

pub(super) fn toggle_range(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_index: usize,
) -> BuilderResult<()> {
    let ingredient = ingredient_mut(state, step_index, ingredient_index)?;
    ingredient.is_ranged = !ingredient.is_ranged;

    Ok(())
}

pub(super) fn toggle_optional(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_index: usize,
) -> BuilderResult<()> {
    let ingredient = ingredient_mut(state, step_index, ingredient_index)?;
    ingredient.optional = !ingredient.optional;

    Ok(())
}

pub(super) fn update_minimum_quantity(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_index: usize,
    quantity: f32,
) -> BuilderResult<()> {
    ingredient_mut(state, step_index, ingredient_index)?
        .quantity
        .set_minimum(quantity)
}

pub(super) fn update_maximum_quantity(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_index: usize,
    quantity: f32,
) -> BuilderResult<()> {
    ingredient_mut(state, step_index, ingredient_index)?
        .quantity
        .set_maximum(quantity)
}

pub(super) fn update_measurement_unit_query(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_index: usize,
    query: String,
) -> BuilderResult<()> {
    ingredient_mut(state, step_index, ingredient_index)?.measurement_unit_query = query;

    Ok(())
}

pub(super) fn update_measurement_unit_suggestions(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_index: usize,
    results: Vec<ValidMeasurementUnit>,
) -> BuilderResult<()> {
    ingredient_mut(state, step_index, ingredient_index)?.measurement_unit_suggestions =
        Vector::from(results);

    Ok(())
}

pub(super) fn update_measurement_unit(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_index: usize,
    measurement_unit: Option<ValidMeasurementUnit>,
) -> BuilderResult<()> {
    let measurement_unit =
        measurement_unit.ok_or(BuilderError::MissingValue(ItemKind::MeasurementUnit))?;

    let ingredient = ingredient_mut(state, step_index, ingredient_index)?;
    ingredient.measurement_unit_query = measurement_unit.name.clone();
    ingredient.measurement_unit = Some(measurement_unit);

    Ok(())
}

pub(super) fn update_quantity_notes(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_index: usize,
    notes: String,
) -> BuilderResult<()> {
    ingredient_mut(state, step_index, ingredient_index)?.quantity_notes = notes;

    Ok(())
}

pub(super) fn update_notes(
    state: &mut RecipeBuilderState,
    step_index: usize,
    ingredient_index: usize,
    notes: String,
) -> BuilderResult<()> {
    ingredient_mut(state, step_index, ingredient_index)?.ingredient_notes = notes;

    Ok(())
}
