use im::Vector;
use sous_shared::catalog::ValidIngredientState;

use super::{item_mut, remove_item, step_mut};
use crate::error::{BuilderError, BuilderResult, ItemKind};
use crate::state::{CompletionCondition, RecipeBuilderState};

fn condition_mut(
    state: &mut RecipeBuilderState,
    step_index: usize,
    condition_index: usize,
) -> BuilderResult<&mut CompletionCondition> {
    let step = step_mut(state, step_index)?;

    item_mut(
        &mut step.completion_conditions,
        ItemKind::CompletionCondition,
        step_index,
        condition_index,
    )
}

pub(super) fn add(state: &mut RecipeBuilderState, step_index: usize) -> BuilderResult<()> {
    step_mut(state, step_index)?
        .completion_conditions
        .push_back(CompletionCondition::default());

    Ok(())
}

pub(super) fn remove(
    state: &mut RecipeBuilderState,
    step_index: usize,
    condition_index: usize,
) -> BuilderResult<()> {
    let step = step_mut(state, step_index)?;
    remove_item(
        &mut step.completion_conditions,
        ItemKind::CompletionCondition,
        step_index,
        condition_index,
    )?;

    Ok(())
}

pub(super) fn update_ingredient_state_query(
    state: &mut RecipeBuilderState,
    step_index: usize,
    condition_index: usize,
    query: String,
) -> BuilderResult<()> {
    condition_mut(state, step_index, condition_index)?.ingredient_state_query = query;

    Ok(())
}

pub(super) fn update_ingredient_state_suggestions(
    state: &mut RecipeBuilderState,
    step_index: usize,
    condition_index: usize,
    results: Vec<ValidIngredientState>,
) -> BuilderResult<()> {
    condition_mut(state, step_index, condition_index)?.ingredient_state_suggestions =
        Vector::from(results);

    Ok(())
}

pub(super) fn update_ingredient_state(
    state: &mut RecipeBuilderState,
    step_index: usize,
    condition_index: usize,
    ingredient_state: Option<ValidIngredientState>,
) -> BuilderResult<()> {
    let ingredient_state =
        ingredient_state.ok_or(BuilderError::MissingValue(ItemKind::IngredientState))?;

    let condition = condition_mut(state, step_index, condition_index)?;
    condition.ingredient_state_query = ingredient_state.name.clone();
    condition.ingredient_state = Some(ingredient_state);

    Ok(())
}

pub(super) fn update_notes(
    state: &mut RecipeBuilderState,
    step_index: usize,
    condition_index: usize,
    notes: String,
) -> BuilderResult<()> {
    condition_mut(state, step_index, condition_index)?.notes = notes;

    Ok(())
}

pub(super) fn toggle_optional(
    state: &mut RecipeBuilderState,
    step_index: usize,
    condition_index: usize,
) -> BuilderResult<()> {
    let condition = condition_mut(state, step_index, condition_index)?;
    condition.optional = !condition.optional;

    Ok(())
}
