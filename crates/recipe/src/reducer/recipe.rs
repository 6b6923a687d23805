use crate::error::{BuilderError, BuilderResult, ItemKind};
use crate::state::RecipeBuilderState;

pub(super) fn update_name(state: &mut RecipeBuilderState, name: String) -> BuilderResult<()> {
    state.recipe.name = name;

    Ok(())
}

pub(super) fn update_slug(state: &mut RecipeBuilderState, slug: String) -> BuilderResult<()> {
    state.recipe.slug = slug;

    Ok(())
}

pub(super) fn update_description(
    state: &mut RecipeBuilderState,
    description: String,
) -> BuilderResult<()> {
    state.recipe.description = description;

    Ok(())
}

pub(super) fn update_source(state: &mut RecipeBuilderState, source: String) -> BuilderResult<()> {
    state.recipe.source = source;

    Ok(())
}

/// An empty or zero portion count is rejected and the previous one kept.
pub(super) fn update_yields_portions(
    state: &mut RecipeBuilderState,
    portions: Option<u32>,
) -> BuilderResult<()> {
    state.recipe.yields_portions = portions
        .filter(|portions| *portions > 0)
        .ok_or(BuilderError::MissingValue(ItemKind::YieldsPortions))?;

    Ok(())
}

pub(super) fn update_submission_error(
    state: &mut RecipeBuilderState,
    error: Option<String>,
) -> BuilderResult<()> {
    state.submission_error = error;

    Ok(())
}

pub(super) fn toggle_show_ingredients_summary(state: &mut RecipeBuilderState) -> BuilderResult<()> {
    state.show_ingredients_summary = !state.show_ingredients_summary;

    Ok(())
}

pub(super) fn toggle_show_instruments_summary(state: &mut RecipeBuilderState) -> BuilderResult<()> {
    state.show_instruments_summary = !state.show_instruments_summary;

    Ok(())
}

pub(super) fn toggle_show_advanced_prep_inputs(state: &mut RecipeBuilderState) -> BuilderResult<()> {
    state.show_advanced_prep_inputs = !state.show_advanced_prep_inputs;

    Ok(())
}
