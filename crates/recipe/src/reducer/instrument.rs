use sous_shared::catalog::ValidInstrument;

use super::{item_mut, remove_item, selection_not_found, step_mut};
use crate::derive::{
    available_instruments_up_to, instrument_product_open, instruments_used_anywhere,
};
use crate::error::{BuilderResult, ItemKind};
use crate::state::{InstrumentSuggestion, RecipeBuilderState, StepInstrument};

fn instrument_mut(
    state: &mut RecipeBuilderState,
    step_index: usize,
    instrument_index: usize,
) -> BuilderResult<&mut StepInstrument> {
    let step = step_mut(state, step_index)?;

    item_mut(
        &mut step.instruments,
        ItemKind::Instrument,
        step_index,
        instrument_index,
    )
}

/// Instruments made by earlier steps come first, then the catalog results.
/// Products already used by any step are left out.
pub(super) fn update_suggestions(
    state: &mut RecipeBuilderState,
    step_index: usize,
    results: Vec<ValidInstrument>,
) -> BuilderResult<()> {
    let used = instruments_used_anywhere(&state.recipe);
    let available = available_instruments_up_to(&state.recipe, step_index);

    step_mut(state, step_index)?.helper.instrument_suggestions = available
        .into_iter()
        .filter(|suggestion| {
            suggestion
                .source
                .product_ref()
                .is_none_or(|product| !used.contains(&product))
        })
        .chain(results.into_iter().map(InstrumentSuggestion::from))
        .collect();

    Ok(())
}

pub(super) fn add(
    state: &mut RecipeBuilderState,
    step_index: usize,
    instrument_name: String,
) -> BuilderResult<()> {
    let suggestion = step_mut(state, step_index)?
        .helper
        .instrument_suggestions
        .iter()
        .find(|suggestion| suggestion.name == instrument_name)
        .cloned()
        .ok_or_else(|| selection_not_found(ItemKind::Instrument, &instrument_name))?;

    if let Some(product) = suggestion.source.product_ref() {
        if !instrument_product_open(&state.recipe, step_index, product) {
            return Err(selection_not_found(ItemKind::Instrument, &instrument_name));
        }
    }

    step_mut(state, step_index)?
        .instruments
        .push_back(StepInstrument::from(suggestion));

    Ok(())
}

pub(super) fn remove(
    state: &mut RecipeBuilderState,
    step_index: usize,
    instrument_index: usize,
) -> BuilderResult<()> {
    let step = step_mut(state, step_index)?;
    remove_item(
        &mut step.instruments,
        ItemKind::Instrument,
        step_index,
        instrument_index,
    )?;

    Ok(())
}

pub(super) fn toggle_range(
    state: &mut RecipeBuilderState,
    step_index: usize,
    instrument_index: usize,
) -> BuilderResult<()> {
    let instrument = instrument_mut(state, step_index, instrument_index)?;
    instrument.is_ranged = !instrument.is_ranged;

    Ok(())
}

pub(super) fn toggle_optional(
    state: &mut RecipeBuilderState,
    step_index: usize,
    instrument_index: usize,
) -> BuilderResult<()> {
    let instrument = instrument_mut(state, step_index, instrument_index)?;
    instrument.optional = !instrument.optional;

    Ok(())
}

pub(super) fn update_minimum_quantity(
    state: &mut RecipeBuilderState,
    step_index: usize,
    instrument_index: usize,
    quantity: f32,
) -> BuilderResult<()> {
    instrument_mut(state, step_index, instrument_index)?
        .quantity
        .set_minimum(quantity)
}

pub(super) fn update_maximum_quantity(
    state: &mut RecipeBuilderState,
    step_index: usize,
    instrument_index: usize,
    quantity: f32,
) -> BuilderResult<()> {
    instrument_mut(state, step_index, instrument_index)?
        .quantity
        .set_maximum(quantity)
}

pub(super) fn update_notes(
    state: &mut RecipeBuilderState,
    step_index: usize,
    instrument_index: usize,
    notes: String,
) -> BuilderResult<()> {
    instrument_mut(state, step_index, instrument_index)?.notes = notes;

    Ok(())
}
