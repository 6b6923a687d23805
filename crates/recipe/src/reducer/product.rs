use im::Vector;
use sous_shared::catalog::{ProductKind, ValidMeasurementUnit};

use super::{item_mut, remove_item, step_mut};
use crate::error::{BuilderError, BuilderResult, ItemKind};
use crate::state::{RecipeBuilderState, StepProduct};

fn product_mut(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
) -> BuilderResult<&mut StepProduct> {
    let step = step_mut(state, step_index)?;

    item_mut(
        &mut step.products,
        ItemKind::Product,
        step_index,
        product_index,
    )
}

pub(super) fn add(state: &mut RecipeBuilderState, step_index: usize) -> BuilderResult<()> {
    step_mut(state, step_index)?
        .products
        .push_back(StepProduct::default());

    Ok(())
}

pub(super) fn remove(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
) -> BuilderResult<()> {
    let step = step_mut(state, step_index)?;
    if step.products.len() == 1 && product_index == 0 {
        return Err(BuilderError::LastProduct { step_index });
    }

    remove_item(
        &mut step.products,
        ItemKind::Product,
        step_index,
        product_index,
    )?;

    Ok(())
}

pub(super) fn update_name(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
    name: String,
) -> BuilderResult<()> {
    product_mut(state, step_index, product_index)?.name = name;

    Ok(())
}

pub(super) fn update_kind(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
    kind: ProductKind,
) -> BuilderResult<()> {
    product_mut(state, step_index, product_index)?.kind = kind;

    Ok(())
}

pub(super) fn toggle_range(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
) -> BuilderResult<()> {
    let product = product_mut(state, step_index, product_index)?;
    product.is_ranged = !product.is_ranged;

    Ok(())
}

/// Switching manual naming off keeps the current name; the derived name comes
/// back on the next change to the step's ingredients.
pub(super) fn toggle_manual_naming(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
) -> BuilderResult<()> {
    let product = product_mut(state, step_index, product_index)?;
    product.named_manually = !product.named_manually;

    Ok(())
}

pub(super) fn update_minimum_quantity(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
    quantity: f32,
) -> BuilderResult<()> {
    product_mut(state, step_index, product_index)?
        .quantity
        .set_minimum(quantity)
}

pub(super) fn update_maximum_quantity(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
    quantity: f32,
) -> BuilderResult<()> {
    product_mut(state, step_index, product_index)?
        .quantity
        .set_maximum(quantity)
}

pub(super) fn update_measurement_unit_query(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
    query: String,
) -> BuilderResult<()> {
    product_mut(state, step_index, product_index)?.measurement_unit_query = query;

    Ok(())
}

pub(super) fn update_measurement_unit_suggestions(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
    results: Vec<ValidMeasurementUnit>,
) -> BuilderResult<()> {
    product_mut(state, step_index, product_index)?.measurement_unit_suggestions =
        Vector::from(results);

    Ok(())
}

pub(super) fn update_measurement_unit(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
    measurement_unit: Option<ValidMeasurementUnit>,
) -> BuilderResult<()> {
    let measurement_unit =
        measurement_unit.ok_or(BuilderError::MissingValue(ItemKind::MeasurementUnit))?;

    let product = product_mut(state, step_index, product_index)?;
    product.measurement_unit_query = measurement_unit.name.clone();
    product.measurement_unit = Some(measurement_unit);

    Ok(())
}

pub(super) fn update_quantity_notes(
    state: &mut RecipeBuilderState,
    step_index: usize,
    product_index: usize,
    notes: String,
) -> BuilderResult<()> {
    product_mut(state, step_index, product_index)?.quantity_notes = notes;

    Ok(())
}
