//! Queries over the steps already written, used to offer earlier products as
//! inputs to later steps.
//!
//! Everything here is recomputed from the draft on every call.

use std::collections::HashSet;

use sous_shared::catalog::ProductKind;

use crate::state::{
    IngredientSuggestion, InstrumentSuggestion, ItemSource, Quantity, RecipeDraft, Step,
    StepProduct,
};

/// Ingredient-kind products of steps `[0, step_index)` not yet consumed by an
/// ingredient of those same steps.
pub fn available_products_up_to(
    recipe: &RecipeDraft,
    step_index: usize,
) -> Vec<IngredientSuggestion> {
    unconsumed_products(recipe, step_index, ProductKind::Ingredient, ingredient_refs)
    .into_iter()
    .map(|(step_index, product_index, product)| IngredientSuggestion {
        name: product.name.clone(),
        source: ItemSource::Product {
            step_index,
            product_index,
        },
        measurement_unit: product.measurement_unit.clone(),
        quantity: product.quantity.for_range(product.is_ranged),
    })
    .collect()
}

/// Instrument-kind products of steps `[0, step_index)` not yet used by an
/// instrument of those same steps. Quantities are reset to a single unit.
pub fn available_instruments_up_to(
    recipe: &RecipeDraft,
    step_index: usize,
) -> Vec<InstrumentSuggestion> {
    unconsumed_products(recipe, step_index, ProductKind::Instrument, instrument_refs)
    .into_iter()
    .map(|(step_index, product_index, product)| InstrumentSuggestion {
        name: product.name.clone(),
        source: ItemSource::Product {
            step_index,
            product_index,
        },
        quantity: Quantity::default(),
    })
    .collect()
}

fn ingredient_refs(step: &Step) -> Vec<(usize, usize)> {
    step.ingredients
        .iter()
        .filter_map(|ingredient| ingredient.source.product_ref())
        .collect()
}

fn instrument_refs(step: &Step) -> Vec<(usize, usize)> {
    step.instruments
        .iter()
        .filter_map(|instrument| instrument.source.product_ref())
        .collect()
}

/// Products taken by an ingredient of any step, including later ones.
pub(crate) fn products_consumed_anywhere(recipe: &RecipeDraft) -> HashSet<(usize, usize)> {
    recipe.steps.iter().flat_map(ingredient_refs).collect()
}

/// Products taken by an instrument of any step, including later ones.
pub(crate) fn instruments_used_anywhere(recipe: &RecipeDraft) -> HashSet<(usize, usize)> {
    recipe.steps.iter().flat_map(instrument_refs).collect()
}

/// Whether step `step_index` may still take `product` as an ingredient.
/// Cached suggestions lag behind edits to other steps, so selection checks
/// the draft itself.
pub(crate) fn ingredient_product_open(
    recipe: &RecipeDraft,
    step_index: usize,
    product: (usize, usize),
) -> bool {
    !products_consumed_anywhere(recipe).contains(&product)
        && available_products_up_to(recipe, step_index)
            .iter()
            .any(|suggestion| suggestion.source.product_ref() == Some(product))
}

pub(crate) fn instrument_product_open(
    recipe: &RecipeDraft,
    step_index: usize,
    product: (usize, usize),
) -> bool {
    !instruments_used_anywhere(recipe).contains(&product)
        && available_instruments_up_to(recipe, step_index)
            .iter()
            .any(|suggestion| suggestion.source.product_ref() == Some(product))
}

fn unconsumed_products<'a>(
    recipe: &'a RecipeDraft,
    step_index: usize,
    kind: ProductKind,
    consumed_by: fn(&Step) -> Vec<(usize, usize)>,
) -> Vec<(usize, usize, &'a StepProduct)> {
    let mut produced = Vec::new();
    let mut consumed = HashSet::new();

    for (index, step) in recipe.steps.iter().take(step_index).enumerate() {
        produced.extend(
            step.products
                .iter()
                .enumerate()
                .filter(|(_, product)| product.kind == kind)
                .map(|(product_index, product)| (index, product_index, product)),
        );
        consumed.extend(consumed_by(step));
    }

    produced.retain(|(step_index, product_index, _)| {
        !consumed.contains(&(*step_index, *product_index))
    });

    produced
}

/// `<preparation past tense> <ingredient names>`, the name a step's single
/// product gets unless it was named by hand.
pub fn derived_product_name(step: &Step) -> String {
    let names = step
        .ingredients
        .iter()
        .map(|ingredient| ingredient.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if names.is_empty() {
        return String::new();
    }

    match step
        .preparation
        .as_ref()
        .map(|preparation| preparation.past_tense.trim())
        .filter(|past_tense| !past_tense.is_empty())
    {
        Some(past_tense) => format!("{past_tense} {names}"),
        None => names,
    }
}

/// Renames the step's product from its ingredients when the step has exactly
/// one product and it was not named by hand.
pub(crate) fn refresh_product_name(step: &mut Step) {
    if step.products.len() != 1 {
        return;
    }

    let name = derived_product_name(step);
    if let Some(product) = step.products.get_mut(0) {
        if !product.named_manually {
            product.name = name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sous_shared::catalog::{ValidIngredient, ValidPreparation};

    use crate::state::StepIngredient;

    fn ingredient(name: &str) -> StepIngredient {
        StepIngredient::from(IngredientSuggestion::from(ValidIngredient {
            id: name.to_owned(),
            name: name.to_owned(),
            plural_name: format!("{name}s"),
        }))
    }

    #[test]
    fn test_derived_name_joins_past_tense_and_ingredients() {
        let mut step = Step {
            preparation: Some(ValidPreparation {
                name: "dice".to_owned(),
                past_tense: "diced".to_owned(),
                ..Default::default()
            }),
            ..Default::default()
        };
        step.ingredients.push_back(ingredient("onion"));
        step.ingredients.push_back(ingredient("carrot"));

        assert_eq!(derived_product_name(&step), "diced onion, carrot");
    }

    #[test]
    fn test_derived_name_without_preparation_or_ingredients() {
        let mut step = Step::default();
        assert_eq!(derived_product_name(&step), "");

        step.ingredients.push_back(ingredient("onion"));
        assert_eq!(derived_product_name(&step), "onion");
    }

    #[test]
    fn test_refresh_skips_manual_names_and_multi_product_steps() {
        let mut step = Step::default();
        step.ingredients.push_back(ingredient("onion"));
        step.products[0].named_manually = true;
        step.products[0].name = "mirepoix".to_owned();

        refresh_product_name(&mut step);
        assert_eq!(step.products[0].name, "mirepoix");

        step.products[0].named_manually = false;
        step.products.push_back(StepProduct::default());
        refresh_product_name(&mut step);
        assert_eq!(step.products[0].name, "mirepoix");

        step.products.pop_back();
        refresh_product_name(&mut step);
        assert_eq!(step.products[0].name, "onion");
    }
}
