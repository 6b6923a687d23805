#![allow(dead_code)]

use sous_recipe::{Action, RecipeBuilderState, try_reduce};
use sous_shared::catalog::{
    ValidIngredient, ValidIngredientState, ValidInstrument, ValidMeasurementUnit,
    ValidPreparation,
};

pub fn preparation(name: &str, past_tense: &str) -> ValidPreparation {
    ValidPreparation {
        id: format!("prep-{name}"),
        name: name.to_owned(),
        past_tense: past_tense.to_owned(),
        minimum_ingredient_count: 1,
        minimum_instrument_count: 1,
        ..Default::default()
    }
}

pub fn ingredient(name: &str) -> ValidIngredient {
    ValidIngredient {
        id: format!("ingredient-{name}"),
        name: name.to_owned(),
        plural_name: format!("{name}s"),
    }
}

pub fn instrument(name: &str) -> ValidInstrument {
    ValidInstrument {
        id: format!("instrument-{name}"),
        name: name.to_owned(),
        plural_name: format!("{name}s"),
    }
}

pub fn unit(name: &str) -> ValidMeasurementUnit {
    ValidMeasurementUnit {
        id: format!("unit-{name}"),
        name: name.to_owned(),
        plural_name: format!("{name}s"),
    }
}

pub fn ingredient_state(name: &str) -> ValidIngredientState {
    ValidIngredientState {
        id: format!("state-{name}"),
        name: name.to_owned(),
        past_tense: name.to_owned(),
    }
}

pub fn apply(
    state: &RecipeBuilderState,
    actions: impl IntoIterator<Item = Action>,
) -> anyhow::Result<RecipeBuilderState> {
    let mut state = state.clone();
    for action in actions {
        state = try_reduce(&state, action)?;
    }

    Ok(state)
}

/// Picks `preparation` for the step after offering it as the only suggestion.
pub fn choose_preparation(
    state: &RecipeBuilderState,
    step_index: usize,
    preparation: ValidPreparation,
) -> anyhow::Result<RecipeBuilderState> {
    let name = preparation.name.clone();

    apply(
        state,
        [
            Action::UpdateStepPreparationSuggestions {
                step_index,
                results: vec![preparation],
            },
            Action::UpdateStepPreparation {
                step_index,
                preparation_name: name,
            },
        ],
    )
}

/// Offers `results` from the catalog, then adds the one named `name`.
pub fn add_ingredient(
    state: &RecipeBuilderState,
    step_index: usize,
    results: Vec<ValidIngredient>,
    name: &str,
) -> anyhow::Result<RecipeBuilderState> {
    apply(
        state,
        [
            Action::UpdateStepIngredientSuggestions {
                step_index,
                results,
            },
            Action::AddIngredientToStep {
                step_index,
                ingredient_name: name.to_owned(),
            },
        ],
    )
}

pub fn add_instrument(
    state: &RecipeBuilderState,
    step_index: usize,
    results: Vec<ValidInstrument>,
    name: &str,
) -> anyhow::Result<RecipeBuilderState> {
    apply(
        state,
        [
            Action::UpdateStepInstrumentSuggestions {
                step_index,
                results,
            },
            Action::AddInstrumentToStep {
                step_index,
                instrument_name: name.to_owned(),
            },
        ],
    )
}

/// Step 0 dices an onion into "diced onion".
pub fn diced_onion() -> anyhow::Result<RecipeBuilderState> {
    let state = choose_preparation(&RecipeBuilderState::new(), 0, preparation("dice", "diced"))?;

    add_ingredient(&state, 0, vec![ingredient("onion")], "onion")
}
