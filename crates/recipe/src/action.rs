use serde::{Deserialize, Serialize};
use sous_shared::catalog::{
    ProductKind, ValidIngredient, ValidIngredientState, ValidInstrument, ValidMeasurementUnit,
    ValidPreparation,
};
use strum::IntoStaticStr;

use crate::error::{BuilderError, BuilderResult};

/// Every edit the recipe builder page can make.
///
/// The JSON form is tagged by `type`, e.g.
/// `{"type": "add_ingredient_to_step", "step_index": 0, "ingredient_name": "garlic"}`.
#[derive(Serialize, Deserialize, IntoStaticStr, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    UpdateName {
        name: String,
    },
    UpdateSlug {
        slug: String,
    },
    UpdateDescription {
        description: String,
    },
    UpdateSource {
        source: String,
    },
    UpdateYieldsPortions {
        portions: Option<u32>,
    },
    UpdateSubmissionError {
        error: Option<String>,
    },
    ToggleShowIngredientsSummary,
    ToggleShowInstrumentsSummary,
    ToggleShowAdvancedPrepInputs,

    AddStep,
    RemoveStep {
        step_index: usize,
    },
    ToggleShowStep {
        step_index: usize,
    },
    ToggleStepOptional {
        step_index: usize,
    },
    UpdateStepNotes {
        step_index: usize,
        notes: String,
    },
    UpdateStepPreparationQuery {
        step_index: usize,
        query: String,
    },
    UpdateStepPreparationSuggestions {
        step_index: usize,
        results: Vec<ValidPreparation>,
    },
    UpdateStepPreparation {
        step_index: usize,
        preparation_name: String,
    },
    UpdateStepMinimumTemperature {
        step_index: usize,
        temperature: Option<f32>,
    },
    UpdateStepMaximumTemperature {
        step_index: usize,
        temperature: Option<f32>,
    },
    UpdateStepMinimumEstimatedTime {
        step_index: usize,
        seconds: Option<u32>,
    },
    UpdateStepMaximumEstimatedTime {
        step_index: usize,
        seconds: Option<u32>,
    },

    UpdateStepIngredientQuery {
        step_index: usize,
        query: String,
    },
    UpdateStepIngredientSuggestions {
        step_index: usize,
        results: Vec<ValidIngredient>,
    },
    AddIngredientToStep {
        step_index: usize,
        ingredient_name: String,
    },
    RemoveIngredientFromStep {
        step_index: usize,
        ingredient_index: usize,
    },
    ToggleIngredientRange {
        step_index: usize,
        ingredient_index: usize,
    },
    ToggleIngredientOptional {
        step_index: usize,
        ingredient_index: usize,
    },
    UpdateIngredientMinimumQuantity {
        step_index: usize,
        ingredient_index: usize,
        quantity: f32,
    },
    UpdateIngredientMaximumQuantity {
        step_index: usize,
        ingredient_index: usize,
        quantity: f32,
    },
    UpdateIngredientMeasurementUnitQuery {
        step_index: usize,
        ingredient_index: usize,
        query: String,
    },
    UpdateIngredientMeasurementUnitSuggestions {
        step_index: usize,
        ingredient_index: usize,
        results: Vec<ValidMeasurementUnit>,
    },
    UpdateIngredientMeasurementUnit {
        step_index: usize,
        ingredient_index: usize,
        measurement_unit: Option<ValidMeasurementUnit>,
    },
    UpdateIngredientQuantityNotes {
        step_index: usize,
        ingredient_index: usize,
        notes: String,
    },
    UpdateIngredientNotes {
        step_index: usize,
        ingredient_index: usize,
        notes: String,
    },

    UpdateStepInstrumentSuggestions {
        step_index: usize,
        results: Vec<ValidInstrument>,
    },
    AddInstrumentToStep {
        step_index: usize,
        instrument_name: String,
    },
    RemoveInstrumentFromStep {
        step_index: usize,
        instrument_index: usize,
    },
    ToggleInstrumentRange {
        step_index: usize,
        instrument_index: usize,
    },
    ToggleInstrumentOptional {
        step_index: usize,
        instrument_index: usize,
    },
    UpdateInstrumentMinimumQuantity {
        step_index: usize,
        instrument_index: usize,
        quantity: f32,
    },
    UpdateInstrumentMaximumQuantity {
        step_index: usize,
        instrument_index: usize,
        quantity: f32,
    },
    UpdateInstrumentNotes {
        step_index: usize,
        instrument_index: usize,
        notes: String,
    },

    AddProductToStep {
        step_index: usize,
    },
    RemoveProductFromStep {
        step_index: usize,
        product_index: usize,
    },
    UpdateProductName {
        step_index: usize,
        product_index: usize,
        name: String,
    },
    UpdateProductKind {
        step_index: usize,
        product_index: usize,
        kind: ProductKind,
    },
    ToggleProductRange {
        step_index: usize,
        product_index: usize,
    },
    ToggleManualProductNaming {
        step_index: usize,
        product_index: usize,
    },
    UpdateProductMinimumQuantity {
        step_index: usize,
        product_index: usize,
        quantity: f32,
    },
    UpdateProductMaximumQuantity {
        step_index: usize,
        product_index: usize,
        quantity: f32,
    },
    UpdateProductMeasurementUnitQuery {
        step_index: usize,
        product_index: usize,
        query: String,
    },
    UpdateProductMeasurementUnitSuggestions {
        step_index: usize,
        product_index: usize,
        results: Vec<ValidMeasurementUnit>,
    },
    UpdateProductMeasurementUnit {
        step_index: usize,
        product_index: usize,
        measurement_unit: Option<ValidMeasurementUnit>,
    },
    UpdateProductQuantityNotes {
        step_index: usize,
        product_index: usize,
        notes: String,
    },

    AddCompletionConditionToStep {
        step_index: usize,
    },
    RemoveCompletionConditionFromStep {
        step_index: usize,
        condition_index: usize,
    },
    UpdateCompletionConditionIngredientStateQuery {
        step_index: usize,
        condition_index: usize,
        query: String,
    },
    UpdateCompletionConditionIngredientStateSuggestions {
        step_index: usize,
        condition_index: usize,
        results: Vec<ValidIngredientState>,
    },
    UpdateCompletionConditionIngredientState {
        step_index: usize,
        condition_index: usize,
        ingredient_state: Option<ValidIngredientState>,
    },
    UpdateCompletionConditionNotes {
        step_index: usize,
        condition_index: usize,
        notes: String,
    },
    ToggleCompletionConditionOptional {
        step_index: usize,
        condition_index: usize,
    },
}

impl Action {
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Decodes the host's tagged JSON form.
    pub fn from_value(value: &serde_json::Value) -> BuilderResult<Self> {
        serde_json::from_value(value.clone())
            .map_err(|err| BuilderError::UnknownAction(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_uses_the_json_tag() {
        let action = Action::AddIngredientToStep {
            step_index: 0,
            ingredient_name: "garlic".to_owned(),
        };

        assert_eq!(action.kind(), "add_ingredient_to_step");
        assert_eq!(
            serde_json::to_value(&action).unwrap()["type"],
            "add_ingredient_to_step"
        );
    }

    #[test]
    fn test_from_value_decodes_tagged_json() {
        let action = Action::from_value(&json!({
            "type": "update_yields_portions",
            "portions": 4
        }))
        .unwrap();

        assert_eq!(
            action,
            Action::UpdateYieldsPortions {
                portions: Some(4)
            }
        );
        assert_eq!(
            Action::from_value(&json!({"type": "add_step"})).unwrap(),
            Action::AddStep
        );
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = Action::from_value(&json!({"type": "launch_rocket"})).unwrap_err();

        assert!(matches!(err, BuilderError::UnknownAction(_)));
    }
}
