use serde::{Deserialize, Serialize};
use sous_shared::catalog::ProductKind;
use validator::Validate;

use crate::state::{
    CompletionCondition, RecipeBuilderState, RecipeDraft, Step, StepIngredient, StepInstrument,
    StepProduct,
};

/// Recipe creation request as the API expects it.
#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCreationRequestInput {
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    pub slug: String,
    pub description: String,
    pub source: String,
    #[validate(range(min = 1))]
    pub yields_portions: u32,
    #[validate(length(min = 1), nested)]
    pub steps: Vec<RecipeStepCreationRequestInput>,
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStepCreationRequestInput {
    pub index: u32,
    #[validate(length(min = 1))]
    pub preparation_id: String,
    pub notes: String,
    pub optional: bool,
    pub minimum_temperature_in_celsius: Option<f32>,
    pub maximum_temperature_in_celsius: Option<f32>,
    pub minimum_estimated_time_in_seconds: Option<u32>,
    pub maximum_estimated_time_in_seconds: Option<u32>,
    #[validate(nested)]
    pub ingredients: Vec<RecipeStepIngredientCreationRequestInput>,
    pub instruments: Vec<RecipeStepInstrumentCreationRequestInput>,
    #[validate(length(min = 1), nested)]
    pub products: Vec<RecipeStepProductCreationRequestInput>,
    #[validate(nested)]
    pub completion_conditions: Vec<RecipeStepCompletionConditionCreationRequestInput>,
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStepIngredientCreationRequestInput {
    #[validate(length(min = 1))]
    pub name: String,
    pub ingredient_id: Option<String>,
    pub product_of_recipe_step_index: Option<u32>,
    pub product_of_recipe_step_product_index: Option<u32>,
    pub measurement_unit_id: Option<String>,
    pub minimum_quantity: f32,
    pub maximum_quantity: Option<f32>,
    pub quantity_notes: String,
    pub ingredient_notes: String,
    pub optional: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStepInstrumentCreationRequestInput {
    pub name: String,
    pub instrument_id: Option<String>,
    pub product_of_recipe_step_index: Option<u32>,
    pub product_of_recipe_step_product_index: Option<u32>,
    pub minimum_quantity: f32,
    pub maximum_quantity: Option<f32>,
    pub notes: String,
    pub optional: bool,
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStepProductCreationRequestInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProductKind,
    pub measurement_unit_id: Option<String>,
    pub minimum_quantity: f32,
    pub maximum_quantity: Option<f32>,
    pub quantity_notes: String,
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStepCompletionConditionCreationRequestInput {
    #[validate(length(min = 1))]
    pub ingredient_state: String,
    pub notes: String,
    pub optional: bool,
}

impl RecipeBuilderState {
    /// Projects the draft into the creation request. Total: an incomplete draft
    /// yields an input that fails validation rather than an error.
    pub fn to_create_request(&self) -> RecipeCreationRequestInput {
        RecipeCreationRequestInput::from(&self.recipe)
    }

    pub fn can_submit(&self) -> bool {
        self.submission_error.is_none() && self.to_create_request().validate().is_ok()
    }

    /// The validated request, ready for the API client.
    pub fn submission(&self) -> sous_shared::Result<RecipeCreationRequestInput> {
        if let Some(error) = &self.submission_error {
            sous_shared::bail!("{}", error);
        }

        let input = self.to_create_request();
        input.validate()?;

        Ok(input)
    }
}

fn index(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl From<&RecipeDraft> for RecipeCreationRequestInput {
    fn from(recipe: &RecipeDraft) -> Self {
        Self {
            name: recipe.name.trim().to_owned(),
            slug: recipe.slug.clone(),
            description: recipe.description.clone(),
            source: recipe.source.clone(),
            yields_portions: recipe.yields_portions,
            steps: recipe
                .steps
                .iter()
                .enumerate()
                .map(|(step_index, step)| RecipeStepCreationRequestInput::from_step(step_index, step))
                .collect(),
        }
    }
}

impl RecipeStepCreationRequestInput {
    fn from_step(step_index: usize, step: &Step) -> Self {
        Self {
            index: index(step_index),
            preparation_id: step
                .preparation
                .as_ref()
                .map(|preparation| preparation.id.clone())
                .unwrap_or_default(),
            notes: step.notes.clone(),
            optional: step.optional,
            minimum_temperature_in_celsius: step.temperature_in_celsius.minimum,
            maximum_temperature_in_celsius: step.temperature_in_celsius.maximum,
            minimum_estimated_time_in_seconds: step.estimated_time_in_seconds.minimum,
            maximum_estimated_time_in_seconds: step.estimated_time_in_seconds.maximum,
            ingredients: step.ingredients.iter().map(Into::into).collect(),
            instruments: step.instruments.iter().map(Into::into).collect(),
            products: step.products.iter().map(Into::into).collect(),
            completion_conditions: step.completion_conditions.iter().map(Into::into).collect(),
        }
    }
}

impl From<&StepIngredient> for RecipeStepIngredientCreationRequestInput {
    fn from(ingredient: &StepIngredient) -> Self {
        let quantity = ingredient.quantity.for_range(ingredient.is_ranged);
        let product = ingredient.source.product_ref();

        Self {
            name: ingredient.name.clone(),
            ingredient_id: ingredient.source.catalog().map(|valid| valid.id.clone()),
            product_of_recipe_step_index: product.map(|(step_index, _)| index(step_index)),
            product_of_recipe_step_product_index: product
                .map(|(_, product_index)| index(product_index)),
            measurement_unit_id: ingredient
                .measurement_unit
                .as_ref()
                .map(|unit| unit.id.clone()),
            minimum_quantity: quantity.minimum,
            maximum_quantity: quantity.maximum,
            quantity_notes: ingredient.quantity_notes.clone(),
            ingredient_notes: ingredient.ingredient_notes.clone(),
            optional: ingredient.optional,
        }
    }
}

impl From<&StepInstrument> for RecipeStepInstrumentCreationRequestInput {
    fn from(instrument: &StepInstrument) -> Self {
        let quantity = instrument.quantity.for_range(instrument.is_ranged);
        let product = instrument.source.product_ref();

        Self {
            name: instrument.name.clone(),
            instrument_id: instrument.source.catalog().map(|valid| valid.id.clone()),
            product_of_recipe_step_index: product.map(|(step_index, _)| index(step_index)),
            product_of_recipe_step_product_index: product
                .map(|(_, product_index)| index(product_index)),
            minimum_quantity: quantity.minimum,
            maximum_quantity: quantity.maximum,
            notes: instrument.notes.clone(),
            optional: instrument.optional,
        }
    }
}

impl From<&StepProduct> for RecipeStepProductCreationRequestInput {
    fn from(product: &StepProduct) -> Self {
        let quantity = product.quantity.for_range(product.is_ranged);

        Self {
            name: product.name.trim().to_owned(),
            kind: product.kind,
            measurement_unit_id: product.measurement_unit.as_ref().map(|unit| unit.id.clone()),
            minimum_quantity: quantity.minimum,
            maximum_quantity: quantity.maximum,
            quantity_notes: product.quantity_notes.clone(),
        }
    }
}

impl From<&CompletionCondition> for RecipeStepCompletionConditionCreationRequestInput {
    fn from(condition: &CompletionCondition) -> Self {
        Self {
            ingredient_state: condition
                .ingredient_state
                .as_ref()
                .map(|state| state.id.clone())
                .unwrap_or_default(),
            notes: condition.notes.clone(),
            optional: condition.optional,
        }
    }
}
