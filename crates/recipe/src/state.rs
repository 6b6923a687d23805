use im::Vector;
use serde::{Deserialize, Serialize};
use sous_shared::catalog::{
    ProductKind, ValidIngredient, ValidIngredientState, ValidInstrument, ValidMeasurementUnit,
    ValidPreparation,
};

use crate::error::{BuilderError, BuilderResult};

/// Minimum and optional maximum amount of an ingredient, instrument or product.
///
/// The maximum never drops below the minimum: raising the minimum past the
/// maximum drags the maximum up with it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Quantity {
    pub minimum: f32,
    pub maximum: Option<f32>,
}

impl Default for Quantity {
    fn default() -> Self {
        Self {
            minimum: 1.0,
            maximum: None,
        }
    }
}

impl Quantity {
    pub fn set_minimum(&mut self, value: f32) -> BuilderResult<()> {
        check_quantity(value)?;

        self.minimum = value;
        if let Some(maximum) = self.maximum {
            if maximum < value {
                self.maximum = Some(value);
            }
        }

        Ok(())
    }

    pub fn set_maximum(&mut self, value: f32) -> BuilderResult<()> {
        check_quantity(value)?;

        self.maximum = Some(value.max(self.minimum));

        Ok(())
    }

    /// The quantity as submitted: the maximum only counts for ranged items.
    pub fn for_range(&self, is_ranged: bool) -> Quantity {
        Quantity {
            minimum: self.minimum,
            maximum: if is_ranged { self.maximum } else { None },
        }
    }
}

fn check_quantity(value: f32) -> BuilderResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(BuilderError::InvalidQuantity(value));
    }

    Ok(())
}

/// Pair of optional bounds (temperature, time estimate) kept ordered whenever
/// both are set.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct OptionalRange<T> {
    pub minimum: Option<T>,
    pub maximum: Option<T>,
}

impl<T: PartialOrd + Copy> OptionalRange<T> {
    pub fn set_minimum(&mut self, value: Option<T>) {
        self.minimum = value;

        if let (Some(minimum), Some(maximum)) = (self.minimum, self.maximum) {
            if maximum < minimum {
                self.maximum = Some(minimum);
            }
        }
    }

    pub fn set_maximum(&mut self, value: Option<T>) {
        self.maximum = match (value, self.minimum) {
            (Some(maximum), Some(minimum)) if maximum < minimum => Some(minimum),
            (value, _) => value,
        };
    }
}

/// Where a step ingredient or instrument comes from: the catalog, or a product
/// emitted by an earlier step of the same recipe.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ItemSource<T> {
    Catalog(T),
    Product {
        step_index: usize,
        product_index: usize,
    },
}

impl<T> ItemSource<T> {
    pub fn product_ref(&self) -> Option<(usize, usize)> {
        match self {
            ItemSource::Product {
                step_index,
                product_index,
            } => Some((*step_index, *product_index)),
            ItemSource::Catalog(_) => None,
        }
    }

    pub fn catalog(&self) -> Option<&T> {
        match self {
            ItemSource::Catalog(item) => Some(item),
            ItemSource::Product { .. } => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IngredientSuggestion {
    pub name: String,
    pub source: ItemSource<ValidIngredient>,
    pub measurement_unit: Option<ValidMeasurementUnit>,
    pub quantity: Quantity,
}

impl From<ValidIngredient> for IngredientSuggestion {
    fn from(ingredient: ValidIngredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            source: ItemSource::Catalog(ingredient),
            measurement_unit: None,
            quantity: Quantity::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InstrumentSuggestion {
    pub name: String,
    pub source: ItemSource<ValidInstrument>,
    pub quantity: Quantity,
}

impl From<ValidInstrument> for InstrumentSuggestion {
    fn from(instrument: ValidInstrument) -> Self {
        Self {
            name: instrument.name.clone(),
            source: ItemSource::Catalog(instrument),
            quantity: Quantity::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StepIngredient {
    pub name: String,
    pub source: ItemSource<ValidIngredient>,
    pub measurement_unit: Option<ValidMeasurementUnit>,
    pub quantity: Quantity,
    pub quantity_notes: String,
    pub ingredient_notes: String,
    pub optional: bool,
    pub is_ranged: bool,
    pub measurement_unit_query: String,
    pub measurement_unit_suggestions: Vector<ValidMeasurementUnit>,
}

impl From<IngredientSuggestion> for StepIngredient {
    fn from(suggestion: IngredientSuggestion) -> Self {
        Self {
            is_ranged: suggestion.quantity.maximum.is_some(),
            measurement_unit_query: suggestion
                .measurement_unit
                .as_ref()
                .map(|unit| unit.name.clone())
                .unwrap_or_default(),
            name: suggestion.name,
            source: suggestion.source,
            measurement_unit: suggestion.measurement_unit,
            quantity: suggestion.quantity,
            quantity_notes: String::new(),
            ingredient_notes: String::new(),
            optional: false,
            measurement_unit_suggestions: Vector::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StepInstrument {
    pub name: String,
    pub source: ItemSource<ValidInstrument>,
    pub quantity: Quantity,
    pub notes: String,
    pub optional: bool,
    pub is_ranged: bool,
}

impl From<InstrumentSuggestion> for StepInstrument {
    fn from(suggestion: InstrumentSuggestion) -> Self {
        Self {
            is_ranged: suggestion.quantity.maximum.is_some(),
            name: suggestion.name,
            source: suggestion.source,
            quantity: suggestion.quantity,
            notes: String::new(),
            optional: false,
        }
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct StepProduct {
    pub name: String,
    pub kind: ProductKind,
    pub measurement_unit: Option<ValidMeasurementUnit>,
    pub quantity: Quantity,
    pub quantity_notes: String,
    pub is_ranged: bool,
    pub named_manually: bool,
    pub measurement_unit_query: String,
    pub measurement_unit_suggestions: Vector<ValidMeasurementUnit>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct CompletionCondition {
    pub ingredient_state: Option<ValidIngredientState>,
    pub notes: String,
    pub optional: bool,
    pub ingredient_state_query: String,
    pub ingredient_state_suggestions: Vector<ValidIngredientState>,
}

/// Step-level UI state: visibility and the autocomplete caches of the step form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StepHelper {
    pub show: bool,
    pub preparation_query: String,
    pub preparation_suggestions: Vector<ValidPreparation>,
    pub ingredient_query: String,
    pub ingredient_suggestions: Vector<IngredientSuggestion>,
    pub instrument_suggestions: Vector<InstrumentSuggestion>,
}

impl Default for StepHelper {
    fn default() -> Self {
        Self {
            show: true,
            preparation_query: String::new(),
            preparation_suggestions: Vector::new(),
            ingredient_query: String::new(),
            ingredient_suggestions: Vector::new(),
            instrument_suggestions: Vector::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Step {
    pub preparation: Option<ValidPreparation>,
    pub ingredients: Vector<StepIngredient>,
    pub instruments: Vector<StepInstrument>,
    pub products: Vector<StepProduct>,
    pub completion_conditions: Vector<CompletionCondition>,
    pub notes: String,
    pub temperature_in_celsius: OptionalRange<f32>,
    pub estimated_time_in_seconds: OptionalRange<u32>,
    pub optional: bool,
    pub helper: StepHelper,
}

impl Default for Step {
    fn default() -> Self {
        Self {
            preparation: None,
            ingredients: Vector::new(),
            instruments: Vector::new(),
            products: Vector::unit(StepProduct::default()),
            completion_conditions: Vector::new(),
            notes: String::new(),
            temperature_in_celsius: OptionalRange::default(),
            estimated_time_in_seconds: OptionalRange::default(),
            optional: false,
            helper: StepHelper::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecipeDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub source: String,
    pub yields_portions: u32,
    pub steps: Vector<Step>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            source: String::new(),
            yields_portions: 1,
            steps: Vector::unit(Step::default()),
        }
    }
}

/// Everything the recipe builder page renders from.
///
/// Only ever replaced through [`crate::reduce`]. Cloning is cheap: the step
/// and item lists are persistent vectors, so a transition copies the paths it
/// touches and shares the rest with the previous state.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct RecipeBuilderState {
    pub recipe: RecipeDraft,
    pub submission_error: Option<String>,
    pub submission_allowed: bool,
    pub show_ingredients_summary: bool,
    pub show_instruments_summary: bool,
    pub show_advanced_prep_inputs: bool,
}

impl RecipeBuilderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self, step_index: usize) -> Option<&Step> {
        self.recipe.steps.get(step_index)
    }

    /// Step helpers in step order, one per step.
    pub fn step_helpers(&self) -> impl Iterator<Item = &StepHelper> {
        self.recipe.steps.iter().map(|step| &step.helper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raising_minimum_drags_maximum_up() {
        let mut quantity = Quantity {
            minimum: 1.0,
            maximum: Some(2.0),
        };

        quantity.set_minimum(3.0).unwrap();

        assert_eq!(quantity.minimum, 3.0);
        assert_eq!(quantity.maximum, Some(3.0));
    }

    #[test]
    fn test_lowering_maximum_stops_at_minimum() {
        let mut quantity = Quantity {
            minimum: 2.0,
            maximum: None,
        };

        quantity.set_maximum(0.5).unwrap();

        assert_eq!(quantity.maximum, Some(2.0));
    }

    #[test]
    fn test_negative_and_nan_quantities_are_rejected() {
        let mut quantity = Quantity::default();

        assert_eq!(
            quantity.set_minimum(-1.0),
            Err(BuilderError::InvalidQuantity(-1.0))
        );
        assert!(quantity.set_maximum(f32::NAN).is_err());
        assert_eq!(quantity, Quantity::default());
    }

    #[test]
    fn test_optional_range_clamps_only_when_both_bounds_are_set() {
        let mut range = OptionalRange::<u32>::default();

        range.set_maximum(Some(10));
        assert_eq!(range.maximum, Some(10));

        range.set_minimum(Some(20));
        assert_eq!(range.maximum, Some(20));

        range.set_maximum(Some(5));
        assert_eq!(range.maximum, Some(20));

        range.set_minimum(None);
        range.set_maximum(Some(5));
        assert_eq!(range.maximum, Some(5));
    }

    #[test]
    fn test_unranged_quantity_drops_maximum() {
        let quantity = Quantity {
            minimum: 1.0,
            maximum: Some(4.0),
        };

        assert_eq!(quantity.for_range(false).maximum, None);
        assert_eq!(quantity.for_range(true).maximum, Some(4.0));
    }

    #[test]
    fn test_new_state_has_one_step_with_one_product() {
        let state = RecipeBuilderState::new();

        assert_eq!(state.recipe.steps.len(), 1);
        assert_eq!(state.recipe.steps[0].products.len(), 1);
        assert_eq!(state.step_helpers().count(), 1);
        assert!(state.recipe.steps[0].helper.show);
        assert!(!state.submission_allowed);
    }
}
