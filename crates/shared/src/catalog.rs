use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ValidPreparation {
    pub id: String,
    pub name: String,
    pub past_tense: String,
    pub minimum_ingredient_count: u32,
    pub maximum_ingredient_count: Option<u32>,
    pub minimum_instrument_count: u32,
    pub maximum_instrument_count: Option<u32>,
    pub temperature_required: bool,
    pub time_estimate_required: bool,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ValidIngredient {
    pub id: String,
    pub name: String,
    pub plural_name: String,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ValidInstrument {
    pub id: String,
    pub name: String,
    pub plural_name: String,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ValidMeasurementUnit {
    pub id: String,
    pub name: String,
    pub plural_name: String,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ValidIngredientState {
    pub id: String,
    pub name: String,
    pub past_tense: String,
}

/// What a step emits: something later steps consume as an ingredient or use as
/// an instrument.
#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductKind {
    #[default]
    Ingredient,
    Instrument,
}

/// Case-insensitive substring match used by autocomplete lookups.
pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_product_kind_round_trips_through_strings() {
        assert_eq!(ProductKind::Instrument.to_string(), "instrument");
        assert_eq!(
            ProductKind::from_str("ingredient").unwrap(),
            ProductKind::Ingredient
        );
        assert!(ProductKind::from_str("vessel").is_err());
        assert_eq!(ProductKind::VARIANTS.len(), 2);
    }

    #[test]
    fn test_matches_query_ignores_case_and_blank_queries() {
        assert!(matches_query("Yellow Onion", "onion"));
        assert!(matches_query("Yellow Onion", "  "));
        assert!(!matches_query("Garlic", "onion"));
    }
}
