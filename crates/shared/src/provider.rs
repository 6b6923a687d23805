use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{
    ValidIngredient, ValidIngredientState, ValidInstrument, ValidMeasurementUnit,
    ValidPreparation, matches_query,
};

/// Autocomplete source the builder host queries while a recipe is edited.
///
/// Implementations may fail; failures surface to the host, never to the reducer.
#[async_trait::async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn preparations(&self, query: &str) -> crate::Result<Vec<ValidPreparation>>;

    async fn ingredients(&self, query: &str) -> crate::Result<Vec<ValidIngredient>>;

    async fn instruments_for(
        &self,
        preparation: &ValidPreparation,
    ) -> crate::Result<Vec<ValidInstrument>>;

    async fn measurement_units(&self, query: &str) -> crate::Result<Vec<ValidMeasurementUnit>>;

    async fn ingredient_states(&self, query: &str) -> crate::Result<Vec<ValidIngredientState>>;
}

/// In-memory catalog, loaded from a JSON document.
#[derive(Deserialize, Default, Clone, Debug)]
#[serde(default)]
pub struct MemoryCatalog {
    pub preparations: Vec<ValidPreparation>,
    pub ingredients: Vec<ValidIngredient>,
    pub instruments: Vec<ValidInstrument>,
    pub measurement_units: Vec<ValidMeasurementUnit>,
    pub ingredient_states: Vec<ValidIngredientState>,
    /// Preparation id -> instrument ids usable with it. Preparations without an
    /// entry accept every instrument.
    pub preparation_instruments: HashMap<String, Vec<String>>,
    /// Maximum number of results per lookup, 0 means unlimited.
    pub limit: usize,
}

impl MemoryCatalog {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            crate::not_found!(format!("catalog {}", path.display()));
        }

        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        tracing::debug!(
            path = %path.display(),
            preparations = catalog.preparations.len(),
            ingredients = catalog.ingredients.len(),
            instruments = catalog.instruments.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    fn search<'a, T: Clone + 'a>(
        &self,
        items: impl IntoIterator<Item = &'a T>,
        name: impl Fn(&T) -> &str,
        query: &str,
    ) -> Vec<T> {
        let found = items
            .into_iter()
            .filter(|item| matches_query(name(item), query))
            .cloned();

        if self.limit == 0 {
            found.collect()
        } else {
            found.take(self.limit).collect()
        }
    }
}

#[async_trait::async_trait]
impl SuggestionProvider for MemoryCatalog {
    async fn preparations(&self, query: &str) -> crate::Result<Vec<ValidPreparation>> {
        Ok(self.search(&self.preparations, |p| p.name.as_str(), query))
    }

    async fn ingredients(&self, query: &str) -> crate::Result<Vec<ValidIngredient>> {
        Ok(self.search(&self.ingredients, |i| i.name.as_str(), query))
    }

    async fn instruments_for(
        &self,
        preparation: &ValidPreparation,
    ) -> crate::Result<Vec<ValidInstrument>> {
        let Some(allowed) = self.preparation_instruments.get(&preparation.id) else {
            return Ok(self.instruments.clone());
        };

        Ok(self
            .instruments
            .iter()
            .filter(|instrument| allowed.contains(&instrument.id))
            .cloned()
            .collect())
    }

    async fn measurement_units(&self, query: &str) -> crate::Result<Vec<ValidMeasurementUnit>> {
        Ok(self.search(&self.measurement_units, |u| u.name.as_str(), query))
    }

    async fn ingredient_states(&self, query: &str) -> crate::Result<Vec<ValidIngredientState>> {
        Ok(self.search(&self.ingredient_states, |s| s.name.as_str(), query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::from_json(
            r#"{
                "preparations": [
                    {"id": "p1", "name": "dice", "past_tense": "diced"},
                    {"id": "p2", "name": "sauté", "past_tense": "sautéed"}
                ],
                "ingredients": [
                    {"id": "i1", "name": "yellow onion"},
                    {"id": "i2", "name": "red onion"},
                    {"id": "i3", "name": "garlic"}
                ],
                "instruments": [
                    {"id": "t1", "name": "knife"},
                    {"id": "t2", "name": "skillet"}
                ],
                "preparation_instruments": {"p1": ["t1"]}
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_ingredients_match_by_substring() {
        let found = catalog().ingredients("ONION").await.unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, "i1");
    }

    #[tokio::test]
    async fn test_limit_truncates_results() {
        let mut catalog = catalog();
        catalog.limit = 1;

        assert_eq!(catalog.ingredients("onion").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_instruments_follow_preparation_links() {
        let catalog = catalog();
        let dice = catalog.preparations[0].clone();
        let saute = catalog.preparations[1].clone();

        let for_dice = catalog.instruments_for(&dice).await.unwrap();
        assert_eq!(for_dice.len(), 1);
        assert_eq!(for_dice[0].name, "knife");

        assert_eq!(catalog.instruments_for(&saute).await.unwrap().len(), 2);
    }

    #[test]
    fn test_missing_catalog_file_is_not_found() {
        let err = MemoryCatalog::from_path("/nonexistent/catalog.json").unwrap_err();

        assert!(matches!(err, crate::Error::NotFound(_)));
    }
}
