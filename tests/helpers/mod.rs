#![allow(dead_code)]

use std::path::PathBuf;

use sous_shared::catalog::{
    ValidIngredient, ValidIngredientState, ValidInstrument, ValidMeasurementUnit,
    ValidPreparation,
};
use sous_shared::provider::{MemoryCatalog, SuggestionProvider};

pub fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
}

pub fn demo_catalog() -> anyhow::Result<MemoryCatalog> {
    Ok(MemoryCatalog::from_path(demo_path("catalog.json"))?)
}

/// Provider whose every lookup fails, like an unreachable API.
pub struct Unavailable;

#[async_trait::async_trait]
impl SuggestionProvider for Unavailable {
    async fn preparations(&self, _query: &str) -> sous_shared::Result<Vec<ValidPreparation>> {
        sous_shared::bail!("service unavailable");
    }

    async fn ingredients(&self, _query: &str) -> sous_shared::Result<Vec<ValidIngredient>> {
        sous_shared::bail!("service unavailable");
    }

    async fn instruments_for(
        &self,
        _preparation: &ValidPreparation,
    ) -> sous_shared::Result<Vec<ValidInstrument>> {
        sous_shared::bail!("service unavailable");
    }

    async fn measurement_units(
        &self,
        _query: &str,
    ) -> sous_shared::Result<Vec<ValidMeasurementUnit>> {
        sous_shared::bail!("service unavailable");
    }

    async fn ingredient_states(
        &self,
        _query: &str,
    ) -> sous_shared::Result<Vec<ValidIngredientState>> {
        sous_shared::bail!("service unavailable");
    }
}
