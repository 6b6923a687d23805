use pretty_assertions::assert_eq;
use serde_json::json;
use sous::{SearchRequest, Session};
use sous_recipe::Action;

mod helpers;

#[tokio::test]
async fn test_search_records_query_then_results() -> anyhow::Result<()> {
    let mut session = Session::new(helpers::demo_catalog()?);

    let state = session
        .search(SearchRequest::Preparations {
            step_index: 0,
            query: "SAU".to_owned(),
        })
        .await;
    let helper = &state.recipe.steps[0].helper;

    assert_eq!(helper.preparation_query, "SAU");
    assert_eq!(helper.preparation_suggestions.len(), 1);
    assert_eq!(helper.preparation_suggestions[0].name, "sauté");

    Ok(())
}

#[tokio::test]
async fn test_instruments_follow_the_step_preparation() -> anyhow::Result<()> {
    let mut session = Session::new(helpers::demo_catalog()?);

    let before = session.state().clone();
    session
        .search(SearchRequest::Instruments { step_index: 0 })
        .await;
    assert_eq!(session.state(), &before);

    session
        .search(SearchRequest::Preparations {
            step_index: 0,
            query: "dice".to_owned(),
        })
        .await;
    session.dispatch(Action::UpdateStepPreparation {
        step_index: 0,
        preparation_name: "dice".to_owned(),
    });
    let state = session
        .search(SearchRequest::Instruments { step_index: 0 })
        .await;

    let names = state.recipe.steps[0]
        .helper
        .instrument_suggestions
        .iter()
        .map(|suggestion| suggestion.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["chef's knife", "cutting board"]);

    Ok(())
}

#[tokio::test]
async fn test_failed_lookup_keeps_query_and_old_suggestions() -> anyhow::Result<()> {
    let catalog = helpers::demo_catalog()?;
    let mut session = Session::new(catalog);
    session
        .search(SearchRequest::Ingredients {
            step_index: 0,
            query: "garlic".to_owned(),
        })
        .await;
    let warmed = session.into_state();
    assert_eq!(warmed.recipe.steps[0].helper.ingredient_suggestions.len(), 1);

    let mut session = Session::with_state(helpers::Unavailable, warmed.clone());
    let err = session
        .suggestions_for(&SearchRequest::Ingredients {
            step_index: 0,
            query: "butter".to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "service unavailable");

    let state = session
        .search(SearchRequest::Ingredients {
            step_index: 0,
            query: "butter".to_owned(),
        })
        .await;

    assert_eq!(state.recipe.steps[0].helper.ingredient_query, "butter");
    assert_eq!(
        state.recipe.steps[0].helper.ingredient_suggestions,
        warmed.recipe.steps[0].helper.ingredient_suggestions
    );

    Ok(())
}

#[tokio::test]
async fn test_response_for_removed_step_is_ignored() -> anyhow::Result<()> {
    let mut session = Session::new(helpers::demo_catalog()?);
    session.dispatch(Action::AddStep);

    let request = SearchRequest::Ingredients {
        step_index: 1,
        query: "onion".to_owned(),
    };
    let response = session.suggestions_for(&request).await?;

    session.dispatch(Action::RemoveStep { step_index: 1 });
    let before = session.state().clone();
    let state = session.dispatch(response);

    assert_eq!(state, &before);

    Ok(())
}

#[tokio::test]
async fn test_measurement_unit_and_state_lookups() -> anyhow::Result<()> {
    let mut session = Session::new(helpers::demo_catalog()?);
    session.dispatch(Action::AddCompletionConditionToStep { step_index: 0 });

    session
        .search(SearchRequest::ProductMeasurementUnits {
            step_index: 0,
            product_index: 0,
            query: "cu".to_owned(),
        })
        .await;
    let state = session
        .search(SearchRequest::IngredientStates {
            step_index: 0,
            condition_index: 0,
            query: "translu".to_owned(),
        })
        .await;
    let step = &state.recipe.steps[0];

    assert_eq!(step.products[0].measurement_unit_query, "cu");
    assert_eq!(step.products[0].measurement_unit_suggestions.len(), 1);
    assert_eq!(step.products[0].measurement_unit_suggestions[0].name, "cup");
    assert_eq!(
        step.completion_conditions[0].ingredient_state_suggestions[0].name,
        "translucent"
    );

    Ok(())
}

#[tokio::test]
async fn test_dispatch_json_matches_typed_dispatch() -> anyhow::Result<()> {
    let mut typed = Session::new(helpers::demo_catalog()?);
    let mut tagged = Session::new(helpers::demo_catalog()?);

    typed.dispatch(Action::UpdateName {
        name: "Onion soup".to_owned(),
    });
    tagged.dispatch_json(&json!({"type": "update_name", "name": "Onion soup"}));
    tagged.dispatch_json(&json!({"type": "no_such_action"}));

    assert_eq!(typed.state(), tagged.state());

    Ok(())
}
