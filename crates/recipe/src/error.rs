use strum::Display;
use thiserror::Error;

pub type BuilderResult<T> = Result<T, BuilderError>;

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    #[strum(serialize = "preparation")]
    Preparation,
    #[strum(serialize = "ingredient")]
    Ingredient,
    #[strum(serialize = "instrument")]
    Instrument,
    #[strum(serialize = "product")]
    Product,
    #[strum(serialize = "completion condition")]
    CompletionCondition,
    #[strum(serialize = "measurement unit")]
    MeasurementUnit,
    #[strum(serialize = "ingredient state")]
    IngredientState,
    #[strum(serialize = "portion count")]
    YieldsPortions,
}

/// Reasons a builder action is rejected.
///
/// Rejections never escape [`crate::reduce`]: they are logged and the state is
/// returned unchanged. [`crate::try_reduce`] hands them to the caller instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuilderError {
    #[error("step {step_index} not found")]
    StepNotFound { step_index: usize },

    #[error("{kind} {index} not found in step {step_index}")]
    ItemNotFound {
        kind: ItemKind,
        step_index: usize,
        index: usize,
    },

    #[error("{kind} `{name}` is not among the current suggestions")]
    SelectionNotFound { kind: ItemKind, name: String },

    #[error("no {0} provided")]
    MissingValue(ItemKind),

    #[error("invalid quantity {0}")]
    InvalidQuantity(f32),

    #[error("step {step_index} must keep at least one product")]
    LastProduct { step_index: usize },

    #[error("unknown action: {0}")]
    UnknownAction(String),
}
