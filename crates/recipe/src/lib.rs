pub mod action;
pub mod derive;
pub mod error;
pub mod payload;
mod reducer;
pub mod state;

pub use action::Action;
pub use derive::{available_instruments_up_to, available_products_up_to, derived_product_name};
pub use error::{BuilderError, BuilderResult, ItemKind};
pub use payload::*;
pub use reducer::{reduce, reduce_json, try_reduce};
pub use state::*;
