pub mod catalog;
mod command;
pub mod provider;

pub use command::*;
