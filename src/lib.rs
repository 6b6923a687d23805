pub mod config;
pub mod observability;
pub mod script;
pub mod session;

pub use config::Config;
pub use script::{ReplayOptions, ScriptEntry, replay};
pub use session::{SearchRequest, Session};
