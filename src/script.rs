//! Replay of recorded builder sessions.
//!
//! A script is a JSON array. Entries carrying a `search` tag are suggestion
//! lookups run through the session provider; every other entry is a tagged
//! builder action.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use sous_shared::provider::{MemoryCatalog, SuggestionProvider};

use crate::session::{SearchRequest, Session};

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ScriptEntry {
    Search(SearchRequest),
    Action(serde_json::Value),
}

pub fn parse_script(json: &str) -> anyhow::Result<Vec<ScriptEntry>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_script(path: impl AsRef<Path>) -> anyhow::Result<Vec<ScriptEntry>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;

    parse_script(&json).with_context(|| format!("invalid script {}", path.display()))
}

pub async fn run_script<P: SuggestionProvider>(session: &mut Session<P>, entries: Vec<ScriptEntry>) {
    for entry in entries {
        match entry {
            ScriptEntry::Search(request) => {
                session.search(request).await;
            }
            ScriptEntry::Action(value) => {
                session.dispatch_json(&value);
            }
        }
    }
}

/// What `sous replay` needs to know.
#[derive(Clone, Debug)]
pub struct ReplayOptions<'a> {
    pub script: &'a Path,
    pub catalog: Option<&'a Path>,
    /// Emit the creation request instead of the whole builder state
    pub payload: bool,
    pub pretty: bool,
}

/// Runs a script from a fresh builder and renders the outcome as JSON.
pub async fn replay(options: ReplayOptions<'_>) -> anyhow::Result<String> {
    let catalog = match options.catalog {
        Some(path) => MemoryCatalog::from_path(path)?,
        None => MemoryCatalog::default(),
    };
    let entries = load_script(options.script)?;

    tracing::info!(entries = entries.len(), "replaying builder script");

    let mut session = Session::new(catalog);
    run_script(&mut session, entries).await;
    let state = session.into_state();

    let value = if options.payload {
        if !state.submission_allowed {
            tracing::warn!("recipe is not ready for submission");
        }
        serde_json::to_value(state.to_create_request())?
    } else {
        serde_json::to_value(&state)?
    };

    let rendered = if options.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    Ok(rendered)
}
