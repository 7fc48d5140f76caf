use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use summit_core::TalkSet;
use summit_logging::summit_info;
use thiserror::Error;

use crate::persist::{write_atomically, PersistError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("talk set json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Write `talk_set` as pretty-printed JSON, replacing any previous file.
pub fn save_talk_set(path: &Path, talk_set: &TalkSet) -> Result<PathBuf, StoreError> {
    let json = serde_json::to_string_pretty(talk_set)?;
    let written = write_atomically(path, json.as_bytes())?;
    summit_info!("Saved {} talks to {:?}", talk_set.len(), written);
    Ok(written)
}

/// Load a talk set previously written by [`save_talk_set`]. Missing fields
/// load as empty strings and lists.
pub fn load_talk_set(path: &Path) -> Result<TalkSet, StoreError> {
    let content = fs::read_to_string(path)?;
    let talk_set: TalkSet = serde_json::from_str(&content)?;
    summit_info!("Loaded {} talks from {:?}", talk_set.len(), path);
    Ok(talk_set)
}
