use serde::de::DeserializeOwned;

use crate::error::Result;

/// Parse a JSON array dataset (skills, jobs or education periods)
pub fn parse_dataset<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}

