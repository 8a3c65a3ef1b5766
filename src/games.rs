//! Reading normalized tables back as typed games.

use crate::error::{ConvertError, Result};
use crate::models::Game;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load every game from a normalized table file
pub fn load_games(path: &Path) -> Result<Vec<Game>> {
    let reader = csv::Reader::from_path(path).map_err(|e| ConvertError::csv(path, e))?;
    collect_games(reader, path)
}

/// Read games from any source; `label` names the source in errors
pub fn read_games<R: Read>(reader: R, label: &Path) -> Result<Vec<Game>> {
    collect_games(csv::Reader::from_reader(reader), label)
}

fn collect_games<R: Read>(mut reader: csv::Reader<R>, label: &Path) -> Result<Vec<Game>> {
    let games = reader
        .deserialize()
        .collect::<std::result::Result<Vec<Game>, _>>()
        .map_err(|e| ConvertError::csv(label, e))?;

    debug!("Loaded {} games from {}", games.len(), label.display());
    Ok(games)
}
