//! Player alias normalization.
//!
//! An alias directory holds one file per player. The file stem is the
//! canonical name and every non-blank line of the file is an alias for it.
//! Names not listed anywhere are left unchanged.

use crate::error::{ConvertError, Result};
use crate::models::{Game, ParsedRow};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Lookup from alias to canonical player name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    lookup: HashMap<String, String>,
}

impl AliasTable {
    /// Build from canonical name → aliases
    pub fn from_aliases<I, S, A>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (S, A)>,
        S: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let mut table = Self::default();
        for (name, list) in aliases {
            let name = name.into();
            for alias in list {
                table.insert(alias.into(), name.clone());
            }
        }
        table
    }

    /// Load every regular file in `dir`, in file name order
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let io_err = |path: &Path, source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut paths: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| io_err(dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut table = Self::default();
        for path in &paths {
            let Some(name) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
                continue;
            };

            let contents = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
            for alias in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
                table.insert(alias.to_string(), name.clone());
            }
        }

        debug!(
            "Loaded {} aliases from {} files in {}",
            table.len(),
            paths.len(),
            dir.display()
        );
        Ok(table)
    }

    fn insert(&mut self, alias: String, name: String) {
        if let Some(previous) = self.lookup.get(&alias) {
            if *previous != name {
                warn!(
                    "Alias '{}' listed for both '{}' and '{}'; using '{}'",
                    alias, previous, name, name
                );
            }
        }
        self.lookup.insert(alias, name);
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Canonical name for `player`, or `player` itself
    pub fn canonical<'a>(&'a self, player: &'a str) -> &'a str {
        self.lookup.get(player).map(String::as_str).unwrap_or(player)
    }

    fn replace(&self, player: &mut String) {
        if let Some(name) = self.lookup.get(player.as_str()) {
            player.clone_from(name);
        }
    }

    /// Rewrite the four player names of a parsed row
    pub fn normalize_row(&self, row: &mut ParsedRow) {
        for player in [&mut row.a, &mut row.b, &mut row.x, &mut row.y] {
            self.replace(player);
        }
    }

    /// Rewrite the four player names of every game
    pub fn normalize_games(&self, games: &mut [Game]) {
        for game in games {
            for player in [
                &mut game.player_a,
                &mut game.player_b,
                &mut game.player_x,
                &mut game.player_y,
            ] {
                self.replace(player);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_row;
    use tempfile::TempDir;

    fn table() -> AliasTable {
        AliasTable::from_aliases([("Nikhil", vec!["Nik", "N."]), ("Alice", vec!["Ali"])])
    }

    #[test]
    fn test_canonical_lookup() {
        let aliases = table();
        assert_eq!(aliases.len(), 3);
        assert_eq!(aliases.canonical("Nik"), "Nikhil");
        assert_eq!(aliases.canonical("N."), "Nikhil");
        assert_eq!(aliases.canonical("Bob"), "Bob");
    }

    #[test]
    fn test_normalize_row() {
        let mut row = parse_row("Nik/Bob,21,Ali/Nikhil,15").unwrap();
        table().normalize_row(&mut row);
        assert_eq!(row.fields(), ["Nikhil", "Bob", "21", "Alice", "Nikhil", "15"]);
    }

    #[test]
    fn test_normalize_games() {
        let mut games = vec![Game {
            date: "08-04-2024".to_string(),
            game_no: 1,
            player_a: "Nik".to_string(),
            player_b: "Alice".to_string(),
            points_ab: 21,
            player_x: "Bob".to_string(),
            player_y: "Ali".to_string(),
            points_xy: 15,
        }];

        table().normalize_games(&mut games);

        assert_eq!(games[0].players(), ["Nikhil", "Alice", "Bob", "Alice"]);
        assert_eq!(games[0].points_ab, 21);
    }

    #[test]
    fn test_load_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Nikhil.txt"), "Nik\n\n  N.  \n").unwrap();
        fs::write(temp_dir.path().join("Alice"), "Ali\n").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        let aliases = AliasTable::load_dir(temp_dir.path()).unwrap();

        assert_eq!(aliases, table());
    }

    #[test]
    fn test_load_missing_dir() {
        let result = AliasTable::load_dir(Path::new("/nonexistent/aliases"));
        match result.unwrap_err() {
            ConvertError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/aliases")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
