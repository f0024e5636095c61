//! Reading configurations and writing saved grids.
//!
//! The format is chosen by the extension of the file:
//! `.yaml`/`.yml` for YAML, `.toml` for TOML, and JSON for anything else.

use log::debug;
use rlifesim_lib::{ImportRecord, SavedGrid};
use serde::{Deserialize, Serialize};
use std::{error::Error, fs, io::ErrorKind, path::Path};

/// File formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Guesses the format from the extension.
    pub(crate) fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Format::Yaml,
            Some("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

/// TOML documents cannot be arrays, so records go in a table.
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigurations {
    #[serde(default)]
    configuration: Vec<ImportRecord>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlSaved {
    #[serde(default)]
    saved: Vec<SavedGrid>,
}

/// Parses a list of configurations.
pub(crate) fn parse_records(s: &str, format: Format) -> Result<Vec<ImportRecord>, Box<dyn Error>> {
    Ok(match format {
        Format::Json => serde_json::from_str(s)?,
        Format::Yaml => serde_yaml::from_str(s)?,
        Format::Toml => toml::from_str::<TomlConfigurations>(s)?.configuration,
    })
}

/// Reads a list of configurations from a file.
pub(crate) fn read_records(path: &Path) -> Result<Vec<ImportRecord>, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let records = parse_records(&s, Format::from_path(path))?;
    debug!("Read {} configurations from {}.", records.len(), path.display());
    Ok(records)
}

/// Parses a list of saved grids.
pub(crate) fn parse_saved(s: &str, format: Format) -> Result<Vec<SavedGrid>, Box<dyn Error>> {
    Ok(match format {
        Format::Json => serde_json::from_str(s)?,
        Format::Yaml => serde_yaml::from_str(s)?,
        Format::Toml => toml::from_str::<TomlSaved>(s)?.saved,
    })
}

/// Serializes a list of saved grids.
pub(crate) fn saved_to_string(
    saved: &[SavedGrid],
    format: Format,
) -> Result<String, Box<dyn Error>> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(saved)?,
        Format::Yaml => serde_yaml::to_string(saved)?,
        Format::Toml => toml::to_string_pretty(&TomlSaved {
            saved: saved.to_vec(),
        })?,
    })
}

/// Reads the saved grids from a file.
///
/// A missing file holds no grids.
pub(crate) fn read_saved(path: &Path) -> Result<Vec<SavedGrid>, Box<dyn Error>> {
    match fs::read_to_string(path) {
        Ok(s) => parse_saved(&s, Format::from_path(path)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Adds a grid to the saved grids of `saved`,
/// replacing any grid with the same title.
pub(crate) fn upsert(saved: &mut Vec<SavedGrid>, grid: SavedGrid) {
    match saved.iter_mut().find(|s| s.title == grid.title) {
        Some(old) => *old = grid,
        None => saved.push(grid),
    }
}

/// Writes a grid to a file of saved grids.
pub(crate) fn write_saved(path: &Path, grid: SavedGrid) -> Result<(), Box<dyn Error>> {
    let mut saved = read_saved(path)?;
    upsert(&mut saved, grid);
    let s = saved_to_string(&saved, Format::from_path(path))?;
    fs::write(path, s)?;
    debug!("Saved {} grids to {}.", saved.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlifesim_lib::Grid;

    #[test]
    fn format() {
        assert_eq!(Format::from_path(Path::new("a.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.YAML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("dir/a.toml")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("a.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("a")), Format::Json);
    }

    #[test]
    fn records() -> Result<(), Box<dyn Error>> {
        let json = r#"[{"title": "Blinker", "contents": [[2, 1], [2, 2], [2, 3]]}]"#;
        let yaml = "- title: Blinker\n  contents:\n    - [2, 1]\n    - [2, 2]\n    - [2, 3]\n";
        let toml = "[[configuration]]\ntitle = \"Blinker\"\ncontents = [[2, 1], [2, 2], [2, 3]]\n";

        let expected = vec![ImportRecord::new("Blinker", [(2, 1), (2, 2), (2, 3)])];
        assert_eq!(parse_records(json, Format::Json)?, expected);
        assert_eq!(parse_records(yaml, Format::Yaml)?, expected);
        assert_eq!(parse_records(toml, Format::Toml)?, expected);
        Ok(())
    }

    #[test]
    fn malformed_records() {
        assert!(parse_records(r#"[{"title": "Blinker"}]"#, Format::Json).is_err());
        assert!(parse_records("configuration = 1", Format::Toml).is_err());
    }

    #[test]
    fn saved() -> Result<(), Box<dyn Error>> {
        let saved = vec![
            SavedGrid::new("Glider", &Grid::glider(8, 8)),
            SavedGrid::new("Nothing", &Grid::empty(3, 4)),
        ];
        for format in [Format::Json, Format::Yaml, Format::Toml] {
            let s = saved_to_string(&saved, format)?;
            assert_eq!(parse_saved(&s, format)?, saved);
        }
        Ok(())
    }

    #[test]
    fn upsert_replaces_by_title() {
        let mut saved = vec![SavedGrid::new("Glider", &Grid::glider(8, 8))];
        upsert(&mut saved, SavedGrid::new("Block", &Grid::empty(4, 4)));
        upsert(&mut saved, SavedGrid::new("Glider", &Grid::glider(5, 5)));
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].grid.rows, 5);
        assert_eq!(saved[1].title, "Block");
    }
}
