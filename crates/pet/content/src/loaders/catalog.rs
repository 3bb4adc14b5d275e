//! Effect catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use pet_core::env::{CleaningStep, FoodEffect, RestCycle, ToyEffect};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalogs;
use crate::loaders::{LoadResult, read_file};

/// Catalog overlay structure for RON files. Every table is optional; an
/// omitted table keeps the built-in entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub foods: Option<BTreeMap<String, FoodEffect>>,
    #[serde(default)]
    pub toys: Option<BTreeMap<String, ToyEffect>>,
    #[serde(default)]
    pub cleaning: Option<BTreeMap<String, CleaningStep>>,
    #[serde(default)]
    pub rest: Option<BTreeMap<String, RestCycle>>,
}

/// Loader for effect catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load catalogs from a RON file, overlaying the built-ins table by
    /// table. The merged result is validated before it is returned.
    pub fn load(path: &Path) -> LoadResult<Catalogs> {
        let content = read_file(path)?;
        let file: CatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        Self::merge(file)
    }

    /// Merge an overlay into the built-in catalogs.
    pub fn merge(file: CatalogFile) -> LoadResult<Catalogs> {
        let builtin = Catalogs::builtin();
        let catalogs = Catalogs {
            foods: file.foods.unwrap_or(builtin.foods),
            toys: file.toys.unwrap_or(builtin.toys),
            cleaning: file.cleaning.unwrap_or(builtin.cleaning),
            rest: file.rest.unwrap_or(builtin.rest),
        };
        catalogs
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid catalog: {}", e))?;
        Ok(catalogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const OVERLAY: &str = r#"(
        foods: Some({
            "jerky": (hunger: 15.0, happiness: 12.0),
        }),
    )"#;

    #[test]
    fn overlay_replaces_one_table_and_keeps_the_rest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(OVERLAY.as_bytes()).unwrap();

        let catalogs = CatalogLoader::load(file.path()).unwrap();
        assert_eq!(catalogs.foods.len(), 1);
        assert!(catalogs.foods.contains_key("jerky"));
        // Omitted energy field defaults to zero.
        assert_eq!(catalogs.foods["jerky"].energy, 0.0);
        // Untouched tables come from the built-ins.
        assert!(catalogs.toys.contains_key("ball"));
        assert!(catalogs.rest.contains_key("nap"));
    }

    #[test]
    fn empty_overlay_yields_the_builtins() {
        let catalogs = CatalogLoader::merge(CatalogFile::default()).unwrap();
        assert_eq!(catalogs, Catalogs::builtin());
    }

    #[test]
    fn overlay_dropping_a_default_id_is_rejected() {
        let file = CatalogFile {
            toys: Some(BTreeMap::new()),
            ..CatalogFile::default()
        };
        assert!(CatalogLoader::merge(file).is_err());
    }
}
