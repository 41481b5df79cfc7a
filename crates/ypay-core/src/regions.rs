//! District → sub-district catalog used to drive region selection.
//!
//! The catalog is not derived from the merchant API; it is a fixed table of
//! Yongin-si administrative areas, optionally replaced by a YAML file.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Prefix marking a pseudo sub-district that stands for its whole district
/// (e.g. `전체포곡읍` → `포곡읍`).
const WHOLE_DISTRICT_PREFIX: &str = "전체";

const YONGIN: &[(&str, &[&str])] = &[
    (
        "처인구",
        &[
            "김량장동", "남사읍", "원삼면", "백암면", "양지면", "포곡읍", "모현읍", "역북동",
            "마평동", "유방동", "유림동", "삼가동", "고림동", "운학동", "호계동",
        ],
    ),
    (
        "기흥구",
        &[
            "구갈동", "상갈동", "하갈동", "공세동", "보정동", "신갈동", "영덕동", "중동",
            "서천동", "동백동", "지곡동", "마북동", "청덕동",
        ],
    ),
    (
        "수지구",
        &["풍덕천동", "신봉동", "죽전동", "동천동", "상현동", "성복동", "고기동"],
    ),
    ("포곡읍", &["전체포곡읍"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub name: String,
    pub areas: Vec<String>,
}

impl District {
    #[must_use]
    pub fn contains(&self, area: &str) -> bool {
        self.areas.iter().any(|a| a == area)
    }
}

#[derive(Debug, Deserialize)]
pub struct RegionsFile {
    pub districts: Vec<District>,
}

/// Ordered district table. Order is preserved from the source so selection
/// lists render the same way every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCatalog {
    districts: Vec<District>,
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::yongin()
    }
}

impl RegionCatalog {
    /// The built-in Yongin-si table.
    #[must_use]
    pub fn yongin() -> Self {
        let districts = YONGIN
            .iter()
            .map(|(name, areas)| District {
                name: (*name).to_string(),
                areas: areas.iter().map(|a| (*a).to_string()).collect(),
            })
            .collect();
        Self { districts }
    }

    #[must_use]
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    #[must_use]
    pub fn district(&self, name: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.name == name)
    }

    /// Comma-separated district names, for error messages.
    #[must_use]
    pub fn district_names(&self) -> String {
        self.districts
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolves a `(district, area)` selection to the substring searched for in
    /// merchant addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the district is unknown or the
    /// area does not belong to it.
    pub fn resolve<'a>(&self, district: &str, area: &'a str) -> Result<&'a str, ConfigError> {
        let entry = self.district(district).ok_or_else(|| {
            ConfigError::Validation(format!(
                "unknown district '{district}'; expected one of: {}",
                self.district_names()
            ))
        })?;

        if !entry.contains(area) {
            return Err(ConfigError::Validation(format!(
                "'{area}' is not part of {district}; expected one of: {}",
                entry.areas.join(", ")
            )));
        }

        Ok(search_term(area))
    }
}

/// Maps a catalog area to the address substring it stands for.
#[must_use]
pub fn search_term(area: &str) -> &str {
    match area.strip_prefix(WHOLE_DISTRICT_PREFIX) {
        Some(rest) if !rest.is_empty() => rest,
        _ => area,
    }
}

/// Load and validate a region catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_regions(path: &Path) -> Result<RegionCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RegionsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: RegionsFile = serde_yaml::from_str(&content)?;
    validate_regions(&file)?;

    Ok(RegionCatalog {
        districts: file.districts,
    })
}

fn validate_regions(file: &RegionsFile) -> Result<(), ConfigError> {
    if file.districts.is_empty() {
        return Err(ConfigError::Validation(
            "regions file must list at least one district".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for district in &file.districts {
        if district.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "district name must be non-empty".to_string(),
            ));
        }
        if !seen.insert(district.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate district: '{}'",
                district.name
            )));
        }
        if district.areas.is_empty() {
            return Err(ConfigError::Validation(format!(
                "district '{}' has no areas",
                district.name
            )));
        }
        if district.areas.iter().any(|a| a.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "district '{}' has an empty area name",
                district.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "regions_test.rs"]
mod tests;
