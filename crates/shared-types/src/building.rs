//! Building metadata supplied by the upstream project collaborator
//!
//! Project type and NCC building class select the benchmark rows the
//! compliance engine compares against.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Floor area used when the project has no recorded size
pub const DEFAULT_SIZE_SQM: f64 = 1000.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown project type: {0}")]
    UnknownProjectType(String),

    #[error("Unknown building class: {0}")]
    UnknownBuildingClass(String),
}

/// Building use category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Residential,
    #[default]
    Commercial,
    Industrial,
    Retail,
    Education,
    Healthcare,
    /// Civil works; rated under IS and benchmarked as commercial
    Infrastructure,
}

impl ProjectType {
    pub fn name(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Industrial => "Industrial",
            ProjectType::Retail => "Retail",
            ProjectType::Education => "Education",
            ProjectType::Healthcare => "Healthcare",
            ProjectType::Infrastructure => "Infrastructure",
        }
    }

    pub fn is_infrastructure(&self) -> bool {
        matches!(self, ProjectType::Infrastructure)
    }

    /// Parse a project type id, falling back to commercial for unknown ids
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for ProjectType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "residential" => Ok(ProjectType::Residential),
            "commercial" => Ok(ProjectType::Commercial),
            "industrial" => Ok(ProjectType::Industrial),
            "retail" => Ok(ProjectType::Retail),
            "education" => Ok(ProjectType::Education),
            "healthcare" => Ok(ProjectType::Healthcare),
            "infrastructure" => Ok(ProjectType::Infrastructure),
            other => Err(ParseError::UnknownProjectType(other.to_string())),
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// NCC 2024 building classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingClass {
    /// Apartments
    Class2,
    /// Hotels, boarding houses
    Class3,
    /// Offices
    Class5,
    /// Shops and restaurants
    Class6,
    /// Health care
    Class9a,
    /// Assembly buildings, schools
    Class9b,
    #[default]
    Default,
}

impl BuildingClass {
    pub fn id(&self) -> &'static str {
        match self {
            BuildingClass::Class2 => "class2",
            BuildingClass::Class3 => "class3",
            BuildingClass::Class5 => "class5",
            BuildingClass::Class6 => "class6",
            BuildingClass::Class9a => "class9a",
            BuildingClass::Class9b => "class9b",
            BuildingClass::Default => "default",
        }
    }

    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for BuildingClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "").as_str() {
            "class2" => Ok(BuildingClass::Class2),
            "class3" => Ok(BuildingClass::Class3),
            "class5" => Ok(BuildingClass::Class5),
            "class6" => Ok(BuildingClass::Class6),
            "class9a" => Ok(BuildingClass::Class9a),
            "class9b" => Ok(BuildingClass::Class9b),
            "default" | "" => Ok(BuildingClass::Default),
            other => Err(ParseError::UnknownBuildingClass(other.to_string())),
        }
    }
}

impl std::fmt::Display for BuildingClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Project metadata consumed by the compliance engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingProfile {
    pub project_type: ProjectType,
    pub size_sqm: f64,
    pub ncc_compliance_level: BuildingClass,
}

impl Default for BuildingProfile {
    fn default() -> Self {
        Self {
            project_type: ProjectType::default(),
            size_sqm: DEFAULT_SIZE_SQM,
            ncc_compliance_level: BuildingClass::default(),
        }
    }
}

impl BuildingProfile {
    pub fn new(
        project_type: ProjectType,
        size_sqm: f64,
        ncc_compliance_level: BuildingClass,
    ) -> Self {
        Self {
            project_type,
            size_sqm,
            ncc_compliance_level,
        }
    }

    /// Floor area used for intensity checks: the recorded size, or 1000 m²
    /// when it is missing or not positive
    pub fn effective_size_sqm(&self) -> f64 {
        if self.size_sqm.is_finite() && self.size_sqm > 0.0 {
            self.size_sqm
        } else {
            DEFAULT_SIZE_SQM
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_type_case_insensitive() {
        assert_eq!("Healthcare".parse::<ProjectType>(), Ok(ProjectType::Healthcare));
        assert_eq!(" retail ".parse::<ProjectType>(), Ok(ProjectType::Retail));
    }

    #[test]
    fn test_unknown_project_type_defaults_to_commercial() {
        assert!("stadium".parse::<ProjectType>().is_err());
        assert_eq!(ProjectType::parse_or_default("stadium"), ProjectType::Commercial);
    }

    #[test]
    fn test_parse_building_class() {
        assert_eq!(BuildingClass::parse_or_default("class9a"), BuildingClass::Class9a);
        assert_eq!(BuildingClass::parse_or_default("Class 5"), BuildingClass::Class5);
        assert_eq!(BuildingClass::parse_or_default("class7"), BuildingClass::Default);
    }

    #[test]
    fn test_effective_size_defaults_when_missing() {
        let mut profile = BuildingProfile::default();
        assert_eq!(profile.effective_size_sqm(), 1000.0);
        profile.size_sqm = 0.0;
        assert_eq!(profile.effective_size_sqm(), 1000.0);
        profile.size_sqm = 250.0;
        assert_eq!(profile.effective_size_sqm(), 250.0);
    }

    #[test]
    fn test_profile_serde_ids() {
        let profile = BuildingProfile::new(ProjectType::Education, 500.0, BuildingClass::Class9b);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"education\""));
        assert!(json.contains("\"class9b\""));
    }
}
