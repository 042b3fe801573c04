//! Compliance verdict types for the six rating and regulatory schemes

use serde::{Deserialize, Serialize};

/// Status tier shared by every scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    Partial,
    NonCompliant,
}

impl ComplianceStatus {
    pub fn is_compliant(&self) -> bool {
        matches!(self, ComplianceStatus::Compliant)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Partial => "partial",
            ComplianceStatus::NonCompliant => "non-compliant",
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One checked rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRequirement {
    pub name: String,
    pub met: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Lifecycle stage label, e.g. "A1-A5" or "Module D"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl ComplianceRequirement {
    /// A presence/documentation check with no measured value
    pub fn check(name: impl Into<String>, met: bool) -> Self {
        Self {
            name: name.into(),
            met,
            value: None,
            threshold: None,
            unit: None,
            stage: None,
            recommendation: None,
        }
    }

    /// A measured value compared against a threshold
    pub fn measured(
        name: impl Into<String>,
        met: bool,
        value: f64,
        threshold: f64,
        unit: &str,
    ) -> Self {
        Self {
            value: Some(value),
            threshold: Some(threshold),
            unit: Some(unit.to_string()),
            ..Self::check(name, met)
        }
    }

    pub fn with_stage(mut self, stage: &str) -> Self {
        self.stage = Some(stage.to_string());
        self
    }

    /// Attach advice, kept only when the requirement failed
    pub fn with_recommendation(mut self, recommendation: &str) -> Self {
        if !self.met {
            self.recommendation = Some(recommendation.to_string());
        }
        self
    }

    /// Value rounded to the nearest integer for display; comparisons use the
    /// unrounded value
    pub fn display_value(&self) -> Option<i64> {
        self.value.filter(|v| v.is_finite()).map(|v| v.round() as i64)
    }
}

/// Number of met requirements in a list
pub fn met_count(requirements: &[ComplianceRequirement]) -> usize {
    requirements.iter().filter(|r| r.met).count()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NccResult {
    pub compliant: bool,
    pub status: ComplianceStatus,
    pub requirements: Vec<ComplianceRequirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GbcaResult {
    pub compliant: bool,
    pub status: ComplianceStatus,
    pub score: u32,
    pub max_score: u32,
    pub requirements: Vec<ComplianceRequirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NabersResult {
    pub compliant: bool,
    pub status: ComplianceStatus,
    pub rating: u32,
    pub max_rating: u32,
    pub requirements: Vec<ComplianceRequirement>,
}

/// Per-stage intensity compared with its share of the benchmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageCheck {
    pub value: f64,
    pub threshold: f64,
    pub met: bool,
}

impl StageCheck {
    pub fn below(value: f64, threshold: f64) -> Self {
        Self {
            value,
            threshold,
            met: value < threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct En15978Stages {
    pub a1a5: StageCheck,
    pub b1b7: StageCheck,
    pub c1c4: StageCheck,
    pub whole_life: StageCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct En15978Result {
    pub compliant: bool,
    pub status: ComplianceStatus,
    pub stages: En15978Stages,
    pub requirements: Vec<ComplianceRequirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateActiveResult {
    pub compliant: bool,
    pub status: ComplianceStatus,
    pub requirements: Vec<ComplianceRequirement>,
}

/// Infrastructure Sustainability rating level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IsRatingLevel {
    NotRated,
    Commended,
    Excellent,
    Leading,
}

impl IsRatingLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            IsRatingLevel::Leading
        } else if score >= 60 {
            IsRatingLevel::Excellent
        } else if score >= 40 {
            IsRatingLevel::Commended
        } else {
            IsRatingLevel::NotRated
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IsRatingLevel::NotRated => "Not Rated",
            IsRatingLevel::Commended => "Commended",
            IsRatingLevel::Excellent => "Excellent",
            IsRatingLevel::Leading => "Leading",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsRatingResult {
    pub compliant: bool,
    pub status: ComplianceStatus,
    pub score: u32,
    pub level: IsRatingLevel,
    pub is_infrastructure: bool,
    pub requirements: Vec<ComplianceRequirement>,
}

/// Verdicts of all six schemes for one totals snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub ncc: NccResult,
    pub gbca: GbcaResult,
    pub nabers: NabersResult,
    pub en15978: En15978Result,
    pub climate_active: ClimateActiveResult,
    pub is_rating: IsRatingResult,
}

impl ComplianceResult {
    /// (scheme name, status) pairs in report order
    pub fn statuses(&self) -> [(&'static str, ComplianceStatus); 6] {
        [
            ("NCC 2024", self.ncc.status),
            ("Green Star", self.gbca.status),
            ("NABERS", self.nabers.status),
            ("EN 15978", self.en15978.status),
            ("Climate Active", self.climate_active.status),
            ("IS Rating", self.is_rating.status),
        ]
    }

    pub fn compliant_count(&self) -> usize {
        self.statuses().iter().filter(|(_, s)| s.is_compliant()).count()
    }
}
