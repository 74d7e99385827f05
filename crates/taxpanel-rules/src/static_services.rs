//! Table-driven collaborator implementations
//!
//! These back the demo scenarios and tests. Tables are plain serde structs so
//! a scenario file can describe the catalog and comparator alongside the
//! declaration itself.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use taxpanel_core::{CaseContext, CaseType, Error, LegalBasis, Result, ScreenMode};

use crate::services::{LegalBasisComparator, RiskAssessmentCatalog, ScreenModeProvider};

/// Risk assessment catalog keyed by case type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticRiskCatalog {
    /// Labels returned for case types without a dedicated entry
    #[serde(default)]
    pub default: Vec<String>,

    /// Labels per case type
    #[serde(default)]
    pub by_case_type: BTreeMap<CaseType, Vec<String>>,
}

impl StaticRiskCatalog {
    /// Create a catalog returning the same labels for every case
    pub fn with_default<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default: labels.into_iter().map(Into::into).collect(),
            by_case_type: BTreeMap::new(),
        }
    }

    /// Register labels for a specific case type
    pub fn with_case_type<I, S>(mut self, case_type: CaseType, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.by_case_type
            .insert(case_type, labels.into_iter().map(Into::into).collect());
        self
    }
}

impl RiskAssessmentCatalog for StaticRiskCatalog {
    fn fetch_all_risk_assessments(&self, context: &CaseContext) -> Result<Vec<String>> {
        Ok(self
            .by_case_type
            .get(&context.case_type)
            .unwrap_or(&self.default)
            .clone())
    }
}

/// Legal basis definitions keyed by label
///
/// Asking about a label that has no definition is a business rule failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticLegalBasisComparator {
    #[serde(default)]
    pub definitions: BTreeMap<String, Vec<LegalBasis>>,
}

impl StaticLegalBasisComparator {
    /// Create an empty comparator
    pub fn new() -> Self {
        Self::default()
    }

    /// Define the legal bases belonging to a label
    pub fn with_definition(
        mut self,
        label: impl Into<String>,
        bases: impl IntoIterator<Item = LegalBasis>,
    ) -> Self {
        self.definitions
            .insert(label.into(), bases.into_iter().collect());
        self
    }
}

impl LegalBasisComparator for StaticLegalBasisComparator {
    fn compare_legal_basis_labels(&self, label: &str, legal_basis: LegalBasis) -> Result<bool> {
        let bases = self.definitions.get(label).ok_or_else(|| {
            Error::business_rule(format!("no legal basis definition for label '{}'", label))
        })?;

        Ok(bases.contains(&legal_basis))
    }
}

/// View parameters holding the current screen mode
#[derive(Debug, Default)]
pub struct ViewParams {
    mode: RwLock<ScreenMode>,
}

impl ViewParams {
    /// Create view parameters in the given mode
    pub fn new(mode: ScreenMode) -> Self {
        Self {
            mode: RwLock::new(mode),
        }
    }

    /// Switch the screen mode
    pub fn set_mode(&self, mode: ScreenMode) {
        *self.mode.write() = mode;
    }
}

impl ScreenModeProvider for ViewParams {
    fn current_screen_mode(&self) -> ScreenMode {
        *self.mode.read()
    }
}
