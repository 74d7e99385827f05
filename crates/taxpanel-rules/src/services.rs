//! Collaborator capabilities consumed by the panel rule engine

use taxpanel_core::{CaseContext, LegalBasis, Result, ScreenMode};

/// Catalog of risk assessment labels applicable to a case
pub trait RiskAssessmentCatalog: Send + Sync {
    /// Fetch every risk assessment label known for the given case.
    ///
    /// May return an empty list. Errors are propagated by the engine unchanged.
    fn fetch_all_risk_assessments(&self, context: &CaseContext) -> Result<Vec<String>>;
}

/// Comparison of a named legal basis definition against an overview line
pub trait LegalBasisComparator: Send + Sync {
    /// Whether `legal_basis` belongs to the legal basis definition named by `label`
    fn compare_legal_basis_labels(&self, label: &str, legal_basis: LegalBasis) -> Result<bool>;
}

/// Read access to the current view parameters
pub trait ScreenModeProvider: Send + Sync {
    /// Get the screen mode the panel is displayed in
    fn current_screen_mode(&self) -> ScreenMode;
}
