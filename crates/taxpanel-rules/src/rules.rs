//! Pure decision functions behind the panel rules
//!
//! Each rule is split into a decision computed from plain inputs and an
//! `apply` step that writes the decision into the panel state. The engine
//! gathers inputs from the declaration and its collaborators; everything in
//! here is deterministic and side-effect free until `apply` is called.

use std::collections::BTreeSet;
use taxpanel_core::{CompletionOfProcessingPanel, OverviewTaxAssessment, ScreenMode};

/// Union of the chosen risk labels and the labels fetched from the catalog
pub fn merge_risk_assessments<I, S>(existing: &BTreeSet<String>, fetched: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut merged = existing.clone();
    merged.extend(fetched.into_iter().map(Into::into));
    merged
}

/// Editability of the risk assessment checkbox
///
/// Enabled and required always move together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxGate {
    /// Enabled and required
    Open,
    /// Disabled and optional
    Closed,
}

impl CheckboxGate {
    /// Gate for the given risk flag and screen mode
    pub fn evaluate(risk: bool, mode: ScreenMode) -> Self {
        if risk && mode.is_standard() {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Whether the checkbox is enabled and required
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Write the gate into the panel's checkbox flags
    pub fn apply(&self, panel: &mut CompletionOfProcessingPanel) {
        let open = self.is_open();
        panel.risk_assessment_checkbox_enabled = open;
        panel.risk_assessment_checkbox_required = open;
    }
}

/// Outcome of the shipping/aviation relief rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingAviationDecision {
    /// Legal basis does not match; keep the current state
    Unchanged,
    /// Total still open; show the selection and keep chosen options
    Show,
    /// Total settled; hide the selection and discard chosen options
    HideAndClear,
}

impl ShippingAviationDecision {
    /// Decide from the comparator result and whether the assessed total is non-zero
    pub fn decide(legal_basis_matches: bool, total_open: bool) -> Self {
        match (legal_basis_matches, total_open) {
            (false, _) => Self::Unchanged,
            (true, true) => Self::Show,
            (true, false) => Self::HideAndClear,
        }
    }

    /// Write the decision into the shipping/aviation selection state
    pub fn apply(&self, overview: &mut OverviewTaxAssessment) {
        match self {
            Self::Unchanged => {}
            Self::Show => overview.is_selection_shipping_aviation = true,
            Self::HideAndClear => overview.reset(),
        }
    }
}
