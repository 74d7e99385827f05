//! Stand-in collaborators for testing
//!
//! Provides configurable implementations of the collaborator traits that
//! record how often they were called, so tests can assert on both the
//! resulting declaration and the collaborator traffic.

#![allow(dead_code)]

use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use taxpanel_core::{
    CaseContext, CaseType, Declaration, Error, LegalBasis, OverviewTaxAssessment, Result,
    ScreenMode, TaxDeclarationOverview,
};
use taxpanel_rules::{
    LegalBasisComparator, PanelRuleEngine, RiskAssessmentCatalog, ViewParams,
};

pub const RISK1: &str = "risk1";
pub const RISK2: &str = "risk2";
pub const UNIQUE_RISK: &str = "UniqueRisk";

/// Catalog returning a fixed list of labels
pub struct MockCatalog {
    labels: Vec<String>,
    fail: bool,
    call_count: AtomicU32,
    last_context: Mutex<Option<CaseContext>>,
}

impl MockCatalog {
    pub fn returning(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            fail: false,
            call_count: AtomicU32::new(0),
            last_context: Mutex::new(None),
        }
    }

    /// A catalog that always fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::returning(&[])
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_context(&self) -> Option<CaseContext> {
        *self.last_context.lock()
    }
}

impl RiskAssessmentCatalog for MockCatalog {
    fn fetch_all_risk_assessments(&self, context: &CaseContext) -> Result<Vec<String>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_context.lock() = Some(*context);

        if self.fail {
            return Err(Error::business_rule("Simulated catalog failure"));
        }
        Ok(self.labels.clone())
    }
}

/// Comparator answering every question the same way
pub struct MockComparator {
    answer: Option<bool>,
    call_count: AtomicU32,
    last_call: Mutex<Option<(String, LegalBasis)>>,
}

impl MockComparator {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Some(answer),
            call_count: AtomicU32::new(0),
            last_call: Mutex::new(None),
        }
    }

    /// A comparator that always fails
    pub fn failing() -> Self {
        Self {
            answer: None,
            call_count: AtomicU32::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_call(&self) -> Option<(String, LegalBasis)> {
        self.last_call.lock().clone()
    }
}

impl LegalBasisComparator for MockComparator {
    fn compare_legal_basis_labels(&self, label: &str, legal_basis: LegalBasis) -> Result<bool> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_call.lock() = Some((label.to_string(), legal_basis));

        self.answer
            .ok_or_else(|| Error::business_rule("Simulated legal basis lookup failure"))
    }
}

/// Engine wired to stand-ins, with handles kept for assertions
pub struct Harness {
    pub engine: PanelRuleEngine,
    pub catalog: Arc<MockCatalog>,
    pub comparator: Arc<MockComparator>,
    pub view_params: Arc<ViewParams>,
}

impl Harness {
    pub fn new(catalog: MockCatalog, comparator: MockComparator, mode: ScreenMode) -> Self {
        let catalog = Arc::new(catalog);
        let comparator = Arc::new(comparator);
        let view_params = Arc::new(ViewParams::new(mode));

        let engine = PanelRuleEngine::new(catalog.clone(), comparator.clone(), view_params.clone());

        Self {
            engine,
            catalog,
            comparator,
            view_params,
        }
    }

    pub fn with_catalog(labels: &[&str]) -> Self {
        Self::new(
            MockCatalog::returning(labels),
            MockComparator::answering(false),
            ScreenMode::Standard,
        )
    }

    pub fn with_comparator(answer: bool) -> Self {
        Self::new(
            MockCatalog::returning(&[]),
            MockComparator::answering(answer),
            ScreenMode::Standard,
        )
    }

    pub fn with_mode(mode: ScreenMode) -> Self {
        Self::new(
            MockCatalog::returning(&[]),
            MockComparator::answering(false),
            mode,
        )
    }
}

/// Declaration with panel state, as the workflow session hands it over
pub fn setup_model() -> Declaration {
    Declaration::new(CaseType::TaxDeclaration1100).with_panel()
}

/// Declaration with a single shipping-relevant overview line
pub fn setup_model_with_overview(assessed: bool, initially_shown: bool) -> Declaration {
    let total = if assessed { Decimal::ZERO } else { Decimal::ONE };

    let mut model = setup_model().with_overview(TaxDeclarationOverview::new(
        LegalBasis::new(24, 56),
        total,
    ));
    model.panel_mut().overview_tax_assessment.is_selection_shipping_aviation = initially_shown;
    model
}

/// Shipping/aviation state of the panel
pub fn overview(model: &Declaration) -> &OverviewTaxAssessment {
    &model
        .completion_of_processing
        .as_ref()
        .expect("panel state present")
        .overview_tax_assessment
}

pub fn labels(items: &[&str]) -> std::collections::BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
