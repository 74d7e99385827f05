//! Panel rule engine
//!
//! Derives the completion-of-processing panel state of a [`Declaration`].
//! Every operation borrows the declaration mutably for the duration of one
//! UI event and runs to completion; collaborator calls are synchronous.
//! A failing collaborator aborts the current rule. Mutations made before the
//! failing call are kept.

use std::sync::Arc;
use taxpanel_core::{Declaration, Result};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::event::PanelEvent;
use crate::rules::{merge_risk_assessments, CheckboxGate, ShippingAviationDecision};
use crate::services::{LegalBasisComparator, RiskAssessmentCatalog, ScreenModeProvider};

const RULE_INVOCATIONS: &str = "taxpanel_rule_invocations_total";
const RULE_FAILURES: &str = "taxpanel_rule_failures_total";

/// Rule engine for the completion-of-processing panel
pub struct PanelRuleEngine {
    catalog: Arc<dyn RiskAssessmentCatalog>,
    comparator: Arc<dyn LegalBasisComparator>,
    view_params: Arc<dyn ScreenModeProvider>,
    config: EngineConfig,
}

impl PanelRuleEngine {
    /// Create a new engine with default configuration
    pub fn new(
        catalog: Arc<dyn RiskAssessmentCatalog>,
        comparator: Arc<dyn LegalBasisComparator>,
        view_params: Arc<dyn ScreenModeProvider>,
    ) -> Self {
        Self {
            catalog,
            comparator,
            view_params,
            config: EngineConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Dispatch a panel lifecycle event
    pub fn handle(&self, event: PanelEvent, declaration: &mut Declaration) -> Result<()> {
        debug!(event = event.name(), "Handling panel event");

        match event {
            PanelEvent::Open => self.on_panel_open(declaration),
            PanelEvent::RiskChanged => {
                self.on_risk_flag_changed(declaration);
                Ok(())
            }
        }
    }

    /// Reset the shipping/aviation selection and re-derive the whole panel state
    pub fn on_panel_open(&self, declaration: &mut Declaration) -> Result<()> {
        record_invocation("panel_open");
        info!(
            case_type = ?declaration.basic_data.case_type,
            module_enabled = declaration.module_enabled,
            "Opening completion-of-processing panel"
        );

        declaration.panel_mut().overview_tax_assessment.reset();

        if !declaration.module_enabled && self.config.skip_disabled_module {
            debug!("Module disabled for this case, only applying checkbox gating");
            declaration.all_risk_assessments.clear();
            self.configure_risk_assessment_checkbox(declaration);
            return Ok(());
        }

        self.initialize_risk_assessment_data(declaration)?;
        self.configure_risk_assessment_checkbox(declaration);
        self.hide_selection_tax_relief_for_shipping_or_aviation(declaration)
    }

    /// Merge the chosen risk labels with the catalog into the selectable labels
    pub fn initialize_risk_assessment_data(&self, declaration: &mut Declaration) -> Result<()> {
        record_invocation("risk_assessment_merge");

        let context = declaration.case_context();
        let fetched = self
            .catalog
            .fetch_all_risk_assessments(&context)
            .map_err(|e| {
                record_failure("risk_assessment_merge");
                warn!(error = %e, case_type = ?context.case_type, "Risk assessment catalog failed");
                e
            })?;

        let merged = merge_risk_assessments(&declaration.risk_assessment, fetched);
        debug!(
            existing = declaration.risk_assessment.len(),
            merged = merged.len(),
            "Merged risk assessment labels"
        );

        declaration.all_risk_assessments = merged;
        Ok(())
    }

    /// Handle a toggle of the risk flag
    ///
    /// Clearing the flag discards every chosen risk label.
    pub fn on_risk_flag_changed(&self, declaration: &mut Declaration) {
        record_invocation("risk_flag_changed");

        if !declaration.risk {
            debug!(
                cleared = declaration.risk_assessment.len(),
                "Risk flag cleared, discarding risk assessment selection"
            );
            declaration.risk_assessment.clear();
        }

        self.configure_risk_assessment_checkbox(declaration);
    }

    /// Alias of [`Self::on_risk_flag_changed`] matching the panel's change handler name
    pub fn risk_on_change(&self, declaration: &mut Declaration) {
        self.on_risk_flag_changed(declaration);
    }

    /// Enable and require the risk checkbox only for risky cases in standard mode
    pub fn configure_risk_assessment_checkbox(&self, declaration: &mut Declaration) {
        record_invocation("checkbox_gating");

        let mode = self.view_params.current_screen_mode();
        let gate = CheckboxGate::evaluate(declaration.risk, mode);

        match declaration.completion_of_processing.as_mut() {
            Some(panel) => {
                gate.apply(panel);
                debug!(risk = declaration.risk, mode = %mode, gate = ?gate, "Configured risk checkbox");
            }
            None => debug!("No panel state, skipping checkbox gating"),
        }
    }

    /// Show or discard the shipping/aviation relief selection
    ///
    /// Only the first overview line is consulted. Without an overview line or
    /// panel state the rule does nothing and the comparator is not called.
    pub fn hide_selection_tax_relief_for_shipping_or_aviation(
        &self,
        declaration: &mut Declaration,
    ) -> Result<()> {
        record_invocation("shipping_aviation");

        let Some(overview) = declaration.first_overview() else {
            debug!("No overview lines, leaving shipping/aviation selection unchanged");
            return Ok(());
        };
        let legal_basis = overview.legal_basis;
        let total_open = overview.is_open();

        let Some(panel) = declaration.completion_of_processing.as_mut() else {
            debug!("No panel state, leaving shipping/aviation selection unchanged");
            return Ok(());
        };

        let matches = self
            .comparator
            .compare_legal_basis_labels(&self.config.shipping_aviation_label, legal_basis)
            .map_err(|e| {
                record_failure("shipping_aviation");
                warn!(error = %e, legal_basis = %legal_basis, "Legal basis comparison failed");
                e
            })?;

        let decision = ShippingAviationDecision::decide(matches, total_open);
        decision.apply(&mut panel.overview_tax_assessment);

        debug!(
            legal_basis = %legal_basis,
            matches,
            total_open,
            decision = ?decision,
            "Applied shipping/aviation rule"
        );

        Ok(())
    }
}

fn record_invocation(rule: &'static str) {
    metrics::counter!(RULE_INVOCATIONS, "rule" => rule).increment(1);
}

fn record_failure(rule: &'static str) {
    metrics::counter!(RULE_FAILURES, "rule" => rule).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_services::{StaticLegalBasisComparator, StaticRiskCatalog, ViewParams};
    use rust_decimal::Decimal;
    use taxpanel_core::{CaseType, LegalBasis, ScreenMode, TaxDeclarationOverview};

    const SHIPPING: LegalBasis = LegalBasis {
        id: 24,
        addition_id: 56,
    };

    fn create_engine(mode: ScreenMode) -> PanelRuleEngine {
        PanelRuleEngine::new(
            Arc::new(StaticRiskCatalog::with_default(["risk1"])),
            Arc::new(
                StaticLegalBasisComparator::new().with_definition("SHIPPING_OR_AVIATION", [SHIPPING]),
            ),
            Arc::new(ViewParams::new(mode)),
        )
    }

    fn declaration_with_total(total: Decimal) -> Declaration {
        Declaration::new(CaseType::TaxDeclaration1100)
            .with_panel()
            .with_overview(TaxDeclarationOverview::new(SHIPPING, total))
    }

    #[test]
    fn test_handle_open_runs_all_rules() {
        let engine = create_engine(ScreenMode::Standard);
        let mut declaration = declaration_with_total(Decimal::NEGATIVE_ONE).with_risk(true);

        engine.handle(PanelEvent::Open, &mut declaration).unwrap();

        let panel = declaration.completion_of_processing.as_ref().unwrap();
        assert!(declaration.all_risk_assessments.contains("risk1"));
        assert!(panel.risk_assessment_checkbox_enabled);
        assert!(panel.overview_tax_assessment.is_selection_shipping_aviation);
        assert!(panel
            .overview_tax_assessment
            .selection_tax_relief_for_shipping_or_aviation
            .is_empty());
    }

    #[test]
    fn test_handle_risk_changed() {
        let engine = create_engine(ScreenMode::Standard);
        let mut declaration = Declaration::default()
            .with_panel()
            .with_risk_assessment(["risk1"]);

        engine
            .handle(PanelEvent::RiskChanged, &mut declaration)
            .unwrap();

        assert!(declaration.risk_assessment.is_empty());
    }

    #[test]
    fn test_undefined_custom_label_fails() {
        let engine = create_engine(ScreenMode::Standard).with_config(EngineConfig {
            shipping_aviation_label: "SEA_AND_AIR".to_string(),
            ..Default::default()
        });
        let mut declaration = declaration_with_total(Decimal::ONE);

        let err = engine
            .hide_selection_tax_relief_for_shipping_or_aviation(&mut declaration)
            .unwrap_err();
        assert!(err.is_business_rule());
    }

    #[test]
    fn test_gating_without_panel_is_noop() {
        let engine = create_engine(ScreenMode::Standard);
        let mut declaration = Declaration::default().with_risk(true);

        engine.configure_risk_assessment_checkbox(&mut declaration);

        assert!(declaration.completion_of_processing.is_none());
    }
}
