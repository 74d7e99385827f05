//! Taxpanel Rules
//!
//! Business rules for the completion-of-processing step of a tax declaration
//! workflow. The engine derives panel state from the declaration and the
//! current screen mode:
//! - Selectable risk assessment labels (catalog merge)
//! - Risk assessment checkbox enablement (risk flag and screen mode gating)
//! - Shipping or aviation tax relief selection (legal basis and assessed total)

pub mod config;
pub mod engine;
pub mod event;
pub mod rules;
pub mod services;
pub mod static_services;

pub use config::EngineConfig;
pub use engine::PanelRuleEngine;
pub use event::PanelEvent;
pub use rules::{merge_risk_assessments, CheckboxGate, ShippingAviationDecision};
pub use services::{LegalBasisComparator, RiskAssessmentCatalog, ScreenModeProvider};
pub use static_services::{StaticLegalBasisComparator, StaticRiskCatalog, ViewParams};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::PanelRuleEngine;
    pub use crate::event::PanelEvent;
    pub use crate::services::{LegalBasisComparator, RiskAssessmentCatalog, ScreenModeProvider};
}
