//! Taxpanel Core
//!
//! Core types and error handling shared by the completion-of-processing
//! panel crates.
//!
//! This crate provides:
//! - The declaration model and its nested panel state
//! - Screen modes, case types, and legal basis identifiers
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    BasicData, CaseContext, CaseType, CompletionOfProcessingPanel, Declaration, LegalBasis,
    OverviewTaxAssessment, ScreenMode, TaxDeclarationOverview,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        CaseContext, CaseType, CompletionOfProcessingPanel, Declaration, LegalBasis, ScreenMode,
        TaxDeclarationOverview,
    };
}
