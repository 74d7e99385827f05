//! Panel lifecycle events

use serde::{Deserialize, Serialize};

/// UI event delivered by the panel lifecycle controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum PanelEvent {
    /// The completion-of-processing panel was opened
    Open,

    /// The user toggled the risk flag; the declaration already holds the new value
    RiskChanged,
}

impl PanelEvent {
    /// Short name used in logs and metric labels
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::RiskChanged => "risk_changed",
        }
    }
}
