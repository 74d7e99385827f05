//! YAML scenarios replayed against the panel rule engine

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use taxpanel_core::{Declaration, Result, ScreenMode};
use taxpanel_rules::{
    EngineConfig, PanelEvent, PanelRuleEngine, StaticLegalBasisComparator, StaticRiskCatalog,
    ViewParams,
};
use tracing::info;

/// Bundled example scenario
pub const SAMPLE_SCENARIO: &str = include_str!("../scenarios/shipping_relief.yaml");

/// A declaration plus the collaborator tables and UI steps to replay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Initial screen mode
    #[serde(default)]
    pub screen_mode: ScreenMode,

    #[serde(default)]
    pub config: EngineConfig,

    #[serde(default)]
    pub catalog: StaticRiskCatalog,

    #[serde(default)]
    pub comparator: StaticLegalBasisComparator,

    pub declaration: Declaration,

    /// Steps applied in order
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One user interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Open the panel
    Open,

    /// Toggle the risk flag to the given value
    SetRisk { risk: bool },

    /// Switch the screen mode without re-running rules
    SetMode { mode: ScreenMode },
}

impl Scenario {
    /// Parse a scenario from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a scenario from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Replay all steps and return the resulting declaration
    ///
    /// Stops at the first failing step.
    pub fn run(self) -> Result<Declaration> {
        let view_params = Arc::new(ViewParams::new(self.screen_mode));
        let engine = PanelRuleEngine::new(
            Arc::new(self.catalog),
            Arc::new(self.comparator),
            view_params.clone(),
        )
        .with_config(self.config);

        let mut declaration = self.declaration;

        for (index, step) in self.steps.iter().enumerate() {
            info!(step = index, ?step, "Applying scenario step");

            match *step {
                Step::Open => engine.handle(PanelEvent::Open, &mut declaration)?,
                Step::SetRisk { risk } => {
                    declaration.risk = risk;
                    engine.handle(PanelEvent::RiskChanged, &mut declaration)?;
                }
                Step::SetMode { mode } => view_params.set_mode(mode),
            }
        }

        Ok(declaration)
    }
}
