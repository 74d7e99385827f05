//! Declaration model for the completion-of-processing panel

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Screen operation mode supplied by the surrounding view parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreenMode {
    /// Regular editing
    #[default]
    Standard,
    /// Viewing a historized version of the declaration
    Historization,
    /// Read-only display
    Display,
    /// Correction of an already completed declaration
    Correction,
}

impl ScreenMode {
    /// Whether the panel may be edited in this mode
    pub fn is_standard(&self) -> bool {
        matches!(self, Self::Standard)
    }
}

impl fmt::Display for ScreenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Standard => "STANDARD",
            Self::Historization => "HISTORIZATION",
            Self::Display => "DISPLAY",
            Self::Correction => "CORRECTION",
        };
        f.write_str(s)
    }
}

impl FromStr for ScreenMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(Self::Standard),
            "HISTORIZATION" => Ok(Self::Historization),
            "DISPLAY" => Ok(Self::Display),
            "CORRECTION" => Ok(Self::Correction),
            other => Err(format!("unknown screen mode: {}", other)),
        }
    }
}

/// Kind of case the declaration belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseType {
    /// Regular energy tax declaration
    #[default]
    #[serde(rename = "TAX_DECLARATION_1100")]
    TaxDeclaration1100,
    /// Annual energy tax declaration
    #[serde(rename = "TAX_DECLARATION_1101")]
    TaxDeclaration1101,
    /// Correction of a previously assessed declaration
    Correction,
}

/// Identifier pair naming the statutory provision of an overview line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct LegalBasis {
    /// Legal basis identifier
    pub id: i64,

    /// Additional identifier qualifying the legal basis
    pub addition_id: i64,
}

impl LegalBasis {
    /// Create a new legal basis pair
    pub fn new(id: i64, addition_id: i64) -> Self {
        Self { id, addition_id }
    }
}

impl fmt::Display for LegalBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.id, self.addition_id)
    }
}

/// One line of the tax assessment overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TaxDeclarationOverview {
    /// Legal basis governing this line
    pub legal_basis: LegalBasis,

    /// Amount already finalized for this line; zero means fully settled
    #[serde(default)]
    pub assessed_total: Decimal,
}

impl TaxDeclarationOverview {
    /// Create a new overview line
    pub fn new(legal_basis: LegalBasis, assessed_total: Decimal) -> Self {
        Self {
            legal_basis,
            assessed_total,
        }
    }

    /// Whether the assessed total is non-zero, independent of sign
    pub fn is_open(&self) -> bool {
        !self.assessed_total.is_zero()
    }
}

/// Shipping or aviation tax relief selection shown on the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OverviewTaxAssessment {
    /// Whether the shipping/aviation relief selection is shown
    #[serde(default)]
    pub is_selection_shipping_aviation: bool,

    /// Selected shipping/aviation relief options
    #[serde(default)]
    pub selection_tax_relief_for_shipping_or_aviation: BTreeSet<String>,
}

impl OverviewTaxAssessment {
    /// Hide the selection and discard any chosen options
    pub fn reset(&mut self) {
        self.is_selection_shipping_aviation = false;
        self.selection_tax_relief_for_shipping_or_aviation.clear();
    }
}

/// Derived UI state of the completion-of-processing panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompletionOfProcessingPanel {
    /// Whether the risk assessment checkbox can be edited
    #[serde(default)]
    pub risk_assessment_checkbox_enabled: bool,

    /// Whether the risk assessment checkbox must be filled in
    #[serde(default)]
    pub risk_assessment_checkbox_required: bool,

    /// Shipping/aviation relief selection state
    #[serde(default)]
    pub overview_tax_assessment: OverviewTaxAssessment,
}

/// Case metadata of a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BasicData {
    /// Case type
    #[serde(default)]
    pub case_type: CaseType,
}

/// Aggregate tax declaration under edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Case metadata
    #[serde(default)]
    pub basic_data: BasicData,

    /// Tax assessment overview lines
    #[serde(default)]
    pub tax_declaration_overviews: Vec<TaxDeclarationOverview>,

    /// Whether the case is subject to risk assessment
    #[serde(default)]
    pub risk: bool,

    /// Risk assessment labels chosen for this case
    #[serde(default)]
    pub risk_assessment: BTreeSet<String>,

    /// Risk assessment labels offered for selection
    #[serde(default)]
    pub all_risk_assessments: BTreeSet<String>,

    /// Completion-of-processing panel state, absent until the panel is first opened
    #[serde(default)]
    pub completion_of_processing: Option<CompletionOfProcessingPanel>,

    /// Whether the completion-of-processing step is enabled for this case
    #[serde(default = "default_true")]
    pub module_enabled: bool,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            basic_data: BasicData::default(),
            tax_declaration_overviews: Vec::new(),
            risk: false,
            risk_assessment: BTreeSet::new(),
            all_risk_assessments: BTreeSet::new(),
            completion_of_processing: None,
            module_enabled: true,
        }
    }
}

impl Declaration {
    /// Create a new declaration for the given case type
    pub fn new(case_type: CaseType) -> Self {
        Self {
            basic_data: BasicData { case_type },
            ..Default::default()
        }
    }

    /// Attach a fresh completion-of-processing panel state
    pub fn with_panel(mut self) -> Self {
        self.completion_of_processing = Some(CompletionOfProcessingPanel::default());
        self
    }

    /// Set the risk flag
    pub fn with_risk(mut self, risk: bool) -> Self {
        self.risk = risk;
        self
    }

    /// Set the chosen risk assessment labels
    pub fn with_risk_assessment<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.risk_assessment = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Append an overview line
    pub fn with_overview(mut self, overview: TaxDeclarationOverview) -> Self {
        self.tax_declaration_overviews.push(overview);
        self
    }

    /// The first overview line, which governs the shipping/aviation rule
    pub fn first_overview(&self) -> Option<&TaxDeclarationOverview> {
        self.tax_declaration_overviews.first()
    }

    /// Panel state, created on first access
    pub fn panel_mut(&mut self) -> &mut CompletionOfProcessingPanel {
        self.completion_of_processing.get_or_insert_with(Default::default)
    }

    /// Key used to look up case-specific catalog data
    pub fn case_context(&self) -> CaseContext {
        CaseContext {
            case_type: self.basic_data.case_type,
            legal_basis: self.first_overview().map(|o| o.legal_basis),
        }
    }
}

/// Case metadata passed to catalog lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseContext {
    pub case_type: CaseType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_basis: Option<LegalBasis>,
}

fn default_true() -> bool {
    true
}
