use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The four fixed prompt shapes the assistant knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Chat,
    RiskAssessment,
    TreatmentPlan,
    Summary,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateKind::Chat => "chat",
            TemplateKind::RiskAssessment => "risk_assessment",
            TemplateKind::TreatmentPlan => "treatment_plan",
            TemplateKind::Summary => "summary",
        };
        f.write_str(name)
    }
}

/// One user action's worth of prompt input. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub kind: TemplateKind,
    pub parameters: HashMap<String, String>,
}

impl PromptRequest {
    pub fn new(kind: TemplateKind) -> Self {
        Self {
            kind,
            parameters: HashMap::new(),
        }
    }

    /// Free-form health question pass-through.
    pub fn chat(question: &str) -> Self {
        Self::new(TemplateKind::Chat).with_parameter("question", question)
    }

    /// Disease-risk narrative over the patient's profile and recent vitals.
    pub fn risk_assessment() -> Self {
        Self::new(TemplateKind::RiskAssessment)
    }

    /// Treatment plan for a user-supplied condition.
    pub fn treatment_plan(condition: &str) -> Self {
        Self::new(TemplateKind::TreatmentPlan).with_parameter("condition", condition)
    }

    /// Narrative summary of the latest vitals record.
    pub fn summary() -> Self {
        Self::new(TemplateKind::Summary)
    }

    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.parameters.insert(name.to_string(), value.to_string());
        self
    }
}

/// The first completion returned by the generation backend.
/// Ephemeral; discarded after display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedResponse {
    pub text: String,
}
