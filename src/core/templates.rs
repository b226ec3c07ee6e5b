//! Fixed prompt templates and their rendering.
//!
//! Each template is a constant string with `{name}` substitution points.
//! Rendering substitutes every point from a parameter map and fails if a
//! required field is absent; nothing is silently dropped or truncated.

use std::collections::HashMap;

use crate::error::DispatchError;
use crate::models::{PatientProfile, TemplateKind, VitalsRecord};

pub const CHAT_TEMPLATE: &str = "You are a healthcare assistant. Answer the following question:\n\
     Question: {question}\n\
     Answer:";

pub const RISK_ASSESSMENT_TEMPLATE: &str =
    "Based on the following patient data, list possible disease risks:\n\
     Age: {age}\n\
     Gender: {gender}\n\
     Medical History: {medical_history}\n\
     Recent Vitals:\n{recent_vitals}\n\n\
     Assessment:";

pub const TREATMENT_PLAN_TEMPLATE: &str =
    "Provide a detailed yet easy-to-understand treatment plan for {condition} in a patient \
     who is {age} years old {gender} with this history: {medical_history}";

pub const SUMMARY_TEMPLATE: &str =
    "Summarize the following latest patient vitals and highlight any concerns:\n\
     Date: {date}\n\
     Heart Rate: {heart_rate} bpm\n\
     Blood Pressure: {systolic_bp}/{diastolic_bp} mmHg\n\
     Blood Glucose: {blood_glucose} mg/dL\n\
     Previous Blood Glucose: {previous_blood_glucose} mg/dL";

/// How many trailing vitals records the risk-assessment table embeds.
const RECENT_VITALS_WINDOW: usize = 3;

pub fn template_for(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Chat => CHAT_TEMPLATE,
        TemplateKind::RiskAssessment => RISK_ASSESSMENT_TEMPLATE,
        TemplateKind::TreatmentPlan => TREATMENT_PLAN_TEMPLATE,
        TemplateKind::Summary => SUMMARY_TEMPLATE,
    }
}

/// Substitute every `{name}` point in the template for `kind` from
/// `parameters`. Extra parameters are ignored; a missing one aborts the
/// render with the offending field name.
pub fn render(
    kind: TemplateKind,
    parameters: &HashMap<String, String>,
) -> Result<String, DispatchError> {
    let template = template_for(kind);
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let field = &after[..end];
                match parameters.get(field) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(DispatchError::Template {
                            kind,
                            field: field.to_string(),
                        })
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated brace: emit literally. Our templates never
                // contain one, so this only guards future template edits.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// Flatten the read-only patient snapshot into named template parameters.
///
/// Request-supplied parameters are merged over these by the dispatcher, so
/// every template kind renders through the same substitution path. An empty
/// vitals sequence simply yields no vitals-derived fields; templates that
/// need them then fail field-by-field at render time.
pub fn context_parameters(
    profile: &PatientProfile,
    vitals: &[VitalsRecord],
) -> HashMap<String, String> {
    let mut parameters = HashMap::new();
    parameters.insert("age".to_string(), profile.age.to_string());
    parameters.insert("gender".to_string(), profile.gender.clone());
    parameters.insert(
        "medical_history".to_string(),
        profile.medical_history.clone(),
    );

    let window_start = vitals.len().saturating_sub(RECENT_VITALS_WINDOW);
    parameters.insert(
        "recent_vitals".to_string(),
        format_vitals_table(&vitals[window_start..]),
    );

    if let Some(latest) = vitals.last() {
        // With fewer than two records the latest glucose doubles as the
        // previous one. Intentional fallback, not an error.
        let previous_glucose = if vitals.len() >= 2 {
            vitals[vitals.len() - 2].blood_glucose
        } else {
            latest.blood_glucose
        };

        parameters.insert("date".to_string(), latest.date.format("%Y-%m-%d").to_string());
        parameters.insert("heart_rate".to_string(), latest.heart_rate.to_string());
        parameters.insert("systolic_bp".to_string(), latest.systolic_bp.to_string());
        parameters.insert("diastolic_bp".to_string(), latest.diastolic_bp.to_string());
        parameters.insert("blood_glucose".to_string(), latest.blood_glucose.to_string());
        parameters.insert(
            "previous_blood_glucose".to_string(),
            previous_glucose.to_string(),
        );
    }

    parameters
}

/// Whitespace-aligned table of vitals records, oldest first, header row
/// included. Embedded verbatim in the risk-assessment prompt.
pub fn format_vitals_table(records: &[VitalsRecord]) -> String {
    let mut table = format!(
        "{:>10}  {:>10}  {:>11}  {:>12}  {:>13}",
        "Date", "Heart Rate", "Systolic BP", "Diastolic BP", "Blood Glucose"
    );
    for record in records {
        table.push('\n');
        table.push_str(&format!(
            "{:>10}  {:>10}  {:>11}  {:>12}  {:>13}",
            record.date.format("%Y-%m-%d"),
            record.heart_rate,
            record.systolic_bp,
            record.diastolic_bp,
            record.blood_glucose
        ));
    }
    table
}
