use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient demographics and history, captured once at startup and
/// treated as read-only by every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfile {
    pub age: u32,
    pub gender: String,
    pub medical_history: String,
}

/// One dated snapshot of a patient's measured health metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsRecord {
    pub date: NaiveDate,
    pub heart_rate: f64,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub blood_glucose: f64,
}
