//! Data model for the HealthAI assistant.

pub mod patient;
pub mod request;

pub use patient::{PatientProfile, VitalsRecord};
pub use request::{GeneratedResponse, PromptRequest, TemplateKind};
